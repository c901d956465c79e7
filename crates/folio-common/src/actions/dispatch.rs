use super::Action;
use crate::types::{QuickActionKind, SceneId, SectionId};

impl Action {
    /// Short human-readable label, used in logs and hover hints.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ScrollToSection(SectionId::Home) => "Go to Home",
            Action::ScrollToSection(SectionId::About) => "Go to About",
            Action::ScrollToSection(SectionId::Projects) => "Go to Projects",
            Action::ScrollToSection(SectionId::Skills) => "Go to Skills",
            Action::ScrollToSection(SectionId::Playground) => "Go to Playground",
            Action::ScrollToSection(SectionId::Contact) => "Go to Contact",
            Action::ScrollToTop => "Scroll to Top",
            Action::PageUp => "Page Up",
            Action::PageDown => "Page Down",
            Action::SelectScene(SceneId::Text) => "Show Text Scene",
            Action::SelectScene(SceneId::Spheres) => "Show Spheres Scene",
            Action::SelectScene(SceneId::Geometry) => "Show Geometry Scene",
            Action::FocusField(_) => "Focus Field",
            Action::FocusNextField => "Next Field",
            Action::FocusPrevField => "Previous Field",
            Action::SubmitContact => "Send Message",
            Action::QuickAction(QuickActionKind::ScheduleCall) => "Schedule a Call",
            Action::QuickAction(QuickActionKind::DownloadCv) => "Download CV",
            Action::QuickAction(QuickActionKind::QuickChat) => "Quick Chat",
            Action::OpenLink(_) => "Open Link",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::ReloadConfig => "Reload Config",
            Action::None => "None",
        }
    }

    /// Whether activating this action should show a pointer cursor.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Action::None)
    }
}
