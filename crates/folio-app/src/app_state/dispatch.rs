//! Action dispatch: routes an `Action` to the page, window or config.

use winit::window::Fullscreen;

use folio_common::{Action, Notification};
use folio_ui::content::is_placeholder_link;

use super::core::FolioApp;
use crate::clipboard::Clipboard;

impl FolioApp {
    /// Dispatch a resolved action.
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::ScrollToSection(section) => self.page.scroll_to_section(section),
            Action::ScrollToTop => self.page.scroll_to_top(),
            Action::PageUp => self.page.page_up(),
            Action::PageDown => self.page.page_down(),

            Action::SelectScene(scene) => {
                if self.page.select_scene(scene) {
                    tracing::info!(%scene, "scene selected");
                }
            }

            Action::FocusField(field) => self.page.focus_field(field),
            Action::FocusNextField => self.page.focus_next_field(),
            Action::FocusPrevField => self.page.focus_prev_field(),
            Action::SubmitContact => {
                if let Err(e) = self.page.submit_contact() {
                    tracing::debug!("contact form rejected: {e}");
                }
            }
            Action::QuickAction(kind) => self.page.quick_action(kind),

            Action::OpenLink(href) => self.open_link(&href),

            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }

            Action::ReloadConfig => self.reload_config(),

            Action::None => {}
        }
    }

    /// Copies a link to the clipboard. Placeholder links only get a toast.
    fn open_link(&mut self, href: &str) {
        if is_placeholder_link(href) {
            self.page.notify(Notification::info(
                "Coming Soon",
                "This link isn't available yet.",
            ));
            return;
        }

        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => tracing::warn!("Clipboard unavailable: {e}"),
            }
        }

        let copied = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(href),
            None => {
                self.page
                    .notify(Notification::warning("Link", href.to_string()));
                return;
            }
        };
        match copied {
            Ok(()) => {
                tracing::debug!(href, "link copied");
                self.page
                    .notify(Notification::success("Link Copied", href.to_string()));
            }
            Err(e) => {
                tracing::warn!("Failed to copy link: {e}");
                self.page
                    .notify(Notification::error("Copy Failed", href.to_string()));
            }
        }
    }

    fn toggle_fullscreen(&mut self) {
        if let Some(ref w) = self.window {
            let next = match w.fullscreen() {
                Some(_) => None,
                None => Some(Fullscreen::Borderless(None)),
            };
            tracing::debug!(fullscreen = next.is_some(), "toggle fullscreen");
            w.set_fullscreen(next);
        }
    }
}
