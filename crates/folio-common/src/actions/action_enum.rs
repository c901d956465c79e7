use serde::{Deserialize, Serialize};

use crate::types::{FormField, QuickActionKind, SceneId, SectionId};

/// Every user-triggerable action in the application.
///
/// Clicks on hit regions, keyboard shortcuts, and CLI overrides all resolve
/// to an `Action`. The app state dispatcher matches on this enum to route to
/// the owning view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Navigation --
    ScrollToSection(SectionId),
    ScrollToTop,
    PageUp,
    PageDown,

    // -- Playground --
    SelectScene(SceneId),

    // -- Contact --
    FocusField(FormField),
    FocusNextField,
    FocusPrevField,
    SubmitContact,
    QuickAction(QuickActionKind),

    // -- Links --
    OpenLink(String),

    // -- Window --
    ToggleFullscreen,
    Quit,

    // -- Config --
    ReloadConfig,

    // -- Noop --
    None,
}
