//! Page layout and view state for folio.
//!
//! The [`Page`] owns every view (hero typewriter, playground scene, contact
//! form, toasts, scroll position) and turns them into a
//! [`folio_common::DrawList`] each frame. Nothing here touches the GPU.

pub mod content;
pub mod form;
pub mod layout;
pub mod motion;
mod page;
mod sections;
pub mod theme;

pub use form::{ContactForm, EnterOutcome, FormError};
pub use layout::SmoothScroll;
pub use motion::{Reveal, RevealStyle, RevealTracker, Typewriter};
pub use page::Page;
pub use theme::Theme;
