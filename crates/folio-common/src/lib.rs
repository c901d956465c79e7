pub mod actions;
pub mod draw;
pub mod errors;
pub mod notifications;
pub mod types;

pub use actions::Action;
pub use draw::{DrawList, DrawQuad, DrawText, Fill, HitRegion, Layer, SurfaceSlot, TextAlign};
pub use errors::{ConfigError, PlatformError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{
    Color, FormField, QuickActionKind, Rect, SceneId, SectionId, SurfaceId,
};
