//! Pointer state for orbiting the 3D surfaces and choosing the cursor.
//!
//! The event handler calls into this module on cursor movement, button
//! and wheel events.

use winit::event::{MouseButton, MouseScrollDelta};
use winit::window::CursorIcon;

use folio_common::{HitRegion, SurfaceId};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// An orbit drag in progress over one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDrag {
    pub surface: SurfaceId,
    pub mode: DragMode,
    /// Pointer position at the previous event, logical pixels.
    pub last: (f32, f32),
}

impl OrbitDrag {
    /// Pointer movement since the previous event; records `pos`.
    pub fn advance(&mut self, pos: (f32, f32)) -> (f32, f32) {
        let delta = (pos.0 - self.last.0, pos.1 - self.last.1);
        self.last = pos;
        delta
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    None,
    Clickable,
    Surface,
    Dragging,
}

impl CursorZone {
    pub fn icon(self) -> CursorIcon {
        match self {
            CursorZone::None => CursorIcon::Default,
            CursorZone::Clickable => CursorIcon::Pointer,
            CursorZone::Surface => CursorIcon::Grab,
            CursorZone::Dragging => CursorIcon::Grabbing,
        }
    }
}

/// One wheel event, normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelScroll {
    /// Notches, positive when the wheel turns away from the user.
    Lines(f32),
    /// Logical pixels, positive when the content should move down.
    Pixels(f32),
}

impl WheelScroll {
    /// Zoom steps for an orbit camera; a pixel delta of `line_px` is one step.
    pub fn zoom_steps(self, line_px: f32) -> f32 {
        match self {
            WheelScroll::Lines(n) => n,
            WheelScroll::Pixels(p) => p / line_px.max(1.0),
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Drag mode for a button press. Shift or the right button pans.
pub fn drag_mode(button: MouseButton, shift: bool) -> Option<DragMode> {
    match button {
        MouseButton::Left if shift => Some(DragMode::Pan),
        MouseButton::Left => Some(DragMode::Rotate),
        MouseButton::Right => Some(DragMode::Pan),
        _ => None,
    }
}

pub fn cursor_zone(hit: Option<&HitRegion>, over_surface: bool, dragging: bool) -> CursorZone {
    if dragging {
        return CursorZone::Dragging;
    }
    match hit {
        Some(h) if h.action.is_interactive() => CursorZone::Clickable,
        _ if over_surface => CursorZone::Surface,
        _ => CursorZone::None,
    }
}

/// Normalizes a winit wheel delta. `scale` converts physical to logical
/// pixels.
pub fn wheel_scroll(delta: MouseScrollDelta, scale: f64) -> WheelScroll {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => WheelScroll::Lines(y),
        MouseScrollDelta::PixelDelta(pos) => {
            let scale = if scale > 0.0 { scale } else { 1.0 };
            WheelScroll::Pixels((pos.y / scale) as f32)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::{Action, Rect, SectionId};
    use winit::dpi::PhysicalPosition;

    #[test]
    fn drag_advance_reports_delta() {
        let mut drag = OrbitDrag {
            surface: SurfaceId::Playground,
            mode: DragMode::Rotate,
            last: (10.0, 10.0),
        };
        assert_eq!(drag.advance((15.0, 7.0)), (5.0, -3.0));
        assert_eq!(drag.last, (15.0, 7.0));
        assert_eq!(drag.advance((15.0, 7.0)), (0.0, 0.0));
    }

    #[test]
    fn drag_modes() {
        assert_eq!(drag_mode(MouseButton::Left, false), Some(DragMode::Rotate));
        assert_eq!(drag_mode(MouseButton::Left, true), Some(DragMode::Pan));
        assert_eq!(drag_mode(MouseButton::Right, false), Some(DragMode::Pan));
        assert_eq!(drag_mode(MouseButton::Middle, false), None);
    }

    #[test]
    fn cursor_zone_priority() {
        let link = HitRegion {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            action: Action::ScrollToSection(SectionId::About),
        };
        let inert = HitRegion {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            action: Action::None,
        };
        assert_eq!(cursor_zone(Some(&link), true, false), CursorZone::Clickable);
        assert_eq!(cursor_zone(Some(&inert), true, false), CursorZone::Surface);
        assert_eq!(cursor_zone(None, false, false), CursorZone::None);
        assert_eq!(cursor_zone(Some(&link), true, true), CursorZone::Dragging);
        assert_eq!(CursorZone::Clickable.icon(), CursorIcon::Pointer);
    }

    #[test]
    fn wheel_deltas() {
        assert_eq!(
            wheel_scroll(MouseScrollDelta::LineDelta(0.0, 2.0), 2.0),
            WheelScroll::Lines(2.0)
        );
        let px = wheel_scroll(
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 120.0)),
            2.0,
        );
        assert_eq!(px, WheelScroll::Pixels(60.0));
        assert_eq!(px.zoom_steps(60.0), 1.0);
        assert_eq!(WheelScroll::Lines(-1.0).zoom_steps(60.0), -1.0);
    }
}
