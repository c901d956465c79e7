//! Per-frame draw list produced by the page layout and consumed by the renderer.
//!
//! Everything is in logical pixels relative to the window's top-left corner.
//! Items are drawn in two layers. `Base` holds page content; 3D surfaces are
//! composited after base quads and before base text. `Overlay` holds the
//! navigation bar and toasts and is drawn last.

use crate::actions::Action;
use crate::types::{Color, Rect, SurfaceId};

/// Text blocks are kept this far above the visible area since their wrapped
/// height is only known after shaping.
const TEXT_CULL_MARGIN: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    Overlay,
}

/// How a quad is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Left-to-right gradient.
    Horizontal(Color, Color),
}

impl Fill {
    pub fn endpoints(&self) -> (Color, Color) {
        match *self {
            Fill::Solid(c) => (c, c),
            Fill::Horizontal(a, b) => (a, b),
        }
    }

    pub fn fade(self, factor: f32) -> Fill {
        match self {
            Fill::Solid(c) => Fill::Solid(c.fade(factor)),
            Fill::Horizontal(a, b) => Fill::Horizontal(a.fade(factor), b.fade(factor)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawQuad {
    pub rect: Rect,
    pub fill: Fill,
    /// Corner radius in pixels.
    pub radius: f32,
    /// Border width in pixels; zero draws a filled quad.
    pub border: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Wrap width. `None` lays the text out on a single unbounded line.
    pub width: Option<f32>,
    pub size: f32,
    pub line_height: f32,
    pub color: Color,
    pub bold: bool,
    pub mono: bool,
    pub align: TextAlign,
}

impl DrawText {
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: None,
            size,
            line_height: size * 1.4,
            color,
            bold: false,
            mono: false,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }

    pub fn wrap(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}

/// Placement of an embedded 3D surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSlot {
    pub id: SurfaceId,
    pub rect: Rect,
}

/// A clickable area and the action it triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub rect: Rect,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub base_quads: Vec<DrawQuad>,
    pub overlay_quads: Vec<DrawQuad>,
    pub base_text: Vec<DrawText>,
    pub overlay_text: Vec<DrawText>,
    pub surfaces: Vec<SurfaceSlot>,
    pub hits: Vec<HitRegion>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.base_quads.clear();
        self.overlay_quads.clear();
        self.base_text.clear();
        self.overlay_text.clear();
        self.surfaces.clear();
        self.hits.clear();
    }

    pub fn quad(&mut self, layer: Layer, rect: Rect, fill: Fill, radius: f32) {
        self.push_quad(
            layer,
            DrawQuad {
                rect,
                fill,
                radius,
                border: 0.0,
            },
        );
    }

    pub fn outline(&mut self, layer: Layer, rect: Rect, color: Color, radius: f32, border: f32) {
        self.push_quad(
            layer,
            DrawQuad {
                rect,
                fill: Fill::Solid(color),
                radius,
                border,
            },
        );
    }

    pub fn push_quad(&mut self, layer: Layer, quad: DrawQuad) {
        if quad.rect.width <= 0.0 || quad.rect.height <= 0.0 {
            return;
        }
        match layer {
            Layer::Base => self.base_quads.push(quad),
            Layer::Overlay => self.overlay_quads.push(quad),
        }
    }

    pub fn text(&mut self, layer: Layer, text: DrawText) {
        if text.text.is_empty() || text.color.a == 0 {
            return;
        }
        match layer {
            Layer::Base => self.base_text.push(text),
            Layer::Overlay => self.overlay_text.push(text),
        }
    }

    pub fn surface(&mut self, id: SurfaceId, rect: Rect) {
        self.surfaces.push(SurfaceSlot { id, rect });
    }

    pub fn hit(&mut self, rect: Rect, action: Action) {
        self.hits.push(HitRegion { rect, action });
    }

    /// Returns the topmost region under the point. Later regions win.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&HitRegion> {
        self.hits.iter().rev().find(|h| h.rect.contains(x, y))
    }

    /// Removes everything outside `bounds`: quads, text and surfaces
    /// entirely outside are dropped, hit regions are clipped.
    pub fn cull(&mut self, bounds: Rect) {
        self.base_quads.retain(|q| q.rect.intersects(&bounds));
        self.surfaces.retain(|s| s.rect.intersects(&bounds));
        self.base_text
            .retain(|t| t.y < bounds.bottom() && t.y + TEXT_CULL_MARGIN > bounds.y);
        self.hits.retain_mut(|h| match h.rect.intersection(&bounds) {
            Some(r) => {
                h.rect = r;
                true
            }
            None => false,
        });
    }
}
