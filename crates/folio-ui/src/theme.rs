//! Resolved colours and type scale for the page.

use folio_common::{Color, Fill};
use folio_config::schema::FontConfig;
use folio_config::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    /// Base font size in pixels.
    pub base: f32,
    /// Line height multiplier for body text.
    pub line_height: f32,
}

impl Theme {
    pub fn new(palette: Palette, font: &FontConfig) -> Self {
        Self {
            palette,
            base: font.size as f32,
            line_height: font.line_height as f32,
        }
    }

    /// Font size `rem` times the base size.
    pub fn rem(&self, rem: f32) -> f32 {
        self.base * rem
    }

    /// Primary to accent, used for highlighted headings and primary buttons.
    pub fn gradient(&self) -> Fill {
        Fill::Horizontal(self.palette.primary, self.palette.accent)
    }

    /// Card background: a faint diagonal from surface to secondary,
    /// approximated as a horizontal blend.
    pub fn card_fill(&self) -> Fill {
        Fill::Horizontal(self.palette.surface, self.palette.secondary.fade(0.6))
    }

    pub fn card_border(&self) -> Color {
        self.palette.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), &FontConfig::default())
    }
}
