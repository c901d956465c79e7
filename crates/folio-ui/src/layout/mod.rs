//! Page layout primitives.
//!
//! Sections are laid out top to bottom in document coordinates (y grows
//! down from the top of the page). [`Painter`] converts to window
//! coordinates by subtracting the scroll offset as items are emitted.

pub mod metrics;
mod scroll;

pub use scroll::SmoothScroll;

use folio_common::{Action, Color, DrawList, DrawText, Fill, Layer, Rect, TextAlign};

use crate::motion::{Reveal, RevealKey, RevealStyle, RevealTracker};
use crate::theme::Theme;
use metrics::text_width;

/// Emits draw items for one frame.
pub struct Painter<'a> {
    pub list: &'a mut DrawList,
    pub theme: &'a Theme,
    pub reveal: &'a mut RevealTracker,
    /// Scroll offset in pixels.
    pub scroll: f32,
    pub width: f32,
    pub height: f32,
    /// Page clock in seconds.
    pub now: f32,
    /// Delay between consecutive items in a list.
    pub stagger: f32,
    /// Pointer position in window coordinates.
    pub pointer: Option<(f32, f32)>,
}

impl Painter<'_> {
    /// The visible part of the page in document coordinates.
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, self.width, self.height)
    }

    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translated(0.0, -self.scroll)
    }

    pub fn reveal(&mut self, key: RevealKey, rect: Rect, delay: f32, style: RevealStyle) -> Reveal {
        let viewport = self.viewport();
        self.reveal.reveal(key, rect, viewport, self.now, delay, style)
    }

    pub fn reveal_for(
        &mut self,
        key: RevealKey,
        rect: Rect,
        delay: f32,
        duration: f32,
        style: RevealStyle,
    ) -> Reveal {
        let viewport = self.viewport();
        self.reveal
            .reveal_for(key, rect, viewport, self.now, delay, duration, style)
    }

    /// Whether the pointer is over `rect` (document coordinates).
    pub fn hovered(&self, rect: Rect) -> bool {
        let screen = self.to_screen(rect);
        self.pointer.is_some_and(|(x, y)| screen.contains(x, y))
    }

    pub fn quad(&mut self, rect: Rect, fill: Fill, radius: f32, rv: &Reveal) {
        let r = self.to_screen(rv.apply(rect));
        self.list.quad(Layer::Base, r, fill.fade(rv.opacity), radius * rv.scale);
    }

    pub fn outline(&mut self, rect: Rect, color: Color, radius: f32, border: f32, rv: &Reveal) {
        let r = self.to_screen(rv.apply(rect));
        self.list
            .outline(Layer::Base, r, color.fade(rv.opacity), radius * rv.scale, border);
    }

    /// Rounded card with a hairline border. Hovered cards glow.
    pub fn card(&mut self, rect: Rect, rv: &Reveal) {
        let fill = self.theme.card_fill();
        self.quad(rect, fill, 12.0, rv);
        let border = if self.hovered(rect) {
            self.theme.palette.primary.fade(0.5)
        } else {
            self.theme.card_border()
        };
        self.outline(rect, border, 12.0, 1.0, rv);
    }

    /// Places `text` (document coordinates) with the reveal applied.
    pub fn text(&mut self, mut text: DrawText, rv: &Reveal) {
        if rv.scale != 1.0 {
            // Scale about the block's anchor line.
            let w = text.width.unwrap_or(0.0);
            text.x += w * (1.0 - rv.scale) * 0.5;
            text.size *= rv.scale;
            text.line_height *= rv.scale;
            text.width = text.width.map(|w| w * rv.scale);
        }
        text.x += rv.dx;
        text.y += rv.dy - self.scroll;
        text.color = text.color.fade(rv.opacity);
        self.list.text(Layer::Base, text);
    }

    /// Registers a clickable area given in document coordinates.
    pub fn hit(&mut self, rect: Rect, action: Action) {
        let r = self.to_screen(rect);
        self.list.hit(r, action);
    }

    /// Body text block in the muted colour. Returns its height.
    pub fn paragraph(&mut self, text: &str, x: f32, y: f32, width: f32, size: f32, rv: &Reveal) -> f32 {
        let line_height = size * self.theme.line_height;
        let block = DrawText::new(text, x, y, size, self.theme.palette.text_muted)
            .wrap(width)
            .line_height(line_height);
        self.text(block, rv);
        metrics::text_height(text, size, line_height, width)
    }

    /// Centred paragraph. Returns its height.
    pub fn lead(&mut self, text: &str, x: f32, y: f32, width: f32, size: f32, rv: &Reveal) -> f32 {
        let line_height = size * self.theme.line_height;
        let block = DrawText::new(text, x, y, size, self.theme.palette.text_muted)
            .wrap(width)
            .line_height(line_height)
            .align(TextAlign::Center);
        self.text(block, rv);
        metrics::text_height(text, size, line_height, width)
    }

    /// Two-tone heading, the second part in the primary colour, centred on
    /// `center_x`. Returns its height.
    pub fn split_heading(
        &mut self,
        plain: &str,
        highlight: &str,
        center_x: f32,
        y: f32,
        size: f32,
        rv: &Reveal,
    ) -> f32 {
        let w_plain = text_width(plain, size, false);
        let w_high = text_width(highlight, size, false);
        let x = center_x - (w_plain + w_high) * 0.5;
        let palette = self.theme.palette;
        self.text(DrawText::new(plain, x, y, size, palette.text).bold(), rv);
        self.text(
            DrawText::new(highlight, x + w_plain, y, size, palette.primary).bold(),
            rv,
        );
        size * 1.2
    }

    /// Small pill with a label. Returns its width.
    pub fn badge(&mut self, x: f32, y: f32, label: &str, style: BadgeStyle, rv: &Reveal) -> f32 {
        let size = self.theme.rem(0.75);
        let w = text_width(label, size, false) + 20.0;
        let rect = Rect::new(x, y, w, BADGE_HEIGHT);
        let palette = self.theme.palette;
        let text_color = match style {
            BadgeStyle::Filled(fill) => {
                self.quad(rect, fill, BADGE_HEIGHT * 0.5, rv);
                Color::WHITE
            }
            BadgeStyle::Secondary => {
                self.quad(rect, Fill::Solid(palette.secondary), BADGE_HEIGHT * 0.5, rv);
                palette.text
            }
            BadgeStyle::Outline => {
                let fill = if self.hovered(rect) {
                    palette.primary
                } else {
                    palette.primary.fade(0.1)
                };
                self.quad(rect, Fill::Solid(fill), BADGE_HEIGHT * 0.5, rv);
                self.outline(rect, palette.primary.fade(0.3), BADGE_HEIGHT * 0.5, 1.0, rv);
                if self.hovered(rect) {
                    palette.text
                } else {
                    palette.primary
                }
            }
        };
        self.text(
            DrawText::new(label, x + 10.0, y + (BADGE_HEIGHT - size * 1.4) * 0.5, size, text_color)
                .bold(),
            rv,
        );
        w
    }

    /// Wrapping row of badges. Returns the total height used.
    pub fn badges(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        labels: &[&str],
        style: BadgeStyle,
        rv: &Reveal,
    ) -> f32 {
        if labels.is_empty() {
            return 0.0;
        }
        let size = self.theme.rem(0.75);
        let (mut cx, mut cy) = (x, y);
        for label in labels {
            let w = text_width(label, size, false) + 20.0;
            if cx > x && cx + w > x + width {
                cx = x;
                cy += BADGE_HEIGHT + BADGE_GAP;
            }
            cx += self.badge(cx, cy, label, style, rv) + BADGE_GAP;
        }
        cy + BADGE_HEIGHT - y
    }

    /// Height [`Painter::badges`] would use, without drawing.
    pub fn badges_height(&self, labels: &[&str], width: f32) -> f32 {
        if labels.is_empty() {
            return 0.0;
        }
        let size = self.theme.rem(0.75);
        let mut rows = 1;
        let mut used = 0.0;
        for label in labels {
            let w = text_width(label, size, false) + 20.0;
            if used > 0.0 && used + w > width {
                rows += 1;
                used = 0.0;
            }
            used += w + BADGE_GAP;
        }
        rows as f32 * (BADGE_HEIGHT + BADGE_GAP) - BADGE_GAP
    }

    /// Button with a centred label that triggers `action`.
    pub fn button(&mut self, rect: Rect, label: &str, style: ButtonStyle, action: Action, rv: &Reveal) {
        let palette = self.theme.palette;
        let hovered = self.hovered(rect);
        let text_color = match style {
            ButtonStyle::Primary => {
                let fill = if hovered {
                    Fill::Horizontal(palette.primary.lerp(Color::WHITE, 0.1), palette.accent)
                } else {
                    self.theme.gradient()
                };
                self.quad(rect, fill, 8.0, rv);
                Color::WHITE
            }
            ButtonStyle::Outline => {
                if hovered {
                    self.quad(rect, Fill::Solid(palette.primary), 8.0, rv);
                }
                self.outline(rect, palette.primary, 8.0, 1.0, rv);
                if hovered {
                    Color::WHITE
                } else {
                    palette.primary
                }
            }
        };
        let size = self.theme.rem(0.875);
        let text = DrawText::new(label, rect.x, rect.y + (rect.height - size * 1.4) * 0.5, size, text_color)
            .bold()
            .wrap(rect.width)
            .align(TextAlign::Center);
        self.text(text, rv);
        if rv.opacity > 0.0 {
            self.hit(rect, action);
        }
    }
}

pub const BADGE_HEIGHT: f32 = 24.0;
pub const BADGE_GAP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeStyle {
    Filled(Fill),
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Outline,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter<'a>(
        list: &'a mut DrawList,
        theme: &'a Theme,
        reveal: &'a mut RevealTracker,
        scroll: f32,
    ) -> Painter<'a> {
        Painter {
            list,
            theme,
            reveal,
            scroll,
            width: 1280.0,
            height: 800.0,
            now: 0.0,
            stagger: 0.1,
            pointer: None,
        }
    }

    #[test]
    fn items_are_shifted_by_scroll() {
        let (mut list, theme, mut reveal) = (DrawList::new(), Theme::default(), RevealTracker::new(0.6, 30.0, false));
        let mut p = painter(&mut list, &theme, &mut reveal, 500.0);
        p.quad(
            Rect::new(0.0, 600.0, 10.0, 10.0),
            Fill::Solid(Color::WHITE),
            0.0,
            &Reveal::DONE,
        );
        p.hit(Rect::new(0.0, 600.0, 10.0, 10.0), Action::ScrollToTop);
        assert_eq!(list.base_quads[0].rect.y, 100.0);
        assert_eq!(list.hits[0].rect.y, 100.0);
    }

    #[test]
    fn hidden_buttons_are_not_clickable() {
        let (mut list, theme, mut reveal) = (DrawList::new(), Theme::default(), RevealTracker::new(0.6, 30.0, false));
        let mut p = painter(&mut list, &theme, &mut reveal, 0.0);
        let hidden = Reveal::at(RevealStyle::Rise, 0.0, 30.0);
        p.button(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            "Send Message",
            ButtonStyle::Primary,
            Action::SubmitContact,
            &hidden,
        );
        assert!(list.hits.is_empty());
        assert!(list.base_text.is_empty());
    }

    #[test]
    fn badges_wrap_to_width() {
        let (mut list, theme, mut reveal) = (DrawList::new(), Theme::default(), RevealTracker::new(0.6, 30.0, false));
        let mut p = painter(&mut list, &theme, &mut reveal, 0.0);
        let one_row = p.badges(0.0, 0.0, 1000.0, &["React", "Node.js"], BadgeStyle::Outline, &Reveal::DONE);
        let wrapped = p.badges(0.0, 0.0, 80.0, &["React", "Node.js"], BadgeStyle::Outline, &Reveal::DONE);
        assert_eq!(one_row, BADGE_HEIGHT);
        assert_eq!(wrapped, BADGE_HEIGHT * 2.0 + BADGE_GAP);
        assert_eq!(p.badges_height(&["React", "Node.js"], 80.0), wrapped);
    }
}
