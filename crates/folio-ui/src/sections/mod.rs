//! One module per page section. Each `build` lays its section out starting
//! at a document y and returns the section's height.

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod nav;
pub(crate) mod playground;
pub(crate) mod projects;
pub(crate) mod skills;
pub(crate) mod toasts;

use folio_common::{Color, DrawText, Fill, Layer, Rect};

use crate::layout::{metrics, BadgeStyle, Painter, BADGE_GAP, BADGE_HEIGHT};
use crate::motion::{Reveal, RevealStyle};

/// Vertical padding above and below each section.
pub(crate) const SECTION_PAD: f32 = 80.0;

/// Gap between grid cells.
pub(crate) const GAP: f32 = 32.0;

/// Card inner padding.
pub(crate) const CARD_PAD: f32 = 28.0;

/// Centred two-tone title plus lead paragraph. Returns the y just below it.
pub(crate) fn header(
    p: &mut Painter,
    key: &'static str,
    y: f32,
    plain: &str,
    highlight: &str,
    lead: &str,
) -> f32 {
    let (x, width) = metrics::content_column(p.width);
    let title = p.theme.rem(if p.width >= metrics::MD { 3.0 } else { 2.25 });
    let lead_size = p.theme.rem(1.25);
    let lead_width = width.min(768.0);
    let lead_h = metrics::text_height(lead, lead_size, lead_size * p.theme.line_height, lead_width);
    let block = Rect::new(x, y, width, title * 1.2 + 24.0 + lead_h);
    let rv = p.reveal((key, 0), block, 0.0, RevealStyle::Rise);

    let mut cy = y;
    cy += p.split_heading(plain, highlight, x + width * 0.5, cy, title, &rv) + 24.0;
    cy += p.lead(lead, x + (width - lead_width) * 0.5, cy, lead_width, lead_size, &rv);
    cy + 64.0
}

/// Tinted band behind alternating sections. `first` is the length of the
/// base quad list before the section was drawn, so the band lands beneath it.
pub(crate) fn band(p: &mut Painter, first: usize, top: f32, height: f32) {
    let fill = Fill::Solid(p.theme.palette.secondary.fade(0.2));
    let rect = p.to_screen(Rect::new(0.0, top, p.width, height));
    let len = p.list.base_quads.len();
    p.list.quad(Layer::Base, rect, fill, 0.0);
    if p.list.base_quads.len() > len {
        let quad = p.list.base_quads.remove(len);
        p.list.base_quads.insert(first.min(len), quad);
    }
}

/// Small title inside a card in the primary colour. Returns its height.
pub(crate) fn card_title(
    p: &mut Painter,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    rv: &Reveal,
) -> f32 {
    let color = p.theme.palette.primary;
    p.text(DrawText::new(text, x, y, size, color).bold(), rv);
    size * 1.4
}

/// Small filled circle used as a bullet.
pub(crate) fn dot(p: &mut Painter, x: f32, y: f32, color: Color, rv: &Reveal) {
    p.quad(Rect::new(x, y, 8.0, 8.0), Fill::Solid(color), 4.0, rv);
}

/// Splits `labels` into rows that fit `width`, the same way
/// [`Painter::badges`] wraps.
pub(crate) fn badge_rows<'l>(labels: &[&'l str], size: f32, width: f32) -> Vec<Vec<&'l str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut used = 0.0;
    for &label in labels {
        let w = metrics::text_width(label, size, false) + 20.0;
        match rows.last_mut() {
            Some(row) if used + w <= width => {
                row.push(label);
                used += w + BADGE_GAP;
            }
            _ => {
                rows.push(vec![label]);
                used = w + BADGE_GAP;
            }
        }
    }
    rows
}

/// Badges wrapped to `width` with every row centred.
pub(crate) fn centered_badges(
    p: &mut Painter,
    x: f32,
    y: f32,
    width: f32,
    labels: &[&str],
    style: BadgeStyle,
    rv: &Reveal,
) {
    let size = p.theme.rem(0.75);
    for (row, line) in badge_rows(labels, size, width).into_iter().enumerate() {
        let row_w = line
            .iter()
            .map(|l| metrics::text_width(l, size, false) + 20.0)
            .sum::<f32>()
            + BADGE_GAP * (line.len() - 1) as f32;
        let mut cx = x + (width - row_w) * 0.5;
        let cy = y + row as f32 * (BADGE_HEIGHT + BADGE_GAP);
        for label in line {
            cx += p.badge(cx, cy, label, style, rv) + BADGE_GAP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_rows_wrap_to_width() {
        let labels = ["Next.js", "TypeScript", "Docker"];
        let rows = badge_rows(&labels, 12.0, 10_000.0);
        assert_eq!(rows, vec![vec!["Next.js", "TypeScript", "Docker"]]);
        let narrow = badge_rows(&labels, 12.0, 1.0);
        assert_eq!(narrow.len(), 3);
    }
}
