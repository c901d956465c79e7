//! Skill bars, technology tiles and the learning path.

use folio_common::{Color, DrawText, Fill, Rect, TextAlign};

use super::{card_title, centered_badges, header, CARD_PAD, GAP, SECTION_PAD};
use crate::content::{Skill, LEARNING_PATH, SKILL_CATEGORIES, TECHNOLOGIES};
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::{BadgeStyle, Painter};
use crate::motion::RevealStyle;

const LEAD: &str = "A comprehensive overview of my technical skills and the technologies I work with. Always learning and growing in this ever-evolving field.";

const BAR_HEIGHT: f32 = 8.0;

/// Filled width of a skill bar on a `track` pixel track.
pub(crate) fn bar_width(level: u8, progress: f32, track: f32) -> f32 {
    track * f32::from(level.min(100)) / 100.0 * progress.clamp(0.0, 1.0)
}

fn bar_fill(skill: &Skill, fallback: Fill) -> Fill {
    match (Color::from_hex(skill.gradient.0), Color::from_hex(skill.gradient.1)) {
        (Some(a), Some(b)) => Fill::Horizontal(a, b),
        _ => fallback,
    }
}

pub(crate) fn build(p: &mut Painter, top: f32, bar_duration: f32) -> f32 {
    let (x, width) = metrics::content_column(p.width);
    let mut y = header(p, "skills.header", top + SECTION_PAD, "My ", "Skills", LEAD);
    y += categories(p, x, y, width, bar_duration) + SECTION_PAD;
    y += technologies(p, x, y, width) + SECTION_PAD;
    y += learning(p, x, y, width);
    y + SECTION_PAD - top
}

fn categories(p: &mut Painter, x: f32, y: f32, width: f32, bar_duration: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.25);
    let label = p.theme.rem(0.875);
    let row_h = label * 1.4 + 8.0 + BAR_HEIGHT + 20.0;

    let count = columns_for(p.width, 2, 2);
    let cols = grid(width, count, GAP);
    let mut cy = y;
    for (row, chunk) in SKILL_CATEGORIES.chunks(count).enumerate() {
        let card_h = chunk
            .iter()
            .map(|c| CARD_PAD * 2.0 + title * 1.4 + 24.0 + c.skills.len() as f32 * row_h - 20.0)
            .fold(0.0, f32::max);
        for (i, (category, &(cx, w))) in chunk.iter().zip(&cols).enumerate() {
            let index = row * count + i;
            let card = Rect::new(x + cx, cy, w, card_h);
            let rv = p.reveal(("skills.category", index), card, index as f32 * p.stagger, RevealStyle::Rise);
            p.card(card, &rv);

            let left = x + cx + CARD_PAD;
            let track = w - CARD_PAD * 2.0;
            let mut sy = cy + CARD_PAD;
            sy += card_title(p, category.title, left, sy, title, &rv) + 24.0;

            for (k, skill) in category.skills.iter().enumerate() {
                let level = format!("{}%", skill.level);
                p.text(DrawText::new(skill.name, left, sy, label, palette.text), &rv);
                p.text(
                    DrawText::new(level, left, sy, label, palette.text_muted)
                        .wrap(track)
                        .align(TextAlign::Right),
                    &rv,
                );
                let by = sy + label * 1.4 + 8.0;
                let track_rect = Rect::new(left, by, track, BAR_HEIGHT);
                p.quad(track_rect, Fill::Solid(palette.secondary), BAR_HEIGHT * 0.5, &rv);

                // Bars grow once the card is in view, one after another.
                let grow = p.reveal_for(
                    ("skills.bar", index * 16 + k),
                    track_rect,
                    k as f32 * p.stagger,
                    bar_duration,
                    RevealStyle::Fade,
                );
                let filled = bar_width(skill.level, grow.opacity, track);
                let fill = bar_fill(skill, p.theme.gradient());
                p.quad(
                    Rect::new(left, by, filled, BAR_HEIGHT),
                    fill,
                    BAR_HEIGHT * 0.5,
                    &rv,
                );
                sy += row_h;
            }
        }
        cy += card_h + GAP;
    }
    cy - GAP - y
}

fn technologies(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let h3 = p.theme.rem(1.875);
    let block = Rect::new(x, y, width, h3 * 1.2);
    let rv = p.reveal(("skills.tech.title", 0), block, 0.0, RevealStyle::Rise);
    let heading_h = p.split_heading("Technologies I ", "Love", x + width * 0.5, y, h3, &rv) + 48.0;

    let count = columns_for(p.width, 4, 4).max(2);
    let cols = grid(width, count, 24.0);
    let glyph = p.theme.rem(2.25);
    let name = p.theme.base;
    let desc = p.theme.rem(0.75);
    let pad = 24.0;
    let desc_w = cols[0].1 - pad * 2.0;
    let tile_h = TECHNOLOGIES
        .iter()
        .map(|t| {
            pad * 2.0
                + glyph * 1.4
                + 12.0
                + name * 1.4
                + 8.0
                + metrics::text_height(t.description, desc, desc * 1.4, desc_w)
        })
        .fold(0.0, f32::max);

    let mut cy = y + heading_h;
    for (row, chunk) in TECHNOLOGIES.chunks(count).enumerate() {
        for (i, (tech, &(cx, w))) in chunk.iter().zip(&cols).enumerate() {
            let index = row * count + i;
            let tile = Rect::new(x + cx, cy, w, tile_h);
            let rv = p.reveal(
                ("skills.tech", index),
                tile,
                index as f32 * p.stagger,
                RevealStyle::Grow { scale: 0.8 },
            );
            let rv = if p.hovered(tile) { rv.scaled(1.1) } else { rv };
            p.card(tile, &rv);
            let inner = w - pad * 2.0;
            let mut ty = cy + pad;
            p.text(
                DrawText::new(tech.glyph, x + cx + pad, ty, glyph, palette.text)
                    .wrap(inner)
                    .align(TextAlign::Center),
                &rv,
            );
            ty += glyph * 1.4 + 12.0;
            p.text(
                DrawText::new(tech.name, x + cx + pad, ty, name, palette.text)
                    .bold()
                    .wrap(inner)
                    .align(TextAlign::Center),
                &rv,
            );
            ty += name * 1.4 + 8.0;
            p.text(
                DrawText::new(tech.description, x + cx + pad, ty, desc, palette.text_muted)
                    .wrap(inner)
                    .align(TextAlign::Center),
                &rv,
            );
        }
        cy += tile_h + 24.0;
    }
    cy - 24.0 - y
}

fn learning(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let card_w = width.min(896.0);
    let cx = x + (width - card_w) * 0.5;
    let inner = card_w - CARD_PAD * 4.0;
    let title = p.theme.rem(1.5);
    let body = p.theme.base;
    let text = "I'm constantly expanding my skill set and staying up-to-date with the latest technologies. Currently exploring:";
    let body_h = metrics::text_height(text, body, body * p.theme.line_height, inner);
    let chips_h = p.badges_height(LEARNING_PATH, inner);
    let height = CARD_PAD * 4.0 + title * 1.4 + 16.0 + body_h + 24.0 + chips_h;

    let card = Rect::new(cx, y, card_w, height);
    let rv = p.reveal(("skills.learning", 0), card, 0.0, RevealStyle::Rise);
    p.quad(
        card,
        Fill::Horizontal(palette.primary.fade(0.1), palette.accent.fade(0.1)),
        12.0,
        &rv,
    );
    p.outline(card, palette.primary.fade(0.2), 12.0, 1.0, &rv);

    let left = cx + CARD_PAD * 2.0;
    let mut cy = y + CARD_PAD * 2.0;
    p.text(
        DrawText::new("Always Learning", left, cy, title, palette.primary)
            .bold()
            .wrap(inner)
            .align(TextAlign::Center),
        &rv,
    );
    cy += title * 1.4 + 16.0;
    cy += p.lead(text, left, cy, inner, body, &rv) + 24.0;
    centered_badges(p, left, cy, inner, LEARNING_PATH, BadgeStyle::Secondary, &rv);
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_grow_to_their_level() {
        assert_eq!(bar_width(88, 0.0, 200.0), 0.0);
        assert!((bar_width(88, 1.0, 200.0) - 176.0).abs() < 1e-4);
        assert!((bar_width(50, 0.5, 200.0) - 50.0).abs() < 1e-4);
        assert_eq!(bar_width(120, 1.0, 100.0), 100.0);
    }
}
