//! About: journey timeline, what I do, fun facts and the tech stack grid.

use folio_common::{DrawText, Fill, Rect, TextAlign};

use super::{card_title, dot, header, CARD_PAD, GAP, SECTION_PAD};
use crate::content::{FUN_FACTS, SKILL_GROUPS, TIMELINE, WHAT_I_DO};
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::{BadgeStyle, Painter};
use crate::motion::RevealStyle;

const LEAD: &str = "I'm a passionate young developer who loves creating innovative digital experiences. From web development to 3D design, I'm always exploring new technologies.";

pub(crate) fn build(p: &mut Painter, top: f32) -> f32 {
    let (x, width) = metrics::content_column(p.width);
    let mut y = header(p, "about.header", top + SECTION_PAD, "About ", "Me", LEAD);

    let two = columns_for(p.width, 1, 2) == 2;
    let cols = grid(width, if two { 2 } else { 1 }, 48.0);
    let left_h = journey(p, x + cols[0].0, y, cols[0].1);
    let (rx, ry) = if two {
        (x + cols[1].0, y)
    } else {
        (x, y + left_h + GAP)
    };
    let right_h = side_cards(p, rx, ry, cols[cols.len() - 1].1);
    y = if two {
        y + left_h.max(right_h)
    } else {
        ry + right_h
    } + SECTION_PAD;

    y += tech_stack(p, x, y, width);
    y + SECTION_PAD - top
}

fn journey(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.5);
    let item_title = p.theme.rem(1.125);
    let body = p.theme.base;
    let text_x = x + CARD_PAD + 64.0 + 16.0;
    let text_w = width - CARD_PAD * 2.0 - 80.0;

    let rows: Vec<f32> = TIMELINE
        .iter()
        .map(|e| {
            let h = item_title * 1.4 + 8.0 + metrics::text_height(e.description, body, body * 1.5, text_w);
            h.max(64.0)
        })
        .collect();
    let height = CARD_PAD * 2.0 + title * 1.4 + 24.0 + rows.iter().sum::<f32>() + 24.0 * (rows.len() - 1) as f32;
    let card = Rect::new(x, y, width, height);
    let rv = p.reveal(("about.journey", 0), card, 0.0, RevealStyle::FromLeft);
    p.card(card, &rv);

    let mut cy = y + CARD_PAD;
    cy += card_title(p, "My Journey", x + CARD_PAD, cy, title, &rv) + 24.0;
    for (i, (entry, row_h)) in TIMELINE.iter().zip(rows).enumerate() {
        let row = Rect::new(x + CARD_PAD, cy, width - CARD_PAD * 2.0, row_h);
        let item = p.reveal_for(
            ("about.timeline", i),
            row,
            i as f32 * p.stagger,
            0.5,
            RevealStyle::FromLeft,
        );
        let rv_row = rv.nested(&item);
        p.quad(
            Rect::new(x + CARD_PAD, cy, 64.0, 64.0),
            p.theme.gradient(),
            32.0,
            &rv_row,
        );
        let ysize = p.theme.rem(0.875);
        p.text(
            DrawText::new(entry.year, x + CARD_PAD, cy + 32.0 - ysize * 0.7, ysize, palette.text)
                .bold()
                .wrap(64.0)
                .align(TextAlign::Center),
            &rv_row,
        );
        p.text(
            DrawText::new(entry.title, text_x, cy, item_title, palette.text).bold(),
            &rv_row,
        );
        p.paragraph(entry.description, text_x, cy + item_title * 1.4 + 8.0, text_w, body, &rv_row);
        cy += row_h + 24.0;
    }
    height
}

fn side_cards(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.5);
    let body = p.theme.base;
    let inner = width - CARD_PAD * 2.0;

    let what_h = CARD_PAD * 2.0 + title * 1.4 + 24.0 + WHAT_I_DO.len() as f32 * (body * 1.5 + 16.0);
    let card = Rect::new(x, y, width, what_h);
    let rv = p.reveal(("about.what", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = y + CARD_PAD;
    cy += card_title(p, "What I Do", x + CARD_PAD, cy, title, &rv) + 24.0;
    let bullets = [palette.primary, palette.accent, palette.success, palette.primary];
    for (item, color) in WHAT_I_DO.iter().zip(bullets) {
        dot(p, x + CARD_PAD, cy + body * 0.5, color, &rv);
        p.text(
            DrawText::new(*item, x + CARD_PAD + 24.0, cy, body, palette.text),
            &rv,
        );
        cy += body * 1.5 + 16.0;
    }

    let fy = y + what_h + 24.0;
    let facts_h: f32 = FUN_FACTS
        .iter()
        .map(|f| metrics::text_height(f, body, body * 1.5, inner) + 12.0)
        .sum();
    let facts_card_h = CARD_PAD * 2.0 + title * 1.4 + 24.0 + facts_h;
    let card = Rect::new(x, fy, width, facts_card_h);
    let rv = p.reveal(("about.facts", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = fy + CARD_PAD;
    cy += card_title(p, "Fun Facts", x + CARD_PAD, cy, title, &rv) + 24.0;
    for fact in FUN_FACTS {
        cy += p.paragraph(fact, x + CARD_PAD, cy, inner, body, &rv) + 12.0;
    }

    what_h + 24.0 + facts_card_h
}

fn tech_stack(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let h3 = p.theme.rem(1.875);
    let block = Rect::new(x, y, width, h3 * 1.2);
    let rv = p.reveal(("about.stack", 0), block, 0.0, RevealStyle::Rise);
    let heading_h = p.split_heading("My ", "Tech Stack", x + width * 0.5, y, h3, &rv) + 48.0;

    let count = columns_for(p.width, 2, 4);
    let cols = grid(width, count, GAP);
    let name = p.theme.rem(1.125);
    let pad = 24.0;
    let mut cy = y + heading_h;
    let mut total = heading_h;
    for (row, chunk) in SKILL_GROUPS.chunks(count).enumerate() {
        // Cards in a row share the tallest height.
        let heights: Vec<f32> = chunk
            .iter()
            .zip(&cols)
            .map(|(g, &(_, w))| pad * 2.0 + name * 1.4 + 16.0 + p.badges_height(g.items, w - pad * 2.0))
            .collect();
        let row_h = heights.iter().cloned().fold(0.0, f32::max);
        for (i, (group, &(cx, w))) in chunk.iter().zip(&cols).enumerate() {
            let index = row * count + i;
            let card = Rect::new(x + cx, cy, w, row_h);
            let rv = p.reveal_for(
                ("about.group", index),
                card,
                index as f32 * p.stagger,
                0.5,
                RevealStyle::Rise,
            );
            let rv = if p.hovered(card) { rv.scaled(1.05) } else { rv };
            p.card(card, &rv);
            dot(p, x + cx + pad, cy + pad + name * 0.5, palette.primary, &rv);
            p.text(
                DrawText::new(group.category, x + cx + pad + 20.0, cy + pad, name, palette.text)
                    .bold(),
                &rv,
            );
            p.badges(
                x + cx + pad,
                cy + pad + name * 1.4 + 16.0,
                w - pad * 2.0,
                group.items,
                BadgeStyle::Filled(Fill::Solid(palette.secondary.fade(0.5))),
                &rv,
            );
        }
        cy += row_h + GAP;
        total += row_h + GAP;
    }
    total - GAP
}
