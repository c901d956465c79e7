//! Page footer: brand, quick links, social links and the copyright line.

use chrono::{Datelike, NaiveDate};
use folio_common::{Action, Color, DrawText, Fill, Layer, Rect, TextAlign};

use super::{dot, GAP};
use crate::content::{BRAND, FOOTER_LINKS, SOCIAL_LINKS};
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::Painter;
use crate::motion::{Reveal, RevealStyle};

const BLURB: &str = "Passionate full-stack developer crafting innovative digital experiences with modern technologies and creative solutions.";
const CONNECT: &str = "Ready to work together? Reach out and let's create something amazing.";

const PAD: f32 = 48.0;
const ICON: f32 = 40.0;
const HEART: Color = Color::rgb(239, 68, 68);
const COFFEE: Color = Color::rgb(245, 158, 11);

pub(crate) fn copyright(today: NaiveDate) -> String {
    format!("© {} Temo. All rights reserved.", today.year())
}

/// Month/day/year without padding.
pub(crate) fn last_updated(today: NaiveDate) -> String {
    format!(
        "Last updated: {}/{}/{}",
        today.month(),
        today.day(),
        today.year()
    )
}

pub(crate) fn build(p: &mut Painter, top: f32, today: NaiveDate) -> f32 {
    let palette = p.theme.palette;
    let (x, width) = metrics::content_column(p.width);
    let rule = p.to_screen(Rect::new(0.0, top, p.width, 1.0));
    p.list
        .quad(Layer::Base, rule, Fill::Solid(palette.border.fade(0.5)), 0.0);

    let count = columns_for(p.width, 3, 3);
    let cols = grid(width, count, GAP);
    let body = p.theme.base;
    let small = p.theme.rem(0.875);
    let heading = p.theme.rem(1.125);
    let y = top + PAD;

    let mut heights = Vec::with_capacity(3);
    let col = |i: usize, h_prev: f32| -> (f32, f32, f32) {
        if count == 3 {
            (x + cols[i].0, y, cols[i].1)
        } else {
            (x, y + h_prev, width)
        }
    };

    // Brand.
    let (bx, by, bw) = col(0, 0.0);
    let blurb_h = metrics::text_height(BLURB, body, body * 1.625, bw);
    let brand_size = p.theme.rem(1.5);
    let brand_h = brand_size * 1.4 + 16.0 + blurb_h + 16.0 + small * 1.4;
    let rv = p.reveal(("footer.brand", 0), Rect::new(bx, by, bw, brand_h), 0.0, RevealStyle::Rise);
    p.text(DrawText::new(BRAND, bx, by, brand_size, palette.primary).bold(), &rv);
    let mut cy = by + brand_size * 1.4 + 16.0;
    cy += p.paragraph(BLURB, bx, cy, bw, body, &rv) + 16.0;
    let made = [("Made with ", palette.text_muted), ("♥", HEART), (" and ", palette.text_muted), ("☕", COFFEE)];
    let mut mx = bx;
    for (part, color) in made {
        p.text(DrawText::new(part, mx, cy, small, color), &rv);
        mx += metrics::text_width(part, small, false);
    }
    heights.push(brand_h);

    // Quick links.
    let stacked: f32 = heights.iter().map(|h| h + GAP).sum();
    let (lx, ly, lw) = col(1, stacked);
    let line = body * 1.4 + 8.0;
    let links_h = heading * 1.4 + 16.0 + FOOTER_LINKS.len() as f32 * line;
    let rv = p.reveal(("footer.links", 0), Rect::new(lx, ly, lw, links_h), 0.1, RevealStyle::Rise);
    p.text(DrawText::new("Quick Links", lx, ly, heading, palette.primary).bold(), &rv);
    let mut cy = ly + heading * 1.4 + 16.0;
    for link in FOOTER_LINKS {
        let w = metrics::text_width(link.name, body, false);
        let rect = Rect::new(lx, cy, w, body * 1.4);
        let hovered = p.hovered(rect);
        let (color, shift) = if hovered {
            (palette.primary, 5.0)
        } else {
            (palette.text_muted, 0.0)
        };
        p.text(DrawText::new(link.name, lx + shift, cy, body, color), &rv);
        if rv.opacity > 0.0 {
            p.hit(rect, Action::ScrollToSection(link.section));
        }
        cy += line;
    }
    heights.push(links_h);

    // Connect.
    let stacked: f32 = heights.iter().map(|h| h + GAP).sum();
    let (sx, sy, sw) = col(2, stacked);
    let connect_h = metrics::text_height(CONNECT, body, body * 1.5, sw);
    let social_h = heading * 1.4 + 16.0 + connect_h + 16.0 + ICON;
    let rv = p.reveal(("footer.connect", 0), Rect::new(sx, sy, sw, social_h), 0.2, RevealStyle::Rise);
    p.text(DrawText::new("Let's Connect", sx, sy, heading, palette.primary).bold(), &rv);
    let mut cy = sy + heading * 1.4 + 16.0;
    cy += p.paragraph(CONNECT, sx, cy, sw, body, &rv) + 16.0;
    let mut ix = sx;
    for link in SOCIAL_LINKS {
        let rect = Rect::new(ix, cy, ICON, ICON);
        let hovered = p.hovered(rect);
        let rv_icon = if hovered {
            Reveal {
                dy: rv.dy - 2.0,
                ..rv.scaled(1.2)
            }
        } else {
            rv
        };
        let (fill, text) = if hovered {
            (palette.primary, Color::WHITE)
        } else {
            (palette.secondary.fade(0.5), palette.text_muted)
        };
        p.quad(rect, Fill::Solid(fill), 8.0, &rv_icon);
        let mark = link.label.chars().next().map(String::from).unwrap_or_default();
        p.text(
            DrawText::new(mark, ix, cy + (ICON - small * 1.4) * 0.5, small, text)
                .bold()
                .wrap(ICON)
                .align(TextAlign::Center),
            &rv_icon,
        );
        if rv.opacity > 0.0 {
            p.hit(rect, Action::OpenLink(link.href.to_string()));
        }
        ix += ICON + 16.0;
    }
    heights.push(social_h);

    let columns_h = if count == 3 {
        heights.iter().cloned().fold(0.0, f32::max)
    } else {
        heights.iter().sum::<f32>() + GAP * 2.0
    };

    // Bottom line.
    let by = y + columns_h + 32.0;
    // Below md the two halves of the bottom line stack.
    let wide = p.width >= metrics::MD;
    let bottom_h = 32.0 + small * 1.4 + if wide { 0.0 } else { small * 1.4 + 16.0 };
    let rv = p.reveal(("footer.bottom", 0), Rect::new(x, by, width, bottom_h), 0.3, RevealStyle::Rise);
    p.quad(Rect::new(x, by, width, 1.0), Fill::Solid(palette.border.fade(0.5)), 0.0, &rv);
    let ty = by + 32.0;
    let left = format!("{}   </> Built with Rust & wgpu", copyright(today));
    p.text(DrawText::new(left, x, ty, small, palette.text_muted), &rv);
    let ty = if wide { ty } else { ty + small * 1.4 + 16.0 };
    let right = last_updated(today);
    let available = "Available for work";
    let aw = metrics::text_width(available, small, false);
    p.text(
        DrawText::new(available, x, ty, small, palette.text_muted)
            .wrap(width)
            .align(TextAlign::Right),
        &rv,
    );
    dot(p, x + width - aw - 14.0, ty + small * 0.7 - 4.0, palette.success, &rv);
    let rw = metrics::text_width(&right, small, false);
    p.text(
        DrawText::new(right, x + width - aw - 32.0 - rw, ty, small, palette.text_muted),
        &rv,
    );

    by + bottom_h + PAD - top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealTracker;
    use crate::theme::Theme;
    use folio_common::{DrawList, SectionId};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn dates_are_formatted() {
        assert_eq!(copyright(day()), "© 2026 Temo. All rights reserved.");
        assert_eq!(last_updated(day()), "Last updated: 3/7/2026");
    }

    #[test]
    fn quick_links_scroll_to_sections() {
        for width in [1280.0, 500.0] {
            let mut list = DrawList::new();
            let theme = Theme::default();
            let mut reveal = RevealTracker::new(0.6, 30.0, true);
            let mut p = Painter {
                list: &mut list,
                theme: &theme,
                reveal: &mut reveal,
                scroll: 0.0,
                width,
                height: 2000.0,
                now: 0.0,
                stagger: 0.1,
                pointer: None,
            };
            let height = build(&mut p, 0.0, day());
            assert!(height > 0.0);
            let sections: Vec<_> = list
                .hits
                .iter()
                .filter_map(|h| match h.action {
                    Action::ScrollToSection(s) => Some(s),
                    _ => None,
                })
                .collect();
            assert_eq!(
                sections,
                vec![
                    SectionId::About,
                    SectionId::Projects,
                    SectionId::Skills,
                    SectionId::Contact
                ]
            );
            assert!(list.base_text.iter().any(|t| t.text.contains("© 2026 Temo.")));
        }
    }
}
