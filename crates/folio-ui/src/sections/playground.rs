//! Interactive 3D playground: the canvas, scene buttons and help cards.

use folio_common::{Action, Color, DrawText, Fill, Rect, SceneId, SurfaceId, TextAlign};

use super::{band, card_title, centered_badges, dot, header, CARD_PAD, GAP, SECTION_PAD};
use crate::content::PLAYGROUND_TECH;
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::{BadgeStyle, Painter};
use crate::motion::{Reveal, RevealStyle};

const LEAD: &str = "Interactive 3D experiences built with Three.js and React. Explore different scenes and animations in real-time.";

const CANVAS_HEIGHT: f32 = 500.0;
const NEON_PINK: Color = Color::rgb(236, 72, 153);

const CONTROLS_HELP: [(&str, &str); 4] = [
    ("Mouse:", "Orbit camera"),
    ("Scroll:", "Zoom in/out"),
    ("Drag:", "Pan view"),
    ("Touch:", "Mobile support"),
];

/// Rectangle the 3D canvas occupies inside its card.
pub(crate) fn canvas_rect(card: Rect) -> Rect {
    card.inset(24.0)
}

pub(crate) fn build(p: &mut Painter, top: f32, current: SceneId) -> f32 {
    let first = p.list.base_quads.len();
    let (x, width) = metrics::content_column(p.width);
    let mut y = header(p, "playground.header", top + SECTION_PAD, "3D ", "Playground", LEAD);

    let wide = columns_for(p.width, 1, 3) == 3;
    let (canvas_w, side_x, side_w, side_y) = if wide {
        let cols = grid(width, 3, GAP);
        let canvas_w = cols[1].0 + cols[1].1;
        (canvas_w, x + cols[2].0, cols[2].1, y)
    } else {
        (width, x, width, y + CANVAS_HEIGHT + GAP)
    };

    let card = Rect::new(x, y, canvas_w, CANVAS_HEIGHT);
    let rv = p.reveal(("playground.canvas", 0), card, 0.0, RevealStyle::FromLeft);
    p.card(card, &rv);
    let inner = canvas_rect(rv.apply(card));
    p.quad(inner, Fill::Solid(p.theme.palette.background.fade(0.5)), 8.0, &Reveal::DONE);
    if rv.opacity > 0.0 {
        let screen = p.to_screen(inner);
        p.list.surface(SurfaceId::Playground, screen);
    }

    let side_h = side_cards(p, side_x, side_y, side_w, current);
    y = if wide {
        y + CANVAS_HEIGHT.max(side_h)
    } else {
        side_y + side_h
    };
    y += 64.0;
    y += modern_tech(p, x, y, width);

    let height = y + SECTION_PAD - top;
    band(p, first, top, height);
    height
}

fn side_cards(p: &mut Painter, x: f32, y: f32, width: f32, current: SceneId) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.25);
    let name = p.theme.base;
    let small = p.theme.rem(0.75);
    let body = p.theme.rem(0.875);
    let inner = width - CARD_PAD * 2.0;
    let left = x + CARD_PAD;

    // Scene controls.
    let button_h = 12.0 + name * 1.4 + small * 1.4 + 12.0;
    let controls_h = CARD_PAD * 2.0 + title * 1.4 + 16.0 + SceneId::ALL.len() as f32 * (button_h + 12.0) - 12.0;
    let card = Rect::new(x, y, width, controls_h);
    let rv = p.reveal(("playground.scenes", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = y + CARD_PAD;
    cy += card_title(p, "Scene Controls", left, cy, title, &rv) + 16.0;
    for scene in SceneId::ALL {
        let rect = Rect::new(left, cy, inner, button_h);
        let selected = scene == current;
        let hovered = p.hovered(rect);
        let text_color = if selected || hovered {
            Color::WHITE
        } else {
            palette.text
        };
        if selected {
            p.quad(rect, p.theme.gradient(), 8.0, &rv);
        } else {
            if hovered {
                p.quad(rect, Fill::Solid(palette.primary), 8.0, &rv);
            }
            p.outline(rect, palette.primary.fade(0.3), 8.0, 1.0, &rv);
        }
        p.text(
            DrawText::new(scene.name(), left + 16.0, cy + 12.0, name, text_color).bold(),
            &rv,
        );
        p.text(
            DrawText::new(
                scene.description(),
                left + 16.0,
                cy + 12.0 + name * 1.4,
                small,
                text_color.fade(0.7),
            ),
            &rv,
        );
        if rv.opacity > 0.0 {
            p.hit(rect, Action::SelectScene(scene));
        }
        cy += button_h + 12.0;
    }
    let mut total = controls_h + 24.0;

    // Features.
    let features = [
        ("Interactive 3D navigation", palette.primary),
        ("Real-time animations", palette.accent),
        ("Responsive design", palette.success),
        ("WebGL acceleration", NEON_PINK),
    ];
    let row = body * 1.4 + 12.0;
    let features_h = CARD_PAD * 2.0 + title * 1.4 + 16.0 + features.len() as f32 * row - 12.0;
    let fy = y + total;
    let card = Rect::new(x, fy, width, features_h);
    let rv = p.reveal(("playground.features", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = fy + CARD_PAD;
    cy += card_title(p, "Features", left, cy, title, &rv) + 16.0;
    for (label, color) in features {
        dot(p, left, cy + body * 0.7 - 4.0, color, &rv);
        p.text(
            DrawText::new(label, left + 16.0, cy, body, palette.text_muted),
            &rv,
        );
        cy += row;
    }
    total += features_h + 24.0;

    // Controls help.
    let row = body * 1.4 + 8.0;
    let help_h = CARD_PAD * 2.0 + title * 1.4 + 16.0 + CONTROLS_HELP.len() as f32 * row - 8.0;
    let hy = y + total;
    let card = Rect::new(x, hy, width, help_h);
    let rv = p.reveal(("playground.help", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = hy + CARD_PAD;
    cy += card_title(p, "Controls", left, cy, title, &rv) + 16.0;
    for (key, what) in CONTROLS_HELP {
        let kw = metrics::text_width(key, body, false);
        p.text(
            DrawText::new(key, left, cy, body, palette.primary).bold(),
            &rv,
        );
        p.text(
            DrawText::new(what, left + kw + 6.0, cy, body, palette.text_muted),
            &rv,
        );
        cy += row;
    }
    total + help_h
}

fn modern_tech(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.5);
    let body = p.theme.base;
    let inner = width - CARD_PAD * 2.0;
    let text = "This 3D playground showcases the power of Three.js, React Three Fiber, and WebGL. All scenes are rendered in real-time and optimized for performance across devices.";
    let body_h = metrics::text_height(text, body, body * p.theme.line_height, inner);
    let chips_h = p.badges_height(PLAYGROUND_TECH, inner);
    let height = CARD_PAD * 2.0 + title * 1.4 + 16.0 + body_h + 24.0 + chips_h;

    let card = Rect::new(x, y, width, height);
    let rv = p.reveal(("playground.tech", 0), card, 0.3, RevealStyle::Rise);
    p.card(card, &rv);
    let mut cy = y + CARD_PAD;
    p.text(
        DrawText::new("Built with Modern Tech", x + CARD_PAD, cy, title, palette.primary)
            .bold()
            .wrap(inner)
            .align(TextAlign::Center),
        &rv,
    );
    cy += title * 1.4 + 16.0;
    cy += p.lead(text, x + CARD_PAD, cy, inner, body, &rv) + 24.0;
    centered_badges(p, x + CARD_PAD, cy, inner, PLAYGROUND_TECH, BadgeStyle::Outline, &rv);
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealTracker;
    use crate::theme::Theme;
    use folio_common::DrawList;

    fn render(current: SceneId, width: f32) -> DrawList {
        let mut list = DrawList::new();
        let theme = Theme::default();
        let mut reveal = RevealTracker::new(0.6, 30.0, true);
        let mut p = Painter {
            list: &mut list,
            theme: &theme,
            reveal: &mut reveal,
            scroll: 0.0,
            width,
            height: 4000.0,
            now: 10.0,
            stagger: 0.1,
            pointer: None,
        };
        build(&mut p, 0.0, current);
        list
    }

    #[test]
    fn one_button_per_scene() {
        let list = render(SceneId::Spheres, 1280.0);
        let scenes: Vec<_> = list
            .hits
            .iter()
            .filter_map(|h| match h.action {
                Action::SelectScene(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(scenes, SceneId::ALL.to_vec());
    }

    #[test]
    fn canvas_slot_is_placed() {
        for width in [1280.0, 600.0] {
            let list = render(SceneId::Text, width);
            assert_eq!(list.surfaces.len(), 1);
            let slot = list.surfaces[0];
            assert_eq!(slot.id, SurfaceId::Playground);
            assert!((slot.rect.height - (CANVAS_HEIGHT - 48.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn band_is_drawn_first() {
        let list = render(SceneId::Text, 1280.0);
        assert_eq!(list.base_quads[0].rect.x, 0.0);
        assert_eq!(list.base_quads[0].rect.width, 1280.0);
    }
}
