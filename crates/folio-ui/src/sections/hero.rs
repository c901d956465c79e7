//! Full-height landing section over the 3D backdrop.

use folio_common::{Action, DrawText, Rect, SectionId, SurfaceId, TextAlign};

use crate::content::SOCIAL_LINKS;
use crate::layout::metrics::{self, text_width};
use crate::layout::{ButtonStyle, Painter};
use crate::motion::{progress, Reveal, RevealStyle, Typewriter};
use crate::sections::nav::NAV_HEIGHT;

const MIN_HEIGHT: f32 = 640.0;

const INTRO: &str = "Passionate young developer crafting innovative web experiences with React, Node.js, and 3D technologies. Building the future, one line of code at a time.";

/// Entrance that plays on mount rather than on visibility.
fn mount(p: &Painter, delay: f32, duration: f32, style: RevealStyle) -> Reveal {
    Reveal::at(style, progress(p.now, 0.0, delay, duration), 20.0)
}

pub(crate) fn build(p: &mut Painter, top: f32, name: &str, typewriter: &Typewriter) -> f32 {
    let height = p.height.max(MIN_HEIGHT);
    let section = Rect::new(0.0, top, p.width, height);
    let screen = p.to_screen(section);
    p.list.surface(SurfaceId::Hero, screen);

    let palette = p.theme.palette;
    let (_, width) = metrics::content_column(p.width);
    let column = width.min(896.0);
    let center = p.width * 0.5;
    let wide = p.width >= metrics::MD;

    let h1 = p.theme.rem(if wide { 4.5 } else { 3.0 });
    let typed = p.theme.rem(if wide { 1.875 } else { 1.5 });
    let body = p.theme.rem(1.125);
    let body_lh = body * 1.625;
    let body_w = column.min(672.0);
    let body_h = metrics::text_height(INTRO, body, body_lh, body_w);
    let content_h = h1 * 1.2 + 24.0 + typed * 1.4 + 32.0 + body_h + 48.0 + 48.0 + 64.0 + 24.0;
    let mut y = top + ((height - content_h) * 0.5).max(NAV_HEIGHT);

    let outer = mount(p, 0.0, 0.8, RevealStyle::Rise);

    // Headline.
    let rv = outer.nested(&mount(p, 0.2, 0.6, RevealStyle::Grow { scale: 0.5 }));
    let greeting = "Hi, I'm ";
    let w_greet = text_width(greeting, h1, false);
    let w_name = text_width(name, h1, false);
    let hx = center - (w_greet + w_name) * 0.5;
    p.text(DrawText::new(greeting, hx, y, h1, palette.text).bold(), &rv);
    p.text(
        DrawText::new(name, hx + w_greet, y, h1, palette.primary).bold(),
        &rv,
    );
    y += h1 * 1.2 + 24.0;

    // Typed subtitle.
    let rv = outer.nested(&mount(p, 0.5, 0.6, RevealStyle::Fade));
    let shown = typewriter.text();
    let line = format!("> {shown}");
    let cursor = if typewriter.cursor_visible() { "|" } else { " " };
    let w_line = text_width(&line, typed, true) + text_width(cursor, typed, true);
    let tx = center - w_line * 0.5;
    p.text(DrawText::new(">", tx, y, typed, palette.primary).mono(), &rv);
    p.text(
        DrawText::new(format!("  {shown}"), tx, y, typed, palette.text_muted).mono(),
        &rv,
    );
    p.text(
        DrawText::new(cursor, tx + text_width(&line, typed, true), y, typed, palette.primary)
            .mono(),
        &rv,
    );
    y += typed * 1.4 + 32.0;

    // Intro paragraph.
    let rv = outer.nested(&mount(p, 0.8, 0.6, RevealStyle::Rise));
    p.text(
        DrawText::new(INTRO, center - body_w * 0.5, y, body, palette.text_muted)
            .wrap(body_w)
            .line_height(body_lh)
            .align(TextAlign::Center),
        &rv,
    );
    y += body_h + 48.0;

    // Call-to-action buttons.
    let rv = outer.nested(&mount(p, 1.0, 0.6, RevealStyle::Rise));
    let bw = 180.0;
    let bh = 48.0;
    if wide {
        let bx = center - bw - 8.0;
        p.button(
            Rect::new(bx, y, bw, bh),
            "Get In Touch",
            ButtonStyle::Primary,
            Action::ScrollToSection(SectionId::Contact),
            &rv,
        );
        p.button(
            Rect::new(center + 8.0, y, bw, bh),
            "View My Work",
            ButtonStyle::Outline,
            Action::ScrollToSection(SectionId::Projects),
            &rv,
        );
        y += bh + 64.0;
    } else {
        p.button(
            Rect::new(center - bw * 0.5, y, bw, bh),
            "Get In Touch",
            ButtonStyle::Primary,
            Action::ScrollToSection(SectionId::Contact),
            &rv,
        );
        p.button(
            Rect::new(center - bw * 0.5, y + bh + 16.0, bw, bh),
            "View My Work",
            ButtonStyle::Outline,
            Action::ScrollToSection(SectionId::Projects),
            &rv,
        );
        y += bh * 2.0 + 16.0 + 64.0;
    }

    // Social links.
    let rv = outer.nested(&mount(p, 1.2, 0.6, RevealStyle::Fade));
    let size = p.theme.rem(0.95);
    let gap = 24.0;
    let widths: Vec<f32> = SOCIAL_LINKS
        .iter()
        .map(|s| text_width(s.label, size, false))
        .collect();
    let total = widths.iter().sum::<f32>() + gap * (widths.len().saturating_sub(1)) as f32;
    let mut sx = center - total * 0.5;
    for (link, w) in SOCIAL_LINKS.iter().zip(widths) {
        let rect = Rect::new(sx, y, w, size * 1.4);
        let color = if p.hovered(rect) {
            palette.primary
        } else {
            palette.text_muted
        };
        let lift = if p.hovered(rect) { -5.0 } else { 0.0 };
        p.text(DrawText::new(link.label, sx, y + lift, size, color), &rv);
        if rv.opacity > 0.0 {
            p.hit(rect, Action::OpenLink(link.href.to_string()));
        }
        sx += w + gap;
    }

    // Scroll indicator, bobbing 10px over two seconds.
    let rv = mount(p, 1.5, 0.6, RevealStyle::Fade);
    let phase = (p.now / 2.0).fract();
    let bob = 10.0 * (1.0 - (phase * std::f32::consts::TAU).cos()) * 0.5;
    let arrow = p.theme.rem(1.5);
    let ay = top + height - 32.0 - arrow * 1.4 + bob;
    p.text(
        DrawText::new("↓", center - arrow * 0.3, ay, arrow, palette.primary),
        &rv,
    );
    if rv.opacity > 0.0 {
        p.hit(
            Rect::new(center - 24.0, ay - 8.0, 48.0, arrow * 1.4 + 16.0),
            Action::ScrollToSection(SectionId::About),
        );
    }

    height
}
