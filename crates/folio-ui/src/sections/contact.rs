//! Contact form, contact details, quick actions and social links.

use folio_common::{Action, Color, DrawText, Fill, FormField, Rect, TextAlign};

use super::{card_title, dot, header, CARD_PAD, GAP, SECTION_PAD};
use crate::content::{AVAILABILITY, CONTACT_INFO, QUICK_ACTIONS, SOCIAL_LINKS};
use crate::form::ContactForm;
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::{ButtonStyle, Painter};
use crate::motion::{Reveal, RevealStyle};

const LEAD: &str = "Ready to bring your ideas to life? Let's collaborate and create something amazing together. I'm always excited to work on new projects and challenges.";

const INPUT_HEIGHT: f32 = 40.0;
const MESSAGE_ROWS: f32 = 6.0;
const SOCIAL_SIZE: f32 = 64.0;

fn caption(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Full Name",
        FormField::Email => "Email Address",
        FormField::Subject => "Subject",
        FormField::Message => "Message",
    }
}

/// Short mark drawn inside a social link circle.
fn social_mark(label: &str) -> &'static str {
    match label {
        "GitHub" => "GH",
        "Email" => "@",
        "Facebook" => "f",
        _ => "•",
    }
}

/// Whether the text caret is drawn at page time `now`. Blinks every 500 ms.
pub(crate) fn caret_visible(now: f32) -> bool {
    (now * 2.0).floor() as i64 % 2 == 0
}

pub(crate) fn build(p: &mut Painter, top: f32, form: &ContactForm) -> f32 {
    let (x, width) = metrics::content_column(p.width);
    let mut y = header(p, "contact.header", top + SECTION_PAD, "Get In ", "Touch", LEAD);

    let wide = columns_for(p.width, 1, 3) == 3;
    let (form_w, side_x, side_w) = if wide {
        let cols = grid(width, 3, GAP);
        (cols[1].0 + cols[1].1, x + cols[2].0, cols[2].1)
    } else {
        (width, x, width)
    };
    let form_h = form_card(p, x, y, form_w, form);
    let side_y = if wide { y } else { y + form_h + GAP };
    let side_h = side_cards(p, side_x, side_y, side_w);
    y = if wide {
        y + form_h.max(side_h)
    } else {
        side_y + side_h
    };
    y += 64.0;
    y += socials(p, x, y, width);
    y + SECTION_PAD - top
}

fn form_card(p: &mut Painter, x: f32, y: f32, width: f32, form: &ContactForm) -> f32 {
    let title = p.theme.rem(1.5);
    let label = p.theme.rem(0.875);
    let body = p.theme.base;
    let pad = 32.0;
    let inner = width - pad * 2.0;
    let field_gap = 24.0;
    let error_h = label * 1.4 + 4.0;
    let message_h = body * 1.5 * MESSAGE_ROWS + 16.0;
    let errored = form.error().map(|e| e.field());

    // Name and email share a row from the md breakpoint up.
    let pair = columns_for(p.width, 2, 2) == 2;
    let rows: Vec<Vec<FormField>> = if pair {
        vec![
            vec![FormField::Name, FormField::Email],
            vec![FormField::Subject],
            vec![FormField::Message],
        ]
    } else {
        FormField::ALL.iter().map(|&f| vec![f]).collect()
    };
    let row_height = |row: &[FormField]| {
        let box_h = if row.contains(&FormField::Message) {
            message_h
        } else {
            INPUT_HEIGHT
        };
        let error = if row.iter().any(|f| Some(*f) == errored) {
            error_h
        } else {
            0.0
        };
        (box_h, label * 1.4 + 8.0 + box_h + error)
    };
    let fields_h: f32 = rows.iter().map(|r| row_height(r.as_slice()).1 + field_gap).sum();
    let height = pad * 2.0 + title * 1.4 + 24.0 + fields_h + 48.0;

    let card = Rect::new(x, y, width, height);
    let rv = p.reveal(("contact.form", 0), card, 0.0, RevealStyle::FromLeft);
    p.card(card, &rv);
    let left = x + pad;
    let mut cy = y + pad;
    cy += card_title(p, "Send Me a Message", left, cy, title, &rv) + 24.0;

    for row in &rows {
        let (box_h, row_h) = row_height(row.as_slice());
        let cols = grid(inner, row.len(), 24.0);
        for (&field, &(cx, w)) in row.iter().zip(&cols) {
            input(p, form, field, left + cx, cy, w, box_h, &rv);
        }
        cy += row_h + field_gap;
    }

    p.button(
        Rect::new(left, cy, inner, 48.0),
        "Send Message",
        ButtonStyle::Primary,
        Action::SubmitContact,
        &rv,
    );
    height
}

/// Label, input box, value or placeholder, caret and inline error.
#[allow(clippy::too_many_arguments)]
fn input(
    p: &mut Painter,
    form: &ContactForm,
    field: FormField,
    x: f32,
    y: f32,
    width: f32,
    box_h: f32,
    rv: &Reveal,
) {
    let palette = p.theme.palette;
    let label = p.theme.rem(0.875);
    let body = p.theme.base;
    p.text(
        DrawText::new(caption(field), x, y, label, palette.text).bold(),
        rv,
    );
    let rect = Rect::new(x, y + label * 1.4 + 8.0, width, box_h);
    let focused = form.focus() == Some(field);
    let error = form.error().filter(|e| e.field() == field);
    p.quad(rect, Fill::Solid(palette.background.fade(0.5)), 6.0, rv);
    let border = if error.is_some() {
        palette.error
    } else if focused {
        palette.primary
    } else {
        palette.border.fade(0.5)
    };
    p.outline(rect, border, 6.0, if focused { 2.0 } else { 1.0 }, rv);

    let inner_w = width - 24.0;
    let value = form.value(field);
    let text_y = rect.y + if field.is_multiline() { 8.0 } else { (box_h - body * 1.4) * 0.5 };
    if value.is_empty() {
        p.text(
            DrawText::new(field.placeholder(), rect.x + 12.0, text_y, body, palette.text_muted.fade(0.7))
                .wrap(inner_w),
            rv,
        );
    } else {
        let mut text = DrawText::new(value, rect.x + 12.0, text_y, body, palette.text);
        if field.is_multiline() {
            text = text.wrap(inner_w).line_height(body * 1.5);
        }
        p.text(text, rv);
    }

    if focused && caret_visible(p.now) {
        let (cx, cy) = caret_position(value, field.is_multiline(), body, inner_w);
        p.quad(
            Rect::new(rect.x + 12.0 + cx, text_y + cy + 2.0, 1.5, body * 1.2),
            Fill::Solid(palette.primary),
            0.0,
            rv,
        );
    }

    if let Some(error) = error {
        p.text(
            DrawText::new(error.message(), x, rect.bottom() + 4.0, label, palette.error),
            rv,
        );
    }
    if rv.opacity > 0.0 {
        p.hit(rect, Action::FocusField(field));
    }
}

/// Offset of the caret from the text origin, after the last character.
fn caret_position(value: &str, multiline: bool, size: f32, width: f32) -> (f32, f32) {
    if !multiline {
        return (metrics::text_width(value, size, false).min(width), 0.0);
    }
    let lines = metrics::line_count(value, size, width).max(1);
    let last = value.rsplit('\n').next().unwrap_or("");
    let x = (metrics::text_width(last, size, false) % width.max(1.0)).min(width);
    (x, (lines - 1) as f32 * size * 1.5)
}

fn side_cards(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.25);
    let small = p.theme.rem(0.875);
    let body = p.theme.base;
    let pad = 24.0;
    let left = x + pad;
    let inner = width - pad * 2.0;

    // Contact information.
    let row_h = 12.0 + small * 1.4 + body * 1.4 + 12.0;
    let info_h = pad * 2.0 + title * 1.4 + 24.0 + CONTACT_INFO.len() as f32 * (row_h + 16.0) - 16.0;
    let card = Rect::new(x, y, width, info_h);
    let rv = p.reveal(("contact.info", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = y + pad;
    cy += card_title(p, "Contact Information", left, cy, title, &rv) + 24.0;
    for info in CONTACT_INFO {
        let rect = Rect::new(left, cy, inner, row_h);
        if info.link.is_some() && p.hovered(rect) {
            p.quad(rect, Fill::Solid(palette.secondary.fade(0.5)), 8.0, &rv);
        }
        dot(p, left + 12.0, cy + row_h * 0.5 - 4.0, palette.primary, &rv);
        p.text(
            DrawText::new(info.label, left + 32.0, cy + 12.0, small, palette.text_muted),
            &rv,
        );
        p.text(
            DrawText::new(info.value, left + 32.0, cy + 12.0 + small * 1.4, body, palette.text).bold(),
            &rv,
        );
        if let Some(link) = info.link {
            if rv.opacity > 0.0 {
                p.hit(rect, Action::OpenLink(link.to_string()));
            }
        }
        cy += row_h + 16.0;
    }
    let mut total = info_h + 24.0;

    // Quick actions.
    let action_h = 16.0 + body * 1.4 + small * 1.4 + 16.0;
    let actions_h = pad * 2.0 + title * 1.4 + 24.0 + QUICK_ACTIONS.len() as f32 * (action_h + 12.0) - 12.0;
    let ay = y + total;
    let card = Rect::new(x, ay, width, actions_h);
    let rv = p.reveal(("contact.actions", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = ay + pad;
    cy += card_title(p, "Quick Actions", left, cy, title, &rv) + 24.0;
    for action in &QUICK_ACTIONS {
        let rect = Rect::new(left, cy, inner, action_h);
        let hovered = p.hovered(rect);
        let (fill, border) = if hovered {
            (palette.secondary.fade(0.5), palette.primary.fade(0.3))
        } else {
            (palette.secondary.fade(0.3), palette.border.fade(0.3))
        };
        p.quad(rect, Fill::Solid(fill), 8.0, &rv);
        p.outline(rect, border, 8.0, 1.0, &rv);
        dot(p, left + 16.0, cy + action_h * 0.5 - 4.0, palette.primary, &rv);
        p.text(
            DrawText::new(action.title, left + 36.0, cy + 16.0, body, palette.text).bold(),
            &rv,
        );
        p.text(
            DrawText::new(action.description, left + 36.0, cy + 16.0 + body * 1.4, small, palette.text_muted),
            &rv,
        );
        if rv.opacity > 0.0 {
            p.hit(rect, Action::QuickAction(action.kind));
        }
        cy += action_h + 12.0;
    }
    total += actions_h + 24.0;

    // Availability.
    let line = small * 1.4 + 12.0;
    let avail_h = pad * 2.0 + title * 1.4 + 16.0 + AVAILABILITY.len() as f32 * line - 12.0;
    let vy = y + total;
    let card = Rect::new(x, vy, width, avail_h);
    let rv = p.reveal(("contact.availability", 0), card, 0.0, RevealStyle::FromRight);
    p.card(card, &rv);
    let mut cy = vy + pad;
    cy += card_title(p, "Availability", left, cy, title, &rv) + 16.0;
    for row in AVAILABILITY {
        p.text(DrawText::new(row.label, left, cy, small, palette.text), &rv);
        let color = if row.live {
            palette.success
        } else {
            palette.text_muted
        };
        p.text(
            DrawText::new(row.value, left, cy, small, color)
                .wrap(inner)
                .align(TextAlign::Right),
            &rv,
        );
        if row.live {
            // Pulses once per second.
            let pulse = 0.5 + 0.5 * (p.now * std::f32::consts::TAU).cos();
            let vw = metrics::text_width(row.value, small, false);
            let rv_dot = Reveal {
                opacity: rv.opacity * (0.5 + 0.5 * pulse),
                ..rv
            };
            dot(p, left + inner - vw - 16.0, cy + small * 0.7 - 4.0, palette.success, &rv_dot);
        }
        cy += line;
    }
    total + avail_h
}

fn socials(p: &mut Painter, x: f32, y: f32, width: f32) -> f32 {
    let palette = p.theme.palette;
    let title = p.theme.rem(1.5);
    let count = SOCIAL_LINKS.len() as f32;
    let height = title * 1.4 + 32.0 + SOCIAL_SIZE;
    let block = Rect::new(x, y, width, height);
    let rv = p.reveal(("contact.socials", 0), block, 0.4, RevealStyle::Rise);
    p.text(
        DrawText::new("Let's Connect", x, y, title, palette.primary)
            .bold()
            .wrap(width)
            .align(TextAlign::Center),
        &rv,
    );
    let row_w = count * SOCIAL_SIZE + (count - 1.0) * 24.0;
    let mut cx = x + (width - row_w) * 0.5;
    let cy = y + title * 1.4 + 32.0;
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let rect = Rect::new(cx, cy, SOCIAL_SIZE, SOCIAL_SIZE);
        let item = p.reveal(
            ("contact.social", i),
            rect,
            0.5 + i as f32 * p.stagger,
            RevealStyle::Grow { scale: 0.0 },
        );
        let rv_item = rv.nested(&item);
        let hovered = p.hovered(rect);
        let rv_item = if hovered { rv_item.scaled(1.1) } else { rv_item };
        p.quad(rect, p.theme.card_fill(), SOCIAL_SIZE * 0.5, &rv_item);
        p.outline(rect, palette.border.fade(0.5), SOCIAL_SIZE * 0.5, 1.0, &rv_item);
        let mark_color: Color = if hovered { palette.accent } else { palette.primary };
        let size = p.theme.rem(1.25);
        p.text(
            DrawText::new(social_mark(link.label), cx, cy + (SOCIAL_SIZE - size * 1.4) * 0.5, size, mark_color)
                .bold()
                .wrap(SOCIAL_SIZE)
                .align(TextAlign::Center),
            &rv_item,
        );
        if rv_item.opacity > 0.0 {
            p.hit(rect, Action::OpenLink(link.href.to_string()));
        }
        cx += SOCIAL_SIZE + 24.0;
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealTracker;
    use crate::theme::Theme;
    use folio_common::DrawList;

    fn render(form: &ContactForm, now: f32) -> DrawList {
        let mut list = DrawList::new();
        let theme = Theme::default();
        let mut reveal = RevealTracker::new(0.6, 30.0, true);
        let mut p = Painter {
            list: &mut list,
            theme: &theme,
            reveal: &mut reveal,
            scroll: 0.0,
            width: 1280.0,
            height: 4000.0,
            now,
            stagger: 0.1,
            pointer: None,
        };
        build(&mut p, 0.0, form);
        list
    }

    #[test]
    fn every_field_is_focusable() {
        let list = render(&ContactForm::new(), 0.0);
        for field in FormField::ALL {
            assert!(
                list.hits.iter().any(|h| h.action == Action::FocusField(field)),
                "{field:?}"
            );
        }
        assert!(list.hits.iter().any(|h| h.action == Action::SubmitContact));
    }

    #[test]
    fn location_is_not_a_link() {
        let list = render(&ContactForm::new(), 0.0);
        let links: Vec<_> = list
            .hits
            .iter()
            .filter_map(|h| match &h.action {
                Action::OpenLink(url) => Some(url.as_str()),
                _ => None,
            })
            .collect();
        assert!(links.contains(&"mailto:temo@example.com"));
        // Three contact rows plus three socials.
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn inline_error_is_drawn() {
        let mut form = ContactForm::new();
        assert!(form.submit().is_err());
        let list = render(&form, 0.0);
        assert!(list
            .base_text
            .iter()
            .any(|t| t.text == "Please fill out this field."));
    }

    #[test]
    fn caret_blinks_twice_a_second() {
        assert!(caret_visible(0.0));
        assert!(caret_visible(0.4));
        assert!(!caret_visible(0.6));
        assert!(caret_visible(1.1));
    }

    #[test]
    fn multiline_caret_follows_newlines() {
        let (x, y) = caret_position("hello\n", true, 16.0, 400.0);
        assert_eq!(x, 0.0);
        assert!((y - 24.0).abs() < 1e-4);
        let (x, y) = caret_position("hi", false, 16.0, 400.0);
        assert!(x > 0.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn placeholders_show_when_empty() {
        let list = render(&ContactForm::new(), 0.0);
        assert!(list.base_text.iter().any(|t| t.text == "your.email@example.com"));
    }
}
