//! Toast stack in the bottom-right corner.

use std::time::Instant;

use folio_common::{Color, DrawText, Fill, Layer, Notification, NotificationLevel, Rect};

use crate::layout::{metrics, Painter};
use crate::theme::Theme;

const WIDTH: f32 = 356.0;
const MARGIN: f32 = 16.0;
const PAD: f32 = 16.0;
const SPACING: f32 = 12.0;
/// Seconds over which a toast slides in and fades out.
const FADE: f32 = 0.25;

fn accent(theme: &Theme, level: NotificationLevel) -> Color {
    let palette = theme.palette;
    match level {
        NotificationLevel::Info => palette.primary,
        NotificationLevel::Success => palette.success,
        NotificationLevel::Warning => palette.warning,
        NotificationLevel::Error => palette.error,
    }
}

/// Opacity of a toast at `now`: fades in after creation and out before
/// expiry.
pub(crate) fn toast_opacity(toast: &Notification, now: Instant) -> f32 {
    let age = now.saturating_duration_since(toast.created_at).as_secs_f32();
    let left = toast.remaining_fraction(now) * toast.ttl.as_secs_f32();
    (age / FADE).min(left / FADE).clamp(0.0, 1.0)
}

/// Draws `toasts` (oldest first) stacked upwards from the bottom-right
/// corner, newest at the bottom.
pub(crate) fn build(p: &mut Painter, toasts: &[&Notification], now: Instant) {
    let palette = p.theme.palette;
    let width = WIDTH.min(p.width - MARGIN * 2.0);
    if width <= 0.0 {
        return;
    }
    let title = p.theme.rem(0.875);
    let body = p.theme.rem(0.8125);
    let inner = width - PAD * 2.0 - 8.0;
    let x = p.width - MARGIN - width;
    let mut bottom = p.height - MARGIN;

    for toast in toasts.iter().rev() {
        let opacity = toast_opacity(toast, now);
        let body_h = metrics::text_height(&toast.body, body, body * 1.4, inner);
        let h = PAD * 2.0 + title * 1.4 + 4.0 + body_h;
        let slide = (1.0 - opacity) * 16.0;
        let rect = Rect::new(x + slide, bottom - h, width, h);
        let color = accent(p.theme, toast.level);

        p.list.quad(
            Layer::Overlay,
            rect,
            Fill::Solid(palette.surface.fade(0.95 * opacity)),
            10.0,
        );
        p.list
            .outline(Layer::Overlay, rect, palette.border.fade(opacity), 10.0, 1.0);
        p.list.quad(
            Layer::Overlay,
            Rect::new(rect.x, rect.y + 10.0, 4.0, h - 20.0),
            Fill::Solid(color.fade(opacity)),
            2.0,
        );
        let tx = rect.x + PAD + 8.0;
        p.list.text(
            Layer::Overlay,
            DrawText::new(toast.title.as_str(), tx, rect.y + PAD, title, palette.text.fade(opacity))
                .bold(),
        );
        p.list.text(
            Layer::Overlay,
            DrawText::new(
                toast.body.as_str(),
                tx,
                rect.y + PAD + title * 1.4 + 4.0,
                body,
                palette.text_muted.fade(opacity),
            )
            .wrap(inner)
            .line_height(body * 1.4),
        );
        // Time left.
        let left = toast.remaining_fraction(now);
        p.list.quad(
            Layer::Overlay,
            Rect::new(rect.x + 10.0, rect.bottom() - 3.0, (width - 20.0) * left, 2.0),
            Fill::Solid(color.fade(0.6 * opacity)),
            1.0,
        );

        bottom -= h + SPACING;
        if bottom < 0.0 {
            break;
        }
    }
}
