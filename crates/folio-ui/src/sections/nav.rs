//! Fixed navigation bar.

use folio_common::{Action, DrawText, Fill, Layer, Rect, SectionId};

use crate::content::BRAND;
use crate::layout::metrics::{self, text_width};
use crate::layout::Painter;

pub(crate) const NAV_HEIGHT: f32 = 64.0;

pub(crate) fn build(p: &mut Painter) {
    let palette = p.theme.palette;
    let bar = Rect::new(0.0, 0.0, p.width, NAV_HEIGHT);
    // Opaque once the page has scrolled under it.
    let alpha = if p.scroll > 10.0 { 0.9 } else { 0.6 };
    p.list
        .quad(Layer::Overlay, bar, Fill::Solid(palette.background.fade(alpha)), 0.0);
    p.list.quad(
        Layer::Overlay,
        Rect::new(0.0, NAV_HEIGHT - 1.0, p.width, 1.0),
        Fill::Solid(palette.border),
        0.0,
    );

    let (x, width) = metrics::content_column(p.width);
    let brand_size = p.theme.rem(1.5);
    let brand_y = (NAV_HEIGHT - brand_size * 1.4) * 0.5;
    p.list.text(
        Layer::Overlay,
        DrawText::new(BRAND, x, brand_y, brand_size, palette.primary).bold(),
    );
    let brand_rect = Rect::new(x, 0.0, text_width(BRAND, brand_size, false), NAV_HEIGHT);
    p.list.hit(brand_rect, Action::ScrollToTop);

    let size = p.theme.rem(if p.width >= metrics::MD { 0.95 } else { 0.75 });
    let gap = if p.width >= metrics::MD { 32.0 } else { 12.0 };
    let widths: Vec<f32> = SectionId::ALL
        .iter()
        .map(|s| text_width(s.label(), size, false))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + gap * (widths.len() - 1) as f32;
    let mut lx = x + width - total;
    if lx < brand_rect.right() + gap {
        // Too narrow for every link next to the brand.
        return;
    }
    let ly = (NAV_HEIGHT - size * 1.4) * 0.5;
    for (section, w) in SectionId::ALL.into_iter().zip(widths) {
        let rect = Rect::new(lx - gap * 0.5, 0.0, w + gap, NAV_HEIGHT);
        let hovered = p.pointer.is_some_and(|(px, py)| rect.contains(px, py));
        let color = if hovered {
            palette.primary
        } else {
            palette.text_muted
        };
        p.list
            .text(Layer::Overlay, DrawText::new(section.label(), lx, ly, size, color));
        if hovered {
            p.list.quad(
                Layer::Overlay,
                Rect::new(lx, NAV_HEIGHT - 16.0, w, 2.0),
                Fill::Solid(palette.primary),
                1.0,
            );
        }
        p.list.hit(rect, Action::ScrollToSection(section));
        lx += w + gap;
    }
}
