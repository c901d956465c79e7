//! Frame rendering logic.

use std::time::Instant;

use folio_common::{Color, DrawList, DrawText, Layer, SurfaceId};
use folio_config::schema::DeveloperConfig;
use folio_renderer::FrameTimer;
use folio_scene::SceneFrame;
use folio_ui::Page;

use super::core::FolioApp;

const FPS_COLOR: Color = Color::rgb(0x22, 0xc5, 0x5e);
const HIT_OUTLINE: Color = Color::from_rgba(0xf4, 0x3f, 0x5e, 0xc0);

impl FolioApp {
    /// Advance the page by the measured frame time, lay it out and draw it.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let now = Instant::now();
        let dt = self.timer.tick(now);
        self.page.update(dt);

        let (width, height) = rs.logical_size();
        self.list.clear();
        self.page.build(
            &mut self.list,
            width,
            height,
            now,
            chrono::Local::now().date_naive(),
        );
        developer_overlay(
            &mut self.list,
            &self.config.advanced.developer,
            &self.timer,
            height,
        );

        let frames = scene_frames(&self.page);
        if let Err(e) = rs.render_frame(&self.list, &frames) {
            tracing::error!("Render error: {e}");
        }
    }
}

/// Scene snapshots for every 3D surface placed in the last build.
fn scene_frames(page: &Page) -> Vec<SceneFrame> {
    [SurfaceId::Hero, SurfaceId::Playground]
        .into_iter()
        .filter_map(|id| {
            let rect = page.surface_rect(id)?;
            let aspect = rect.width / rect.height.max(1.0);
            Some(match id {
                SurfaceId::Hero => page.hero().frame(aspect),
                SurfaceId::Playground => page.playground().frame(aspect),
            })
        })
        .collect()
}

/// FPS readout and hit region outlines, drawn above everything else.
fn developer_overlay(
    list: &mut DrawList,
    developer: &DeveloperConfig,
    timer: &FrameTimer,
    height: f32,
) {
    if developer.show_hit_regions {
        let rects: Vec<_> = list.hits.iter().map(|h| h.rect).collect();
        for rect in rects {
            list.outline(Layer::Overlay, rect, HIT_OUTLINE, 0.0, 1.0);
        }
    }
    if developer.show_fps && timer.sample_count() > 0 {
        list.text(
            Layer::Overlay,
            DrawText::new(timer.label(), 8.0, height - 22.0, 12.0, FPS_COLOR).mono(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_common::{Action, Rect, SceneId};
    use folio_config::schema::FolioConfig;

    use super::*;

    fn ticked_timer() -> FrameTimer {
        let mut timer = FrameTimer::new();
        let start = Instant::now();
        timer.tick(start);
        timer.tick(start + Duration::from_millis(20));
        timer
    }

    #[test]
    fn overlay_is_empty_by_default() {
        let mut list = DrawList::new();
        list.hit(Rect::new(0.0, 0.0, 10.0, 10.0), Action::ScrollToTop);
        developer_overlay(&mut list, &DeveloperConfig::default(), &ticked_timer(), 600.0);
        assert!(list.overlay_quads.is_empty());
        assert!(list.overlay_text.is_empty());
    }

    #[test]
    fn hit_regions_are_outlined() {
        let mut list = DrawList::new();
        list.hit(Rect::new(0.0, 0.0, 10.0, 10.0), Action::ScrollToTop);
        list.hit(Rect::new(20.0, 0.0, 10.0, 10.0), Action::PageDown);
        let developer = DeveloperConfig {
            show_hit_regions: true,
            ..DeveloperConfig::default()
        };
        developer_overlay(&mut list, &developer, &ticked_timer(), 600.0);
        assert_eq!(list.overlay_quads.len(), 2);
        assert!(list.overlay_quads.iter().all(|q| q.border == 1.0));
    }

    #[test]
    fn fps_label_sits_at_bottom_left() {
        let mut list = DrawList::new();
        let developer = DeveloperConfig {
            show_fps: true,
            ..DeveloperConfig::default()
        };
        developer_overlay(&mut list, &developer, &ticked_timer(), 600.0);
        assert_eq!(list.overlay_text.len(), 1);
        let text = &list.overlay_text[0];
        assert!(text.text.contains("fps"));
        assert!(text.mono);
        assert_eq!(text.y, 578.0);
    }

    #[test]
    fn no_frames_before_layout() {
        let page = Page::new(&FolioConfig::default(), SceneId::Text);
        assert!(scene_frames(&page).is_empty());
    }
}
