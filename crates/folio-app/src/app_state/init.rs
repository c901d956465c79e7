//! Window creation, renderer initialization, and live reload start-up.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use folio_config::schema::{StartupMode, WindowConfig};
use folio_config::{Palette, ReloadManager};
use folio_renderer::{RenderOptions, RenderState};

use super::core::FolioApp;
use super::types::MIN_WINDOW_SIZE;

/// Window attributes for the configured title, size and startup mode.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ))
        .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1));

    match config.startup_mode {
        StartupMode::Windowed => attrs,
        StartupMode::Maximized => attrs.with_maximized(true),
        StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

impl FolioApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = window_attributes(&self.config.window);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let options = RenderOptions {
            vsync: self.config.performance.vsync,
            font_family: self.config.font.family.clone(),
            mono_family: self.config.font.mono_family.clone(),
        };
        let render_state = pollster::block_on(RenderState::new(window.clone(), &options));

        match render_state {
            Ok(mut rs) => {
                rs.set_clear_color(Palette::resolve(&self.config.colors).background);
                rs.set_scale_factor(window.scale_factor());
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Start watching the config file when live reload is enabled.
    pub(super) fn start_live_reload(&mut self) {
        let Some(path) = self.watch_path.clone() else {
            return;
        };
        match ReloadManager::start(path.clone()) {
            Ok(manager) => {
                tracing::info!("Watching {} for changes", path.display());
                self.reload = Some(manager);
            }
            Err(e) => tracing::warn!("Live reload unavailable: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_attributes() {
        let config = WindowConfig::default();
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "TEMO | Portfolio");
        assert!(!attrs.maximized);
        assert!(attrs.fullscreen.is_none());
        assert!(attrs.inner_size.is_some());
    }

    #[test]
    fn maximized_startup() {
        let config = WindowConfig {
            startup_mode: StartupMode::Maximized,
            ..WindowConfig::default()
        };
        assert!(window_attributes(&config).maximized);
    }

    #[test]
    fn fullscreen_startup() {
        let config = WindowConfig {
            startup_mode: StartupMode::Fullscreen,
            ..WindowConfig::default()
        };
        assert!(window_attributes(&config).fullscreen.is_some());
    }
}
