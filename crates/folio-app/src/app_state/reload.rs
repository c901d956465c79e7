//! Applying a new config to a running app.

use std::time::Instant;

use folio_common::Notification;
use folio_config::schema::FolioConfig;
use folio_config::Palette;

use super::core::FolioApp;
use super::types::frame_interval;

impl FolioApp {
    /// Apply a freshly loaded config. Page view state is preserved; window
    /// size and startup mode only take effect on the next launch.
    pub(super) fn apply_config(&mut self, config: FolioConfig) {
        self.page.apply_config(&config);
        if let Some(ref mut rs) = self.render_state {
            rs.set_clear_color(Palette::resolve(&config.colors).background);
            rs.set_fonts(&config.font.family, &config.font.mono_family);
        }
        if let Some(ref w) = self.window {
            w.set_title(&config.window.title);
        }
        self.frame_interval = frame_interval(config.performance.frame_rate);
        self.next_frame = Instant::now();
        self.config = config;
        tracing::info!("Config applied");
    }

    /// Reload the config file on demand.
    pub(super) fn reload_config(&mut self) {
        let loaded = match self.reload {
            Some(ref manager) => manager.reload_now(),
            None => match folio_config::load_config(self.config_override.as_deref()) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Config reload failed: {e}");
                    None
                }
            },
        };

        match loaded {
            Some(config) => {
                self.apply_config(config);
                self.page.notify(Notification::info(
                    "Config Reloaded",
                    "Settings were applied.",
                ));
            }
            None => self.page.notify(Notification::error(
                "Reload Failed",
                "The config file could not be loaded. See the log for details.",
            )),
        }
    }
}
