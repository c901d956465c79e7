//! Live config reload: combines the watcher, the debouncer, and the loader.

use std::path::PathBuf;
use std::time::Instant;

use folio_common::ConfigError;
use tracing::{info, warn};

use crate::schema::FolioConfig;
use crate::toml_loader;
use crate::watcher::{ConfigWatcher, Debouncer};

/// Polled from the event loop; yields a freshly loaded config after the
/// file has changed and settled.
pub struct ReloadManager {
    watcher: ConfigWatcher,
    debouncer: Debouncer,
}

impl ReloadManager {
    pub fn start(path: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            watcher: ConfigWatcher::start(path)?,
            debouncer: Debouncer::default(),
        })
    }

    /// Returns a new config when a debounced change is ready. Parse errors
    /// are logged and the current config is kept.
    pub fn poll(&mut self, now: Instant) -> Option<FolioConfig> {
        if self.watcher.take_changes() {
            self.debouncer.signal(now);
        }
        if !self.debouncer.ready(now) {
            return None;
        }
        self.reload_now()
    }

    /// Loads the watched file immediately.
    pub fn reload_now(&self) -> Option<FolioConfig> {
        match toml_loader::load_from_path(self.watcher.path()) {
            Ok(config) => {
                info!("config reloaded");
                Some(config)
            }
            Err(e) => {
                warn!("config reload failed: {e}");
                None
            }
        }
    }
}
