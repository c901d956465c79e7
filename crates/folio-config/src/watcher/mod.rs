//! File watcher for live config reload.
//!
//! `notify` delivers change events on its own thread; they are forwarded
//! over a channel and debounced on the main loop with a 500ms quiet window.

mod config_watcher;
mod debounce;


pub use config_watcher::ConfigWatcher;
pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
