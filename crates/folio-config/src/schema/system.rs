//! System configuration types: notifications, performance, logging, and
//! advanced settings.

use serde::{Deserialize, Serialize};

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Maximum toasts on screen (valid range: 1-10).
    pub capacity: u32,
    /// Toast lifetime in seconds (valid range: 1-60).
    pub ttl_secs: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            ttl_secs: 5,
        }
    }
}

/// Performance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Target frames per second (valid range: 30-240).
    pub frame_rate: u32,
    pub vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            vsync: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Developer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DeveloperConfig {
    pub show_fps: bool,
    /// Outline every clickable region.
    pub show_hit_regions: bool,
}

/// Advanced configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedConfig {
    /// Watch the config file and apply edits live.
    pub live_reload: bool,
    pub developer: DeveloperConfig,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            live_reload: true,
            developer: DeveloperConfig::default(),
        }
    }
}
