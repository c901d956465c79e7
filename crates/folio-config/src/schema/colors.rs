//! Color palette configuration.

use serde::{Deserialize, Serialize};

/// Page color palette. Values accept `#RRGGBB`, `#RRGGBBAA`, or `rgba(...)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub background: String,
    pub surface: String,
    pub secondary: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".into(),
            accent: "#8b5cf6".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            background: "#0b0f1a".into(),
            surface: "#111827".into(),
            secondary: "#1e293b".into(),
            text: "#f8fafc".into(),
            text_muted: "#94a3b8".into(),
            border: "rgba(148,163,184,0.18)".into(),
        }
    }
}
