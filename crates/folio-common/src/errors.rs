use std::path::PathBuf;

/// Failures while reading, checking or watching `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    /// Every out-of-range or malformed field, joined with `"; "`.
    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures from OS services the page leans on.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// Copying the contact email failed: no clipboard owner or access denied.
    #[error("clipboard error: {0}")]
    ClipboardError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError(
            "font.size = 5 is out of range [10, 32]; window.width = 10 is out of range [480, 7680]"
                .into(),
        );
        assert!(err.to_string().starts_with("config validation error: font.size"));

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn clipboard_error_display() {
        let err = PlatformError::ClipboardError("no display".into());
        assert_eq!(err.to_string(), "clipboard error: no display");
    }
}
