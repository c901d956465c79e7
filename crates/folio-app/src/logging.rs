//! Tracing subscriber setup.

use folio_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "folio=info";

/// Filter directive for the subscriber.
///
/// A `--log-level` value wins over the config. A bare level such as
/// `debug` is scoped to the folio crates; anything containing a target or
/// several directives is used as given.
pub fn directive(cli: Option<&str>, config_level: LogLevel) -> String {
    match cli.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) if value.contains('=') || value.contains(',') => value.to_string(),
        Some(value) => format!("folio={}", value.to_ascii_lowercase()),
        None => format!("folio={}", config_level.as_str()),
    }
}

/// Installs the global `fmt` subscriber writing to stderr.
pub fn init(cli: Option<&str>, config_level: LogLevel) {
    let directive = directive(cli, config_level);
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(e) => {
            eprintln!("invalid log directive {directive:?} ({e}), using {FALLBACK_DIRECTIVE}");
            EnvFilter::new(FALLBACK_DIRECTIVE)
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_is_scoped_to_folio() {
        assert_eq!(directive(Some("debug"), LogLevel::Warn), "folio=debug");
        assert_eq!(directive(Some(" TRACE "), LogLevel::Info), "folio=trace");
    }

    #[test]
    fn cli_full_directive_is_kept() {
        assert_eq!(
            directive(Some("folio_ui=trace,wgpu=warn"), LogLevel::Info),
            "folio_ui=trace,wgpu=warn"
        );
        assert_eq!(directive(Some("wgpu_core=error"), LogLevel::Info), "wgpu_core=error");
    }

    #[test]
    fn config_level_when_no_cli() {
        assert_eq!(directive(None, LogLevel::Warn), "folio=warn");
        assert_eq!(directive(Some("  "), LogLevel::Error), "folio=error");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(directive(None, LogLevel::default()), FALLBACK_DIRECTIVE);
    }

    #[test]
    fn directives_parse() {
        for d in [
            directive(Some("debug"), LogLevel::Info),
            directive(None, LogLevel::Trace),
            FALLBACK_DIRECTIVE.to_string(),
        ] {
            assert!(d.parse::<tracing_subscriber::filter::Directive>().is_ok(), "{d}");
        }
    }
}
