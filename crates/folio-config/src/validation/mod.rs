//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod appearance;
mod helpers;
mod misc;
mod motion;

#[cfg(test)]
mod tests;

use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    sanitize(&mut config.clone())
}

/// Validate and clamp every range-checked value into its bounds in place.
///
/// Returns the same errors as [`validate`]; the config is usable either way.
pub fn sanitize(config: &mut FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    appearance::validate_colors(&mut errors, config);
    appearance::validate_font(&mut errors, config);
    appearance::validate_window(&mut errors, config);
    motion::validate_hero(&mut errors, config);
    motion::validate_playground(&mut errors, config);
    motion::validate_animation(&mut errors, config);
    misc::validate_notifications(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
