//! Full configuration validation.
//!
//! Validates numeric ranges, color formats and the log level, collecting
//! every problem into a single error.

mod helpers;


use crate::schema::EditorConfig;
use helpers::{validate_color, validate_range, validate_range_u64};
use richedit_common::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EditorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "editor.line_height", config.editor.line_height, 8, 200);

    validate_color(&mut errors, "appearance.text_color", &config.appearance.text_color);
    validate_color(
        &mut errors,
        "appearance.background_color",
        &config.appearance.background_color,
    );
    validate_range(&mut errors, "appearance.font_size", config.appearance.font_size, 6, 96);

    validate_range_u64(
        &mut errors,
        "bridge.did_load_delay_ms",
        config.bridge.did_load_delay_ms,
        0,
        10_000,
    );
    validate_range_u64(
        &mut errors,
        "bridge.script_timeout_ms",
        config.bridge.script_timeout_ms,
        100,
        60_000,
    );
    if config.bridge.assets_dir.trim().is_empty() {
        errors.push("bridge.assets_dir must not be empty".into());
    }

    validate_range(&mut errors, "window.width", config.window.width, 200, 8192);
    validate_range(&mut errors, "window.height", config.window.height, 200, 8192);

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = '{}' must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
