//! Rich editor configuration.
//!
//! TOML-based configuration for the editor host. Every section uses
//! serde defaults so a partial (or empty) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use richedit_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("placeholder: {}", config.editor.placeholder);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AppearanceConfig, BridgeConfig, EditorConfig, EditorSection, LoggingConfig, WindowConfig,
    CONFIG_SCHEMA_VERSION,
};

use richedit_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<EditorConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (e.g. `--config`) and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<EditorConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EditorConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
