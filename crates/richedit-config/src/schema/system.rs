//! Window and logging configuration types.

use serde::{Deserialize, Serialize};

/// Host window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 200-8192).
    pub width: u32,
    /// Logical height (valid range: 200-8192).
    pub height: u32,
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Rich Editor".into(),
            width: 900,
            height: 700,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
