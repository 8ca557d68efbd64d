//! Editor colors and typography.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Editing text color baked into the page at load time (`#rrggbb`).
    pub text_color: String,
    /// Editor background (`#rrggbb`).
    pub background_color: String,
    /// Base font size in pixels (valid range: 6-96).
    pub font_size: u32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            text_color: "#666666".into(),
            background_color: "#ffffff".into(),
            font_size: 16,
        }
    }
}
