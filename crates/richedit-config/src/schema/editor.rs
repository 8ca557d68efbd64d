//! Initial editor state.

use serde::{Deserialize, Serialize};

/// Values seeded into the editor before the page reports ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSection {
    /// Text shown while the document is empty.
    pub placeholder: String,
    /// Line height in pixels (valid range: 8-200).
    pub line_height: u32,
    /// Whether the document accepts input.
    pub editing_enabled: bool,
    /// HTML loaded into the document on startup.
    pub initial_html: String,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            line_height: 28,
            editing_enabled: true,
            initial_html: String::new(),
        }
    }
}
