//! Host/page bridge tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Delay between the page's ready signal and the did-load
    /// notification, in milliseconds (valid range: 0-10000).
    pub did_load_delay_ms: u64,
    /// Longest a single script evaluation may take, in milliseconds
    /// (valid range: 100-60000).
    pub script_timeout_ms: u64,
    /// Directory holding `editor/index.html` and its scripts.
    pub assets_dir: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            did_load_delay_ms: 500,
            script_timeout_ms: 5000,
            assets_dir: "assets".into(),
        }
    }
}
