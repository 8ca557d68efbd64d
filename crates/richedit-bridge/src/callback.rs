//! The page-to-host callback channel.
//!
//! The page pushes action strings onto `RE.commandQueue` and navigates to
//! [`CALLBACK_SCHEME`]. The host cancels that navigation, takes the whole
//! queue in one evaluation and dispatches the entries in order.

use richedit_common::BridgeError;
use tracing::warn;

/// Navigation targets starting with this are queue-drain signals.
pub const CALLBACK_SCHEME: &str = "re-callback://";

pub fn is_callback_url(url: &str) -> bool {
    url.starts_with(CALLBACK_SCHEME)
}

/// Decode a drained queue. Anything other than a JSON array of strings
/// yields an empty list.
pub fn parse_action_queue(json: &str) -> Vec<String> {
    match try_parse_action_queue(json) {
        Ok(actions) => actions,
        Err(e) => {
            warn!(error = %e, json_len = json.len(), "discarding callback queue");
            Vec::new()
        }
    }
}

fn try_parse_action_queue(json: &str) -> Result<Vec<String>, BridgeError> {
    if json.trim().is_empty() {
        return Err(BridgeError::InvalidQueue("empty result".into()));
    }
    serde_json::from_str::<Vec<String>>(json).map_err(|e| BridgeError::InvalidQueue(e.to_string()))
}
