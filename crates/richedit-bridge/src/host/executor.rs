//! [`ScriptExecutor`] over a live wry webview.

use std::rc::Rc;
use std::sync::Mutex;

use async_trait::async_trait;
use richedit_common::ScriptError;
use tokio::sync::oneshot;
use wry::WebView;

use crate::executor::{coerce_script_result, ScriptExecutor};

/// Runs scripts with `evaluate_script_with_callback` and waits for the
/// result on a oneshot channel.
#[derive(Clone)]
pub struct WryExecutor {
    webview: Rc<WebView>,
}

impl WryExecutor {
    pub fn new(webview: Rc<WebView>) -> Self {
        Self { webview }
    }
}

#[async_trait(?Send)]
impl ScriptExecutor for WryExecutor {
    async fn evaluate(&self, script: &str) -> Result<String, ScriptError> {
        let (tx, rx) = oneshot::channel::<String>();
        // wry wants `Fn`; the sender is used at most once.
        let tx = Mutex::new(Some(tx));
        self.webview
            .evaluate_script_with_callback(script, move |raw| {
                if let Some(tx) = tx.lock().ok().and_then(|mut slot| slot.take()) {
                    let _ = tx.send(raw);
                }
            })
            .map_err(|e| ScriptError::Host(e.to_string()))?;

        // The webview dropping the callback unanswered closes the channel.
        let raw = rx.await.map_err(|_| ScriptError::Cancelled)?;
        Ok(coerce_script_result(&raw))
    }
}
