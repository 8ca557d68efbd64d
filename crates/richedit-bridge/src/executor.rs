//! Script execution against the embedded page.
//!
//! The page runs one script at a time. [`ScriptRunner`] enforces that on
//! the host side as well: every evaluation waits for the previous one to
//! complete, and failures collapse to an empty string. An evaluation
//! that does not complete within the runner's timeout counts as failed,
//! so a lost completion cannot hold up the ones queued behind it.

use std::time::Duration;

use async_trait::async_trait;
use richedit_common::ScriptError;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::command::{Command, Query};

/// Evaluates a script in the page's document context.
///
/// Implementations must complete every call exactly once, including when
/// the underlying webview goes away mid-evaluation.
#[async_trait(?Send)]
pub trait ScriptExecutor {
    async fn evaluate(&self, script: &str) -> Result<String, ScriptError>;
}

/// Upper bound on a single evaluation.
pub const DEFAULT_SCRIPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Serializing wrapper around a [`ScriptExecutor`].
pub struct ScriptRunner<E> {
    executor: E,
    gate: Mutex<()>,
    timeout: Duration,
}

impl<E: ScriptExecutor> ScriptRunner<E> {
    pub fn new(executor: E) -> Self {
        Self::with_timeout(executor, DEFAULT_SCRIPT_TIMEOUT)
    }

    pub fn with_timeout(executor: E, timeout: Duration) -> Self {
        Self {
            executor,
            gate: Mutex::new(()),
            timeout,
        }
    }

    /// Run `script`, returning `""` if the engine fails, times out or
    /// yields nothing.
    pub async fn evaluate(&self, script: &str) -> String {
        let _turn = self.gate.lock().await;
        let pending = self.executor.evaluate(script);
        let outcome = tokio::time::timeout(self.timeout, pending)
            .await
            .unwrap_or(Err(ScriptError::Cancelled));
        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, script_len = script.len(), "script evaluation failed");
                String::new()
            }
        }
    }

    pub async fn run(&self, command: &Command) {
        let script = command.script();
        debug!(script = %script, "run command");
        self.evaluate(&script).await;
    }

    pub async fn query(&self, query: Query) -> String {
        self.evaluate(query.script()).await
    }

    /// A query whose result is `"true"` or `"false"`.
    pub async fn query_bool(&self, query: Query) -> bool {
        self.query(query).await == "true"
    }

    /// A numeric query, rounded to the nearest integer. Unparseable
    /// results read as `None`.
    pub async fn query_int(&self, query: Query) -> Option<i32> {
        parse_int(&self.query(query).await)
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

/// Parse an engine number, accepting `"12"`, `"12.0"` and `"11.6"`.
pub fn parse_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    trimmed.parse::<i32>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.round() as i32)
    })
}

/// Normalize a raw evaluation result to the string the bridge works with.
///
/// wry reports results JSON-encoded: string results arrive quoted,
/// numbers and booleans bare, and `undefined` as `null` or nothing.
pub fn coerce_script_result(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Null) => String::new(),
        Ok(serde_json::Value::Bool(b)) => b.to_string(),
        Ok(serde_json::Value::Number(n)) => n.to_string(),
        Ok(other) => other.to_string(),
        Err(_) if raw.trim() == "undefined" => String::new(),
        Err(_) => raw.to_string(),
    }
}
