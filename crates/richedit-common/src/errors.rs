use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of a single script evaluation inside the embedded engine.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("engine error: {0}")]
    Engine(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("evaluation dropped before completion")]
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("editor asset missing: {0}")]
    AssetMissing(PathBuf),

    #[error("invalid callback queue: {0}")]
    InvalidQueue(String),

    #[error("webview error: {0}")]
    WebView(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RichEditError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
