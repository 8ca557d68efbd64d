pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, RichEditError, ScriptError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, RichEditError>;
