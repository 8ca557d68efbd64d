//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod appearance;
mod bridge;
mod editor;
mod system;

pub use appearance::*;
pub use bridge::*;
pub use editor::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the editor host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub editor: EditorSection,
    pub appearance: AppearanceConfig,
    pub bridge: BridgeConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
