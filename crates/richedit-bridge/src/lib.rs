//! Bridge between a native host and the rich-text editor page running
//! inside a `wry` webview.
//!
//! - Outbound: typed [`Command`]s rendered into `RE.*` calls and run
//!   through a serialized [`ScriptExecutor`]
//! - Inbound: the page queues action strings and navigates to
//!   `re-callback://`; the host drains the queue as JSON and dispatches
//!   each action to an [`EditorObserver`]
//! - Lifecycle: values set before the page is ready are cached and
//!   flushed on the first `ready` action
//! - Assets: the page is served over the `richedit://` custom protocol

pub mod action;
pub mod callback;
pub mod command;
pub mod content;
pub mod editor;
pub mod escape;
pub mod events;
pub mod executor;
pub mod host;
pub mod observer;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, ActionKind};
pub use callback::{is_callback_url, parse_action_queue, CALLBACK_SCHEME};
pub use command::{Alignment, Command, HeadingLevel, Query};
pub use content::{normalize_template_color, render_editor_page, ContentProvider};
pub use editor::{BridgeOptions, RichEditor};
pub use events::EditorSignal;
pub use executor::{ScriptExecutor, ScriptRunner};
pub use host::{run_signal_loop, EditorHost, EditorHostConfig, WryExecutor};
pub use observer::EditorObserver;
pub use state::{BridgePhase, EditorState};
