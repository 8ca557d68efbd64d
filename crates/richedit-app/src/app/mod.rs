//! Application state: one window hosting one editor webview.

mod event_handler;
mod init;
mod observer;
mod polling;

use std::sync::Arc;

use richedit_bridge::host::WryExecutor;
use richedit_bridge::{EditorHost, RichEditor};
use richedit_config::EditorConfig;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use winit::window::Window;

/// Top-level application state.
pub struct EditorApp {
    config: EditorConfig,
    /// `--html`, replacing `editor.initial_html`.
    initial_html: Option<String>,

    // Windowing
    window: Option<Arc<Window>>,
    host: Option<EditorHost>,
    editor: Option<RichEditor<WryExecutor>>,

    // The editor's tasks run on this thread, pumped between events.
    runtime: Runtime,
    local: LocalSet,

    should_exit: bool,
}

impl EditorApp {
    pub fn new(config: EditorConfig, initial_html: Option<String>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            config,
            initial_html,
            window: None,
            host: None,
            editor: None,
            runtime,
            local: LocalSet::new(),
            should_exit: false,
        })
    }

    /// Detach the observer and drop the webview before the loop exits.
    fn shutdown(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.clear_observer();
        }
        self.host = None;
        self.should_exit = true;
        tracing::info!("Editor closed");
    }
}
