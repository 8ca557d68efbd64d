//! Window creation and editor setup.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use richedit_bridge::content::EDITOR_PAGE;
use richedit_bridge::host::{logical_bounds, WryExecutor};
use richedit_bridge::{
    render_editor_page, run_signal_loop, BridgeOptions, Command, ContentProvider, EditorHost,
    EditorHostConfig, EditorState, RichEditor,
};
use richedit_common::Color;
use richedit_config::{AppearanceConfig, EditorConfig};

use super::observer::LoggingObserver;
use super::EditorApp;

impl EditorApp {
    /// Create the window and the editor webview inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let host_config = EditorHostConfig {
            devtools: self.config.window.devtools,
            ..Default::default()
        };
        let provider = editor_content(&self.config);

        let (host, signals) = match EditorHost::create(
            window.as_ref(),
            logical_bounds(size.width, size.height),
            host_config,
            provider,
        ) {
            Ok(created) => created,
            Err(e) => {
                tracing::error!("Failed to create editor webview: {e}");
                return false;
            }
        };

        let editor = RichEditor::with_state(
            host.executor(),
            bridge_options(&self.config),
            initial_state(&self.config, self.initial_html.as_deref()),
        );
        let loaded = Rc::new(Notify::new());
        editor.set_observer(Rc::new(LoggingObserver::new(Rc::clone(&loaded))));

        self.spawn_editor_tasks(&editor, &host, signals, loaded);
        host.focus();

        tracing::info!(
            width = size.width,
            height = size.height,
            "editor window ready"
        );
        self.window = Some(window);
        self.host = Some(host);
        self.editor = Some(editor);
        true
    }

    fn spawn_editor_tasks(
        &self,
        editor: &RichEditor<WryExecutor>,
        host: &EditorHost,
        signals: tokio::sync::mpsc::UnboundedReceiver<richedit_bridge::EditorSignal>,
        loaded: Rc<Notify>,
    ) {
        let link_host = host.clone();
        self.local.spawn_local(run_signal_loop(editor.clone(), signals, move |url| {
            link_host.follow_link(url)
        }));

        let commands = appearance_commands(&self.config.appearance);
        let editor = editor.clone();
        self.local.spawn_local(async move {
            loaded.notified().await;
            for command in commands {
                editor.apply(command).await;
            }
        });
    }
}

/// Asset provider with the editor page pre-rendered in the configured
/// text color. A missing page is logged; the webview then gets a 404
/// and the editor stays not-ready.
fn editor_content(config: &EditorConfig) -> ContentProvider {
    let assets = resolve_assets_dir(&config.bridge.assets_dir);
    let mut provider = ContentProvider::new(assets.clone());
    match render_editor_page(&provider, &config.appearance.text_color) {
        Ok(page) => provider.add_override(EDITOR_PAGE, "text/html", page),
        Err(e) => tracing::error!(assets = %assets.display(), "{e}"),
    }
    provider
}

/// Relative asset paths are tried against the working directory, then
/// next to the executable, then the source tree.
pub(super) fn resolve_assets_dir(configured: &str) -> PathBuf {
    let configured = Path::new(configured);
    if configured.is_absolute() {
        return configured.to_path_buf();
    }

    let mut candidates = vec![configured.to_path_buf()];
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(configured));
    }
    candidates.push(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(configured),
    );

    candidates
        .iter()
        .find(|dir| dir.join(EDITOR_PAGE).is_file())
        .cloned()
        .unwrap_or_else(|| configured.to_path_buf())
}

pub(super) fn bridge_options(config: &EditorConfig) -> BridgeOptions {
    BridgeOptions {
        did_load_delay: Duration::from_millis(config.bridge.did_load_delay_ms),
        script_timeout: Duration::from_millis(config.bridge.script_timeout_ms),
    }
}

/// Cached state flushed into the page on its first `ready`.
pub(super) fn initial_state(config: &EditorConfig, html_override: Option<&str>) -> EditorState {
    EditorState {
        content_html: html_override
            .unwrap_or(&config.editor.initial_html)
            .to_string(),
        editing_enabled: config.editor.editing_enabled,
        placeholder: config.editor.placeholder.clone(),
        line_height: config.editor.line_height,
        ..EditorState::default()
    }
}

/// Styling applied once the page has loaded. Unparseable colors are skipped.
pub(super) fn appearance_commands(appearance: &AppearanceConfig) -> Vec<Command> {
    let mut commands = Vec::new();
    match Color::from_hex(&appearance.text_color) {
        Some(c) => commands.push(Command::EditorFontColor(c)),
        None => tracing::warn!(color = %appearance.text_color, "ignoring text color"),
    }
    match Color::from_hex(&appearance.background_color) {
        Some(c) => commands.push(Command::EditorBackgroundColor(c)),
        None => tracing::warn!(color = %appearance.background_color, "ignoring background color"),
    }
    commands.push(Command::FontSize(appearance.font_size));
    commands
}
