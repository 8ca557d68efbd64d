mod app;
mod cli;

use std::path::Path;

use richedit_config::EditorConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// `--log-level` wins; otherwise the configured level scoped to our crates.
fn log_directive(cli_level: Option<&str>, config: &EditorConfig) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("richedit={level}"),
        None => format!("richedit={}", config.logging.level),
    }
}

/// Schema version and the full config as JSON, for startup logs.
fn describe_config(config: &EditorConfig) -> String {
    format!(
        "schema v{} {}",
        richedit_config::CONFIG_SCHEMA_VERSION,
        richedit_config::config_to_json(config)
    )
}

fn main() {
    let args = cli::parse();

    // Logging is not up yet; failures are reported once it is.
    let loaded = match args.config.as_deref() {
        Some(path) => richedit_config::load_config_from(Path::new(path)),
        None => richedit_config::load_config(),
    };
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let directive = log_directive(args.log_level.as_deref(), &config);
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new("richedit=info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("RichEdit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config rejected, using defaults: {e}");
    }
    tracing::debug!("Effective config: {}", describe_config(&config));

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = match app::EditorApp::new(config, args.html) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return;
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
