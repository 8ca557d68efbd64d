//! The editor's webview: creation, asset serving and navigation routing.

mod executor;
mod handlers;
mod signal_loop;
mod types;

pub use executor::WryExecutor;
pub use handlers::{classify_navigation, NavigationKind, INTERNAL_NAV_PREFIXES};
pub use signal_loop::run_signal_loop;
pub use types::{editor_page_url, EditorHostConfig, PROTOCOL_NAME};

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use richedit_common::BridgeError;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::content::ContentProvider;
use crate::events::EditorSignal;

/// A child webview hosting the editor page. Clones share the webview.
#[derive(Clone)]
pub struct EditorHost {
    webview: Rc<WebView>,
    approved_link: Arc<Mutex<Option<String>>>,
}

impl EditorHost {
    /// Create the webview as a child of `window`, positioned at `bounds`.
    ///
    /// Signals raised by the page arrive on the returned receiver; feed
    /// them to [`run_signal_loop`].
    pub fn create<W: HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: EditorHostConfig,
        provider: ContentProvider,
    ) -> Result<(Self, UnboundedReceiver<EditorSignal>), BridgeError> {
        let (tx, rx) = unbounded_channel();
        let approved_link = Arc::new(Mutex::new(None));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_focused(true);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_navigation_handler(builder, tx, Arc::clone(&approved_link));
        builder = handlers::attach_custom_protocol(builder, Arc::new(provider));
        builder = builder.with_url(&config.url);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| BridgeError::WebView(e.to_string()))?;

        debug!(url = %config.url, "editor webview created");

        Ok((
            Self {
                webview: Rc::new(webview),
                approved_link,
            },
            rx,
        ))
    }

    /// Script executor bound to this webview.
    pub fn executor(&self) -> WryExecutor {
        WryExecutor::new(Rc::clone(&self.webview))
    }

    /// Navigate to a link the observer allowed.
    pub fn follow_link(&self, url: &str) {
        if let Ok(mut pending) = self.approved_link.lock() {
            *pending = Some(url.to_string());
        }
        if let Err(e) = self.webview.load_url(url) {
            warn!(url, error = %e, "failed to follow link");
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "failed to resize editor webview");
        }
    }

    pub fn focus(&self) {
        if let Err(e) = self.webview.focus() {
            warn!(error = %e, "failed to focus editor webview");
        }
    }
}

/// A logical-pixel rect at the window origin.
pub fn logical_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_bounds_start_at_origin() {
        let rect = logical_bounds(800.0, 600.0);
        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert_eq!((pos.x, pos.y), (0.0, 0.0));
            }
            _ => panic!("Expected logical position"),
        }
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
