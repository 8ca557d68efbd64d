use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};
use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Response, StatusCode};
use wry::WebViewBuilder;

use crate::callback::is_callback_url;
use crate::content::ContentProvider;
use crate::events::EditorSignal;

use super::types::PROTOCOL_NAME;

// =============================================================================
// NAVIGATION CLASSIFICATION
// =============================================================================

/// URL prefixes the webview loads without asking anyone.
pub const INTERNAL_NAV_PREFIXES: &[&str] = &[
    "richedit://",
    "http://richedit.localhost",
    "https://richedit.localhost",
    "about:blank",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// The page signalling queued actions. Never loaded.
    Callback,
    /// The editor's own assets.
    Internal,
    /// Anything else: a link the user activated.
    Link,
}

pub fn classify_navigation(url: &str) -> NavigationKind {
    if is_callback_url(url) {
        NavigationKind::Callback
    } else if INTERNAL_NAV_PREFIXES.iter().any(|p| url.starts_with(p)) {
        NavigationKind::Internal
    } else {
        NavigationKind::Link
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

/// Callback and link navigations are cancelled here and forwarded as
/// signals. A link is loaded only once it is approved, by passing
/// through `approved`.
pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    signals: UnboundedSender<EditorSignal>,
    approved: Arc<Mutex<Option<String>>>,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| match classify_navigation(&url) {
        NavigationKind::Callback => {
            if signals.send(EditorSignal::DrainQueue).is_err() {
                warn!("callback dropped: signal loop is gone");
            }
            false
        }
        NavigationKind::Internal => true,
        NavigationKind::Link => {
            if let Ok(mut pending) = approved.lock() {
                if pending.as_deref() == Some(url.as_str()) {
                    pending.take();
                    debug!(url = %url, "following approved link");
                    return true;
                }
            }
            debug!(url = %url, "link held for approval");
            if signals.send(EditorSignal::LinkActivated(url)).is_err() {
                warn!("link dropped: signal loop is gone");
            }
            false
        }
    })
}

pub(super) fn attach_custom_protocol(
    builder: WebViewBuilder<'_>,
    provider: Arc<ContentProvider>,
) -> WebViewBuilder<'_> {
    builder.with_custom_protocol(PROTOCOL_NAME.to_string(), move |_wv_id, request| {
        let path = request.uri().path().to_string();
        match provider.resolve(&path) {
            Some((mime, data)) => asset_response(StatusCode::OK, &mime, data.into_owned()),
            None => {
                warn!(path = %path, "custom protocol: asset not found");
                asset_response(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
            }
        }
    })
}

fn asset_response(status: StatusCode, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime) {
        headers.insert(CONTENT_TYPE, value);
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("richedit://localhost"),
    );
    response
}

// =============================================================================
// TESTS
// =============================================================================
