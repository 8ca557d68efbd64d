/// Name of the custom protocol serving the editor assets.
pub const PROTOCOL_NAME: &str = "richedit";

/// URL of the bundled editor page.
///
/// WebView2 rewrites custom protocols: `richedit://localhost/...` is
/// served as `http://richedit.localhost/...`.
pub fn editor_page_url() -> String {
    if cfg!(windows) {
        format!("http://{PROTOCOL_NAME}.localhost/{}", crate::content::EDITOR_PAGE)
    } else {
        format!("{PROTOCOL_NAME}://localhost/{}", crate::content::EDITOR_PAGE)
    }
}

/// Configuration for the editor's webview.
#[derive(Debug, Clone)]
pub struct EditorHostConfig {
    /// Page to load. Defaults to the bundled editor page.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (on by default in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for EditorHostConfig {
    fn default() -> Self {
        Self {
            url: editor_page_url(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("RichEdit/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl EditorHostConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
