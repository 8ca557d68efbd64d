//! Editor page assets served over the `richedit://` custom protocol.
//!
//! The page (`editor/index.html`) is a static file with one templated
//! token, the editing text color, substituted before it is served.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use richedit_common::{BridgeError, Color};

/// Path of the editor page relative to the assets directory.
pub const EDITOR_PAGE: &str = "editor/index.html";

/// Token in the page replaced with six hex digits (no `#`).
pub const TEXT_COLOR_TOKEN: &str = "{{editor_text_color}}";

/// Used when the configured text color is not a 6-digit hex value.
pub const FALLBACK_TEXT_COLOR: &str = "666666";

/// Serves files from a base directory, with in-memory overrides.
///
/// A request for `richedit://localhost/editor/rich_editor.js` resolves
/// to `{base_dir}/editor/rich_editor.js`.
pub struct ContentProvider {
    base_dir: PathBuf,
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset; it wins over the filesystem.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        // Canonicalize both sides so `..` and symlinks cannot escape.
        let file_path = self.base_dir.join(clean);
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        _ => "application/octet-stream",
    }
}

/// Bare or `#`-prefixed `rrggbb` -> the six digits; anything else falls
/// back to [`FALLBACK_TEXT_COLOR`].
pub fn normalize_template_color(input: &str) -> String {
    match Color::from_hex(input.trim()) {
        Some(_) => input.trim().trim_start_matches('#').to_string(),
        None => FALLBACK_TEXT_COLOR.to_string(),
    }
}

/// Substitute the text color into a page template.
pub fn apply_text_color(template: &str, text_color: &str) -> String {
    template.replace(TEXT_COLOR_TOKEN, &normalize_template_color(text_color))
}

/// Load the editor page and bake in the text color.
pub fn render_editor_page(provider: &ContentProvider, text_color: &str) -> Result<String, BridgeError> {
    let missing = || BridgeError::AssetMissing(provider.base_dir().join(EDITOR_PAGE));
    let (_, data) = provider.resolve(EDITOR_PAGE).ok_or_else(missing)?;
    let template = String::from_utf8(data.into_owned()).map_err(|_| missing())?;
    Ok(apply_text_color(&template, text_color))
}
