//! Host-side editor state.

/// Lifecycle of the page. `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgePhase {
    #[default]
    NotReady,
    Ready,
}

impl BridgePhase {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// Cached values mirrored from (or destined for) the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub content_html: String,
    pub editor_height: i32,
    pub editing_enabled: bool,
    pub placeholder: String,
    pub line_height: u32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            content_html: String::new(),
            editor_height: 0,
            editing_enabled: true,
            placeholder: String::new(),
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

pub const DEFAULT_LINE_HEIGHT: u32 = 28;
