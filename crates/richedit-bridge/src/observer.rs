//! Notifications from the editor to the embedding application.

/// Receives editor events. Every method is optional.
///
/// Methods run on the UI thread, between engine evaluations. An observer
/// may hold a clone of the [`RichEditor`](crate::RichEditor) and call back
/// into it.
pub trait EditorObserver {
    fn height_did_change(&self, _height: i32) {}

    fn content_did_change(&self, _html: &str) {}

    fn took_focus(&self) {}

    fn lost_focus(&self) {}

    /// Fired once, a short delay after the page first reports ready.
    fn did_load(&self) {}

    /// Whether a clicked link should be followed. `None` means no
    /// opinion, which allows the navigation.
    fn should_follow_link(&self, _url: &str) -> Option<bool> {
        None
    }

    /// Payload of an `action/<payload>` callback.
    fn handle_action(&self, _action: &str) {}

    /// Caret offset from the top of the visible area after input.
    /// Negative when the caret is above it.
    fn caret_did_move(&self, _relative_y: i32) {}
}
