//! Observer used by the binary: logs every notification.

use std::rc::Rc;

use richedit_bridge::EditorObserver;
use tokio::sync::Notify;
use tracing::{debug, info, trace};

pub(super) struct LoggingObserver {
    loaded: Rc<Notify>,
}

impl LoggingObserver {
    /// `loaded` is signalled once the page has settled after `ready`.
    pub(super) fn new(loaded: Rc<Notify>) -> Self {
        Self { loaded }
    }
}

impl EditorObserver for LoggingObserver {
    fn height_did_change(&self, height: i32) {
        debug!(height, "editor height changed");
    }

    fn content_did_change(&self, html: &str) {
        debug!(len = html.len(), "editor content changed");
    }

    fn took_focus(&self) {
        debug!("editor focused");
    }

    fn lost_focus(&self) {
        debug!("editor blurred");
    }

    fn did_load(&self) {
        info!("editor loaded");
        self.loaded.notify_one();
    }

    fn should_follow_link(&self, url: &str) -> Option<bool> {
        info!(url, "link activated");
        None
    }

    fn handle_action(&self, action: &str) {
        info!(action, "custom editor action");
    }

    fn caret_did_move(&self, relative_y: i32) {
        trace!(relative_y, "caret moved");
    }
}
