//! Inbound path: navigation signals, queue drains and action dispatch.

use tracing::debug;

use crate::action::Action;
use crate::callback::{is_callback_url, parse_action_queue};
use crate::command::Query;
use crate::executor::ScriptExecutor;

use super::RichEditor;

impl<E: ScriptExecutor + 'static> RichEditor<E> {
    /// Decide a navigation the page attempted. Callback-scheme targets
    /// drain the action queue and are never followed; any other target
    /// is a link and is up to the observer.
    pub async fn handle_navigation(&self, url: &str) -> bool {
        if is_callback_url(url) {
            self.drain_callback_queue().await;
            return false;
        }
        self.should_follow_link(url)
    }

    /// Ask the observer about a link. No observer, or no answer, allows it.
    pub fn should_follow_link(&self, url: &str) -> bool {
        let observer = self.inner.observer.borrow().clone();
        let decision = observer.and_then(|o| o.should_follow_link(url));
        debug!(url, ?decision, "link activation");
        decision.unwrap_or(true)
    }

    /// Take every pending action from the page and dispatch them in order.
    pub async fn drain_callback_queue(&self) {
        let raw = self.runner().query(Query::CommandQueue).await;
        let actions = parse_action_queue(&raw);
        debug!(count = actions.len(), "drained callback queue");
        for action in &actions {
            self.dispatch_action(action).await;
        }
    }

    /// Dispatch a single raw action string.
    pub async fn dispatch_action(&self, raw: &str) {
        let Some(action) = Action::parse(raw) else {
            debug!(action = raw, "ignoring unknown action");
            return;
        };
        debug!(?action, "dispatch action");

        match action {
            Action::Ready => self.on_ready().await,
            Action::Input => {
                self.scroll_caret_to_visible().await;
                self.refresh_content().await;
                self.update_height().await;
            }
            Action::UpdateHeight => self.update_height().await,
            Action::Focus => self.notify(|o| o.took_focus()),
            Action::Blur => self.notify(|o| o.lost_focus()),
            Action::Custom(payload) => {
                self.refresh_content().await;
                self.notify(|o| o.handle_action(payload));
            }
        }
    }

    async fn scroll_caret_to_visible(&self) {
        let y = self.relative_caret_y().await;
        self.notify(|o| o.caret_did_move(y));
    }

    /// Re-read the document from the page into the cache. Until the page
    /// is ready the cache is the host's and is left alone.
    async fn refresh_content(&self) {
        if !self.is_ready() {
            debug!("page not ready, keeping cached content");
            return;
        }
        let html = self.runner().query(Query::Html).await;
        self.update_content(html);
    }

    pub(super) fn update_content(&self, html: String) {
        self.inner.state.borrow_mut().content_html = html.clone();
        self.notify(|o| o.content_did_change(&html));
    }

    /// Re-measure the editor and notify only when the height changed.
    pub(super) async fn update_height(&self) {
        let height = self
            .runner()
            .query_int(Query::ContentHeight)
            .await
            .unwrap_or(0);
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let changed = state.editor_height != height;
            state.editor_height = height;
            changed
        };
        if changed {
            self.notify(|o| o.height_did_change(height));
        }
    }
}
