//! NotReady -> Ready transition and the delayed did-load notification.

use std::rc::Rc;

use tracing::{debug, info};

use crate::command::Command;
use crate::executor::ScriptExecutor;
use crate::state::BridgePhase;

use super::RichEditor;

impl<E: ScriptExecutor + 'static> RichEditor<E> {
    /// First `ready`: flush the cache and schedule did-load. Every
    /// `ready` re-measures the height.
    pub(super) async fn on_ready(&self) {
        if !self.is_ready() {
            self.inner.phase.set(BridgePhase::Ready);
            info!("editor page ready");
            self.flush_cached_state().await;
            self.schedule_did_load();
        }
        self.update_height().await;
    }

    /// Push cached values into the page: content, editable flag,
    /// placeholder, line height, in that order.
    async fn flush_cached_state(&self) {
        let state = self.state();
        debug!(
            content_len = state.content_html.len(),
            editing_enabled = state.editing_enabled,
            line_height = state.line_height,
            "flushing cached editor state"
        );
        let runner = self.runner();
        runner.run(&Command::SetHtml(state.content_html)).await;
        runner.run(&Command::SetEditable(state.editing_enabled)).await;
        runner.run(&Command::SetPlaceholder(state.placeholder)).await;
        runner.run(&Command::LineHeight(state.line_height)).await;
    }

    /// The timer holds only a weak reference; dropping the editor aborts it.
    fn schedule_did_load(&self) {
        let delay = self.inner.options.did_load_delay;
        if delay.is_zero() {
            self.notify(|o| o.did_load());
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let timer = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.did_load_timer.borrow_mut().take();
                RichEditor { inner }.notify(|o| o.did_load());
            }
        });
        *self.inner.did_load_timer.borrow_mut() = Some(timer);
    }
}
