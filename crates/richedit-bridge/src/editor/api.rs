//! Host-facing setters, getters and commands.

use tracing::debug;

use crate::command::{Command, Query};
use crate::executor::ScriptExecutor;

use super::RichEditor;

impl<E: ScriptExecutor + 'static> RichEditor<E> {
    // -- content --

    /// Current document HTML: live from the page once ready, otherwise
    /// whatever has been cached.
    pub async fn html(&self) -> String {
        if self.is_ready() {
            self.runner().query(Query::Html).await
        } else {
            self.inner.state.borrow().content_html.clone()
        }
    }

    pub async fn set_html(&self, html: &str) {
        self.update_content(html.to_string());
        if self.is_ready() {
            self.runner().run(&Command::SetHtml(html.to_string())).await;
            self.update_height().await;
        }
    }

    /// Plain text of the document. Empty until the page is ready.
    pub async fn text(&self) -> String {
        if self.is_ready() {
            self.runner().query(Query::Text).await
        } else {
            String::new()
        }
    }

    // -- editable flag --

    pub async fn is_editing_enabled(&self) -> bool {
        if self.is_ready() {
            self.runner().query_bool(Query::IsEditable).await
        } else {
            self.inner.state.borrow().editing_enabled
        }
    }

    pub async fn set_editing_enabled(&self, enabled: bool) {
        self.inner.state.borrow_mut().editing_enabled = enabled;
        if self.is_ready() {
            self.runner().run(&Command::SetEditable(enabled)).await;
        }
    }

    // -- placeholder --

    pub fn placeholder(&self) -> String {
        self.inner.state.borrow().placeholder.clone()
    }

    pub async fn set_placeholder(&self, text: &str) {
        self.inner.state.borrow_mut().placeholder = text.to_string();
        if self.is_ready() {
            self.runner()
                .run(&Command::SetPlaceholder(text.to_string()))
                .await;
        }
    }

    // -- line height --

    /// Line height in pixels as the page reports it, falling back to the
    /// cached value.
    pub async fn line_height(&self) -> u32 {
        if self.is_ready() {
            let live = self.runner().query_int(Query::LineHeight).await;
            if let Some(px) = live.and_then(|px| u32::try_from(px).ok()) {
                return px;
            }
        }
        self.inner.state.borrow().line_height
    }

    pub async fn set_line_height(&self, px: u32) {
        self.inner.state.borrow_mut().line_height = px;
        if self.is_ready() {
            self.runner().run(&Command::LineHeight(px)).await;
        }
    }

    // -- geometry --

    /// Last height reported to the observer.
    pub fn editor_height(&self) -> i32 {
        self.inner.state.borrow().editor_height
    }

    /// Height of the editable element as measured right now.
    pub async fn content_height(&self) -> i32 {
        if self.is_ready() {
            self.runner()
                .query_int(Query::ContentHeight)
                .await
                .unwrap_or(0)
        } else {
            self.editor_height()
        }
    }

    /// Caret offset from the top of the visible area; negative when the
    /// caret is above it.
    pub async fn relative_caret_y(&self) -> i32 {
        if self.is_ready() {
            self.runner()
                .query_int(Query::RelativeCaretY)
                .await
                .unwrap_or(0)
        } else {
            0
        }
    }

    // -- commands --

    /// Run a command. Content, placeholder, editable and line-height
    /// commands go through their setters so the cache stays current;
    /// everything else is dropped until the page is ready.
    pub async fn apply(&self, command: Command) {
        match command {
            Command::SetHtml(html) => self.set_html(&html).await,
            Command::SetPlaceholder(text) => self.set_placeholder(&text).await,
            Command::SetEditable(on) => self.set_editing_enabled(on).await,
            Command::LineHeight(px) => self.set_line_height(px).await,
            other if self.is_ready() => self.runner().run(&other).await,
            other => debug!(?other, "page not ready, dropping command"),
        }
    }

    // -- selection --

    pub async fn has_range_selection(&self) -> bool {
        self.is_ready() && self.runner().query_bool(Query::RangeSelectionExists).await
    }

    pub async fn has_range_or_caret_selection(&self) -> bool {
        self.is_ready()
            && self
                .runner()
                .query_bool(Query::RangeOrCaretSelectionExists)
                .await
    }

    /// Href of the link enclosing a range selection. `None` without a
    /// range selection or when the selection is not inside a link.
    pub async fn selected_href(&self) -> Option<String> {
        if !self.has_range_selection().await {
            return None;
        }
        let href = self.runner().query(Query::SelectedHref).await;
        (!href.is_empty()).then_some(href)
    }
}
