//! Test doubles: a scriptable stand-in for the editor page and an
//! observer that records what it was told.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use richedit_common::ScriptError;

use crate::executor::ScriptExecutor;
use crate::observer::EditorObserver;

/// Run `fut` on a paused current-thread runtime inside a `LocalSet`.
pub(crate) fn block_on_local<F: Future>(fut: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .expect("test runtime");
    tokio::task::LocalSet::new().block_on(&rt, fut)
}

/// Decode the single-quoted literals in a script, honoring escapes.
/// `None` if a literal is left open.
pub(crate) fn quoted_args(script: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut chars = script.chars();
    while let Some(ch) = chars.next() {
        if ch != '\'' {
            continue;
        }
        let mut arg = String::new();
        loop {
            match chars.next()? {
                '\'' => break,
                '\\' => match chars.next()? {
                    'n' => arg.push('\n'),
                    'r' => arg.push('\r'),
                    'u' => {
                        let hex: String = chars.by_ref().take(4).collect();
                        arg.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
                    }
                    other => arg.push(other),
                },
                other => arg.push(other),
            }
        }
        args.push(arg);
    }
    Some(args)
}

#[derive(Default)]
struct PageModel {
    html: String,
    placeholder: String,
    line_height: String,
    editable: bool,
    content_height: i32,
    caret_y: i32,
    range_selection: bool,
    caret_selection: bool,
    selected_href: String,
    pending: Vec<String>,
    raw_queue: Option<String>,
    fail_next: Option<String>,
    scripts: Vec<String>,
    latency: Option<Duration>,
    in_flight: usize,
    max_in_flight: usize,
}

/// Minimal model of the `RE` object, enough to observe the bridge.
#[derive(Clone, Default)]
pub(crate) struct FakeEngine {
    page: Rc<RefCell<PageModel>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        let engine = Self::default();
        engine.page.borrow_mut().editable = true;
        engine
    }

    pub fn with_latency(self, latency: Duration) -> Self {
        self.page.borrow_mut().latency = Some(latency);
        self
    }

    /// Simulate the page queueing actions for the host.
    pub fn push_actions(&self, actions: &[&str]) {
        self.page
            .borrow_mut()
            .pending
            .extend(actions.iter().map(|a| a.to_string()));
    }

    /// Make the next queue drain return `raw` verbatim.
    pub fn set_raw_queue(&self, raw: &str) {
        self.page.borrow_mut().raw_queue = Some(raw.to_string());
    }

    pub fn fail_next(&self, message: &str) {
        self.page.borrow_mut().fail_next = Some(message.to_string());
    }

    /// Simulate the user editing the document.
    pub fn type_html(&self, html: &str) {
        self.page.borrow_mut().html = html.to_string();
    }

    pub fn set_content_height(&self, height: i32) {
        self.page.borrow_mut().content_height = height;
    }

    pub fn set_caret_y(&self, y: i32) {
        self.page.borrow_mut().caret_y = y;
    }

    pub fn set_range_selection(&self, on: bool) {
        self.page.borrow_mut().range_selection = on;
    }

    pub fn set_caret_selection(&self, on: bool) {
        self.page.borrow_mut().caret_selection = on;
    }

    pub fn set_selected_href(&self, href: &str) {
        self.page.borrow_mut().selected_href = href.to_string();
    }

    pub fn html(&self) -> String {
        self.page.borrow().html.clone()
    }

    pub fn placeholder(&self) -> String {
        self.page.borrow().placeholder.clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.page.borrow().scripts.clone()
    }

    pub fn clear_scripts(&self) {
        self.page.borrow_mut().scripts.clear();
    }

    pub fn count(&self, script: &str) -> usize {
        self.page
            .borrow()
            .scripts
            .iter()
            .filter(|s| s.as_str() == script)
            .count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.page.borrow().max_in_flight
    }

    fn respond(&self, script: &str) -> String {
        let mut page = self.page.borrow_mut();
        let first_arg = || {
            quoted_args(script)
                .and_then(|args| args.into_iter().next())
                .unwrap_or_default()
        };

        match script {
            "RE.getHtml();" => page.html.clone(),
            "RE.getText();" => strip_tags(&page.html),
            "RE.getLineHeight();" => page.line_height.trim_end_matches("px").to_string(),
            "RE.editor.isContentEditable;" => page.editable.to_string(),
            "document.getElementById('editor').clientHeight;" => {
                page.content_height.to_string()
            }
            "RE.getRelativeCaretYPosition();" => page.caret_y.to_string(),
            "RE.rangeSelectionExists();" => page.range_selection.to_string(),
            "RE.rangeOrCaretSelectionExists();" => {
                (page.range_selection || page.caret_selection).to_string()
            }
            "RE.getSelectedHref();" => page.selected_href.clone(),
            "RE.getCommandQueue();" => match page.raw_queue.take() {
                Some(raw) => raw,
                None => {
                    let pending = std::mem::take(&mut page.pending);
                    serde_json::to_string(&pending).unwrap_or_default()
                }
            },
            s if s.starts_with("RE.setHtml(") => {
                page.html = first_arg();
                String::new()
            }
            s if s.starts_with("RE.setPlaceholderText(") => {
                page.placeholder = first_arg();
                String::new()
            }
            s if s.starts_with("RE.setLineHeight(") => {
                page.line_height = first_arg();
                String::new()
            }
            s if s.starts_with("RE.editor.contentEditable = ") => {
                page.editable = s.contains("true");
                String::new()
            }
            _ => String::new(),
        }
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[async_trait(?Send)]
impl ScriptExecutor for FakeEngine {
    async fn evaluate(&self, script: &str) -> Result<String, ScriptError> {
        let latency = {
            let mut page = self.page.borrow_mut();
            page.scripts.push(script.to_string());
            page.in_flight += 1;
            page.max_in_flight = page.max_in_flight.max(page.in_flight);
            page.latency
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let failure = self.page.borrow_mut().fail_next.take();
        let result = match failure {
            Some(message) => Err(ScriptError::Engine(message)),
            None => Ok(self.respond(script)),
        };
        self.page.borrow_mut().in_flight -= 1;
        result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Observed {
    Height(i32),
    Content(String),
    TookFocus,
    LostFocus,
    DidLoad,
    FollowLink(String),
    Action(String),
    Caret(i32),
}

/// Records every notification in arrival order.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: RefCell<Vec<Observed>>,
    follow_links: Cell<Option<bool>>,
}

impl RecordingObserver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn answer_links(&self, answer: Option<bool>) {
        self.follow_links.set(answer);
    }

    pub fn events(&self) -> Vec<Observed> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn count(&self, wanted: &Observed) -> usize {
        self.events.borrow().iter().filter(|e| *e == wanted).count()
    }

    fn push(&self, event: Observed) {
        self.events.borrow_mut().push(event);
    }
}

impl EditorObserver for RecordingObserver {
    fn height_did_change(&self, height: i32) {
        self.push(Observed::Height(height));
    }

    fn content_did_change(&self, html: &str) {
        self.push(Observed::Content(html.to_string()));
    }

    fn took_focus(&self) {
        self.push(Observed::TookFocus);
    }

    fn lost_focus(&self) {
        self.push(Observed::LostFocus);
    }

    fn did_load(&self) {
        self.push(Observed::DidLoad);
    }

    fn should_follow_link(&self, url: &str) -> Option<bool> {
        self.push(Observed::FollowLink(url.to_string()));
        self.follow_links.get()
    }

    fn handle_action(&self, action: &str) {
        self.push(Observed::Action(action.to_string()));
    }

    fn caret_did_move(&self, relative_y: i32) {
        self.push(Observed::Caret(relative_y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_args_decodes_escapes() {
        assert_eq!(
            quoted_args(r"RE.insertLink('a\'b', 'c\\d\ne');"),
            Some(vec!["a'b".to_string(), "c\\d\ne".to_string()])
        );
        assert_eq!(quoted_args("RE.setBold();"), Some(vec![]));
        assert_eq!(quoted_args("RE.setHtml('open);"), None);
    }
}
