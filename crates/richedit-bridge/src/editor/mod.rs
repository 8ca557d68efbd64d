//! The bridge controller.
//!
//! [`RichEditor`] owns the cached [`EditorState`], decides whether a call
//! goes to the page or only to the cache, and turns drained callback
//! actions into [`EditorObserver`] notifications.
//!
//! The editor is a single-threaded object: it is meant to live on the UI
//! thread and be driven from a `tokio::task::LocalSet`.

mod api;
mod dispatch;
mod lifecycle;


use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::executor::{ScriptExecutor, ScriptRunner, DEFAULT_SCRIPT_TIMEOUT};
use crate::observer::EditorObserver;
use crate::state::{BridgePhase, EditorState};

/// Delay between the page's first `ready` and the did-load notification.
pub const DEFAULT_DID_LOAD_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct BridgeOptions {
    /// Lets the page settle (image decoding, layout) before the
    /// observer hears about the load. Zero notifies immediately.
    pub did_load_delay: Duration,
    /// Longest a single script evaluation may take before it counts as
    /// failed.
    pub script_timeout: Duration,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            did_load_delay: DEFAULT_DID_LOAD_DELAY,
            script_timeout: DEFAULT_SCRIPT_TIMEOUT,
        }
    }
}

/// Handle to a rich-text editor page. Clones share the same editor.
pub struct RichEditor<E: ScriptExecutor + 'static> {
    inner: Rc<EditorInner<E>>,
}

struct EditorInner<E> {
    runner: ScriptRunner<E>,
    phase: Cell<BridgePhase>,
    state: RefCell<EditorState>,
    observer: RefCell<Option<Rc<dyn EditorObserver>>>,
    options: BridgeOptions,
    did_load_timer: RefCell<Option<JoinHandle<()>>>,
}

impl<E> Drop for EditorInner<E> {
    fn drop(&mut self) {
        if let Some(timer) = self.did_load_timer.get_mut().take() {
            timer.abort();
        }
    }
}

impl<E: ScriptExecutor + 'static> Clone for RichEditor<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: ScriptExecutor + 'static> RichEditor<E> {
    pub fn new(executor: E) -> Self {
        Self::with_options(executor, BridgeOptions::default())
    }

    pub fn with_options(executor: E, options: BridgeOptions) -> Self {
        Self::with_state(executor, options, EditorState::default())
    }

    /// Start with a pre-filled cache; it is flushed when the page is ready.
    pub fn with_state(executor: E, options: BridgeOptions, state: EditorState) -> Self {
        Self {
            inner: Rc::new(EditorInner {
                runner: ScriptRunner::with_timeout(executor, options.script_timeout),
                phase: Cell::new(BridgePhase::NotReady),
                state: RefCell::new(state),
                observer: RefCell::new(None),
                options,
                did_load_timer: RefCell::new(None),
            }),
        }
    }

    pub fn set_observer(&self, observer: Rc<dyn EditorObserver>) {
        *self.inner.observer.borrow_mut() = Some(observer);
    }

    pub fn clear_observer(&self) {
        self.inner.observer.borrow_mut().take();
    }

    pub fn phase(&self) -> BridgePhase {
        self.inner.phase.get()
    }

    pub fn is_ready(&self) -> bool {
        self.phase().is_ready()
    }

    /// Snapshot of the cached state.
    pub fn state(&self) -> EditorState {
        self.inner.state.borrow().clone()
    }

    pub fn executor(&self) -> &E {
        self.inner.runner.executor()
    }

    fn runner(&self) -> &ScriptRunner<E> {
        &self.inner.runner
    }

    /// Call the observer, if any, without holding any editor borrow.
    fn notify(&self, f: impl FnOnce(&dyn EditorObserver)) {
        let observer = self.inner.observer.borrow().clone();
        if let Some(observer) = observer {
            f(observer.as_ref());
        }
    }
}
