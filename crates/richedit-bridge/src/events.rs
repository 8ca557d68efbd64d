//! Signals raised by the webview for the editor to act on.

/// Raised from the wry navigation handler and consumed in order by
/// [`run_signal_loop`](crate::host::run_signal_loop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSignal {
    /// The page navigated to the callback scheme; drain its queue.
    DrainQueue,
    /// The user activated an ordinary link.
    LinkActivated(String),
}
