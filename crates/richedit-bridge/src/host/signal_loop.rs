use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::editor::RichEditor;
use crate::events::EditorSignal;
use crate::executor::ScriptExecutor;

/// Consume webview signals one at a time until the sender side is gone.
///
/// Each drain finishes before the next signal is looked at, so actions
/// reach the observer in the order the page queued them. `follow_link`
/// is called for links the observer allows.
pub async fn run_signal_loop<E, F>(
    editor: RichEditor<E>,
    mut signals: UnboundedReceiver<EditorSignal>,
    follow_link: F,
) where
    E: ScriptExecutor + 'static,
    F: Fn(&str),
{
    while let Some(signal) = signals.recv().await {
        match signal {
            EditorSignal::DrainQueue => editor.drain_callback_queue().await,
            EditorSignal::LinkActivated(url) => {
                if editor.should_follow_link(&url) {
                    follow_link(&url);
                } else {
                    debug!(url = %url, "link declined");
                }
            }
        }
    }
    debug!("signal channel closed");
}
