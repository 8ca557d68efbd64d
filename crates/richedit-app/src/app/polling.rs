//! Drive the editor's local tasks from the winit loop.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::EditorApp;

/// How often the loop wakes up when no window events arrive.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Time given to the local task set on each wake-up.
const PUMP_SLICE: Duration = Duration::from_millis(1);

impl EditorApp {
    /// Run pending editor tasks and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.pump_tasks();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Script results arrive through the platform loop, so the task set
    /// only ever runs for a short slice and never waits on the webview.
    fn pump_tasks(&self) {
        self.runtime
            .block_on(self.local.run_until(tokio::time::sleep(PUMP_SLICE)));
    }
}
