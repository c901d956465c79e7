//! Frame pacing and live reload polling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::FolioApp;

impl FolioApp {
    /// Poll for config changes and schedule the next frame.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if let Some(config) = self.reload.as_mut().and_then(|r| r.poll(now)) {
            self.apply_config(config);
        }

        if now >= self.next_frame {
            self.request_redraw();
            let next = self.next_frame + self.frame_interval;
            // Missed frames are skipped, not replayed.
            self.next_frame = if next <= now {
                now + self.frame_interval
            } else {
                next
            };
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
