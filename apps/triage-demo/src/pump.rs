//! Frame loop for the demo: a fixed 60 Hz clock, optionally paced against
//! the wall clock.

use std::time::Duration;

use anyhow::{bail, Result};
use snapsort_core::{Runtime, RuntimeHandle, FRAME_INTERVAL_NANOS};
use web_time::Instant;

/// Ten seconds of frames.
const MAX_SETTLE_FRAMES: usize = 600;

pub struct FramePump {
    runtime: Runtime,
    frame_time_nanos: u64,
    realtime: bool,
    started: Instant,
}

impl FramePump {
    pub fn new(realtime: bool) -> Self {
        Self {
            runtime: Runtime::new(),
            frame_time_nanos: 0,
            realtime,
            started: Instant::now(),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        if self.realtime {
            let due = Duration::from_nanos(self.frame_time_nanos);
            if let Some(wait) = due.checked_sub(self.started.elapsed()) {
                std::thread::sleep(wait);
            }
        }
        let handle = self.handle();
        handle.drain_frame_callbacks(self.frame_time_nanos);
        handle.run_pending_tasks();
    }

    /// Run frames and tasks until nothing is scheduled, calling `poll` after
    /// each step.
    pub fn settle(&mut self, mut poll: impl FnMut()) -> Result<()> {
        for _ in 0..MAX_SETTLE_FRAMES {
            self.handle().run_pending_tasks();
            poll();
            if self.handle().is_idle() {
                return Ok(());
            }
            self.advance_frame();
        }
        bail!("runtime did not settle within {MAX_SETTLE_FRAMES} frames")
    }
}
