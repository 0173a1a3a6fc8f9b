//! Deterministic frame pump for driving animations and posted tasks.

use std::cell::Cell;

use snapsort_core::{Runtime, RuntimeHandle, FRAME_INTERVAL_NANOS};

/// Upper bound on frames pumped by [`TestRuntime::settle`]; about ten
/// seconds of animation at 60 Hz.
pub const MAX_SETTLE_FRAMES: usize = 600;

/// Owns a [`Runtime`] and advances a fake display clock one 60 Hz frame at a
/// time.
pub struct TestRuntime {
    runtime: Runtime,
    frame_time_nanos: Cell<u64>,
    frames: Cell<usize>,
}

impl TestRuntime {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::new(),
            frame_time_nanos: Cell::new(0),
            frames: Cell::new(0),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos.get()
    }

    /// Frames pumped so far.
    pub fn frame_count(&self) -> usize {
        self.frames.get()
    }

    /// Run one frame, then any tasks it posted. Returns the number of frame
    /// callbacks that ran.
    pub fn advance_frame(&self) -> usize {
        let time = self.frame_time_nanos.get() + FRAME_INTERVAL_NANOS;
        self.frame_time_nanos.set(time);
        self.frames.set(self.frames.get() + 1);
        let handle = self.handle();
        let ran = handle.drain_frame_callbacks(time);
        handle.run_pending_tasks();
        ran
    }

    pub fn advance_frames(&self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    pub fn run_pending_tasks(&self) -> usize {
        self.handle().run_pending_tasks()
    }

    /// Pump frames until nothing is scheduled, calling `poll` after every
    /// step so sessions can react to finished animations and settled tasks.
    ///
    /// Panics if the runtime is still busy after [`MAX_SETTLE_FRAMES`].
    pub fn settle(&self, mut poll: impl FnMut()) {
        let handle = self.handle();
        for _ in 0..MAX_SETTLE_FRAMES {
            handle.run_pending_tasks();
            poll();
            if handle.is_idle() {
                return;
            }
            self.advance_frame();
        }
        panic!("runtime did not settle within {MAX_SETTLE_FRAMES} frames");
    }
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}
