//! Core runtime for the Snapsort gesture engine.
//!
//! Everything here runs on the UI thread: frame callbacks are drained once per
//! display refresh, and posted tasks run between frames.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, StateSubscription};

/// Nanoseconds between frames at 60 Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
