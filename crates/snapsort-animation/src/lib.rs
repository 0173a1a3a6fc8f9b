//! Animation system for Snapsort.

mod animation;

pub use animation::*;
