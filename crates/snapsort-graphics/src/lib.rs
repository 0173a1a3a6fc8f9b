//! Pure math/data for swipe feedback in Snapsort
//!
//! This crate contains the geometry primitives and the layer transform that
//! the gesture engine produces for every rendered frame.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
    pub use crate::layer::GraphicsLayer;
}
