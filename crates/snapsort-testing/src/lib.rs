//! Testing utilities and harness for Snapsort

pub mod fakes;
pub mod robot;
pub mod robot_assertions;
pub mod testing;

pub use fakes::*;
pub use robot::*;
pub use robot_assertions::*;
pub use testing::*;

pub mod prelude {
    pub use crate::fakes::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions::*;
    pub use crate::testing::*;
}
