//! Solve scalar root-finding problems.
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
pub mod console;
pub mod newton;
pub mod problem;
pub mod time;

mod residual;
pub use crate::residual::residual;

mod status;
pub use crate::status::{Status, StatusCode};

pub use crate::newton::find_root;
