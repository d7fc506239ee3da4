//! Public API surface consumed by front-ends.
mod errors;

pub use errors::{Result, RuntimeError};
