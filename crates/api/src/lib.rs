//! Public API traits and types for the bn128 library
//!
//! This crate provides the public API surface shared by the other bn128
//! crates: the error type and the [`Field`] arithmetic interface that every
//! level of the extension tower implements.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::Field;
