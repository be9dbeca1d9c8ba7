//! Trait definitions shared by the bn128 crates

pub mod field;

pub use field::Field;
