//! Constant values for the bn128 library
//!
//! Curve constants are kept as decimal strings so that they can be consumed
//! by any arbitrary-precision integer backend without depending on one here.

#![no_std]

pub mod bn128;

pub use bn128::Bn128Params;
