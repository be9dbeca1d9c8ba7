// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! This module provides the BN128 pairing-friendly curve: a generic field
//! tower, short Weierstrass groups over the base field and its quadratic
//! extension, and the optimal ate pairing.

pub mod bn128;

// Re-export types with consistent naming scheme.
pub use bn128::{
    Bn128, Fp as Bn128Fp, Fp12 as Bn128Gt, G1Projective as Bn128G1, G2Projective as Bn128G2,
};
