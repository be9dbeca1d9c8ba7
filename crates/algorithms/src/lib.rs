//! Pairing arithmetic for the BN128 curve
//!
//! This crate provides the BN128 (alt_bn128) prime field, the
//! Fp2/Fp6/Fp12 extension tower, the G1 and G2 curve groups and the optimal
//! ate pairing used by zkSNARK verifiers. Integers of arbitrary size are
//! handled by `num-bigint`, so the field tower works for any odd prime.
//!
//! # Example
//!
//! ```
//! use bn128_algorithms::Bn128;
//! use num_bigint::BigUint;
//!
//! let bn = Bn128::new().unwrap();
//! let p = bn.g1().mul_u64(bn.g1().g(), 10);
//! let q = bn.g2().generator();
//! let p2 = bn.g1().generator();
//! let q2 = bn.g2().mul_scalar(bn.g2().g(), &BigUint::from(10u32));
//! assert!(bn.pairing_check(&p, &q, &p2, &q2).unwrap());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub use bn128_api::{validate, Error, Field, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::bn128::{
    self, AffinePoint, Bn128, CubicElement, CubicExtension, CurveGroup, EllCoeffs, Fp, Fp12,
    Fp12Field, Fp2, Fp2Field, Fp6, Fp6Field, G1Affine, G1Prepared, G1Projective, G2Affine,
    G2Prepared, G2Projective, PrimeField, ProjectivePoint, QuadraticElement, QuadraticExtension,
    TwistFrobenius, G1, G2,
};
