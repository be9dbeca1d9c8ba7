//! # bn128
//!
//! Pairing arithmetic for the BN128 (alt_bn128) elliptic curve, the curve
//! behind Ethereum's pairing precompile and most Groth16 verifiers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bn128 = "0.3"
//! ```
//!
//! ```
//! use bn128::prelude::*;
//!
//! let bn = Bn128::new()?;
//! let p = bn.g1().mul_u64(bn.g1().g(), 25);
//! let q = bn.g2().mul_u64(bn.g2().g(), 30);
//! let e = bn.pairing(&p, &q)?;
//! assert_ne!(e, bn.fq12().one());
//!
//! // e(25 * g1, 30 * g2) == e(750 * g1, g2)
//! let k = bn128::num_bigint::BigUint::from(750u32);
//! let p750 = bn.g1().mul_scalar(bn.g1().g(), &k);
//! assert_eq!(bn.pairing(&p750, bn.g2().g())?, e);
//! # Ok::<(), bn128::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `random_element()` helpers backed by `rand::thread_rng`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bn128-api`]: Error type and the `Field` trait
//! - [`bn128-params`]: Curve constants
//! - [`bn128-algorithms`]: Field tower, curve groups and pairing

// Core re-exports (always available)
pub use bn128_algorithms as algorithms;
pub use bn128_api as api;
pub use bn128_params as params;

// Scalars are `BigUint`; `rand` supplies the generators the `random` methods take
pub use num_bigint;
pub use rand;

pub use bn128_algorithms::{
    AffinePoint, Bn128, CurveGroup, Fp, Fp12, Fp12Field, Fp2, Fp2Field, Fp6, Fp6Field,
    G1Affine, G1Prepared, G1Projective, G2Affine, G2Prepared, G2Projective, PrimeField,
    ProjectivePoint, G1, G2,
};
pub use bn128_api::{Error, Field, Result};
pub use bn128_params::Bn128Params;

/// Common imports for bn128 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::Field;

    // Curve context and element types
    pub use crate::algorithms::{
        Bn128, Fp, Fp12, Fp2, G1Prepared, G1Projective, G2Prepared, G2Projective, PrimeField,
    };
    pub use crate::params::Bn128Params;
}
