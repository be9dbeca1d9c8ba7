//! BN128 field tower
//!
//! ```text
//! Fp
//! Fp2  = Fp[u]  / (u^2 + 1)
//! Fp6  = Fp2[v] / (v^3 - (9 + u))
//! Fp12 = Fp6[w] / (w^2 - v)
//! ```
//!
//! Every level implements [`Field`]; the extensions are generic over their
//! base so the same code serves each step of the tower.

use bn128_api::{validate, Field, Result};
use num_traits::Zero;

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;

pub use fp::{Fp, PrimeField};
pub use fp2::{QuadraticElement, QuadraticExtension};
pub use fp6::{CubicElement, CubicExtension};

/// Element of `Fp2`
pub type Fp2 = QuadraticElement<Fp>;
/// Element of `Fp6`
pub type Fp6 = CubicElement<Fp2>;
/// Element of `Fp12`
pub type Fp12 = QuadraticElement<Fp6>;

/// The field `Fp2`
pub type Fp2Field = QuadraticExtension<PrimeField>;
/// The field `Fp6`
pub type Fp6Field = CubicExtension<Fp2Field>;
/// The field `Fp12`
pub type Fp12Field = QuadraticExtension<Fp6Field>;

/// `non_residue^((q^i - 1) / k)` for `i` in `0..count`.
///
/// Uses `c_i = frob(c_(i-1)) * c_1`, so only one exponentiation is done.
pub(crate) fn frobenius_coefficients<F: Field>(
    base: &F,
    non_residue: &F::Element,
    k: u32,
    count: usize,
) -> Result<Vec<F::Element>> {
    let q_minus_one = base.characteristic() - 1u32;
    validate::parameter(
        (&q_minus_one % k).is_zero(),
        "non_residue",
        "extension degree must divide q - 1",
    )?;

    let c1 = base.exp(non_residue, &(&q_minus_one / k));
    let mut coeffs = Vec::with_capacity(count);
    let mut c = base.one();
    for _ in 0..count {
        let next = base.mul(&base.frobenius_map(&c, 1), &c1);
        coeffs.push(c);
        c = next;
    }
    Ok(coeffs)
}
