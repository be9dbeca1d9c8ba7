//! BN128 (alt_bn128) pairing-friendly elliptic curve.
//!
//! A [`Bn128`] value owns every parameter it needs: the field tower, both
//! groups and the pairing constants. Independent contexts never share state.
//!
//! **Warning:** Unaudited implementation, not constant time.

use core::str::FromStr;

use bn128_api::{Error, Field, Result};
use bn128_params::Bn128Params;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

// Module declarations
pub mod field;
mod g1;
mod g2;
mod group;
mod pairings;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::{
    CubicElement, CubicExtension, Fp, Fp12, Fp12Field, Fp2, Fp2Field, Fp6, Fp6Field,
    PrimeField, QuadraticElement, QuadraticExtension,
};
pub use g1::{G1Affine, G1Projective, G1};
pub use g2::{G2Affine, G2Projective, TwistFrobenius, G2};
pub use group::{AffinePoint, CurveGroup, ProjectivePoint};
pub use pairings::{EllCoeffs, G1Prepared, G2Prepared};

/// Curve context for BN128.
#[derive(Clone, Debug)]
pub struct Bn128 {
    q: BigUint,
    r: BigUint,
    z: BigUint,
    ate_loop_count: BigUint,
    /// Signed digits of `6z + 2`, least significant first
    pub(crate) ate_naf: Vec<i8>,

    fq: PrimeField,
    fr: PrimeField,
    pub(crate) fq2: Fp2Field,
    fq6: Fp6Field,
    pub(crate) fq12: Fp12Field,

    pub(crate) g1: G1,
    pub(crate) g2: G2,

    /// 1/2 in Fp
    pub(crate) two_inv: Fp,
    /// xi = 9 + u
    pub(crate) twist: Fp2,
    /// b / xi
    pub(crate) twist_b: Fp2,
    pub(crate) twist_frobenius: TwistFrobenius,
}

impl Bn128 {
    /// Build the standard BN128 context.
    pub fn new() -> Result<Self> {
        Self::with_params(&Bn128Params::default())
    }

    /// Build a context from explicit parameters.
    ///
    /// Generators are checked against their curve equations; subgroup
    /// membership is left to [`Bn128::validate`].
    pub fn with_params(params: &Bn128Params) -> Result<Self> {
        let q = parse_integer("q", params.q)?;
        let r = parse_integer("r", params.r)?;
        let z = parse_integer("z", params.z)?;

        let fq = PrimeField::new(q.clone())?;
        let fr = PrimeField::new(r.clone())?;

        let fq2 = Fp2Field::new(fq.clone(), fq.from_dec_str(params.fq2_non_residue)?)?;
        let [xi0, xi1] = params.fq6_non_residue;
        let twist = fq2.element(fq.from_dec_str(xi0)?, fq.from_dec_str(xi1)?);
        let fq6 = Fp6Field::new(fq2.clone(), twist.clone())?;
        let v = fq6.element(fq2.zero(), fq2.one(), fq2.zero());
        let fq12 = Fp12Field::new(fq6.clone(), v)?;

        let g1 = g1::g1_from_params(&fq, params)?;
        let twist_b = fq2.div(&fq2.from_base(g1.b().clone()), &twist)?;
        let g2 = g2::g2_from_params(&fq2, twist_b.clone(), params)?;

        let ate_loop_count = &z * 6u32 + 2u32;
        let ate_naf = naf(&ate_loop_count);
        let two_inv = fq.inverse(&fq.from_u64(2))?;
        let twist_frobenius = TwistFrobenius::new(&fq2, &twist)?;

        debug!(
            q = %q,
            r = %r,
            ate_loop_count = %ate_loop_count,
            loop_length = ate_naf.len(),
            "constructed bn128 context"
        );

        Ok(Self {
            q,
            r,
            z,
            ate_loop_count,
            ate_naf,
            fq,
            fr,
            fq2,
            fq6,
            fq12,
            g1,
            g2,
            two_inv,
            twist,
            twist_b,
            twist_frobenius,
        })
    }

    /// Check that both generators lie in the order-`r` subgroup.
    pub fn validate(&self) -> Result<()> {
        if !self.g1.is_on_curve_projective(self.g1.g()) {
            return Err(Error::param("g1", "generator not on curve"));
        }
        if !self.g2.is_on_curve_projective(self.g2.g()) {
            return Err(Error::param("g2", "generator not on twist"));
        }
        if !self.g1.is_in_subgroup(self.g1.g(), &self.r) {
            return Err(Error::param("g1", "generator order does not divide r"));
        }
        if !self.g2.is_in_subgroup(self.g2.g(), &self.r) {
            return Err(Error::param("g2", "generator order does not divide r"));
        }
        Ok(())
    }

    /// Base field modulus.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Order of G1, G2 and GT.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// BN parameter.
    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// `6z + 2`
    pub fn ate_loop_count(&self) -> &BigUint {
        &self.ate_loop_count
    }

    /// Signed binary digits of the ate loop count, least significant first.
    pub fn ate_loop_naf(&self) -> &[i8] {
        &self.ate_naf
    }

    /// Base field.
    pub fn fq(&self) -> &PrimeField {
        &self.fq
    }

    /// Scalar field of order `r`.
    pub fn fr(&self) -> &PrimeField {
        &self.fr
    }

    /// `Fp2`
    pub fn fq2(&self) -> &Fp2Field {
        &self.fq2
    }

    /// `Fp6`
    pub fn fq6(&self) -> &Fp6Field {
        &self.fq6
    }

    /// `Fp12`, the ambient group of GT.
    pub fn fq12(&self) -> &Fp12Field {
        &self.fq12
    }

    /// G1
    pub fn g1(&self) -> &G1 {
        &self.g1
    }

    /// G2
    pub fn g2(&self) -> &G2 {
        &self.g2
    }

    /// The twist non-residue `xi`.
    pub fn twist(&self) -> &Fp2 {
        &self.twist
    }

    /// Curve constant of the twist, `b / xi`.
    pub fn twist_b(&self) -> &Fp2 {
        &self.twist_b
    }
}

fn parse_integer(name: &'static str, s: &str) -> Result<BigUint> {
    BigUint::from_str(s).map_err(|_| Error::parse(name, s))
}

/// Non-adjacent form of `n`, least significant digit first.
fn naf(n: &BigUint) -> Vec<i8> {
    let mut n = n.clone();
    let mut digits = Vec::with_capacity(n.bits() as usize + 1);
    while !n.is_zero() {
        let digit = if !n.bit(0) {
            0
        } else if n.bit(1) {
            // n = 3 (mod 4)
            n += 1u32;
            -1
        } else {
            n -= 1u32;
            1
        };
        digits.push(digit);
        n >>= 1u32;
    }
    digits
}
