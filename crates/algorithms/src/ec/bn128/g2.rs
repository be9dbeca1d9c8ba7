//! G2: points on the sextic twist `y^2 = x^3 + 3/xi` over Fp2, `xi = 9 + u`.

use bn128_api::{validate, Field, Result};
use bn128_params::Bn128Params;
use num_traits::Zero;

use super::field::{Fp2, Fp2Field};
use super::group::{AffinePoint, CurveGroup, ProjectivePoint};

/// The group G2
pub type G2 = CurveGroup<Fp2Field>;
/// Jacobian point of G2
pub type G2Projective = ProjectivePoint<Fp2>;
/// Affine point of G2
pub type G2Affine = AffinePoint<Fp2>;

/// Build G2 from decimal parameters; `twist_b` is `b / xi`.
pub(crate) fn g2_from_params(fq2: &Fp2Field, twist_b: Fp2, params: &Bn128Params) -> Result<G2> {
    let fq = fq2.base();
    let [x, y] = params.g2;
    let gx = fq2.element(fq.from_dec_str(x[0])?, fq.from_dec_str(x[1])?);
    let gy = fq2.element(fq.from_dec_str(y[0])?, fq.from_dec_str(y[1])?);
    CurveGroup::new(fq2.clone(), twist_b, gx, gy)
}

/// Coefficients of the untwist-Frobenius-twist endomorphism
/// `psi(x, y) = (x^q * xi^((q-1)/3), y^q * xi^((q-1)/2))`.
#[derive(Clone, Debug)]
pub struct TwistFrobenius {
    x: Fp2,
    y: Fp2,
}

impl TwistFrobenius {
    /// Derive the coefficients from the twist non-residue `xi`.
    pub fn new(fq2: &Fp2Field, xi: &Fp2) -> Result<Self> {
        let q_minus_one = fq2.characteristic() - 1u32;
        validate::parameter(
            (&q_minus_one % 6u32).is_zero(),
            "modulus",
            "q - 1 must be divisible by 6",
        )?;
        Ok(Self {
            x: fq2.exp(xi, &(&q_minus_one / 3u32)),
            y: fq2.exp(xi, &(&q_minus_one / 2u32)),
        })
    }

    /// `xi^((q-1)/3)`
    pub fn x_coeff(&self) -> &Fp2 {
        &self.x
    }

    /// `xi^((q-1)/2)`
    pub fn y_coeff(&self) -> &Fp2 {
        &self.y
    }

    /// Apply `psi` to an affine point.
    pub fn mul_by_q(&self, fq2: &Fp2Field, p: &G2Affine) -> G2Affine {
        if p.infinity {
            return p.clone();
        }
        AffinePoint {
            x: fq2.mul(&fq2.frobenius_map(&p.x, 1), &self.x),
            y: fq2.mul(&fq2.frobenius_map(&p.y, 1), &self.y),
            infinity: false,
        }
    }

    /// Apply `psi` to a Jacobian point.
    pub fn mul_by_q_projective(&self, fq2: &Fp2Field, p: &G2Projective) -> G2Projective {
        ProjectivePoint {
            x: fq2.mul(&fq2.frobenius_map(&p.x, 1), &self.x),
            y: fq2.mul(&fq2.frobenius_map(&p.y, 1), &self.y),
            z: fq2.frobenius_map(&p.z, 1),
        }
    }
}
