//! G1: points on `y^2 = x^3 + 3` over Fp.

use bn128_api::Result;
use bn128_params::Bn128Params;

use super::field::{Fp, PrimeField};
use super::group::{AffinePoint, CurveGroup, ProjectivePoint};

/// The group G1
pub type G1 = CurveGroup<PrimeField>;
/// Jacobian point of G1
pub type G1Projective = ProjectivePoint<Fp>;
/// Affine point of G1
pub type G1Affine = AffinePoint<Fp>;

/// Build G1 from decimal parameters.
pub(crate) fn g1_from_params(fq: &PrimeField, params: &Bn128Params) -> Result<G1> {
    let b = fq.from_dec_str(params.b)?;
    let gx = fq.from_dec_str(params.g1[0])?;
    let gy = fq.from_dec_str(params.g1[1])?;
    CurveGroup::new(fq.clone(), b, gx, gy)
}
