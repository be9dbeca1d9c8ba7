//! Operations specific to `Fp12 = Fp6[w] / (w^2 - v)`.

use bn128_api::Field;

use super::{Fp12, Fp12Field, Fp2};

impl Fp12Field {
    /// Multiply by the sparse line value
    /// `(ell_0 + ell_vv * v^2) + (ell_vw * v) * w`.
    ///
    /// Every line function evaluated by the Miller loop has this shape.
    pub fn mul_by_024(&self, f: &Fp12, ell_0: &Fp2, ell_vw: &Fp2, ell_vv: &Fp2) -> Fp12 {
        let fq6 = self.base();

        let v0 = fq6.mul_by_02(&f.c0, ell_0, ell_vv);
        let v1 = fq6.mul_by_1(&f.c1, ell_vw);

        let line = fq6.element(ell_0.clone(), ell_vw.clone(), ell_vv.clone());
        let c1 = fq6.sub(
            &fq6.sub(&fq6.mul(&fq6.add(&f.c0, &f.c1), &line), &v0),
            &v1,
        );

        Fp12 {
            c0: fq6.add(&v0, &fq6.mul_by_v(&v1)),
            c1,
        }
    }

    /// Inverse of an element of norm one, `f^(q^6) = conj(f)`.
    ///
    /// Only valid after the easy part of the final exponentiation.
    pub fn unitary_inverse(&self, f: &Fp12) -> Fp12 {
        self.conjugate(f)
    }
}
