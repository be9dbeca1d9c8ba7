//! Cubic extension `F[v] / (v^3 - xi)` over any [`Field`].
//!
//! Instantiated as `Fp6 = Fp2[v] / (v^3 - (9 + u))`.

use bn128_api::{validate, Field, Result};
use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConstantTimeEq};

use super::frobenius_coefficients;

/// Element `c0 + c1 * v + c2 * v^2` of a cubic extension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CubicElement<E> {
    /// Constant coefficient
    pub c0: E,
    /// Coefficient of `v`
    pub c1: E,
    /// Coefficient of `v^2`
    pub c2: E,
}

impl<E> CubicElement<E> {
    /// Build an element from its coefficients.
    pub const fn new(c0: E, c1: E, c2: E) -> Self {
        Self { c0, c1, c2 }
    }
}

impl<E: ConstantTimeEq> ConstantTimeEq for CubicElement<E> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

/// Cubic extension field over `F`.
#[derive(Clone, Debug)]
pub struct CubicExtension<F: Field> {
    base: F,
    non_residue: F::Element,
    /// xi^((q^i - 1) / 3), applied to c1
    frobenius_coeffs_c1: Vec<F::Element>,
    /// xi^(2 (q^i - 1) / 3), applied to c2
    frobenius_coeffs_c2: Vec<F::Element>,
}

impl<F: Field> CubicExtension<F> {
    /// Extend `base` by a cube root of `non_residue`.
    ///
    /// Fails if `non_residue` is zero or 3 does not divide `q - 1`.
    pub fn new(base: F, non_residue: F::Element) -> Result<Self> {
        validate::parameter(!base.is_zero(&non_residue), "non_residue", "must be nonzero")?;
        let frobenius_coeffs_c1 =
            frobenius_coefficients(&base, &non_residue, 3, 3 * base.degree())?;
        let frobenius_coeffs_c2 = frobenius_coeffs_c1.iter().map(|c| base.square(c)).collect();
        Ok(Self {
            base,
            non_residue,
            frobenius_coeffs_c1,
            frobenius_coeffs_c2,
        })
    }

    /// The field this extension is built over.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// The element `xi` with `v^3 = xi`.
    pub fn non_residue(&self) -> &F::Element {
        &self.non_residue
    }

    /// Build an element from its coefficients.
    pub fn element(
        &self,
        c0: F::Element,
        c1: F::Element,
        c2: F::Element,
    ) -> CubicElement<F::Element> {
        CubicElement { c0, c1, c2 }
    }

    /// Embed a base field element.
    pub fn from_base(&self, c0: F::Element) -> CubicElement<F::Element> {
        CubicElement {
            c0,
            c1: self.base.zero(),
            c2: self.base.zero(),
        }
    }

    /// `xi * a` in the base field.
    #[inline]
    pub fn mul_by_non_residue(&self, a: &F::Element) -> F::Element {
        self.base.mul(&self.non_residue, a)
    }

    /// `v * a`, a coefficient rotation.
    pub fn mul_by_v(&self, a: &CubicElement<F::Element>) -> CubicElement<F::Element> {
        CubicElement {
            c0: self.mul_by_non_residue(&a.c2),
            c1: a.c0.clone(),
            c2: a.c1.clone(),
        }
    }

    /// Multiply every coefficient by a base field element.
    pub fn mul_by_base(
        &self,
        a: &CubicElement<F::Element>,
        s: &F::Element,
    ) -> CubicElement<F::Element> {
        CubicElement {
            c0: self.base.mul(&a.c0, s),
            c1: self.base.mul(&a.c1, s),
            c2: self.base.mul(&a.c2, s),
        }
    }

    /// `a * (x1 * v)`
    pub fn mul_by_1(&self, a: &CubicElement<F::Element>, x1: &F::Element) -> CubicElement<F::Element> {
        let base = &self.base;
        CubicElement {
            c0: self.mul_by_non_residue(&base.mul(&a.c2, x1)),
            c1: base.mul(&a.c0, x1),
            c2: base.mul(&a.c1, x1),
        }
    }

    /// `a * (x0 + x2 * v^2)`
    pub fn mul_by_02(
        &self,
        a: &CubicElement<F::Element>,
        x0: &F::Element,
        x2: &F::Element,
    ) -> CubicElement<F::Element> {
        let base = &self.base;
        CubicElement {
            c0: base.add(
                &base.mul(&a.c0, x0),
                &self.mul_by_non_residue(&base.mul(&a.c1, x2)),
            ),
            c1: base.add(
                &base.mul(&a.c1, x0),
                &self.mul_by_non_residue(&base.mul(&a.c2, x2)),
            ),
            c2: base.add(&base.mul(&a.c2, x0), &base.mul(&a.c0, x2)),
        }
    }

    /// Uniformly random element from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn random_element(&self) -> CubicElement<F::Element> {
        self.random(&mut rand::thread_rng())
    }
}

impl<F: Field> Field for CubicExtension<F> {
    type Element = CubicElement<F::Element>;

    fn zero(&self) -> Self::Element {
        CubicElement {
            c0: self.base.zero(),
            c1: self.base.zero(),
            c2: self.base.zero(),
        }
    }

    fn one(&self) -> Self::Element {
        CubicElement {
            c0: self.base.one(),
            c1: self.base.zero(),
            c2: self.base.zero(),
        }
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.base.is_zero(&a.c0) && self.base.is_zero(&a.c1) && self.base.is_zero(&a.c2)
    }

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        CubicElement {
            c0: self.base.add(&a.c0, &b.c0),
            c1: self.base.add(&a.c1, &b.c1),
            c2: self.base.add(&a.c2, &b.c2),
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        CubicElement {
            c0: self.base.sub(&a.c0, &b.c0),
            c1: self.base.sub(&a.c1, &b.c1),
            c2: self.base.sub(&a.c2, &b.c2),
        }
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        CubicElement {
            c0: self.base.neg(&a.c0),
            c1: self.base.neg(&a.c1),
            c2: self.base.neg(&a.c2),
        }
    }

    fn double(&self, a: &Self::Element) -> Self::Element {
        CubicElement {
            c0: self.base.double(&a.c0),
            c1: self.base.double(&a.c1),
            c2: self.base.double(&a.c2),
        }
    }

    /// Karatsuba multiplication (Devegili et al., section 4).
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let base = &self.base;
        let v0 = base.mul(&a.c0, &b.c0);
        let v1 = base.mul(&a.c1, &b.c1);
        let v2 = base.mul(&a.c2, &b.c2);

        // (a1 + a2)(b1 + b2) - v1 - v2
        let t0 = base.sub(
            &base.sub(
                &base.mul(&base.add(&a.c1, &a.c2), &base.add(&b.c1, &b.c2)),
                &v1,
            ),
            &v2,
        );
        // (a0 + a1)(b0 + b1) - v0 - v1
        let t1 = base.sub(
            &base.sub(
                &base.mul(&base.add(&a.c0, &a.c1), &base.add(&b.c0, &b.c1)),
                &v0,
            ),
            &v1,
        );
        // (a0 + a2)(b0 + b2) - v0 - v2
        let t2 = base.sub(
            &base.sub(
                &base.mul(&base.add(&a.c0, &a.c2), &base.add(&b.c0, &b.c2)),
                &v0,
            ),
            &v2,
        );

        CubicElement {
            c0: base.add(&v0, &self.mul_by_non_residue(&t0)),
            c1: base.add(&t1, &self.mul_by_non_residue(&v2)),
            c2: base.add(&t2, &v1),
        }
    }

    /// Chung-Hasan SQR2.
    fn square(&self, a: &Self::Element) -> Self::Element {
        let base = &self.base;
        let s0 = base.square(&a.c0);
        let s1 = base.double(&base.mul(&a.c0, &a.c1));
        let s2 = base.square(&base.add(&base.sub(&a.c0, &a.c1), &a.c2));
        let s3 = base.double(&base.mul(&a.c1, &a.c2));
        let s4 = base.square(&a.c2);

        CubicElement {
            c0: base.add(&s0, &self.mul_by_non_residue(&s3)),
            c1: base.add(&s1, &self.mul_by_non_residue(&s4)),
            c2: base.sub(&base.sub(&base.add(&base.add(&s1, &s2), &s3), &s0), &s4),
        }
    }

    fn inverse(&self, a: &Self::Element) -> Result<Self::Element> {
        validate::nonzero(self.is_zero(a), "cubic extension inverse")?;
        let base = &self.base;

        let t0 = base.sub(
            &base.square(&a.c0),
            &self.mul_by_non_residue(&base.mul(&a.c1, &a.c2)),
        );
        let t1 = base.sub(
            &self.mul_by_non_residue(&base.square(&a.c2)),
            &base.mul(&a.c0, &a.c1),
        );
        let t2 = base.sub(&base.square(&a.c1), &base.mul(&a.c0, &a.c2));

        // Norm a0 t0 + xi (a2 t1 + a1 t2) lies in the base field
        let norm = base.add(
            &base.mul(&a.c0, &t0),
            &self.mul_by_non_residue(&base.add(&base.mul(&a.c2, &t1), &base.mul(&a.c1, &t2))),
        );
        let t3 = base.inverse(&norm)?;

        Ok(CubicElement {
            c0: base.mul(&t0, &t3),
            c1: base.mul(&t1, &t3),
            c2: base.mul(&t2, &t3),
        })
    }

    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Element {
        CubicElement {
            c0: self.base.random(rng),
            c1: self.base.random(rng),
            c2: self.base.random(rng),
        }
    }

    fn characteristic(&self) -> &BigUint {
        self.base.characteristic()
    }

    fn degree(&self) -> usize {
        3 * self.base.degree()
    }

    fn frobenius_map(&self, a: &Self::Element, power: usize) -> Self::Element {
        let i = power % self.frobenius_coeffs_c1.len();
        CubicElement {
            c0: self.base.frobenius_map(&a.c0, power),
            c1: self
                .base
                .mul(&self.frobenius_coeffs_c1[i], &self.base.frobenius_map(&a.c1, power)),
            c2: self
                .base
                .mul(&self.frobenius_coeffs_c2[i], &self.base.frobenius_map(&a.c2, power)),
        }
    }
}
