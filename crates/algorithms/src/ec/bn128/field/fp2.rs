//! Quadratic extension `F[u] / (u^2 - beta)` over any [`Field`].
//!
//! Instantiated as `Fp2 = Fp[u] / (u^2 + 1)` and as `Fp12 = Fp6[w] / (w^2 - v)`.

use bn128_api::{validate, Field, Result};
use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConstantTimeEq};

use super::frobenius_coefficients;

/// Element `c0 + c1 * u` of a quadratic extension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadraticElement<E> {
    /// Constant coefficient
    pub c0: E,
    /// Coefficient of `u`
    pub c1: E,
}

impl<E> QuadraticElement<E> {
    /// Build an element from its coefficients.
    pub const fn new(c0: E, c1: E) -> Self {
        Self { c0, c1 }
    }
}

impl<E: ConstantTimeEq> ConstantTimeEq for QuadraticElement<E> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

/// Quadratic extension field over `F`.
#[derive(Clone, Debug)]
pub struct QuadraticExtension<F: Field> {
    base: F,
    non_residue: F::Element,
    /// non_residue^((q^i - 1) / 2) for i in 0..degree
    frobenius_coeffs: Vec<F::Element>,
}

impl<F: Field> QuadraticExtension<F> {
    /// Extend `base` by a square root of `non_residue`.
    ///
    /// Fails if `non_residue` is zero or `q - 1` is odd. Whether
    /// `non_residue` really is a non-square is not checked.
    pub fn new(base: F, non_residue: F::Element) -> Result<Self> {
        validate::parameter(!base.is_zero(&non_residue), "non_residue", "must be nonzero")?;
        let frobenius_coeffs =
            frobenius_coefficients(&base, &non_residue, 2, 2 * base.degree())?;
        Ok(Self {
            base,
            non_residue,
            frobenius_coeffs,
        })
    }

    /// The field this extension is built over.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// The element `beta` with `u^2 = beta`.
    pub fn non_residue(&self) -> &F::Element {
        &self.non_residue
    }

    /// Frobenius coefficients `beta^((q^i - 1) / 2)`.
    pub fn frobenius_coeffs(&self) -> &[F::Element] {
        &self.frobenius_coeffs
    }

    /// Build an element from its coefficients.
    pub fn element(&self, c0: F::Element, c1: F::Element) -> QuadraticElement<F::Element> {
        QuadraticElement { c0, c1 }
    }

    /// Embed a base field element.
    pub fn from_base(&self, c0: F::Element) -> QuadraticElement<F::Element> {
        QuadraticElement {
            c0,
            c1: self.base.zero(),
        }
    }

    /// `beta * a` in the base field.
    #[inline]
    pub fn mul_by_non_residue(&self, a: &F::Element) -> F::Element {
        self.base.mul(&self.non_residue, a)
    }

    /// Multiply both coefficients by a base field element.
    pub fn mul_by_base(
        &self,
        a: &QuadraticElement<F::Element>,
        s: &F::Element,
    ) -> QuadraticElement<F::Element> {
        QuadraticElement {
            c0: self.base.mul(&a.c0, s),
            c1: self.base.mul(&a.c1, s),
        }
    }

    /// `c0 - c1 * u`
    pub fn conjugate(&self, a: &QuadraticElement<F::Element>) -> QuadraticElement<F::Element> {
        QuadraticElement {
            c0: a.c0.clone(),
            c1: self.base.neg(&a.c1),
        }
    }

    /// Uniformly random element from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn random_element(&self) -> QuadraticElement<F::Element> {
        self.random(&mut rand::thread_rng())
    }
}

impl<F: Field> Field for QuadraticExtension<F> {
    type Element = QuadraticElement<F::Element>;

    fn zero(&self) -> Self::Element {
        QuadraticElement {
            c0: self.base.zero(),
            c1: self.base.zero(),
        }
    }

    fn one(&self) -> Self::Element {
        QuadraticElement {
            c0: self.base.one(),
            c1: self.base.zero(),
        }
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.base.is_zero(&a.c0) && self.base.is_zero(&a.c1)
    }

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        QuadraticElement {
            c0: self.base.add(&a.c0, &b.c0),
            c1: self.base.add(&a.c1, &b.c1),
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        QuadraticElement {
            c0: self.base.sub(&a.c0, &b.c0),
            c1: self.base.sub(&a.c1, &b.c1),
        }
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        QuadraticElement {
            c0: self.base.neg(&a.c0),
            c1: self.base.neg(&a.c1),
        }
    }

    fn double(&self, a: &Self::Element) -> Self::Element {
        QuadraticElement {
            c0: self.base.double(&a.c0),
            c1: self.base.double(&a.c1),
        }
    }

    /// Karatsuba multiplication (Devegili et al., section 3).
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let base = &self.base;
        let v0 = base.mul(&a.c0, &b.c0);
        let v1 = base.mul(&a.c1, &b.c1);

        let c0 = base.add(&v0, &self.mul_by_non_residue(&v1));
        let c1 = base.sub(
            &base.sub(
                &base.mul(&base.add(&a.c0, &a.c1), &base.add(&b.c0, &b.c1)),
                &v0,
            ),
            &v1,
        );
        QuadraticElement { c0, c1 }
    }

    /// Complex squaring.
    fn square(&self, a: &Self::Element) -> Self::Element {
        let base = &self.base;
        let ab = base.mul(&a.c0, &a.c1);
        let beta_ab = self.mul_by_non_residue(&ab);

        let t = base.mul(
            &base.add(&a.c0, &a.c1),
            &base.add(&a.c0, &self.mul_by_non_residue(&a.c1)),
        );
        QuadraticElement {
            c0: base.sub(&base.sub(&t, &ab), &beta_ab),
            c1: base.double(&ab),
        }
    }

    fn inverse(&self, a: &Self::Element) -> Result<Self::Element> {
        validate::nonzero(self.is_zero(a), "quadratic extension inverse")?;
        let base = &self.base;

        // Norm a0^2 - beta * a1^2 lies in the base field
        let norm = base.sub(
            &base.square(&a.c0),
            &self.mul_by_non_residue(&base.square(&a.c1)),
        );
        let t = base.inverse(&norm)?;
        Ok(QuadraticElement {
            c0: base.mul(&a.c0, &t),
            c1: base.neg(&base.mul(&a.c1, &t)),
        })
    }

    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Element {
        QuadraticElement {
            c0: self.base.random(rng),
            c1: self.base.random(rng),
        }
    }

    fn characteristic(&self) -> &BigUint {
        self.base.characteristic()
    }

    fn degree(&self) -> usize {
        2 * self.base.degree()
    }

    fn frobenius_map(&self, a: &Self::Element, power: usize) -> Self::Element {
        let coeff = &self.frobenius_coeffs[power % self.frobenius_coeffs.len()];
        QuadraticElement {
            c0: self.base.frobenius_map(&a.c0, power),
            c1: self.base.mul(coeff, &self.base.frobenius_map(&a.c1, power)),
        }
    }
}
