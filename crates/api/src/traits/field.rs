// File: crates/api/src/traits/field.rs

//! Arithmetic interface implemented by every level of the extension tower
//!
//! A `Field` value is a *field object*: it owns the parameters that define the
//! field (modulus, non-residue, Frobenius coefficients) and performs
//! arithmetic on plain element values. Elements carry no reference to their
//! field, so the same element type can be shared between independent field
//! objects built from the same parameters.

use core::fmt::Debug;

use num_bigint::BigUint;
use rand::RngCore;

use crate::Result;

/// Arithmetic over a finite field whose elements are immutable values.
///
/// Every method returns elements in canonical form. The only partial
/// operations are [`Field::inverse`] and [`Field::div`], which fail with
/// [`crate::Error::DivisionByZero`] on the additive identity.
pub trait Field: Clone + Debug + Send + Sync {
    /// Element type of this field.
    type Element: Clone + Debug + PartialEq + Eq + Send + Sync;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Check if element is the additive identity.
    fn is_zero(&self, a: &Self::Element) -> bool;

    /// `a + b`
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `a - b`
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `-a`
    fn neg(&self, a: &Self::Element) -> Self::Element;

    /// `a * b`
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `a^2`, using a formula cheaper than the generic product where one exists.
    fn square(&self, a: &Self::Element) -> Self::Element;

    /// Multiplicative inverse of `a`.
    fn inverse(&self, a: &Self::Element) -> Result<Self::Element>;

    /// Uniformly random element.
    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Element;

    /// Characteristic `q` of the underlying prime field.
    fn characteristic(&self) -> &BigUint;

    /// Degree of this field over its prime subfield.
    fn degree(&self) -> usize;

    /// Frobenius endomorphism applied `power` times: `a^(q^power)`.
    fn frobenius_map(&self, a: &Self::Element, power: usize) -> Self::Element;

    /// `2a`
    fn double(&self, a: &Self::Element) -> Self::Element {
        self.add(a, a)
    }

    /// `a / b`
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        Ok(self.mul(a, &self.inverse(b)?))
    }

    /// Variable-time exponentiation by a non-negative integer, scanning the
    /// exponent from the most significant bit.
    fn exp(&self, a: &Self::Element, e: &BigUint) -> Self::Element {
        let mut res = self.one();
        for i in (0..e.bits()).rev() {
            res = self.square(&res);
            if e.bit(i) {
                res = self.mul(&res, a);
            }
        }
        res
    }

    /// Canonical-value equality.
    fn equals(&self, a: &Self::Element, b: &Self::Element) -> bool {
        a == b
    }
}
