//! Short Weierstrass curve `y^2 = x^3 + b` over any [`Field`].
//!
//! G1 uses the base field and G2 the quadratic extension; both share this
//! implementation.

use core::fmt;

use bn128_api::{Error, Field, Result};
use num_bigint::{BigUint, RandBigInt};
use rand::RngCore;

/// Affine point, or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<E> {
    /// x-coordinate
    pub x: E,
    /// y-coordinate
    pub y: E,
    /// Set for the identity, in which case `x` and `y` are meaningless
    pub infinity: bool,
}

impl<E: fmt::Debug> fmt::Display for AffinePoint<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.infinity {
            write!(f, "infinity")
        } else {
            write!(f, "({:?}, {:?})", self.x, self.y)
        }
    }
}

/// Point in Jacobian coordinates: `x = X/Z^2`, `y = Y/Z^3`.
///
/// `Z = 0` encodes the identity. Representations are not unique, so use
/// [`CurveGroup::equals`] rather than `==` to compare points.
#[derive(Clone, Debug)]
pub struct ProjectivePoint<E> {
    /// X coordinate
    pub x: E,
    /// Y coordinate
    pub y: E,
    /// Z coordinate
    pub z: E,
}

/// Group of points on `y^2 = x^3 + b` over `F`.
#[derive(Clone, Debug)]
pub struct CurveGroup<F: Field> {
    field: F,
    b: F::Element,
    generator: ProjectivePoint<F::Element>,
}

impl<F: Field> CurveGroup<F> {
    /// Create the group with the given curve constant and generator.
    ///
    /// Returns an error if the generator is not on the curve.
    pub fn new(field: F, b: F::Element, gx: F::Element, gy: F::Element) -> Result<Self> {
        let mut group = Self {
            generator: ProjectivePoint {
                x: field.zero(),
                y: field.one(),
                z: field.zero(),
            },
            field,
            b,
        };
        let g = group.point(gx, gy)?;
        group.generator = group.from_affine(&g);
        Ok(group)
    }

    /// The coordinate field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// The curve constant `b`.
    pub fn b(&self) -> &F::Element {
        &self.b
    }

    /// The fixed generator.
    pub fn g(&self) -> &ProjectivePoint<F::Element> {
        &self.generator
    }

    /// The fixed generator, by value.
    pub fn generator(&self) -> ProjectivePoint<F::Element> {
        self.generator.clone()
    }

    /// The identity element.
    pub fn zero(&self) -> ProjectivePoint<F::Element> {
        ProjectivePoint {
            x: self.field.zero(),
            y: self.field.one(),
            z: self.field.zero(),
        }
    }

    /// Check whether `p` is the identity.
    pub fn is_zero(&self, p: &ProjectivePoint<F::Element>) -> bool {
        self.field.is_zero(&p.z)
    }

    /// Validate coordinates and build an affine point.
    pub fn point(&self, x: F::Element, y: F::Element) -> Result<AffinePoint<F::Element>> {
        let p = AffinePoint {
            x,
            y,
            infinity: false,
        };
        if !self.is_on_curve(&p) {
            return Err(Error::param("point", "not on curve"));
        }
        Ok(p)
    }

    /// `y^2 == x^3 + b`, true for the point at infinity.
    pub fn is_on_curve(&self, p: &AffinePoint<F::Element>) -> bool {
        if p.infinity {
            return true;
        }
        let f = &self.field;
        let lhs = f.square(&p.y);
        let rhs = f.add(&f.mul(&f.square(&p.x), &p.x), &self.b);
        lhs == rhs
    }

    /// `Y^2 == X^3 + b Z^6`, true for the identity.
    pub fn is_on_curve_projective(&self, p: &ProjectivePoint<F::Element>) -> bool {
        if self.is_zero(p) {
            return true;
        }
        let f = &self.field;
        let z2 = f.square(&p.z);
        let z6 = f.mul(&f.square(&z2), &z2);
        let lhs = f.square(&p.y);
        let rhs = f.add(&f.mul(&f.square(&p.x), &p.x), &f.mul(&self.b, &z6));
        lhs == rhs
    }

    /// Check `order * p == 0`.
    pub fn is_in_subgroup(&self, p: &ProjectivePoint<F::Element>, order: &BigUint) -> bool {
        self.is_zero(&self.mul_scalar(p, order))
    }

    /// Lift an affine point.
    pub fn from_affine(&self, p: &AffinePoint<F::Element>) -> ProjectivePoint<F::Element> {
        if p.infinity {
            return self.zero();
        }
        ProjectivePoint {
            x: p.x.clone(),
            y: p.y.clone(),
            z: self.field.one(),
        }
    }

    /// Normalize to affine coordinates.
    pub fn affine(&self, p: &ProjectivePoint<F::Element>) -> AffinePoint<F::Element> {
        let f = &self.field;
        let z_inv = match f.inverse(&p.z) {
            Ok(z_inv) => z_inv,
            Err(_) => {
                return AffinePoint {
                    x: f.zero(),
                    y: f.one(),
                    infinity: true,
                }
            }
        };
        let z_inv2 = f.square(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);
        AffinePoint {
            x: f.mul(&p.x, &z_inv2),
            y: f.mul(&p.y, &z_inv3),
            infinity: false,
        }
    }

    /// `-p`
    pub fn neg(&self, p: &ProjectivePoint<F::Element>) -> ProjectivePoint<F::Element> {
        ProjectivePoint {
            x: p.x.clone(),
            y: self.field.neg(&p.y),
            z: p.z.clone(),
        }
    }

    /// Point doubling, `dbl-2009-l` for `a = 0`.
    pub fn double(&self, p: &ProjectivePoint<F::Element>) -> ProjectivePoint<F::Element> {
        if self.is_zero(p) {
            return p.clone();
        }
        let f = &self.field;

        let a = f.square(&p.x);
        let b = f.square(&p.y);
        let c = f.square(&b);

        // D = 2((X + B)^2 - A - C)
        let d = f.double(&f.sub(&f.sub(&f.square(&f.add(&p.x, &b)), &a), &c));
        let e = f.add(&f.double(&a), &a);
        let ff = f.square(&e);

        let x3 = f.sub(&ff, &f.double(&d));
        let eight_c = f.double(&f.double(&f.double(&c)));
        let y3 = f.sub(&f.mul(&e, &f.sub(&d, &x3)), &eight_c);
        let z3 = f.double(&f.mul(&p.y, &p.z));

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// Point addition, `add-2007-bl`.
    pub fn add(
        &self,
        p1: &ProjectivePoint<F::Element>,
        p2: &ProjectivePoint<F::Element>,
    ) -> ProjectivePoint<F::Element> {
        if self.is_zero(p1) {
            return p2.clone();
        }
        if self.is_zero(p2) {
            return p1.clone();
        }
        let f = &self.field;

        let z1z1 = f.square(&p1.z);
        let z2z2 = f.square(&p2.z);
        let u1 = f.mul(&p1.x, &z2z2);
        let u2 = f.mul(&p2.x, &z1z1);
        let s1 = f.mul(&f.mul(&p1.y, &p2.z), &z2z2);
        let s2 = f.mul(&f.mul(&p2.y, &p1.z), &z1z1);

        if u1 == u2 {
            if s1 == s2 {
                return self.double(p1);
            }
            // p1 == -p2
            return self.zero();
        }

        let h = f.sub(&u2, &u1);
        let i = f.square(&f.double(&h));
        let j = f.mul(&h, &i);
        let r = f.double(&f.sub(&s2, &s1));
        let v = f.mul(&u1, &i);

        let x3 = f.sub(&f.sub(&f.square(&r), &j), &f.double(&v));
        let y3 = f.sub(
            &f.mul(&r, &f.sub(&v, &x3)),
            &f.double(&f.mul(&s1, &j)),
        );
        let z3 = f.mul(
            &f.sub(&f.sub(&f.square(&f.add(&p1.z, &p2.z)), &z1z1), &z2z2),
            &h,
        );

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// `p1 - p2`
    pub fn sub(
        &self,
        p1: &ProjectivePoint<F::Element>,
        p2: &ProjectivePoint<F::Element>,
    ) -> ProjectivePoint<F::Element> {
        self.add(p1, &self.neg(p2))
    }

    /// Double-and-add, scanning `k` from the most significant bit.
    pub fn mul_scalar(
        &self,
        p: &ProjectivePoint<F::Element>,
        k: &BigUint,
    ) -> ProjectivePoint<F::Element> {
        let mut acc = self.zero();
        for i in (0..k.bits()).rev() {
            acc = self.double(&acc);
            if k.bit(i) {
                acc = self.add(&acc, p);
            }
        }
        acc
    }

    /// Scalar multiplication by a machine integer.
    pub fn mul_u64(&self, p: &ProjectivePoint<F::Element>, k: u64) -> ProjectivePoint<F::Element> {
        self.mul_scalar(p, &BigUint::from(k))
    }

    /// Compare points independently of their Jacobian representation.
    pub fn equals(
        &self,
        p1: &ProjectivePoint<F::Element>,
        p2: &ProjectivePoint<F::Element>,
    ) -> bool {
        match (self.is_zero(p1), self.is_zero(p2)) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let f = &self.field;

        let z1z1 = f.square(&p1.z);
        let z2z2 = f.square(&p2.z);
        if f.mul(&p1.x, &z2z2) != f.mul(&p2.x, &z1z1) {
            return false;
        }
        let z1z1z1 = f.mul(&z1z1, &p1.z);
        let z2z2z2 = f.mul(&z2z2, &p2.z);
        f.mul(&p1.y, &z2z2z2) == f.mul(&p2.y, &z1z1z1)
    }

    /// Random multiple of the generator.
    pub fn random<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        order: &BigUint,
    ) -> ProjectivePoint<F::Element> {
        let k = rng.gen_biguint_below(order);
        self.mul_scalar(&self.generator, &k)
    }
}
