//! Optimal ate pairing on BN128.
//!
//! Line functions are precomputed from the G2 operand in homogeneous
//! projective coordinates and replayed against the G1 operand, following the
//! "flipped" Miller loop of Aranha et al., *Faster Explicit Formulas for
//! Computing Pairings over Ordinary Curves*. The final exponentiation uses
//! the addition chain of Fuentes-Castañeda, Knapp and Rodríguez-Henríquez.

use bn128_api::{Field, Result};
use tracing::{debug_span, instrument};

use super::field::{Fp, Fp12, Fp2};
use super::g1::G1Projective;
use super::g2::{G2Affine, G2Projective};
use super::Bn128;

// ============================================================================
// Prepared Operands
// ============================================================================

/// G1 operand in affine form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G1Prepared {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: bool,
}

impl G1Prepared {
    /// Affine x-coordinate.
    pub fn x(&self) -> &Fp {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &Fp {
        &self.y
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// Coefficients of one sparse line function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllCoeffs {
    /// Constant term
    pub ell_0: Fp2,
    /// Coefficient scaled by the G1 y-coordinate
    pub ell_vw: Fp2,
    /// Coefficient scaled by the G1 x-coordinate
    pub ell_vv: Fp2,
}

/// G2 operand with its line coefficients, one entry per doubling,
/// per nonzero loop digit and per correction step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G2Prepared {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) infinity: bool,
    pub(crate) coeffs: Vec<EllCoeffs>,
}

impl G2Prepared {
    /// Affine x-coordinate.
    pub fn x(&self) -> &Fp2 {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &Fp2 {
        &self.y
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Line coefficients in the order the Miller loop consumes them.
    pub fn coeffs(&self) -> &[EllCoeffs] {
        &self.coeffs
    }
}

/// Running point of the precomputation, `x = X/Z`, `y = Y/Z`.
struct G2HomProjective {
    x: Fp2,
    y: Fp2,
    z: Fp2,
}

// ============================================================================
// Pairing Engine
// ============================================================================

impl Bn128 {
    /// Normalize a G1 point for the Miller loop.
    pub fn precompute_g1(&self, p: &G1Projective) -> G1Prepared {
        let a = self.g1.affine(p);
        G1Prepared {
            x: a.x,
            y: a.y,
            infinity: a.infinity,
        }
    }

    /// Compute every line coefficient the Miller loop needs for `q`.
    #[instrument(skip_all)]
    pub fn precompute_g2(&self, q: &G2Projective) -> G2Prepared {
        let fq2 = &self.fq2;
        let q = self.g2.affine(q);
        if q.infinity {
            return G2Prepared {
                x: q.x,
                y: q.y,
                infinity: true,
                coeffs: Vec::new(),
            };
        }

        let mut r = G2HomProjective {
            x: q.x.clone(),
            y: q.y.clone(),
            z: fq2.one(),
        };
        let neg_q = G2Affine {
            x: q.x.clone(),
            y: fq2.neg(&q.y),
            infinity: false,
        };

        let mut coeffs = Vec::with_capacity(self.ate_naf.len() + self.ate_naf.len() / 2);
        for digit in self.ate_naf.iter().rev().skip(1) {
            coeffs.push(self.doubling_step(&mut r));
            match digit {
                1 => coeffs.push(self.mixed_addition_step(&q, &mut r)),
                -1 => coeffs.push(self.mixed_addition_step(&neg_q, &mut r)),
                _ => {}
            }
        }

        // Corrections with Q1 = psi(Q) and -Q2 = -psi^2(Q)
        let q1 = self.twist_frobenius.mul_by_q(fq2, &q);
        let mut q2 = self.twist_frobenius.mul_by_q(fq2, &q1);
        q2.y = fq2.neg(&q2.y);

        coeffs.push(self.mixed_addition_step(&q1, &mut r));
        coeffs.push(self.mixed_addition_step(&q2, &mut r));

        G2Prepared {
            x: q.x,
            y: q.y,
            infinity: false,
            coeffs,
        }
    }

    /// Double `r` in place, returning the tangent line.
    fn doubling_step(&self, r: &mut G2HomProjective) -> EllCoeffs {
        let fq2 = &self.fq2;

        let a = fq2.mul_by_base(&fq2.mul(&r.x, &r.y), &self.two_inv);
        let b = fq2.square(&r.y);
        let c = fq2.square(&r.z);
        let d = fq2.add(&fq2.double(&c), &c);
        let e = fq2.mul(&self.twist_b, &d);
        let f = fq2.add(&fq2.double(&e), &e);
        let g = fq2.mul_by_base(&fq2.add(&b, &f), &self.two_inv);
        let h = fq2.sub(&fq2.square(&fq2.add(&r.y, &r.z)), &fq2.add(&b, &c));
        let i = fq2.sub(&e, &b);
        let j = fq2.square(&r.x);
        let e_squared = fq2.square(&e);

        r.x = fq2.mul(&a, &fq2.sub(&b, &f));
        r.y = fq2.sub(
            &fq2.square(&g),
            &fq2.add(&fq2.double(&e_squared), &e_squared),
        );
        r.z = fq2.mul(&b, &h);

        EllCoeffs {
            ell_0: fq2.mul(&self.twist, &i),
            ell_vw: fq2.neg(&h),
            ell_vv: fq2.add(&fq2.double(&j), &j),
        }
    }

    /// Add the affine point `q` to `r` in place, returning the chord.
    fn mixed_addition_step(&self, q: &G2Affine, r: &mut G2HomProjective) -> EllCoeffs {
        let fq2 = &self.fq2;

        let d = fq2.sub(&r.x, &fq2.mul(&q.x, &r.z));
        let e = fq2.sub(&r.y, &fq2.mul(&q.y, &r.z));
        let f = fq2.square(&d);
        let g = fq2.square(&e);
        let h = fq2.mul(&d, &f);
        let i = fq2.mul(&r.x, &f);
        let j = fq2.sub(&fq2.add(&h, &fq2.mul(&r.z, &g)), &fq2.double(&i));

        r.x = fq2.mul(&d, &j);
        r.y = fq2.sub(&fq2.mul(&e, &fq2.sub(&i, &j)), &fq2.mul(&h, &r.y));
        r.z = fq2.mul(&r.z, &h);

        EllCoeffs {
            ell_0: fq2.mul(
                &self.twist,
                &fq2.sub(&fq2.mul(&e, &q.x), &fq2.mul(&d, &q.y)),
            ),
            ell_vw: d,
            ell_vv: fq2.neg(&e),
        }
    }

    /// Evaluate a line at `p` and multiply it into `f`.
    fn ell(&self, f: &Fp12, c: &EllCoeffs, p: &G1Prepared) -> Fp12 {
        let fq2 = &self.fq2;
        self.fq12.mul_by_024(
            f,
            &c.ell_0,
            &fq2.mul_by_base(&c.ell_vw, &p.y),
            &fq2.mul_by_base(&c.ell_vv, &p.x),
        )
    }

    /// Miller loop over the NAF of `6z + 2`.
    ///
    /// The result is not yet in GT; pass it to
    /// [`Bn128::final_exponentiation`]. Returns one if either operand is
    /// the identity.
    #[instrument(skip_all)]
    pub fn miller_loop(&self, p: &G1Prepared, q: &G2Prepared) -> Fp12 {
        let fq12 = &self.fq12;
        if p.infinity || q.infinity {
            return fq12.one();
        }

        let mut coeffs = q.coeffs.iter();
        let mut step = |f: Fp12| match coeffs.next() {
            Some(c) => self.ell(&f, c, p),
            None => f,
        };

        let mut f = fq12.one();
        for digit in self.ate_naf.iter().rev().skip(1) {
            f = step(fq12.square(&f));
            if *digit != 0 {
                f = step(f);
            }
        }

        f = step(f);
        step(f)
    }

    /// `conj(a^z)`, which is `a^(-z)` inside the cyclotomic subgroup.
    fn exp_by_neg_z(&self, a: &Fp12) -> Fp12 {
        self.fq12.unitary_inverse(&self.fq12.exp(a, &self.z))
    }

    /// Raise a Miller loop output into GT.
    ///
    /// Computes `f^(2z(6z^2 + 3z + 1)(q^12 - 1)/r)`. The extra factor is
    /// coprime to `r`, so the result is a valid, non-degenerate pairing
    /// value. Fails only for `f == 0`.
    #[instrument(skip_all)]
    pub fn final_exponentiation(&self, f: &Fp12) -> Result<Fp12> {
        let fq12 = &self.fq12;

        // Easy part: f^((q^6 - 1)(q^2 + 1))
        let elt = debug_span!("easy part").in_scope(|| -> Result<Fp12> {
            let c = fq12.mul(&fq12.conjugate(f), &fq12.inverse(f)?);
            Ok(fq12.mul(&fq12.frobenius_map(&c, 2), &c))
        })?;

        // Hard part: (q^4 - q^2 + 1)/r scaled by 2z(6z^2 + 3z + 1)
        let _span = debug_span!("hard part").entered();
        let a = self.exp_by_neg_z(&elt);
        let b = fq12.square(&a);
        let c = fq12.square(&b);
        let d = fq12.mul(&c, &b);
        let e = self.exp_by_neg_z(&d);
        let f = fq12.square(&e);
        let g = self.exp_by_neg_z(&f);
        let h = fq12.unitary_inverse(&d);
        let i = fq12.unitary_inverse(&g);
        let j = fq12.mul(&i, &e);
        let k = fq12.mul(&j, &h);
        let l = fq12.mul(&k, &b);
        let m = fq12.mul(&k, &e);
        let n = fq12.mul(&m, &elt);
        let o = fq12.frobenius_map(&l, 1);
        let p = fq12.mul(&o, &n);
        let q = fq12.frobenius_map(&k, 2);
        let r = fq12.mul(&q, &p);
        let s = fq12.unitary_inverse(&elt);
        let t = fq12.mul(&s, &l);
        let u = fq12.frobenius_map(&t, 3);
        Ok(fq12.mul(&u, &r))
    }

    /// Full pairing `e(p, q)`.
    pub fn pairing(&self, p: &G1Projective, q: &G2Projective) -> Result<Fp12> {
        let ml = self.miller_loop(&self.precompute_g1(p), &self.precompute_g2(q));
        self.final_exponentiation(&ml)
    }

    /// Check `e(p1, q1) == e(p2, q2)` with a single final exponentiation.
    #[instrument(skip_all)]
    pub fn pairing_check(
        &self,
        p1: &G1Projective,
        q1: &G2Projective,
        p2: &G1Projective,
        q2: &G2Projective,
    ) -> Result<bool> {
        let fq12 = &self.fq12;
        let ml1 = self.miller_loop(&self.precompute_g1(p1), &self.precompute_g2(q1));
        let ml2 = self.miller_loop(&self.precompute_g1(p2), &self.precompute_g2(q2));
        let res = self.final_exponentiation(&fq12.mul(&ml1, &fq12.inverse(&ml2)?))?;
        Ok(res == fq12.one())
    }
}
