//! Prime field `GF(q)` for a modulus fixed at construction.
//!
//! The BN128 base field uses q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
//! and the scalar field r = 21888242871839275222246405745257275088548364400416034343698204186575808495617,
//! but nothing here depends on a particular prime.

// Standard library imports
use core::fmt;

// External crate imports
use bn128_api::{validate, Error, Field, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{Num, One, Zero};
use rand::RngCore;
use subtle::{Choice, ConstantTimeEq};

/// Upper bound on the search for a quadratic non-residue.
const NQR_SEARCH_LIMIT: u64 = 1 << 16;

// ============================================================================
// Field Element Type
// ============================================================================

/// Element of a prime field, always reduced into `[0, q)`.
///
/// Values are only produced by a [`PrimeField`], which keeps them canonical.
#[derive(Clone, Default)]
pub struct Fp(pub(crate) BigUint);

impl Fp {
    /// Canonical integer value of this element.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Canonical integer value, cloned.
    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    /// Consume the element, returning its canonical integer value.
    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

// ============================================================================
// Field Type
// ============================================================================

/// Arithmetic modulo an odd prime `q`.
#[derive(Clone, Debug)]
pub struct PrimeField {
    modulus: BigUint,
    /// (q - 1) / 2
    half: BigUint,
    /// Smallest quadratic non-residue
    nqr: Fp,
    /// q - 1 = 2^s * t with t odd
    s: u64,
    /// (t - 1) / 2
    t_minus_one_over_two: BigUint,
    /// nqr^t, a generator of the 2-Sylow subgroup
    nqr_to_t: Fp,
    /// (q + 1) / 4 when q = 3 (mod 4)
    sqrt_exponent: Option<BigUint>,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    ///
    /// Primality is the caller's responsibility; obviously invalid moduli
    /// (even or smaller than 3) are rejected.
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(modulus >= BigUint::from(3u8), "modulus", "must be at least 3")?;
        validate::parameter(modulus.bit(0), "modulus", "must be odd")?;

        let one = BigUint::one();
        let q_minus_one = &modulus - &one;
        let half = &q_minus_one >> 1u32;

        let s = q_minus_one.trailing_zeros().unwrap_or(0);
        let t = &q_minus_one >> s;
        let t_minus_one_over_two = (&t - &one) >> 1u32;

        let nqr = (2..NQR_SEARCH_LIMIT)
            .map(BigUint::from)
            .find(|n| n.modpow(&half, &modulus) == q_minus_one)
            .ok_or_else(|| Error::param("modulus", "no quadratic non-residue found; modulus is not prime"))?;
        let nqr_to_t = nqr.modpow(&t, &modulus);

        let sqrt_exponent = if s == 1 {
            Some((&modulus + &one) >> 2u32)
        } else {
            None
        };

        Ok(PrimeField {
            modulus,
            half,
            nqr: Fp(nqr),
            s,
            t_minus_one_over_two,
            nqr_to_t: Fp(nqr_to_t),
            sqrt_exponent,
        })
    }

    /// Parse the modulus from a decimal string.
    pub fn from_modulus_str(modulus: &str) -> Result<Self> {
        let modulus = BigUint::from_str_radix(modulus, 10)
            .map_err(|_| Error::parse("field modulus", modulus))?;
        Self::new(modulus)
    }

    /// The prime modulus q.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The fixed quadratic non-residue used by the square root.
    pub fn nqr(&self) -> &Fp {
        &self.nqr
    }

    /// Reduce an unsigned integer into the field.
    pub fn element(&self, value: BigUint) -> Fp {
        if value < self.modulus {
            Fp(value)
        } else {
            Fp(value % &self.modulus)
        }
    }

    /// Embed a small unsigned integer.
    pub fn from_u64(&self, value: u64) -> Fp {
        self.element(BigUint::from(value))
    }

    /// Embed a small signed integer; negative values wrap around q.
    pub fn from_i64(&self, value: i64) -> Fp {
        self.from_bigint(&BigInt::from(value))
    }

    /// Reduce a signed integer into `[0, q)`.
    pub fn from_bigint(&self, value: &BigInt) -> Fp {
        let m = BigInt::from(self.modulus.clone());
        let reduced = ((value % &m) + &m) % &m;
        Fp(reduced.into_parts().1)
    }

    /// Parse a signed integer in the given radix and reduce it.
    pub fn from_str_radix(&self, s: &str, radix: u32) -> Result<Fp> {
        validate::parameter((2..=36).contains(&radix), "radix", "must be in 2..=36")?;
        BigInt::from_str_radix(s, radix)
            .map(|v| self.from_bigint(&v))
            .map_err(|_| Error::parse("field element", s))
    }

    /// Parse a signed decimal integer.
    pub fn from_dec_str(&self, s: &str) -> Result<Fp> {
        self.from_str_radix(s, 10)
    }

    /// Parse a hexadecimal integer, with or without a `0x` prefix.
    pub fn from_hex_str(&self, s: &str) -> Result<Fp> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        BigUint::from_str_radix(digits, 16)
            .map(|v| self.element(v))
            .map_err(|_| Error::parse("field element", s))
    }

    /// Check if element > (q-1)/2
    pub fn is_lexicographically_largest(&self, a: &Fp) -> bool {
        a.0 > self.half
    }

    /// Legendre symbol test: true for zero and for nonzero squares.
    pub fn is_square(&self, a: &Fp) -> bool {
        a.0.is_zero() || a.0.modpow(&self.half, &self.modulus).is_one()
    }

    /// Square root, or `None` if `a` is not a quadratic residue.
    ///
    /// Of the two roots, the one that is not lexicographically largest is
    /// returned, so `sqrt(4) == 2`.
    pub fn sqrt(&self, a: &Fp) -> Option<Fp> {
        if a.0.is_zero() {
            return Some(self.zero());
        }
        if !self.is_square(a) {
            return None;
        }

        let root = match &self.sqrt_exponent {
            // q = 3 (mod 4), compute a^((q+1)/4)
            Some(e) => Fp(a.0.modpow(e, &self.modulus)),
            None => self.tonelli_shanks(a),
        };

        if self.is_lexicographically_largest(&root) {
            Some(self.neg(&root))
        } else {
            Some(root)
        }
    }

    /// Tonelli-Shanks for a nonzero quadratic residue `a`.
    fn tonelli_shanks(&self, a: &Fp) -> Fp {
        let one = self.one();
        let mut m = self.s;
        let mut c = self.nqr_to_t.clone();
        let w = self.exp(a, &self.t_minus_one_over_two);
        // x = a^((t+1)/2), b = a^t
        let mut x = self.mul(a, &w);
        let mut b = self.mul(&x, &w);

        while b != one {
            // Least k with b^(2^k) = 1; k < m for residues
            let mut k = 0;
            let mut b2k = b.clone();
            while b2k != one {
                b2k = self.square(&b2k);
                k += 1;
            }

            let mut d = c;
            for _ in 0..(m - k - 1) {
                d = self.square(&d);
            }
            c = self.square(&d);
            b = self.mul(&b, &c);
            x = self.mul(&x, &d);
            m = k;
        }
        x
    }

    /// Uniformly random element from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn random_element(&self) -> Fp {
        self.random(&mut rand::thread_rng())
    }
}

impl Field for PrimeField {
    type Element = Fp;

    fn zero(&self) -> Fp {
        Fp(BigUint::zero())
    }

    fn one(&self) -> Fp {
        Fp(BigUint::one())
    }

    fn is_zero(&self, a: &Fp) -> bool {
        a.0.is_zero()
    }

    fn add(&self, a: &Fp, b: &Fp) -> Fp {
        let sum = &a.0 + &b.0;
        if sum >= self.modulus {
            Fp(sum - &self.modulus)
        } else {
            Fp(sum)
        }
    }

    fn sub(&self, a: &Fp, b: &Fp) -> Fp {
        if a.0 >= b.0 {
            Fp(&a.0 - &b.0)
        } else {
            Fp(&a.0 + &self.modulus - &b.0)
        }
    }

    fn neg(&self, a: &Fp) -> Fp {
        if a.0.is_zero() {
            a.clone()
        } else {
            Fp(&self.modulus - &a.0)
        }
    }

    fn mul(&self, a: &Fp, b: &Fp) -> Fp {
        Fp((&a.0 * &b.0) % &self.modulus)
    }

    fn square(&self, a: &Fp) -> Fp {
        Fp((&a.0 * &a.0) % &self.modulus)
    }

    /// Extended Euclidean inversion.
    fn inverse(&self, a: &Fp) -> Result<Fp> {
        validate::nonzero(a.0.is_zero(), "Fp inverse")?;

        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();
        let mut r = BigInt::from(self.modulus.clone());
        let mut new_r = BigInt::from(a.0.clone());

        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            let next_t = &t - &quotient * &new_t;
            t = core::mem::replace(&mut new_t, next_t);
            let next_r = &r - &quotient * &new_r;
            r = core::mem::replace(&mut new_r, next_r);
        }

        validate::parameter(r.is_one(), "element", "not invertible modulo q")?;
        Ok(self.from_bigint(&t))
    }

    fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Fp {
        Fp(rng.gen_biguint_below(&self.modulus))
    }

    fn characteristic(&self) -> &BigUint {
        &self.modulus
    }

    fn degree(&self) -> usize {
        1
    }

    fn frobenius_map(&self, a: &Fp, _power: usize) -> Fp {
        a.clone()
    }

    fn exp(&self, a: &Fp, e: &BigUint) -> Fp {
        Fp(a.0.modpow(e, &self.modulus))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.to_u64_digits().as_slice().ct_eq(other.0.to_u64_digits().as_slice())
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
