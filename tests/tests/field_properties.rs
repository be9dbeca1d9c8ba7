//! Property-based tests for the BN128 field tower

use bn128_algorithms::{Field, Fp, Fp2};
use bn128_tests::BN128;
use num_bigint::BigUint;
use proptest::prelude::*;

/// Arbitrary element of Fp, from 256 random bits reduced mod q
fn fp() -> impl Strategy<Value = Fp> {
    any::<[u8; 32]>().prop_map(|bytes| BN128.fq().element(BigUint::from_bytes_be(&bytes)))
}

fn fp2() -> impl Strategy<Value = Fp2> {
    (fp(), fp()).prop_map(|(c0, c1)| BN128.fq2().element(c0, c1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fp_elements_are_canonical(a in fp(), b in fp()) {
        let fq = BN128.fq();
        for x in [fq.add(&a, &b), fq.sub(&a, &b), fq.mul(&a, &b), fq.neg(&a)] {
            prop_assert!(x.as_biguint() < BN128.q());
        }
    }

    #[test]
    fn fp_ring_axioms(a in fp(), b in fp(), c in fp()) {
        let fq = BN128.fq();
        prop_assert_eq!(fq.add(&a, &b), fq.add(&b, &a));
        prop_assert_eq!(fq.mul(&a, &b), fq.mul(&b, &a));
        prop_assert_eq!(
            fq.mul(&a, &fq.add(&b, &c)),
            fq.add(&fq.mul(&a, &b), &fq.mul(&a, &c))
        );
        prop_assert_eq!(fq.sub(&fq.add(&a, &b), &b), a.clone());
        prop_assert_eq!(fq.add(&a, &fq.neg(&a)), fq.zero());
        prop_assert_eq!(fq.square(&a), fq.mul(&a, &a));
        prop_assert_eq!(fq.double(&a), fq.add(&a, &a));
    }

    #[test]
    fn fp_inverse(a in fp()) {
        let fq = BN128.fq();
        prop_assume!(!fq.is_zero(&a));
        prop_assert_eq!(fq.mul(&a, &fq.inverse(&a).unwrap()), fq.one());
    }

    #[test]
    fn fp_sqrt_of_square(a in fp()) {
        let fq = BN128.fq();
        let s = fq.sqrt(&fq.square(&a)).unwrap();
        prop_assert!(s == a || s == fq.neg(&a));
        prop_assert!(!fq.is_lexicographically_largest(&s));
    }

    #[test]
    fn fp2_field_axioms(a in fp2(), b in fp2(), c in fp2()) {
        let fq2 = BN128.fq2();
        prop_assert_eq!(fq2.mul(&a, &b), fq2.mul(&b, &a));
        prop_assert_eq!(
            fq2.mul(&fq2.mul(&a, &b), &c),
            fq2.mul(&a, &fq2.mul(&b, &c))
        );
        prop_assert_eq!(
            fq2.mul(&a, &fq2.add(&b, &c)),
            fq2.add(&fq2.mul(&a, &b), &fq2.mul(&a, &c))
        );
        prop_assert_eq!(fq2.square(&a), fq2.mul(&a, &a));
    }

    #[test]
    fn fp2_mul_div_roundtrip(a in fp2(), b in fp2()) {
        let fq2 = BN128.fq2();
        prop_assume!(!fq2.is_zero(&b));
        prop_assert_eq!(fq2.div(&fq2.mul(&a, &b), &b).unwrap(), a);
    }

    #[test]
    fn fp2_frobenius_is_conjugation(a in fp2()) {
        let fq2 = BN128.fq2();
        prop_assert_eq!(fq2.frobenius_map(&a, 1), fq2.conjugate(&a));
        prop_assert_eq!(fq2.frobenius_map(&a, 2), a);
    }
}
