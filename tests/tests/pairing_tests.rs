//! End-to-end pairing tests through the public API

use bn128_algorithms::{Bn128, Field};
use bn128_tests::{g1_mul, g2_mul, init_tracing, seeded_rng, BN128};
use num_bigint::{BigUint, RandBigInt};

#[test]
fn test_pairing_check_matching_products() {
    init_tracing();
    let bn = &*BN128;

    // e(25 g1, 30 g2) == e(30 g1, 25 g2)
    assert!(bn
        .pairing_check(&g1_mul(25), &g2_mul(30), &g1_mul(30), &g2_mul(25))
        .unwrap());
    assert!(!bn
        .pairing_check(&g1_mul(25), &g2_mul(30), &g1_mul(30), &g2_mul(26))
        .unwrap());
}

#[test]
fn test_bilinearity_random_scalars() {
    init_tracing();
    let bn = &*BN128;
    let fq12 = bn.fq12();
    let mut rng = seeded_rng(2024);

    let a: BigUint = rng.gen_biguint_below(bn.r());
    let b: BigUint = rng.gen_biguint_below(bn.r());

    let p = bn.g1().mul_scalar(bn.g1().g(), &a);
    let q = bn.g2().mul_scalar(bn.g2().g(), &b);

    let left = bn.pairing(&p, &q).unwrap();
    let base = bn.pairing(bn.g1().g(), bn.g2().g()).unwrap();
    let right = fq12.exp(&base, &((&a * &b) % bn.r()));

    assert_eq!(left, right);
}

#[test]
fn test_prepared_operands_are_reusable() {
    let bn = &*BN128;
    let fq12 = bn.fq12();
    let pre_q = bn.precompute_g2(&g2_mul(3));

    // e(2P, Q) * e(5P, Q) == e(7P, Q)
    let f2 = bn.miller_loop(&bn.precompute_g1(&g1_mul(2)), &pre_q);
    let f5 = bn.miller_loop(&bn.precompute_g1(&g1_mul(5)), &pre_q);
    let f7 = bn.miller_loop(&bn.precompute_g1(&g1_mul(7)), &pre_q);

    let lhs = bn.final_exponentiation(&fq12.mul(&f2, &f5)).unwrap();
    let rhs = bn.final_exponentiation(&f7).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn test_negation_inverts_pairing() {
    let bn = &*BN128;
    let fq12 = bn.fq12();

    let p = g1_mul(11);
    let q = g2_mul(13);
    let e = bn.pairing(&p, &q).unwrap();
    let e_neg = bn.pairing(&bn.g1().neg(&p), &q).unwrap();

    assert_eq!(fq12.mul(&e, &e_neg), fq12.one());
    assert_eq!(e_neg, fq12.conjugate(&e));
}

#[test]
fn test_custom_params_context() {
    // Same curve described through explicit parameters
    let params = bn128_params::Bn128Params::default();
    let bn = Bn128::with_params(&params).unwrap();
    assert_eq!(bn.q(), BN128.q());
    assert!(bn.validate().is_ok());
}
