//! Group operation tests for BN128 G1 and G2

use super::super::Bn128;

use bn128_api::Field;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// ============================================================================
// G1 Group Tests
// ============================================================================

#[test]
fn test_g1_order() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();

    let res = g1.mul_scalar(g1.g(), bn.r());
    assert!(g1.equals(&res, &g1.zero()), "G1 does not have order r");
}

#[test]
fn test_g1_add_matches_mul() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();

    let gr1 = g1.mul_u64(g1.g(), 33);
    let gr2 = g1.mul_u64(g1.g(), 44);
    let sum1 = g1.add(&gr1, &gr2);
    let sum2 = g1.mul_scalar(g1.g(), &(BigUint::from(33u32) + 44u32));

    assert!(g1.equals(&sum1, &sum2));
}

#[test]
fn test_g1_identity_operations() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();
    let zero = g1.zero();
    let p = g1.mul_u64(g1.g(), 42);

    assert!(g1.equals(&g1.add(&zero, &p), &p));
    assert!(g1.equals(&g1.add(&p, &zero), &p));
    assert!(g1.is_zero(&g1.double(&zero)));
    assert!(g1.is_zero(&g1.mul_u64(&zero, 42)));
    assert!(g1.is_zero(&g1.mul_u64(&p, 0)));
    assert!(g1.is_zero(&g1.add(&p, &g1.neg(&p))));
    assert!(g1.is_zero(&g1.sub(&p, &p)));
    assert!(g1.affine(&zero).infinity);
}

#[test]
fn test_g1_double_matches_add() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();
    let p = g1.mul_u64(g1.g(), 5);

    // add() must detect the doubling case
    assert!(g1.equals(&g1.add(&p, &p), &g1.double(&p)));
    assert!(g1.equals(&g1.double(&p), &g1.mul_u64(g1.g(), 10)));
}

#[test]
fn test_g1_associativity() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();
    let p = g1.mul_u64(g1.g(), 2);
    let q = g1.mul_u64(g1.g(), 3);
    let r = g1.mul_u64(g1.g(), 5);

    let sum1 = g1.add(&g1.add(&p, &q), &r);
    let sum2 = g1.add(&p, &g1.add(&q, &r));
    // Compare as affine to handle different projective representations
    assert_eq!(g1.affine(&sum1), g1.affine(&sum2));
}

#[test]
fn test_g1_on_curve() {
    let bn = Bn128::new().unwrap();
    let g1 = bn.g1();
    let fq = bn.fq();
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    let p = g1.random(&mut rng, bn.r());
    assert!(g1.is_on_curve_projective(&p));
    assert!(g1.is_on_curve(&g1.affine(&p)));
    assert!(g1.is_in_subgroup(&p, bn.r()));

    let g = g1.affine(g1.g());
    assert_eq!(g.x, fq.from_u64(1));
    assert_eq!(g.y, fq.from_u64(2));

    assert!(g1.point(fq.from_u64(1), fq.from_u64(2)).is_ok());
    assert!(g1.point(fq.from_u64(1), fq.from_u64(3)).is_err());
}

// ============================================================================
// G2 Group Tests
// ============================================================================

#[test]
fn test_g2_order() {
    let bn = Bn128::new().unwrap();
    let g2 = bn.g2();

    let res = g2.mul_scalar(g2.g(), bn.r());
    assert!(g2.equals(&res, &g2.zero()), "G2 does not have order r");
}

#[test]
fn test_g2_add_matches_mul() {
    let bn = Bn128::new().unwrap();
    let g2 = bn.g2();

    let gr1 = g2.mul_u64(g2.g(), 33);
    let gr2 = g2.mul_u64(g2.g(), 44);
    let sum1 = g2.add(&gr1, &gr2);
    let sum2 = g2.mul_scalar(g2.g(), &(BigUint::from(33u32) + 44u32));

    assert!(g2.equals(&sum1, &sum2));
}

#[test]
fn test_g2_identity_operations() {
    let bn = Bn128::new().unwrap();
    let g2 = bn.g2();
    let zero = g2.zero();
    let p = g2.mul_u64(g2.g(), 7);

    assert!(g2.equals(&g2.add(&zero, &p), &p));
    assert!(g2.is_zero(&g2.sub(&p, &p)));
    assert!(g2.equals(&g2.add(&p, &p), &g2.mul_u64(g2.g(), 14)));
    assert!(!g2.equals(&p, &zero));
}

#[test]
fn test_g2_twist_constant() {
    let bn = Bn128::new().unwrap();
    let fq2 = bn.fq2();

    // b' * xi = 3
    let b = fq2.mul(bn.twist_b(), bn.twist());
    assert_eq!(b, fq2.from_base(bn.fq().from_u64(3)));
    assert!(bn.g2().is_on_curve_projective(bn.g2().g()));
}

#[test]
fn test_g2_frobenius_endomorphism() {
    let bn = Bn128::new().unwrap();
    let g2 = bn.g2();
    let fq2 = bn.fq2();
    let frob = &bn.twist_frobenius;

    let q_minus_one = bn.q() - 1u32;
    assert_eq!(frob.x_coeff(), &fq2.exp(bn.twist(), &(&q_minus_one / 3u32)));
    assert_eq!(frob.y_coeff(), &fq2.exp(bn.twist(), &(&q_minus_one / 2u32)));

    // u^q = -u, since q = 3 (mod 4)
    let fq = bn.fq();
    assert_eq!(fq2.frobenius_coeffs(), &[fq.one(), fq.neg(&fq.one())][..]);

    let q = g2.affine(&g2.mul_u64(g2.g(), 9));
    let psi_q = frob.mul_by_q(fq2, &q);
    assert!(g2.is_on_curve(&psi_q));

    // psi acts on G2 as multiplication by q
    let expected = g2.affine(&g2.mul_scalar(&g2.from_affine(&q), bn.q()));
    assert_eq!(psi_q, expected);

    let psi_q_proj = frob.mul_by_q_projective(fq2, &g2.mul_u64(g2.g(), 9));
    assert!(g2.equals(&psi_q_proj, &g2.from_affine(&psi_q)));
}

#[test]
fn test_context_validation() {
    let bn = Bn128::new().unwrap();
    assert!(bn.validate().is_ok());
    assert_eq!(bn.ate_loop_count().to_string(), bn128_params::bn128::BN128_ATE_LOOP_COUNT);
    assert_eq!(bn.z().to_string(), bn128_params::bn128::BN128_Z);
}
