//! Shared fixtures for the bn128 integration tests and benchmarks

use bn128_algorithms::{Bn128, G1Projective, G2Projective};
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Context shared by every test in a binary.
///
/// Construction derives all Frobenius coefficients, so building it once
/// keeps the suites fast.
pub static BN128: Lazy<Bn128> =
    Lazy::new(|| Bn128::new().expect("standard parameters are valid"));

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic generator for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `k * g1`
pub fn g1_mul(k: u64) -> G1Projective {
    BN128.g1().mul_u64(BN128.g1().g(), k)
}

/// `k * g2`
pub fn g2_mul(k: u64) -> G2Projective {
    BN128.g2().mul_u64(BN128.g2().g(), k)
}
