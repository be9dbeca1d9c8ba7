//! Independent contexts used from several threads

use std::sync::Arc;
use std::thread;

use bn128_algorithms::{Bn128, Field};
use bn128_tests::BN128;

#[test]
fn test_contexts_across_threads() {
    let handles: Vec<_> = (0..2)
        .map(|_| {
            thread::spawn(|| {
                let bn = Bn128::new().unwrap();
                let p = bn.g1().mul_u64(bn.g1().g(), 17);
                let q = bn.g2().mul_u64(bn.g2().g(), 19);
                bn.pairing(&p, &q).unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], results[1]);
}

#[test]
fn test_shared_context_across_threads() {
    let bn = Arc::new(BN128.clone());
    let handles: Vec<_> = (1..=2u64)
        .map(|k| {
            let bn = Arc::clone(&bn);
            thread::spawn(move || {
                let p = bn.g1().mul_u64(bn.g1().g(), k);
                let q = bn.g2().mul_u64(bn.g2().g(), 3 - k);
                bn.pairing(&p, &q).unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // e(g1, 2 g2) == e(2 g1, g2)
    assert_eq!(results[0], results[1]);
    assert_ne!(results[0], bn.fq12().one());
}
