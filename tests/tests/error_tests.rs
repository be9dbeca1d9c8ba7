//! Construction-time validation errors

use bn128_algorithms::{Bn128, Error, Field};
use bn128_params::Bn128Params;
use bn128_tests::BN128;

#[test]
fn test_off_curve_generator_rejected() {
    let params = Bn128Params {
        g1: ["1", "3"],
        ..Bn128Params::default()
    };
    let err = Bn128::with_params(&params).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

#[test]
fn test_off_twist_generator_rejected() {
    let mut params = Bn128Params::default();
    params.g2[1] = ["1", "2"];
    assert!(matches!(
        Bn128::with_params(&params),
        Err(Error::Parameter { .. })
    ));
}

#[test]
fn test_malformed_parameters_rejected() {
    let params = Bn128Params {
        q: "0x30644e",
        ..Bn128Params::default()
    };
    assert!(matches!(
        Bn128::with_params(&params),
        Err(Error::Parse { .. })
    ));

    let params = Bn128Params {
        q: "21888242871839275222246405745257275088696311157297823662689037894645226208584",
        ..Bn128Params::default()
    };
    assert!(matches!(
        Bn128::with_params(&params),
        Err(Error::Parameter { .. })
    ));
}

#[test]
fn test_division_by_zero_at_every_level() {
    let bn = &*BN128;
    assert!(bn.fq().inverse(&bn.fq().zero()).unwrap_err().is_division_by_zero());
    assert!(bn.fq2().inverse(&bn.fq2().zero()).unwrap_err().is_division_by_zero());
    assert!(bn.fq6().inverse(&bn.fq6().zero()).unwrap_err().is_division_by_zero());
    assert!(bn.fq12().inverse(&bn.fq12().zero()).unwrap_err().is_division_by_zero());
    assert!(bn
        .fq12()
        .div(&bn.fq12().one(), &bn.fq12().zero())
        .is_err());
}
