use bn128_algorithms::{Bn128, Field};
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

fn main() -> bn128_algorithms::Result<()> {
    // RUST_LOG=debug shows the pairing spans
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bn = Bn128::new()?;
    bn.validate()?;
    println!("q = {}", bn.q());
    println!("r = {}", bn.r());

    let a = BigUint::from(25u32);
    let b = BigUint::from(30u32);
    let p1 = bn.g1().mul_scalar(bn.g1().g(), &a);
    let q1 = bn.g2().mul_scalar(bn.g2().g(), &b);
    let p2 = bn.g1().mul_scalar(bn.g1().g(), &b);
    let q2 = bn.g2().mul_scalar(bn.g2().g(), &a);

    println!("e(25 g1, 30 g2) == e(30 g1, 25 g2): {}", bn.pairing_check(&p1, &q1, &p2, &q2)?);

    let e = bn.pairing(bn.g1().g(), bn.g2().g())?;
    println!("e(g1, g2) != 1: {}", e != bn.fq12().one());
    println!("e(g1, g2).c0.c0.c0 = {:x}", e.c0.c0.c0);

    Ok(())
}
