//! Constants for the BN128 (alt_bn128) pairing-friendly curve
//!
//! E(Fq):  y^2 = x^3 + 3
//! E'(Fq2): y^2 = x^3 + 3/(9+u), a D-type sextic twist
//!
//! The tower is Fq2 = Fq[u]/(u^2 + 1), Fq6 = Fq2[v]/(v^3 - (9+u)),
//! Fq12 = Fq6[w]/(w^2 - v).

/// Base field modulus q
pub const BN128_Q: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

/// Prime order r of G1, G2 and GT
pub const BN128_R: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// BN parameter z; q and r are polynomials in z
pub const BN128_Z: &str = "4965661367192848881";

/// Ate pairing loop count 6z + 2
pub const BN128_ATE_LOOP_COUNT: &str = "29793968203157093288";

/// Curve constant b of E(Fq)
pub const BN128_B: &str = "3";

/// Non-residue defining Fq2 (u^2 = -1)
pub const BN128_FQ2_NON_RESIDUE: &str = "-1";

/// Non-residue xi = 9 + u defining Fq6, as (c0, c1)
pub const BN128_FQ6_NON_RESIDUE: [&str; 2] = ["9", "1"];

/// Generator of G1 as (x, y)
pub const BN128_G1_GENERATOR: [&str; 2] = ["1", "2"];

/// Generator of G2 as ((x.c0, x.c1), (y.c0, y.c1))
pub const BN128_G2_GENERATOR: [[&str; 2]; 2] = [
    [
        "10857046999023057135944570762232829481370756359578518086990519993285655852781",
        "11559732032986387107991004021392285783925812861821192530917403151452391805634",
    ],
    [
        "8495653923123431417604973247489272438418190587263600148770280649306958101930",
        "4082367875863433681332203403145435568316851327593401208105741076214120093531",
    ],
];

/// Parameters from which a curve context is built.
///
/// All integers are signed decimal strings. [`Bn128Params::default`] returns
/// the standard BN128 parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn128Params {
    /// Base field modulus
    pub q: &'static str,
    /// Subgroup order
    pub r: &'static str,
    /// BN parameter z
    pub z: &'static str,
    /// Curve constant b
    pub b: &'static str,
    /// Fq2 non-residue
    pub fq2_non_residue: &'static str,
    /// Fq6 non-residue xi
    pub fq6_non_residue: [&'static str; 2],
    /// G1 generator
    pub g1: [&'static str; 2],
    /// G2 generator
    pub g2: [[&'static str; 2]; 2],
}

impl Bn128Params {
    /// The standard BN128 parameter set.
    pub const fn bn128() -> Self {
        Bn128Params {
            q: BN128_Q,
            r: BN128_R,
            z: BN128_Z,
            b: BN128_B,
            fq2_non_residue: BN128_FQ2_NON_RESIDUE,
            fq6_non_residue: BN128_FQ6_NON_RESIDUE,
            g1: BN128_G1_GENERATOR,
            g2: BN128_G2_GENERATOR,
        }
    }
}

impl Default for Bn128Params {
    fn default() -> Self {
        Self::bn128()
    }
}
