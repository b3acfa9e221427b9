//! Polynomial hashing for arbitrary-size byte strings based on [Dietzfelbinger et al. (1992)]
//! and [Thorup (2015)].
//!
//! The input is treated as coefficients of a polynomial which is evaluated with Horner's rule in
//! the field of the Mersenne prime `2 ** 61 - 1`. The length is appended as the last
//! coefficient, so zero-padded tails don't collide with shorter inputs.
//!
//! [Dietzfelbinger et al. (1992)]: https://doi.org/10.1007/3-540-55719-9_77
//! [Thorup (2015)]: https://doi.org/10.48550/arXiv.1504.06804

use crate::utils::bit_hacks::mod_mersenne_prime;
use rand::Rng;

const P_E: u32 = 61;
const P: u128 = (1_u128 << P_E) - 1;

/// Seed value for the [`polynomial`] hashing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialSeed {
    /// Evaluation point, must be in `[1, p - 1]`.
    a: u64,
    /// Initial accumulator, must be in `[0, p - 1]`.
    b: u64,
}

impl PolynomialSeed {
    pub const fn new(a: u64, b: u64) -> Self {
        debug_assert!(
            a > 0 && (a as u128) < P,
            r#""a" must be in the range [1, 2 ** 61 - 2]"#
        );
        debug_assert!((b as u128) < P, r#""b" must be less than 2 ** 61 - 1"#);

        Self { a, b }
    }

    /// Draws a valid seed from `rng`.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self {
            a: rng.random_range(1..P as u64),
            b: rng.random_range(0..P as u64),
        }
    }
}

impl Default for PolynomialSeed {
    fn default() -> Self {
        Self { a: 1, b: 0 }
    }
}

/// Hashes a sequence of 32-bit limbs.
///
/// # Parameters
///
/// - `limbs`: The input split into 32-bit limbs, see [`limbs`] and [`limbs_ascii_lowercase`].
/// - `len`: Length of the original input in bytes.
/// - `seed`: Random seed.
///
/// # Guarantees
///
/// - Two different inputs of length up to `n` limbs collide with probability at most
///   `(n + 1) / (2 ** 61 - 1)`.
#[inline]
pub fn polynomial<I>(limbs: I, len: usize, seed: &PolynomialSeed) -> u64
where
    I: IntoIterator<Item = u32>,
{
    let a = seed.a as u128;
    let mut acc = seed.b as u128;

    for limb in limbs {
        acc = mod_mersenne_prime::<P_E, P>(acc * a + limb as u128);
    }

    mod_mersenne_prime::<P_E, P>(acc * a + len as u128) as u64
}

/// Splits `bytes` into little-endian 32-bit limbs, zero-padding the last one.
#[inline]
pub fn limbs(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    bytes.chunks(4).map(|chunk| {
        let mut padded = [0_u8; 4];
        padded[..chunk.len()].copy_from_slice(chunk);
        u32::from_le_bytes(padded)
    })
}

/// Same as [`limbs`] but lower-cases ASCII letters on the fly.
#[inline]
pub fn limbs_ascii_lowercase(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    bytes.chunks(4).map(|chunk| {
        let mut padded = [0_u8; 4];
        for (dst, src) in padded.iter_mut().zip(chunk) {
            *dst = src.to_ascii_lowercase();
        }
        u32::from_le_bytes(padded)
    })
}
