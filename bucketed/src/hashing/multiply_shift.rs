//! Implementation of the multiply-shift hashing scheme (multiply-add-shift to be precise)
//! from [Dietzfelbinger (1996)], [Dietzfelbinger et al. (1997)] and [Thorup (2015)].
//!
//! Multiply-shift avoids expensive arithmetic like modulo and division and instead exploits
//! integer overflow. The functions here return the whole 64-bit accumulator instead of its top
//! bits, callers are expected to finish with [`fold_multiply`] before reducing the value to a
//! bucket index.
//!
//! [`fold_multiply`]: crate::hashing::common::fold_multiply
//! [Dietzfelbinger (1996)]: https://doi.org/10.1007/3-540-60922-9_46
//! [Dietzfelbinger et al. (1997)]: https://doi.org/10.1006/jagm.1997.0873
//! [Thorup (2015)]: https://doi.org/10.48550/arXiv.1504.06804

/// Hashes a 64-bit unsigned integer using the pair-multiply-shift hashing scheme.
///
/// # Parameters
///
/// - `value`: The input value.
/// - `seed`: Random seed.
#[inline]
pub const fn pair_multiply_shift(value: u64, seed: &[u64; 3]) -> u64 {
    seed[0]
        .wrapping_add(value)
        .wrapping_mul(seed[1].wrapping_add(value >> 32))
        .wrapping_add(seed[2])
}

/// Hashes a 128-bit unsigned integer using the pair-multiply-shift hashing scheme.
///
/// # Parameters
///
/// - `value`: The input value.
/// - `seed`: Random seed.
#[inline]
pub const fn pair_multiply_shift_u128(value: u128, seed: &[u64; 5]) -> u64 {
    // Interpreting the 128-bit value as four 32-bit values
    let first = value as u64;
    let second = (value >> 32) as u64;
    let third = (value >> 64) as u64;
    let fourth = (value >> 96) as u64;

    seed[0]
        .wrapping_add(first)
        .wrapping_mul(seed[1].wrapping_add(second))
        .wrapping_add(
            seed[2]
                .wrapping_add(third)
                .wrapping_mul(seed[3].wrapping_add(fourth))
                .wrapping_add(seed[4]),
        )
}
