/// Performs a modulo operation by a Mersenne prime.
///
/// Faster equivalent of the operation: `x % p`, where `p == 2 ** P_E - 1`, for any
/// `x < 2 ** (2 * P_E + 1)`.
#[inline]
pub const fn mod_mersenne_prime<const P_E: u32, const P: u128>(x: u128) -> u128 {
    debug_assert!(
        P == (2_u128.pow(P_E) - 1),
        r#""p" must be a Mersenne prime, so "p == 2 ** s - 1" constraint should stand."#
    );
    // Two folding rounds bring any such value into [0, p + 3].
    let folded = (x & P) + (x >> P_E);
    let result = (folded & P) + (folded >> P_E);
    if result >= P {
        result - P
    } else {
        result
    }
}
