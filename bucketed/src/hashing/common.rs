/// Fold the 128-bit product of `value` and `multiplier` into 64 bits.
///
/// Multiply-shift families concentrate their entropy in the top bits of the product while bucket
/// selection reduces hashes by modulo, which only looks at the bottom ones. Folding the high half
/// onto the low half makes every output bit depend on every input bit.
///
/// `multiplier` must be odd, otherwise the lowest bits of the low half are lost.
#[inline]
pub const fn fold_multiply(value: u64, multiplier: u64) -> u64 {
    debug_assert!(multiplier & 1 == 1, r#""multiplier" must be odd"#);

    let full = (value as u128).wrapping_mul(multiplier as u128);
    (full as u64) ^ ((full >> 64) as u64)
}

/// Map a hash value onto a bucket of a table with `num_buckets` buckets.
///
/// Hash values are unsigned, so the result is always a valid index.
#[inline]
pub const fn bucket_index(hash: u64, num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);

    (hash % num_buckets as u64) as usize
}
