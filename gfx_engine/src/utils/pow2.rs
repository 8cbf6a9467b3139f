//! Power-of-two sizing helpers for GLES 2.0 textures and render targets.

/// Smallest power of two greater than or equal to `size`.
///
/// `0` maps to `1`; values above 2^31 saturate to 2^31.
pub fn next_pow2(size: u32) -> u32 {
    size.max(1)
        .checked_next_power_of_two()
        .unwrap_or(1 << 31)
}

/// Power of two closest to `size`.
///
/// Halfway values round up (6 → 8, 12 → 16). `0` maps to `1`; results
/// above 2^31 saturate to 2^31.
pub fn nearest_pow2(size: u32) -> u32 {
    if size <= 1 {
        return 1;
    }

    let high_bit = 31 - size.leading_zeros();
    let lower = 1u32 << high_bit;

    // The bit below the leading one decides: set means at least 1.5x lower
    if size & (lower >> 1) != 0 {
        lower.checked_mul(2).unwrap_or(lower)
    } else {
        lower
    }
}

#[cfg(test)]
#[path = "pow2_tests.rs"]
mod tests;
