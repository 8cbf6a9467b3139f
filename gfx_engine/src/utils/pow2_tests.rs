use super::*;

// ============================================================================
// next_pow2
// ============================================================================

#[test]
fn test_next_pow2_keeps_powers_of_two() {
    for shift in 0..32 {
        let size = 1u32 << shift;
        assert_eq!(next_pow2(size), size);
    }
}

#[test]
fn test_next_pow2_rounds_up() {
    assert_eq!(next_pow2(3), 4);
    assert_eq!(next_pow2(5), 8);
    assert_eq!(next_pow2(300), 512);
    assert_eq!(next_pow2(1025), 2048);
    assert_eq!(next_pow2(8092), 8192);
}

#[test]
fn test_next_pow2_edges() {
    assert_eq!(next_pow2(0), 1);
    assert_eq!(next_pow2(u32::MAX), 1 << 31);
}

// ============================================================================
// nearest_pow2
// ============================================================================

#[test]
fn test_nearest_pow2_small_values() {
    assert_eq!(nearest_pow2(0), 1);
    assert_eq!(nearest_pow2(1), 1);
    assert_eq!(nearest_pow2(2), 2);
    assert_eq!(nearest_pow2(3), 4);
    assert_eq!(nearest_pow2(4), 4);
    assert_eq!(nearest_pow2(5), 4);
    assert_eq!(nearest_pow2(6), 8);
    assert_eq!(nearest_pow2(7), 8);
}

#[test]
fn test_nearest_pow2_larger_values() {
    assert_eq!(nearest_pow2(10), 8);
    assert_eq!(nearest_pow2(12), 16);
    assert_eq!(nearest_pow2(700), 512);
    assert_eq!(nearest_pow2(800), 1024);
}

#[test]
fn test_nearest_pow2_saturates() {
    assert_eq!(nearest_pow2(u32::MAX), 1 << 31);
    assert_eq!(nearest_pow2(1 << 31), 1 << 31);
}
