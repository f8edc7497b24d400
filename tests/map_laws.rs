//! Property-based tests for MapCursor and mapped ranges.
//!
//! This module verifies that mapping satisfies:
//!
//! - **Identity**: mapping the identity function leaves the items unchanged
//! - **Composition**: `map(f).map(g)` equals `map(g ∘ f)`
//! - **Position**: a mapped cursor compares, orders, and measures like its inner cursor

use proptest::prelude::*;
use stepwise::cursor::{ForwardCursor, MapCursor, RandomAccessCursor, ValueCursor};
use stepwise::range::{map_range, value_range};

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity: map(id) yields the original items
    #[test]
    fn prop_map_identity(start in -1_000_i32..1_000, length in 0_i32..64) {
        let range = value_range(start, start + length);
        let plain: Vec<i32> = range.iter().collect();
        let mapped: Vec<i32> = range.map(|n: i32| n).into_iter().collect();
        prop_assert_eq!(plain, mapped);
    }
}

proptest! {
    /// Composition: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(start in -1_000_i64..1_000, length in 0_i64..64, factor in -9_i64..9) {
        let f = move |n: i64| n * factor;
        let g = |n: i64| n - 7;
        let chained: Vec<i64> = value_range(start, start + length).map(f).map(g).into_iter().collect();
        let composed: Vec<i64> = value_range(start, start + length)
            .map(move |n: i64| g(f(n)))
            .into_iter()
            .collect();
        prop_assert_eq!(chained, composed);
    }
}

proptest! {
    /// The free function and the method produce the same range
    #[test]
    fn prop_map_range_matches_method(start in any::<u8>(), length in 0_u8..32) {
        let end = start.wrapping_add(length);
        let by_method: Vec<u16> = value_range(start, end).map(u16::from).into_iter().collect();
        let by_function: Vec<u16> = map_range(value_range(start, end), u16::from).into_iter().collect();
        prop_assert_eq!(by_method, by_function);
    }
}

// =============================================================================
// Position Laws
// =============================================================================

proptest! {
    /// Mapped cursors compare, order, and measure like their inner cursors
    #[test]
    fn prop_map_preserves_position(a in -10_000_i32..10_000, b in -10_000_i32..10_000) {
        let transform = |n: i32| n.rem_euclid(3);
        let left = MapCursor::new(ValueCursor::new(a), transform);
        let right = MapCursor::new(ValueCursor::new(b), transform);
        prop_assert_eq!(left == right, a == b);
        prop_assert_eq!(left.partial_cmp(&right), a.partial_cmp(&b));
        prop_assert_eq!(left.distance_from(&right), a - b);
    }
}

proptest! {
    /// Reading never depends on how many times the cursor was read before
    #[test]
    fn prop_map_read_is_repeatable(start in any::<i16>(), steps in 0_usize..50) {
        let mut cursor = MapCursor::new(ValueCursor::new(start), |n: i16| i32::from(n) * 2);
        for _ in 0..steps {
            cursor.advance();
        }
        prop_assert_eq!(cursor.read(), cursor.read());
    }
}

// =============================================================================
// Square Then Root
// =============================================================================

#[test]
fn square_then_root_restores_the_values() {
    let restored: Vec<f64> = value_range(1_u32, 11)
        .map(|n: u32| f64::from(n * n))
        .map(f64::sqrt)
        .into_iter()
        .collect();

    assert_eq!(restored.len(), 10);
    for (expected, actual) in (1_u32..=10).map(f64::from).zip(restored) {
        assert!((expected - actual).abs() < 1e-12);
    }
}
