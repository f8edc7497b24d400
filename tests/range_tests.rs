//! Integration tests for ranges and the algorithm façade.
//!
//! Tests cover:
//! - Iteration from both ends and exact lengths
//! - Sequential algorithms over every adapter kind
//! - Checked construction errors
//! - Execution policies agreeing with the sequential results

use rstest::rstest;
use stepwise::prelude::*;

fn fibonacci(length: usize) -> Result<Range<CountCursor<MutatorCursor<fn(&mut (u64, u64)), (u64, u64)>>>, RangeError> {
    fn step(state: &mut (u64, u64)) {
        *state = (state.1, state.0 + state.1);
    }
    Range::counted(MutatorCursor::new(step as fn(&mut (u64, u64)), (0, 1)), length)
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn value_range_iterates_both_ways() {
    let range = value_range(-3_i32, 3);
    assert_eq!(range.iter().collect::<Vec<_>>(), vec![-3, -2, -1, 0, 1, 2]);
    assert_eq!(range.iter().rev().collect::<Vec<_>>(), vec![2, 1, 0, -1, -2, -3]);
    assert_eq!(range.iter().len(), 6);
    assert_eq!(range.span(), 6);
}

#[rstest]
fn borrowed_range_iterates_a_copy() {
    let range = value_range(0_u8, 4);
    let mut total = 0_u32;
    for value in &range {
        total += u32::from(value);
    }
    assert_eq!(total, 6);
    assert_eq!(*range.begin().get(), 0);
}

#[rstest]
fn mutator_range_yields_fibonacci_pairs() -> Result<(), RangeError> {
    let firsts: Vec<u64> = fibonacci(10)?.map(|pair: (u64, u64)| pair.0).into_iter().collect();
    assert_eq!(firsts, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    Ok(())
}

// =============================================================================
// Algorithms
// =============================================================================

#[rstest]
fn accumulate_by_multiplies() {
    let factorial = value_range(1_u64, 11).accumulate_by(1_u64, |product, n| product * n);
    assert_eq!(factorial, 3_628_800);
}

#[rstest]
fn find_on_a_counted_generator_returns_the_position() -> Result<(), RangeError> {
    let found = fibonacci(20)?.map(|pair: (u64, u64)| pair.0).find(&144);
    assert_eq!(found.as_ref().map(|cursor| cursor.inner().count()), Some(12));
    Ok(())
}

#[rstest]
fn predicates_over_a_mapped_range() {
    let odd_squares = value_range(0_u32, 20).map(|n: u32| (2 * n + 1).pow(2));
    assert!(odd_squares.clone().all_of(|square| square % 2 == 1));
    assert!(odd_squares.clone().any_of(|square| square == 81));
    assert!(odd_squares.clone().none_of(|square| square % 4 == 3));
    assert_eq!(odd_squares.clone().count_if(|square| square > 100), 15);
    assert_eq!(odd_squares.clone().count(&1), 1);
    assert_eq!(odd_squares.distance(), 20);
}

#[rstest]
fn find_if_not_on_a_float_range() {
    let found = value_range(0.25_f64, 10.25).find_if_not(|x| x < 4.0);
    assert_eq!(found.map(|cursor| cursor.read()), Some(4.25));
}

#[rstest]
fn for_each_visits_in_order() {
    let mut visited = String::new();
    let _ = value_range(b'p', b'u').map(char::from).for_each(|letter| visited.push(letter));
    assert_eq!(visited, "pqrst");
}

// =============================================================================
// Checked Construction
// =============================================================================

#[rstest]
fn checked_range_rejects_inverted_ends() {
    let error = Range::checked(ValueCursor::new(30_u16), ValueCursor::new(10_u16));
    assert_eq!(error, Err(RangeError::Inverted { distance: -20 }));
    assert_eq!(
        RangeError::Inverted { distance: -20 }.to_string(),
        "Range end precedes its begin by 20 positions"
    );
}

#[rstest]
fn counted_range_rejects_oversized_length() {
    let length = usize::MAX / 2 + 1;
    assert_eq!(
        fibonacci(length).err(),
        Some(RangeError::LengthOverflow { length })
    );
}

// =============================================================================
// Execution Policies
// =============================================================================

#[rstest]
#[case::sequential(ExecutionPolicy::Sequential)]
#[case::parallel_default(ExecutionPolicy::parallel())]
#[case::parallel_small_pieces(ExecutionPolicy::Parallel { min_len: 3 })]
fn policies_agree_with_sequential_algorithms(#[case] policy: ExecutionPolicy) {
    let range = value_range(0_i64, 2_000).map(|n: i64| n * 3 - 1_000);

    assert_eq!(
        range.clone().accumulate_with(policy, 0_i64),
        range.clone().accumulate(0_i64)
    );
    assert_eq!(
        range.clone().count_if_with(policy, |n| n > 0),
        range.clone().count_if(|n| n > 0)
    );
    assert_eq!(
        range.clone().all_of_with(policy, |n| n < 5_000),
        range.clone().all_of(|n| n < 5_000)
    );
    assert_eq!(
        range.clone().any_of_with(policy, |n| n == 2),
        range.clone().any_of(|n| n == 2)
    );
    assert_eq!(
        range.clone().none_of_with(policy, |n| n == 0),
        range.clone().none_of(|n| n == 0)
    );

    let parallel_hit = range.clone().find_if_with(policy, |n| n > 100);
    let sequential_hit = range.clone().find_if(|n| n > 100);
    assert_eq!(
        parallel_hit.map(|cursor| cursor.read()),
        sequential_hit.map(|cursor| cursor.read())
    );
}

#[rstest]
fn for_each_with_visits_every_item() {
    use std::sync::atomic::{AtomicU64, Ordering};

    let total = AtomicU64::new(0);
    value_range(1_u64, 101).for_each_with(ExecutionPolicy::parallel(), |n| {
        total.fetch_add(n, Ordering::Relaxed);
    });
    assert_eq!(total.into_inner(), 5050);
}
