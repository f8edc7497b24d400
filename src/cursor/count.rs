//! A cursor that pairs another cursor with a step counter.
//!
//! Comparing two counting cursors compares their counters and nothing else.
//! This turns any sequence, including an endless generator whose items never
//! repeat, into a bounded one: the end of the range is just another counting
//! cursor whose counter starts at the desired length.
//!
//! The end cursor of such a pair wraps the same starting position as the
//! begin cursor and remembers how far behind its counter that position lags.
//! It catches up the first time it steps backward or jumps, so walking a
//! bidirectional range from the back yields its tail.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::count_pair;
//! use stepwise::cursor::GeneratorCursor;
//! use stepwise::range::Range;
//!
//! let squares = GeneratorCursor::new({
//!     let mut n = 0;
//!     move || {
//!         n += 1;
//!         n * n
//!     }
//! });
//!
//! let (begin, end) = count_pair!(squares, 10);
//! assert_eq!(Range::new(begin, end).accumulate(0), 385);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{
    BidirectionalCursor, ForwardCursor, PeekCursor, RandomAccessCursor, impl_jump_operators,
};
use crate::capability::SignedDistance;

/// A cursor whose logical position is an `isize` counter.
///
/// Stepping moves the wrapped cursor and the counter in lockstep. Equality,
/// ordering, and distances come from the counter alone, so the wrapped cursor
/// never has to be comparable in any meaningful way.
///
/// The tier mirrors the wrapped cursor. With a random-access inner cursor,
/// jumps shift both the counter and the inner cursor by the same amount, and
/// the distance type is `isize`. Counters wrap on overflow.
#[derive(Debug, Clone, Copy)]
pub struct CountCursor<C> {
    inner: C,
    count: isize,
    lag: usize,
}

impl<C> CountCursor<C> {
    /// Wraps `inner` with its counter set to `offset`.
    #[inline]
    pub const fn new(inner: C, offset: isize) -> Self {
        Self {
            inner,
            count: offset,
            lag: 0,
        }
    }

    /// Wraps `inner` with its counter set to `length`, leaving `inner` where it
    /// is until it is needed.
    ///
    /// `inner` is treated as sitting `length` steps behind the counter. It is
    /// advanced that far the first time the cursor steps backward or jumps,
    /// never during a forward walk that stops at this cursor. Until then,
    /// reading the cursor reads the starting position. A negative `length`
    /// leaves nothing to catch up.
    #[inline]
    pub const fn ending(inner: C, length: isize) -> Self {
        Self {
            inner,
            count: length,
            lag: if length > 0 { length.unsigned_abs() } else { 0 },
        }
    }

    /// Wraps `inner` with its counter set to zero.
    #[inline]
    pub const fn starting(inner: C) -> Self {
        Self::new(inner, 0)
    }

    /// Returns the current counter value.
    #[inline]
    pub const fn count(&self) -> isize {
        self.count
    }

    /// Returns a reference to the wrapped cursor.
    #[inline]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the cursor and returns the wrapped cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Consumes the cursor and returns the wrapped cursor and the counter.
    #[inline]
    pub fn into_parts(self) -> (C, isize) {
        (self.inner, self.count)
    }
}

impl<C: ForwardCursor> CountCursor<C> {
    /// Advances the wrapped cursor to the position its counter stands for.
    #[inline]
    fn catch_up(&mut self) {
        let lag = std::mem::take(&mut self.lag);
        if lag > 0 {
            self.inner.advance_by(lag);
        }
    }
}

/// Creates a [`CountCursor`] over `inner` starting at `offset`.
#[inline]
pub const fn counted<C>(inner: C, offset: isize) -> CountCursor<C> {
    CountCursor::new(inner, offset)
}

/// Expands to a `(begin, end)` pair of [`CountCursor`]s spanning `length` steps.
///
/// The begin cursor wraps a clone of `cursor` with counter zero. The end
/// cursor is [`CountCursor::ending`] over `cursor` itself: a forward walk only
/// compares it, and stepping it backward first moves its wrapped cursor to
/// the true end.
///
/// # Examples
///
/// ```rust
/// use stepwise::count_pair;
/// use stepwise::cursor::{ForwardCursor, ValueCursor};
///
/// let (begin, end) = count_pair!(ValueCursor::new(100_u8), 3);
/// assert_eq!(begin.count(), 0);
/// assert_eq!(end.count(), 3);
/// assert!(begin.advanced().advanced().advanced() == end);
///
/// let tail: Vec<u8> = stepwise::range::Range::new(begin, end).into_iter().rev().collect();
/// assert_eq!(tail, [102, 101, 100]);
/// ```
#[macro_export]
macro_rules! count_pair {
    ($cursor:expr, $length:expr $(,)?) => {{
        let cursor = $cursor;
        (
            $crate::cursor::CountCursor::new(::std::clone::Clone::clone(&cursor), 0),
            $crate::cursor::CountCursor::ending(cursor, $length),
        )
    }};
}

impl<C> PartialEq for CountCursor<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<C> Eq for CountCursor<C> {}

impl<C> Hash for CountCursor<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<C: ForwardCursor> ForwardCursor for CountCursor<C> {
    type Item = C::Item;
    type Tier = C::Tier;

    #[inline]
    fn read(&self) -> C::Item {
        self.inner.read()
    }

    #[inline]
    fn advance(&mut self) {
        self.count = self.count.wrapping_add(1);
        self.inner.advance();
    }

    #[inline]
    fn advance_by(&mut self, steps: usize) {
        self.count = self.count.wrapping_add_unsigned(steps);
        self.inner.advance_by(steps);
    }

    #[inline]
    fn into_item(self) -> C::Item {
        self.inner.into_item()
    }

    #[inline]
    fn steps_until(&self, end: &Self) -> Option<usize> {
        end.count
            .checked_sub(self.count)
            .and_then(|steps| usize::try_from(steps).ok())
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for CountCursor<C> {
    #[inline]
    fn retreat(&mut self) {
        self.catch_up();
        self.count = self.count.wrapping_sub(1);
        self.inner.retreat();
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for CountCursor<C> {
    type Distance = isize;

    #[inline]
    fn jump(&mut self, delta: isize) {
        self.catch_up();
        self.count = self.count.wrapping_add(delta);
        self.inner.jump(C::Distance::from_isize(delta));
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        self.count.wrapping_sub(origin.count)
    }
}

impl<C: RandomAccessCursor> PartialOrd for CountCursor<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: RandomAccessCursor> Ord for CountCursor<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

impl<C: PeekCursor> PeekCursor for CountCursor<C> {
    type Target = C::Target;

    #[inline]
    fn peek(&mut self) -> &C::Target {
        self.inner.peek()
    }
}

impl_jump_operators!([C] CountCursor<C>, isize, where C: RandomAccessCursor);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Tier;
    use crate::cursor::{GeneratorCursor, MutatorCursor, ValueCursor, cursor_tier};
    use rstest::rstest;

    #[rstest]
    fn equality_ignores_the_inner_cursor() {
        let left = CountCursor::new(ValueCursor::new(1_000), 4);
        let right = CountCursor::new(ValueCursor::new(-7), 4);
        assert_eq!(left, right);
        assert_ne!(left, CountCursor::new(ValueCursor::new(1_000), 5));
    }

    #[rstest]
    fn advance_moves_counter_and_inner_together() {
        let mut cursor = CountCursor::starting(MutatorCursor::new(|value: &mut i32| *value += 1, 1));
        for expected in 1..=10 {
            assert_eq!(cursor.read(), expected);
            cursor.advance();
        }
        assert_eq!(cursor.count(), 10);
        assert_eq!(*cursor.inner().get(), 11);
    }

    #[rstest]
    fn retreat_moves_back_in_lockstep() {
        let cursor = CountCursor::new(ValueCursor::new(10_i64), 3).retreated().retreated();
        assert_eq!(cursor.count(), 1);
        assert_eq!(cursor.read(), 8);
    }

    #[rstest]
    #[case(5)]
    #[case(-3)]
    #[case(0)]
    fn jump_shifts_both_sides(#[case] delta: isize) {
        let origin = CountCursor::new(ValueCursor::new(100_u16), 0);
        let moved = origin + delta;
        assert_eq!(moved.count(), delta);
        assert_eq!(i64::from(moved.read()), 100 + delta as i64);
        assert_eq!(&moved - &origin, delta);
        assert_eq!(origin.at(delta), moved.read());
    }

    #[rstest]
    fn ordering_comes_from_the_counter() {
        let low = CountCursor::new(ValueCursor::new(500_i32), 1);
        let high = CountCursor::new(ValueCursor::new(-500_i32), 2);
        assert!(low < high);
    }

    #[rstest]
    fn tier_mirrors_the_inner_cursor() {
        assert_eq!(cursor_tier::<CountCursor<ValueCursor<i8>>>(), Tier::RandomAccess);
        assert_eq!(cursor_tier::<CountCursor<ValueCursor<f64>>>(), Tier::Bidirectional);
        assert_eq!(
            cursor_tier::<CountCursor<GeneratorCursor<fn() -> u8, u8>>>(),
            Tier::Forward
        );
    }

    #[rstest]
    fn steps_until_uses_counters() {
        let (begin, end) = count_pair!(GeneratorCursor::new(|| 'x'), 6);
        assert_eq!(begin.steps_until(&end), Some(6));
        assert_eq!(end.steps_until(&begin), None);
    }

    #[rstest]
    fn counters_at_the_extremes_do_not_overflow() {
        let low = CountCursor::new(ValueCursor::new(0_i32), isize::MIN);
        let high = CountCursor::new(ValueCursor::new(0_i32), isize::MAX);
        assert_eq!(low.steps_until(&high), None);
        assert_eq!(high.steps_until(&low), None);
        assert_eq!(high.advanced().count(), isize::MIN);
        assert_eq!(low.retreated().count(), isize::MAX);
        assert_eq!((low + -1).count(), isize::MAX);
    }

    #[rstest]
    fn ending_cursor_catches_up_before_stepping_back() {
        let (begin, end) = count_pair!(ValueCursor::new(100_u8), 3);
        assert_eq!(end.inner().read(), 100);
        let last = end.retreated();
        assert_eq!(last.count(), 2);
        assert_eq!(last.read(), 102);
        assert!(begin.advanced().advanced() == last);
    }

    #[rstest]
    fn ending_cursor_catches_up_before_jumping() {
        let (_, end) = count_pair!(ValueCursor::new(-10_i64), 10);
        let moved = end - 4;
        assert_eq!((moved.count(), moved.read()), (6, -4));
        assert_eq!(end.at(-1), -1);
    }

    #[rstest]
    fn ending_cursor_over_a_float_steps_to_the_tail() {
        let (_, end) = count_pair!(ValueCursor::new(0.5_f64), 4);
        let last = end.retreated();
        assert!((last.read() - 3.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn forward_walk_never_moves_the_ending_cursor() {
        let calls = std::cell::Cell::new(0_u32);
        let (mut begin, end) = count_pair!(
            GeneratorCursor::new(|| {
                calls.set(calls.get() + 1);
                calls.get()
            }),
            5
        );
        while begin != end {
            begin.advance();
        }
        assert_eq!(end.inner().read(), begin.inner().read() - 5);
        assert_eq!(calls.get(), 6);
    }
}
