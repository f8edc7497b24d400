//! Ranges: pairs of begin and end cursors, and the algorithms run over them.
//!
//! A [`Range`] holds two cursors of the same type. Walking it reads the begin
//! cursor and steps it until it compares equal to the end cursor, which is
//! never read. Any cursor works, including endless generators bounded by a
//! [`CountCursor`] pair.
//!
//! - [`Range::iter`] and `IntoIterator` produce a [`Walk`], an ordinary
//!   iterator that is double-ended for bidirectional cursors and exact-size
//!   for random-access cursors.
//! - [`Range::map`] and [`map_range`] wrap both ends in [`MapCursor`]s.
//! - The algorithm methods (`accumulate`, `all_of`, `find_if`, ...) walk the
//!   range sequentially; their `*_with` variants accept an [`ExecutionPolicy`]
//!   and may run random-access ranges in parallel.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::range::value_range;
//!
//! let squares = value_range(1_u32, 11).map(|n: u32| n * n);
//! assert_eq!(squares.clone().accumulate(0_u32), 385);
//! assert_eq!(squares.iter().rev().next(), Some(100));
//! assert_eq!(squares.iter().len(), 10);
//! ```

mod algorithm;
mod error;
#[cfg(feature = "rayon")]
mod parallel;
mod policy;

pub use error::RangeError;
#[cfg(feature = "rayon")]
pub use parallel::ParallelWalk;
pub use policy::ExecutionPolicy;

use std::iter::FusedIterator;

use crate::capability::SignedDistance;
use crate::cursor::{
    BidirectionalCursor, CountCursor, ForwardCursor, MapCursor, RandomAccessCursor, ValueCursor,
};

/// A begin cursor and an end cursor of the same type.
///
/// The end cursor must be reachable from the begin cursor by stepping forward.
/// Nothing checks that in general; [`Range::checked`] does for random-access
/// cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range<C> {
    begin: C,
    end: C,
}

impl<C> Range<C> {
    /// Pairs `begin` and `end` into a range.
    #[inline]
    pub const fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Returns the begin cursor.
    #[inline]
    pub const fn begin(&self) -> &C {
        &self.begin
    }

    /// Returns the end cursor.
    #[inline]
    pub const fn end(&self) -> &C {
        &self.end
    }

    /// Consumes the range and returns its begin and end cursors.
    #[inline]
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C: ForwardCursor> Range<C> {
    /// Returns a range whose cursors apply `transform` to this range's items.
    ///
    /// Mapping twice is equivalent to mapping once with the composed function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::range::value_range;
    ///
    /// let labels: Vec<String> = value_range(b'a', b'd')
    ///     .map(char::from)
    ///     .map(|letter: char| letter.to_string())
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(labels, ["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn map<F, U>(self, transform: F) -> Range<MapCursor<C, F, U>>
    where
        F: Fn(C::Item) -> U + Clone,
    {
        Range::new(
            MapCursor::new(self.begin, transform.clone()),
            MapCursor::new(self.end, transform),
        )
    }

    /// Returns an iterator over a copy of the range.
    #[inline]
    pub fn iter(&self) -> Walk<C>
    where
        C: Clone,
    {
        Walk::new(self.begin.clone(), self.end.clone())
    }
}

impl<C: ForwardCursor + Clone> Range<CountCursor<C>> {
    /// Returns a range of `length` steps starting at `cursor`.
    ///
    /// This is how an endless cursor, such as a generator, is bounded.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::LengthOverflow`] when `length` exceeds `isize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::cursor::GeneratorCursor;
    /// use stepwise::range::Range;
    ///
    /// let ones = GeneratorCursor::new(|| 1_u64);
    /// let range = Range::counted(ones, 64)?;
    /// assert_eq!(range.accumulate(0_u64), 64);
    /// # Ok::<(), stepwise::range::RangeError>(())
    /// ```
    pub fn counted(cursor: C, length: usize) -> Result<Self, RangeError> {
        let count = isize::try_from(length).map_err(|_| RangeError::LengthOverflow { length })?;
        let (begin, end) = crate::count_pair!(cursor, count);
        Ok(Self::new(begin, end))
    }
}

impl<C: RandomAccessCursor> Range<C> {
    /// Pairs `begin` and `end`, rejecting an end that lies before the begin.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] when `end` orders before `begin`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::cursor::ValueCursor;
    /// use stepwise::range::{Range, RangeError};
    ///
    /// let wide = Range::checked(ValueCursor::new(0_u8), ValueCursor::new(200_u8))?;
    /// assert_eq!(wide.iter().len(), 200);
    /// assert!(Range::checked(ValueCursor::new(200_u8), ValueCursor::new(0_u8)).is_err());
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn checked(begin: C, end: C) -> Result<Self, RangeError> {
        if end < begin {
            let distance = end
                .steps_until(&begin)
                .and_then(|steps| isize::try_from(steps).ok())
                .map_or_else(|| end.distance_from(&begin).into_isize(), |steps| -steps);
            return Err(RangeError::Inverted { distance });
        }
        Ok(Self::new(begin, end))
    }

    /// Returns the distance from begin to end without walking the range.
    ///
    /// The distance type wraps, so a span longer than `C::Distance::MAX`
    /// comes out negative. [`Walk::len`](ExactSizeIterator::len) counts such
    /// ranges correctly.
    #[inline]
    pub fn span(&self) -> C::Distance {
        self.end.distance_from(&self.begin)
    }

    /// Returns the number of items the range yields.
    #[inline]
    pub(crate) fn step_count(&self) -> usize {
        steps_between(&self.begin, &self.end)
    }
}

/// Returns the range of values from `begin` up to, but excluding, `end`.
///
/// # Examples
///
/// ```rust
/// use stepwise::range::value_range;
///
/// let values: Vec<i16> = value_range(-2_i16, 3).into_iter().collect();
/// assert_eq!(values, [-2, -1, 0, 1, 2]);
/// ```
#[inline]
pub const fn value_range<T>(begin: T, end: T) -> Range<ValueCursor<T>> {
    Range::new(ValueCursor::new(begin), ValueCursor::new(end))
}

/// Applies `transform` to the items of `range`.
///
/// This is the free-function form of [`Range::map`].
#[inline]
pub fn map_range<C, F, U>(range: Range<C>, transform: F) -> Range<MapCursor<C, F, U>>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U + Clone,
{
    range.map(transform)
}

/// An iterator walking a range from both ends.
///
/// Items come from the front cursor, which steps forward until it meets the
/// back cursor. For bidirectional cursors the back cursor can also step
/// backward, yielding items from the end.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    front: C,
    back: C,
}

impl<C> Walk<C> {
    pub(crate) const fn new(front: C, back: C) -> Self {
        Self { front, back }
    }

    /// Returns the positions not yet walked as a range.
    #[inline]
    pub fn into_range(self) -> Range<C> {
        Range::new(self.front, self.back)
    }
}

impl<C: ForwardCursor> Iterator for Walk<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.read();
        self.front.advance();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.front.steps_until(&self.back) {
            Some(steps) => (steps, Some(steps)),
            None if self.front == self.back => (0, Some(0)),
            None => (0, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Walk<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.read())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Walk<C> {
    #[inline]
    fn len(&self) -> usize {
        steps_between(&self.front, &self.back)
    }
}

impl<C: ForwardCursor> FusedIterator for Walk<C> {}

impl<C: ForwardCursor> IntoIterator for Range<C> {
    type Item = C::Item;
    type IntoIter = Walk<C>;

    #[inline]
    fn into_iter(self) -> Walk<C> {
        Walk::new(self.begin, self.end)
    }
}

impl<C: ForwardCursor + Clone> IntoIterator for &Range<C> {
    type Item = C::Item;
    type IntoIter = Walk<C>;

    #[inline]
    fn into_iter(self) -> Walk<C> {
        self.iter()
    }
}

/// Counts the forward steps from `front` to `back` of a random-access walk.
///
/// Cursors that cannot count steps directly fall back on their signed
/// distance, where a negative distance counts as empty.
#[inline]
fn steps_between<C: RandomAccessCursor>(front: &C, back: &C) -> usize {
    front
        .steps_until(back)
        .unwrap_or_else(|| usize::try_from(back.distance_from(front).into_isize()).unwrap_or(0))
}

/// Converts a step count into the distance type of a random-access cursor.
///
/// Counts past `isize::MAX` saturate; ranges never span that many steps.
#[inline]
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
pub(crate) fn distance_of<D: SignedDistance>(steps: usize) -> D {
    D::from_isize(isize::try_from(steps).unwrap_or(isize::MAX))
}
