//! A cursor that steps the value it holds.
//!
//! `ValueCursor<T>` behaves as if it pointed into an imaginary container of
//! `T` values: stepping it replaces the stored value with its successor or
//! predecessor. The operations it exposes follow the capabilities of `T`
//! (see [`crate::capability`]).
//!
//! # Examples
//!
//! ```rust
//! use stepwise::cursor::{BidirectionalCursor, ForwardCursor, ValueCursor};
//!
//! let mut cursor = ValueCursor::new(0_i32);
//! for _ in 0..1024 {
//!     cursor.advance();
//! }
//! for _ in 0..2048 {
//!     cursor.retreat();
//! }
//! assert_eq!(cursor.read(), -1024);
//! ```

use std::cmp::Ordering;

use super::{
    BidirectionalCursor, ForwardCursor, PeekCursor, RandomAccessCursor, impl_jump_operators,
};
use crate::capability::{Offset, RandomAccessTier, Reversible, Step, StepBack};

/// A cursor whose position is a stored value of type `T`.
///
/// - forward if `T: Step`
/// - bidirectional if `T: StepBack` and `T` resolves to a reversible tier
/// - random-access if `T: Offset` and `T` resolves to the random-access tier
///
/// Reading clones the stored value; [`get`](Self::get) and
/// [`get_mut`](Self::get_mut) borrow it instead, and
/// [`into_inner`](Self::into_inner) moves it out. Copying and moving the
/// cursor copies and moves `T`, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueCursor<T> {
    value: T,
}

impl<T> ValueCursor<T> {
    /// Creates a cursor positioned at `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the cursor and returns the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for ValueCursor<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Creates a [`ValueCursor`] positioned at `value`.
///
/// # Examples
///
/// ```rust
/// use stepwise::cursor::{ForwardCursor, value};
///
/// let cursor = value(b'a').advanced();
/// assert_eq!(cursor.read(), b'b');
/// ```
#[inline]
pub const fn value<T>(value: T) -> ValueCursor<T> {
    ValueCursor::new(value)
}

impl<T: Step + Clone> ForwardCursor for ValueCursor<T> {
    type Item = T;
    type Tier = T::Tier;

    #[inline]
    fn read(&self) -> T {
        self.value.clone()
    }

    #[inline]
    fn advance(&mut self) {
        self.value.step_forward();
    }

    #[inline]
    fn advance_by(&mut self, steps: usize) {
        self.value.step_forward_by(steps);
    }

    #[inline]
    fn into_item(self) -> T {
        self.value
    }

    #[inline]
    fn steps_until(&self, end: &Self) -> Option<usize> {
        self.value.steps_until(&end.value)
    }
}

impl<T> BidirectionalCursor for ValueCursor<T>
where
    T: StepBack + Clone,
    T::Tier: Reversible,
{
    #[inline]
    fn retreat(&mut self) {
        self.value.step_backward();
    }
}

impl<T> RandomAccessCursor for ValueCursor<T>
where
    T: Offset<Tier = RandomAccessTier> + Clone,
{
    type Distance = T::Distance;

    #[inline]
    fn jump(&mut self, delta: T::Distance) {
        self.value.offset_by(delta);
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> T::Distance {
        self.value.difference(&origin.value)
    }
}

impl<T> PartialOrd for ValueCursor<T>
where
    T: Offset<Tier = RandomAccessTier> + Clone,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Step + Clone> PeekCursor for ValueCursor<T> {
    type Target = T;

    #[inline]
    fn peek(&mut self) -> &T {
        &self.value
    }
}

impl_jump_operators!([T] ValueCursor<T>, T::Distance, where T: Offset<Tier = RandomAccessTier> + Clone);
