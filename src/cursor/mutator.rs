//! A cursor that advances by mutating its value in place.

use std::fmt;

use super::{Callable, ForwardCursor, PeekCursor};
use crate::capability::ForwardTier;

/// A forward cursor whose position is a value that a callable mutates in place.
///
/// Unlike [`GeneratorCursor`](super::GeneratorCursor), there is no separate
/// cache: the value is the position, and [`advance`](ForwardCursor::advance)
/// hands it to the callable by mutable reference. The initial value is given
/// by the caller, so payloads without a `Default` are fine.
///
/// # Examples
///
/// ```rust
/// use stepwise::cursor::{ForwardCursor, MutatorCursor};
///
/// let mut doubling = MutatorCursor::new(|value: &mut u64| *value *= 2, 1);
/// doubling.advance();
/// doubling.advance();
/// assert_eq!(doubling.read(), 4);
/// ```
#[derive(Clone)]
pub struct MutatorCursor<F, V> {
    value: V,
    mutator: Callable<F>,
}

impl<F, V> MutatorCursor<F, V>
where
    F: FnMut(&mut V),
{
    /// Creates a cursor positioned at `initial`.
    #[inline]
    pub const fn new(mutator: F, initial: V) -> Self {
        Self {
            value: initial,
            mutator: Callable::new(mutator),
        }
    }

    /// Creates a cursor whose initial value is built from `arguments`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::cursor::{ForwardCursor, MutatorCursor};
    ///
    /// let mut cursor = MutatorCursor::from_args(|text: &mut String| text.push('!'), "hey");
    /// cursor.advance();
    /// assert_eq!(cursor.read(), "hey!");
    /// ```
    #[inline]
    pub fn from_args<A>(mutator: F, arguments: A) -> Self
    where
        V: From<A>,
    {
        Self::new(mutator, V::from(arguments))
    }
}

impl<F, V> MutatorCursor<F, V> {
    /// Returns a reference to the current value.
    #[inline]
    pub const fn get(&self) -> &V {
        &self.value
    }

    /// Consumes the cursor and returns the current value.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }
}

/// Creates a [`MutatorCursor`] starting at `initial`.
#[inline]
pub const fn mutator<F, V>(mutator: F, initial: V) -> MutatorCursor<F, V>
where
    F: FnMut(&mut V),
{
    MutatorCursor::new(mutator, initial)
}

impl<F, V: PartialEq> PartialEq for MutatorCursor<F, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F, V: Eq> Eq for MutatorCursor<F, V> {}

impl<F, V: fmt::Debug> fmt::Debug for MutatorCursor<F, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MutatorCursor")
            .field("value", &self.value)
            .field("mutator", &self.mutator)
            .finish()
    }
}

impl<F, V> ForwardCursor for MutatorCursor<F, V>
where
    F: FnMut(&mut V),
    V: PartialEq + Clone,
{
    type Item = V;
    type Tier = ForwardTier;

    #[inline]
    fn read(&self) -> V {
        self.value.clone()
    }

    #[inline]
    fn advance(&mut self) {
        self.mutator.mutate(&mut self.value);
    }

    #[inline]
    fn into_item(self) -> V {
        self.value
    }
}

impl<F, V> PeekCursor for MutatorCursor<F, V>
where
    F: FnMut(&mut V),
    V: PartialEq + Clone,
{
    type Target = V;

    #[inline]
    fn peek(&mut self) -> &V {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Fibonacci {
        current: u64,
        next: u64,
    }

    impl From<(u64, u64)> for Fibonacci {
        fn from((current, next): (u64, u64)) -> Self {
            Self { current, next }
        }
    }

    fn step_fibonacci(state: &mut Fibonacci) {
        let sum = state.current + state.next;
        state.current = state.next;
        state.next = sum;
    }

    #[rstest]
    fn reads_follow_in_place_mutation() {
        let mut cursor = MutatorCursor::new(|value: &mut i32| *value += 1, 1);
        for expected in 1..=10 {
            assert_eq!(cursor.read(), expected);
            assert_eq!(cursor.read(), expected);
            cursor.advance();
        }
    }

    #[rstest]
    fn payload_without_default_is_built_from_arguments() {
        let mut cursor = MutatorCursor::from_args(step_fibonacci, (0_u64, 1_u64));
        let mut values = Vec::new();
        for _ in 0..8 {
            values.push(cursor.peek().current);
            cursor.advance();
        }
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[rstest]
    fn equality_compares_the_value() {
        let first = MutatorCursor::new(
            step_fibonacci as fn(&mut Fibonacci),
            Fibonacci {
                current: 0,
                next: 1,
            },
        );
        let second = first.clone().advanced();
        assert!(first != second);
        assert!(first.advanced() == second);
    }
}
