//! Sequence cursors and the adapters built from them.
//!
//! A cursor is a small, movable value that denotes a position in a conceptual
//! sequence. Cursors form a hierarchy of traits, one per capability tier:
//!
//! - [`ForwardCursor`]: read, compare for equality, step forward
//! - [`BidirectionalCursor`]: also step backward
//! - [`RandomAccessCursor`]: also jump, index, measure distances, and order
//!
//! Every adapter implements the strongest trait its inner capability allows.
//! An operation that a tier lacks is not a runtime failure: the method simply
//! does not exist for that cursor.
//!
//! ## Adapters
//!
//! - [`ValueCursor`]: steps a wrapped value
//! - [`GeneratorCursor`]: caches successive results of a nullary callable
//! - [`MutatorCursor`]: mutates a value in place with a unary callable
//! - [`CountCursor`]: pairs a cursor with a counter that alone decides equality
//! - [`MapCursor`]: applies a transform to another cursor's items
//!
//! [`Callable`] is the slot the callable-holding adapters keep their function in.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::cursor::{ForwardCursor, RandomAccessCursor, ValueCursor};
//!
//! let mut cursor = ValueCursor::new(5_i32);
//! cursor.advance();
//! assert_eq!(cursor.read(), 6);
//!
//! let ahead = cursor + 10;
//! assert_eq!(ahead.read(), 16);
//! assert_eq!(&ahead - &cursor, 10);
//! assert_eq!(cursor.at(-6), 0);
//! ```
//!
//! A generator cannot step backward, so the operation is missing:
//!
//! ```rust,compile_fail
//! use stepwise::cursor::{BidirectionalCursor, GeneratorCursor};
//!
//! let mut counter = 0;
//! let mut cursor = GeneratorCursor::new(move || {
//!     counter += 1;
//!     counter
//! });
//! cursor.retreat();
//! ```

mod callable;
mod count;
mod generator;
mod map;
mod mutator;
mod value;

pub use callable::Callable;
pub use count::{CountCursor, counted};
pub use generator::{GeneratorCursor, generator};
pub use map::{MapCursor, mapped};
pub use mutator::{MutatorCursor, mutator};
pub use value::{ValueCursor, value};

use crate::capability::{RandomAccessTier, Reversible, SignedDistance, Tier, TierMarker};

/// A cursor that can be read, compared, and stepped forward.
///
/// Equality compares logical positions: two cursors are equal when stepping
/// one of them would walk the same positions as the other. What counts as the
/// position is up to the adapter (the stored value, a cached result, a counter).
pub trait ForwardCursor: PartialEq {
    /// The type of item the cursor yields.
    type Item;

    /// The capability tier of this cursor.
    type Tier: TierMarker;

    /// Returns the item at the current position.
    fn read(&self) -> Self::Item;

    /// Moves to the next position.
    fn advance(&mut self);

    /// Moves `steps` positions forward.
    ///
    /// Adapters over values that know their own arithmetic skip ahead without
    /// stepping one position at a time.
    #[inline]
    fn advance_by(&mut self, steps: usize) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// Consumes the cursor and returns the item at its position.
    ///
    /// Adapters that own their item move it out instead of copying it.
    #[inline]
    fn into_item(self) -> Self::Item
    where
        Self: Sized,
    {
        self.read()
    }

    /// Returns the number of forward steps from `self` to `end`, if the cursor
    /// can tell without walking.
    #[inline]
    fn steps_until(&self, end: &Self) -> Option<usize> {
        let _ = end;
        None
    }

    /// Moves to the next position and returns the cursor.
    #[inline]
    #[must_use]
    fn advanced(mut self) -> Self
    where
        Self: Sized,
    {
        self.advance();
        self
    }
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor<Tier: Reversible> {
    /// Moves to the previous position.
    fn retreat(&mut self);

    /// Moves to the previous position and returns the cursor.
    #[inline]
    #[must_use]
    fn retreated(mut self) -> Self
    where
        Self: Sized,
    {
        self.retreat();
        self
    }
}

/// A cursor with constant-time jumps, indexing, distances, and ordering.
///
/// # Laws
///
/// For any cursor `a` and distances `i`, `j`:
///
/// - `(a + i).distance_from(&(a + j)) == i - j`
/// - `a + i < a + (i + 1)`
/// - `a.at(i) == (a + i).read()`
pub trait RandomAccessCursor:
    BidirectionalCursor + ForwardCursor<Tier = RandomAccessTier> + PartialOrd
{
    /// The signed type measuring distances between positions.
    type Distance: SignedDistance;

    /// Moves by `delta` positions (backward when negative).
    fn jump(&mut self, delta: Self::Distance);

    /// Returns the number of positions from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> Self::Distance;

    /// Moves by `delta` positions and returns the cursor.
    #[inline]
    #[must_use]
    fn jumped(mut self, delta: Self::Distance) -> Self
    where
        Self: Sized,
    {
        self.jump(delta);
        self
    }

    /// Returns the item `delta` positions away without moving the cursor.
    #[inline]
    fn at(&self, delta: Self::Distance) -> Self::Item
    where
        Self: Clone,
    {
        self.clone().jumped(delta).into_item()
    }
}

/// A cursor offering pointer-style access to its current item.
///
/// The returned reference borrows the cursor mutably, so it cannot outlive the
/// next access or the cursor itself. Adapters whose item is computed keep it
/// in an internal slot that each call overwrites.
pub trait PeekCursor: ForwardCursor {
    /// The type the reference points to.
    type Target: ?Sized;

    /// Returns a reference to the current item.
    fn peek(&mut self) -> &Self::Target;
}

/// Returns the capability tier of the cursor type `C`.
///
/// # Examples
///
/// ```rust
/// use stepwise::capability::Tier;
/// use stepwise::cursor::{GeneratorCursor, ValueCursor, cursor_tier};
///
/// assert_eq!(cursor_tier::<ValueCursor<u8>>(), Tier::RandomAccess);
/// assert_eq!(cursor_tier::<ValueCursor<f32>>(), Tier::Bidirectional);
/// assert_eq!(cursor_tier::<GeneratorCursor<fn() -> i32, i32>>(), Tier::Forward);
/// ```
#[inline]
pub const fn cursor_tier<C: ForwardCursor>() -> Tier {
    <C::Tier as TierMarker>::TIER
}

/// Implements `+ d`, `- d`, `+= d`, `-= d`, and `&a - &b` for a random-access cursor.
macro_rules! impl_jump_operators {
    ([$($generics:tt)*] $cursor:ty, $distance:ty, where $($bounds:tt)*) => {
        impl<$($generics)*> ::std::ops::Add<$distance> for $cursor
        where
            $($bounds)*
        {
            type Output = Self;

            #[inline]
            fn add(self, delta: $distance) -> Self {
                $crate::cursor::RandomAccessCursor::jumped(self, delta)
            }
        }

        impl<$($generics)*> ::std::ops::Sub<$distance> for $cursor
        where
            $($bounds)*
        {
            type Output = Self;

            #[inline]
            fn sub(self, delta: $distance) -> Self {
                $crate::cursor::RandomAccessCursor::jumped(self, -delta)
            }
        }

        impl<$($generics)*> ::std::ops::AddAssign<$distance> for $cursor
        where
            $($bounds)*
        {
            #[inline]
            fn add_assign(&mut self, delta: $distance) {
                $crate::cursor::RandomAccessCursor::jump(self, delta);
            }
        }

        impl<$($generics)*> ::std::ops::SubAssign<$distance> for $cursor
        where
            $($bounds)*
        {
            #[inline]
            fn sub_assign(&mut self, delta: $distance) {
                $crate::cursor::RandomAccessCursor::jump(self, -delta);
            }
        }

        impl<'cursor, $($generics)*> ::std::ops::Sub<&'cursor $cursor> for &'cursor $cursor
        where
            $($bounds)*
        {
            type Output = $distance;

            #[inline]
            fn sub(self, origin: &'cursor $cursor) -> $distance {
                $crate::cursor::RandomAccessCursor::distance_from(self, origin)
            }
        }
    };
}

pub(crate) use impl_jump_operators;
