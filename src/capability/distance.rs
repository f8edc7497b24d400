//! Signed distance types for random-access cursors.
//!
//! A random-access cursor measures how far apart two positions are with a
//! signed integer. This module provides the [`SignedDistance`] trait, which
//! every such distance type implements, and [`Absent`], the distance type
//! reported by cursors that cannot measure distances at all.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

/// A signed integer type usable as the distance between two cursor positions.
///
/// Distances are converted to and from `isize` so that adapters with their own
/// counter (such as [`CountCursor`](crate::cursor::CountCursor)) can forward a
/// shift to the cursor they wrap. Conversions use two's-complement wrapping,
/// the same arithmetic used for stepping integers.
///
/// # Implementing `SignedDistance`
///
/// ```rust
/// use stepwise::capability::SignedDistance;
///
/// let delta = <i16 as SignedDistance>::from_isize(-3);
/// assert_eq!(delta, -3_i16);
/// assert_eq!(delta.into_isize(), -3);
/// assert_eq!(i16::ZERO, 0);
/// ```
pub trait SignedDistance:
    Copy
    + Ord
    + Hash
    + Debug
    + Send
    + Sync
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
{
    /// The distance between a position and itself.
    const ZERO: Self;

    /// The distance covered by a single step.
    const ONE: Self;

    /// Converts an `isize` into this distance type, wrapping on overflow.
    fn from_isize(value: isize) -> Self;

    /// Converts this distance into an `isize`, wrapping on overflow.
    fn into_isize(self) -> isize;
}

macro_rules! impl_signed_distance {
    ($($distance:ty),* $(,)?) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            impl SignedDistance for $distance {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_isize(value: isize) -> Self {
                    value as Self
                }

                #[inline]
                fn into_isize(self) -> isize {
                    self as isize
                }
            }
        )*
    };
}

impl_signed_distance!(i8, i16, i32, i64, i128, isize);

/// The distance type of cursors below the random-access tier.
///
/// `Absent` has no values: a forward or bidirectional cursor can never produce
/// a distance, and the type system makes that visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Absent {}
