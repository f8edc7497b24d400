//! Capability traits for wrapped values.
//!
//! A [`ValueCursor`](crate::cursor::ValueCursor) walks an imaginary sequence
//! of values by stepping the value it holds. What the cursor can do depends on
//! which of these traits the value implements:
//!
//! - [`Step`]: step forward and compare for equality (every wrapped value)
//! - [`StepBack`]: also step backward
//! - [`Offset`]: also jump by a signed distance, measure distances, and order
//!
//! Every primitive integer is registered as random-access, with its distance
//! normalised to the signed integer of the same width. Floating-point values
//! step by `1.0` in both directions, but their difference is not an integer,
//! so they stop at the bidirectional tier.

use super::distance::SignedDistance;
use super::tier::{BidirectionalTier, RandomAccessTier, Resolve};

/// A value that can step forward to its successor.
///
/// `Tier` names the strongest tier the value supports. It is bounded by
/// [`Resolve<Self>`], so declaring a tier without implementing the matching
/// capability trait is a compile error.
///
/// # Examples
///
/// ```rust
/// use stepwise::capability::{ForwardTier, Step, Tier, tier_of};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Countdown(u32);
///
/// impl Step for Countdown {
///     type Tier = ForwardTier;
///
///     fn step_forward(&mut self) {
///         self.0 = self.0.saturating_sub(1);
///     }
/// }
///
/// assert_eq!(tier_of::<Countdown>(), Tier::Forward);
/// ```
///
/// The tier is declared, not deduced. Claiming a tier the value cannot back
/// is rejected:
///
/// ```rust,compile_fail
/// use stepwise::capability::{RandomAccessTier, Step};
///
/// #[derive(Clone, PartialEq)]
/// struct Countdown(u32);
///
/// impl Step for Countdown {
///     type Tier = RandomAccessTier; // Countdown does not implement Offset
///
///     fn step_forward(&mut self) {
///         self.0 -= 1;
///     }
/// }
/// ```
///
/// Claiming a weaker tier than the implemented traits allow is accepted. A
/// value implementing [`StepBack`] or [`Offset`] that declares
/// [`ForwardTier`](super::ForwardTier) yields forward-only cursors, and its
/// extra capabilities go unused:
///
/// ```rust
/// use stepwise::capability::{ForwardTier, Step, StepBack, Tier, tier_of};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Floor(i32);
///
/// impl Step for Floor {
///     type Tier = ForwardTier;
///
///     fn step_forward(&mut self) {
///         self.0 += 1;
///     }
/// }
///
/// impl StepBack for Floor {
///     fn step_backward(&mut self) {
///         self.0 -= 1;
///     }
/// }
///
/// assert_eq!(tier_of::<Floor>(), Tier::Forward);
/// ```
pub trait Step: PartialEq {
    /// The resolved capability tier of this type.
    type Tier: Resolve<Self>;

    /// Replaces the value with its successor.
    fn step_forward(&mut self);

    /// Steps forward `steps` times.
    #[inline]
    fn step_forward_by(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step_forward();
        }
    }

    /// Returns how many forward steps lead from `self` to `end`, if known
    /// without stepping.
    #[inline]
    fn steps_until(&self, end: &Self) -> Option<usize> {
        let _ = end;
        None
    }
}

/// A value that can also step backward to its predecessor.
pub trait StepBack: Step {
    /// Replaces the value with its predecessor.
    fn step_backward(&mut self);
}

/// A value that supports random access: offsetting, subtraction, and ordering.
///
/// Implementations must agree with stepping: `offset_by(ONE)` is equivalent
/// to `step_forward`, and `a.difference(&b)` is the number of forward steps
/// from `b` to `a`.
///
/// # Examples
///
/// ```rust
/// use stepwise::capability::Offset;
///
/// let mut position = 10_u32;
/// position.offset_by(-4);
/// assert_eq!(position, 6);
/// assert_eq!(position.difference(&10), -4_i32);
/// ```
pub trait Offset: StepBack + PartialOrd {
    /// The signed type measuring the distance between two values.
    type Distance: SignedDistance;

    /// Moves the value by `delta` steps (backward when `delta` is negative).
    fn offset_by(&mut self, delta: Self::Distance);

    /// Returns the number of steps from `origin` to `self`.
    fn difference(&self, origin: &Self) -> Self::Distance;
}

macro_rules! register_integer {
    ($($value:ty => $distance:ty, $unsigned:ty),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss,
                clippy::useless_conversion,
                trivial_numeric_casts
            )]
            impl Step for $value {
                type Tier = RandomAccessTier;

                #[inline]
                fn step_forward(&mut self) {
                    *self = self.wrapping_add(1);
                }

                #[inline]
                fn step_forward_by(&mut self, steps: usize) {
                    *self = self.wrapping_add(steps as $value);
                }

                #[inline]
                fn steps_until(&self, end: &Self) -> Option<usize> {
                    usize::try_from(end.wrapping_sub(*self) as $unsigned).ok()
                }
            }

            impl StepBack for $value {
                #[inline]
                fn step_backward(&mut self) {
                    *self = self.wrapping_sub(1);
                }
            }

            #[allow(
                clippy::cast_sign_loss,
                clippy::cast_possible_wrap,
                trivial_numeric_casts
            )]
            impl Offset for $value {
                type Distance = $distance;

                #[inline]
                fn offset_by(&mut self, delta: Self::Distance) {
                    *self = self.wrapping_add(delta as $value);
                }

                #[inline]
                fn difference(&self, origin: &Self) -> Self::Distance {
                    self.wrapping_sub(*origin) as $distance
                }
            }
        )*
    };
}

register_integer!(
    i8 => i8, u8,
    i16 => i16, u16,
    i32 => i32, u32,
    i64 => i64, u64,
    i128 => i128, u128,
    isize => isize, usize,
    u8 => i8, u8,
    u16 => i16, u16,
    u32 => i32, u32,
    u64 => i64, u64,
    u128 => i128, u128,
    usize => isize, usize,
);

macro_rules! register_float {
    ($($value:ty),* $(,)?) => {
        $(
            impl Step for $value {
                type Tier = BidirectionalTier;

                #[inline]
                fn step_forward(&mut self) {
                    *self += 1.0;
                }
            }

            impl StepBack for $value {
                #[inline]
                fn step_backward(&mut self) {
                    *self -= 1.0;
                }
            }
        )*
    };
}

register_float!(f32, f64);
