//! Capability resolution for wrapped types.
//!
//! This module decides, at compile time, which operations a cursor over a
//! given type may expose. The answer is a pair: a capability [`Tier`] and a
//! distance type.
//!
//! - [`Step`], [`StepBack`], [`Offset`]: the capabilities a wrapped type can have
//! - [`ForwardTier`], [`BidirectionalTier`], [`RandomAccessTier`]: tier markers
//! - [`Resolve`]: the registry tying a tier marker to the capabilities it needs
//! - [`SignedDistance`], [`Absent`]: distance types with and without values
//!
//! ## Resolution Protocol
//!
//! A type is random-access when it can offset itself, subtract two of its
//! values into a signed distance, and order its values. Failing that, it is
//! bidirectional when it can step backward. Otherwise it is forward-only, and
//! anything below random-access has the [`Absent`] distance type.
//!
//! The protocol is generic: any user type implementing [`Offset`] resolves to
//! random-access, not just built-in integers.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::capability::{Absent, DistanceOf, Tier, tier_of};
//!
//! assert_eq!(tier_of::<u32>(), Tier::RandomAccess);
//! assert_eq!(tier_of::<f64>(), Tier::Bidirectional);
//!
//! // The distance of u32 is normalised to the signed type of the same width.
//! let distance: DistanceOf<u32> = -1_i32;
//! assert_eq!(distance, -1);
//!
//! fn absent_for_floats(_: Option<DistanceOf<f64>>) {}
//! absent_for_floats(None::<Absent>);
//! ```

mod distance;
mod step;
mod tier;

pub use distance::{Absent, SignedDistance};
pub use step::{Offset, Step, StepBack};
pub use tier::{
    BidirectionalTier, ForwardTier, RandomAccessTier, Resolve, Reversible, Tier, TierMarker,
};

/// The resolved tier marker of a wrapped type.
pub type TierOf<T> = <T as Step>::Tier;

/// The resolved distance type of a wrapped type ([`Absent`] below random-access).
pub type DistanceOf<T> = <TierOf<T> as Resolve<T>>::Distance;

/// Returns the resolved capability tier of `T`.
///
/// # Examples
///
/// ```rust
/// use stepwise::capability::{Tier, tier_of};
///
/// assert_eq!(tier_of::<i64>(), Tier::RandomAccess);
/// assert_eq!(tier_of::<f32>(), Tier::Bidirectional);
/// ```
#[inline]
pub const fn tier_of<T: Step>() -> Tier {
    <TierOf<T> as TierMarker>::TIER
}

static_assertions::assert_type_eq_all!(DistanceOf<u8>, i8);
static_assertions::assert_type_eq_all!(DistanceOf<u16>, i16);
static_assertions::assert_type_eq_all!(DistanceOf<i32>, i32);
static_assertions::assert_type_eq_all!(DistanceOf<usize>, isize);
static_assertions::assert_type_eq_all!(DistanceOf<f64>, Absent);
