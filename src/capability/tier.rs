//! Capability tiers and their type-level markers.
//!
//! Every cursor belongs to exactly one tier. The tier is known at compile
//! time through a marker type ([`ForwardTier`], [`BidirectionalTier`],
//! [`RandomAccessTier`]); [`Tier`] is its value-level counterpart, handy for
//! reporting and comparisons.

use std::fmt;

use super::distance::Absent;
use super::step::{Offset, Step, StepBack};

/// The operation set a cursor supports.
///
/// Tiers are ordered from weakest to strongest, so a composed cursor can be
/// checked against the cursor it wraps with ordinary comparisons.
///
/// # Examples
///
/// ```rust
/// use stepwise::capability::Tier;
///
/// assert!(Tier::Forward < Tier::Bidirectional);
/// assert!(Tier::Bidirectional < Tier::RandomAccess);
/// assert_eq!(Tier::RandomAccess.to_string(), "random-access");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Read, compare, and step forward.
    Forward,
    /// Forward, plus stepping backward.
    Bidirectional,
    /// Bidirectional, plus jumps, indexing, distances, and ordering.
    RandomAccess,
}

impl Tier {
    /// Returns `true` if this tier supports stepping backward.
    #[inline]
    pub const fn is_reversible(self) -> bool {
        matches!(self, Self::Bidirectional | Self::RandomAccess)
    }

    /// Returns `true` if this tier supports jumps and distances.
    #[inline]
    pub const fn is_random_access(self) -> bool {
        matches!(self, Self::RandomAccess)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Bidirectional => "bidirectional",
            Self::RandomAccess => "random-access",
        };
        formatter.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ForwardTier {}
    impl Sealed for super::BidirectionalTier {}
    impl Sealed for super::RandomAccessTier {}
}

/// A type-level capability tier.
///
/// This trait is sealed: the three markers in this module are the only tiers.
pub trait TierMarker: sealed::Sealed + 'static {
    /// The value-level tier this marker stands for.
    const TIER: Tier;
}

/// Marker for tiers that can step backward.
pub trait Reversible: TierMarker {}

/// Marker type for [`Tier::Forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ForwardTier;

/// Marker type for [`Tier::Bidirectional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BidirectionalTier;

/// Marker type for [`Tier::RandomAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandomAccessTier;

impl TierMarker for ForwardTier {
    const TIER: Tier = Tier::Forward;
}

impl TierMarker for BidirectionalTier {
    const TIER: Tier = Tier::Bidirectional;
}

impl TierMarker for RandomAccessTier {
    const TIER: Tier = Tier::RandomAccess;
}

impl Reversible for BidirectionalTier {}
impl Reversible for RandomAccessTier {}

/// Resolves a tier marker against a wrapped type `T`.
///
/// A marker implements `Resolve<T>` only when `T` has every capability the
/// tier requires. This is the capability registry: [`Step::Tier`] is bounded
/// by `Resolve<Self>`, so a type cannot claim a tier stronger than what it
/// implements.
///
/// | Marker               | Requires        | `Distance`                 |
/// |----------------------|-----------------|----------------------------|
/// | [`ForwardTier`]      | [`Step`]        | [`Absent`]                 |
/// | [`BidirectionalTier`]| [`StepBack`]    | [`Absent`]                 |
/// | [`RandomAccessTier`] | [`Offset`]      | `<T as Offset>::Distance`  |
pub trait Resolve<T: ?Sized>: TierMarker {
    /// The distance type of `T` at this tier.
    type Distance;
}

impl<T: Step + ?Sized> Resolve<T> for ForwardTier {
    type Distance = Absent;
}

impl<T: StepBack + ?Sized> Resolve<T> for BidirectionalTier {
    type Distance = Absent;
}

impl<T: Offset + ?Sized> Resolve<T> for RandomAccessTier {
    type Distance = T::Distance;
}
