//! Errors raised when a range is built from caller-supplied positions or lengths.

use thiserror::Error;

/// Error type for checked range construction.
///
/// # Examples
///
/// ```rust
/// use stepwise::range::{Range, RangeError};
/// use stepwise::cursor::ValueCursor;
///
/// let error = Range::checked(ValueCursor::new(9_i32), ValueCursor::new(4_i32)).unwrap_err();
/// assert_eq!(error, RangeError::Inverted { distance: -5 });
/// assert_eq!(error.to_string(), "Range end precedes its begin by 5 positions");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError {
    /// A counted range was asked for more steps than a counter can hold.
    #[error("Counted range length {length} exceeds isize::MAX")]
    LengthOverflow {
        /// The requested length.
        length: usize,
    },

    /// The end of a random-access range lies before its begin.
    #[error("Range end precedes its begin by {} positions", .distance.unsigned_abs())]
    Inverted {
        /// The distance from begin to end, always negative.
        distance: isize,
    },
}
