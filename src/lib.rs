//! # stepwise
//!
//! Lazily-evaluated sequence cursors whose operation set is deduced from the
//! type they wrap.
//!
//! ## Overview
//!
//! A cursor denotes a position in a conceptual sequence: the values of an
//! integer type, the successive results of a generator closure, or the
//! transformed items of another cursor. Two cursors of the same type form a
//! range that can be walked, mapped, and handed to algorithms.
//!
//! - **Capabilities**: a wrapped type is forward-only, bidirectional, or
//!   random-access depending on the capability traits it implements
//! - **Cursors**: value, generator, mutator, counting, and mapping adapters
//! - **Ranges**: begin/end pairs with iteration, mapping, and algorithms, run
//!   sequentially or under a parallel execution policy
//!
//! An operation the wrapped type cannot support is absent at compile time:
//! there is no `retreat` on a generator, and no jumping over floats.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel iteration and the parallel execution policy
//!
//! ## Example
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let cubes = GeneratorCursor::new({
//!     let mut n = 0_u64;
//!     move || {
//!         n += 1;
//!         n * n * n
//!     }
//! });
//!
//! let range = Range::counted(cubes, 4)?;
//! assert_eq!(range.iter().collect::<Vec<_>>(), [1, 8, 27, 64]);
//! assert_eq!(range.accumulate(0_u64), 100);
//!
//! let letters = value_range(b'a', b'e').map(char::from);
//! assert_eq!(letters.iter().rev().collect::<String>(), "dcba");
//! # Ok::<(), RangeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the cursor traits, the adapters, and the range types.
///
/// # Usage
///
/// ```rust
/// use stepwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{Offset, Step, StepBack, Tier};
    pub use crate::count_pair;
    pub use crate::cursor::{
        BidirectionalCursor, CountCursor, ForwardCursor, GeneratorCursor, MapCursor,
        MutatorCursor, PeekCursor, RandomAccessCursor, ValueCursor,
    };
    pub use crate::range::{ExecutionPolicy, Range, RangeError, map_range, value_range};
}

pub mod capability;
pub mod cursor;
pub mod range;
