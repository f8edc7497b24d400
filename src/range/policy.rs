//! Execution policies for the range algorithms.
//!
//! Random-access ranges accept an [`ExecutionPolicy`] on the `*_with`
//! variants of the algorithms. Under [`ExecutionPolicy::Parallel`] the range
//! is split by jumping cloned cursors, and each rayon worker walks its own
//! piece. Without the `rayon` feature every policy runs sequentially.

use std::fmt;
use std::ops::Add;

use tracing::debug;

use super::Range;
use crate::cursor::RandomAccessCursor;

/// How an algorithm walks a random-access range.
///
/// # Examples
///
/// ```rust
/// use stepwise::range::{ExecutionPolicy, value_range};
///
/// let range = value_range(0_i64, 10_000);
/// let sequential = range.accumulate_with(ExecutionPolicy::Sequential, 0_i64);
/// let parallel = range.accumulate_with(ExecutionPolicy::parallel(), 0_i64);
/// assert_eq!(sequential, parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionPolicy {
    /// Walk the range on the calling thread.
    #[default]
    Sequential,
    /// Split the range across the rayon thread pool.
    Parallel {
        /// The smallest piece a worker is handed.
        min_len: usize,
    },
}

impl ExecutionPolicy {
    /// The piece length used by [`ExecutionPolicy::parallel`].
    pub const DEFAULT_MIN_LEN: usize = 1024;

    /// Returns the parallel policy with [`DEFAULT_MIN_LEN`](Self::DEFAULT_MIN_LEN).
    #[inline]
    pub const fn parallel() -> Self {
        Self::Parallel {
            min_len: Self::DEFAULT_MIN_LEN,
        }
    }

    /// Returns `true` for [`ExecutionPolicy::Parallel`].
    #[inline]
    pub const fn is_parallel(&self) -> bool {
        matches!(self, Self::Parallel { .. })
    }
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(formatter, "sequential"),
            Self::Parallel { min_len } => write!(formatter, "parallel(min_len={min_len})"),
        }
    }
}

impl<C> Range<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    /// Decides how `operation` runs, returning the piece length when it runs in parallel.
    fn dispatch(&self, policy: ExecutionPolicy, operation: &'static str) -> Option<usize> {
        let length = self.step_count();
        match policy {
            ExecutionPolicy::Parallel { min_len } if cfg!(feature = "rayon") => {
                debug!(operation, length, min_len, "running range algorithm in parallel");
                Some(min_len.max(1))
            }
            ExecutionPolicy::Parallel { .. } => {
                debug!(
                    operation,
                    length, "rayon feature disabled; running range algorithm sequentially"
                );
                None
            }
            ExecutionPolicy::Sequential => {
                debug!(operation, length, "running range algorithm sequentially");
                None
            }
        }
    }

    /// Adds every item to `init` under `policy`.
    ///
    /// The parallel path sums pieces independently, so item addition must be
    /// associative for the results to agree.
    pub fn accumulate_with<T>(self, policy: ExecutionPolicy, init: T) -> T
    where
        T: Add<C::Item, Output = T>,
        C::Item: Add<Output = C::Item>,
    {
        match self.dispatch(policy, "accumulate") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::ParallelIterator;
                match self.par_walk(min_len).reduce_with(|left, right| left + right) {
                    Some(total) => init + total,
                    None => init,
                }
            }
            _ => self.accumulate(init),
        }
    }

    /// Returns `true` if `predicate` holds for every item, under `policy`.
    pub fn all_of_with<P>(self, policy: ExecutionPolicy, predicate: P) -> bool
    where
        P: Fn(C::Item) -> bool + Sync + Send,
    {
        match self.dispatch(policy, "all_of") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::ParallelIterator;
                self.par_walk(min_len).all(predicate)
            }
            _ => self.all_of(predicate),
        }
    }

    /// Returns `true` if `predicate` holds for at least one item, under `policy`.
    pub fn any_of_with<P>(self, policy: ExecutionPolicy, predicate: P) -> bool
    where
        P: Fn(C::Item) -> bool + Sync + Send,
    {
        match self.dispatch(policy, "any_of") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::ParallelIterator;
                self.par_walk(min_len).any(predicate)
            }
            _ => self.any_of(predicate),
        }
    }

    /// Returns `true` if `predicate` holds for no item, under `policy`.
    pub fn none_of_with<P>(self, policy: ExecutionPolicy, predicate: P) -> bool
    where
        P: Fn(C::Item) -> bool + Sync + Send,
    {
        !self.any_of_with(policy, predicate)
    }

    /// Calls `function` on every item under `policy`.
    ///
    /// Under the parallel policy the calls happen on worker threads in no
    /// particular order.
    pub fn for_each_with<G>(self, policy: ExecutionPolicy, function: G)
    where
        G: Fn(C::Item) + Sync + Send,
    {
        match self.dispatch(policy, "for_each") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::ParallelIterator;
                self.par_walk(min_len).for_each(function);
            }
            _ => {
                let _ = self.for_each(function);
            }
        }
    }

    /// Returns the number of items for which `predicate` holds, under `policy`.
    pub fn count_if_with<P>(self, policy: ExecutionPolicy, predicate: P) -> usize
    where
        P: Fn(C::Item) -> bool + Sync + Send,
    {
        match self.dispatch(policy, "count_if") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::ParallelIterator;
                self.par_walk(min_len).filter_map(|item| predicate(item).then_some(())).count()
            }
            _ => self.count_if(predicate),
        }
    }

    /// Returns the cursor at the first item for which `predicate` holds, under `policy`.
    ///
    /// "First" means closest to the begin cursor under every policy.
    pub fn find_if_with<P>(self, policy: ExecutionPolicy, predicate: P) -> Option<C>
    where
        P: Fn(C::Item) -> bool + Sync + Send,
    {
        match self.dispatch(policy, "find_if") {
            #[cfg(feature = "rayon")]
            Some(min_len) => {
                use rayon::iter::IndexedParallelIterator;
                let begin = self.begin.clone();
                let index = self.par_walk(min_len).position_first(predicate)?;
                Some(begin.jumped(super::distance_of(index)))
            }
            _ => self.find_if(predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::ForwardCursor;
    use crate::range::value_range;
    use rstest::rstest;

    #[rstest]
    fn default_policy_is_sequential() {
        assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::Sequential);
        assert!(!ExecutionPolicy::default().is_parallel());
        assert!(ExecutionPolicy::parallel().is_parallel());
    }

    #[rstest]
    #[case(ExecutionPolicy::Sequential, "sequential")]
    #[case(ExecutionPolicy::Parallel { min_len: 8 }, "parallel(min_len=8)")]
    fn display_names_the_policy(#[case] policy: ExecutionPolicy, #[case] expected: &str) {
        assert_eq!(policy.to_string(), expected);
    }

    #[rstest]
    #[case(ExecutionPolicy::Sequential)]
    #[case(ExecutionPolicy::Parallel { min_len: 1 })]
    #[case(ExecutionPolicy::Parallel { min_len: 0 })]
    fn algorithms_agree_under_every_policy(#[case] policy: ExecutionPolicy) {
        let range = value_range(0_i32, 500);
        assert_eq!(range.accumulate_with(policy, 0), 124_750);
        assert!(range.all_of_with(policy, |n| n < 500));
        assert!(range.any_of_with(policy, |n| n == 499));
        assert!(range.none_of_with(policy, |n| n < 0));
        assert_eq!(range.count_if_with(policy, |n| n % 5 == 0), 100);
        let found = range.find_if_with(policy, |n| n * n > 1_000);
        assert_eq!(found.map(|cursor| *cursor.get()), Some(32));
    }

    #[rstest]
    #[case(ExecutionPolicy::Sequential)]
    #[case(ExecutionPolicy::Parallel { min_len: 1 })]
    fn wide_unsigned_range_agrees_under_every_policy(#[case] policy: ExecutionPolicy) {
        let range = value_range(0_u8, 200).map(u64::from);
        assert_eq!(range.clone().accumulate_with(policy, 0_u64), 19_900);
        assert_eq!(range.clone().count_if_with(policy, |n| n >= 100), 100);
        let found = range.find_if_with(policy, |n| n == 150);
        assert_eq!(found.map(|cursor| cursor.read()), Some(150));
    }

    #[rstest]
    fn empty_range_under_parallel_policy() {
        let empty = value_range(9_u64, 9);
        let policy = ExecutionPolicy::parallel();
        assert_eq!(empty.accumulate_with(policy, 3_u64), 3);
        assert!(empty.all_of_with(policy, |_| false));
        assert!(empty.find_if_with(policy, |_| true).is_none());
    }
}
