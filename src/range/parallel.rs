//! Parallel iteration over random-access ranges.
//!
//! A random-access range converts into a [`ParallelWalk`], an
//! [`IndexedParallelIterator`]. Splitting a piece clones its begin cursor and
//! jumps the clone to the split point, so every worker steps a cursor of its
//! own and only the callables captured by the cursors are shared.
//!
//! # Examples
//!
//! ```rust
//! use rayon::prelude::*;
//! use stepwise::range::value_range;
//!
//! let range = value_range(0_u32, 1_000).map(|n: u32| u64::from(n) * 2);
//! let total: u64 = range.par_iter().sum();
//! assert_eq!(total, 999_000);
//! ```

use rayon::iter::plumbing::{Consumer, Producer, ProducerCallback, UnindexedConsumer, bridge};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, MinLen, ParallelIterator};
use tracing::trace;

use super::{Range, Walk, distance_of};
use crate::cursor::RandomAccessCursor;

/// A parallel iterator over the items of a random-access range.
#[derive(Debug, Clone)]
pub struct ParallelWalk<C> {
    begin: C,
    len: usize,
}

impl<C> ParallelWalk<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    fn new(range: Range<C>) -> Self {
        let len = range.step_count();
        let (begin, _) = range.into_parts();
        Self { begin, len }
    }
}

impl<C> ParallelIterator for ParallelWalk<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    type Item = C::Item;

    fn drive_unindexed<R>(self, consumer: R) -> R::Result
    where
        R: UnindexedConsumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn opt_len(&self) -> Option<usize> {
        Some(self.len)
    }
}

impl<C> IndexedParallelIterator for ParallelWalk<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    fn len(&self) -> usize {
        self.len
    }

    fn drive<R>(self, consumer: R) -> R::Result
    where
        R: Consumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<Self::Item>,
    {
        callback.callback(WalkProducer {
            begin: self.begin,
            len: self.len,
        })
    }
}

/// A piece of a range handed to one worker.
struct WalkProducer<C> {
    begin: C,
    len: usize,
}

impl<C> Producer for WalkProducer<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    type Item = C::Item;
    type IntoIter = Walk<C>;

    fn into_iter(self) -> Walk<C> {
        let end = self.begin.clone().jumped(distance_of(self.len));
        Walk::new(self.begin, end)
    }

    fn split_at(self, index: usize) -> (Self, Self) {
        trace!(len = self.len, index, "splitting range piece");
        let middle = self.begin.clone().jumped(distance_of(index));
        (
            Self {
                begin: self.begin,
                len: index,
            },
            Self {
                begin: middle,
                len: self.len - index,
            },
        )
    }
}

impl<C> IntoParallelIterator for Range<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    type Iter = ParallelWalk<C>;
    type Item = C::Item;

    fn into_par_iter(self) -> ParallelWalk<C> {
        ParallelWalk::new(self)
    }
}

impl<C> IntoParallelIterator for &Range<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    type Iter = ParallelWalk<C>;
    type Item = C::Item;

    fn into_par_iter(self) -> ParallelWalk<C> {
        ParallelWalk::new(self.clone())
    }
}

impl<C> Range<C>
where
    C: RandomAccessCursor + Clone + Send,
    C::Item: Send,
{
    /// Converts the range into a parallel iterator handing out pieces of at least `min_len` items.
    pub(crate) fn par_walk(self, min_len: usize) -> MinLen<ParallelWalk<C>> {
        ParallelWalk::new(self).with_min_len(min_len)
    }
}
