//! A cursor over the successive results of a nullary callable.

use std::fmt;

use super::{Callable, ForwardCursor, PeekCursor};
use crate::capability::ForwardTier;

/// A forward cursor that caches the latest result of a generator callable.
///
/// Construction calls the generator once, so the cursor can be read before it
/// is ever advanced. Each [`advance`](ForwardCursor::advance) calls it exactly
/// once more and overwrites the cache; reading never calls it. Equality
/// compares cached values only.
///
/// A generator cannot be run backward, so this cursor is always forward-only.
/// Copying the cursor copies the callable along with any state it owns, so a
/// copy replays the same sequence independently.
///
/// # Examples
///
/// ```rust
/// use stepwise::cursor::{ForwardCursor, GeneratorCursor};
///
/// let mut squares = GeneratorCursor::new({
///     let mut n = 0;
///     move || {
///         n += 1;
///         n * n
///     }
/// });
///
/// assert_eq!(squares.read(), 1);
/// assert_eq!(squares.read(), 1);
/// squares.advance();
/// assert_eq!(squares.read(), 4);
/// ```
#[derive(Clone)]
pub struct GeneratorCursor<F, V> {
    cache: V,
    generator: Callable<F>,
}

impl<F, V> GeneratorCursor<F, V>
where
    F: FnMut() -> V,
{
    /// Creates a cursor, calling `generator` once to seed the cache.
    pub fn new(generator: F) -> Self {
        let mut generator = Callable::new(generator);
        let cache = generator.generate();
        Self { cache, generator }
    }
}

impl<F, V> GeneratorCursor<F, V> {
    /// Returns a reference to the cached value.
    #[inline]
    pub const fn get(&self) -> &V {
        &self.cache
    }

    /// Consumes the cursor and returns the cached value.
    #[inline]
    pub fn into_inner(self) -> V {
        self.cache
    }
}

/// Creates a [`GeneratorCursor`] over the results of `generator`.
#[inline]
pub fn generator<F, V>(generator: F) -> GeneratorCursor<F, V>
where
    F: FnMut() -> V,
{
    GeneratorCursor::new(generator)
}

impl<F, V: PartialEq> PartialEq for GeneratorCursor<F, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cache == other.cache
    }
}

impl<F, V: Eq> Eq for GeneratorCursor<F, V> {}

impl<F, V: fmt::Debug> fmt::Debug for GeneratorCursor<F, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GeneratorCursor")
            .field("cache", &self.cache)
            .field("generator", &self.generator)
            .finish()
    }
}

impl<F, V> ForwardCursor for GeneratorCursor<F, V>
where
    F: FnMut() -> V,
    V: PartialEq + Clone,
{
    type Item = V;
    type Tier = ForwardTier;

    #[inline]
    fn read(&self) -> V {
        self.cache.clone()
    }

    #[inline]
    fn advance(&mut self) {
        self.cache = self.generator.generate();
    }

    #[inline]
    fn into_item(self) -> V {
        self.cache
    }
}

impl<F, V> PeekCursor for GeneratorCursor<F, V>
where
    F: FnMut() -> V,
    V: PartialEq + Clone,
{
    type Target = V;

    #[inline]
    fn peek(&mut self) -> &V {
        &self.cache
    }
}
