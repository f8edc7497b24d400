//! A cursor that transforms the items of another cursor.

use std::cmp::Ordering;
use std::fmt;

use super::{
    BidirectionalCursor, Callable, ForwardCursor, PeekCursor, RandomAccessCursor,
    impl_jump_operators,
};

/// A cursor yielding `transform(inner.read())` at each position.
///
/// The transform runs on every read and never on a step, so stepping a
/// mapping cursor costs exactly what stepping the inner cursor costs. Position,
/// equality, and ordering all belong to the inner cursor; the transform is
/// assumed to be pure.
///
/// The tier and the operation set mirror the inner cursor exactly.
///
/// [`peek`](PeekCursor::peek) computes the transformed item into a slot owned
/// by the cursor and lends it out. Cloning the cursor does not clone the slot.
///
/// # Examples
///
/// ```rust
/// use stepwise::cursor::{ForwardCursor, MapCursor, PeekCursor, RandomAccessCursor, ValueCursor};
///
/// let mut squares = MapCursor::new(ValueCursor::new(3_u32), |n: u32| n * n);
/// assert_eq!(squares.read(), 9);
/// assert_eq!(squares.at(2), 25);
///
/// squares.advance();
/// assert_eq!(*squares.peek(), 16);
/// ```
pub struct MapCursor<C, F, U> {
    inner: C,
    transform: Callable<F>,
    slot: Option<U>,
}

impl<C, F, U> MapCursor<C, F, U>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U,
{
    /// Creates a cursor applying `transform` to the items of `inner`.
    #[inline]
    pub const fn new(inner: C, transform: F) -> Self {
        Self {
            inner,
            transform: Callable::new(transform),
            slot: None,
        }
    }
}

impl<C, F, U> MapCursor<C, F, U> {
    /// Returns a reference to the inner cursor.
    #[inline]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns a reference to the transform.
    #[inline]
    pub const fn transform(&self) -> &F {
        self.transform.get()
    }

    /// Consumes the cursor and returns the inner cursor and the transform.
    #[inline]
    pub fn into_parts(self) -> (C, F) {
        (self.inner, self.transform.into_inner())
    }
}

/// Creates a [`MapCursor`] applying `transform` to the items of `inner`.
#[inline]
pub const fn mapped<C, F, U>(inner: C, transform: F) -> MapCursor<C, F, U>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U,
{
    MapCursor::new(inner, transform)
}

impl<C: Clone, F: Clone, U> Clone for MapCursor<C, F, U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            transform: self.transform.clone(),
            slot: None,
        }
    }
}

impl<C: fmt::Debug, F, U> fmt::Debug for MapCursor<C, F, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapCursor")
            .field("inner", &self.inner)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl<C: PartialEq, F, U> PartialEq for MapCursor<C, F, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Eq, F, U> Eq for MapCursor<C, F, U> {}

impl<C: PartialOrd, F, U> PartialOrd for MapCursor<C, F, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<C, F, U> ForwardCursor for MapCursor<C, F, U>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;
    type Tier = C::Tier;

    #[inline]
    fn read(&self) -> U {
        self.transform.apply(self.inner.read())
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }

    #[inline]
    fn advance_by(&mut self, steps: usize) {
        self.inner.advance_by(steps);
    }

    #[inline]
    fn into_item(self) -> U {
        self.transform.apply(self.inner.into_item())
    }

    #[inline]
    fn steps_until(&self, end: &Self) -> Option<usize> {
        self.inner.steps_until(&end.inner)
    }
}

impl<C, F, U> BidirectionalCursor for MapCursor<C, F, U>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> U,
{
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
    }
}

impl<C, F, U> RandomAccessCursor for MapCursor<C, F, U>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> U,
{
    type Distance = C::Distance;

    #[inline]
    fn jump(&mut self, delta: C::Distance) {
        self.inner.jump(delta);
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> C::Distance {
        self.inner.distance_from(&origin.inner)
    }
}

impl<C, F, U> PeekCursor for MapCursor<C, F, U>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U,
{
    type Target = U;

    #[inline]
    fn peek(&mut self) -> &U {
        let item = self.read();
        self.slot.insert(item)
    }
}

impl_jump_operators!([C, F, U] MapCursor<C, F, U>, C::Distance, where C: RandomAccessCursor, F: Fn(C::Item) -> U);
