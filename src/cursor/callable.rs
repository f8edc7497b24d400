//! A reassignable slot for callables.
//!
//! Cursors that carry a function (generators, mutators, transforms) keep it in
//! a [`Callable`]. The slot can always be reassigned, whatever the callable
//! itself supports: assigning drops the current callable and installs the new
//! one in its place. It also gives the otherwise opaque callable a `Debug`
//! rendering, so the cursors holding one can derive diagnostics.
//!
//! State a callable borrows from its environment must outlive the slot; the
//! borrow checker enforces this through the callable's lifetime.

use std::any::type_name;
use std::fmt;

/// A slot holding a callable of type `F`.
///
/// # Examples
///
/// ```rust
/// use stepwise::cursor::Callable;
///
/// let offset = 10;
/// let mut slot = Callable::new(|value: i32| value + offset);
/// assert_eq!(slot.apply(5), 15);
///
/// // Closures cannot be assigned to one another, but the slot can be refilled
/// // with another instance of the same closure type.
/// let replacement = slot.clone();
/// slot.assign(replacement.into_inner());
/// assert_eq!(slot.apply(1), 11);
/// ```
#[derive(Copy, Default)]
pub struct Callable<F> {
    function: F,
}

impl<F> Callable<F> {
    /// Wraps `function` in a slot.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Drops the current callable and installs `function` in its place.
    #[inline]
    pub fn assign(&mut self, function: F) {
        self.function = function;
    }

    /// Returns a reference to the callable.
    #[inline]
    pub const fn get(&self) -> &F {
        &self.function
    }

    /// Consumes the slot and returns the callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Invokes a nullary callable.
    #[inline]
    pub fn generate<V>(&mut self) -> V
    where
        F: FnMut() -> V,
    {
        (self.function)()
    }

    /// Invokes a callable that mutates `value` in place.
    #[inline]
    pub fn mutate<V: ?Sized>(&mut self, value: &mut V)
    where
        F: FnMut(&mut V),
    {
        (self.function)(value);
    }

    /// Invokes a pure unary callable.
    #[inline]
    pub fn apply<A, U>(&self, argument: A) -> U
    where
        F: Fn(A) -> U,
    {
        (self.function)(argument)
    }
}

impl<F: Clone> Clone for Callable<F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }

    /// Rebuilds the callable from `source` in place.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.function.clone());
    }
}

impl<F> fmt::Debug for Callable<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Callable")
            .field(&type_name::<F>())
            .finish()
    }
}

impl<F> From<F> for Callable<F> {
    fn from(function: F) -> Self {
        Self::new(function)
    }
}
