//! Sequential algorithms over ranges.
//!
//! Each algorithm consumes the range and walks it once from begin to end.
//! Call them on a clone, or on [`Range::iter`], to keep the range around.

use std::ops::Add;

use super::Range;
use crate::cursor::ForwardCursor;

impl<C: ForwardCursor> Range<C> {
    /// Returns the number of steps from begin to end.
    ///
    /// Cursors that can measure the gap directly answer without walking.
    pub fn distance(self) -> usize {
        if let Some(steps) = self.begin.steps_until(&self.end) {
            return steps;
        }
        let (mut cursor, end) = self.into_parts();
        let mut steps = 0;
        while cursor != end {
            cursor.advance();
            steps += 1;
        }
        steps
    }

    /// Adds every item to `init`, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::range::value_range;
    ///
    /// assert_eq!(value_range(1_u64, 101).accumulate(0_u64), 5050);
    /// ```
    pub fn accumulate<T>(self, init: T) -> T
    where
        T: Add<C::Item, Output = T>,
    {
        self.accumulate_by(init, |total, item| total + item)
    }

    /// Folds every item into `init` with `operation`, front to back.
    pub fn accumulate_by<T, O>(self, init: T, mut operation: O) -> T
    where
        O: FnMut(T, C::Item) -> T,
    {
        let (mut cursor, end) = self.into_parts();
        let mut total = init;
        while cursor != end {
            total = operation(total, cursor.read());
            cursor.advance();
        }
        total
    }

    /// Returns `true` if `predicate` holds for every item.
    ///
    /// An empty range satisfies any predicate.
    pub fn all_of<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(C::Item) -> bool,
    {
        self.find_if(|item| !predicate(item)).is_none()
    }

    /// Returns `true` if `predicate` holds for at least one item.
    pub fn any_of<P>(self, predicate: P) -> bool
    where
        P: FnMut(C::Item) -> bool,
    {
        self.find_if(predicate).is_some()
    }

    /// Returns `true` if `predicate` holds for no item.
    pub fn none_of<P>(self, predicate: P) -> bool
    where
        P: FnMut(C::Item) -> bool,
    {
        self.find_if(predicate).is_none()
    }

    /// Calls `function` on every item and hands the function back.
    pub fn for_each<G>(self, mut function: G) -> G
    where
        G: FnMut(C::Item),
    {
        let (mut cursor, end) = self.into_parts();
        while cursor != end {
            function(cursor.read());
            cursor.advance();
        }
        function
    }

    /// Returns the number of items equal to `value`.
    pub fn count(self, value: &C::Item) -> usize
    where
        C::Item: PartialEq,
    {
        self.count_if(|item| item == *value)
    }

    /// Returns the number of items for which `predicate` holds.
    pub fn count_if<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(C::Item) -> bool,
    {
        self.accumulate_by(0, |hits, item| hits + usize::from(predicate(item)))
    }

    /// Returns the cursor at the first item equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::cursor::ForwardCursor;
    /// use stepwise::range::value_range;
    ///
    /// let found = value_range(10_i32, 20).find(&15);
    /// assert_eq!(found.map(|cursor| cursor.read()), Some(15));
    /// assert!(value_range(10_i32, 20).find(&25).is_none());
    /// ```
    pub fn find(self, value: &C::Item) -> Option<C>
    where
        C::Item: PartialEq,
    {
        self.find_if(|item| item == *value)
    }

    /// Returns the cursor at the first item for which `predicate` holds.
    pub fn find_if<P>(self, mut predicate: P) -> Option<C>
    where
        P: FnMut(C::Item) -> bool,
    {
        let (mut cursor, end) = self.into_parts();
        while cursor != end {
            if predicate(cursor.read()) {
                return Some(cursor);
            }
            cursor.advance();
        }
        None
    }

    /// Returns the cursor at the first item for which `predicate` fails.
    pub fn find_if_not<P>(self, mut predicate: P) -> Option<C>
    where
        P: FnMut(C::Item) -> bool,
    {
        self.find_if(|item| !predicate(item))
    }
}

#[cfg(test)]
mod tests {
    use crate::count_pair;
    use crate::cursor::{ForwardCursor, GeneratorCursor};
    use crate::range::{Range, value_range};
    use rstest::rstest;

    fn squares() -> Range<crate::cursor::CountCursor<GeneratorCursor<impl FnMut() -> i64 + Clone, i64>>> {
        let mut n = 0;
        let (begin, end) = count_pair!(
            GeneratorCursor::new(move || {
                n += 1;
                n * n
            }),
            10
        );
        Range::new(begin, end)
    }

    #[rstest]
    fn distance_walks_when_it_cannot_measure() {
        assert_eq!(squares().distance(), 10);
        assert_eq!(value_range(0.0_f32, 6.0).distance(), 6);
        assert_eq!(value_range(-4_i32, 4).distance(), 8);
    }

    #[rstest]
    fn accumulate_sums_items() {
        assert_eq!(squares().accumulate(0_i64), 385);
    }

    #[rstest]
    fn accumulate_by_folds_in_order() {
        let digits = value_range(1_u8, 5).accumulate_by(String::new(), |mut text, digit| {
            text.push(char::from(b'0' + digit));
            text
        });
        assert_eq!(digits, "1234");
    }

    #[rstest]
    #[case::all_even(|n: i64| n % 2 == 0, false, true, false)]
    #[case::all_positive(|n: i64| n > 0, true, true, false)]
    #[case::none_huge(|n: i64| n > 1_000, false, false, true)]
    fn predicate_checks(
        #[case] predicate: fn(i64) -> bool,
        #[case] all: bool,
        #[case] any: bool,
        #[case] none: bool,
    ) {
        assert_eq!(squares().all_of(predicate), all);
        assert_eq!(squares().any_of(predicate), any);
        assert_eq!(squares().none_of(predicate), none);
    }

    #[rstest]
    fn empty_range_satisfies_all_and_nothing_else() {
        let empty = value_range(7_u16, 7);
        assert!(empty.all_of(|_| false));
        assert!(!empty.any_of(|_| true));
        assert!(empty.none_of(|_| true));
        assert_eq!(empty.count_if(|_| true), 0);
    }

    #[rstest]
    fn for_each_returns_the_function() {
        let mut seen = Vec::new();
        let _ = squares().for_each(|square| seen.push(square));
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.last(), Some(&100));
    }

    #[rstest]
    fn counting_items() {
        let parity = value_range(0_u32, 10).map(|n: u32| n % 3);
        assert_eq!(parity.clone().count(&0), 4);
        assert_eq!(parity.count_if(|residue| residue != 0), 6);
    }

    #[rstest]
    fn find_family_returns_the_matching_cursor() {
        let found = squares().find_if(|square| square > 50);
        assert_eq!(found.as_ref().map(ForwardCursor::read), Some(64));
        assert_eq!(found.map(|cursor| cursor.count()), Some(7));

        let first_odd = squares().find_if_not(|square| square % 2 == 0);
        assert_eq!(first_odd.map(|cursor| cursor.read()), Some(1));

        assert!(squares().find(&49).is_some());
        assert!(squares().find(&50).is_none());
    }
}
