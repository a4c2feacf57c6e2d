//! Generic position-based collection capability.
//!
//! This module provides the [`Collection`] trait, which describes a finite,
//! restartable, forward-only walk over a container through opaque positions.
//! A container only has to supply four primitives:
//!
//! - `start_position`: the position of the first element
//! - `end_position`: the sentinel position one past the last element
//! - `advance`: the position following a given position
//! - `value_at`: the element at a position (`None` at the end sentinel)
//!
//! Every generic algorithm ([`Collection::prefix`], [`Collection::suffix`],
//! [`Collection::fold_left`], ...) is then derived from those primitives,
//! without bespoke code in the container and without exposing any mutation
//! capability.
//!
//! # Examples
//!
//! ```rust
//! use cowseq::collection::Collection;
//! use cowseq::sequence::LinkedSequence;
//!
//! let sequence: LinkedSequence<i32> = (0..10).collect();
//!
//! assert_eq!(sequence.first(), Some(0));
//! assert_eq!(sequence.prefix(3), vec![0, 1, 2]);
//! assert_eq!(sequence.suffix(3), vec![7, 8, 9]);
//! assert_eq!(sequence.fold_left(0, |accumulator, value| accumulator + value), 45);
//! ```

/// A container that can be walked through opaque positions.
///
/// Positions compare equal iff they denote the same slot of the container.
/// Walking from `start_position` with `advance` must reach `end_position`
/// after exactly as many steps as there are elements.
pub trait Collection {
    /// The type of the values produced by the walk.
    type Element;

    /// The opaque cursor type.
    type Position: Clone + PartialEq;

    /// Returns the position of the first element, or the end sentinel if the
    /// collection is empty.
    fn start_position(&self) -> Self::Position;

    /// Returns the sentinel position one past the last element.
    fn end_position(&self) -> Self::Position;

    /// Returns the position following `position`.
    ///
    /// Advancing the end sentinel yields the end sentinel again.
    fn advance(&self, position: &Self::Position) -> Self::Position;

    /// Returns the element at `position`, or `None` for the end sentinel.
    fn value_at(&self, position: &Self::Position) -> Option<Self::Element>;

    /// Returns an iterator over the values, from the start to the end position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::collection::Collection;
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=3).collect();
    /// let collected: Vec<i32> = sequence.values().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    fn values(&self) -> Values<'_, Self>
    where
        Self: Sized,
    {
        Values {
            collection: self,
            position: self.start_position(),
            end: self.end_position(),
        }
    }

    /// Returns the first element, if any.
    fn first(&self) -> Option<Self::Element> {
        self.value_at(&self.start_position())
    }

    /// Counts the elements by walking the positions.
    ///
    /// # Complexity
    ///
    /// O(n), no element is cloned
    fn count(&self) -> usize {
        let end = self.end_position();
        let mut position = self.start_position();
        let mut count = 0;
        while position != end {
            count += 1;
            position = self.advance(&position);
        }
        count
    }

    /// Returns the first `count` elements (or all of them if there are fewer).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::collection::Collection;
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=5).collect();
    /// assert_eq!(sequence.prefix(2), vec![1, 2]);
    /// assert_eq!(sequence.prefix(10), vec![1, 2, 3, 4, 5]);
    /// ```
    fn prefix(&self, count: usize) -> Vec<Self::Element>
    where
        Self: Sized,
    {
        self.values().take(count).collect()
    }

    /// Returns the last `count` elements (or all of them if there are fewer).
    ///
    /// The positions before the suffix are skipped without reading their
    /// values.
    ///
    /// # Complexity
    ///
    /// O(n), two walks over the positions
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::collection::Collection;
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=5).collect();
    /// assert_eq!(sequence.suffix(2), vec![4, 5]);
    /// assert_eq!(sequence.suffix(0), Vec::<i32>::new());
    /// ```
    fn suffix(&self, count: usize) -> Vec<Self::Element>
    where
        Self: Sized,
    {
        let skipped = Collection::count(self).saturating_sub(count);
        let mut position = self.start_position();
        for _ in 0..skipped {
            position = self.advance(&position);
        }
        Values {
            collection: self,
            position,
            end: self.end_position(),
        }
        .collect()
    }

    /// Folds the elements from front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::collection::Collection;
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=4).collect();
    /// assert_eq!(sequence.fold_left(0, |sum, value| sum + value), 10);
    /// ```
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Element) -> B,
    {
        self.values().fold(init, function)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Option<Self::Element>
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        self.values().find(|element| predicate(element))
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        self.values().any(|element| predicate(&element))
    }
}

/// An iterator over the values of a [`Collection`], driven by its positions.
pub struct Values<'a, C: Collection> {
    collection: &'a C,
    position: C::Position,
    end: C::Position,
}

impl<C: Collection> Iterator for Values<'_, C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.end {
            return None;
        }
        let value = self.collection.value_at(&self.position)?;
        self.position = self.collection.advance(&self.position);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The remaining length is only known after a walk
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Minimal array-backed collection whose positions are plain indices.
    struct Digits(Vec<u8>);

    impl Collection for Digits {
        type Element = u8;
        type Position = usize;

        fn start_position(&self) -> usize {
            0
        }

        fn end_position(&self) -> usize {
            self.0.len()
        }

        fn advance(&self, position: &usize) -> usize {
            (*position + 1).min(self.0.len())
        }

        fn value_at(&self, position: &usize) -> Option<u8> {
            self.0.get(*position).copied()
        }
    }

    #[rstest]
    fn test_values_walks_every_position() {
        let digits = Digits(vec![3, 1, 4]);
        assert_eq!(digits.values().collect::<Vec<_>>(), vec![3, 1, 4]);
    }

    #[rstest]
    fn test_count_on_empty() {
        assert_eq!(Collection::count(&Digits(Vec::new())), 0);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![3, 1])]
    #[case(9, vec![3, 1, 4, 1, 5])]
    fn test_prefix(#[case] count: usize, #[case] expected: Vec<u8>) {
        assert_eq!(Digits(vec![3, 1, 4, 1, 5]).prefix(count), expected);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 5])]
    #[case(9, vec![3, 1, 4, 1, 5])]
    fn test_suffix(#[case] count: usize, #[case] expected: Vec<u8>) {
        assert_eq!(Digits(vec![3, 1, 4, 1, 5]).suffix(count), expected);
    }

    #[rstest]
    fn test_first_on_empty_is_none() {
        assert_eq!(Digits(Vec::new()).first(), None);
    }

    #[rstest]
    fn test_fold_find_exists() {
        let digits = Digits(vec![3, 1, 4, 1, 5]);
        assert_eq!(digits.fold_left(0u32, |sum, digit| sum + u32::from(digit)), 14);
        assert_eq!(digits.find(|digit| *digit > 3), Some(4));
        assert!(digits.exists(|digit| *digit == 5));
        assert!(!digits.exists(|digit| *digit == 9));
    }
}
