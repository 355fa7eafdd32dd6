// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension traits for slices: safe subscripting ([`SafeIndex`]), order preserving
//! deduplication ([`DedupPreservingOrder`]), and non mutating sorts ([`SortedExt`]).

use std::{collections::HashSet, hash::Hash, ops::Range};

/// Subscripting that returns [`None`] (or a clamped slice) instead of panicking.
pub trait SafeIndex<T> {
    fn get_safe(&self, index: usize) -> Option<&T>;

    /// Both ends of `range` are clamped to the length of the slice. An inverted range
    /// yields an empty slice.
    fn get_safe_range(&self, range: Range<usize>) -> &[T];
}

impl<T> SafeIndex<T> for [T] {
    fn get_safe(&self, index: usize) -> Option<&T> { self.get(index) }

    fn get_safe_range(&self, range: Range<usize>) -> &[T] {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self[start..end]
    }
}

/// Removes duplicates while keeping the first occurrence of each element in place.
/// Unlike [`Vec::dedup`], duplicates don't have to be adjacent.
pub trait DedupPreservingOrder<T> {
    #[must_use]
    fn deduplicated(&self) -> Vec<T>;

    #[must_use]
    fn deduplicated_by_key<K: Eq + Hash>(&self, key_fn: impl FnMut(&T) -> K) -> Vec<T>;
}

impl<T: Clone + Eq + Hash> DedupPreservingOrder<T> for [T] {
    fn deduplicated(&self) -> Vec<T> { self.deduplicated_by_key(Clone::clone) }

    fn deduplicated_by_key<K: Eq + Hash>(
        &self,
        mut key_fn: impl FnMut(&T) -> K,
    ) -> Vec<T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|item| seen.insert(key_fn(item)))
            .cloned()
            .collect()
    }
}

/// Sorting that returns a new [`Vec`] and leaves the receiver untouched. Both sorts are
/// stable.
pub trait SortedExt<T> {
    #[must_use]
    fn sorted(&self) -> Vec<T>;

    #[must_use]
    fn sorted_by_key<K: Ord>(&self, key_fn: impl FnMut(&T) -> K) -> Vec<T>;
}

impl<T: Clone + Ord> SortedExt<T> for [T] {
    fn sorted(&self) -> Vec<T> {
        let mut it = self.to_vec();
        it.sort();
        it
    }

    fn sorted_by_key<K: Ord>(&self, key_fn: impl FnMut(&T) -> K) -> Vec<T> {
        let mut it = self.to_vec();
        it.sort_by_key(key_fn);
        it
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0, Some(&'a'))]
    #[test_case(2, Some(&'c'))]
    #[test_case(3, None)]
    #[test_case(usize::MAX, None)]
    fn test_get_safe(index: usize, expected: Option<&char>) {
        let list = ['a', 'b', 'c'];
        assert_eq2!(list.get_safe(index), expected);
    }

    #[test_case(0..2, &[1, 2])]
    #[test_case(1..10, &[2, 3])]
    #[test_case(5..10, &[])]
    #[test_case(Range { start: 2, end: 1 }, &[])]
    fn test_get_safe_range(range: Range<usize>, expected: &[i32]) {
        let list = [1, 2, 3];
        assert_eq2!(list.get_safe_range(range), expected);
    }

    #[test]
    fn test_deduplicated_keeps_first_occurrence() {
        let list = vec![3, 1, 3, 2, 1, 4];
        assert_eq2!(list.deduplicated(), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_deduplicated_by_key() {
        let list = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let it = list.deduplicated_by_key(|it| it.chars().next());
        assert_eq2!(it, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sorted_leaves_receiver_untouched() {
        let list = vec![3, 1, 2];
        assert_eq2!(list.sorted(), vec![1, 2, 3]);
        assert_eq2!(list, vec![3, 1, 2]);
    }

    #[test]
    fn test_sorted_by_key_is_stable() {
        let list = [("b", 1), ("a", 2), ("c", 1)];
        let it = list.sorted_by_key(|(_, rank)| *rank);
        assert_eq2!(it, vec![("b", 1), ("c", 1), ("a", 2)]);
    }
}
