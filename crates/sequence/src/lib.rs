mod util;
mod vec;
mod vec_deque;

use std::iter::StepBy;
use std::ops::Range;

/// Ordered, growable, indexable container of a single element type.
///
/// - Indices are zero-based; the valid range is `[0, len)`.
/// - Reads are partial (`None` past the end), writes and swaps are total and
///   panic on an out-of-range index.
/// - Extremum lookups break ties by the first occurrence.
pub trait Sequence: Sized {
    type Item;

    /// The same container family holding `U` instead of `Self::Item`.
    type Rebind<U>: Sequence<Item = U>;

    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: Self::Item);

    /// Moves every element of `other` to the back, in order.
    fn append(&mut self, other: Self);

    fn read(&self, index: usize) -> Option<&Self::Item>;

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Panics if `index >= len`.
    fn write(&mut self, index: usize, item: Self::Item) -> Self::Item;

    /// Panics if either index is out of range.
    fn swap(&mut self, a: usize, b: usize);

    /// Drops every element at or after `len`.
    ///
    /// Panics if `len` exceeds the current length.
    fn truncate(&mut self, len: usize);

    /// Unstable in-place sort by ascending key.
    fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K;

    fn arg_min_by_key<K, F>(&self, f: F) -> Option<&Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K;

    fn arg_max_by_key<K, F>(&self, f: F) -> Option<&Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K;
}

/// Ascending indices `start, start + step, ...` strictly below `end`.
///
/// Panics if `step == 0`.
pub fn index_range(start: usize, end: usize, step: usize) -> StepBy<Range<usize>> {
    assert!(step > 0, "index_range step must be positive");
    (start..end).step_by(step)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Sequence, index_range};

    fn contents<S>(seq: &S) -> Vec<S::Item>
    where
        S: Sequence,
        S::Item: Clone,
    {
        index_range(0, seq.len(), 1)
            .map(|i| seq.read(i).cloned().unwrap())
            .collect()
    }

    fn from_slice<S>(values: &[i64]) -> S
    where
        S: Sequence<Item = i64>,
    {
        let mut seq = S::with_capacity(values.len());
        for &value in values {
            seq.push(value);
        }
        seq
    }

    fn check_primitives<S>()
    where
        S: Sequence<Item = i64>,
    {
        let mut seq = S::new();
        assert!(seq.is_empty());
        assert_eq!(seq.read(0), None);

        seq.push(3);
        seq.push(1);
        seq.push(2);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.read(0), Some(&3));
        assert_eq!(seq.read(2), Some(&2));
        assert_eq!(seq.read(3), None);

        assert_eq!(seq.write(1, 10), 1);
        assert_eq!(contents(&seq), vec![3, 10, 2]);

        seq.swap(0, 2);
        assert_eq!(contents(&seq), vec![2, 10, 3]);

        seq.append(from_slice(&[7, 8]));
        assert_eq!(contents(&seq), vec![2, 10, 3, 7, 8]);

        seq.truncate(5);
        assert_eq!(seq.len(), 5);
        seq.truncate(2);
        assert_eq!(contents(&seq), vec![2, 10]);
        seq.truncate(0);
        assert!(seq.is_empty());
    }

    fn check_extrema<S>()
    where
        S: Sequence<Item = (i64, char)>,
    {
        let empty = S::new();
        assert_eq!(empty.arg_min_by_key(|&(k, _)| k), None);
        assert_eq!(empty.arg_max_by_key(|&(k, _)| k), None);

        let mut seq = S::new();
        for item in [(1, 'a'), (3, 'b'), (1, 'c'), (3, 'd')] {
            seq.push(item);
        }
        assert_eq!(seq.arg_min_by_key(|&(k, _)| k), Some(&(1, 'a')));
        assert_eq!(seq.arg_max_by_key(|&(k, _)| k), Some(&(3, 'b')));
    }

    fn check_sort_matches_std<S>(rng: &mut StdRng)
    where
        S: Sequence<Item = i64>,
    {
        for &size in &[0_usize, 1, 2, 17, 64, 300] {
            let values = (0..size)
                .map(|_| rng.random_range(-50..=50))
                .collect::<Vec<_>>();
            let mut seq = from_slice::<S>(&values);
            seq.sort_by_key(|&x| x);

            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(contents(&seq), expected, "input_len={size}");
        }
    }

    #[test]
    fn vec_primitives() {
        check_primitives::<Vec<i64>>();
    }

    #[test]
    fn vec_deque_primitives() {
        check_primitives::<VecDeque<i64>>();
    }

    #[test]
    fn extremum_prefers_first_occurrence() {
        check_extrema::<Vec<(i64, char)>>();
        check_extrema::<VecDeque<(i64, char)>>();
    }

    #[test]
    fn sort_by_key_matches_std() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        check_sort_matches_std::<Vec<i64>>(&mut rng);
        check_sort_matches_std::<VecDeque<i64>>(&mut rng);
    }

    #[test]
    fn sort_by_key_with_derived_key() {
        let mut seq = vec!["ccc", "a", "bb"];
        Sequence::sort_by_key(&mut seq, |s| s.len());
        assert_eq!(seq, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn vec_deque_sort_after_wraparound() {
        let mut seq = VecDeque::with_capacity(4);
        seq.push_back(4);
        seq.push_back(3);
        seq.pop_front();
        seq.push_back(2);
        seq.push_back(1);
        seq.push_front(5);
        Sequence::sort_by_key(&mut seq, |&x| x);
        assert_eq!(seq, VecDeque::from(vec![1, 2, 3, 5]));
    }

    #[test]
    fn index_range_steps() {
        assert_eq!(index_range(0, 5, 1).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(index_range(1, 8, 3).collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(index_range(4, 4, 1).count(), 0);
        assert_eq!(index_range(6, 2, 1).count(), 0);
    }

    #[test]
    #[should_panic(expected = "step must be positive")]
    fn index_range_rejects_zero_step() {
        let _ = index_range(0, 3, 0);
    }

    #[test]
    #[should_panic]
    fn write_out_of_range_panics() {
        let mut seq = vec![1_i64];
        Sequence::write(&mut seq, 1, 2);
    }

    #[test]
    #[should_panic(expected = "truncate")]
    fn truncate_past_length_panics() {
        let mut seq = VecDeque::from(vec![1_i64, 2]);
        Sequence::truncate(&mut seq, 3);
    }
}
