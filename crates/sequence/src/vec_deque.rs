use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::Sequence;
use crate::util::{check_truncate, first_extremum_by_key};

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Rebind<U> = VecDeque<U>;

    #[inline]
    fn new() -> Self {
        VecDeque::new()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn append(&mut self, mut other: Self) {
        VecDeque::append(self, &mut other);
    }

    #[inline(always)]
    fn read(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn write(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        check_truncate(len, VecDeque::len(self));
        VecDeque::truncate(self, len);
    }

    fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        // Ring buffer may wrap; sort needs a single slice.
        self.make_contiguous().sort_unstable_by_key(f);
    }

    fn arg_min_by_key<K, F>(&self, f: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        first_extremum_by_key(self, f, Ordering::Less)
    }

    fn arg_max_by_key<K, F>(&self, f: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        first_extremum_by_key(self, f, Ordering::Greater)
    }
}
