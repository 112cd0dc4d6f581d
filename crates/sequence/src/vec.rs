use std::cmp::Ordering;

use crate::Sequence;
use crate::util::{check_truncate, first_extremum_by_key};

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Rebind<U> = Vec<U>;

    #[inline]
    fn new() -> Self {
        Vec::new()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn append(&mut self, mut other: Self) {
        Vec::append(self, &mut other);
    }

    #[inline(always)]
    fn read(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn write(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self.as_mut_slice()[index], item)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        check_truncate(len, Vec::len(self));
        Vec::truncate(self, len);
    }

    fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.as_mut_slice().sort_unstable_by_key(f);
    }

    fn arg_min_by_key<K, F>(&self, f: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        first_extremum_by_key(self.as_slice(), f, Ordering::Less)
    }

    fn arg_max_by_key<K, F>(&self, f: F) -> Option<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        first_extremum_by_key(self.as_slice(), f, Ordering::Greater)
    }
}
