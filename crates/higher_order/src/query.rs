use sequence::{Sequence, index_range};

use crate::util::at;

/// First element satisfying `f`. Stops scanning at the first hit.
pub fn find<S, F>(v: &S, mut f: F) -> Option<&S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    for i in index_range(0, v.len(), 1) {
        let item = at(v, i);
        if f(item) {
            return Some(item);
        }
    }
    None
}

/// Index of the first element satisfying `f`. Stops scanning at the first hit.
pub fn position<S, F>(v: &S, mut f: F) -> Option<usize>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    index_range(0, v.len(), 1).find(|&i| f(at(v, i)))
}

/// `true` on an empty sequence; stops at the first failing element.
pub fn all<S, F>(v: &S, mut f: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    for i in index_range(0, v.len(), 1) {
        if !f(at(v, i)) {
            return false;
        }
    }
    true
}

/// `false` on an empty sequence; stops at the first satisfying element.
pub fn any<S, F>(v: &S, mut f: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    for i in index_range(0, v.len(), 1) {
        if f(at(v, i)) {
            return true;
        }
    }
    false
}

/// Visits every element.
pub fn count<S, F>(v: &S, mut f: F) -> usize
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    let mut n = 0_usize;
    for i in index_range(0, v.len(), 1) {
        if f(at(v, i)) {
            n += 1;
        }
    }
    n
}

/// Element with the smallest key. Ties go to the earliest element.
pub fn arg_min<S, K, F>(v: &S, f: F) -> Option<&S::Item>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    v.arg_min_by_key(f)
}

/// Element with the largest key. Ties go to the earliest element.
pub fn arg_max<S, K, F>(v: &S, f: F) -> Option<&S::Item>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    v.arg_max_by_key(f)
}
