use sequence::{Sequence, index_range};

use crate::util::at;

/// Same length and order as `v`, each element replaced by `f(element)`.
pub fn map<S, B, F>(v: &S, mut f: F) -> S::Rebind<B>
where
    S: Sequence,
    F: FnMut(&S::Item) -> B,
{
    let len = v.len();
    let mut out: S::Rebind<B> = Sequence::with_capacity(len);
    for i in index_range(0, len, 1) {
        out.push(f(at(v, i)));
    }
    out
}

/// Concatenates the sub-sequences produced by `f`, in order.
pub fn flatmap<S, B, F>(v: &S, mut f: F) -> S::Rebind<B>
where
    S: Sequence,
    F: FnMut(&S::Item) -> S::Rebind<B>,
{
    let mut out: S::Rebind<B> = Sequence::new();
    for i in index_range(0, v.len(), 1) {
        out.append(f(at(v, i)));
    }
    out
}

pub fn filter<S, F>(v: &S, mut f: F) -> S
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut out = S::new();
    for i in index_range(0, v.len(), 1) {
        let item = at(v, i);
        if f(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Keeps the `Some` results of `f`, in original order.
pub fn filter_map<S, B, F>(v: &S, mut f: F) -> S::Rebind<B>
where
    S: Sequence,
    F: FnMut(&S::Item) -> Option<B>,
{
    let mut out: S::Rebind<B> = Sequence::new();
    for i in index_range(0, v.len(), 1) {
        if let Some(value) = f(at(v, i)) {
            out.push(value);
        }
    }
    out
}
