use sequence::{Sequence, index_range};

use crate::util::at;

pub fn fold<S, B, F>(v: &S, mut f: F, init: B) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Item) -> B,
{
    let mut acc = init;
    for i in index_range(0, v.len(), 1) {
        acc = f(acc, at(v, i));
    }
    acc
}
