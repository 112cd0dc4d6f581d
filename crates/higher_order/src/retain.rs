use sequence::{Sequence, index_range};

use crate::util::at;

/// Removes every element for which `f` returns `false`, keeping the
/// survivors in their original relative order.
///
/// Single left-to-right pass over the original index space with no second
/// sequence:
/// - `del` counts rejected elements seen so far.
/// - A kept element at `i` moves to `i - del` when `del > 0`.
/// - The sequence is truncated to `len - del` at the end.
///
/// The move is a swap. Positions `[i + 1 - del, i + 1)` only ever hold
/// rejected elements after step `i`, so the final truncation drops exactly
/// those.
pub fn retain<S, F>(v: &mut S, mut f: F)
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    let len = v.len();
    let mut del = 0_usize;

    for i in index_range(0, len, 1) {
        let keep = f(at(v, i));
        if !keep {
            del += 1;
        } else if del > 0 {
            v.swap(i - del, i);
        }
    }

    if del > 0 {
        v.truncate(len - del);
    }
}
