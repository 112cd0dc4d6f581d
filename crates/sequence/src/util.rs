use std::cmp::Ordering;

/// Walks `items` once and keeps the element whose key compares as `wanted`
/// against every earlier candidate. Equal keys never replace the held
/// element, so the first occurrence of the extremum wins.
#[inline]
pub(crate) fn first_extremum_by_key<'a, T, K, I, F>(
    items: I,
    mut f: F,
    wanted: Ordering,
) -> Option<&'a T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(K, &'a T)> = None;
    for item in items {
        let key = f(item);
        let replace = match &best {
            Some((best_key, _)) => key.cmp(best_key) == wanted,
            None => true,
        };
        if replace {
            best = Some((key, item));
        }
    }
    best.map(|(_, item)| item)
}

#[inline(always)]
pub(crate) fn check_truncate(len: usize, current: usize) {
    assert!(
        len <= current,
        "truncate to {len} exceeds sequence length {current}"
    );
}
