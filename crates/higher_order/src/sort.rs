use sequence::Sequence;

/// Reorders `v` by ascending `f(element)`.
///
/// Unstable: elements with equal keys may end up in any relative order.
pub fn sort_by<S, K, F>(v: &mut S, f: F)
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    v.sort_by_key(f);
}
