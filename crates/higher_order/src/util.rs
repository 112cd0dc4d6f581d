use sequence::Sequence;

/// Reads an index the caller has already bounded by `len()`.
///
/// An absent value here means the traversal itself is wrong, so it panics
/// instead of substituting a default.
#[inline(always)]
pub(crate) fn at<S: Sequence>(v: &S, index: usize) -> &S::Item {
    match v.read(index) {
        Some(item) => item,
        None => panic!(
            "index {index} out of range for sequence of length {}",
            v.len()
        ),
    }
}
