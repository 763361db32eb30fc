//! Signed index normalization shared by every read path.

/// Maps a signed index onto a position in `[0, len)`.
///
/// Non-negative indices count from the front. Negative indices count back
/// from the end: `-1` is the last element and `-len` the first.
///
/// Returns `None` if the normalized position does not address a live element.
#[must_use]
pub(crate) fn normalize_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let position = index.unsigned_abs();
        (position < len).then_some(position)
    } else {
        let back = index.unsigned_abs();
        (back <= len).then(|| len - back)
    }
}
