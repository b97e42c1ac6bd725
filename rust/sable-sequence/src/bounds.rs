//! Resolution of relative sequence positions.
//!
//! Position-taking operations accept an `isize`: a non-negative value is an
//! absolute index, a negative value counts back from the end of the sequence.
//! Resolution always clamps into the valid range instead of failing.

/// Resolves a relative position against `len`, clamping to `0..=len`.
///
/// A negative `pos` is interpreted as `len - |pos|`, floored at 0. A
/// non-negative `pos` is capped at `len`. The result is therefore always a
/// valid boundary for slicing, though not necessarily a valid element index.
#[inline]
pub fn resolve(pos: isize, len: usize) -> usize {
    if pos < 0 {
        len.saturating_sub(pos.unsigned_abs())
    } else {
        (pos as usize).min(len)
    }
}

/// Resolves the starting position of a forward search.
///
/// `None` means "search from the beginning". The result may equal `len`,
/// in which case the search range is empty.
#[inline]
pub fn resolve_search_start(from: Option<isize>, len: usize) -> usize {
    resolve(from.unwrap_or(0), len)
}

/// Resolves the starting position of a backward search.
///
/// `None` means "search from the last element". A negative position counting
/// back past the start of the sequence yields `None`: there is nothing to
/// search. A position at or past the end clamps to the last element.
#[inline]
pub fn resolve_search_end(from: Option<isize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match from {
        None => Some(len - 1),
        Some(pos) if pos >= 0 => Some((pos as usize).min(len - 1)),
        Some(pos) => {
            let back = pos.unsigned_abs();
            if back > len { None } else { Some(len - back) }
        }
    }
}
