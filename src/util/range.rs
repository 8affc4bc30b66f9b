use core::ops::{Bound, Range, RangeBounds};

use crate::util::span::Span;

/// Convert a start bound over values to a position using the insertion points.
#[inline]
pub fn start_bound_to_idx<Q, E, F, G>(
    bound: Bound<&Q>,
    span: Span,
    bisect_left: F,
    bisect_right: G,
) -> Result<usize, E>
where
    Q: ?Sized,
    F: Fn(&Q) -> Result<usize, E>,
    G: Fn(&Q) -> Result<usize, E>,
{
    match bound {
        Bound::Included(x) => bisect_left(x),
        Bound::Excluded(x) => bisect_right(x),
        Bound::Unbounded => Ok(span.lo),
    }
}

/// Convert an end bound over values to a position using the insertion points.
#[inline]
pub fn end_bound_to_idx<Q, E, F, G>(
    bound: Bound<&Q>,
    span: Span,
    bisect_left: F,
    bisect_right: G,
) -> Result<usize, E>
where
    Q: ?Sized,
    F: Fn(&Q) -> Result<usize, E>,
    G: Fn(&Q) -> Result<usize, E>,
{
    match bound {
        Bound::Included(x) => bisect_right(x),
        Bound::Excluded(x) => bisect_left(x),
        Bound::Unbounded => Ok(span.end),
    }
}

/// Positions inside `span` whose keys fall within `range`.
#[inline]
pub fn range_to_indices<Q, R, E, F, G>(
    range: R,
    span: Span,
    bisect_left: F,
    bisect_right: G,
) -> Result<Range<usize>, E>
where
    Q: ?Sized,
    R: RangeBounds<Q>,
    F: Fn(&Q) -> Result<usize, E> + Copy,
    G: Fn(&Q) -> Result<usize, E> + Copy,
{
    let start = start_bound_to_idx(range.start_bound(), span, bisect_left, bisect_right)?;
    let end = end_bound_to_idx(range.end_bound(), span, bisect_left, bisect_right)?;
    Ok(start..end.max(start))
}
