use core::ops::Range;

use crate::error::Error;

/// A normalized search range.
///
/// Callers describe ranges inclusively as `[lo, hi]`; a span stores the
/// half-open form `lo..end` with `end = hi + 1`. `end` never drops below
/// `lo`, so an empty span still remembers where it starts, which is the
/// insertion point into it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The first searchable position.
    pub lo: usize,
    /// One past the last searchable position.
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(lo: usize, end: usize) -> Self {
        Self {
            lo,
            end: end.max(lo),
        }
    }

    /// Build a span from inclusive bounds. `lo > hi` yields an empty span at `lo`.
    pub fn inclusive(lo: usize, hi: usize) -> Result<Self, Error> {
        let end = hi
            .checked_add(1)
            .ok_or(Error::InvalidArgument("`hi` must be below usize::MAX"))?;
        Ok(Self::new(lo, end))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.lo
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.lo
    }

    /// The inclusive upper bound, or `None` for an empty span.
    #[inline]
    pub fn hi(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.lo <= pos && pos < self.end
    }

    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.lo..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.to_range()
    }
}
