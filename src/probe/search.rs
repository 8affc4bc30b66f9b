//! The search loops.
//!
//! Every loop works on an inclusive window `[lo, hi]` taken from the probe's
//! span and never evaluates a key outside the span.

use core::borrow::Borrow;
use core::ops::{Range, RangeBounds};

use crate::error::Error;
use crate::probe::key::{Distance, Identity, Indexed, KeyFn};
use crate::util::Span;
use crate::util::mid::{ceil_mid, floor_mid};
use crate::util::range::range_to_indices;

/// A normalized search: an inclusive position range plus a key function.
///
/// Point lookups return `Ok(None)` when no position qualifies. Errors only
/// come from the key function.
///
/// # Example
///
/// ```
/// use more_bisect::Probe;
///
/// let a = [1, 3, 3, 3, 3, 4, 5, 6, 7, 8, 9, 10];
/// let probe = Probe::over(&a);
///
/// assert_eq!(probe.first_pos_eq(&3).unwrap(), Some(1));
/// assert_eq!(probe.last_pos_eq(&3).unwrap(), Some(4));
/// assert_eq!(probe.first_pos_gt(&3).unwrap(), Some(5));
/// assert_eq!(probe.bisect_right(&3).unwrap(), 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Probe<F> {
    span: Span,
    key: F,
}

impl<'a, T> Probe<Indexed<'a, T, Identity<'a, T>>> {
    /// Search all of `data` by its elements.
    #[inline]
    pub fn over(data: &'a [T]) -> Self {
        Self::new(Span::new(0, data.len()), Indexed::identity(data))
    }
}

impl<F> Probe<F> {
    #[inline]
    pub fn new(span: Span, key: F) -> Self {
        Self { span, key }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn key(&self) -> &F {
        &self.key
    }

    #[inline]
    fn window(&self) -> Option<(usize, usize)> {
        self.span.hi().map(|hi| (self.span.lo, hi))
    }
}

impl<F: KeyFn> Probe<F> {
    /// Any position whose key equals `x`.
    pub fn any_pos_eq<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(None);
        };
        while lo < hi {
            let mi = floor_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value == x {
                return Ok(Some(mi));
            }
            if value < x {
                lo = mi + 1;
            } else if mi == lo {
                return Ok(None);
            } else {
                hi = mi - 1;
            }
        }
        self.check::<Q, _>(lo, |value| value == x)
    }

    /// The smallest position whose key equals `x`.
    pub fn first_pos_eq<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(None);
        };
        while lo < hi {
            let mi = floor_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value < x {
                lo = mi + 1;
            } else if value > x {
                if mi == lo {
                    return Ok(None);
                }
                hi = mi - 1;
            } else {
                hi = mi;
            }
        }
        self.check::<Q, _>(lo, |value| value == x)
    }

    /// The largest position whose key equals `x`.
    pub fn last_pos_eq<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(None);
        };
        while lo < hi {
            let mi = ceil_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value < x {
                // Everything up to `hi` is below `x`.
                if mi == hi {
                    return Ok(None);
                }
                lo = mi + 1;
            } else if value > x {
                hi = mi - 1;
            } else {
                lo = mi;
            }
        }
        self.check::<Q, _>(lo, |value| value == x)
    }

    /// The largest position whose key is less than `x`.
    pub fn last_pos_lt<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.last_pos_where::<Q, _>(|value| value < x)
    }

    /// The largest position whose key is less than or equal to `x`.
    pub fn last_pos_le<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.last_pos_where::<Q, _>(|value| value <= x)
    }

    /// The smallest position whose key is greater than `x`.
    pub fn first_pos_gt<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(None);
        };
        while lo < hi {
            let mi = floor_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value <= x {
                lo = mi + 1;
            } else {
                hi = mi;
            }
        }
        self.check::<Q, _>(lo, |value| value > x)
    }

    /// Where `x` would be inserted before any equal keys.
    ///
    /// Same as [`slice::partition_point`] with `key < x`, offset by `lo`.
    /// An empty range yields `lo`.
    pub fn bisect_left<Q>(&self, x: &Q) -> Result<usize, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(self.span.lo);
        };
        let last = self.key.key_at(hi)?;
        let last: &Q = last.borrow();
        if x > last {
            return Ok(self.span.end);
        }
        while lo < hi {
            let mi = floor_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value < x {
                lo = mi + 1;
            } else {
                hi = mi;
            }
        }
        Ok(lo)
    }

    /// Where `x` would be inserted after any equal keys.
    ///
    /// Same as [`slice::partition_point`] with `key <= x`, offset by `lo`.
    /// An empty range yields `lo`.
    pub fn bisect_right<Q>(&self, x: &Q) -> Result<usize, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(self.span.lo);
        };
        let last = self.key.key_at(hi)?;
        let last: &Q = last.borrow();
        if x >= last {
            return Ok(self.span.end);
        }
        while lo < hi {
            let mi = floor_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if value > x {
                hi = mi;
            } else {
                lo = mi + 1;
            }
        }
        Ok(lo)
    }

    /// The position whose key is closest to `x`.
    ///
    /// Compares the last key not above `x` with the first key above it; an
    /// exact tie goes to the later one. Only `None` for an empty range.
    pub fn last_closest_to<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + Distance + ?Sized,
    {
        let Some((lo, hi)) = self.window() else {
            return Ok(None);
        };
        let i = match self.first_pos_gt(x)? {
            None => return Ok(Some(hi)),
            Some(i) if i == lo => return Ok(Some(lo)),
            Some(i) => i,
        };
        let before = self.distance_at(i - 1, x)?;
        let at = self.distance_at(i, x)?;
        Ok(Some(if before < at { i - 1 } else { i }))
    }

    /// The position whose key is closest to `x`.
    ///
    /// Compares the last key below `x` with the first key not below it; an
    /// exact tie goes to the earlier one. Only `None` for an empty range.
    pub fn first_closest_to<Q>(&self, x: &Q) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + Distance + ?Sized,
    {
        let Some((lo, hi)) = self.window() else {
            return Ok(None);
        };
        let i = match self.last_pos_lt(x)? {
            None => return Ok(Some(lo)),
            Some(i) if i == hi => return Ok(Some(hi)),
            Some(i) => i,
        };
        let after = self.distance_at(i + 1, x)?;
        let at = self.distance_at(i, x)?;
        Ok(Some(if after < at { i + 1 } else { i }))
    }

    /// Positions whose keys equal `x`.
    pub fn equal_range<Q>(&self, x: &Q) -> Result<Range<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let start = self.bisect_left(x)?;
        let end = self.bisect_right(x)?;
        Ok(start..end.max(start))
    }

    /// Number of positions whose keys equal `x`.
    pub fn count_eq<Q>(&self, x: &Q) -> Result<usize, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.equal_range(x)?.len())
    }

    /// Positions whose keys fall within `range`.
    ///
    /// ```
    /// use more_bisect::Probe;
    ///
    /// let a = [1, 2, 2, 4, 4, 7];
    /// let probe = Probe::over(&a);
    /// assert_eq!(probe.range_indices(2..=4).unwrap(), 1..5);
    /// assert_eq!(probe.range_indices(3..).unwrap(), 3..6);
    /// ```
    pub fn range_indices<Q, R>(&self, range: R) -> Result<Range<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: PartialOrd + ?Sized,
        R: RangeBounds<Q>,
    {
        range_to_indices(
            range,
            self.span,
            |x| self.bisect_left(x),
            |x| self.bisect_right(x),
        )
    }

    fn last_pos_where<Q, P>(&self, pred: P) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: ?Sized,
        P: Fn(&Q) -> bool,
    {
        let Some((mut lo, mut hi)) = self.window() else {
            return Ok(None);
        };
        while lo < hi {
            let mi = ceil_mid(lo, hi);
            let key = self.key.key_at(mi)?;
            let value: &Q = key.borrow();
            if pred(value) {
                lo = mi;
            } else {
                hi = mi - 1;
            }
        }
        self.check::<Q, _>(lo, pred)
    }

    #[inline]
    fn check<Q, P>(&self, pos: usize, pred: P) -> Result<Option<usize>, Error>
    where
        F::Key: Borrow<Q>,
        Q: ?Sized,
        P: FnOnce(&Q) -> bool,
    {
        let key = self.key.key_at(pos)?;
        let value: &Q = key.borrow();
        Ok(pred(value).then_some(pos))
    }

    #[inline]
    fn distance_at<Q>(&self, pos: usize, x: &Q) -> Result<Q::Output, Error>
    where
        F::Key: Borrow<Q>,
        Q: Distance + ?Sized,
    {
        let key = self.key.key_at(pos)?;
        let value: &Q = key.borrow();
        Ok(Distance::distance(value, x))
    }
}
