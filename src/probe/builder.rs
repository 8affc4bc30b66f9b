use crate::error::Error;
use crate::probe::key::{Fallible, Identity, Indexed, KeyFn, Positional};
use crate::probe::search::Probe;
use crate::util::Span;

/// Builder that normalizes search arguments into a [`Probe`].
///
/// Bounds are inclusive. With a backing sequence both are optional: `lo`
/// defaults to 0 and `hi` to the last index. Without one, the key function
/// receives positions directly and both bounds are required.
///
/// # Example
///
/// ```
/// use more_bisect::Builder;
///
/// let pairs = [("a", 1), ("b", 2), ("a", 3)];
/// let probe = Builder::new().over_by(&pairs, |p| p.1).unwrap();
/// assert_eq!(probe.first_pos_eq(&2).unwrap(), Some(1));
///
/// let squares = Builder::new().lo(0).hi(99).positional(|i| i * i).unwrap();
/// assert_eq!(squares.bisect_left(&50).unwrap(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder {
    lo: Option<usize>,
    hi: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first searchable position.
    pub fn lo(mut self, lo: usize) -> Self {
        self.lo = Some(lo);
        self
    }

    /// Set the last searchable position.
    pub fn hi(mut self, hi: usize) -> Self {
        self.hi = Some(hi);
        self
    }

    /// Set both bounds from an inclusive range.
    pub fn range(self, range: core::ops::RangeInclusive<usize>) -> Self {
        let (lo, hi) = range.into_inner();
        self.lo(lo).hi(hi)
    }

    /// Search the elements of `data` themselves.
    pub fn over<'a, T>(
        &self,
        data: &'a [T],
    ) -> Result<Probe<Indexed<'a, T, Identity<'a, T>>>, Error> {
        let span = self.sequence_span(data.len())?;
        Ok(Probe::new(span, Indexed::identity(data)))
    }

    /// Search keys extracted from the elements of `data`.
    pub fn over_by<'a, T, K, E>(
        &self,
        data: &'a [T],
        extract: E,
    ) -> Result<Probe<Indexed<'a, T, E>>, Error>
    where
        E: Fn(&'a T) -> K,
    {
        let span = self.sequence_span(data.len())?;
        Ok(Probe::new(span, Indexed::new(data, extract)))
    }

    /// Search a function of positions. Both bounds must be set.
    pub fn positional<K, G>(&self, key: G) -> Result<Probe<Positional<G>>, Error>
    where
        G: Fn(usize) -> K,
    {
        self.explicit(Positional(key))
    }

    /// Search a function of positions that may reject a position with an error.
    /// Both bounds must be set.
    pub fn fallible<K, G>(&self, key: G) -> Result<Probe<Fallible<G>>, Error>
    where
        G: Fn(usize) -> Result<K, Error>,
    {
        self.explicit(Fallible(key))
    }

    fn explicit<F: KeyFn>(&self, key: F) -> Result<Probe<F>, Error> {
        let lo = self
            .lo
            .ok_or(Error::InvalidArgument("`lo` is required without a sequence"))?;
        let hi = self
            .hi
            .ok_or(Error::InvalidArgument("`hi` is required without a sequence"))?;
        let span = Span::inclusive(lo, hi)?;
        trace_span(span);
        Ok(Probe::new(span, key))
    }

    fn sequence_span(&self, len: usize) -> Result<Span, Error> {
        let lo = self.lo.unwrap_or(0);
        let span = match self.hi {
            Some(hi) => Span::inclusive(lo, hi)?,
            None => Span::new(lo, len),
        };
        trace_span(span);
        Ok(span)
    }
}

#[inline]
fn trace_span(_span: Span) {
    #[cfg(feature = "tracing")]
    tracing::trace!(lo = _span.lo, end = _span.end, "normalized search range");
}
