use core::cmp::Reverse;
use core::fmt;

use num_traits::float::FloatCore;

use crate::error::Error;

/// A function from positions to comparable keys.
///
/// Every search in [`crate::Probe`] goes through this trait. Errors returned
/// by [`KeyFn::key_at`] are propagated to the caller untouched.
pub trait KeyFn {
    /// The key produced for a position.
    type Key;

    fn key_at(&self, pos: usize) -> Result<Self::Key, Error>;
}

/// Extractor used by sequence-backed probes that compare elements directly.
pub type Identity<'a, T> = fn(&'a T) -> &'a T;

/// Keys taken from a backing slice, optionally mapped through an extractor.
///
/// Positions outside the slice fail with [`Error::OutOfBounds`].
pub struct Indexed<'a, T, E> {
    data: &'a [T],
    extract: E,
}

impl<'a, T, E> Indexed<'a, T, E> {
    #[inline]
    pub fn new(data: &'a [T], extract: E) -> Self {
        Self { data, extract }
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T> Indexed<'a, T, Identity<'a, T>> {
    #[inline]
    pub fn identity(data: &'a [T]) -> Self {
        Self::new(data, |v| v)
    }
}

impl<'a, T, E, K> KeyFn for Indexed<'a, T, E>
where
    E: Fn(&'a T) -> K,
{
    type Key = K;

    #[inline]
    fn key_at(&self, pos: usize) -> Result<K, Error> {
        match self.data.get(pos) {
            Some(value) => Ok((self.extract)(value)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index = pos, len = self.data.len(), "key probe out of bounds");

                Err(Error::OutOfBounds {
                    index: pos,
                    len: self.data.len(),
                })
            }
        }
    }
}

impl<T, E: Clone> Clone for Indexed<'_, T, E> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            extract: self.extract.clone(),
        }
    }
}

impl<T, E: Copy> Copy for Indexed<'_, T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for Indexed<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexed").field("data", &self.data).finish_non_exhaustive()
    }
}

/// Keys computed directly from positions by an infallible function.
#[derive(Clone, Copy)]
pub struct Positional<G>(pub G);

impl<G, K> KeyFn for Positional<G>
where
    G: Fn(usize) -> K,
{
    type Key = K;

    #[inline]
    fn key_at(&self, pos: usize) -> Result<K, Error> {
        Ok((self.0)(pos))
    }
}

/// Keys computed directly from positions by a function that may refuse a position.
#[derive(Clone, Copy)]
pub struct Fallible<G>(pub G);

impl<G, K> KeyFn for Fallible<G>
where
    G: Fn(usize) -> Result<K, Error>,
{
    type Key = K;

    #[inline]
    fn key_at(&self, pos: usize) -> Result<K, Error> {
        (self.0)(pos)
    }
}

impl<G> fmt::Debug for Positional<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Positional(..)")
    }
}

impl<G> fmt::Debug for Fallible<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fallible(..)")
    }
}

/// Absolute difference between two keys, used by the closest-value lookups.
pub trait Distance {
    type Output: PartialOrd;

    fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! impl_distance_int {
    ($(($t:ty, $out:ty)),*) => {
        $(
            impl Distance for $t {
                type Output = $out;

                #[inline]
                fn distance(&self, other: &Self) -> $out {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

macro_rules! impl_distance_float {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                type Output = $t;

                #[inline]
                fn distance(&self, other: &Self) -> $t {
                    FloatCore::abs(*self - *other)
                }
            }
        )*
    };
}

impl_distance_int!(
    (u8, u8),
    (u16, u16),
    (u32, u32),
    (u64, u64),
    (u128, u128),
    (usize, usize),
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize)
);
impl_distance_float!(f32, f64);

impl<T: Distance> Distance for Reverse<T> {
    type Output = T::Output;

    #[inline]
    fn distance(&self, other: &Self) -> T::Output {
        self.0.distance(&other.0)
    }
}

impl<T: Distance + ?Sized> Distance for &T {
    type Output = T::Output;

    #[inline]
    fn distance(&self, other: &Self) -> T::Output {
        (**self).distance(*other)
    }
}
