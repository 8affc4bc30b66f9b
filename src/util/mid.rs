//! Midpoints of a non-empty inclusive window `[lo, hi]`.
//!
//! Searches that move `hi` down to `mi` need the floor midpoint, searches
//! that move `lo` up to `mi` need the ceiling one. Swapping them stalls the
//! loop on a two-element window.

#[inline]
pub fn floor_mid(lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi);
    lo + (hi - lo) / 2
}

#[inline]
pub fn ceil_mid(lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi);
    lo + (hi - lo + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mid() {
        assert_eq!(floor_mid(0, 0), 0);
        assert_eq!(floor_mid(0, 1), 0);
        assert_eq!(floor_mid(3, 8), 5);
        assert_eq!(floor_mid(usize::MAX - 2, usize::MAX - 1), usize::MAX - 2);
    }

    #[test]
    fn test_ceil_mid() {
        assert_eq!(ceil_mid(0, 0), 0);
        assert_eq!(ceil_mid(0, 1), 1);
        assert_eq!(ceil_mid(3, 8), 6);
        assert_eq!(ceil_mid(0, usize::MAX - 1), usize::MAX / 2);
    }
}
