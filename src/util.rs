//! Small numeric helpers shared by the locator and label formatting.

/// Find the smallest integer in `[lo, hi]` that satisfies `predicate`.
///
/// The predicate must be monotone over the interval: once it holds for some
/// value it holds for every larger one. `hi` itself is never tested, so it is
/// returned when nothing in `[lo, hi)` satisfies the predicate. Returns `lo`
/// when `lo >= hi`.
///
/// # Example
///
/// ```
/// use trueno_ticks::util::binary_search_min;
///
/// assert_eq!(binary_search_min(0, 100, |x| x * x >= 50), 8);
/// assert_eq!(binary_search_min(0, 10, |_| false), 10);
/// ```
pub fn binary_search_min<F>(mut lo: i64, mut hi: i64, predicate: F) -> i64
where
    F: Fn(i64) -> bool,
{
    while lo < hi {
        // Rounds down for negative bounds too, so `mid < hi`.
        let mid = lo + (hi - lo) / 2;
        if predicate(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
