//! Tick label formatting.
//!
//! Ticks come out of the locator as `i * step`, which carries binary rounding
//! noise (`3 * 0.2 == 0.6000000000000001`). Labels use the fewest decimals `p`,
//! up to [`MAX_PRECISION`], for which `value * 10^p` lies within `1e-6` of an
//! integer.

use crate::util::binary_search_min;

/// Largest number of decimals a label is rendered with.
pub const MAX_PRECISION: usize = 6;

const LABEL_TOLERANCE: f64 = 1e-6;

/// Smallest number of decimals `p` (at most [`MAX_PRECISION`]) for which
/// `value * 10^p` lies within `1e-6` of an integer.
///
/// Values with no such `p` report [`MAX_PRECISION`], so `0.1000004` keeps all
/// six decimals. Non-finite values report zero.
///
/// # Example
///
/// ```
/// use trueno_ticks::format::tick_precision;
///
/// assert_eq!(tick_precision(20.0), 0);
/// assert_eq!(tick_precision(0.6000000000000001), 1);
/// assert_eq!(tick_precision(-0.25), 2);
/// assert_eq!(tick_precision(1.0 / 3.0), 6);
/// assert_eq!(tick_precision(0.1000004), 6);
/// ```
#[must_use]
pub fn tick_precision(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }

    let near_integral = |p: i64| {
        let scaled = value * 10f64.powi(p as i32);
        (scaled - scaled.round()).abs() < LABEL_TOLERANCE
    };

    // `near_integral` alone is not monotone (1.0000003 passes at 0 and fails
    // at 1), but "passes at some q <= p" is.
    let precision = binary_search_min(0, MAX_PRECISION as i64, |p| (0..=p).any(near_integral));

    precision as usize
}

/// Format a tick value with [`tick_precision`] decimals.
///
/// Values that round to zero are rendered as `"0"`, never `"-0"`.
///
/// # Example
///
/// ```
/// use trueno_ticks::format::format_tick;
///
/// assert_eq!(format_tick(0.6000000000000001), "0.6");
/// assert_eq!(format_tick(-2.5), "-2.5");
/// assert_eq!(format_tick(100.0), "100");
/// ```
#[must_use]
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = tick_precision(value);
    let rounded = (value * 10f64.powi(precision as i32)).round();
    let value = if rounded.abs() < 0.5 { 0.0 } else { value };

    format!("{value:.precision$}")
}

/// Format every tick in `ticks`.
#[must_use]
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    ticks.iter().copied().map(format_tick).collect()
}
