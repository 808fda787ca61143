//! Nice-number tick location for numeric axes.
//!
//! Given a closed interval `[vmin, vmax]`, [`TickLocator`] picks a step size of
//! the form `s * 10^k` (with `s` drawn from the configured step multipliers)
//! and returns every multiple of that step needed to cover the interval.
//!
//! # Algorithm
//!
//! 1. **Step search**: starting from the decade of `range / max_ticks`, try each
//!    multiplier in ascending order, one decade at a time. Candidates producing
//!    more than `max_ticks` ticks are discarded; among the rest the one whose
//!    grid spans the shortest total length (`tick_count * step`) wins, earlier
//!    (smaller) steps winning near-ties. The search stops at the first
//!    candidate wider than the range.
//! 2. **Enumeration**: emit `i * step` for every integer `i` from
//!    `floor(vmin / step)` to `ceil(vmax / step)`.
//!
//! Every `floor`/`ceil` is shifted inward by [`TOLERANCE`] so a value sitting on
//! a grid line is not pushed into the next bucket by rounding noise.
//!
//! # Example
//!
//! ```
//! use trueno_ticks::TickLocator;
//!
//! let locator = TickLocator::new();
//! let ticks = locator.ticks(0.0, 100.0)?;
//! assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
//! # Ok::<(), trueno_ticks::Error>(())
//! ```

use crate::config::LocatorConfig;
use crate::error::{Error, Result};
use log::{debug, trace, warn};

/// Tolerance applied to bucket boundaries and length comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of decades the step search visits.
///
/// Step sizes grow at least tenfold per decade and the search starts within
/// `log10(max_ticks) + 1` decades of the range, so a well-formed request stops
/// long before this. It only trips when floating-point underflow stalls the
/// multiplier, e.g. for a subnormal range.
pub const MAX_DECADES: usize = 32;

/// Axis tick locator.
///
/// Immutable once built: every call is fully determined by its arguments and
/// the configuration, so one locator can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickLocator {
    config: LocatorConfig,
}

impl TickLocator {
    /// Create a locator with the default configuration
    /// (`max_ticks = 10`, steps `[1, 2, 2.5, 5]`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locator from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`LocatorConfig::validate`] error if `max_ticks` is too
    /// large or the step candidates are unusable.
    pub fn with_config(config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start building a locator.
    #[must_use]
    pub fn builder() -> TickLocatorBuilder {
        TickLocatorBuilder::default()
    }

    /// The configuration this locator was built with.
    #[must_use]
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Maximum number of ticks per axis.
    #[must_use]
    pub fn max_ticks(&self) -> usize {
        self.config.max_ticks
    }

    /// Step multipliers, ascending.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.config.steps
    }

    /// Find ticks covering `[vmin, vmax]`.
    ///
    /// A degenerate range (`vmin == vmax`) yields the single tick `[vmin]`.
    ///
    /// # Errors
    ///
    /// - [`Error::NonFiniteRange`] if a bound or the span `vmax - vmin` is not
    ///   finite. This is checked first, so `(inf, 0)` reports it too.
    /// - [`Error::InvalidRange`] if `vmin > vmax`.
    /// - [`Error::StepSearchExhausted`] if no step yields at most `max_ticks` ticks.
    pub fn ticks(&self, vmin: f64, vmax: f64) -> Result<Vec<f64>> {
        match self.best_step(vmin, vmax)? {
            Some(step) => Ok(enumerate(vmin, vmax, step)),
            None => Ok(vec![vmin]),
        }
    }

    /// Find the step size [`ticks`](Self::ticks) would use for `[vmin, vmax]`.
    ///
    /// Returns `None` for a degenerate range, which has a single tick and no step.
    ///
    /// # Errors
    ///
    /// Same as [`ticks`](Self::ticks).
    pub fn best_step(&self, vmin: f64, vmax: f64) -> Result<Option<f64>> {
        check_range(vmin, vmax)?;
        if vmin == vmax {
            return Ok(None);
        }
        self.search_step(vmin, vmax).map(Some)
    }

    fn search_step(&self, vmin: f64, vmax: f64) -> Result<f64> {
        let max_ticks = self.config.max_ticks;
        let limit = max_ticks as f64;
        let range = vmax - vmin;

        // With max_ticks == 0 this is infinite, so the first candidate already
        // overflows the range and the search reports exhaustion.
        let raw_step = range / limit;
        let mut multiplier = 10f64.powf(raw_step.log10().floor());

        let mut best_step = None;
        let mut best_length = f64::MAX;

        for _ in 0..MAX_DECADES {
            for &step in &self.config.steps {
                let step_size = multiplier * step;
                if step_size > range {
                    // Steps only grow from here on.
                    return match best_step {
                        Some(step) => {
                            debug!("range [{vmin}, {vmax}]: step {step}, span {best_length}");
                            Ok(step)
                        }
                        None => Err(Error::StepSearchExhausted { max_ticks }),
                    };
                }

                let (lbound, ubound) = grid_bounds(vmin, vmax, step_size);
                let tick_count = ubound - lbound + 1.0;
                if tick_count > limit {
                    trace!("step {step_size}: {tick_count} ticks exceeds {max_ticks}");
                    continue;
                }

                let length = tick_count * step_size;
                trace!("step {step_size}: {tick_count} ticks spanning {length}");
                if best_length > length + TOLERANCE {
                    best_step = Some(step_size);
                    best_length = length;
                }
            }
            multiplier *= 10.0;
        }

        warn!("step search for [{vmin}, {vmax}] stopped after {MAX_DECADES} decades");
        Err(Error::StepSearchExhausted { max_ticks })
    }
}

/// Builder for [`TickLocator`].
#[derive(Debug, Clone, Default)]
pub struct TickLocatorBuilder {
    config: LocatorConfig,
}

impl TickLocatorBuilder {
    /// Set the maximum number of ticks.
    #[must_use]
    pub fn max_ticks(mut self, max_ticks: usize) -> Self {
        self.config.max_ticks = max_ticks;
        self
    }

    /// Set the step multipliers (each in `[1, 10)`, strictly ascending).
    #[must_use]
    pub fn steps(mut self, steps: impl Into<Vec<f64>>) -> Self {
        self.config.steps = steps.into();
        self
    }

    /// Build the locator.
    ///
    /// # Errors
    ///
    /// Same as [`TickLocator::with_config`].
    pub fn build(self) -> Result<TickLocator> {
        TickLocator::with_config(self.config)
    }
}

/// Rejects ranges the search cannot handle.
///
/// Finiteness is checked before ordering. Finite bounds whose span overflows
/// (e.g. `[-1e308, 1e308]`) are non-finite too: the step would be of the same
/// magnitude and the bracketing ticks would overflow to infinity.
fn check_range(vmin: f64, vmax: f64) -> Result<()> {
    if !vmin.is_finite() || !vmax.is_finite() || !(vmax - vmin).is_finite() {
        return Err(Error::NonFiniteRange { vmin, vmax });
    }
    if vmin > vmax {
        return Err(Error::InvalidRange { vmin, vmax });
    }
    Ok(())
}

/// Integer indices (as floats) of the first and last grid lines covering the range.
fn grid_bounds(vmin: f64, vmax: f64, step: f64) -> (f64, f64) {
    (
        (vmin / step + TOLERANCE).floor(),
        (vmax / step - TOLERANCE).ceil(),
    )
}

fn enumerate(vmin: f64, vmax: f64, step: f64) -> Vec<f64> {
    let (lbound, ubound) = grid_bounds(vmin, vmax, step);
    let count = (ubound - lbound + 1.0) as usize;
    (0..count).map(|k| (lbound + k as f64) * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_ticks(actual: &[f64], expected: &[f64]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "tick count: {actual:?} vs {expected:?}"
        );
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_default_config() {
        let locator = TickLocator::new();
        assert_eq!(locator.max_ticks(), 10);
        assert_eq!(locator.steps(), &[1.0, 2.0, 2.5, 5.0]);
    }

    #[test]
    fn test_ticks_zero_to_hundred() {
        // Step 10 would need 11 ticks, so the next candidate wins.
        let locator = TickLocator::new();
        let step = locator
            .best_step(0.0, 100.0)
            .expect("search should succeed");
        assert_eq!(step, Some(20.0));

        let ticks = locator.ticks(0.0, 100.0).expect("operation should succeed");
        assert_ticks(&ticks, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_ticks_unit_interval() {
        let locator = TickLocator::new();
        let step = locator.best_step(0.0, 1.0).expect("search should succeed");
        assert_relative_eq!(step.expect("non-degenerate"), 0.2);

        let ticks = locator.ticks(0.0, 1.0).expect("operation should succeed");
        assert_ticks(&ticks, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_zero_max_ticks_exhausts_search() {
        let locator = TickLocator::builder()
            .max_ticks(0)
            .build()
            .expect("valid config");
        let err = locator
            .ticks(0.0, 100.0)
            .expect_err("no step can satisfy zero ticks");
        assert_eq!(err, Error::StepSearchExhausted { max_ticks: 0 });
    }

    #[test]
    fn test_single_max_tick_exhausts_search() {
        // One tick can never cover a non-empty range.
        let locator = TickLocator::builder()
            .max_ticks(1)
            .build()
            .expect("valid config");
        assert!(matches!(
            locator.ticks(0.0, 1.0),
            Err(Error::StepSearchExhausted { max_ticks: 1 })
        ));
    }

    #[test]
    fn test_invalid_range() {
        let locator = TickLocator::new();
        assert_eq!(
            locator.ticks(5.0, 3.0),
            Err(Error::InvalidRange {
                vmin: 5.0,
                vmax: 3.0,
            })
        );
    }

    #[test]
    fn test_degenerate_range() {
        let locator = TickLocator::new();
        assert_eq!(locator.ticks(42.5, 42.5), Ok(vec![42.5]));
        assert_eq!(locator.ticks(0.0, 0.0), Ok(vec![0.0]));
        assert_eq!(locator.best_step(-3.0, -3.0), Ok(None));
    }

    #[test]
    fn test_degenerate_range_ignores_max_ticks() {
        let locator = TickLocator::builder()
            .max_ticks(0)
            .build()
            .expect("valid config");
        assert_eq!(locator.ticks(7.0, 7.0), Ok(vec![7.0]));
    }

    #[test]
    fn test_non_finite_bounds() {
        let locator = TickLocator::new();
        for (vmin, vmax) in [
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
            (f64::NEG_INFINITY, 0.0),
            (0.0, f64::INFINITY),
            (f64::INFINITY, f64::INFINITY),
        ] {
            assert!(
                matches!(locator.ticks(vmin, vmax), Err(Error::NonFiniteRange { .. })),
                "[{vmin}, {vmax}] should be rejected"
            );
        }
    }

    #[test]
    fn test_non_finite_checked_before_order() {
        let locator = TickLocator::new();
        for (vmin, vmax) in [(f64::INFINITY, 0.0), (0.0, f64::NEG_INFINITY)] {
            assert_eq!(
                locator.ticks(vmin, vmax),
                Err(Error::NonFiniteRange { vmin, vmax })
            );
        }
    }

    #[test]
    fn test_overflowing_span() {
        let locator = TickLocator::new();
        for (vmin, vmax) in [(-1.0e308, 1.0e308), (-f64::MAX, f64::MAX)] {
            assert_eq!(
                locator.ticks(vmin, vmax),
                Err(Error::NonFiniteRange { vmin, vmax })
            );
        }
    }

    #[test]
    fn test_wide_span_below_overflow() {
        let locator = TickLocator::new();
        let ticks = locator.ticks(-4.0e307, 4.0e307).expect("span is finite");
        assert!(ticks.iter().all(|t| t.is_finite()));
        assert!(ticks.len() <= 10);
    }

    #[test]
    fn test_subnormal_span_hits_decade_cap() {
        // The raw step underflows to zero, so the multiplier never grows.
        let locator = TickLocator::new();
        assert!(matches!(
            locator.ticks(0.0, 5e-324),
            Err(Error::StepSearchExhausted { max_ticks: 10 })
        ));
    }

    #[test]
    fn test_negative_range() {
        let locator = TickLocator::new();
        let ticks = locator.ticks(-1.0, 1.0).expect("operation should succeed");
        assert_ticks(
            &ticks,
            &[-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0],
        );
    }

    #[test]
    fn test_ticks_bracket_unaligned_range() {
        let locator = TickLocator::new();
        let ticks = locator.ticks(-3.7, 12.4).expect("operation should succeed");
        assert_ticks(
            &ticks,
            &[-4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0],
        );
    }

    #[test]
    fn test_custom_max_ticks() {
        let locator = TickLocator::builder()
            .max_ticks(5)
            .build()
            .expect("valid config");
        let ticks = locator.ticks(0.0, 100.0).expect("operation should succeed");
        assert_ticks(&ticks, &[0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_custom_steps() {
        let locator = TickLocator::builder()
            .steps([1.0, 5.0])
            .build()
            .expect("valid config");
        // 2 and 2.5 are unavailable, so [0, 1] falls back to a step of 0.5.
        let ticks = locator.ticks(0.0, 1.0).expect("operation should succeed");
        assert_ticks(&ticks, &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_builder_rejects_unsorted_steps() {
        let result = TickLocator::builder().steps(vec![2.0, 1.0]).build();
        assert!(matches!(result, Err(Error::InvalidSteps(_))));
    }

    #[test]
    fn test_with_config_rejects_empty_steps() {
        let config = LocatorConfig {
            max_ticks: 10,
            steps: Vec::new(),
        };
        assert!(TickLocator::with_config(config).is_err());
    }

    #[test]
    fn test_builder_rejects_unbounded_max_ticks() {
        let result = TickLocator::builder().max_ticks(usize::MAX).build();
        assert!(matches!(result, Err(Error::MaxTicksTooLarge { .. })));
    }

    #[test]
    fn test_tick_on_boundary_is_not_pushed_out() {
        // 0.3 / 0.05 is not exactly 6 in floating point.
        let locator = TickLocator::new();
        let ticks = locator.ticks(0.0, 0.3).expect("operation should succeed");
        assert_eq!(ticks.len(), 7);
        assert_relative_eq!(ticks[6], 0.3, max_relative = 1e-12);
    }

    #[test]
    fn test_locator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TickLocator>();
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
