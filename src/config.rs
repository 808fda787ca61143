//! Locator configuration.
//!
//! A [`LocatorConfig`] is a plain value object: build it, validate it once, and
//! hand it to [`TickLocator::with_config`](crate::TickLocator::with_config).
//! With the `config` feature it can also be loaded from YAML:
//!
//! ```yaml
//! max_ticks: 8
//! steps: [1, 2, 5]
//! ```

use crate::error::{Error, Result};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;

/// Default upper bound on the number of ticks per axis.
pub const DEFAULT_MAX_TICKS: usize = 10;

/// Default "nice" step multipliers.
pub const DEFAULT_STEPS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Largest accepted `max_ticks`. Enumeration allocates up to this many ticks.
pub const MAX_TICKS_LIMIT: usize = 100_000;

/// Configuration for a [`TickLocator`](crate::TickLocator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct LocatorConfig {
    /// Maximum number of ticks a candidate step may produce.
    ///
    /// Zero is accepted here; no step can satisfy it, so every non-degenerate
    /// request then fails with [`Error::StepSearchExhausted`]. Values above
    /// [`MAX_TICKS_LIMIT`] are rejected by [`validate`](Self::validate).
    #[cfg_attr(feature = "config", serde(default = "default_max_ticks"))]
    pub max_ticks: usize,

    /// Step multipliers in `[1, 10)`, strictly ascending.
    #[cfg_attr(feature = "config", serde(default = "default_steps"))]
    pub steps: Vec<f64>,
}

fn default_max_ticks() -> usize {
    DEFAULT_MAX_TICKS
}
fn default_steps() -> Vec<f64> {
    DEFAULT_STEPS.to_vec()
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            steps: default_steps(),
        }
    }
}

impl LocatorConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the tick bound and the step candidates.
    ///
    /// The step search stops at the first candidate wider than the range, which
    /// is only correct when candidates grow monotonically, so ordering is
    /// enforced here rather than assumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaxTicksTooLarge`] if `max_ticks` exceeds
    /// [`MAX_TICKS_LIMIT`], and [`Error::InvalidSteps`] if the step list is
    /// empty, holds a value outside `[1, 10)`, or is not strictly ascending.
    pub fn validate(&self) -> Result<()> {
        if self.max_ticks > MAX_TICKS_LIMIT {
            return Err(Error::MaxTicksTooLarge {
                max_ticks: self.max_ticks,
                limit: MAX_TICKS_LIMIT,
            });
        }

        if self.steps.is_empty() {
            return Err(Error::InvalidSteps("must not be empty".to_string()));
        }

        if let Some(step) = self.steps.iter().find(|s| !(1.0..10.0).contains(*s)) {
            return Err(Error::InvalidSteps(format!("{step} is outside [1, 10)")));
        }

        if let Some(pair) = self.steps.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::InvalidSteps(format!(
                "must be strictly ascending, found {} before {}",
                pair[0], pair[1]
            )));
        }

        Ok(())
    }
}

#[cfg(feature = "config")]
impl LocatorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or the
    /// [`validate`](Self::validate) error if the parsed values are unusable.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("using default locator config: {e}");
            Self::default()
        })
    }
}
