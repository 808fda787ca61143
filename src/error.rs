//! Error types for trueno-ticks operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or configuring axis ticks.
///
/// Every variant is deterministic given the inputs and configuration, so
/// retrying the same call never helps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Lower bound is greater than the upper bound.
    #[error("Invalid range: vmin ({vmin}) must be less than or equal to vmax ({vmax})")]
    InvalidRange {
        /// Requested lower bound.
        vmin: f64,
        /// Requested upper bound.
        vmax: f64,
    },

    /// A bound is NaN or infinite, or the span between them overflows.
    #[error("Non-finite range: [{vmin}, {vmax}]")]
    NonFiniteRange {
        /// Requested lower bound.
        vmin: f64,
        /// Requested upper bound.
        vmax: f64,
    },

    /// No candidate step produced at most `max_ticks` ticks before the step
    /// size outgrew the range.
    #[error("Failed to find a suitable step size with max_ticks = {max_ticks}")]
    StepSearchExhausted {
        /// The tick bound that could not be satisfied.
        max_ticks: usize,
    },

    /// `max_ticks` is larger than the locator will ever allocate.
    #[error("max_ticks = {max_ticks} exceeds the limit of {limit}")]
    MaxTicksTooLarge {
        /// Requested tick bound.
        max_ticks: usize,
        /// Largest accepted tick bound.
        limit: usize,
    },

    /// Step candidates are empty, out of `[1, 10)`, or not strictly ascending.
    #[error("Invalid step candidates: {0}")]
    InvalidSteps(String),

    /// Configuration parsing error with line number.
    #[cfg(feature = "config")]
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[cfg(feature = "config")]
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}
