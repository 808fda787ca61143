//! # Trueno-Ticks
//!
//! Nice-number tick location for chart axes.
//!
//! Given a numeric range, trueno-ticks picks a small set of evenly spaced,
//! "round" values to label an axis, trading readability (few, round numbers)
//! against fidelity (a grid that hugs the data range).
//!
//! ## Features
//!
//! - **Tight grids**: among all `s * 10^k` steps that fit the tick budget, the one
//!   whose grid covers the least total length wins
//! - **Pure and immutable**: a [`TickLocator`] holds no per-call state and is
//!   `Send + Sync`
//! - **Label formatting**: minimal-precision labels that hide binary rounding noise
//! - **Configuration files**: YAML-loadable [`LocatorConfig`] (feature `config`)
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_ticks::prelude::*;
//!
//! let locator = TickLocator::new();
//! let ticks = locator.ticks(0.0, 1.0)?;
//! assert_eq!(format_ticks(&ticks), ["0", "0.2", "0.4", "0.6", "0.8", "1"]);
//!
//! let coarse = TickLocator::builder().max_ticks(5).build()?;
//! assert_eq!(coarse.ticks(0.0, 100.0)?, [0.0, 25.0, 50.0, 75.0, 100.0]);
//! # Ok::<(), trueno_ticks::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML loading for [`LocatorConfig`]
//! - `cli`: the `ticks` command-line tool
//! - `full`: All features enabled
//!
//! ## Logging
//!
//! The step search reports through the [`log`] facade (`trace` per candidate,
//! `debug` for the chosen step). Install any logger to see it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Axis tick location.
pub mod locator;

/// Locator configuration.
pub mod config;

// ============================================================================
// Helpers
// ============================================================================

/// Tick label formatting.
pub mod format;

/// Numeric helpers.
pub mod util;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-ticks operations.
pub mod error;

pub use config::LocatorConfig;
pub use error::{Error, Result};
pub use locator::{TickLocator, TickLocatorBuilder};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_ticks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LocatorConfig;
    pub use crate::error::{Error, Result};
    pub use crate::format::{format_tick, format_ticks};
    pub use crate::locator::{TickLocator, TickLocatorBuilder};
}

// ============================================================================
// Tests
// ============================================================================
