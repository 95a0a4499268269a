//! Error Types for Telemetry Generation and Analysis
//!
//! ## Design Philosophy
//!
//! Errors follow the same rules as the rest of the crate's value types:
//!
//! 1. **Copy Semantics**: every variant is `Copy`, carrying only counts and
//!    `&'static str` context, so errors can be returned from hot loops and
//!    compared in tests without allocation.
//!
//! 2. **Fail Fast**: no component recovers internally. An error surfaces to
//!    the caller, who decides whether to retry with a different parameter.
//!
//! ## Error Categories
//!
//! ### Parameter Errors
//! - `InvalidParameter`: a generation or configuration request that can never
//!   succeed (zero reading count, negative standard deviation, inverted range)
//!
//! ### Input Errors
//! - `InvalidInput`: data handed to statistics or the anomaly pipeline that the
//!   computation is undefined for. The [`InputFault`] says which case.
//!
//! ```rust
//! use sensorstat_core::errors::{InputFault, TelemetryError};
//! use sensorstat_core::stats::SummaryStats;
//!
//! match SummaryStats::compute(&[]) {
//!     Err(TelemetryError::InvalidInput(InputFault::EmptySample)) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

use crate::sample::Quantity;

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Top-level error for generation, statistics and anomaly analysis
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TelemetryError {
    /// Malformed generation or configuration request
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Input data the computation is undefined for
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputFault),
}

impl TelemetryError {
    /// Shorthand for building an `InvalidParameter`
    pub const fn parameter(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }

    /// True for any `InvalidInput` variant
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// True for `InvalidParameter`
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Specific reason an input was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFault {
    /// Statistics requested over zero readings
    #[error("sample is empty")]
    EmptySample,

    /// Every reading was flagged invalid, so no median can be imputed
    #[error("no valid readings available for median imputation")]
    NoValidReadings,

    /// Readings and status codes are not parallel
    #[error("{readings} readings but {status} status codes")]
    LengthMismatch {
        /// Number of readings in the sample
        readings: usize,
        /// Number of status codes supplied
        status: usize,
    },

    /// Sample carries the wrong quantity for this computation
    #[error("expected {expected} sample, got {found}")]
    WrongQuantity {
        /// Quantity the computation accepts
        expected: Quantity,
        /// Quantity that was supplied
        found: Quantity,
    },
}
