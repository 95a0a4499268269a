//! Core engine for SensorStat
//!
//! Synthesizes sensor telemetry, summarizes it and runs a threshold anomaly
//! pass with invalid-reading imputation over the temperature stream.
//!
//! Key properties:
//! - Deterministic: every random draw comes from an injected, seedable source
//! - Pure: statistics and anomaly analysis are functions of their inputs only
//! - Fail fast: errors surface to the caller, nothing is recovered internally
//!
//! ```rust
//! use sensorstat_core::{RunConfig, SeededSource, TelemetryRun};
//!
//! let config = RunConfig { reading_count: Some(10_000), ..Default::default() };
//! let run = TelemetryRun::execute(&config, SeededSource::new(config.seed)).unwrap();
//!
//! assert_eq!(run.anomalies().cleaned_series().len(), 10_000);
//! println!("{}", run);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod anomaly;
pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod random;
pub mod report;
pub mod run;
pub mod sample;
pub mod stats;

// Public API
pub use anomaly::{AnomalyPipeline, AnomalyReport};
pub use config::{ConfigError, GeneratorConfig, RunConfig};
pub use errors::{InputFault, TelemetryError, TelemetryResult};
pub use generator::{SampleGenerator, TemperatureParams};
pub use random::SeededSource;
pub use report::{AnomalySummary, QuantityReport};
pub use run::TelemetryRun;
pub use sample::{Quantity, Sample, StatusCode, StatusCodes};
pub use stats::SummaryStats;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
