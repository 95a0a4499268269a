//! Run and generation configuration
//!
//! Every field defaults to the values in [`crate::constants`], so a JSON
//! file only needs to name what it overrides:
//!
//! ```rust
//! use sensorstat_core::config::RunConfig;
//!
//! let config = RunConfig::from_json_str(r#"{ "seed": 7, "reading_count": 5000 }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.generator.pressure_range, (100.0, 500.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_SEED, MAX_READING_COUNT, MEAN_TEMP_RANGE_C, MIN_READING_COUNT,
        PRESSURE_RANGE_KPA, SEVERITY_SIGMA, STATUS_WEIGHTS, STD_DEV_RANGE_C,
    },
    errors::{TelemetryError, TelemetryResult},
};

/// Distribution parameters for sample generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Closed interval the per-run reading count is drawn from
    pub reading_count_range: (usize, usize),
    /// Half-open interval the per-run mean temperature is drawn from (°C)
    pub mean_temp_range: (f64, f64),
    /// Half-open interval the per-run temperature spread is drawn from (°C)
    pub std_dev_range: (f64, f64),
    /// Half-open interval pressure readings are drawn from (kPa)
    pub pressure_range: (f64, f64),
    /// Relative weight of each status code, indexed by code value
    pub status_weights: [f64; 4],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reading_count_range: (MIN_READING_COUNT, MAX_READING_COUNT),
            mean_temp_range: MEAN_TEMP_RANGE_C,
            std_dev_range: STD_DEV_RANGE_C,
            pressure_range: PRESSURE_RANGE_KPA,
            status_weights: STATUS_WEIGHTS,
        }
    }
}

impl GeneratorConfig {
    /// Reject ranges and weights no generator could draw from
    pub fn validate(&self) -> TelemetryResult<()> {
        let (min_count, max_count) = self.reading_count_range;
        if min_count == 0 {
            return Err(TelemetryError::parameter(
                "reading_count_range",
                "lower bound must be positive",
            ));
        }
        if min_count > max_count {
            return Err(TelemetryError::parameter(
                "reading_count_range",
                "lower bound exceeds upper bound",
            ));
        }

        check_range("mean_temp_range", self.mean_temp_range)?;
        check_range("std_dev_range", self.std_dev_range)?;
        if self.std_dev_range.0 < 0.0 {
            return Err(TelemetryError::parameter(
                "std_dev_range",
                "standard deviation cannot be negative",
            ));
        }
        check_range("pressure_range", self.pressure_range)?;

        if self.status_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(TelemetryError::parameter(
                "status_weights",
                "weights must be finite and non-negative",
            ));
        }
        if self.status_weights.iter().sum::<f64>() <= 0.0 {
            return Err(TelemetryError::parameter(
                "status_weights",
                "weights must not all be zero",
            ));
        }

        Ok(())
    }
}

/// Everything needed to reproduce one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Seed for the random source
    pub seed: u64,
    /// Fixed reading count; `None` draws one from the generator's range
    pub reading_count: Option<usize>,
    /// Standard deviations above the mean that mark an outlier
    pub severity_sigma: f64,
    /// Distribution parameters
    pub generator: GeneratorConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            reading_count: None,
            severity_sigma: SEVERITY_SIGMA,
            generator: GeneratorConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a run
    pub fn validate(&self) -> TelemetryResult<()> {
        if self.reading_count == Some(0) {
            return Err(TelemetryError::parameter(
                "reading_count",
                "must be positive",
            ));
        }
        validate_sigma(self.severity_sigma)?;
        self.generator.validate()
    }
}

/// Failure to load a [`RunConfig`] from text
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Not valid JSON, or fields of the wrong type
    #[error("failed to parse configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// Well-formed but semantically invalid
    #[error(transparent)]
    Invalid(#[from] TelemetryError),
}

pub(crate) fn validate_sigma(sigma: f64) -> TelemetryResult<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(TelemetryError::parameter(
            "severity_sigma",
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

fn check_range(name: &'static str, (low, high): (f64, f64)) -> TelemetryResult<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(TelemetryError::parameter(name, "bounds must be finite"));
    }
    if low >= high {
        return Err(TelemetryError::parameter(name, "lower bound must be below upper bound"));
    }
    Ok(())
}
