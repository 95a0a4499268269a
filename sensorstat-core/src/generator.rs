//! Synthetic telemetry generation
//!
//! Produces one flat sample per quantity:
//! - Temperature: Gaussian around a per-run mean and spread
//! - Pressure: uniform over the configured range
//! - Status codes: categorical over {0, 1, 2, 3}
//!
//! ## Correlated Runs
//!
//! All quantities in a run share one reading count. The count is drawn once
//! with [`SampleGenerator::draw_reading_count`] and passed explicitly to each
//! `generate_*` call:
//!
//! ```rust
//! use sensorstat_core::{random::SeededSource, generator::SampleGenerator};
//!
//! let mut generator = SampleGenerator::new(SeededSource::new(1));
//! let count = 1_000;
//! let params = generator.draw_temperature_params();
//! let temperature = generator
//!     .generate_temperature(count, params.mean_temp, params.std_dev)
//!     .unwrap();
//! let status = generator.generate_status_codes(count).unwrap();
//! assert_eq!(temperature.len(), status.len());
//! ```
//!
//! ## Determinism
//!
//! Given the same source seed and the same call order, every sample is
//! reproduced bit for bit.

use rand::{
    distributions::{Distribution, Uniform, WeightedIndex},
    Rng,
};
use rand_distr::Normal;

use crate::{
    config::GeneratorConfig,
    errors::{TelemetryError, TelemetryResult},
    sample::{Sample, StatusCode, StatusCodes},
};

/// Per-run temperature distribution parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureParams {
    /// Mean of the Gaussian (°C)
    pub mean_temp: f64,
    /// Standard deviation of the Gaussian (°C)
    pub std_dev: f64,
}

/// Generates samples from an injected random number generator
#[derive(Debug)]
pub struct SampleGenerator<R> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: Rng> SampleGenerator<R> {
    /// Generator with default distribution parameters
    pub fn new(rng: R) -> Self {
        Self { rng, config: GeneratorConfig::default() }
    }

    /// Generator with custom distribution parameters
    pub fn with_config(rng: R, config: GeneratorConfig) -> TelemetryResult<Self> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Active distribution parameters
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw the shared reading count for a run from the closed count range
    pub fn draw_reading_count(&mut self) -> usize {
        let (low, high) = self.config.reading_count_range;
        let count = self.rng.gen_range(low..=high);
        log_debug!("Drew reading count {} from [{}, {}]", count, low, high);
        count
    }

    /// Draw the per-run mean temperature and spread
    pub fn draw_temperature_params(&mut self) -> TemperatureParams {
        let mean_temp = half_open(self.config.mean_temp_range).sample(&mut self.rng);
        let std_dev = half_open(self.config.std_dev_range).sample(&mut self.rng);
        log_debug!("Temperature distribution: mean={:.3} std_dev={:.3}", mean_temp, std_dev);
        TemperatureParams { mean_temp, std_dev }
    }

    /// `count` Gaussian readings with the given mean and standard deviation
    pub fn generate_temperature(
        &mut self,
        count: usize,
        mean_temp: f64,
        std_dev: f64,
    ) -> TelemetryResult<Sample> {
        check_count(count)?;
        if !mean_temp.is_finite() {
            return Err(TelemetryError::parameter("mean_temp", "must be finite"));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(TelemetryError::parameter(
                "std_dev",
                "must be finite and non-negative",
            ));
        }
        let normal = Normal::new(mean_temp, std_dev)
            .map_err(|_| TelemetryError::parameter("std_dev", "rejected by normal distribution"))?;

        let readings = (&mut self.rng).sample_iter(normal).take(count).collect();
        log_debug!("Generated {} temperature readings", count);
        Ok(Sample::temperature(readings))
    }

    /// `count` pressure readings uniform over the configured range
    pub fn generate_pressure(&mut self, count: usize) -> TelemetryResult<Sample> {
        check_count(count)?;
        let uniform = half_open(self.config.pressure_range);
        let readings = (&mut self.rng).sample_iter(uniform).take(count).collect();
        log_debug!("Generated {} pressure readings", count);
        Ok(Sample::pressure(readings))
    }

    /// `count` status codes drawn with the configured category weights
    ///
    /// Categories with zero weight are never drawn.
    pub fn generate_status_codes(&mut self, count: usize) -> TelemetryResult<StatusCodes> {
        check_count(count)?;
        let weights = WeightedIndex::new(&self.config.status_weights)
            .map_err(|_| TelemetryError::parameter("status_weights", "not a valid distribution"))?;
        let codes = (&mut self.rng)
            .sample_iter(&weights)
            .take(count)
            .map(|index| StatusCode::ALL[index])
            .collect();
        log_debug!("Generated {} status codes", count);
        Ok(StatusCodes::new(codes))
    }
}

/// Uniform over `[low, high)`; ranges are validated with `low < high`
fn half_open((low, high): (f64, f64)) -> Uniform<f64> {
    Uniform::new(low, high)
}

fn check_count(count: usize) -> TelemetryResult<()> {
    if count == 0 {
        return Err(TelemetryError::parameter("count", "must be positive"));
    }
    Ok(())
}
