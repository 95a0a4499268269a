//! One complete telemetry run
//!
//! Ties the components together in their only valid order:
//!
//! ```text
//! SampleGenerator ──> SummaryStats ──> AnomalyPipeline
//!   (temperature, pressure, status)     (temperature only)
//! ```
//!
//! The reading count is decided once and handed to every generation call, so
//! the temperature, pressure and status samples are always parallel.

use rand::Rng;

use crate::{
    anomaly::{AnomalyPipeline, AnomalyReport},
    config::RunConfig,
    errors::TelemetryResult,
    generator::{SampleGenerator, TemperatureParams},
    sample::{Sample, StatusCodes},
    stats::SummaryStats,
};

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct TelemetryRun {
    reading_count: usize,
    temperature_params: TemperatureParams,
    temperature: Sample,
    pressure: Sample,
    status: StatusCodes,
    temperature_stats: SummaryStats,
    pressure_stats: SummaryStats,
    anomalies: AnomalyReport,
}

impl TelemetryRun {
    /// Generate, summarize and analyze one run with the given generator
    ///
    /// `rng` is used as-is; `config.seed` is only consulted by callers that
    /// build a [`crate::random::SeededSource`] from it.
    pub fn execute<R: Rng>(config: &RunConfig, rng: R) -> TelemetryResult<Self> {
        config.validate()?;
        let pipeline = AnomalyPipeline::with_severity_sigma(config.severity_sigma)?;
        let mut generator = SampleGenerator::with_config(rng, config.generator.clone())?;

        let reading_count = match config.reading_count {
            Some(count) => count,
            None => generator.draw_reading_count(),
        };
        let temperature_params = generator.draw_temperature_params();
        log_info!(
            "Run: {} readings, temperature mean {:.2} std_dev {:.2}",
            reading_count,
            temperature_params.mean_temp,
            temperature_params.std_dev
        );

        let temperature = generator.generate_temperature(
            reading_count,
            temperature_params.mean_temp,
            temperature_params.std_dev,
        )?;
        let pressure = generator.generate_pressure(reading_count)?;
        let status = generator.generate_status_codes(reading_count)?;

        let temperature_stats = SummaryStats::from_sample(&temperature)?;
        let pressure_stats = SummaryStats::from_sample(&pressure)?;
        let anomalies = pipeline.analyze(&temperature, &status, &temperature_stats)?;

        Ok(Self {
            reading_count,
            temperature_params,
            temperature,
            pressure,
            status,
            temperature_stats,
            pressure_stats,
            anomalies,
        })
    }

    /// Shared number of readings per quantity
    pub fn reading_count(&self) -> usize {
        self.reading_count
    }

    /// Distribution the temperature sample was drawn from
    pub fn temperature_params(&self) -> TemperatureParams {
        self.temperature_params
    }

    /// Temperature sample
    pub fn temperature(&self) -> &Sample {
        &self.temperature
    }

    /// Pressure sample
    pub fn pressure(&self) -> &Sample {
        &self.pressure
    }

    /// Status codes paired with the temperature sample
    pub fn status(&self) -> &StatusCodes {
        &self.status
    }

    /// Summary of the temperature sample
    pub fn temperature_stats(&self) -> &SummaryStats {
        &self.temperature_stats
    }

    /// Summary of the pressure sample
    pub fn pressure_stats(&self) -> &SummaryStats {
        &self.pressure_stats
    }

    /// Anomaly pass over the temperature sample
    pub fn anomalies(&self) -> &AnomalyReport {
        &self.anomalies
    }
}
