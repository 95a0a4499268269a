//! Threshold anomaly detection and invalid-reading imputation
//!
//! ## Overview
//!
//! The pipeline combines two independent signals per reading:
//!
//! 1. **Status**: what the sensor itself reported (critical fault, invalid)
//! 2. **Magnitude**: whether the reading lies beyond the severity threshold
//!    `mean + σ·std` of its own sample (σ = 3 by default)
//!
//! A reading is an *anomaly* only when both hold: the sensor flagged a
//! critical fault **and** the value is an outlier. Either one alone is not
//! enough.
//!
//! ```text
//!                  outlier      not outlier
//! critical (2)     ANOMALY      -
//! other            -            -
//! ```
//!
//! ## Imputation
//!
//! Readings with status 3 are unusable. They are replaced, not dropped, by the
//! median of all other readings, so the cleaned series keeps the input length
//! and index alignment with the status codes.
//!
//! ## Comparison Rules
//!
//! - Outlier test is strict: a reading equal to the threshold is not an outlier
//! - Critical and invalid tests are exact equality on the status code
//!
//! ```rust
//! use sensorstat_core::{
//!     anomaly::AnomalyPipeline,
//!     sample::{Sample, StatusCodes},
//!     stats::SummaryStats,
//! };
//!
//! let temperature = Sample::temperature(vec![21.0, 22.0, 23.0, 24.0]);
//! let status = StatusCodes::from_raw(&[0, 0, 3, 0]).unwrap();
//! let stats = SummaryStats::from_sample(&temperature).unwrap();
//!
//! let report = AnomalyPipeline::new().analyze(&temperature, &status, &stats).unwrap();
//! assert_eq!(report.imputed_count(), 1);
//! assert_eq!(report.cleaned_series()[2], 22.0);
//! ```

use crate::{
    config::validate_sigma,
    constants::{IMPUTED_SHARE_WARN, SEVERITY_SIGMA},
    errors::{InputFault, TelemetryResult},
    sample::{Quantity, Sample, StatusCodes},
    stats::{self, SummaryStats},
};

/// Result of one anomaly pass over a temperature sample
///
/// Built once by [`AnomalyPipeline::analyze`]; all accessors are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    severity_threshold: f64,
    critical_mask: Vec<bool>,
    outlier_mask: Vec<bool>,
    anomaly_mask: Vec<bool>,
    extracted_anomalies: Vec<f64>,
    anomaly_count: usize,
    critical_count: usize,
    outlier_count: usize,
    valid_mask: Vec<bool>,
    valid_median: f64,
    cleaned_series: Vec<f64>,
    imputed_count: usize,
}

impl AnomalyReport {
    /// Outlier cutoff, `mean + σ·std`
    pub fn severity_threshold(&self) -> f64 {
        self.severity_threshold
    }

    /// Readings whose status is a critical fault
    pub fn critical_mask(&self) -> &[bool] {
        &self.critical_mask
    }

    /// Readings strictly above the severity threshold
    pub fn outlier_mask(&self) -> &[bool] {
        &self.outlier_mask
    }

    /// Critical-status readings that are also outliers
    pub fn anomaly_mask(&self) -> &[bool] {
        &self.anomaly_mask
    }

    /// Values selected by the anomaly mask, in sample order
    pub fn extracted_anomalies(&self) -> &[f64] {
        &self.extracted_anomalies
    }

    /// Number of anomalies
    pub fn anomaly_count(&self) -> usize {
        self.anomaly_count
    }

    /// Number of critical-status readings
    pub fn critical_count(&self) -> usize {
        self.critical_count
    }

    /// Number of outliers regardless of status
    pub fn outlier_count(&self) -> usize {
        self.outlier_count
    }

    /// Readings whose status is not invalid
    pub fn valid_mask(&self) -> &[bool] {
        &self.valid_mask
    }

    /// Median of the valid readings, used as the imputed value
    pub fn valid_median(&self) -> f64 {
        self.valid_median
    }

    /// Input readings with invalid entries replaced by the valid median
    pub fn cleaned_series(&self) -> &[f64] {
        &self.cleaned_series
    }

    /// Number of readings replaced during imputation
    pub fn imputed_count(&self) -> usize {
        self.imputed_count
    }

    /// Fraction of readings replaced during imputation
    pub fn imputed_share(&self) -> f64 {
        self.imputed_count as f64 / self.len() as f64
    }

    /// True when more readings were imputed than a healthy sensor stream
    /// produces (see [`IMPUTED_SHARE_WARN`])
    pub fn excessive_imputation(&self) -> bool {
        self.imputed_share() > IMPUTED_SHARE_WARN
    }

    /// Number of readings analyzed
    pub fn len(&self) -> usize {
        self.cleaned_series.len()
    }

    /// True when the report covers no readings (never true for a built report)
    pub fn is_empty(&self) -> bool {
        self.cleaned_series.is_empty()
    }
}

/// Classifies temperature readings and imputes invalid ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyPipeline {
    severity_sigma: f64,
}

impl Default for AnomalyPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyPipeline {
    /// Pipeline with the standard three-sigma threshold
    pub const fn new() -> Self {
        Self { severity_sigma: SEVERITY_SIGMA }
    }

    /// Pipeline with a custom sigma multiplier
    pub fn with_severity_sigma(severity_sigma: f64) -> TelemetryResult<Self> {
        validate_sigma(severity_sigma)?;
        Ok(Self { severity_sigma })
    }

    /// Sigma multiplier applied to the sample's standard deviation
    pub fn severity_sigma(&self) -> f64 {
        self.severity_sigma
    }

    /// Run the anomaly pass
    ///
    /// `stats` must be the summary of `temperature`; the threshold is derived
    /// from it rather than recomputed.
    ///
    /// # Errors
    ///
    /// - `InvalidInput(WrongQuantity)` when `temperature` is not a temperature sample
    /// - `InvalidInput(LengthMismatch)` when `status` is not parallel to `temperature`
    /// - `InvalidInput(NoValidReadings)` when every status code is invalid
    pub fn analyze(
        &self,
        temperature: &Sample,
        status: &StatusCodes,
        stats: &SummaryStats,
    ) -> TelemetryResult<AnomalyReport> {
        if temperature.quantity() != Quantity::Temperature {
            return Err(InputFault::WrongQuantity {
                expected: Quantity::Temperature,
                found: temperature.quantity(),
            }
            .into());
        }
        if temperature.len() != status.len() {
            return Err(InputFault::LengthMismatch {
                readings: temperature.len(),
                status: status.len(),
            }
            .into());
        }

        let readings = temperature.readings();
        let codes = status.codes();

        let severity_threshold = stats.mean + self.severity_sigma * stats.std;

        let critical_mask: Vec<bool> = codes.iter().map(|code| code.is_critical()).collect();
        let outlier_mask: Vec<bool> = readings.iter().map(|&x| x > severity_threshold).collect();
        let anomaly_mask: Vec<bool> = critical_mask
            .iter()
            .zip(&outlier_mask)
            .map(|(&critical, &outlier)| critical && outlier)
            .collect();

        let extracted_anomalies: Vec<f64> = select(readings, &anomaly_mask);
        let anomaly_count = extracted_anomalies.len();
        let critical_count = count_true(&critical_mask);
        let outlier_count = count_true(&outlier_mask);

        let valid_mask: Vec<bool> = codes.iter().map(|code| !code.is_invalid()).collect();
        let valid_readings = select(readings, &valid_mask);
        if valid_readings.is_empty() {
            return Err(InputFault::NoValidReadings.into());
        }
        let valid_median = stats::median(&valid_readings)?;

        let cleaned_series: Vec<f64> = readings
            .iter()
            .zip(codes)
            .map(|(&x, code)| if code.is_invalid() { valid_median } else { x })
            .collect();
        let imputed_count = readings.len() - valid_readings.len();

        log_info!(
            "Severity threshold {:.2}: {} critical, {} outliers, {} anomalies, {} imputed",
            severity_threshold,
            critical_count,
            outlier_count,
            anomaly_count,
            imputed_count
        );
        if anomaly_count > 0 {
            log_warn!(
                "{} critical-status readings exceed the severity threshold {:.2}",
                anomaly_count,
                severity_threshold
            );
        }

        let report = AnomalyReport {
            severity_threshold,
            critical_mask,
            outlier_mask,
            anomaly_mask,
            extracted_anomalies,
            anomaly_count,
            critical_count,
            outlier_count,
            valid_mask,
            valid_median,
            cleaned_series,
            imputed_count,
        };
        if report.excessive_imputation() {
            log_warn!(
                "{} of {} readings imputed ({:.1}%), above the {:.1}% tolerance",
                imputed_count,
                report.len(),
                report.imputed_share() * 100.0,
                IMPUTED_SHARE_WARN * 100.0
            );
        }
        Ok(report)
    }
}

fn select(readings: &[f64], mask: &[bool]) -> Vec<f64> {
    readings
        .iter()
        .zip(mask)
        .filter_map(|(&x, &keep)| keep.then_some(x))
        .collect()
}

fn count_true(mask: &[bool]) -> usize {
    mask.iter().filter(|&&flag| flag).count()
}
