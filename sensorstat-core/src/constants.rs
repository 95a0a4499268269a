//! Constants for SensorStat Core
//!
//! Generation ranges, status-code probabilities and analysis parameters.
//! Ranges are written as `(low, high)` pairs; whether the upper bound is
//! inclusive is stated on each constant.

// ===== RUN PARAMETERS =====

/// Seed used when none is configured, so reports reproduce across runs.
pub const DEFAULT_SEED: u64 = 1;

/// Smallest number of readings a generated run may contain (inclusive).
pub const MIN_READING_COUNT: usize = 1_000_000;

/// Largest number of readings a generated run may contain (inclusive).
pub const MAX_READING_COUNT: usize = 10_000_000;

// ===== TEMPERATURE =====

/// Range the per-run mean temperature is drawn from (°C, upper exclusive).
pub const MEAN_TEMP_RANGE_C: (f64, f64) = (40.0, 50.0);

/// Range the per-run temperature spread is drawn from (°C, upper exclusive).
pub const STD_DEV_RANGE_C: (f64, f64) = (10.0, 15.0);

// ===== PRESSURE =====

/// Uniform range for pressure readings (kPa, upper exclusive).
pub const PRESSURE_RANGE_KPA: (f64, f64) = (100.0, 500.0);

// ===== STATUS CODES =====

/// Probability of each status code, indexed by code value.
///
/// 0 = normal, 1 = minor issue, 2 = critical fault, 3 = invalid reading.
pub const STATUS_WEIGHTS: [f64; 4] = [0.85, 0.10, 0.03, 0.02];

// ===== ANALYSIS =====

/// Standard deviations above the mean a reading must exceed to be an outlier.
pub const SEVERITY_SIGMA: f64 = 3.0;

/// Lower percentile rank of the reported normal range.
pub const LOW_PERCENTILE: f64 = 5.0;

/// Upper percentile rank of the reported normal range.
pub const HIGH_PERCENTILE: f64 = 95.0;

/// Share of imputed readings above which the anomaly pass warns.
///
/// Well above the expected invalid share `STATUS_WEIGHTS[3]`, so sampling
/// noise in a default run never trips it.
pub const IMPUTED_SHARE_WARN: f64 = 0.05;

/// Number of extracted anomalies shown in the text report.
pub const REPORT_ANOMALY_PREVIEW: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_weights_sum_to_one() {
        let total: f64 = STATUS_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ranges_are_ordered() {
        assert!(MIN_READING_COUNT <= MAX_READING_COUNT);
        assert!(MEAN_TEMP_RANGE_C.0 < MEAN_TEMP_RANGE_C.1);
        assert!(STD_DEV_RANGE_C.0 < STD_DEV_RANGE_C.1);
        assert!(PRESSURE_RANGE_KPA.0 < PRESSURE_RANGE_KPA.1);
        assert!(LOW_PERCENTILE < HIGH_PERCENTILE);
        assert!(IMPUTED_SHARE_WARN > STATUS_WEIGHTS[3]);
    }
}
