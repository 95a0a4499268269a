//! Summary statistics over a numeric sample
//!
//! ## Definitions
//!
//! | Statistic | Definition |
//! |-----------|------------|
//! | mean      | arithmetic mean |
//! | median    | middle of the sorted sample, mean of the two central values for even length |
//! | std       | population standard deviation, `sqrt(Σ(x - mean)² / N)` |
//! | p5, p95   | linear interpolation between closest ranks |
//!
//! ### Standard deviation divisor
//!
//! The divisor is N, not N - 1. The severity threshold downstream
//! (`mean + 3·std`) is calibrated against the population form, so switching
//! to the sample form would move every outlier boundary. For samples in the
//! millions the two differ by a factor of `sqrt(N / (N - 1))`, well below
//! report precision, but small hand-built samples will disagree with tools
//! that default to N - 1.
//!
//! ### Percentile method
//!
//! A percentile rank `p` maps to the fractional position `h = p / 100 · (N - 1)`
//! in the sorted sample. The result is `x[⌊h⌋] + (h - ⌊h⌋) · (x[⌊h⌋ + 1] - x[⌊h⌋])`.
//! Rank 0 is the minimum and rank 100 the maximum.
//!
//! Sorting uses `f64::total_cmp`, so NaN readings sort after every number
//! instead of poisoning the comparison.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{HIGH_PERCENTILE, LOW_PERCENTILE},
    errors::{InputFault, TelemetryError, TelemetryResult},
    sample::Sample,
};

/// Descriptive statistics of one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Median
    pub median: f64,
    /// Population standard deviation
    pub std: f64,
    /// 5th percentile
    pub p5: f64,
    /// 95th percentile
    pub p95: f64,
}

impl SummaryStats {
    /// Compute statistics over raw readings
    pub fn compute(readings: &[f64]) -> TelemetryResult<Self> {
        let mean = mean(readings)?;
        let std = std_around(readings, mean);

        let sorted = sorted_copy(readings);
        let median = median_of_sorted(&sorted);
        let p5 = percentile_of_sorted(&sorted, LOW_PERCENTILE);
        let p95 = percentile_of_sorted(&sorted, HIGH_PERCENTILE);

        Ok(Self { mean, median, std, p5, p95 })
    }

    /// Compute statistics over a sample's readings
    pub fn from_sample(sample: &Sample) -> TelemetryResult<Self> {
        Self::compute(sample.readings())
    }

    /// Width of the central 90% range
    pub fn normal_range_width(&self) -> f64 {
        self.p95 - self.p5
    }
}

/// Arithmetic mean
pub fn mean(readings: &[f64]) -> TelemetryResult<f64> {
    if readings.is_empty() {
        return Err(InputFault::EmptySample.into());
    }
    Ok(readings.iter().sum::<f64>() / readings.len() as f64)
}

/// Median, averaging the two central values for even lengths
pub fn median(readings: &[f64]) -> TelemetryResult<f64> {
    if readings.is_empty() {
        return Err(InputFault::EmptySample.into());
    }
    Ok(median_of_sorted(&sorted_copy(readings)))
}

/// Population standard deviation (divides by N)
pub fn population_std(readings: &[f64]) -> TelemetryResult<f64> {
    let mean = mean(readings)?;
    Ok(std_around(readings, mean))
}

/// Linear-interpolation percentile at `rank` in `[0, 100]`
pub fn percentile(readings: &[f64], rank: f64) -> TelemetryResult<f64> {
    if !rank.is_finite() || !(0.0..=100.0).contains(&rank) {
        return Err(TelemetryError::parameter("rank", "must be within [0, 100]"));
    }
    if readings.is_empty() {
        return Err(InputFault::EmptySample.into());
    }
    Ok(percentile_of_sorted(&sorted_copy(readings), rank))
}

fn std_around(readings: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = readings.iter().map(|&x| (x - mean) * (x - mean)).sum();
    (sum_sq / readings.len() as f64).sqrt()
}

fn sorted_copy(readings: &[f64]) -> Vec<f64> {
    let mut sorted = readings.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

// Callers guarantee `sorted` is non-empty.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// Callers guarantee `sorted` is non-empty and `rank` is in [0, 100].
fn percentile_of_sorted(sorted: &[f64], rank: f64) -> f64 {
    let position = rank / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn single_reading() {
        let stats = SummaryStats::compute(&[42.5]).unwrap();
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.median, 42.5);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.p5, 42.5);
        assert_eq!(stats.p95, 42.5);
        assert_eq!(stats.normal_range_width(), 0.0);
    }

    #[test]
    fn odd_and_even_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn population_divisor() {
        // Σ(x - 5)² = 32 over 8 values -> variance 4, std 2 (sample std would be ~2.138)
        let readings = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = population_std(&readings).unwrap();
        assert!((std - 2.0).abs() < EPS);
    }

    #[test]
    fn linear_percentiles() {
        // 1..=10: h(5) = 0.45 -> 1.45, h(95) = 8.55 -> 9.55
        let readings: Vec<f64> = (1..=10).map(f64::from).collect();
        let stats = SummaryStats::compute(&readings).unwrap();
        assert!((stats.p5 - 1.45).abs() < EPS);
        assert!((stats.p95 - 9.55).abs() < EPS);
        assert!((stats.mean - 5.5).abs() < EPS);
        assert!((stats.median - 5.5).abs() < EPS);
    }

    #[test]
    fn percentile_extremes_are_min_and_max() {
        let readings = [5.0, -1.0, 8.0, 3.0];
        assert_eq!(percentile(&readings, 0.0).unwrap(), -1.0);
        assert_eq!(percentile(&readings, 100.0).unwrap(), 8.0);
    }

    #[test]
    fn percentile_rank_is_validated() {
        assert!(percentile(&[1.0], 101.0).unwrap_err().is_invalid_parameter());
        assert!(percentile(&[1.0], -0.5).unwrap_err().is_invalid_parameter());
        assert!(percentile(&[1.0], f64::NAN).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn empty_input_rejected_everywhere() {
        let empty: [f64; 0] = [];
        let expected = TelemetryError::InvalidInput(InputFault::EmptySample);
        assert_eq!(SummaryStats::compute(&empty).unwrap_err(), expected);
        assert_eq!(mean(&empty).unwrap_err(), expected);
        assert_eq!(median(&empty).unwrap_err(), expected);
        assert_eq!(population_std(&empty).unwrap_err(), expected);
        assert_eq!(percentile(&empty, 50.0).unwrap_err(), expected);
    }

    #[test]
    fn input_order_is_irrelevant() {
        let forward = SummaryStats::compute(&[1.0, 2.0, 3.0, 10.0]).unwrap();
        let shuffled = SummaryStats::compute(&[10.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn from_sample_matches_compute() {
        let sample = Sample::pressure(vec![120.0, 480.0, 300.0]);
        assert_eq!(
            SummaryStats::from_sample(&sample).unwrap(),
            SummaryStats::compute(sample.readings()).unwrap(),
        );
    }
}
