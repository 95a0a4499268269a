//! Human-readable text reports
//!
//! ```text
//! --- Temperature Statistics ---
//! Mean (Average): 45.02 °C
//! Median (Middle): 45.01 °C
//! Std. Deviation (Spread): 12.34 °C
//! 90% Normal Range: 24.72 °C to 65.31 °C
//! Valid-Reading Median: 45.01 °C
//! Severity Threshold: 82.04 °C
//! Critical-Status Readings: 29871
//! Outlier Readings: 1340
//! Total Anomalies: 41
//! Anomaly Sample (first 5): [82.11, 90.02, 83.50, 84.77, 86.01] °C
//! Imputed Readings: 19954
//! ```
//!
//! Values use two decimal places and the quantity's unit suffix.

use core::fmt;

use crate::{
    anomaly::AnomalyReport,
    constants::REPORT_ANOMALY_PREVIEW,
    run::TelemetryRun,
    sample::Quantity,
    stats::SummaryStats,
};

/// Statistics block for one quantity
#[derive(Debug, Clone, Copy)]
pub struct QuantityReport<'a> {
    quantity: Quantity,
    stats: &'a SummaryStats,
}

impl<'a> QuantityReport<'a> {
    /// Report `stats` under the header and unit of `quantity`
    pub fn new(quantity: Quantity, stats: &'a SummaryStats) -> Self {
        Self { quantity, stats }
    }
}

impl fmt::Display for QuantityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.quantity.unit();
        let stats = self.stats;
        writeln!(f, "--- {} Statistics ---", self.quantity.label())?;
        writeln!(f, "Mean (Average): {:.2} {}", stats.mean, unit)?;
        writeln!(f, "Median (Middle): {:.2} {}", stats.median, unit)?;
        writeln!(f, "Std. Deviation (Spread): {:.2} {}", stats.std, unit)?;
        write!(f, "90% Normal Range: {:.2} {} to {:.2} {}", stats.p5, unit, stats.p95, unit)
    }
}

/// Anomaly and imputation lines appended to the temperature block
#[derive(Debug, Clone, Copy)]
pub struct AnomalySummary<'a> {
    report: &'a AnomalyReport,
}

impl<'a> AnomalySummary<'a> {
    /// Summarize an anomaly pass
    pub fn new(report: &'a AnomalyReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for AnomalySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = Quantity::Temperature.unit();
        let report = self.report;
        writeln!(f, "Valid-Reading Median: {:.2} {}", report.valid_median(), unit)?;
        writeln!(f, "Severity Threshold: {:.2} {}", report.severity_threshold(), unit)?;
        writeln!(f, "Critical-Status Readings: {}", report.critical_count())?;
        writeln!(f, "Outlier Readings: {}", report.outlier_count())?;
        writeln!(f, "Total Anomalies: {}", report.anomaly_count())?;

        write!(f, "Anomaly Sample (first {}): [", REPORT_ANOMALY_PREVIEW)?;
        for (i, value) in report
            .extracted_anomalies()
            .iter()
            .take(REPORT_ANOMALY_PREVIEW)
            .enumerate()
        {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.2}", value)?;
        }
        writeln!(f, "] {}", unit)?;

        write!(f, "Imputed Readings: {}", report.imputed_count())
    }
}

impl fmt::Display for TelemetryRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", QuantityReport::new(Quantity::Temperature, self.temperature_stats()))?;
        writeln!(f, "{}", AnomalySummary::new(self.anomalies()))?;
        writeln!(f)?;
        write!(f, "{}", QuantityReport::new(Quantity::Pressure, self.pressure_stats()))
    }
}
