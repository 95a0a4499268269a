//! Shared fixtures and assertions for integration tests

#![allow(dead_code)]

use sensorstat_core::{
    AnomalyPipeline, AnomalyReport, Sample, StatusCode, StatusCodes, SummaryStats,
    TelemetryResult,
};

/// Floating-point tolerance for statistics comparisons
pub const EPS: f64 = 1e-9;

/// Build a temperature sample and raw status codes, then run the full pass
pub fn analyze_raw(readings: &[f64], raw_status: &[u8]) -> TelemetryResult<AnomalyReport> {
    let temperature = Sample::temperature(readings.to_vec());
    let status = StatusCodes::from_raw(raw_status)?;
    let stats = SummaryStats::from_sample(&temperature)?;
    AnomalyPipeline::new().analyze(&temperature, &status, &stats)
}

/// Check every structural invariant of a report against its inputs
pub fn assert_report_invariants(readings: &[f64], status: &[StatusCode], report: &AnomalyReport) {
    let n = readings.len();
    assert_eq!(report.len(), n);
    assert_eq!(report.critical_mask().len(), n);
    assert_eq!(report.outlier_mask().len(), n);
    assert_eq!(report.anomaly_mask().len(), n);
    assert_eq!(report.valid_mask().len(), n);
    assert_eq!(report.cleaned_series().len(), n);

    let threshold = report.severity_threshold();
    for i in 0..n {
        let critical = status[i] == StatusCode::CriticalFault;
        let outlier = readings[i] > threshold;
        assert_eq!(report.critical_mask()[i], critical, "critical mask at {}", i);
        assert_eq!(report.outlier_mask()[i], outlier, "outlier mask at {}", i);
        assert_eq!(report.anomaly_mask()[i], critical && outlier, "anomaly mask at {}", i);

        if status[i] == StatusCode::Invalid {
            assert_eq!(report.cleaned_series()[i], report.valid_median());
            assert!(!report.valid_mask()[i]);
        } else {
            assert_eq!(report.cleaned_series()[i].to_bits(), readings[i].to_bits());
            assert!(report.valid_mask()[i]);
        }
    }

    let anomaly_total = report.anomaly_mask().iter().filter(|&&m| m).count();
    assert_eq!(report.anomaly_count(), anomaly_total);
    assert_eq!(report.extracted_anomalies().len(), anomaly_total);
    assert_eq!(
        report.imputed_count(),
        status.iter().filter(|&&s| s == StatusCode::Invalid).count()
    );
}
