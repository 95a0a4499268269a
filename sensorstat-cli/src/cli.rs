//! Argument parsing, configuration loading and output rendering

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sensorstat_core::{
    constants::REPORT_ANOMALY_PREVIEW, AnomalyReport, RunConfig, SummaryStats, TelemetryRun,
};

/// Synthesize sensor telemetry and report statistics and anomalies
#[derive(Debug, Parser)]
#[command(name = "sensorstat", version, about)]
pub struct Args {
    /// Seed for the random source (overrides the config file)
    #[arg(long, env = "SENSORSTAT_SEED")]
    pub seed: Option<u64>,

    /// Fixed number of readings per quantity instead of a random draw
    #[arg(long)]
    pub readings: Option<usize>,

    /// JSON run configuration
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Merge the config file (if any) with command-line overrides
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RunConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(readings) = self.readings {
            config.reading_count = Some(readings);
        }
        config.validate().context("invalid run configuration")?;
        Ok(config)
    }
}

/// Read and validate a JSON [`RunConfig`]
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    RunConfig::from_json_str(&text)
        .with_context(|| format!("failed to load config file {}", path.display()))
}

/// Machine-readable summary of a run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    seed: u64,
    reading_count: usize,
    temperature: &'a SummaryStats,
    pressure: &'a SummaryStats,
    anomalies: AnomalyCounts<'a>,
}

#[derive(Debug, Serialize)]
struct AnomalyCounts<'a> {
    severity_threshold: f64,
    valid_median: f64,
    critical_count: usize,
    outlier_count: usize,
    anomaly_count: usize,
    imputed_count: usize,
    anomaly_sample: &'a [f64],
}

impl<'a> JsonReport<'a> {
    /// Summarize `run`, recording the seed it was generated with
    pub fn new(seed: u64, run: &'a TelemetryRun) -> Self {
        let report: &AnomalyReport = run.anomalies();
        let preview = report.extracted_anomalies().len().min(REPORT_ANOMALY_PREVIEW);
        Self {
            seed,
            reading_count: run.reading_count(),
            temperature: run.temperature_stats(),
            pressure: run.pressure_stats(),
            anomalies: AnomalyCounts {
                severity_threshold: report.severity_threshold(),
                valid_median: report.valid_median(),
                critical_count: report.critical_count(),
                outlier_count: report.outlier_count(),
                anomaly_count: report.anomaly_count(),
                imputed_count: report.imputed_count(),
                anomaly_sample: &report.extracted_anomalies()[..preview],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorstat_core::SeededSource;
    use std::io::Write;

    fn args(config: Option<PathBuf>) -> Args {
        Args { seed: None, readings: None, config, json: false }
    }

    #[test]
    fn defaults_without_config_file() {
        let config = args(None).run_config().unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 5, "reading_count": 100, "severity_sigma": 2.5 }}"#).unwrap();

        let mut cli = args(Some(file.path().to_path_buf()));
        cli.seed = Some(9);
        let config = cli.run_config().unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.reading_count, Some(100));
        assert_eq!(config.severity_sigma, 2.5);
    }

    #[test]
    fn zero_readings_flag_is_rejected() {
        let mut cli = args(None);
        cli.readings = Some(0);
        let err = cli.run_config().unwrap_err();
        assert!(format!("{:#}", err).contains("reading_count"));
    }

    #[test]
    fn missing_config_file_names_path() {
        let err = load_config(Path::new("/nonexistent/sensorstat.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sensorstat.json"));
    }

    #[test]
    fn malformed_config_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn parses_command_line() {
        let cli =
            Args::try_parse_from(["sensorstat", "--seed", "3", "--readings", "1000", "--json"])
                .unwrap();
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.readings, Some(1000));
        assert!(cli.json);
    }

    #[test]
    fn json_report_shape() {
        let config = RunConfig { reading_count: Some(2_000), ..Default::default() };
        let run = TelemetryRun::execute(&config, SeededSource::new(config.seed)).unwrap();
        let value = serde_json::to_value(JsonReport::new(config.seed, &run)).unwrap();

        assert_eq!(value["reading_count"], 2_000);
        assert_eq!(value["seed"], config.seed);
        assert!(value["temperature"]["p95"].is_f64());
        assert!(value["anomalies"]["anomaly_sample"].as_array().unwrap().len() <= 5);
        assert_eq!(
            value["anomalies"]["imputed_count"],
            run.anomalies().imputed_count()
        );
    }
}
