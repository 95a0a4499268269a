//! Readings and their per-reading status codes
//!
//! A [`Sample`] is an immutable run of readings for one [`Quantity`]. Once
//! built it exposes its data only as a slice, so the length chosen at
//! creation never changes. [`StatusCodes`] is the parallel health channel that
//! accompanies a temperature sample.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{TelemetryError, TelemetryResult};

/// Physical quantity a sample measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Air temperature in degrees Celsius
    Temperature,
    /// Pressure in kilopascals
    Pressure,
}

impl Quantity {
    /// Human-readable name used in report headers
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
        }
    }

    /// Unit suffix appended to formatted values
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Pressure => "kPa",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-length sequence of readings for one quantity
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    quantity: Quantity,
    readings: Vec<f64>,
}

impl Sample {
    /// Wrap readings for a quantity. The length is fixed from here on.
    pub fn new(quantity: Quantity, readings: Vec<f64>) -> Self {
        Self { quantity, readings }
    }

    /// Temperature sample from raw readings
    pub fn temperature(readings: Vec<f64>) -> Self {
        Self::new(Quantity::Temperature, readings)
    }

    /// Pressure sample from raw readings
    pub fn pressure(readings: Vec<f64>) -> Self {
        Self::new(Quantity::Pressure, readings)
    }

    /// Quantity measured by this sample
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Readings in acquisition order
    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the sample holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.readings
    }
}

/// Health code attached to a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum StatusCode {
    /// Reading is trustworthy
    Normal = 0,
    /// Sensor reported a minor issue
    MinorIssue = 1,
    /// Sensor reported a critical fault
    CriticalFault = 2,
    /// Reading is unusable and must be imputed
    Invalid = 3,
}

impl StatusCode {
    /// All codes, ordered by their numeric value
    pub const ALL: [StatusCode; 4] = [
        Self::Normal,
        Self::MinorIssue,
        Self::CriticalFault,
        Self::Invalid,
    ];

    /// Numeric code value
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Critical-fault status (code 2)
    pub fn is_critical(self) -> bool {
        self == Self::CriticalFault
    }

    /// Invalid-reading status (code 3)
    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

impl TryFrom<u8> for StatusCode {
    type Error = TelemetryError;

    fn try_from(code: u8) -> TelemetryResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(TelemetryError::parameter("status_code", "must be in 0..=3"))
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> u8 {
        status.code()
    }
}

/// Status codes parallel to a temperature sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodes {
    codes: Vec<StatusCode>,
}

impl StatusCodes {
    /// Wrap already-typed codes
    pub fn new(codes: Vec<StatusCode>) -> Self {
        Self { codes }
    }

    /// Build from raw numeric codes, rejecting anything outside 0..=3
    pub fn from_raw(raw: &[u8]) -> TelemetryResult<Self> {
        let codes = raw
            .iter()
            .map(|&code| StatusCode::try_from(code))
            .collect::<TelemetryResult<Vec<_>>>()?;
        Ok(Self { codes })
    }

    /// Codes in reading order
    pub fn codes(&self) -> &[StatusCode] {
        &self.codes
    }

    /// Number of codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when there are no codes
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// How many readings carry the given status
    pub fn count(&self, status: StatusCode) -> usize {
        self.codes.iter().filter(|&&code| code == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_units() {
        assert_eq!(Quantity::Temperature.unit(), "°C");
        assert_eq!(Quantity::Pressure.unit(), "kPa");
        assert_eq!(Quantity::Pressure.to_string(), "Pressure");
    }

    #[test]
    fn sample_keeps_order_and_length() {
        let sample = Sample::temperature(vec![3.0, 1.0, 2.0]);
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.readings(), &[3.0, 1.0, 2.0]);
        assert_eq!(sample.quantity(), Quantity::Temperature);
        assert!(!sample.is_empty());
    }

    #[test]
    fn status_from_raw_codes() {
        let status = StatusCodes::from_raw(&[0, 1, 2, 3, 3]).unwrap();
        assert_eq!(status.len(), 5);
        assert_eq!(status.count(StatusCode::Invalid), 2);
        assert_eq!(status.count(StatusCode::CriticalFault), 1);
        assert!(status.codes()[2].is_critical());
        assert!(status.codes()[3].is_invalid());
    }

    #[test]
    fn out_of_range_code_is_rejected() {
        let err = StatusCodes::from_raw(&[0, 4]).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn status_serializes_as_number() {
        let json = serde_json::to_string(&StatusCode::CriticalFault).unwrap();
        assert_eq!(json, "2");
        let back: StatusCode = serde_json::from_str("3").unwrap();
        assert_eq!(back, StatusCode::Invalid);
        assert!(serde_json::from_str::<StatusCode>("7").is_err());
    }
}
