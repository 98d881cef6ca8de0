//! Vital-sign sample record and its CSV line parser.
//!
//! One record per line: `<heart_rate>,<spo2>`, both decimal integers.
//! Values are kept exactly as read; clamping is the PWM mapper's job.
//!
//! Whitespace follows `scanf("%d,%d")`: allowed before each number, but
//! the comma must follow the heart rate directly (`100 ,98` is rejected).
//! Trailing whitespace after SpO2 is the line ending and is ignored.

use core::fmt;
use core::str::FromStr;

/// One heart-rate / SpO2 reading pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Beats per minute, unclamped.
    pub heart_rate: i32,
    /// Oxygen saturation in percent (0-100 expected, not enforced).
    pub spo2: i32,
}

impl Sample {
    pub const fn new(heart_rate: i32, spo2: i32) -> Self {
        Self { heart_rate, spo2 }
    }
}

impl FromStr for Sample {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (hr, spo2) = line
            .split_once(',')
            .ok_or(RecordError::MissingSeparator)?;
        let heart_rate = hr
            .trim_start()
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidHeartRate)?;
        let spo2 = spo2
            .trim()
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidSpo2)?;
        Ok(Self { heart_rate, spo2 })
    }
}

/// Why a line was rejected as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// No `,` between the two fields.
    MissingSeparator,
    /// First field is not an `i32`.
    InvalidHeartRate,
    /// Second field is not an `i32` (includes a trailing third field).
    InvalidSpo2,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing ',' separator"),
            Self::InvalidHeartRate => write!(f, "heart rate is not an integer"),
            Self::InvalidSpo2 => write!(f, "SpO2 is not an integer"),
        }
    }
}
