//! SpO2 alarm evaluator.
//!
//! Maps an oxygen-saturation reading to one of four fixed LED patterns on
//! GPIO port D.  The mask is written to the port's output-data register
//! (ODR) every sample, so the pattern always reflects the latest reading.
//!
//! | SpO2        | Level         | ODR      |
//! |-------------|---------------|----------|
//! | `== 0`      | `SensorError` | `0xFFFF` |
//! | `< 90`      | `Critical`    | `0xAAAA` |
//! | `< 95`      | `Warning`     | `0x5555` |
//! | otherwise   | `Normal`      | `0x0000` |
//!
//! Checks run top to bottom and the first match wins, so a reading of zero
//! is a sensor error rather than critical hypoxia.

use core::fmt;

/// SpO2 below this is critical hypoxia.
pub const CRITICAL_BELOW: i32 = 90;
/// SpO2 below this (and at or above [`CRITICAL_BELOW`]) is a warning.
pub const WARNING_BELOW: i32 = 95;

/// Alarm severity, each carrying a fixed ODR pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum AlarmLevel {
    /// All LEDs off.
    Normal = 0x0000,
    /// Even pins on.
    Warning = 0x5555,
    /// Odd pins on.
    Critical = 0xAAAA,
    /// Sensor disconnected; every pin on.
    SensorError = 0xFFFF,
}

impl AlarmLevel {
    /// Classify an SpO2 reading.  Total over `i32`.
    pub const fn from_spo2(spo2: i32) -> Self {
        if spo2 == 0 {
            Self::SensorError
        } else if spo2 < CRITICAL_BELOW {
            Self::Critical
        } else if spo2 < WARNING_BELOW {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// ODR bitmask for this level.
    pub const fn mask(self) -> u16 {
        self as u16
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Warning => "WARNING: Even Pins ON",
            Self::Critical => "CRITICAL: Odd Pins ON",
            Self::SensorError => "SENSOR ERROR",
        }
    }

    /// True for every level except [`AlarmLevel::Normal`].
    pub const fn is_active(self) -> bool {
        self.mask() != AlarmLevel::Normal.mask()
    }
}

impl fmt::Display for AlarmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of evaluating one reading: the ODR pattern and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmResult {
    pub bitmask: u16,
    pub description: &'static str,
}

impl From<AlarmLevel> for AlarmResult {
    fn from(level: AlarmLevel) -> Self {
        Self {
            bitmask: level.mask(),
            description: level.description(),
        }
    }
}

/// Evaluate an SpO2 reading into its alarm pattern.
pub const fn evaluate(spo2: i32) -> AlarmResult {
    let level = AlarmLevel::from_spo2(spo2);
    AlarmResult {
        bitmask: level.mask(),
        description: level.description(),
    }
}
