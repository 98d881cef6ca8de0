//! Simulation configuration parameters
//!
//! All tunable parameters for the monitor simulation. The binary runs with
//! [`SimConfig::default()`]; nothing is read from flags or files.

/// Default input file, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "patient_data.csv";

/// Core simulation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    // --- Input ---
    /// CSV file of `<heart_rate>,<spo2>` records
    pub source_path: String,

    // --- PWM (status LED timer) ---
    /// Timer auto-reload value (ARR); full-scale CCR
    pub timer_reload: u16,
    /// Heart rate (BPM) that maps to full-scale CCR
    pub max_heart_rate_bpm: u16,

    // --- Timing ---
    /// Simulated time per sample (milliseconds)
    pub sample_period_ms: u32,
    /// Print a status block every N samples regardless of alarm state
    pub report_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE_PATH.to_owned(),

            // PWM
            timer_reload: 1000,
            max_heart_rate_bpm: 200,

            // Timing
            sample_period_ms: 1,   // 1 kHz sampling
            report_interval: 1000, // once per simulated second
        }
    }
}

impl SimConfig {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("source_path must not be empty"));
        }
        if self.timer_reload == 0 {
            return Err(ConfigError::ValidationFailed("timer_reload must be non-zero"));
        }
        if self.max_heart_rate_bpm == 0 {
            return Err(ConfigError::ValidationFailed(
                "max_heart_rate_bpm must be non-zero",
            ));
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("sample_period_ms must be non-zero"));
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ValidationFailed("report_interval must be non-zero"));
        }
        Ok(())
    }

    /// Simulated seconds per sample.
    pub fn sample_period_secs(&self) -> f64 {
        f64::from(self.sample_period_ms) / 1000.0
    }
}

/// Errors from [`SimConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
