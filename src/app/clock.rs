//! Simulated sample clock and counter.
//!
//! Time advances only when a sample is processed; there is no wall clock.
//! Elapsed seconds are derived from an integer tick count so that long
//! runs print exact millisecond marks (`1.000`, `2.000`, ...).

/// Monotonic simulated time, one tick per processed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    ticks: u64,
    step_secs: f64,
}

impl SimClock {
    pub fn new(step_secs: f64) -> Self {
        Self {
            ticks: 0,
            step_secs,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.ticks as f64 * self.step_secs
    }

    /// Advance by one step.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Running count of processed samples; the first sample is number 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleCounter(u64);

impl SampleCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Count one sample and return the new total.
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    pub const fn is_first(&self) -> bool {
        self.0 == 1
    }

    /// True when the count is a non-zero multiple of `interval`.
    pub const fn on_interval(&self, interval: u64) -> bool {
        interval != 0 && self.0 != 0 && self.0 % interval == 0
    }
}
