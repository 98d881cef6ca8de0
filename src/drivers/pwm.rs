//! Status-LED PWM: heart-rate → timer CCR mapping and a simulated channel.
//!
//! The LED brightness tracks heart rate.  A reading is clamped to
//! `0..=max_heart_rate_bpm` and scaled linearly onto `0..=timer_reload`,
//! rounding down.  With the default 200 BPM / ARR 1000 that is simply
//! `clamped * 5`.
//!
//! ## Dual-target design
//!
//! [`SimPwmChannel`] implements `embedded_hal::pwm::SetDutyCycle`, so the
//! adapter that drives it would accept a real timer channel unchanged.
//! On host it tracks the CCR in memory only.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::config::SimConfig;

/// Heart-rate → CCR scaler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmMapper {
    reload: u16,
    max_heart_rate: u16,
}

impl PwmMapper {
    pub const fn new(reload: u16, max_heart_rate: u16) -> Self {
        Self {
            reload,
            max_heart_rate,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.timer_reload, config.max_heart_rate_bpm)
    }

    /// Compute the capture/compare value for a heart rate.
    ///
    /// Always within `0..=reload`.  A zero full-scale rate yields 0.
    pub fn ccr(&self, heart_rate: i32) -> u16 {
        if self.max_heart_rate == 0 {
            return 0;
        }
        let clamped = heart_rate.clamp(0, i32::from(self.max_heart_rate)) as u32;
        (clamped * u32::from(self.reload) / u32::from(self.max_heart_rate)) as u16
    }

    /// CCR as a percentage of the reload value.
    pub fn duty_percent(&self, ccr: u16) -> f32 {
        duty_percent(ccr, self.reload)
    }

    pub const fn reload(&self) -> u16 {
        self.reload
    }
}

impl Default for PwmMapper {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// `ccr / reload` in percent.  Zero reload reads as 0 %.
pub fn duty_percent(ccr: u16, reload: u16) -> f32 {
    if reload == 0 {
        return 0.0;
    }
    f32::from(ccr) * 100.0 / f32::from(reload)
}

// ---------------------------------------------------------------------------
// Simulated timer channel
// ---------------------------------------------------------------------------

/// In-memory timer output-compare channel.
#[derive(Debug)]
pub struct SimPwmChannel {
    reload: u16,
    ccr: u16,
    writes: u64,
}

impl SimPwmChannel {
    pub fn new(reload: u16) -> Self {
        Self {
            reload,
            ccr: 0,
            writes: 0,
        }
    }

    /// Current capture/compare register value.
    pub fn ccr(&self) -> u16 {
        self.ccr
    }

    /// Number of duty writes since construction.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl ErrorType for SimPwmChannel {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwmChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.reload
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        // Hardware saturates CCR > ARR to 100 %.
        self.ccr = duty.min(self.reload);
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}
