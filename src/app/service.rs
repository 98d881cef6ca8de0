//! Stream processor — the hexagonal core.
//!
//! [`StreamProcessor`] owns the mappers, the simulated clock and the
//! sample counter.  All I/O flows through port traits injected at call
//! sites, making the whole pipeline testable with mock adapters.
//!
//! ```text
//!  SamplePort ──▶ ┌────────────────────────┐ ──▶ StatusSink
//!                 │    StreamProcessor     │
//! ActuatorPort ◀──│  PWM · Alarm · Filter  │
//!                 └────────────────────────┘
//! ```
//!
//! Per sample: map heart rate → CCR, SpO2 → ODR, drive both outputs,
//! count the sample, report it if the display filter passes, then advance
//! the clock.  The clock advances *after* reporting, so the first sample
//! is stamped `0.000`.

use log::{debug, info};

use crate::alarm::{self, AlarmResult};
use crate::config::SimConfig;
use crate::drivers::pwm::PwmMapper;
use crate::error::Result;
use crate::sample::Sample;

use super::clock::{SampleCounter, SimClock};
use super::events::{AppEvent, RunSummary, StatusReport};
use super::ports::{ActuatorPort, SamplePort, StatusSink};

// ───────────────────────────────────────────────────────────────
// StreamProcessor
// ───────────────────────────────────────────────────────────────

pub struct StreamProcessor {
    pwm: PwmMapper,
    clock: SimClock,
    counter: SampleCounter,
    report_interval: u64,
    summary: RunSummary,
}

impl StreamProcessor {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pwm: PwmMapper::from_config(config),
            clock: SimClock::new(config.sample_period_secs()),
            counter: SampleCounter::new(),
            report_interval: config.report_interval,
            summary: RunSummary::default(),
        }
    }

    // ── Whole-stream orchestration ────────────────────────────

    /// Drain `source`, then emit [`AppEvent::Completed`].
    ///
    /// Only sink write failures are errors; a malformed record is the
    /// source's end of stream.
    pub fn run(
        &mut self,
        source: &mut impl SamplePort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl StatusSink,
    ) -> Result<RunSummary> {
        info!("Processing patient vitals");
        while let Some(sample) = source.next_sample() {
            self.process(sample, hw, sink)?;
        }
        sink.emit(&AppEvent::Completed(self.summary))?;
        info!(
            "Stream exhausted: {} samples, {} reported, {} with alarm",
            self.summary.processed, self.summary.reported, self.summary.alarms
        );
        Ok(self.summary)
    }

    // ── Per-sample step ───────────────────────────────────────

    /// Process one sample.  Returns the report if it was displayed.
    pub fn process(
        &mut self,
        sample: Sample,
        hw: &mut impl ActuatorPort,
        sink: &mut impl StatusSink,
    ) -> Result<Option<StatusReport>> {
        // 1. Status LED brightness
        let ccr = self.pwm.ccr(sample.heart_rate);
        hw.set_status_ccr(ccr);

        // 2. Alarm pattern
        let alarm = alarm::evaluate(sample.spo2);
        hw.set_alarm_odr(alarm.bitmask);

        // 3. Counters
        let sequence = self.counter.increment();
        self.summary.processed = sequence;
        if alarm.bitmask != 0 {
            self.summary.alarms += 1;
        }

        // 4. Display filter
        let report = if self.should_report(&alarm) {
            let report = StatusReport {
                sequence,
                elapsed_secs: self.clock.elapsed_secs(),
                sample,
                ccr,
                duty_percent: self.pwm.duty_percent(ccr),
                alarm,
            };
            sink.emit(&AppEvent::Status(report))?;
            self.summary.reported += 1;
            Some(report)
        } else {
            debug!("sample #{} filtered", sequence);
            None
        };

        // 5. 1 kHz sample tick
        self.clock.tick();
        Ok(report)
    }

    /// First sample, every `report_interval`-th sample, or any active alarm.
    fn should_report(&self, alarm: &AlarmResult) -> bool {
        self.counter.is_first()
            || self.counter.on_interval(self.report_interval)
            || alarm.bitmask != 0
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn processed(&self) -> u64 {
        self.counter.get()
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}
