//! Outbound application events.
//!
//! The [`StreamProcessor`](super::service::StreamProcessor) emits these
//! through the [`StatusSink`](super::ports::StatusSink) port.

use crate::alarm::AlarmResult;
use crate::sample::Sample;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A sample passed the display filter.
    Status(StatusReport),

    /// The input stream is exhausted.
    Completed(RunSummary),
}

/// Everything shown for one displayed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    /// 1-based sample number.
    pub sequence: u64,
    pub elapsed_secs: f64,
    pub sample: Sample,
    pub ccr: u16,
    pub duty_percent: f32,
    pub alarm: AlarmResult,
}

/// Totals for one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: u64,
    pub reported: u64,
    pub alarms: u64,
}
