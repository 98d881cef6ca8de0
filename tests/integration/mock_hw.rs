//! Mock adapters for integration tests.
//!
//! Records every actuator call and every emitted event so tests can
//! assert on the full history without touching the console.

use pulseox_sim::app::events::{AppEvent, RunSummary, StatusReport};
use pulseox_sim::app::ports::{ActuatorPort, StatusSink};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetCcr(u16),
    SetOdr(u16),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_ccr(&self) -> Option<u16> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetCcr(v) => Some(*v),
            ActuatorCall::AllOff => Some(0),
            ActuatorCall::SetOdr(_) => None,
        })
    }

    pub fn last_odr(&self) -> Option<u16> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetOdr(v) => Some(*v),
            ActuatorCall::AllOff => Some(0),
            ActuatorCall::SetCcr(_) => None,
        })
    }

    pub fn ccr_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::SetCcr(_)))
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_status_ccr(&mut self, ccr: u16) {
        self.calls.push(ActuatorCall::SetCcr(ccr));
    }

    fn set_alarm_odr(&mut self, odr: u16) {
        self.calls.push(ActuatorCall::SetOdr(odr));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn reports(&self) -> Vec<StatusReport> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Status(r) => Some(*r),
                AppEvent::Completed(_) => None,
            })
            .collect()
    }

    pub fn sequences(&self) -> Vec<u64> {
        self.reports().iter().map(|r| r.sequence).collect()
    }

    pub fn completion(&self) -> Option<RunSummary> {
        self.events.iter().find_map(|e| match e {
            AppEvent::Completed(s) => Some(*s),
            AppEvent::Status(_) => None,
        })
    }
}

impl StatusSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) -> std::io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

// ── FailingSink ───────────────────────────────────────────────

/// Sink whose console has gone away.
pub struct FailingSink;

impl StatusSink for FailingSink {
    fn emit(&mut self, _event: &AppEvent) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "console closed",
        ))
    }
}
