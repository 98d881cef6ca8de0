//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the per-sample pipeline of the monitor: PWM
//! mapping, alarm evaluation, display filtering, and the simulated clock.
//! All interaction with files, registers and the console happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod clock;
pub mod events;
pub mod ports;
pub mod service;
