//! Pulse-oximeter monitor simulation library.
//!
//! Exposes the pure-logic modules for integration testing and for the
//! `pulseox-sim` binary.  Peripherals are simulated in memory; the only
//! real I/O lives in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod alarm;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod sample;

pub use error::{Error, Result};
