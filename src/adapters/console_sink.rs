//! Console status sink.
//!
//! Implements [`StatusSink`] by writing the monitor's status blocks to a
//! `Write` (stdout in production).  Formatting never depends on the host
//! locale: Rust's `{:.N}` always uses `.` as the decimal separator.
//!
//! One displayed sample prints as:
//!
//! ```text
//! Time: 0.001 s | BPM: 150 | SpO2: 92
//!   -> [PWM] Calculated CCR Value: 750 (Duty: 75.0%)
//!   -> [GPIO] Port D ODR Value: 0x5555 (WARNING: Even Pins ON)
//! --------------------------------------------------------------
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::app::events::{AppEvent, StatusReport};
use crate::app::ports::StatusSink;

const SEPARATOR: &str = "--------------------------------------------------------------";

/// Adapter that prints every [`AppEvent`] to a console stream.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Tell the operator the input file could not be opened.
    pub fn report_source_missing(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "[SYSTEM ERROR] Input file '{}' is missing.",
            path.display()
        )?;
        writeln!(self.out, "Please verify the file location.")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_status(&mut self, r: &StatusReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Time: {:.3} s | BPM: {} | SpO2: {}",
            r.elapsed_secs, r.sample.heart_rate, r.sample.spo2
        )?;
        writeln!(
            self.out,
            "  -> [PWM] Calculated CCR Value: {} (Duty: {:.1}%)",
            r.ccr, r.duty_percent
        )?;
        writeln!(
            self.out,
            "  -> [GPIO] Port D ODR Value: 0x{:04X} ({})",
            r.alarm.bitmask, r.alarm.description
        )?;
        writeln!(self.out, "{SEPARATOR}")
    }
}

impl<W: Write> StatusSink for ConsoleSink<W> {
    fn emit(&mut self, event: &AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Status(report) => self.write_status(report),
            AppEvent::Completed(_) => {
                writeln!(self.out, "\n>>> Simulation Completed Successfully.")?;
                self.out.flush()
            }
        }
    }
}
