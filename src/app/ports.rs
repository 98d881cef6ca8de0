//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   SamplePort ──▶ StreamProcessor ──▶ StatusSink
//!                        │
//!                        ▼
//!                   ActuatorPort
//! ```
//!
//! Driven adapters (CSV file, simulated peripherals, console) implement
//! these traits.  The [`StreamProcessor`](super::service::StreamProcessor)
//! consumes them via generics, so the domain core never touches files,
//! registers, or stdout directly.

use crate::sample::Sample;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sample port (driven adapter: input stream → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain pulls one record at a time.
pub trait SamplePort {
    /// Next valid sample, or `None` once the stream has ended.
    ///
    /// A malformed record ends the stream.  Implementations must keep
    /// returning `None` after the first `None`.
    fn next_sample(&mut self) -> Option<Sample>;
}

/// In-memory source, mostly for tests and demos.
impl<I> SamplePort for core::iter::Fuse<I>
where
    I: Iterator<Item = Sample>,
{
    fn next_sample(&mut self) -> Option<Sample> {
        self.next()
    }
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → peripherals)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the indicators.
pub trait ActuatorPort {
    /// Load a capture/compare value into the status-LED timer channel.
    fn set_status_ccr(&mut self, ccr: u16);

    /// Write the alarm pattern to the LED port's output-data register.
    fn set_alarm_odr(&mut self, odr: u16);

    /// Turn every indicator off.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Status sink port (driven adapter: domain → console / log)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`AppEvent`]s through this port.  Adapters decide
/// where they go (stdout, a log, a test recorder).
pub trait StatusSink {
    fn emit(&mut self, event: &AppEvent) -> std::io::Result<()>;
}
