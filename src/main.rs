//! Pulse-oximeter monitor simulation — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  CsvSampleSource     SimHardware       ConsoleSink       │
//! │  (SamplePort)        (ActuatorPort)    (StatusSink)      │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ──────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        StreamProcessor (pure logic)            │      │
//! │  │  PWM mapper · Alarm evaluator · Display filter │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit codes: `0` stream processed, `1` input file missing or unopenable,
//! `2` any other failure.
#![deny(unused_must_use)]

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};

use pulseox_sim::Error;
use pulseox_sim::adapters::console_sink::ConsoleSink;
use pulseox_sim::adapters::csv_source::CsvSampleSource;
use pulseox_sim::adapters::sim_hardware::SimHardware;
use pulseox_sim::app::events::RunSummary;
use pulseox_sim::app::ports::ActuatorPort;
use pulseox_sim::app::service::StreamProcessor;
use pulseox_sim::config::SimConfig;

// ── Main ──────────────────────────────────────────────────────

fn main() -> ExitCode {
    // ── 1. Logging (stderr; stdout is the monitor console) ────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("pulseox-sim v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut console = ConsoleSink::new(BufWriter::new(stdout.lock()));

    match run(&mut console) {
        Ok(summary) => {
            info!(
                "Done: processed={} reported={} alarms={}",
                summary.processed, summary.reported, summary.alarms
            );
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<Error>() {
            Some(Error::SourceUnavailable { path, .. }) => {
                error!("{:#}", e);
                if let Err(io_err) = console.report_source_missing(path) {
                    error!("Could not print diagnostic: {}", io_err);
                }
                ExitCode::from(1)
            }
            Some(known) => {
                error!("{:#}", e);
                ExitCode::from(known.exit_code())
            }
            None => {
                error!("{:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn run(console: &mut ConsoleSink<impl Write>) -> Result<RunSummary> {
    // ── 2. Configuration (compiled-in) ────────────────────────
    let config = SimConfig::default();
    config
        .validate()
        .map_err(Error::from)
        .context("built-in configuration rejected")?;

    // ── 3. Peripherals + pipeline ─────────────────────────────
    let mut hw = SimHardware::new(&config);
    let mut processor = StreamProcessor::new(&config);

    // ── 4. Drain the input; the file closes at end of scope ───
    let summary = {
        let mut source = CsvSampleSource::open(&config.source_path)?;
        processor
            .run(&mut source, &mut hw, console)
            .context("status output failed")?
    };

    hw.all_off();
    Ok(summary)
}
