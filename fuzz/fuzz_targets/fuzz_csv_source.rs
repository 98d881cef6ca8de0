//! Fuzz target: `CsvSampleSource` + `StreamProcessor`
//!
//! Drives arbitrary bytes through the CSV reader and the full pipeline and
//! asserts that it never panics, that every reported CCR stays within the
//! reload value, and that the source stays ended once it returns `None`.
//!
//! cargo fuzz run fuzz_csv_source

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use pulseox_sim::adapters::csv_source::CsvSampleSource;
use pulseox_sim::adapters::sim_hardware::SimHardware;
use pulseox_sim::app::events::AppEvent;
use pulseox_sim::app::ports::{SamplePort, StatusSink};
use pulseox_sim::app::service::StreamProcessor;
use pulseox_sim::config::SimConfig;

struct CheckingSink;

impl StatusSink for CheckingSink {
    fn emit(&mut self, event: &AppEvent) -> std::io::Result<()> {
        if let AppEvent::Status(r) = event {
            assert!(r.ccr <= 1000, "CCR exceeds reload");
            assert!(r.duty_percent <= 100.0, "duty exceeds 100 %");
        }
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let config = SimConfig::default();
    let mut proc = StreamProcessor::new(&config);
    let mut hw = SimHardware::new(&config);
    let mut src = CsvSampleSource::new(Cursor::new(data));

    let summary = proc
        .run(&mut src, &mut hw, &mut CheckingSink)
        .expect("checking sink never fails");
    assert!(summary.reported <= summary.processed);
    assert!(summary.alarms <= summary.processed);

    // Once ended, always ended.
    assert!(src.next_sample().is_none());
});
