//! Integration tests for the SamplePort → StreamProcessor → sinks pipeline.

use super::mock_hw::{ActuatorCall, FailingSink, MockHardware, RecordingSink};

use pulseox_sim::Error;
use pulseox_sim::app::events::{AppEvent, RunSummary};
use pulseox_sim::app::service::StreamProcessor;
use pulseox_sim::config::SimConfig;
use pulseox_sim::sample::Sample;

fn run(samples: Vec<Sample>) -> (RunSummary, MockHardware, RecordingSink) {
    let mut proc = StreamProcessor::new(&SimConfig::default());
    let mut src = samples.into_iter().fuse();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let summary = proc.run(&mut src, &mut hw, &mut sink).unwrap();
    (summary, hw, sink)
}

// ── Display filter ────────────────────────────────────────────

#[test]
fn first_sample_and_alarms_are_reported() {
    let (_, _, sink) = run(vec![
        Sample::new(100, 98),
        Sample::new(150, 92),
        Sample::new(60, 0),
    ]);

    let reports = sink.reports();
    assert_eq!(sink.sequences(), vec![1, 2, 3]);
    assert_eq!(reports[0].alarm.description, "NORMAL");
    assert_eq!(reports[1].alarm.description, "WARNING: Even Pins ON");
    assert_eq!(reports[2].alarm.description, "SENSOR ERROR");

    let stamps: Vec<String> = reports
        .iter()
        .map(|r| format!("{:.3}", r.elapsed_secs))
        .collect();
    assert_eq!(stamps, ["0.000", "0.001", "0.002"]);
}

#[test]
fn quiet_stream_reports_only_second_marks() {
    let (summary, _, sink) = run(vec![Sample::new(80, 97); 2500]);

    assert_eq!(sink.sequences(), vec![1, 1000, 2000]);
    let stamps: Vec<String> = sink
        .reports()
        .iter()
        .map(|r| format!("{:.3}", r.elapsed_secs))
        .collect();
    assert_eq!(stamps, ["0.000", "0.999", "1.999"]);
    assert_eq!(
        summary,
        RunSummary {
            processed: 2500,
            reported: 3,
            alarms: 0
        }
    );
}

#[test]
fn alarm_in_quiet_stream_is_reported_once() {
    let mut samples = vec![Sample::new(80, 97); 10];
    samples[6] = Sample::new(80, 85);
    let (summary, _, sink) = run(samples);

    assert_eq!(sink.sequences(), vec![1, 7]);
    assert_eq!(sink.reports()[1].alarm.bitmask, 0xAAAA);
    assert_eq!(summary.alarms, 1);
}

#[test]
fn custom_report_interval() {
    let config = SimConfig {
        report_interval: 4,
        ..SimConfig::default()
    };
    let mut proc = StreamProcessor::new(&config);
    let mut src = vec![Sample::new(70, 99); 9].into_iter().fuse();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    proc.run(&mut src, &mut hw, &mut sink).unwrap();
    assert_eq!(sink.sequences(), vec![1, 4, 8]);
}

// ── Actuators ─────────────────────────────────────────────────

#[test]
fn every_sample_drives_both_outputs() {
    let (_, hw, _) = run(vec![Sample::new(100, 98), Sample::new(250, 50)]);

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::SetCcr(500),
            ActuatorCall::SetOdr(0x0000),
            ActuatorCall::SetCcr(1000),
            ActuatorCall::SetOdr(0xAAAA),
        ]
    );
    assert_eq!(hw.last_ccr(), Some(1000));
    assert_eq!(hw.last_odr(), Some(0xAAAA));
}

#[test]
fn filtered_samples_still_drive_outputs() {
    let (_, hw, sink) = run(vec![Sample::new(80, 97); 50]);
    assert_eq!(sink.reports().len(), 1);
    assert_eq!(hw.ccr_writes(), 50);
}

// ── Completion ────────────────────────────────────────────────

#[test]
fn completion_is_last_event() {
    let (summary, _, sink) = run(vec![Sample::new(90, 96); 3]);
    assert!(matches!(sink.events.last(), Some(AppEvent::Completed(_))));
    assert_eq!(sink.completion(), Some(summary));
}

#[test]
fn empty_stream_completes_without_reports() {
    let (summary, hw, sink) = run(Vec::new());
    assert_eq!(summary, RunSummary::default());
    assert!(sink.reports().is_empty());
    assert_eq!(sink.events.len(), 1);
    assert!(hw.calls.is_empty());
}

#[test]
fn sink_failure_is_an_output_error() {
    let mut proc = StreamProcessor::new(&SimConfig::default());
    let mut src = vec![Sample::new(100, 98)].into_iter().fuse();
    let mut hw = MockHardware::new();
    let err = proc.run(&mut src, &mut hw, &mut FailingSink).unwrap_err();
    assert!(matches!(err, Error::Output(std::io::ErrorKind::BrokenPipe)));
    assert_eq!(err.exit_code(), 2);
}
