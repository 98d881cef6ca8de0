//! CSV source + console sink end to end, in memory.

use std::io::Cursor;

use super::mock_hw::MockHardware;

use pulseox_sim::adapters::console_sink::ConsoleSink;
use pulseox_sim::adapters::csv_source::CsvSampleSource;
use pulseox_sim::app::service::StreamProcessor;
use pulseox_sim::config::SimConfig;

fn console_output(input: &str) -> String {
    let mut proc = StreamProcessor::new(&SimConfig::default());
    let mut src = CsvSampleSource::new(Cursor::new(input.to_owned()));
    let mut hw = MockHardware::new();
    let mut sink = ConsoleSink::new(Vec::new());
    proc.run(&mut src, &mut hw, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn three_records_full_transcript() {
    let out = console_output("100,98\n150,92\n60,0\n");
    let expected = "\
Time: 0.000 s | BPM: 100 | SpO2: 98
  -> [PWM] Calculated CCR Value: 500 (Duty: 50.0%)
  -> [GPIO] Port D ODR Value: 0x0000 (NORMAL)
--------------------------------------------------------------
Time: 0.001 s | BPM: 150 | SpO2: 92
  -> [PWM] Calculated CCR Value: 750 (Duty: 75.0%)
  -> [GPIO] Port D ODR Value: 0x5555 (WARNING: Even Pins ON)
--------------------------------------------------------------
Time: 0.002 s | BPM: 60 | SpO2: 0
  -> [PWM] Calculated CCR Value: 300 (Duty: 30.0%)
  -> [GPIO] Port D ODR Value: 0xFFFF (SENSOR ERROR)
--------------------------------------------------------------

>>> Simulation Completed Successfully.
";
    assert_eq!(out, expected);
}

#[test]
fn empty_input_prints_only_completion() {
    assert_eq!(
        console_output(""),
        "\n>>> Simulation Completed Successfully.\n"
    );
}

#[test]
fn malformed_line_stops_processing() {
    let out = console_output("100,98\n150;92\n60,0\n");
    assert_eq!(out.matches("Time:").count(), 1);
    assert!(!out.contains("SENSOR ERROR"));
    assert!(out.ends_with(">>> Simulation Completed Successfully.\n"));
}

#[test]
fn clamped_heart_rate_is_printed_unclamped() {
    let out = console_output("240,99\n");
    assert!(out.contains("BPM: 240 |"));
    assert!(out.contains("CCR Value: 1000 (Duty: 100.0%)"));
}
