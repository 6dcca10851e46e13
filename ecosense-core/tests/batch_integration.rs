//! End-to-end tests for the sampling loop
//!
//! Drives full batch cycles through fake hardware capabilities and checks
//! the emitted byte stream the way the host-side peer consumes it: banner,
//! per-tick progress lines, one brace-balanced pretty JSON document with
//! five 18-entry arrays, and the literal completion marker.

use ecosense_core::{
    curves::GasSensor,
    errors::{NodeError, NodeResult},
    sink::MemorySink,
    time::NoopDelay,
    traits::{AnalogSource, ClimateReading, ClimateSource, OutputSink},
    Sampler, COMPLETION_MARKER,
};

/// Replays a fixed sequence of raw codes, per channel, cycling when
/// exhausted
struct ReplayAnalog {
    codes: Vec<u16>,
    position: usize,
}

impl ReplayAnalog {
    fn new(codes: &[u16]) -> Self {
        Self { codes: codes.to_vec(), position: 0 }
    }
}

impl AnalogSource for ReplayAnalog {
    fn read_raw(&mut self, _sensor: GasSensor) -> u16 {
        let code = self.codes[self.position % self.codes.len()];
        self.position += 1;
        code
    }
}

/// Healthy climate source with a NaN fault injected on selected ticks
struct FlakyClimate {
    reads: usize,
    fail_on: Vec<usize>,
}

impl ClimateSource for FlakyClimate {
    fn read(&mut self) -> NodeResult<ClimateReading> {
        self.reads += 1;
        if self.fail_on.contains(&self.reads) {
            return Ok(ClimateReading {
                temperature_c: f32::NAN,
                humidity_pct: f32::NAN,
            });
        }
        Ok(ClimateReading { temperature_c: 24.0, humidity_pct: 55.0 })
    }
}

/// Sink that loses the link after a fixed number of lines
struct DyingSink {
    inner: MemorySink,
    lines_left: usize,
}

impl OutputSink for DyingSink {
    fn write_line(&mut self, line: &str) -> NodeResult<()> {
        if self.lines_left == 0 {
            return Err(NodeError::SinkWrite);
        }
        self.lines_left -= 1;
        self.inner.write_line(line)
    }
}

#[test]
fn full_batch_document_has_five_complete_arrays() {
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[100, 200, 300, 400, 500, 600]),
        FlakyClimate { reads: 0, fail_on: vec![] },
        MemorySink::new(),
        NoopDelay::new(),
    );

    let doc = sampler.run_batch().unwrap();

    assert_eq!(doc.nh3.len(), 18);
    assert_eq!(doc.ch4.len(), 18);
    assert_eq!(doc.co.len(), 18);
    assert_eq!(doc.temp.len(), 18);
    assert_eq!(doc.humidity.len(), 18);
    assert!(doc.is_complete());
}

#[test]
fn emitted_json_parses_with_wire_field_names() {
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[512]),
        FlakyClimate { reads: 0, fail_on: vec![] },
        MemorySink::new(),
        NoopDelay::new(),
    );
    sampler.run_batch().unwrap();

    let (_, _, sink, _) = sampler.into_parts();
    let json_block = &sink.lines[18];

    let parsed: serde_json::Value = serde_json::from_str(json_block).unwrap();
    for key in ["nh3", "ch4", "co", "temp", "humidity"] {
        let array = parsed[key].as_array().unwrap_or_else(|| panic!("missing {key}"));
        assert_eq!(array.len(), 18, "{key} array length");
    }
    // Pretty-printed: the block spans many lines
    assert!(json_block.lines().count() > 18);
}

#[test]
fn marker_follows_every_batch() {
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[512]),
        FlakyClimate { reads: 0, fail_on: vec![] },
        MemorySink::new(),
        NoopDelay::new(),
    );
    sampler.run_batch().unwrap();
    sampler.run_batch().unwrap();

    let (_, _, sink, _) = sampler.into_parts();
    // Two cycles: 2 * (18 progress + json + marker)
    assert_eq!(sink.lines.len(), 40);
    assert_eq!(sink.lines[19], COMPLETION_MARKER);
    assert_eq!(sink.lines[39], COMPLETION_MARKER);
}

#[test]
fn injected_faults_surface_as_sentinels_in_document_order() {
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[512]),
        FlakyClimate { reads: 0, fail_on: vec![3, 7] },
        MemorySink::new(),
        NoopDelay::new(),
    );

    let doc = sampler.run_batch().unwrap();

    for (i, (&t, &h)) in doc.temp.iter().zip(doc.humidity.iter()).enumerate() {
        let tick = i + 1;
        if tick == 3 || tick == 7 {
            assert_eq!(t, -1.0, "tick {tick} temp");
            assert_eq!(h, -1.0, "tick {tick} humidity");
        } else {
            assert_eq!(t, 24.0, "tick {tick} temp");
            assert_eq!(h, 55.0, "tick {tick} humidity");
        }
        assert!(!t.is_nan() && !h.is_nan());
    }
}

#[test]
fn progress_lines_count_ticks_in_order() {
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[256, 768]),
        FlakyClimate { reads: 0, fail_on: vec![] },
        MemorySink::new(),
        NoopDelay::new(),
    );
    sampler.run_batch().unwrap();

    let (_, _, sink, _) = sampler.into_parts();
    for (i, line) in sink.lines[..18].iter().enumerate() {
        let prefix = format!("Sample {}: NH3=", i + 1);
        assert!(line.starts_with(&prefix), "line {i}: {line}");
        assert!(line.contains("°C"));
        assert!(line.ends_with('%'));
    }
}

#[test]
fn run_forever_stops_only_on_sink_loss() {
    let sink = DyingSink {
        inner: MemorySink::new(),
        // banner + one full cycle + 5 lines into the second batch
        lines_left: 1 + 20 + 5,
    };
    let mut sampler = Sampler::new(
        ReplayAnalog::new(&[512]),
        FlakyClimate { reads: 0, fail_on: vec![] },
        sink,
        NoopDelay::new(),
    );

    let err = sampler.run_forever().unwrap_err();
    assert_eq!(err, NodeError::SinkWrite);

    let (_, _, sink, _) = sampler.into_parts();
    assert_eq!(sink.inner.lines[0], "18 samples every 10s, PPM output");
    assert_eq!(sink.inner.lines[20], COMPLETION_MARKER);
}
