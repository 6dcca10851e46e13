//! Sampling Loop: Read, Convert, Batch, Emit
//!
//! ## Control flow
//!
//! ```text
//! loop {
//!     for tick in 1..=18 {
//!         read gas channels + climate
//!         convert raw -> ppm, NaN -> -1 sentinel
//!         store at tick position, write progress line
//!         sleep SAMPLE_INTERVAL_MS
//!     }
//!     write pretty JSON document + completion marker
//!     sleep BATCH_PAUSE_MS
//! }
//! ```
//!
//! Fully sequential and blocking by design: while sleeping nothing else
//! runs, and once a batch starts all 18 ticks complete unconditionally.
//! There is no cancellation path and no retry; the only failure that
//! stops the loop is losing the output link.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::batch::{BatchDocument, COMPLETION_MARKER};
use crate::constants::sampling::{
    BATCH_PAUSE_MS, CLIMATE_SENTINEL, SAMPLES_PER_BATCH, SAMPLE_INTERVAL_MS,
};
use crate::curves::{raw_to_ppm, GasSensor};
use crate::errors::NodeResult;
use crate::time::DelaySource;
use crate::traits::{AnalogSource, ClimateReading, ClimateSource, OutputSink};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Startup line announcing the sampling configuration
pub fn startup_banner() -> String {
    format!(
        "{} samples every {}s, PPM output",
        SAMPLES_PER_BATCH,
        SAMPLE_INTERVAL_MS / 1000,
    )
}

/// Replace a failed (NaN) climate value with the sentinel
fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        CLIMATE_SENTINEL
    } else {
        value
    }
}

/// The node's single control loop, generic over its hardware seams
///
/// Owns all four capabilities plus nothing else; the sample buffers live
/// inside the [`BatchDocument`] built fresh each cycle, so there is no
/// state carried from one batch to the next.
pub struct Sampler<A, C, O, D> {
    analog: A,
    climate: C,
    sink: O,
    delay: D,
}

impl<A, C, O, D> Sampler<A, C, O, D>
where
    A: AnalogSource,
    C: ClimateSource,
    O: OutputSink,
    D: DelaySource,
{
    /// Wire the four capabilities into a sampler
    pub fn new(analog: A, climate: C, sink: O, delay: D) -> Self {
        Self { analog, climate, sink, delay }
    }

    /// Run exactly one batch: 18 ticks, one document, one marker line
    ///
    /// Returns the emitted document so callers (and tests) can inspect
    /// it. Climate faults are absorbed into the -1 sentinel; only sink
    /// and serialization failures propagate.
    pub fn run_batch(&mut self) -> NodeResult<BatchDocument> {
        let mut doc = BatchDocument::new();

        for tick in 1..=SAMPLES_PER_BATCH {
            let nh3 = raw_to_ppm(self.analog.read_raw(GasSensor::Nh3), GasSensor::Nh3);
            let ch4 = raw_to_ppm(self.analog.read_raw(GasSensor::Ch4), GasSensor::Ch4);
            let co = raw_to_ppm(self.analog.read_raw(GasSensor::Co), GasSensor::Co);

            let climate = self.climate.read().unwrap_or(ClimateReading {
                temperature_c: f32::NAN,
                humidity_pct: f32::NAN,
            });
            let temp = sanitize(climate.temperature_c);
            let humidity = sanitize(climate.humidity_pct);

            doc.push_tick(nh3, ch4, co, temp, humidity)?;

            self.sink.write_line(&format!(
                "Sample {tick}: NH3={nh3:.2}ppm, CH4={ch4:.2}ppm, CO={co:.2}ppm, \
                 Temp={temp:.2}°C, Hum={humidity:.2}%",
            ))?;
            log_debug!("tick {tick}/{SAMPLES_PER_BATCH} stored");

            self.delay.delay_ms(SAMPLE_INTERVAL_MS);
        }

        let json = doc.to_json_pretty()?;
        self.sink.write_line(&json)?;
        self.sink.write_line(COMPLETION_MARKER)?;
        log_debug!("batch emitted, pausing {BATCH_PAUSE_MS}ms");

        self.delay.delay_ms(BATCH_PAUSE_MS);
        Ok(doc)
    }

    /// Write the startup banner, then run batches forever
    ///
    /// Only ever returns with an error, and only when the output link is
    /// lost - there is no other termination path.
    pub fn run_forever(&mut self) -> NodeResult<()> {
        self.sink.write_line(&startup_banner())?;
        loop {
            self.run_batch()?;
        }
    }

    /// Tear the sampler back down into its capabilities
    pub fn into_parts(self) -> (A, C, O, D) {
        (self.analog, self.climate, self.sink, self.delay)
    }
}
