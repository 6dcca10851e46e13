//! Capability traits for the node's hardware seams
//!
//! The node touches exactly three peripherals: an ADC (gas channels), a
//! digital temperature/humidity sensor, and the serial output link. Each
//! is a trait so targets supply one concrete implementation and tests
//! substitute fakes. Keep them simple - this is a single polling loop,
//! not a driver framework.

use crate::curves::GasSensor;
use crate::errors::NodeResult;

/// One temperature/humidity measurement
///
/// Fields may be NaN when the underlying driver detected a fault
/// (disconnect, timeout, checksum). The sampler substitutes the sentinel
/// before anything downstream sees the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    /// Air temperature in °C
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// True if either field failed to measure
    pub fn is_faulty(&self) -> bool {
        self.temperature_c.is_nan() || self.humidity_pct.is_nan()
    }
}

/// Source of raw analog readings for the gas channels
pub trait AnalogSource {
    /// Take one raw ADC sample from the given gas channel
    ///
    /// Expected domain is 0..=1023; the converter is total over u16 so a
    /// misbehaving ADC cannot panic the loop.
    fn read_raw(&mut self, sensor: GasSensor) -> u16;
}

/// Source of temperature/humidity readings
pub trait ClimateSource {
    /// Take one combined temperature/humidity measurement
    ///
    /// Implementations may report faults either as `Err` or as NaN
    /// fields; both are treated identically by the sampler.
    fn read(&mut self) -> NodeResult<ClimateReading>;
}

/// Byte/text sink standing in for the serial link
pub trait OutputSink {
    /// Write one line, terminated by the sink
    fn write_line(&mut self, line: &str) -> NodeResult<()>;
}
