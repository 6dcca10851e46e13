//! Raw-ADC to Parts-Per-Million Conversion
//!
//! ## Overview
//!
//! MQ-series gas sensors are chemiresistors: their internal resistance Rs
//! drops as gas concentration rises. The node measures Rs indirectly
//! through a voltage divider and maps the Rs/R0 ratio onto a concentration
//! with the empirical power-law curve from the datasheet:
//!
//! ```text
//! voltage = (raw / ADC_MAX) * Vcc
//! Rs      = RL * (Vcc - voltage) / voltage
//! ppm     = A * (Rs / R0)^B
//! ```
//!
//! ## Known edge case
//!
//! A raw reading of 0 yields zero voltage, which would divide by zero in
//! the Rs computation. The converter returns 0 ppm for that case. This
//! guard also masks a genuinely dead channel (shorted output, unpowered
//! heater), which reads as "no gas" rather than as a fault. That matches
//! the deployed firmware and is preserved as-is.
//!
//! ## Purity
//!
//! Conversion is a pure function of the raw code and the sensor kind; all
//! calibration inputs are compile-time constants from [`crate::constants`].
//! No output bounds-checking is applied: implausible values pass through.

use libm::powf;

use crate::constants::conversion::{
    ADC_MAX, CH4_CURVE_A, CH4_CURVE_B, CH4_R0_KOHM, CO_CURVE_A, CO_CURVE_B, CO_R0_KOHM,
    LOAD_RESISTANCE_KOHM, NH3_CURVE_A, NH3_CURVE_B, NH3_R0_KOHM, SUPPLY_VOLTAGE_V,
};

/// Gas channels the node samples
///
/// Maps to one MQ sensor each; the climate (temperature/humidity) channel
/// is digital and handled separately by [`crate::traits::ClimateSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GasSensor {
    /// Ammonia (MQ-137)
    Nh3 = 0,
    /// Carbon monoxide (MQ-7)
    Co = 1,
    /// Methane (MQ-4)
    Ch4 = 2,
}

impl GasSensor {
    /// All gas channels in batch-document order
    pub const ALL: [GasSensor; 3] = [GasSensor::Nh3, GasSensor::Ch4, GasSensor::Co];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            GasSensor::Nh3 => "NH3",
            GasSensor::Co => "CO",
            GasSensor::Ch4 => "CH4",
        }
    }

    /// Decode a raw sensor-type tag as used on the wire/pin map
    ///
    /// Returns `None` for tags outside the known set; callers that need
    /// the firmware's "unknown tag reads as 0 ppm" policy go through
    /// [`tagged_ppm`] instead.
    pub const fn from_tag(tag: u16) -> Option<GasSensor> {
        match tag {
            0 => Some(GasSensor::Nh3),
            1 => Some(GasSensor::Co),
            2 => Some(GasSensor::Ch4),
            _ => None,
        }
    }

    /// Datasheet curve for this sensor
    pub const fn curve(&self) -> GasCurve {
        match self {
            GasSensor::Nh3 => GasCurve { a: NH3_CURVE_A, b: NH3_CURVE_B },
            GasSensor::Co => GasCurve { a: CO_CURVE_A, b: CO_CURVE_B },
            GasSensor::Ch4 => GasCurve { a: CH4_CURVE_A, b: CH4_CURVE_B },
        }
    }

    /// Clean-air baseline resistance R0 for this sensor (kΩ)
    pub const fn baseline_kohm(&self) -> f32 {
        match self {
            GasSensor::Nh3 => NH3_R0_KOHM,
            GasSensor::Co => CO_R0_KOHM,
            GasSensor::Ch4 => CH4_R0_KOHM,
        }
    }
}

/// Empirical power-law sensitivity curve: ppm = a * ratio^b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCurve {
    /// Scale factor (ppm at Rs == R0)
    pub a: f32,
    /// Exponent (log-log slope, negative for MQ sensors)
    pub b: f32,
}

impl GasCurve {
    /// Evaluate the curve for an Rs/R0 ratio
    pub fn ppm(&self, ratio: f32) -> f32 {
        self.a * powf(ratio, self.b)
    }
}

/// Normalize a raw ADC code to a divider voltage
pub fn raw_to_voltage(raw: u16) -> f32 {
    (raw as f32 / ADC_MAX as f32) * SUPPLY_VOLTAGE_V
}

/// Recover the sensor resistance Rs (kΩ) from the divider voltage
///
/// Caller must guarantee `voltage > 0`; the zero case is handled in
/// [`raw_to_ppm`] before this is reached.
pub fn sensor_resistance_kohm(voltage: f32) -> f32 {
    LOAD_RESISTANCE_KOHM * (SUPPLY_VOLTAGE_V - voltage) / voltage
}

/// Convert a raw ADC reading to a gas concentration in ppm
///
/// Pure and total over the full u16 domain. `raw == 0` returns exactly
/// 0.0 (see module docs for the zero-voltage caveat).
pub fn raw_to_ppm(raw: u16, sensor: GasSensor) -> f32 {
    let voltage = raw_to_voltage(raw);
    if voltage == 0.0 {
        return 0.0;
    }

    let rs = sensor_resistance_kohm(voltage);
    let ratio = rs / sensor.baseline_kohm();
    sensor.curve().ppm(ratio)
}

/// Convert a raw reading tagged with a wire-format sensor id
///
/// Unknown tags yield 0.0 regardless of the raw value - the firmware's
/// explicit default policy, not an error.
pub fn tagged_ppm(raw: u16, tag: u16) -> f32 {
    match GasSensor::from_tag(tag) {
        Some(sensor) => raw_to_ppm(raw, sensor),
        None => 0.0,
    }
}
