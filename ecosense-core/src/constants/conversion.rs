//! ADC and Gas-Curve Calibration Constants
//!
//! Values here mirror the wiring of the deployed node: three MQ-series
//! sensors on a 10-bit ADC, each through a 10 kΩ load resistor on a 5 V
//! rail. Curve coefficients come from log-log fits of the manufacturer
//! datasheet sensitivity plots (ppm = A * (Rs/R0)^B).

// ===== ADC CHARACTERISTICS =====

/// Full-scale ADC code for a 10-bit converter.
///
/// Raw readings span 0..=1023 and map linearly onto the supply rail.
pub const ADC_MAX: u16 = 1023;

/// Analog supply rail in volts.
///
/// The MQ divider outputs swing between 0 V and this value.
pub const SUPPLY_VOLTAGE_V: f32 = 5.0;

// ===== VOLTAGE DIVIDER =====

/// Load resistance RL of the measurement divider (kΩ).
///
/// Same load is fitted to all three gas channels.
pub const LOAD_RESISTANCE_KOHM: f32 = 10.0;

/// Baseline resistance R0 of the NH3 sensor in clean air (kΩ).
pub const NH3_R0_KOHM: f32 = 10.0;

/// Baseline resistance R0 of the CO sensor in clean air (kΩ).
pub const CO_R0_KOHM: f32 = 10.0;

/// Baseline resistance R0 of the CH4 sensor in clean air (kΩ).
pub const CH4_R0_KOHM: f32 = 10.0;

// ===== EMPIRICAL CURVE COEFFICIENTS =====
//
// ppm = A * (Rs/R0)^B, per sensor. A is the ppm at Rs == R0, B the
// log-log slope of the datasheet sensitivity curve.

/// NH3 curve scale factor.
pub const NH3_CURVE_A: f32 = 102.2;
/// NH3 curve exponent.
pub const NH3_CURVE_B: f32 = -2.473;

/// CO curve scale factor.
pub const CO_CURVE_A: f32 = 99.042;
/// CO curve exponent.
pub const CO_CURVE_B: f32 = -1.518;

/// CH4 curve scale factor.
pub const CH4_CURVE_A: f32 = 4.4;
/// CH4 curve exponent.
pub const CH4_CURVE_B: f32 = -2.2;
