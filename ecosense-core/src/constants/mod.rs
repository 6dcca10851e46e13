//! Build-time configuration for the sampling node
//!
//! Everything the node can be tuned by lives here as a compile-time
//! constant: the ADC characteristics, the voltage-divider and calibration
//! curve parameters, and the batch cadence. There is deliberately no
//! runtime configuration surface (no CLI, no config file, no env vars) -
//! the node is flashed once and runs one fixed schedule.

pub mod conversion;
pub mod sampling;

pub use conversion::{
    ADC_MAX, LOAD_RESISTANCE_KOHM, SUPPLY_VOLTAGE_V,
};
pub use sampling::{
    BATCH_PAUSE_MS, CLIMATE_SENTINEL, SAMPLES_PER_BATCH, SAMPLE_INTERVAL_MS,
};
