//! Batch Cadence and Sentinel Values
//!
//! One batch is 18 consecutive samples, each SAMPLE_INTERVAL_MS apart,
//! followed by a longer pause before the next batch starts. The host-side
//! consumer expects exactly 18 entries per channel array.

/// Number of samples collected per channel before a batch is emitted.
pub const SAMPLES_PER_BATCH: usize = 18;

/// Blocking delay between consecutive sample ticks (milliseconds).
pub const SAMPLE_INTERVAL_MS: u32 = 10_000;

/// Blocking pause between the end of one batch emission and the first
/// tick of the next (milliseconds).
pub const BATCH_PAUSE_MS: u32 = 60_000;

/// Placeholder stored when a temperature/humidity read fails.
///
/// A failed read (NaN from the driver, bus error) is substituted with
/// this value rather than propagated; -1 is unambiguous since the node
/// never measures negative humidity and the deployment never sees -1 °C
/// exactly from a healthy sensor.
pub const CLIMATE_SENTINEL: f32 = -1.0;
