//! Core sampling engine for EcoSense
//!
//! Polls three MQ-series gas sensors and one temperature/humidity sensor,
//! converts raw ADC codes to ppm with fixed empirical curves, batches 18
//! samples per channel, and emits each batch as pretty-printed JSON over
//! a serial-like output sink.
//!
//! Hardware is abstracted behind three capability traits plus a delay
//! source, so the same loop runs against a real board, a host simulator,
//! or test fakes:
//!
//! ```no_run
//! use ecosense_core::{Sampler, sink::WriterSink, time::SystemDelay};
//! # use ecosense_core::traits::{AnalogSource, ClimateSource, ClimateReading};
//! # use ecosense_core::curves::GasSensor;
//! # use ecosense_core::errors::NodeResult;
//! # struct Adc; impl AnalogSource for Adc {
//! #     fn read_raw(&mut self, _s: GasSensor) -> u16 { 512 }
//! # }
//! # struct Dht; impl ClimateSource for Dht {
//! #     fn read(&mut self) -> NodeResult<ClimateReading> {
//! #         Ok(ClimateReading { temperature_c: 21.0, humidity_pct: 50.0 })
//! #     }
//! # }
//!
//! let mut sampler = Sampler::new(
//!     Adc,
//!     Dht,
//!     WriterSink::new(std::io::stdout()),
//!     SystemDelay,
//! );
//! sampler.run_forever().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod batch;
pub mod constants;
pub mod curves;
pub mod errors;
pub mod sampler;
#[cfg(feature = "std")]
pub mod sink;
pub mod time;
pub mod traits;

// Public API
pub use batch::{BatchDocument, COMPLETION_MARKER};
pub use curves::{raw_to_ppm, tagged_ppm, GasSensor};
pub use errors::{NodeError, NodeResult};
pub use sampler::{startup_banner, Sampler};
pub use traits::{AnalogSource, ClimateReading, ClimateSource, OutputSink};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
