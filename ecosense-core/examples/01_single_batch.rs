//! Single Batch Example
//!
//! Runs one full 18-tick batch against simulated hardware and prints the
//! node's exact serial output to stdout: progress lines, the pretty JSON
//! document, and the completion marker. The delay source is a no-op, so
//! the three-minute schedule finishes instantly.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_single_batch
//! ```

use ecosense_core::{
    curves::GasSensor,
    errors::NodeResult,
    sink::WriterSink,
    time::NoopDelay,
    traits::{AnalogSource, ClimateReading, ClimateSource},
    Sampler,
};

/// Slow triangle wave per channel, phase-shifted so the three gases
/// don't move in lockstep
struct WaveAnalog {
    tick: u16,
}

impl AnalogSource for WaveAnalog {
    fn read_raw(&mut self, sensor: GasSensor) -> u16 {
        self.tick += 1;
        let phase = match sensor {
            GasSensor::Nh3 => 0,
            GasSensor::Ch4 => 200,
            GasSensor::Co => 400,
        };
        let t = (self.tick * 23 + phase) % 1024;
        if t < 512 { 300 + t } else { 300 + 1023 - t }
    }
}

/// Room-like climate with a slow drift
struct RoomClimate {
    tick: u32,
}

impl ClimateSource for RoomClimate {
    fn read(&mut self) -> NodeResult<ClimateReading> {
        self.tick += 1;
        Ok(ClimateReading {
            temperature_c: 21.0 + (self.tick % 10) as f32 * 0.2,
            humidity_pct: 45.0 + (self.tick % 7) as f32 * 0.5,
        })
    }
}

fn main() {
    println!("EcoSense Single Batch Example");
    println!("=============================\n");

    let mut sampler = Sampler::new(
        WaveAnalog { tick: 0 },
        RoomClimate { tick: 0 },
        WriterSink::new(std::io::stdout()),
        NoopDelay::new(),
    );

    let doc = sampler.run_batch().expect("stdout sink cannot fail here");

    println!("\nBatch complete: {} ticks per channel", doc.len());
    let (_, _, _, delay) = sampler.into_parts();
    println!(
        "Schedule that a real node would have slept: {}s",
        delay.total_ms / 1000
    );
}
