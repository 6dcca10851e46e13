//! Faulty Climate Sensor Example
//!
//! Shows the node's only failure policy in action: when the
//! temperature/humidity read comes back NaN (disconnected sensor, bus
//! timeout), the sampler substitutes -1 and the batch completes anyway.
//! No retry, no abort - the gas channels keep their real values.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_faulty_climate
//! ```

use ecosense_core::{
    curves::GasSensor,
    errors::NodeResult,
    sink::MemorySink,
    time::NoopDelay,
    traits::{AnalogSource, ClimateReading, ClimateSource},
    Sampler,
};

struct FixedAnalog;

impl AnalogSource for FixedAnalog {
    fn read_raw(&mut self, _sensor: GasSensor) -> u16 {
        512
    }
}

/// Climate sensor whose cable is loose: every third read fails
struct LooseCable {
    reads: u32,
}

impl ClimateSource for LooseCable {
    fn read(&mut self) -> NodeResult<ClimateReading> {
        self.reads += 1;
        if self.reads % 3 == 0 {
            return Ok(ClimateReading {
                temperature_c: f32::NAN,
                humidity_pct: f32::NAN,
            });
        }
        Ok(ClimateReading { temperature_c: 23.0, humidity_pct: 51.0 })
    }
}

fn main() {
    println!("EcoSense Faulty Climate Example");
    println!("===============================\n");

    let mut sampler = Sampler::new(
        FixedAnalog,
        LooseCable { reads: 0 },
        MemorySink::new(),
        NoopDelay::new(),
    );

    let doc = sampler.run_batch().expect("memory sink cannot fail");

    println!("temp array as emitted:");
    for (i, value) in doc.temp.iter().enumerate() {
        let note = if *value < 0.0 { "  <- sentinel, read failed" } else { "" };
        println!("  tick {:2}: {:6.2}{}", i + 1, value, note);
    }

    let faults = doc.temp.iter().filter(|v| **v < 0.0).count();
    println!(
        "\n{faults} of {} ticks substituted; document still complete: {}",
        doc.len(),
        doc.is_complete()
    );
}
