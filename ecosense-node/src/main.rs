//! EcoSense host node
//!
//! Runs the sampling loop forever against simulated sensors, writing the
//! node's serial protocol to stdout: startup banner, 18 progress lines
//! per batch, the pretty JSON document, and the completion marker. Pipe
//! stdout into the host-side collector exactly as a serial port would be.
//!
//! No flags, no config file, no environment variables - the node runs
//! one fixed schedule.

mod sim;

use ecosense_core::{errors::NodeError, sink::WriterSink, time::SystemDelay, Sampler};

use sim::{SimulatedDht, SimulatedMqArray};

fn main() -> Result<(), NodeError> {
    let mut sampler = Sampler::new(
        SimulatedMqArray::new(0x5eed),
        // the occasional checksum fault, like a real DHT on a long cable
        SimulatedDht::new(0xd47).with_fault_every(25),
        WriterSink::new(std::io::stdout()),
        SystemDelay,
    );

    // Returns only if stdout goes away (collector hung up)
    sampler.run_forever()
}
