//! Simulated sensor sources for host runs
//!
//! Stand-ins for the MQ divider ADC and the DHT sensor so the full
//! sampling loop runs on a development machine. Deterministic: a small
//! LCG supplies the noise, seeded at construction, so two runs with the
//! same seed emit identical batches.

use ecosense_core::{
    curves::GasSensor,
    errors::NodeResult,
    traits::{AnalogSource, ClimateReading, ClimateSource},
};

/// Minimal LCG, good enough for simulated noise
struct Lcg {
    state: u32,
}

impl Lcg {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Next value in 0..bound
    fn next(&mut self, bound: u32) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.state >> 16) % bound
    }
}

/// Simulated three-channel MQ array
///
/// Each channel idles around a clean-air baseline with a little noise;
/// baselines differ per gas so the emitted document shows distinct
/// concentrations.
pub struct SimulatedMqArray {
    rng: Lcg,
}

impl SimulatedMqArray {
    /// Create a simulated array with the given noise seed
    pub fn new(seed: u32) -> Self {
        Self { rng: Lcg::new(seed) }
    }

    fn baseline(sensor: GasSensor) -> u16 {
        match sensor {
            GasSensor::Nh3 => 420,
            GasSensor::Ch4 => 380,
            GasSensor::Co => 460,
        }
    }
}

impl AnalogSource for SimulatedMqArray {
    fn read_raw(&mut self, sensor: GasSensor) -> u16 {
        let noise = self.rng.next(41) as i32 - 20;
        (Self::baseline(sensor) as i32 + noise).clamp(0, 1023) as u16
    }
}

/// Simulated DHT-style climate sensor
///
/// Wanders around room conditions; when `fault_every` is set, every n-th
/// read reports NaN the way a real DHT does on a checksum failure.
pub struct SimulatedDht {
    rng: Lcg,
    reads: u32,
    fault_every: Option<u32>,
}

impl SimulatedDht {
    /// Create a healthy simulated sensor
    pub fn new(seed: u32) -> Self {
        Self { rng: Lcg::new(seed), reads: 0, fault_every: None }
    }

    /// Fail every n-th read with NaN fields
    pub fn with_fault_every(mut self, n: u32) -> Self {
        self.fault_every = Some(n.max(1));
        self
    }
}

impl ClimateSource for SimulatedDht {
    fn read(&mut self) -> NodeResult<ClimateReading> {
        self.reads += 1;
        if let Some(n) = self.fault_every {
            if self.reads % n == 0 {
                return Ok(ClimateReading {
                    temperature_c: f32::NAN,
                    humidity_pct: f32::NAN,
                });
            }
        }
        Ok(ClimateReading {
            temperature_c: 21.0 + self.rng.next(60) as f32 * 0.1,
            humidity_pct: 40.0 + self.rng.next(200) as f32 * 0.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_stays_in_domain() {
        let mut adc = SimulatedMqArray::new(7);
        for _ in 0..1000 {
            for sensor in GasSensor::ALL {
                assert!(adc.read_raw(sensor) <= 1023);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimulatedMqArray::new(42);
        let mut b = SimulatedMqArray::new(42);
        for _ in 0..50 {
            assert_eq!(a.read_raw(GasSensor::Nh3), b.read_raw(GasSensor::Nh3));
        }
    }

    #[test]
    fn fault_cadence_reports_nan() {
        let mut dht = SimulatedDht::new(1).with_fault_every(3);
        let mut faults = 0;
        for _ in 0..9 {
            if dht.read().unwrap().is_faulty() {
                faults += 1;
            }
        }
        assert_eq!(faults, 3);
    }
}
