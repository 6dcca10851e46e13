//! Delay capability for the sampling cadence
//!
//! All pacing in the node is blocking sleep on the single thread of
//! execution (no scheduler, no interrupts). The sleep itself is a trait
//! so tests and simulations run a full batch without waiting out the
//! real multi-minute schedule.

/// Blocking sleep capability
pub trait DelaySource {
    /// Block the calling thread for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Wall-clock delay via `std::thread::sleep`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SystemDelay;

#[cfg(feature = "std")]
impl DelaySource for SystemDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

/// Non-blocking delay for tests and simulation
///
/// Records the total requested sleep so tests can assert the schedule
/// without actually waiting.
#[derive(Debug, Clone, Default)]
pub struct NoopDelay {
    /// Sum of all requested delays in milliseconds
    pub total_ms: u64,
}

impl NoopDelay {
    /// Create a delay source that never blocks
    pub const fn new() -> Self {
        Self { total_ms: 0 }
    }
}

impl DelaySource for NoopDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
    }
}
