//! Batch document assembly and serialization
//!
//! One batch is 18 samples per channel, held in five parallel fixed-size
//! arrays. Insertion order is sample order; the whole document is rebuilt
//! every cycle and has no identity beyond a single emission.
//!
//! The JSON field names (`nh3`, `ch4`, `co`, `temp`, `humidity`) are a
//! wire contract with the host-side predictor, which rejects documents
//! whose arrays are not exactly 18 entries long.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use heapless::Vec;
use serde::Serialize;

use crate::constants::sampling::SAMPLES_PER_BATCH;
use crate::errors::{NodeError, NodeResult};

/// Marker line written after each serialized batch
pub const COMPLETION_MARKER: &str = "----- JSON transmission complete -----";

/// Fixed-capacity per-channel sample array
pub type ChannelSamples = Vec<f32, SAMPLES_PER_BATCH>;

/// One batch of samples across all five measured quantities
///
/// Serializes to the five named arrays the host consumer expects. Arrays
/// grow in lockstep via [`BatchDocument::push_tick`], so they are always
/// equal length.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchDocument {
    /// Ammonia concentration per tick (ppm)
    pub nh3: ChannelSamples,
    /// Methane concentration per tick (ppm)
    pub ch4: ChannelSamples,
    /// Carbon monoxide concentration per tick (ppm)
    pub co: ChannelSamples,
    /// Air temperature per tick (°C, -1 sentinel on fault)
    pub temp: ChannelSamples,
    /// Relative humidity per tick (%, -1 sentinel on fault)
    pub humidity: ChannelSamples,
}

impl BatchDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tick's values to all five arrays
    ///
    /// Fails with `BufferFull` past 18 ticks. The sampling loop is
    /// bounded so this never fires in normal operation, but the
    /// invariant is enforced rather than assumed.
    pub fn push_tick(
        &mut self,
        nh3: f32,
        ch4: f32,
        co: f32,
        temp: f32,
        humidity: f32,
    ) -> NodeResult<()> {
        let full = NodeError::BufferFull { capacity: SAMPLES_PER_BATCH };
        self.nh3.push(nh3).map_err(|_| full)?;
        self.ch4.push(ch4).map_err(|_| full)?;
        self.co.push(co).map_err(|_| full)?;
        self.temp.push(temp).map_err(|_| full)?;
        self.humidity.push(humidity).map_err(|_| full)?;
        Ok(())
    }

    /// Number of ticks recorded so far
    pub fn len(&self) -> usize {
        self.nh3.len()
    }

    /// True if no ticks recorded yet
    pub fn is_empty(&self) -> bool {
        self.nh3.is_empty()
    }

    /// True once all 18 ticks are recorded
    pub fn is_complete(&self) -> bool {
        self.nh3.is_full()
    }

    /// Drop all recorded ticks, keeping capacity
    pub fn clear(&mut self) {
        self.nh3.clear();
        self.ch4.clear();
        self.co.clear();
        self.temp.clear();
        self.humidity.clear();
    }

    /// Render the document as indented JSON
    pub fn to_json_pretty(&self) -> NodeResult<String> {
        serde_json::to_string_pretty(self).map_err(|_| NodeError::Serialize)
    }
}
