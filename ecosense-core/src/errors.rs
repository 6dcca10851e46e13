//! Error types for the sampling node
//!
//! Errors are kept small and `Copy` since they are returned from the hot
//! sampling loop: no heap allocation, only `&'static str` reasons.
//!
//! Note that a faulty temperature/humidity read is *not* fatal anywhere in
//! the node: the sampler absorbs `ClimateRead` (and NaN fields) into the
//! -1 sentinel and keeps going. Only sink and serialization failures
//! propagate out of a batch cycle, since the node is useless without its
//! output link.

use thiserror_no_std::Error;

/// Result type for node operations
pub type NodeResult<T> = Result<T, NodeError>;

/// Node errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// Temperature/humidity sensor failed to produce a reading
    /// (disconnected, bus timeout, checksum mismatch)
    #[error("climate read failed: {reason}")]
    ClimateRead {
        /// Driver-supplied description of the fault
        reason: &'static str,
    },

    /// Write to the output link failed
    #[error("output sink write failed")]
    SinkWrite,

    /// Batch document could not be serialized
    #[error("batch serialization failed")]
    Serialize,

    /// Sample buffer already holds a full batch
    #[error("sample buffer full: capacity {capacity}")]
    BufferFull {
        /// Fixed capacity of the buffer that rejected the push
        capacity: usize,
    },
}
