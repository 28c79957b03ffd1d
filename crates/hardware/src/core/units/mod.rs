//! Reference collaborators of the fetch stage.
//!
//! The stage is generic over its collaborators; this module provides the
//! implementations used by the simulation harness and the integration tests:
//! 1. **Fetch Unit:** A latency-modeled word source backed by a flat memory image.
//! 2. **Aligner:** Half-word realignment for mixed 16/32-bit instruction streams.

/// Half-word instruction aligner.
pub mod aligner;

/// Memory-backed streaming fetch unit.
pub mod fetch;

pub use self::aligner::HalfwordAligner;
pub use self::fetch::MemoryFetchUnit;
