//! RISC-V instruction-fetch stage model.
//!
//! This crate implements a cycle-level model of the IF stage of an in-order
//! RV32IC core with the following:
//! 1. **Stage:** PC selection, exception vectors, the fetch handshake and the IF/ID register.
//! 2. **Collaborators:** Trait seams for the fetch unit, aligner and decompressor.
//! 3. **Reference Units:** A memory-backed fetch unit, a half-word aligner and an RV32C decompressor.
//! 4. **Simulation:** Configuration, a tick-driving harness and statistics collection.

/// Common constants and error types.
pub mod common;
/// Model configuration (defaults, JSON loading, validation).
pub mod config;
/// Fetch stage and reference collaborators.
pub mod core;
/// Instruction set (RV32I constants, RVC expansion).
pub mod isa;
/// Simulation harness.
pub mod sim;
/// Fetch-stage statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The fetch stage, generic over its collaborators.
pub use crate::core::FetchStage;
/// Harness driving the stage with the reference collaborators.
pub use crate::sim::Harness;
