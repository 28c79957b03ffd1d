//! Core fetch-stage implementation.
//!
//! This module contains the fetch pipeline stage and the reference
//! collaborators it is driven by in simulation.

/// Fetch pipeline stage (frontend blocks, latches, signals, traits).
pub mod pipeline;

/// Reference fetch unit and aligner.
pub mod units;

pub use self::pipeline::frontend::FetchStage;
