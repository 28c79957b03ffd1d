//! Instruction-fetch pipeline stage.
//!
//! This module contains the fetch stage and the types at its boundaries.
//! It includes the following components:
//! 1. **Frontend:** PC selection, exception vectors, the handshake and the IF/ID register.
//! 2. **Latches:** The IF/ID pipeline register contents read by decode.
//! 3. **Signals:** Per-tick input, output and collaborator signal bundles.
//! 4. **Traits:** Interfaces of the fetch unit, aligner and decompressor.

/// The fetch stage and its combinational blocks.
pub mod frontend;

/// IF/ID pipeline latch.
pub mod latches;

/// Per-tick signal bundles.
pub mod signals;

/// Collaborator interfaces.
pub mod traits;
