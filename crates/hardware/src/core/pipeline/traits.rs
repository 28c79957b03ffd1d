//! Fetch-stage collaborator interfaces.
//!
//! This module defines the traits the stage is generic over. It provides:
//! 1. **Fetch Unit Interface:** A streaming word source with a redirect port.
//! 2. **Aligner Interface:** Instruction-boundary alignment across fetch words.
//! 3. **Decompressor Interface:** Pure 16-to-32-bit expansion.
//!
//! Sequential collaborators are split into a combinational read (`&self`)
//! and a commit (`&mut self`) so the stage can evaluate every output from one
//! snapshot before any state changes.

use crate::core::pipeline::signals::{
    AlignerOutput, AlignerUpdate, Decompressed, FetchRequest, FetchStatus,
};

/// Streaming source of word-aligned instruction fetches.
pub trait FetchUnit {
    /// Returns the status presented during the current tick.
    fn status(&self) -> FetchStatus;

    /// Applies this tick's commands; called once at the end of the tick.
    fn commit(&mut self, req: FetchRequest);
}

/// Splits fetch words into 16/32-bit instructions.
pub trait Aligner {
    /// Returns the instruction presented for the given fetch word.
    fn output(&self, fetch_valid: bool, fetch_rdata: u32) -> AlignerOutput;

    /// Applies this tick's bookkeeping; called once at the end of the tick.
    fn commit(&mut self, update: AlignerUpdate);
}

/// Expands compressed encodings to their canonical 32-bit form.
pub trait Decompressor {
    /// Expands `instr`; words whose low two bits are `0b11` pass through.
    fn expand(&self, instr: u32) -> Decompressed;
}
