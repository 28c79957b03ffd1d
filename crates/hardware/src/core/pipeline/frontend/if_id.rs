//! IF/ID register: the only sequential state owned by the fetch stage.
//!
//! One update per tick, chosen by a strict priority chain:
//! reset, load, clear, hold. Exactly one rule fires.

use crate::core::pipeline::latches::PipelineSlot;
use crate::core::pipeline::signals::Decompressed;

/// Inputs of the register update, computed combinationally before the commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterInputs {
    /// Synchronous reset.
    pub reset: bool,
    /// Stage output-valid from the handshake.
    pub output_valid: bool,
    /// The aligner presents a complete instruction.
    pub instr_valid: bool,
    /// Decompressed form of the presented instruction.
    pub instr: Decompressed,
    /// PC of the presented instruction.
    pub pc: u32,
    /// External clear-valid command.
    pub clear_instr_valid: bool,
    /// Fetch-failure indication carried into the slot on a clear.
    pub fetch_failed: bool,
}

/// The rule that fired on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotUpdate {
    /// The slot was reset to its invalid state.
    Reset,
    /// A new instruction was latched.
    Load,
    /// The slot was invalidated.
    Clear,
    /// The slot kept its contents.
    Hold,
}

/// Computes the next slot value and the rule that produced it.
pub const fn step(slot: &PipelineSlot, i: &RegisterInputs) -> (PipelineSlot, SlotUpdate) {
    if i.reset {
        (
            PipelineSlot {
                valid: false,
                raw_instr: 0,
                pc: 0,
                is_compressed: false,
                illegal_compressed: false,
                fetch_failed: false,
            },
            SlotUpdate::Reset,
        )
    } else if i.output_valid && i.instr_valid {
        (
            PipelineSlot {
                valid: true,
                raw_instr: i.instr.instr,
                pc: i.pc,
                is_compressed: i.instr.is_compressed,
                illegal_compressed: i.instr.illegal,
                fetch_failed: false,
            },
            SlotUpdate::Load,
        )
    } else if i.clear_instr_valid {
        (
            PipelineSlot {
                valid: false,
                fetch_failed: i.fetch_failed,
                ..*slot
            },
            SlotUpdate::Clear,
        )
    } else {
        (*slot, SlotUpdate::Hold)
    }
}

/// Owner of the IF/ID pipeline register.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdRegister {
    slot: PipelineSlot,
}

impl IfIdRegister {
    /// Creates a register in its reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, as read by decode.
    pub const fn slot(&self) -> &PipelineSlot {
        &self.slot
    }

    /// Commits one update and reports which rule fired.
    pub const fn tick(&mut self, inputs: &RegisterInputs) -> SlotUpdate {
        let (next, update) = step(&self.slot, inputs);
        self.slot = next;
        update
    }
}
