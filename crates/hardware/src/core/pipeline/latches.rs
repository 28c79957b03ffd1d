//! Pipeline latch structure for the IF/ID boundary.
//!
//! The fetch stage owns exactly one latch: the IF/ID pipeline register read by
//! decode. It carries a single instruction together with the flags decode
//! needs to raise fetch-time traps later.

/// Contents of the IF/ID pipeline register (Fetch to Decode stage).
///
/// `Default` is the reset value: invalid, zero PC and instruction, all flags
/// clear.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct PipelineSlot {
    /// Whether the slot holds an instruction decode has not consumed.
    pub valid: bool,
    /// 32-bit instruction encoding (expanded from compressed if needed).
    pub raw_instr: u32,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Whether the instruction was fetched as a 16-bit encoding.
    pub is_compressed: bool,
    /// Whether the 16-bit encoding was illegal; decode raises the trap.
    pub illegal_compressed: bool,
    /// Whether the fetch itself failed (memory protection); carried for decode.
    pub fetch_failed: bool,
}

impl PipelineSlot {
    /// Size of the held instruction in bytes (2 for compressed, 4 for standard).
    pub const fn inst_size(&self) -> u32 {
        if self.is_compressed { 2 } else { 4 }
    }
}
