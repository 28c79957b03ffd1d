//! PC Selection: chooses the redirect target among competing sources.
//!
//! The controller drives a 4-bit source code alongside `pc_set`. Codes that
//! do not name a source decode to [`PcSource::Reserved`] and resolve to the
//! boot address, so a corrupted or unimplemented code restarts the core
//! instead of jumping somewhere undefined.

use crate::common::constants::{HALFWORD_ALIGN_MASK, INSTRUCTION_SIZE_32, WORD_ALIGN_MASK};

/// Source of the next fetch address on a redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PcSource {
    /// Boot address, after reset.
    #[default]
    Boot,
    /// Jump target resolved in decode.
    Jump,
    /// Branch target resolved in execute.
    Branch,
    /// Trap or debug entry, see `ExcPcSource`.
    Exception,
    /// Return from machine-mode trap (`mepc`).
    Mret,
    /// Return from debug mode (`dpc`).
    Dret,
    /// Sequential refetch after FENCE.I.
    FenceI,
    /// Unassigned source code; behaves as `Boot`.
    Reserved(u8),
}

impl PcSource {
    /// Raw 4-bit encoding of `Boot`.
    pub const BOOT: u8 = 0b0000;
    /// Raw 4-bit encoding of `FenceI`.
    pub const FENCEI: u8 = 0b0001;
    /// Raw 4-bit encoding of `Jump`.
    pub const JUMP: u8 = 0b0010;
    /// Raw 4-bit encoding of `Branch`.
    pub const BRANCH: u8 = 0b0011;
    /// Raw 4-bit encoding of `Exception`.
    pub const EXCEPTION: u8 = 0b0100;
    /// Raw 4-bit encoding of `Mret`.
    pub const MRET: u8 = 0b0101;
    /// Raw 4-bit encoding of `Dret`.
    pub const DRET: u8 = 0b0111;

    /// Short name used in trace events and statistics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Jump => "jump",
            Self::Branch => "branch",
            Self::Exception => "exception",
            Self::Mret => "mret",
            Self::Dret => "dret",
            Self::FenceI => "fencei",
            Self::Reserved(_) => "reserved",
        }
    }
}

impl From<u8> for PcSource {
    fn from(raw: u8) -> Self {
        match raw {
            Self::BOOT => Self::Boot,
            Self::FENCEI => Self::FenceI,
            Self::JUMP => Self::Jump,
            Self::BRANCH => Self::Branch,
            Self::EXCEPTION => Self::Exception,
            Self::MRET => Self::Mret,
            Self::DRET => Self::Dret,
            other => Self::Reserved(other),
        }
    }
}

/// Candidate addresses the PC mux chooses from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcCandidates {
    /// Jump target resolved in decode.
    pub jump_target_id: u32,
    /// Branch target resolved in execute.
    pub jump_target_ex: u32,
    /// Output of the exception vector unit.
    pub exception_pc: u32,
    /// Saved machine-mode exception PC.
    pub mepc: u32,
    /// Saved debug PC.
    pub depc: u32,
    /// PC of the instruction held in IF/ID (the FENCE.I itself).
    pub current_pc: u32,
    /// Boot address.
    pub boot_addr: u32,
}

/// Selects the redirect target for `source`.
///
/// The result always has bit 0 cleared; the boot address additionally has
/// bits [1:0] cleared.
pub const fn select_pc(source: PcSource, c: &PcCandidates) -> u32 {
    let target = match source {
        PcSource::Jump => c.jump_target_id,
        PcSource::Branch => c.jump_target_ex,
        PcSource::Exception => c.exception_pc,
        PcSource::Mret => c.mepc,
        PcSource::Dret => c.depc,
        PcSource::FenceI => c.current_pc.wrapping_add(INSTRUCTION_SIZE_32),
        PcSource::Boot | PcSource::Reserved(_) => c.boot_addr & WORD_ALIGN_MASK,
    };
    target & HALFWORD_ALIGN_MASK
}
