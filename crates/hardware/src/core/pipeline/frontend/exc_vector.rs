//! Exception Vector Unit: computes trap and debug entry addresses.
//!
//! The trap-vector table layout is programmer-visible:
//!
//! ```text
//!  31                 8 7 6     2 1 0
//! +--------------------+-+-------+---+
//! |     mtvec_base     |0| index | 00|   IRQ
//! +--------------------+-+-------+---+
//! |     mtvec_base     |  0000_0000  |   synchronous exception
//! +--------------------+-------------+
//! ```
//!
//! All synchronous traps share offset 0; the 32 vectored interrupt entries
//! are spaced 4 bytes apart.

use crate::common::constants::{
    IRQ_VEC_INDEX_MASK, IRQ_VEC_INDEX_SHIFT, MTVEC_BASE_MASK, MTVEC_BASE_SHIFT, WORD_ALIGN_MASK,
};

/// Kind of trap or debug entry selected when the PC source is `Exception`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExcPcSource {
    /// Synchronous exception, base slot of the vector table.
    #[default]
    Exception,
    /// Vectored interrupt.
    Irq,
    /// Debug-mode entry (halt request, breakpoint, single step).
    DebugEntry,
    /// Exception raised while in debug mode.
    DebugException,
    /// Unassigned code; behaves as `Exception`.
    Reserved(u8),
}

impl ExcPcSource {
    /// Raw 3-bit encoding of `Exception`.
    pub const EXCEPTION: u8 = 0b000;
    /// Raw 3-bit encoding of `Irq`.
    pub const IRQ: u8 = 0b001;
    /// Raw 3-bit encoding of `DebugEntry`.
    pub const DEBUG_ENTRY: u8 = 0b010;
    /// Raw 3-bit encoding of `DebugException`.
    pub const DEBUG_EXCEPTION: u8 = 0b011;
}

impl From<u8> for ExcPcSource {
    fn from(raw: u8) -> Self {
        match raw {
            Self::EXCEPTION => Self::Exception,
            Self::IRQ => Self::Irq,
            Self::DEBUG_ENTRY => Self::DebugEntry,
            Self::DEBUG_EXCEPTION => Self::DebugException,
            other => Self::Reserved(other),
        }
    }
}

/// Computes the trap or debug entry address for `source`.
///
/// `mtvec_base` is truncated to 24 bits and `vec_index` to 5 bits.
pub const fn select_exception_pc(
    source: ExcPcSource,
    mtvec_base: u32,
    vec_index: u32,
    dm_halt_addr: u32,
    dm_exception_addr: u32,
) -> u32 {
    let table = (mtvec_base & MTVEC_BASE_MASK) << MTVEC_BASE_SHIFT;
    match source {
        ExcPcSource::Irq => table | (vec_index & IRQ_VEC_INDEX_MASK) << IRQ_VEC_INDEX_SHIFT,
        ExcPcSource::DebugEntry => dm_halt_addr & WORD_ALIGN_MASK,
        ExcPcSource::DebugException => dm_exception_addr & WORD_ALIGN_MASK,
        ExcPcSource::Exception | ExcPcSource::Reserved(_) => table,
    }
}
