//! Global Fetch-Stage Constants.
//!
//! This module defines constants shared by the fetch stage and its collaborators. It includes:
//! 1. **Instruction Constants:** Compressed-encoding masks and instruction sizes.
//! 2. **Alignment Constants:** Masks applied to redirect, boot, and debug addresses.
//! 3. **Trap Vector Constants:** Field widths of the trap-vector base and interrupt index.

/// Bit mask for checking if an instruction is compressed.
pub const COMPRESSED_INSTRUCTION_MASK: u32 = 0x3;

/// Value of the low two bits of a standard (uncompressed) 32-bit instruction.
pub const UNCOMPRESSED_INSTRUCTION_VALUE: u32 = 0x3;

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_16: u32 = 2;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u32 = 4;

/// Mask for the low half-word of a fetch word.
pub const HALFWORD_MASK: u32 = 0xFFFF;

/// Clears bit 0 of a redirect target (2-byte instruction alignment).
pub const HALFWORD_ALIGN_MASK: u32 = !0b1;

/// Clears bits [1:0] of boot and debug addresses (4-byte alignment).
pub const WORD_ALIGN_MASK: u32 = !0b11;

/// Width in bits of the trap-vector base field (`mtvec[31:8]`).
pub const MTVEC_BASE_BITS: u32 = 24;

/// Mask for the 24-bit trap-vector base.
pub const MTVEC_BASE_MASK: u32 = (1 << MTVEC_BASE_BITS) - 1;

/// Shift placing the trap-vector base into bits [31:8].
pub const MTVEC_BASE_SHIFT: u32 = 8;

/// Mask for the 5-bit interrupt vector index.
pub const IRQ_VEC_INDEX_MASK: u32 = 0x1F;

/// Shift spacing vectored interrupt entries 4 bytes apart.
pub const IRQ_VEC_INDEX_SHIFT: u32 = 2;

/// Returns `true` if the low two bits of `inst` mark a 16-bit encoding.
#[inline]
pub const fn is_compressed(inst: u32) -> bool {
    (inst & COMPRESSED_INSTRUCTION_MASK) != UNCOMPRESSED_INSTRUCTION_VALUE
}
