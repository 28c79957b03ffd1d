//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) targeted by compressed-instruction expansion.

/// Load instructions (LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, XOR, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Conditional Branch instructions (BEQ, BNE).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump And Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump And Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// Environment breakpoint (EBREAK), fully encoded.
pub const EBREAK: u32 = 0x0010_0073;
