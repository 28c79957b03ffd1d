//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode.

/// Load Word.
pub const LW: u32 = 0b010;
/// Store Word.
pub const SW: u32 = 0b010;
/// Add / Subtract / Add Immediate.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Exclusive OR.
pub const XOR: u32 = 0b100;
/// Shift Right Logical / Arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Inclusive OR.
pub const OR: u32 = 0b110;
/// AND.
pub const AND: u32 = 0b111;
/// Branch if Equal.
pub const BEQ: u32 = 0b000;
/// Branch if Not Equal.
pub const BNE: u32 = 0b001;
/// Jump And Link Register.
pub const JALR: u32 = 0b000;
