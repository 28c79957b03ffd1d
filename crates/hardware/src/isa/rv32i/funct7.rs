//! RISC-V Base Integer (I) Function Codes (funct7).

/// Default funct7 (ADD, SRL, XOR, etc.).
pub const DEFAULT: u32 = 0b0000000;
/// Alternate funct7 (SUB, SRA).
pub const SUB_SRA: u32 = 0b0100000;
