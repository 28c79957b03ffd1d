//! RISC-V Compressed (C) Extension Constants for RV32.
//!
//! Compressed instructions are divided into three quadrants (0, 1, 2) based
//! on the lowest 2 bits of the instruction; bits 15-13 select the operation
//! within a quadrant.

/// Quadrant 0 (bits 1:0 = 00).
pub const QUADRANT_0: u32 = 0b00;
/// Quadrant 1 (bits 1:0 = 01).
pub const QUADRANT_1: u32 = 0b01;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u32 = 0b10;

/// Register number of the stack pointer (`x2`).
pub const REG_SP: u32 = 2;
/// Register number of the return address (`x1`).
pub const REG_RA: u32 = 1;
/// Offset added to a 3-bit compressed register field (`x8`-`x15`).
pub const CREG_BASE: u32 = 8;

/// Instructions in Quadrant 0.
pub mod q0 {
    /// Compressed Add Immediate, scaled by 4, to Stack Pointer (C.ADDI4SPN).
    pub const C_ADDI4SPN: u32 = 0b000;
    /// Compressed Floating-point Load Double (C.FLD).
    pub const C_FLD: u32 = 0b001;
    /// Compressed Load Word (C.LW).
    pub const C_LW: u32 = 0b010;
    /// Compressed Floating-point Load Word (C.FLW, RV32 only).
    pub const C_FLW: u32 = 0b011;
    /// Compressed Floating-point Store Double (C.FSD).
    pub const C_FSD: u32 = 0b101;
    /// Compressed Store Word (C.SW).
    pub const C_SW: u32 = 0b110;
    /// Compressed Floating-point Store Word (C.FSW, RV32 only).
    pub const C_FSW: u32 = 0b111;
}

/// Instructions in Quadrant 1.
pub mod q1 {
    /// Compressed Add Immediate (C.ADDI, C.NOP).
    pub const C_ADDI: u32 = 0b000;
    /// Compressed Jump And Link (C.JAL, RV32 only).
    pub const C_JAL: u32 = 0b001;
    /// Compressed Load Immediate (C.LI).
    pub const C_LI: u32 = 0b010;
    /// Compressed Load Upper Immediate / Add Immediate 16 to SP (C.LUI / C.ADDI16SP).
    pub const C_LUI_ADDI16SP: u32 = 0b011;
    /// Miscellaneous ALU operations (C.SRLI, C.SRAI, C.ANDI, C.SUB, etc.).
    pub const C_MISC_ALU: u32 = 0b100;
    /// Compressed Jump (C.J).
    pub const C_J: u32 = 0b101;
    /// Compressed Branch Equal Zero (C.BEQZ).
    pub const C_BEQZ: u32 = 0b110;
    /// Compressed Branch Not Equal Zero (C.BNEZ).
    pub const C_BNEZ: u32 = 0b111;
}

/// Instructions in Quadrant 2.
pub mod q2 {
    /// Compressed Shift Left Logical Immediate (C.SLLI).
    pub const C_SLLI: u32 = 0b000;
    /// Compressed Floating-point Load Double from SP (C.FLDSP).
    pub const C_FLDSP: u32 = 0b001;
    /// Compressed Load Word from SP (C.LWSP).
    pub const C_LWSP: u32 = 0b010;
    /// Compressed Floating-point Load Word from SP (C.FLWSP, RV32 only).
    pub const C_FLWSP: u32 = 0b011;
    /// Miscellaneous ALU / Jump (C.JR, C.MV, C.EBREAK, C.JALR, C.ADD).
    pub const C_MISC_ALU: u32 = 0b100;
    /// Compressed Floating-point Store Double to SP (C.FSDSP).
    pub const C_FSDSP: u32 = 0b101;
    /// Compressed Store Word to SP (C.SWSP).
    pub const C_SWSP: u32 = 0b110;
    /// Compressed Floating-point Store Word to SP (C.FSWSP, RV32 only).
    pub const C_FSWSP: u32 = 0b111;
}
