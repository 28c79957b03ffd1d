//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Only the encodings needed to expand compressed instructions are defined.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type and shift instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
