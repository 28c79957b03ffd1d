//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings the fetch stage needs, organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit), targets of compressed expansion.
//! * `rvc`: Standard Extension for Compressed Instructions.

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Compressed instruction extension (16-bit instruction encoding).
pub mod rvc;
