//! RISC-V Compressed Extension (C) for RV32.
//!
//! The C extension provides 16-bit compressed instructions to improve code density.
//!
//! # Structure
//!
//! - `constants`: Quadrant and opcode definitions for compressed instructions.
//! - `expand`: Logic to expand 16-bit compressed instructions into their 32-bit equivalents.

/// Compressed instruction quadrant and opcode constants.
pub mod constants;

/// Logic to expand 16-bit compressed instructions into 32-bit equivalents.
pub mod expand;

use crate::common::constants::{HALFWORD_MASK, is_compressed};
use crate::core::pipeline::signals::Decompressed;
use crate::core::pipeline::traits::Decompressor;

/// Stateless RV32C decompressor.
///
/// Illegal 16-bit encodings are returned zero-extended with `illegal` set so
/// decode can raise the illegal-instruction trap with the original bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct RvcDecompressor;

impl Decompressor for RvcDecompressor {
    fn expand(&self, instr: u32) -> Decompressed {
        if !is_compressed(instr) {
            return Decompressed {
                instr,
                is_compressed: false,
                illegal: false,
            };
        }

        let half = (instr & HALFWORD_MASK) as u16;
        expand::expand(half).map_or_else(
            || Decompressed {
                instr: u32::from(half),
                is_compressed: true,
                illegal: true,
            },
            |expanded| Decompressed {
                instr: expanded,
                is_compressed: true,
                illegal: false,
            },
        )
    }
}
