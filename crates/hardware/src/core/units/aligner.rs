//! Half-word instruction aligner.
//!
//! Fetch words are 4-byte aligned, but with the C extension an instruction
//! may start on any 2-byte boundary and a 32-bit encoding may straddle two
//! words. The aligner keeps the leftover upper half of the last consumed word
//! and stitches it to the next one when needed.
//!
//! Presentation rules, in order:
//! 1. A held compressed half-word is presented on its own; the current fetch
//!    word is not consumed until it has been taken.
//! 2. A held lower half of a 32-bit encoding is joined with the low half of
//!    the current fetch word.
//! 3. After a redirect to `pc % 4 == 2` the low half of the first word is
//!    skipped.
//! 4. Otherwise the fetch word is presented as is.

use crate::common::constants::{
    HALFWORD_ALIGN_MASK, HALFWORD_MASK, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32, is_compressed,
};
use crate::core::pipeline::signals::{AlignerOutput, AlignerUpdate};
use crate::core::pipeline::traits::Aligner;

/// Aligner state carried between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfwordAligner {
    pc: u32,
    held: Option<u16>,
    skip_low: bool,
}

impl HalfwordAligner {
    /// Creates an aligner positioned at `pc`.
    pub const fn new(pc: u32) -> Self {
        let pc = pc & HALFWORD_ALIGN_MASK;
        Self {
            pc,
            held: None,
            skip_low: pc & 0b10 != 0,
        }
    }

    /// Address of the next instruction to present.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Half-word carried over from the previous fetch word, if any.
    pub const fn held(&self) -> Option<u16> {
        self.held
    }

    const fn upper(word: u32) -> u16 {
        (word >> 16) as u16
    }
}

impl Aligner for HalfwordAligner {
    fn output(&self, fetch_valid: bool, fetch_rdata: u32) -> AlignerOutput {
        let pc = self.pc;
        match self.held {
            Some(h) if is_compressed(u32::from(h)) => AlignerOutput {
                ready: false,
                instr_aligned: u32::from(h),
                instr_valid: true,
                pc,
            },
            Some(h) => AlignerOutput {
                ready: true,
                instr_aligned: (fetch_rdata << 16) | u32::from(h),
                instr_valid: fetch_valid,
                pc,
            },
            None if !fetch_valid => AlignerOutput {
                ready: true,
                instr_aligned: 0,
                instr_valid: false,
                pc,
            },
            None if self.skip_low => {
                let upper = u32::from(Self::upper(fetch_rdata));
                AlignerOutput {
                    ready: true,
                    instr_aligned: upper,
                    instr_valid: is_compressed(upper),
                    pc,
                }
            }
            None => AlignerOutput {
                ready: true,
                instr_aligned: fetch_rdata,
                instr_valid: true,
                pc,
            },
        }
    }

    fn commit(&mut self, u: AlignerUpdate) {
        if u.redirect {
            *self = Self::new(u.redirect_addr);
            return;
        }

        match self.held {
            Some(h) if is_compressed(u32::from(h)) && u.taken => {
                self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE_16);
                self.held = None;
            }
            Some(h) if !is_compressed(u32::from(h)) && u.consumed => {
                self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE_32);
                self.held = Some(Self::upper(u.fetch_rdata));
            }
            None if u.consumed && self.skip_low => {
                self.skip_low = false;
                let upper = Self::upper(u.fetch_rdata);
                if is_compressed(u32::from(upper)) {
                    self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE_16);
                } else {
                    self.held = Some(upper);
                }
            }
            None if u.consumed => {
                if is_compressed(u.fetch_rdata & HALFWORD_MASK) {
                    self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE_16);
                    self.held = Some(Self::upper(u.fetch_rdata));
                } else {
                    self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE_32);
                }
            }
            _ => {}
        }
    }
}
