//! Compressed Instruction Expansion.
//!
//! Provides the `expand` function which converts a 16-bit RV32C instruction
//! into its 32-bit RV32I equivalent. Floating-point compressed loads and
//! stores are rejected because no FPU is modeled.

use super::constants::{CREG_BASE, QUADRANT_0, QUADRANT_1, QUADRANT_2, REG_RA, REG_SP, q0, q1, q2};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Expands a 16-bit RVC instruction into its 32-bit equivalent.
///
/// Returns `None` for reserved and illegal encodings (including the all-zero
/// half-word) and for quadrant 3, which is not a compressed encoding.
pub fn expand(inst: u16) -> Option<u32> {
    let c = u32::from(inst);
    let op = c & 0x3;
    let f3 = bits(c, 15, 13);

    match op {
        QUADRANT_0 => expand_q0(c, f3),
        QUADRANT_1 => expand_q1(c, f3),
        QUADRANT_2 => expand_q2(c, f3),
        _ => None,
    }
}

const fn expand_q0(c: u32, f3: u32) -> Option<u32> {
    let rd_p = CREG_BASE + bits(c, 4, 2);
    let rs1_p = CREG_BASE + bits(c, 9, 7);
    let word_off = (bits(c, 12, 10) << 3 | bit(c, 6) << 2 | bit(c, 5) << 6) as i32;

    match f3 {
        q0::C_ADDI4SPN => {
            let nzuimm = bits(c, 12, 11) << 4 | bits(c, 10, 7) << 6 | bit(c, 6) << 2 | bit(c, 5) << 3;
            if nzuimm == 0 {
                return None;
            }
            Some(i_type(nzuimm as i32, REG_SP, funct3::ADD_SUB, rd_p, opcodes::OP_IMM))
        }
        q0::C_LW => Some(i_type(word_off, rs1_p, funct3::LW, rd_p, opcodes::OP_LOAD)),
        q0::C_SW => Some(s_type(word_off, rd_p, rs1_p, funct3::SW, opcodes::OP_STORE)),
        // C.FLD, C.FLW, C.FSD, C.FSW and the reserved slot
        _ => None,
    }
}

const fn expand_q1(c: u32, f3: u32) -> Option<u32> {
    let rd = bits(c, 11, 7);
    let rd_p = CREG_BASE + bits(c, 9, 7);
    let rs2_p = CREG_BASE + bits(c, 4, 2);
    let imm6 = sign_extend(bit(c, 12) << 5 | bits(c, 6, 2), 6);

    match f3 {
        q1::C_ADDI => Some(i_type(imm6, rd, funct3::ADD_SUB, rd, opcodes::OP_IMM)),
        q1::C_JAL => Some(j_type(cj_imm(c), REG_RA)),
        q1::C_LI => Some(i_type(imm6, 0, funct3::ADD_SUB, rd, opcodes::OP_IMM)),
        q1::C_LUI_ADDI16SP if rd == REG_SP => {
            let nzimm = bit(c, 12) << 9
                | bit(c, 6) << 4
                | bit(c, 5) << 6
                | bits(c, 4, 3) << 7
                | bit(c, 2) << 5;
            if nzimm == 0 {
                return None;
            }
            Some(i_type(
                sign_extend(nzimm, 10),
                REG_SP,
                funct3::ADD_SUB,
                REG_SP,
                opcodes::OP_IMM,
            ))
        }
        q1::C_LUI_ADDI16SP => {
            if imm6 == 0 {
                return None;
            }
            Some(((imm6 as u32) << 12) | rd << 7 | opcodes::OP_LUI)
        }
        q1::C_MISC_ALU => expand_q1_alu(c, rd_p, rs2_p, imm6),
        q1::C_J => Some(j_type(cj_imm(c), 0)),
        q1::C_BEQZ => Some(b_type(cb_imm(c), 0, rd_p, funct3::BEQ)),
        q1::C_BNEZ => Some(b_type(cb_imm(c), 0, rd_p, funct3::BNE)),
        _ => None,
    }
}

const fn expand_q1_alu(c: u32, rd_p: u32, rs2_p: u32, imm6: i32) -> Option<u32> {
    let shamt = bits(c, 6, 2);
    match bits(c, 11, 10) {
        // shamt[5] set is reserved on RV32
        0b00 if bit(c, 12) == 0 => Some(i_type(
            shamt as i32,
            rd_p,
            funct3::SRL_SRA,
            rd_p,
            opcodes::OP_IMM,
        )),
        0b01 if bit(c, 12) == 0 => Some(i_type(
            (funct7::SUB_SRA << 5 | shamt) as i32,
            rd_p,
            funct3::SRL_SRA,
            rd_p,
            opcodes::OP_IMM,
        )),
        0b10 => Some(i_type(imm6, rd_p, funct3::AND, rd_p, opcodes::OP_IMM)),
        0b11 if bit(c, 12) == 0 => {
            let (f7, f3) = match bits(c, 6, 5) {
                0b00 => (funct7::SUB_SRA, funct3::ADD_SUB),
                0b01 => (funct7::DEFAULT, funct3::XOR),
                0b10 => (funct7::DEFAULT, funct3::OR),
                _ => (funct7::DEFAULT, funct3::AND),
            };
            Some(r_type(f7, rs2_p, rd_p, f3, rd_p))
        }
        _ => None,
    }
}

const fn expand_q2(c: u32, f3: u32) -> Option<u32> {
    let rd = bits(c, 11, 7);
    let rs2 = bits(c, 6, 2);

    match f3 {
        q2::C_SLLI if bit(c, 12) == 0 => Some(i_type(
            rs2 as i32,
            rd,
            funct3::SLL,
            rd,
            opcodes::OP_IMM,
        )),
        q2::C_LWSP => {
            if rd == 0 {
                return None;
            }
            let uimm = bit(c, 12) << 5 | bits(c, 6, 4) << 2 | bits(c, 3, 2) << 6;
            Some(i_type(uimm as i32, REG_SP, funct3::LW, rd, opcodes::OP_LOAD))
        }
        q2::C_MISC_ALU => match (bit(c, 12), rd, rs2) {
            (0, 0, 0) => None,
            (0, rs1, 0) => Some(i_type(0, rs1, funct3::JALR, 0, opcodes::OP_JALR)),
            (0, rd, rs2) => Some(r_type(funct7::DEFAULT, rs2, 0, funct3::ADD_SUB, rd)),
            (_, 0, 0) => Some(opcodes::EBREAK),
            (_, rs1, 0) => Some(i_type(0, rs1, funct3::JALR, REG_RA, opcodes::OP_JALR)),
            (_, rd, rs2) => Some(r_type(funct7::DEFAULT, rs2, rd, funct3::ADD_SUB, rd)),
        },
        q2::C_SWSP => {
            let uimm = bits(c, 12, 9) << 2 | bits(c, 8, 7) << 6;
            Some(s_type(uimm as i32, rs2, REG_SP, funct3::SW, opcodes::OP_STORE))
        }
        // FP stack-pointer loads/stores and C.SLLI with shamt[5] set
        _ => None,
    }
}

/// C.J / C.JAL offset: `imm[11|4|9:8|10|6|7|3:1|5]` in bits 12..2.
const fn cj_imm(c: u32) -> i32 {
    let imm = bit(c, 12) << 11
        | bit(c, 11) << 4
        | bits(c, 10, 9) << 8
        | bit(c, 8) << 10
        | bit(c, 7) << 6
        | bit(c, 6) << 7
        | bits(c, 5, 3) << 1
        | bit(c, 2) << 5;
    sign_extend(imm, 12)
}

/// C.BEQZ / C.BNEZ offset: `imm[8|4:3]` in bits 12..10, `imm[7:6|2:1|5]` in bits 6..2.
const fn cb_imm(c: u32) -> i32 {
    let imm = bit(c, 12) << 8
        | bits(c, 11, 10) << 3
        | bits(c, 6, 5) << 6
        | bits(c, 4, 3) << 1
        | bit(c, 2) << 5;
    sign_extend(imm, 9)
}

#[inline]
const fn bit(c: u32, n: u32) -> u32 {
    (c >> n) & 1
}

#[inline]
const fn bits(c: u32, hi: u32, lo: u32) -> u32 {
    (c >> lo) & ((1 << (hi - lo + 1)) - 1)
}

#[inline]
const fn sign_extend(value: u32, width: u32) -> i32 {
    let shift = 32 - width;
    ((value << shift) as i32) >> shift
}

const fn i_type(imm: i32, rs1: u32, f3: u32, rd: u32, op: u32) -> u32 {
    ((imm as u32) & 0xFFF) << 20 | rs1 << 15 | f3 << 12 | rd << 7 | op
}

const fn r_type(f7: u32, rs2: u32, rs1: u32, f3: u32, rd: u32) -> u32 {
    f7 << 25 | rs2 << 20 | rs1 << 15 | f3 << 12 | rd << 7 | opcodes::OP_REG
}

const fn s_type(imm: i32, rs2: u32, rs1: u32, f3: u32, op: u32) -> u32 {
    let imm = imm as u32;
    bits(imm, 11, 5) << 25 | rs2 << 20 | rs1 << 15 | f3 << 12 | bits(imm, 4, 0) << 7 | op
}

const fn b_type(imm: i32, rs2: u32, rs1: u32, f3: u32) -> u32 {
    let imm = imm as u32;
    bit(imm, 12) << 31
        | bits(imm, 10, 5) << 25
        | rs2 << 20
        | rs1 << 15
        | f3 << 12
        | bits(imm, 4, 1) << 8
        | bit(imm, 11) << 7
        | opcodes::OP_BRANCH
}

const fn j_type(imm: i32, rd: u32) -> u32 {
    let imm = imm as u32;
    bit(imm, 20) << 31
        | bits(imm, 10, 1) << 21
        | bit(imm, 11) << 20
        | bits(imm, 19, 12) << 12
        | rd << 7
        | opcodes::OP_JAL
}
