//! PC Selection Tests.
//!
//! Verifies that `select_pc`:
//!   1. Routes every named source to its candidate
//!   2. Resolves unassigned source codes to the boot address
//!   3. Never produces an odd target, and word-aligns the boot address

use proptest::prelude::*;
use rstest::rstest;

use rvfetch_core::core::pipeline::frontend::pc_mux::{PcCandidates, PcSource, select_pc};

const CANDIDATES: PcCandidates = PcCandidates {
    jump_target_id: 0x8000_0004,
    jump_target_ex: 0x8000_0122,
    exception_pc: 0x8000_0014,
    mepc: 0x8000_0300,
    depc: 0x8000_0400,
    current_pc: 0x8000_0050,
    boot_addr: 0x8000_0000,
};

// ══════════════════════════════════════════════════════════
// 1. Source routing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(PcSource::BOOT, 0x8000_0000)]
#[case(PcSource::FENCEI, 0x8000_0054)]
#[case(PcSource::JUMP, 0x8000_0004)]
#[case(PcSource::BRANCH, 0x8000_0122)]
#[case(PcSource::EXCEPTION, 0x8000_0014)]
#[case(PcSource::MRET, 0x8000_0300)]
#[case(PcSource::DRET, 0x8000_0400)]
fn raw_code_selects_candidate(#[case] raw: u8, #[case] expected: u32) {
    assert_eq!(select_pc(PcSource::from(raw), &CANDIDATES), expected);
}

#[test]
fn fencei_wraps_at_top_of_address_space() {
    let c = PcCandidates {
        current_pc: 0xFFFF_FFFC,
        ..CANDIDATES
    };
    assert_eq!(select_pc(PcSource::FenceI, &c), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Reserved codes
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0b0110)]
#[case(0b1000)]
#[case(0b1010)]
#[case(0b1111)]
fn unassigned_code_restarts_at_boot(#[case] raw: u8) {
    let source = PcSource::from(raw);
    assert_eq!(source, PcSource::Reserved(raw));
    assert_eq!(source.name(), "reserved");
    assert_eq!(select_pc(source, &CANDIDATES), CANDIDATES.boot_addr);
}

// ══════════════════════════════════════════════════════════
// 3. Alignment properties
// ══════════════════════════════════════════════════════════

fn any_candidates() -> impl Strategy<Value = PcCandidates> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
    )
        .prop_map(
            |(jump_target_id, jump_target_ex, exception_pc, mepc, depc, current_pc, boot_addr)| {
                PcCandidates {
                    jump_target_id,
                    jump_target_ex,
                    exception_pc,
                    mepc,
                    depc,
                    current_pc,
                    boot_addr,
                }
            },
        )
}

proptest! {
    #[test]
    fn redirect_target_is_halfword_aligned(raw in 0u8..16, c in any_candidates()) {
        prop_assert_eq!(select_pc(PcSource::from(raw), &c) & 1, 0);
    }

    #[test]
    fn boot_target_is_word_aligned(c in any_candidates()) {
        let pc = select_pc(PcSource::Boot, &c);
        prop_assert_eq!(pc & 0b11, 0);
        prop_assert_eq!(pc, c.boot_addr & !0b11);
    }
}
