//! Fetch Stage Tests.
//!
//! Drives `FetchStage` with a scripted fetch unit and a word-stride aligner,
//! isolating the stage's own decisions. Verifies:
//!   1. Reset and boot redirect
//!   2. Redirects discard the presented word and restart at the target
//!   3. Back-pressure holds the slot and never drops a word
//!   4. Clear, halt and idle-wait behavior
//!   5. Redirect target selection through the stage (FENCE.I, traps, debug)
//!   6. Decompression on the way into IF/ID

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rvfetch_core::config::FetchConfig;
use rvfetch_core::core::pipeline::frontend::FetchStage;
use rvfetch_core::core::pipeline::frontend::exc_vector::ExcPcSource;
use rvfetch_core::core::pipeline::frontend::pc_mux::PcSource;
use rvfetch_core::core::pipeline::latches::PipelineSlot;
use rvfetch_core::core::pipeline::signals::StageInputs;
use rvfetch_core::isa::rvc::RvcDecompressor;

use crate::common::init_tracing;
use crate::common::mocks::aligner::WordAligner;
use crate::common::mocks::fetch::ScriptedFetchUnit;

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

const BOOT: u32 = 0x8000_0000;
const ADDI_A0_1: u32 = 0x0010_0513;
const ADDI_A1_2: u32 = 0x0020_0593;
const NOP: u32 = 0x0000_0013;

type Stage = FetchStage<ScriptedFetchUnit, WordAligner, RvcDecompressor>;

fn stage(words: &[u32]) -> Stage {
    init_tracing();
    FetchStage::new(ScriptedFetchUnit::new(words), WordAligner::at(BOOT), RvcDecompressor)
}

fn idle() -> StageInputs {
    StageInputs::from_config(&FetchConfig::default())
}

fn redirect(source: PcSource) -> StageInputs {
    StageInputs {
        pc_set: true,
        pc_source: source,
        ..idle()
    }
}

fn stalled() -> StageInputs {
    StageInputs {
        id_ready: false,
        ..idle()
    }
}

fn slot(pc: u32, raw_instr: u32) -> PipelineSlot {
    PipelineSlot {
        valid: true,
        raw_instr,
        pc,
        ..PipelineSlot::default()
    }
}

// ══════════════════════════════════════════════════════════
// 1. Reset and boot
// ══════════════════════════════════════════════════════════

#[test]
fn reset_clears_slot() {
    let mut s = stage(&[ADDI_A0_1]);
    let _ = s.tick(&idle());
    assert!(s.slot().valid);

    let out = s.tick(&StageInputs {
        reset: true,
        ..idle()
    });
    assert_eq!(out.slot, PipelineSlot::default());
    assert_eq!(s.stats().resets, 1);
}

#[test]
fn boot_redirect_pulses_mtvec_init_once() {
    let mut s = stage(&[]);
    let out = s.tick(&StageInputs {
        reset: true,
        ..redirect(PcSource::Boot)
    });
    assert!(out.handshake.redirect);
    assert!(out.mtvec_init);
    assert_eq!(out.redirect_addr, BOOT);
    assert_eq!(s.fetch_unit().redirects, vec![BOOT]);

    let out = s.tick(&idle());
    assert!(!out.mtvec_init);
}

#[test]
fn reserved_source_boots_without_mtvec_init() {
    let mut s = stage(&[]);
    let out = s.tick(&redirect(PcSource::from(0b1111)));
    assert!(out.handshake.redirect);
    assert_eq!(out.redirect_addr, BOOT);
    assert!(!out.mtvec_init);
}

// ══════════════════════════════════════════════════════════
// 2. Redirect
// ══════════════════════════════════════════════════════════

#[test]
fn jump_discards_presented_word() {
    let mut s = stage(&[NOP, NOP]);
    let out = s.tick(&StageInputs {
        jump_target_id: 0x8000_0004,
        ..redirect(PcSource::Jump)
    });

    assert!(out.handshake.redirect);
    assert!(!out.handshake.consume_ready);
    assert_eq!(out.redirect_addr, 0x8000_0004);
    assert!(!out.slot.valid, "word present on the redirect tick must not load");
    assert!(s.fetch_unit().consumed.is_empty());
    assert_eq!(s.fetch_unit().redirects, vec![0x8000_0004]);
    assert_eq!(s.fetch_unit().pending(), 0);
    assert_eq!(s.stats().redirect_sources.jump, 1);

    s.fetch_unit_mut().push(ADDI_A0_1);
    let out = s.tick(&idle());
    assert_eq!(out.slot, slot(0x8000_0004, ADDI_A0_1));
    assert_eq!(out.pc_if, 0x8000_0004);
}

#[test]
fn branch_target_bit_zero_is_cleared() {
    let mut s = stage(&[]);
    let out = s.tick(&StageInputs {
        jump_target_ex: 0x8000_0123,
        ..redirect(PcSource::Branch)
    });
    assert_eq!(out.redirect_addr, 0x8000_0122);
    assert_eq!(s.aligner().pc, 0x8000_0122);
}

// ══════════════════════════════════════════════════════════
// 3. Back-pressure
// ══════════════════════════════════════════════════════════

#[test]
fn stalled_decode_holds_slot_and_word() {
    let mut s = stage(&[ADDI_A0_1, ADDI_A1_2]);
    let first = s.tick(&idle()).slot;
    assert_eq!(first, slot(BOOT, ADDI_A0_1));

    for _ in 0..3 {
        let out = s.tick(&stalled());
        assert!(!out.handshake.consume_ready);
        assert!(!out.handshake.redirect);
        assert_eq!(out.slot, first);
    }
    assert_eq!(s.fetch_unit().consumed, vec![ADDI_A0_1]);

    let out = s.tick(&idle());
    assert_eq!(out.slot, slot(BOOT + 4, ADDI_A1_2));
    assert_eq!(s.fetch_unit().consumed, vec![ADDI_A0_1, ADDI_A1_2]);
    assert_eq!(s.stats().backpressure_holds, 3);
    assert_eq!(s.stats().loads, 2);
}

#[test]
fn halt_blocks_load_and_consume() {
    let mut s = stage(&[ADDI_A0_1]);
    let out = s.tick(&StageInputs {
        halt_if: true,
        ..idle()
    });
    assert!(!out.slot.valid);
    assert!(!out.handshake.consume_ready);
    assert_eq!(s.fetch_unit().pending(), 1);
}

// ══════════════════════════════════════════════════════════
// 4. Clear, idle-wait, enables
// ══════════════════════════════════════════════════════════

#[test]
fn clear_without_word_keeps_payload() {
    let mut s = stage(&[ADDI_A0_1]);
    let _ = s.tick(&idle());

    let out = s.tick(&StageInputs {
        clear_instr_valid: true,
        ..idle()
    });
    assert_eq!(
        out.slot,
        PipelineSlot {
            valid: false,
            ..slot(BOOT, ADDI_A0_1)
        }
    );
    assert!(!out.slot.fetch_failed);
    assert_eq!(s.stats().clears, 1);
}

#[test]
fn load_wins_over_clear() {
    let mut s = stage(&[ADDI_A0_1, ADDI_A1_2]);
    let _ = s.tick(&idle());
    let out = s.tick(&StageInputs {
        clear_instr_valid: true,
        ..idle()
    });
    assert_eq!(out.slot, slot(BOOT + 4, ADDI_A1_2));
}

#[test]
fn miss_fires_while_waiting_and_busy_passes_through() {
    let mut s = stage(&[]);
    s.fetch_unit_mut().busy = true;

    let out = s.tick(&idle());
    assert!(out.fetch_miss);
    assert!(out.busy);

    let out = s.tick(&redirect(PcSource::Jump));
    assert!(!out.fetch_miss);
    assert_eq!(s.stats().fetch_misses, 1);
}

#[test]
fn fetch_enable_only_gates_requests() {
    let mut s = stage(&[ADDI_A0_1]);
    let out = s.tick(&StageInputs {
        fetch_enable: false,
        ..idle()
    });
    assert_eq!(s.fetch_unit().requests, 0);
    assert!(out.handshake.consume_ready);
    assert!(out.slot.valid);

    let _ = s.tick(&idle());
    assert_eq!(s.fetch_unit().requests, 1);
}

proptest! {
    #[test]
    fn idle_ticks_leave_slot_untouched(
        ticks in 1usize..40,
        halt_if in any::<bool>(),
        id_ready in any::<bool>(),
    ) {
        let mut s = stage(&[ADDI_A0_1]);
        let loaded = s.tick(&idle()).slot;

        for _ in 0..ticks {
            let out = s.tick(&StageInputs { halt_if, id_ready, ..idle() });
            prop_assert_eq!(out.slot, loaded);
            prop_assert!(out.fetch_miss);
        }
    }
}

// ══════════════════════════════════════════════════════════
// 5. Target selection through the stage
// ══════════════════════════════════════════════════════════

#[test]
fn fencei_refetches_after_held_instruction() {
    let mut s = stage(&[NOP]);
    let _ = s.tick(&idle());

    let out = s.tick(&redirect(PcSource::FenceI));
    assert_eq!(out.redirect_addr, BOOT + 4);
}

#[test]
fn vectored_interrupt_entry() {
    let mut s = stage(&[]);
    let out = s.tick(&StageInputs {
        exc_pc_source: ExcPcSource::Irq,
        irq_vec_index: 3,
        ..redirect(PcSource::Exception)
    });
    assert_eq!(out.redirect_addr, 0x8000_000C);
    assert_eq!(s.stats().redirect_sources.exception, 1);
}

#[test]
fn debug_entry_and_return() {
    let mut s = stage(&[]);
    let out = s.tick(&StageInputs {
        exc_pc_source: ExcPcSource::DebugEntry,
        ..redirect(PcSource::Exception)
    });
    assert_eq!(out.redirect_addr, 0x1A11_0800);

    let out = s.tick(&StageInputs {
        depc: 0x8000_0042,
        ..redirect(PcSource::Dret)
    });
    assert_eq!(out.redirect_addr, 0x8000_0042);

    let out = s.tick(&StageInputs {
        mepc: 0x8000_0100,
        ..redirect(PcSource::Mret)
    });
    assert_eq!(out.redirect_addr, 0x8000_0100);
}

// ══════════════════════════════════════════════════════════
// 6. Decompression
// ══════════════════════════════════════════════════════════

#[test]
fn compressed_word_is_expanded_into_slot() {
    let mut s = stage(&[0x0000_4505]);
    let out = s.tick(&idle());
    assert_eq!(out.slot.raw_instr, ADDI_A0_1);
    assert!(out.slot.is_compressed);
    assert!(!out.slot.illegal_compressed);
    assert_eq!(out.slot.inst_size(), 2);
    assert_eq!(s.stats().loads_compressed, 1);
}

#[test]
fn illegal_compressed_word_is_flagged() {
    let mut s = stage(&[0x0000_0000]);
    let out = s.tick(&idle());
    assert!(out.slot.valid);
    assert!(out.slot.illegal_compressed);
    assert_eq!(out.slot.raw_instr, 0);
    assert_eq!(s.stats().illegal_compressed, 1);
}
