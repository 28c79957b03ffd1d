//! Instruction-fetch stage.
//!
//! The stage sits between the fetch unit and decode and evaluates once per
//! tick in two phases:
//! 1. **Combinational:** From one snapshot of upstream inputs and collaborator
//!    state it computes the exception vector, the redirect target, the aligned
//!    and decompressed instruction, and the handshake.
//! 2. **Commit:** It updates the IF/ID register, then the aligner, then the
//!    fetch unit.
//!
//! Everything the stage hands to decode travels through the IF/ID register;
//! every other output is a per-tick pulse.

/// Exception vector unit (trap, interrupt and debug entry addresses).
pub mod exc_vector;

/// Redirect/consume arbitration.
pub mod handshake;

/// IF/ID pipeline register.
pub mod if_id;

/// PC selection among redirect sources.
pub mod pc_mux;

use self::exc_vector::select_exception_pc;
use self::handshake::{FetchHandshake, HandshakeInputs};
use self::if_id::{IfIdRegister, RegisterInputs, SlotUpdate};
use self::pc_mux::{PcCandidates, PcSource, select_pc};
use crate::core::pipeline::latches::PipelineSlot;
use crate::core::pipeline::signals::{AlignerUpdate, FetchRequest, StageInputs, StageOutputs};
use crate::core::pipeline::traits::{Aligner, Decompressor, FetchUnit};
use crate::stats::{FetchStats, TickEvents};

/// Fetch-failure indication fed to the IF/ID register.
///
/// No memory-protection unit is modeled, so a fetch never fails.
pub const FETCH_FAILED: bool = false;

/// The fetch stage, generic over its collaborators.
#[derive(Debug)]
pub struct FetchStage<F: FetchUnit, A: Aligner, D: Decompressor> {
    fetch: F,
    aligner: A,
    decompressor: D,
    if_id: IfIdRegister,
    stats: FetchStats,
    trace_instructions: bool,
}

impl<F: FetchUnit, A: Aligner, D: Decompressor> FetchStage<F, A, D> {
    /// Builds a stage around the given collaborators with an empty IF/ID register.
    pub fn new(fetch: F, aligner: A, decompressor: D) -> Self {
        Self {
            fetch,
            aligner,
            decompressor,
            if_id: IfIdRegister::new(),
            stats: FetchStats::default(),
            trace_instructions: false,
        }
    }

    /// Enables the per-load `IF  pc=.. inst=..` debug line.
    #[must_use]
    pub const fn with_instruction_trace(mut self, enabled: bool) -> Self {
        self.trace_instructions = enabled;
        self
    }

    /// Current IF/ID register contents.
    pub const fn slot(&self) -> &PipelineSlot {
        self.if_id.slot()
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// The fetch unit.
    pub const fn fetch_unit(&self) -> &F {
        &self.fetch
    }

    /// The fetch unit, mutably (e.g. to load a program image).
    pub const fn fetch_unit_mut(&mut self) -> &mut F {
        &mut self.fetch
    }

    /// The aligner.
    pub const fn aligner(&self) -> &A {
        &self.aligner
    }

    /// Evaluates one tick and commits the resulting state.
    pub fn tick(&mut self, inp: &StageInputs) -> StageOutputs {
        let status = self.fetch.status();
        let aligned = self.aligner.output(status.valid, status.rdata);
        let instr = self.decompressor.expand(aligned.instr_aligned);

        let exception_pc = select_exception_pc(
            inp.exc_pc_source,
            inp.mtvec_base,
            inp.irq_vec_index,
            inp.dm_halt_addr,
            inp.dm_exception_addr,
        );
        let redirect_addr = select_pc(
            inp.pc_source,
            &PcCandidates {
                jump_target_id: inp.jump_target_id,
                jump_target_ex: inp.jump_target_ex,
                exception_pc,
                mepc: inp.mepc,
                depc: inp.depc,
                current_pc: self.if_id.slot().pc,
                boot_addr: inp.boot_addr,
            },
        );

        let hs_in = HandshakeInputs {
            pc_set: inp.pc_set,
            fetch_valid: status.valid,
            halt_if: inp.halt_if,
            id_ready: inp.id_ready,
            aligner_ready: aligned.ready,
            instr_valid: aligned.instr_valid,
        };
        let output_valid = FetchHandshake::output_valid(&hs_in);
        let handshake = FetchHandshake::arbitrate(&hs_in);
        let fetch_miss = FetchHandshake::fetch_miss(&hs_in, &handshake);
        let mtvec_init = handshake.redirect && inp.pc_source == PcSource::Boot;

        let update = self.if_id.tick(&RegisterInputs {
            reset: inp.reset,
            output_valid,
            instr_valid: aligned.instr_valid,
            instr,
            pc: aligned.pc,
            clear_instr_valid: inp.clear_instr_valid,
            fetch_failed: FETCH_FAILED,
        });
        self.aligner.commit(AlignerUpdate {
            fetch_valid: status.valid,
            fetch_rdata: status.rdata,
            consumed: handshake.consume_ready,
            taken: output_valid && aligned.instr_valid,
            redirect: handshake.redirect,
            redirect_addr,
        });
        self.fetch.commit(FetchRequest {
            redirect: handshake.redirect,
            redirect_addr,
            request: inp.fetch_enable,
            consume: handshake.consume_ready,
        });

        self.stats.record(&TickEvents {
            update,
            handshake,
            pc_source: inp.pc_source,
            fetch_valid: status.valid,
            aligner_ready: aligned.ready,
            fetch_miss,
            compressed: instr.is_compressed,
            illegal: instr.illegal,
        });
        self.log_tick(inp, update, redirect_addr, handshake.redirect, mtvec_init);

        StageOutputs {
            slot: *self.if_id.slot(),
            pc_if: aligned.pc,
            redirect_addr,
            handshake,
            mtvec_init,
            busy: status.busy,
            fetch_miss,
        }
    }

    fn log_tick(
        &self,
        inp: &StageInputs,
        update: SlotUpdate,
        redirect_addr: u32,
        redirect: bool,
        mtvec_init: bool,
    ) {
        if redirect {
            tracing::trace!(
                source = inp.pc_source.name(),
                addr = format_args!("{redirect_addr:#010x}"),
                "IF redirect"
            );
        }
        if mtvec_init {
            tracing::debug!(
                mtvec_base = format_args!("{:#08x}", inp.mtvec_base),
                "IF boot redirect, mtvec init"
            );
        }

        let slot = self.if_id.slot();
        match update {
            SlotUpdate::Reset => tracing::debug!("IF/ID reset"),
            SlotUpdate::Load => {
                tracing::trace!(
                    pc = format_args!("{:#010x}", slot.pc),
                    inst = format_args!("{:#010x}", slot.raw_instr),
                    compressed = slot.is_compressed,
                    illegal = slot.illegal_compressed,
                    "IF/ID load"
                );
                if self.trace_instructions {
                    tracing::debug!("IF  pc={:#x} inst={:#010x}", slot.pc, slot.raw_instr);
                }
            }
            SlotUpdate::Clear => tracing::trace!(
                pc = format_args!("{:#010x}", slot.pc),
                fetch_failed = slot.fetch_failed,
                "IF/ID clear"
            ),
            SlotUpdate::Hold => {}
        }
    }
}
