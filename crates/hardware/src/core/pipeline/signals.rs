//! Per-tick signal bundles of the fetch stage.
//!
//! Everything in this module is ephemeral: values are produced and consumed
//! within one tick and never persisted. It defines:
//! 1. **Upstream Inputs:** Control values driven by the controller, CSRs and decode.
//! 2. **Downstream Outputs:** The IF/ID contents and status pulses for one tick.
//! 3. **Collaborator Ports:** Request/status bundles exchanged with the fetch unit,
//!    the aligner and the decompressor.

use crate::config::FetchConfig;
use crate::core::pipeline::frontend::exc_vector::ExcPcSource;
use crate::core::pipeline::frontend::pc_mux::PcSource;
use crate::core::pipeline::latches::PipelineSlot;

/// Upstream control inputs sampled by the stage at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageInputs {
    /// Synchronous reset of the IF/ID register.
    pub reset: bool,
    /// Allows the fetch unit to launch new requests.
    pub fetch_enable: bool,
    /// Boot address; bits [1:0] are ignored.
    pub boot_addr: u32,
    /// Debug-mode halt entry address.
    pub dm_halt_addr: u32,
    /// Debug-mode exception entry address.
    pub dm_exception_addr: u32,
    /// Trap-vector base, `mtvec[31:8]`; bits above 24 are ignored.
    pub mtvec_base: u32,
    /// Vectored interrupt index; bits above 5 are ignored.
    pub irq_vec_index: u32,
    /// Jump target resolved in decode.
    pub jump_target_id: u32,
    /// Branch target resolved in execute.
    pub jump_target_ex: u32,
    /// Requests a PC redirect this tick.
    pub pc_set: bool,
    /// Source of the redirect target.
    pub pc_source: PcSource,
    /// Source of the exception target when `pc_source` is `Exception`.
    pub exc_pc_source: ExcPcSource,
    /// Saved machine-mode exception PC restored by MRET.
    pub mepc: u32,
    /// Saved debug PC restored by DRET.
    pub depc: u32,
    /// Decode asks the stage to stop handing out instructions.
    pub halt_if: bool,
    /// Decode can accept a new instruction this tick.
    pub id_ready: bool,
    /// Invalidates the IF/ID register (consumed or flushed by decode).
    pub clear_instr_valid: bool,
}

impl StageInputs {
    /// Builds idle inputs carrying the addresses and enables from `config`.
    ///
    /// Decode is modeled as ready; no redirect is requested.
    pub const fn from_config(config: &FetchConfig) -> Self {
        Self {
            reset: false,
            fetch_enable: config.fetch_enable,
            boot_addr: config.boot_addr,
            dm_halt_addr: config.dm_halt_addr,
            dm_exception_addr: config.dm_exception_addr,
            mtvec_base: config.mtvec_base,
            irq_vec_index: 0,
            jump_target_id: 0,
            jump_target_ex: 0,
            pc_set: false,
            pc_source: PcSource::Boot,
            exc_pc_source: ExcPcSource::Exception,
            mepc: 0,
            depc: 0,
            halt_if: false,
            id_ready: true,
            clear_instr_valid: false,
        }
    }
}

/// The two arbitration results of the fetch handshake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handshake {
    /// A redirect is issued to the fetch unit and the aligner this tick.
    pub redirect: bool,
    /// The word presented by the fetch unit is consumed this tick.
    pub consume_ready: bool,
}

/// Outputs of the stage for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageOutputs {
    /// IF/ID register contents after this tick's update.
    pub slot: PipelineSlot,
    /// PC of the instruction currently presented by the aligner.
    pub pc_if: u32,
    /// Redirect target computed this tick (meaningful when `handshake.redirect`).
    pub redirect_addr: u32,
    /// Arbitration results.
    pub handshake: Handshake,
    /// One-tick pulse: the boot redirect was taken, `mtvec` should be initialized.
    pub mtvec_init: bool,
    /// The fetch unit has outstanding or buffered work.
    pub busy: bool,
    /// No word was available and no redirect was in progress.
    pub fetch_miss: bool,
}

/// Combinational status presented by a fetch unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchStatus {
    /// `rdata` holds a fetched word.
    pub valid: bool,
    /// Fetched word (little-endian, from a word-aligned address).
    pub rdata: u32,
    /// Requests are in flight or words are buffered.
    pub busy: bool,
}

/// Commands applied to a fetch unit at the end of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchRequest {
    /// Abandon all buffered and in-flight words and restart at `redirect_addr`.
    pub redirect: bool,
    /// Restart address, 2-byte aligned.
    pub redirect_addr: u32,
    /// New sequential fetches may be launched.
    pub request: bool,
    /// The presented word was consumed.
    pub consume: bool,
}

/// Combinational view presented by an aligner for the current fetch word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignerOutput {
    /// The aligner can absorb the presented fetch word this tick.
    pub ready: bool,
    /// Instruction bits starting at `pc` (upper half undefined for 16-bit encodings).
    pub instr_aligned: u32,
    /// `instr_aligned` holds a complete instruction.
    pub instr_valid: bool,
    /// Address of the presented instruction.
    pub pc: u32,
}

/// Bookkeeping applied to an aligner at the end of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignerUpdate {
    /// The fetch unit presented a word this tick.
    pub fetch_valid: bool,
    /// The presented word.
    pub fetch_rdata: u32,
    /// The presented word was consumed.
    pub consumed: bool,
    /// The presented instruction was latched into IF/ID.
    pub taken: bool,
    /// Restart alignment at `redirect_addr`.
    pub redirect: bool,
    /// Restart address, 2-byte aligned.
    pub redirect_addr: u32,
}

/// Result of passing an aligned instruction through a decompressor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decompressed {
    /// Canonical 32-bit encoding.
    pub instr: u32,
    /// The input was a 16-bit encoding.
    pub is_compressed: bool,
    /// The input was an illegal 16-bit encoding.
    pub illegal: bool,
}
