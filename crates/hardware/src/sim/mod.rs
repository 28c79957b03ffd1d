//! Simulation harness for the fetch stage.
//!
//! Wires the stage to the reference collaborators, loads a program image and
//! drives the stage tick by tick. Decode is modeled as always ready: every
//! load overwrites the slot, so the harness never needs `clear_instr_valid`
//! unless the caller asks for it.

use crate::common::error::{ConfigError, ImageError};
use crate::config::Config;
use crate::core::pipeline::frontend::FetchStage;
use crate::core::pipeline::frontend::pc_mux::PcSource;
use crate::core::pipeline::signals::{StageInputs, StageOutputs};
use crate::core::units::{HalfwordAligner, MemoryFetchUnit};
use crate::isa::rvc::RvcDecompressor;
use crate::stats::FetchStats;

/// The fetch stage with the reference collaborators.
pub type ReferenceStage = FetchStage<MemoryFetchUnit, HalfwordAligner, RvcDecompressor>;

/// One instruction latched into IF/ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Captured {
    /// Address of the instruction.
    pub pc: u32,
    /// Canonical 32-bit encoding (original half-word if illegal).
    pub instr: u32,
    /// Fetched as a 16-bit encoding.
    pub is_compressed: bool,
    /// Fetched as an illegal 16-bit encoding.
    pub illegal: bool,
}

/// Drives a [`ReferenceStage`] over a program image.
#[derive(Debug)]
pub struct Harness {
    stage: ReferenceStage,
    inputs: StageInputs,
    ticks: u64,
}

impl Harness {
    /// Builds a harness from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let stage = FetchStage::new(
            MemoryFetchUnit::new(&config.memory),
            HalfwordAligner::new(config.fetch.boot_addr),
            RvcDecompressor,
        )
        .with_instruction_trace(config.general.trace_instructions);
        Ok(Self {
            stage,
            inputs: StageInputs::from_config(&config.fetch),
            ticks: 0,
        })
    }

    /// Copies a program image into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] if the image does not fit.
    pub fn load_image(&mut self, addr: u32, bytes: &[u8]) -> Result<(), ImageError> {
        self.stage.fetch_unit_mut().load_image(addr, bytes)
    }

    /// Writes little-endian words into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] if the words do not fit.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<(), ImageError> {
        self.stage.fetch_unit_mut().load_words(addr, words)
    }

    /// Applies reset together with a redirect to the boot address.
    pub fn boot(&mut self) -> StageOutputs {
        let inputs = StageInputs {
            reset: true,
            pc_set: true,
            pc_source: PcSource::Boot,
            ..self.inputs
        };
        self.ticks += 1;
        self.stage.tick(&inputs)
    }

    /// Runs `ticks` ticks and returns every instruction latched into IF/ID.
    ///
    /// `drive` sees the tick number and a copy of the idle inputs it may
    /// modify before the stage evaluates.
    pub fn run<D>(&mut self, ticks: u64, mut drive: D) -> Vec<Captured>
    where
        D: FnMut(u64, &mut StageInputs),
    {
        let mut captured = Vec::new();
        for _ in 0..ticks {
            let mut inputs = self.inputs;
            drive(self.ticks, &mut inputs);

            let loads = self.stage.stats().loads;
            let out = self.stage.tick(&inputs);
            self.ticks += 1;

            if self.stage.stats().loads > loads {
                captured.push(Captured {
                    pc: out.slot.pc,
                    instr: out.slot.raw_instr,
                    is_compressed: out.slot.is_compressed,
                    illegal: out.slot.illegal_compressed,
                });
            }
        }
        captured
    }

    /// Runs `ticks` ticks with idle inputs.
    pub fn run_idle(&mut self, ticks: u64) -> Vec<Captured> {
        self.run(ticks, |_, _| {})
    }

    /// Ticks evaluated so far, including boot.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The driven stage.
    pub const fn stage(&self) -> &ReferenceStage {
        &self.stage
    }

    /// Statistics of the driven stage.
    pub const fn stats(&self) -> &FetchStats {
        self.stage.stats()
    }
}
