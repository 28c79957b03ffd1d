use rvfetch_core::config::Config;
use rvfetch_core::core::pipeline::signals::{StageInputs, StageOutputs};
use rvfetch_core::sim::{Captured, Harness};
use rvfetch_core::stats::FetchStats;

use super::init_tracing;

/// Base address of the modeled memory in every test context.
pub const MEM_BASE: u32 = 0x8000_0000;

pub struct TestContext {
    pub harness: Harness,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let harness = Harness::new(config).unwrap();
        Self { harness }
    }

    /// Context whose fetch unit answers after `latency` ticks.
    pub fn with_latency(latency: u32) -> Self {
        let mut config = Config::default();
        config.memory.latency = latency;
        Self::with_config(&config)
    }

    /// Writes `words` at the memory base and applies the boot redirect.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.harness.load_words(MEM_BASE, words).unwrap();
        let _ = self.harness.boot();
        self
    }

    pub fn run(&mut self, ticks: u64) -> Vec<Captured> {
        self.harness.run_idle(ticks)
    }

    pub fn run_with<D>(&mut self, ticks: u64, drive: D) -> Vec<Captured>
    where
        D: FnMut(u64, &mut StageInputs),
    {
        self.harness.run(ticks, drive)
    }

    pub fn boot(&mut self) -> StageOutputs {
        self.harness.boot()
    }

    pub fn stats(&self) -> &FetchStats {
        self.harness.stats()
    }
}

/// Shorthand for a captured instruction.
pub const fn cap(pc: u32, instr: u32, is_compressed: bool) -> Captured {
    Captured {
        pc,
        instr,
        is_compressed,
        illegal: false,
    }
}
