//! Fetch-stage statistics collection and reporting.
//!
//! This module tracks per-tick events of the fetch stage. It provides:
//! 1. **Throughput:** Ticks and instructions latched into IF/ID, with the compressed share.
//! 2. **Redirects:** Total redirects and a breakdown by PC source.
//! 3. **Stalls:** Back-pressure holds (a word waited on decode), aligner drains
//!    (a word waited while a held compressed instruction went out) and fetch misses.
//! 4. **Register Events:** Resets, clears and illegal compressed encodings.

use std::fmt;

use crate::core::pipeline::frontend::if_id::SlotUpdate;
use crate::core::pipeline::frontend::pc_mux::PcSource;
use crate::core::pipeline::signals::Handshake;

/// Redirect counts broken down by PC source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectBreakdown {
    /// Boot redirects (including reserved source codes).
    pub boot: u64,
    /// Decode-resolved jumps.
    pub jump: u64,
    /// Execute-resolved branches.
    pub branch: u64,
    /// Trap, interrupt and debug entries.
    pub exception: u64,
    /// Returns from machine-mode traps.
    pub mret: u64,
    /// Returns from debug mode.
    pub dret: u64,
    /// FENCE.I refetches.
    pub fencei: u64,
}

/// Fetch-stage statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Ticks evaluated.
    pub ticks: u64,
    /// Instructions latched into IF/ID.
    pub loads: u64,
    /// Latched instructions that were 16-bit encodings.
    pub loads_compressed: u64,
    /// Latched 16-bit encodings flagged illegal.
    pub illegal_compressed: u64,
    /// Redirects issued.
    pub redirects: u64,
    /// Redirects by source.
    pub redirect_sources: RedirectBreakdown,
    /// Ticks a presented word waited on decode and no redirect was issued.
    pub backpressure_holds: u64,
    /// Ticks a presented word waited while the aligner drained a held instruction.
    pub aligner_drains: u64,
    /// Ticks with no word available and no redirect in progress.
    pub fetch_misses: u64,
    /// IF/ID clears.
    pub clears: u64,
    /// IF/ID resets.
    pub resets: u64,
}

/// Everything the stage observed on one tick that the counters care about.
#[derive(Clone, Copy, Debug)]
pub struct TickEvents {
    /// Rule applied to IF/ID.
    pub update: SlotUpdate,
    /// Arbitration results.
    pub handshake: Handshake,
    /// Source of the redirect target.
    pub pc_source: PcSource,
    /// The fetch unit presented a word.
    pub fetch_valid: bool,
    /// The aligner could absorb the presented word.
    pub aligner_ready: bool,
    /// The fetch-miss pulse.
    pub fetch_miss: bool,
    /// The latched instruction was a 16-bit encoding.
    pub compressed: bool,
    /// The latched instruction was an illegal 16-bit encoding.
    pub illegal: bool,
}

impl FetchStats {
    /// Accumulates one tick.
    pub const fn record(&mut self, ev: &TickEvents) {
        self.ticks += 1;

        match ev.update {
            SlotUpdate::Reset => self.resets += 1,
            SlotUpdate::Clear => self.clears += 1,
            SlotUpdate::Load => {
                self.loads += 1;
                if ev.compressed {
                    self.loads_compressed += 1;
                }
                if ev.illegal {
                    self.illegal_compressed += 1;
                }
            }
            SlotUpdate::Hold => {}
        }

        if ev.handshake.redirect {
            self.redirects += 1;
            let b = &mut self.redirect_sources;
            match ev.pc_source {
                PcSource::Boot | PcSource::Reserved(_) => b.boot += 1,
                PcSource::Jump => b.jump += 1,
                PcSource::Branch => b.branch += 1,
                PcSource::Exception => b.exception += 1,
                PcSource::Mret => b.mret += 1,
                PcSource::Dret => b.dret += 1,
                PcSource::FenceI => b.fencei += 1,
            }
        } else if ev.fetch_valid && !ev.handshake.consume_ready {
            if ev.aligner_ready {
                self.backpressure_holds += 1;
            } else {
                self.aligner_drains += 1;
            }
        }

        if ev.fetch_miss {
            self.fetch_misses += 1;
        }
    }

    /// Fraction of ticks that latched an instruction.
    pub fn loads_per_tick(&self) -> f64 {
        let ticks = self.ticks.max(1);
        self.loads as f64 / ticks as f64
    }
}

impl fmt::Display for FetchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticks = self.ticks.max(1) as f64;
        let pct = |n: u64| (n as f64 / ticks) * 100.0;
        let b = &self.redirect_sources;

        writeln!(f, "==========================================================")?;
        writeln!(f, "FETCH STAGE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "ticks                    {}", self.ticks)?;
        writeln!(f, "if.loads                 {}", self.loads)?;
        writeln!(f, "if.loads_per_tick        {:.4}", self.loads_per_tick())?;
        writeln!(f, "if.loads.compressed      {}", self.loads_compressed)?;
        writeln!(f, "if.loads.illegal_c       {}", self.illegal_compressed)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "REDIRECTS                {}", self.redirects)?;
        writeln!(f, "  boot                   {}", b.boot)?;
        writeln!(f, "  jump                   {}", b.jump)?;
        writeln!(f, "  branch                 {}", b.branch)?;
        writeln!(f, "  exception              {}", b.exception)?;
        writeln!(f, "  mret                   {}", b.mret)?;
        writeln!(f, "  dret                   {}", b.dret)?;
        writeln!(f, "  fencei                 {}", b.fencei)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(
            f,
            "stalls.backpressure      {} ({:.2}%)",
            self.backpressure_holds,
            pct(self.backpressure_holds)
        )?;
        writeln!(
            f,
            "stalls.aligner_drain     {} ({:.2}%)",
            self.aligner_drains,
            pct(self.aligner_drains)
        )?;
        writeln!(
            f,
            "stalls.fetch_miss        {} ({:.2}%)",
            self.fetch_misses,
            pct(self.fetch_misses)
        )?;
        writeln!(f, "if_id.clears             {}", self.clears)?;
        writeln!(f, "if_id.resets             {}", self.resets)
    }
}
