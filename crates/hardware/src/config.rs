//! Configuration system for the fetch-stage model.
//!
//! This module defines the configuration structures used to parameterize the
//! stage and its reference collaborators. It provides:
//! 1. **Defaults:** Baseline addresses (boot, debug module, trap vector) and fetch timing.
//! 2. **Structures:** Hierarchical config for general, fetch-control, and memory settings.
//! 3. **Loading:** JSON parsing from text or file, followed by validation.
//!
//! Configuration is supplied as JSON, or use `Config::default()` for tests and demos.

use std::path::Path;

use serde::Deserialize;

use crate::common::constants::MTVEC_BASE_MASK;
use crate::common::error::ConfigError;

/// Default configuration constants for the model.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON configuration.
mod defaults {
    /// Boot address driven into the stage after reset (start of RAM).
    pub const BOOT_ADDR: u32 = 0x8000_0000;

    /// Debug-module halt entry address (debug ROM `halt` entry).
    pub const DM_HALT_ADDR: u32 = 0x1A11_0800;

    /// Debug-module exception entry address (debug ROM `exception` entry).
    pub const DM_EXCEPTION_ADDR: u32 = 0x1A11_0808;

    /// Trap-vector base (`mtvec[31:8]`); the table starts at the boot address.
    pub const MTVEC_BASE: u32 = 0x0080_0000;

    /// Base address of the modeled instruction memory.
    pub const MEMORY_BASE: u32 = 0x8000_0000;

    /// Size of the modeled instruction memory (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Fetch round-trip latency in ticks.
    pub const FETCH_LATENCY: u32 = 1;

    /// Depth of the fetch unit's output FIFO in words.
    pub const FIFO_DEPTH: usize = 2;
}

/// Root configuration structure containing all model settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvfetch_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.fetch.boot_addr, 0x8000_0000);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use rvfetch_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "fetch": { "boot_addr": 2147483904 },
///     "memory": { "latency": 3, "fifo_depth": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.fetch.boot_addr, 0x8000_0100);
/// assert_eq!(config.memory.latency, 3);
/// assert_eq!(config.memory.size, 64 * 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General model settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Upstream control values driven into the stage
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Reference fetch unit and instruction memory
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.latency == 0 {
            return Err(ConfigError::ZeroLatency);
        }
        if self.memory.fifo_depth == 0 {
            return Err(ConfigError::ZeroFifoDepth);
        }
        if self.memory.size == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        if self.fetch.mtvec_base & !MTVEC_BASE_MASK != 0 {
            return Err(ConfigError::MtvecBaseOutOfRange(self.fetch.mtvec_base));
        }
        Ok(())
    }
}

/// General model settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `debug`-level `IF  pc=.. inst=..` event for every instruction latched into IF/ID
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Upstream control values the harness drives into the stage every tick.
///
/// The stage itself treats these as per-tick inputs; the configuration only
/// supplies their initial values.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Boot address (bits [1:0] are ignored)
    #[serde(default = "FetchConfig::default_boot_addr")]
    pub boot_addr: u32,

    /// Debug-mode halt entry address
    #[serde(default = "FetchConfig::default_dm_halt_addr")]
    pub dm_halt_addr: u32,

    /// Debug-mode exception entry address
    #[serde(default = "FetchConfig::default_dm_exception_addr")]
    pub dm_exception_addr: u32,

    /// Trap-vector base, `mtvec[31:8]` (24 bits)
    #[serde(default = "FetchConfig::default_mtvec_base")]
    pub mtvec_base: u32,

    /// Whether the stage requests fetches from the first tick
    #[serde(default = "FetchConfig::default_fetch_enable")]
    pub fetch_enable: bool,
}

impl FetchConfig {
    /// Returns the default boot address.
    const fn default_boot_addr() -> u32 {
        defaults::BOOT_ADDR
    }

    /// Returns the default debug halt entry address.
    const fn default_dm_halt_addr() -> u32 {
        defaults::DM_HALT_ADDR
    }

    /// Returns the default debug exception entry address.
    const fn default_dm_exception_addr() -> u32 {
        defaults::DM_EXCEPTION_ADDR
    }

    /// Returns the default trap-vector base.
    const fn default_mtvec_base() -> u32 {
        defaults::MTVEC_BASE
    }

    /// Fetch is enabled out of reset so bare programs run without extra setup.
    const fn default_fetch_enable() -> bool {
        true
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            boot_addr: defaults::BOOT_ADDR,
            dm_halt_addr: defaults::DM_HALT_ADDR,
            dm_exception_addr: defaults::DM_EXCEPTION_ADDR,
            mtvec_base: defaults::MTVEC_BASE,
            fetch_enable: true,
        }
    }
}

/// Reference fetch unit and instruction memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base address of the instruction memory
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u32,

    /// Instruction memory size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Ticks from request launch until the word is visible to the stage
    #[serde(default = "MemoryConfig::default_latency")]
    pub latency: u32,

    /// Output FIFO depth of the fetch unit, in words
    #[serde(default = "MemoryConfig::default_fifo_depth")]
    pub fifo_depth: usize,
}

impl MemoryConfig {
    /// Returns the default memory base address.
    const fn default_base() -> u32 {
        defaults::MEMORY_BASE
    }

    /// Returns the default memory size in bytes.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default fetch latency in ticks.
    const fn default_latency() -> u32 {
        defaults::FETCH_LATENCY
    }

    /// Returns the default FIFO depth in words.
    const fn default_fifo_depth() -> usize {
        defaults::FIFO_DEPTH
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::MEMORY_BASE,
            size: defaults::MEMORY_SIZE,
            latency: defaults::FETCH_LATENCY,
            fifo_depth: defaults::FIFO_DEPTH,
        }
    }
}
