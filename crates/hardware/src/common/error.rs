//! Error definitions.
//!
//! The tick path of the fetch stage is infallible: illegal encodings, fetch
//! failures and unmapped control tags travel as data. The only fallible
//! operations are configuration loading and program-image placement, whose
//! errors are defined here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the expected schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fetch unit latency must be at least one tick.
    #[error("memory.latency must be at least 1 tick")]
    ZeroLatency,

    /// The fetch unit must be able to buffer at least one word.
    #[error("memory.fifo_depth must be at least 1 word")]
    ZeroFifoDepth,

    /// The modeled instruction memory has no bytes.
    #[error("memory.size must be non-zero")]
    EmptyMemory,

    /// The trap-vector base does not fit into 24 bits.
    #[error("fetch.mtvec_base {0:#x} does not fit into 24 bits")]
    MtvecBaseOutOfRange(u32),
}

/// Errors raised while placing a program image into the modeled memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// The image start address lies below the memory base.
    #[error("image address {addr:#010x} is below memory base {base:#010x}")]
    BelowBase {
        /// Requested load address.
        addr: u32,
        /// Base address of the modeled memory.
        base: u32,
    },

    /// The image does not fit into the modeled memory.
    #[error("image of {len} bytes at {addr:#010x} overruns memory of {size} bytes")]
    TooLarge {
        /// Requested load address.
        addr: u32,
        /// Image length in bytes.
        len: usize,
        /// Size of the modeled memory in bytes.
        size: usize,
    },
}
