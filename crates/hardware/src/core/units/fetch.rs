//! Memory-backed streaming fetch unit.
//!
//! Models an instruction prefetch buffer in front of a flat, little-endian
//! memory. At most one word-aligned read is in flight at a time; completed
//! words queue in a FIFO until the stage consumes them. A redirect drops
//! everything buffered or in flight and restarts at the new word address.

use std::collections::VecDeque;

use crate::common::constants::{INSTRUCTION_SIZE_32, WORD_ALIGN_MASK};
use crate::common::error::ImageError;
use crate::config::MemoryConfig;
use crate::core::pipeline::signals::{FetchRequest, FetchStatus};
use crate::core::pipeline::traits::FetchUnit;

/// A read launched but not yet returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InFlight {
    addr: u32,
    remaining: u32,
}

/// Word-streaming fetch unit over a flat memory image.
#[derive(Clone, Debug)]
pub struct MemoryFetchUnit {
    mem: Vec<u8>,
    base: u32,
    latency: u32,
    fifo_depth: usize,
    next_addr: u32,
    in_flight: Option<InFlight>,
    fifo: VecDeque<u32>,
}

impl MemoryFetchUnit {
    /// Creates a unit with zero-filled memory sized and timed per `config`.
    ///
    /// A latency or depth of zero is treated as one.
    pub fn new(config: &MemoryConfig) -> Self {
        let fifo_depth = config.fifo_depth.max(1);
        Self {
            mem: vec![0; config.size],
            base: config.base,
            latency: config.latency.max(1),
            fifo_depth,
            next_addr: config.base,
            in_flight: None,
            fifo: VecDeque::with_capacity(fifo_depth),
        }
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] if the image starts below the memory base or
    /// extends past its end.
    pub fn load_image(&mut self, addr: u32, bytes: &[u8]) -> Result<(), ImageError> {
        let offset = addr.checked_sub(self.base).ok_or(ImageError::BelowBase {
            addr,
            base: self.base,
        })? as usize;
        let size = self.mem.len();
        let too_large = || ImageError::TooLarge {
            addr,
            len: bytes.len(),
            size,
        };
        let end = offset.checked_add(bytes.len()).ok_or_else(too_large)?;
        let dst = self.mem.get_mut(offset..end).ok_or_else(too_large)?;
        dst.copy_from_slice(bytes);
        Ok(())
    }

    /// Writes `words` little-endian starting at `addr`.
    ///
    /// # Errors
    ///
    /// Same as [`load_image`](Self::load_image).
    pub fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<(), ImageError> {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        self.load_image(addr, &bytes)
    }

    /// Address of the next sequential read to be launched.
    pub const fn next_addr(&self) -> u32 {
        self.next_addr
    }

    /// Number of completed words waiting to be consumed.
    pub fn buffered(&self) -> usize {
        self.fifo.len()
    }

    /// Reads a little-endian word; bytes outside the image read as zero.
    fn read_word(&self, addr: u32) -> u32 {
        let offset = addr.wrapping_sub(self.base);
        let byte = |i: u32| {
            let idx = offset.wrapping_add(i) as usize;
            self.mem.get(idx).copied().unwrap_or(0)
        };
        u32::from_le_bytes([byte(0), byte(1), byte(2), byte(3)])
    }

    fn launch(&mut self) {
        if self.in_flight.is_none() && self.fifo.len() < self.fifo_depth {
            self.in_flight = Some(InFlight {
                addr: self.next_addr,
                remaining: self.latency,
            });
            self.next_addr = self.next_addr.wrapping_add(INSTRUCTION_SIZE_32);
        }
    }

    fn advance(&mut self) {
        if let Some(mut req) = self.in_flight.take() {
            req.remaining -= 1;
            if req.remaining == 0 {
                let word = self.read_word(req.addr);
                tracing::trace!(
                    addr = format_args!("{:#010x}", req.addr),
                    word = format_args!("{word:#010x}"),
                    "fetch returned"
                );
                self.fifo.push_back(word);
            } else {
                self.in_flight = Some(req);
            }
        }
    }
}

impl FetchUnit for MemoryFetchUnit {
    fn status(&self) -> FetchStatus {
        FetchStatus {
            valid: !self.fifo.is_empty(),
            rdata: self.fifo.front().copied().unwrap_or(0),
            busy: self.in_flight.is_some() || !self.fifo.is_empty(),
        }
    }

    fn commit(&mut self, req: FetchRequest) {
        if req.redirect {
            self.fifo.clear();
            self.in_flight = None;
            self.next_addr = req.redirect_addr & WORD_ALIGN_MASK;
            tracing::trace!(
                addr = format_args!("{:#010x}", self.next_addr),
                "fetch redirected"
            );
        } else if req.consume {
            let _ = self.fifo.pop_front();
        }

        if req.request {
            self.launch();
        }
        self.advance();
    }
}
