//! Fetch handshake: arbitrates between redirecting and consuming a word.
//!
//! Evaluated once per tick from the snapshot of upstream inputs and
//! collaborator status. A redirect always wins; otherwise a presented word
//! is consumed only when decode can take the instruction it completes, so
//! back-pressure never drops a word. An instruction the aligner already
//! holds in full is handed to decode without waiting on the fetch unit.

use crate::core::pipeline::signals::Handshake;

/// Per-tick inputs of the arbitration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandshakeInputs {
    /// A PC redirect is requested this tick.
    pub pc_set: bool,
    /// The fetch unit presents a word.
    pub fetch_valid: bool,
    /// Decode asks the stage to stop handing out instructions.
    pub halt_if: bool,
    /// Decode can accept a new instruction this tick.
    pub id_ready: bool,
    /// The aligner can absorb the presented word.
    pub aligner_ready: bool,
    /// The aligner presents a complete instruction.
    pub instr_valid: bool,
}

/// Stateless arbitration logic of the fetch stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchHandshake;

impl FetchHandshake {
    /// Stage output-valid: an instruction presented this tick may be handed to decode.
    ///
    /// Never true on a redirect tick, so a word fetched before the redirect
    /// cannot be latched alongside it. Without a fetch word it is true only
    /// while the aligner holds a complete instruction.
    pub const fn output_valid(i: &HandshakeInputs) -> bool {
        !i.halt_if && i.id_ready && !i.pc_set && (i.fetch_valid || i.instr_valid)
    }

    /// Produces `redirect` and `consume_ready` in strict priority order.
    pub const fn arbitrate(i: &HandshakeInputs) -> Handshake {
        if i.pc_set {
            Handshake {
                redirect: true,
                consume_ready: false,
            }
        } else if i.fetch_valid {
            Handshake {
                redirect: false,
                consume_ready: !i.halt_if && Self::output_valid(i) && i.aligner_ready,
            }
        } else {
            Handshake {
                redirect: false,
                consume_ready: false,
            }
        }
    }

    /// Fetch-miss pulse: the stage is waiting on the fetch unit, not redirecting.
    pub const fn fetch_miss(i: &HandshakeInputs, h: &Handshake) -> bool {
        !i.fetch_valid && !h.redirect
    }
}
