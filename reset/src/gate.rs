//! Once-only gate over the restart record.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::AlreadySet;

const UNSET: u32 = 0;
const SET: u32 = 1;

/// Single-use latch serializing all restart-reason writers.
///
/// Exactly one claimant succeeds across the whole process lifetime; every
/// later caller observes [`AlreadySet`]. There is no transition back, so the
/// record can never be overwritten once the first writer committed.
#[derive(Debug)]
pub struct OnceGate {
    state: AtomicU32,
}

impl OnceGate {
    /// Create an unclaimed gate.
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(UNSET),
        }
    }

    /// Claim the gate.
    ///
    /// The compare-exchange is the single serialization point across all
    /// writers, including the panic path.
    pub fn try_claim(&self) -> Result<(), AlreadySet> {
        self.state
            .compare_exchange(UNSET, SET, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| ())
            .map_err(|_| AlreadySet)
    }

    /// Whether the gate has been claimed.
    pub fn is_set(&self) -> bool {
        self.state.load(Ordering::SeqCst) == SET
    }
}

impl Default for OnceGate {
    fn default() -> Self {
        Self::new()
    }
}
