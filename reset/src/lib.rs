//! Persistent restart-reason recorder.
//!
//! Records, into a small firmware-described region of boot-surviving
//! memory, why the system is about to restart together with a short
//! diagnostic message, so the next boot stage or a post-mortem tool can
//! read the cause back. A panic callback is armed at bind time so a fatal
//! software failure reads back as a software panic rather than an
//! unexplained reset.
//!
//! ## Key Components
//!
//! - [`region`] - Mapped-region access and the platform locator seam
//! - [`store`] - Bounded reason/message writes into the persistent layout
//! - [`gate`] - Once-only latch making the first writer win
//! - [`recorder`] - The recorder context, binding and the panic callback
//!
//! ## Guarantees
//!
//! - The reason/message pair is written at most once per restart attempt,
//!   no matter how many callers race.
//! - Writes are published with a full fence so firmware reading the region
//!   after reset observes reason before message.
//! - Binding fails loudly when the platform description is missing or
//!   malformed; nothing is left partially armed.
//! - After binding, no operation blocks or allocates, so everything stays
//!   callable from the panic path.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod error;
pub mod gate;
pub mod layout;
pub mod message;
pub mod notifier;
pub mod reason;
pub mod recorder;
pub mod region;
pub mod store;

pub use board::{BoardConfig, RadioFlags};
pub use error::{AlreadySet, BindError, BindResult, ResolveError};
pub use notifier::{NotifierChain, NotifyOutcome, PanicCallback};
pub use reason::{oem_code, OEM_BASE, RAMDUMP};
pub use recorder::{bind, recorder, RestartRecorder};
pub use region::{MmioRegion, RegionIo, RegionSource};
pub use store::RestartStore;
