//! Process-wide restart recorder.
//!
//! Binds the persistent regions at boot, establishes a deterministic
//! default record, and arms the panic callback so an unexplained reset
//! still reads back as a software panic. After binding, every operation is
//! a bounded synchronous write guarded by the once-only gate.

use core::fmt::Write;

use log::{error, warn};
use spin::Once;

use crate::board::BoardConfig;
use crate::error::{AlreadySet, BindError, BindResult};
use crate::gate::OnceGate;
use crate::message::MsgBuf;
use crate::notifier::{NotifierChain, NotifyOutcome, PanicCallback};
use crate::reason::{self, RAMDUMP};
use crate::region::{
    MmioRegion, RegionIo, RegionSource, INFO_REGION, INFO_SIZE_PROP, REASON_REGION,
};
use crate::store::RestartStore;

/// Message stored at bind, before any real restart decision is made.
const DEFAULT_MSG: &str = "Unknown";

/// Message stored when a panic fires without diagnostic context.
const PANIC_MSG: &str = "Kernel Panic";

/// The restart-reason recorder: store plus once-only gate.
///
/// Construct one per process via [`bind`], or via [`RestartRecorder::bind_in`]
/// against an injected [`RegionSource`] for isolated contexts.
#[derive(Debug)]
pub struct RestartRecorder<R: RegionIo> {
    store: RestartStore<R>,
    gate: OnceGate,
}

impl<R: RegionIo> RestartRecorder<R> {
    /// Bind a recorder to the regions described by `source`.
    ///
    /// Resolves the reason cell and the info block, computes the message
    /// capacity from the block's declared size, seeds the radio flag and
    /// the default record (`RAMDUMP` / `"Unknown"`). The default writes
    /// bypass the gate, which stays unclaimed for the first real caller.
    ///
    /// Any failure drops the mappings acquired so far and leaves nothing
    /// armed and nothing written.
    pub fn bind_in<S>(source: &S, board: &BoardConfig) -> BindResult<Self>
    where
        S: RegionSource<Region = R>,
    {
        let reason = source.resolve(REASON_REGION).map_err(|e| {
            error!("unable to resolve {}: {}", REASON_REGION, e);
            BindError::ReasonRegionMissing
        })?;
        // `reason` is released by drop if either step below fails.
        let info = source.resolve(INFO_REGION).map_err(|e| {
            error!("unable to resolve {}: {}", INFO_REGION, e);
            BindError::InfoRegionMissing
        })?;
        let info_size = source
            .read_u32_prop(INFO_REGION, INFO_SIZE_PROP)
            .map_err(|e| {
                error!("no {} property on {}: {}", INFO_SIZE_PROP, INFO_REGION, e);
                BindError::SizeUnavailable
            })?;

        let store = RestartStore::new(reason, info, info_size);
        store.set_radio_flag(board.radio_flags.bits());
        store.write_reason(RAMDUMP);
        store.write_message(Some(DEFAULT_MSG));

        Ok(Self {
            store,
            gate: OnceGate::new(),
        })
    }

    /// Record the restart reason and message.
    ///
    /// First writer wins for the whole process lifetime; losers get
    /// [`AlreadySet`] and cause no write. The reason is committed before
    /// the message, matching the order consumers read them back.
    pub fn set_restart_action(&self, reason: u32, msg: Option<&str>) -> Result<(), AlreadySet> {
        self.gate.try_claim().map_err(|e| {
            warn!("restart reason already recorded, dropping {:#010x}", reason);
            e
        })?;
        self.store.write_reason(reason);
        self.store.write_message(msg);
        Ok(())
    }

    /// Record an OEM-range restart cause.
    ///
    /// Radio-interface fatal sub-codes are collapsed to their canonical
    /// code before storage. A missing message is synthesized as
    /// `oem-<code hex>`.
    pub fn set_restart_to_oem(&self, code: u32, msg: Option<&str>) -> Result<(), AlreadySet> {
        let mut synthesized = MsgBuf::new();
        let msg = match msg {
            Some(m) => m,
            None => {
                let _ = write!(synthesized, "oem-{:x}", code);
                synthesized.as_str()
            }
        };
        self.set_restart_action(reason::oem_code(code), Some(msg))
    }

    /// Record a ramdump-requesting restart.
    pub fn set_restart_to_ramdump(&self, msg: Option<&str>) -> Result<(), AlreadySet> {
        self.set_restart_action(RAMDUMP, msg)
    }

    /// Read the currently recorded reason back.
    pub fn read_restart_reason(&self) -> u32 {
        self.store.read_reason()
    }

    /// Message capacity of the bound info block, terminator included.
    pub fn msg_capacity(&self) -> usize {
        self.store.msg_capacity()
    }
}

impl<R: RegionIo + Sync> PanicCallback for RestartRecorder<R> {
    fn notify(&self, context: Option<&str>) -> NotifyOutcome {
        match context {
            Some(ctx) => {
                let mut msg = MsgBuf::new();
                let _ = write!(msg, "KP: {}", ctx);
                // A lost race means another path already owned the
                // narrative; the panic message is dropped.
                let _ = self.set_restart_to_ramdump(Some(msg.as_str()));
            }
            None => {
                let _ = self.set_restart_to_ramdump(Some(PANIC_MSG));
            }
        }
        NotifyOutcome::Done
    }
}

static RECORDER: Once<RestartRecorder<MmioRegion>> = Once::new();

/// Bind the process-wide recorder and arm the panic callback.
///
/// Expected to run once, early in boot, before any subsystem can request a
/// restart. Calling it twice is a programming error; the first binding
/// stays in effect. The returned handle lives for the rest of the process;
/// there is no unbind path because the record must outlive the writing
/// context.
pub fn bind<S, C>(
    source: &S,
    board: &BoardConfig,
    chain: &C,
) -> BindResult<&'static RestartRecorder<MmioRegion>>
where
    S: RegionSource<Region = MmioRegion>,
    C: NotifierChain + ?Sized,
{
    debug_assert!(RECORDER.get().is_none(), "recorder already bound");
    let bound = RestartRecorder::bind_in(source, board)?;
    let handle = RECORDER.call_once(|| bound);
    chain.register(handle);
    Ok(handle)
}

/// The process-wide recorder, if [`bind`] has succeeded.
pub fn recorder() -> Option<&'static RestartRecorder<MmioRegion>> {
    RECORDER.get()
}
