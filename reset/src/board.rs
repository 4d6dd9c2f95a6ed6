//! Board configuration consumed at bind time.

use bitflags::bitflags;

bitflags! {
    /// Radio diagnostic flags copied into the restart-info block at bind.
    ///
    /// The bits are informational for the boot stage and the modem; the
    /// recorder itself never interprets them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RadioFlags: u32 {
        /// Diagnostic port routed to the modem.
        const DIAG_ENABLE = 1 << 0;
        /// Extended modem logging requested.
        const EXTENDED_LOG = 1 << 1;
        /// Capture a radio memory dump on fatal radio errors.
        const RADIO_DUMP = 1 << 3;
        /// Keep the USB debug path alive across resets.
        const USB_DEBUG = 1 << 17;
    }
}

impl Default for RadioFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Static board facts sampled once when the recorder binds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardConfig {
    /// Flags persisted verbatim into the info block.
    pub radio_flags: RadioFlags,
}
