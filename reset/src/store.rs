//! Reason/message store over the bound regions.

use log::info;

use crate::layout::{self, MAX_MSG_SIZE};
use crate::region::RegionIo;

/// Owner of the two persistent windows.
///
/// The store is the only component that writes through the regions. All
/// operations are synchronous, bounded and non-allocating, so they remain
/// usable from the panic path.
#[derive(Debug)]
pub struct RestartStore<R: RegionIo> {
    reason: R,
    info: R,
    msg_capacity: usize,
}

impl<R: RegionIo> RestartStore<R> {
    pub(crate) fn new(reason: R, info: R, info_size: u32) -> Self {
        Self {
            reason,
            info,
            msg_capacity: layout::msg_capacity(info_size),
        }
    }

    /// Usable message capacity in bytes, terminator included.
    pub fn msg_capacity(&self) -> usize {
        self.msg_capacity
    }

    /// Record the restart reason.
    ///
    /// A single aligned write, published before return. Infallible: the
    /// region is known mapped once binding succeeded.
    pub fn write_reason(&self, code: u32) {
        info!("set restart reason = {:#010x}", code);
        self.reason.write_u32(0, code);
    }

    /// Record the diagnostic message.
    ///
    /// Copies at most `msg_capacity - 1` bytes of `text`, zero-fills the
    /// remainder of the field and always terminates within the bound.
    /// `None` stores the empty string. Oversized input is truncated, never
    /// an error.
    pub fn write_message(&self, text: Option<&str>) {
        let text = text.unwrap_or("");
        info!("set restart msg = `{}'", text);

        if self.msg_capacity == 0 {
            return;
        }
        let mut field = [0u8; MAX_MSG_SIZE];
        let bytes = text.as_bytes();
        let n = bytes.len().min(self.msg_capacity - 1);
        field[..n].copy_from_slice(&bytes[..n]);
        self.info
            .write_bytes(layout::MSG_OFFSET, &field[..self.msg_capacity]);
    }

    /// Read the recorded reason back; last write wins.
    pub fn read_reason(&self) -> u32 {
        self.reason.read_u32(0)
    }

    /// Seed the radio-flag header word. Done once at bind.
    pub(crate) fn set_radio_flag(&self, flags: u32) {
        self.info.write_u32(layout::RADIO_FLAG_OFFSET, flags);
    }
}
