//! Persisted layout of the restart-info block.
//!
//! The block starts with a fixed header of configuration words followed by
//! the diagnostic message bytes. The layout is consumed by firmware after a
//! reset with no OS alive, so the offsets are part of the external ABI and
//! must not move.

/// Fixed header at the start of the restart-info block.
#[repr(C)]
pub struct InfoHeader {
    /// Set by firmware when the previous reset was not requested. 0x00
    pub abnormal_reset_flag: u32,
    /// Radio diagnostic flags, copied from board configuration at bind. 0x04
    pub radio_flag: u32,
    /// Clock-controller reset status saved by the boot stage. 0x08
    pub backup_gcc_reset_status: u32,
    /// Reserved words, kept zero. 0x0c
    pub reserved: [u32; 7],
}

/// Byte offset of `radio_flag` within the block.
pub const RADIO_FLAG_OFFSET: usize = 4;

/// Byte offset of the message field, immediately after the header.
pub const MSG_OFFSET: usize = core::mem::size_of::<InfoHeader>();

/// Hard cap on the diagnostic message field, terminator included.
pub const MAX_MSG_SIZE: usize = 200;

const _: () = assert!(MSG_OFFSET == 40);

/// Usable message capacity for a block of the declared size.
///
/// An oversized declaration is clamped silently; a block too small to hold
/// any message yields zero capacity rather than an error.
pub fn msg_capacity(info_size: u32) -> usize {
    (info_size as usize)
        .saturating_sub(MSG_OFFSET)
        .min(MAX_MSG_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_ten_words() {
        assert_eq!(core::mem::size_of::<InfoHeader>(), 40);
        assert_eq!(MSG_OFFSET, 40);
    }

    #[test]
    fn capacity_clamps_to_max() {
        assert_eq!(msg_capacity(4096), MAX_MSG_SIZE);
        assert_eq!(msg_capacity(240), MAX_MSG_SIZE);
    }

    #[test]
    fn capacity_follows_declared_size() {
        assert_eq!(msg_capacity(140), 100);
        assert_eq!(msg_capacity(41), 1);
    }

    #[test]
    fn undersized_block_yields_zero() {
        assert_eq!(msg_capacity(40), 0);
        assert_eq!(msg_capacity(8), 0);
        assert_eq!(msg_capacity(0), 0);
    }
}
