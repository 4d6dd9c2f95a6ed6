//! Restart reason codes.
//!
//! The code namespace follows the platform convention of an OEM-reserved
//! base word with a vendor sub-code in the low byte. The radio-interface
//! fatal sub-codes collapse to one canonical code before storage; the
//! aliasing is deliberately many-to-one.

/// Base of the OEM-defined reason range.
pub const OEM_BASE: u32 = 0x6f65_6d00;

/// Reason requesting a memory dump capture on the next boot.
pub const RAMDUMP: u32 = OEM_BASE | 0x88;

/// First radio-interface fatal sub-code.
const RIL_FATAL_FIRST: u32 = 0x93;
/// Last radio-interface fatal sub-code.
const RIL_FATAL_LAST: u32 = 0x98;
/// Canonical sub-code all radio-interface fatals are stored as.
const RIL_FATAL_CANONICAL: u32 = 0x99;

/// Map a vendor sub-code into the OEM reason range.
pub fn oem_code(code: u32) -> u32 {
    let code = if (RIL_FATAL_FIRST..=RIL_FATAL_LAST).contains(&code) {
        RIL_FATAL_CANONICAL
    } else {
        code
    };
    OEM_BASE | code
}
