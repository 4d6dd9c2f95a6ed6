//! Mapped-region access and the platform locator seam.
//!
//! The recorder never touches raw pointers directly; all persistent writes
//! go through [`RegionIo`], implemented once for real hardware-mapped
//! memory ([`MmioRegion`]) and again by RAM-backed doubles in tests. The
//! hardware implementation publishes every access with a full fence so
//! that firmware reading the region after a reset, with no OS alive to
//! order memory, observes the writes in program order.

use core::sync::atomic::{fence, Ordering};

use crate::error::ResolveError;

/// Logical name of the one-word restart-reason cell.
pub const REASON_REGION: &str = "imem-restart-reason";

/// Logical name of the restart-info block.
pub const INFO_REGION: &str = "imem-restart-info";

/// Property on the info block declaring its usable size in bytes.
pub const INFO_SIZE_PROP: &str = "info_size";

/// Byte-addressed window into a persistent memory region.
///
/// Implementations must make every write visible to an out-of-band reader
/// before returning; nothing downstream of the recorder issues additional
/// barriers.
pub trait RegionIo {
    /// Length of the window in bytes.
    fn len(&self) -> usize;

    /// Whether the window is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write one aligned native-endian `u32` at `offset`.
    fn write_u32(&self, offset: usize, value: u32);

    /// Copy `bytes` to `offset`. Callers bound `bytes` to the field size.
    fn write_bytes(&self, offset: usize, bytes: &[u8]);

    /// Read one aligned `u32` at `offset`. Last write wins; no ordering is
    /// guaranteed beyond the fence already issued by the writer.
    fn read_u32(&self, offset: usize) -> u32;
}

/// Platform capability resolving logical region names to mapped windows.
///
/// Backed by the firmware hardware description on real targets; tests
/// inject a source handing out RAM-backed regions.
pub trait RegionSource {
    /// Region type handed out by this source.
    type Region: RegionIo;

    /// Resolve `name` to a mapped window.
    fn resolve(&self, name: &str) -> Result<Self::Region, ResolveError>;

    /// Read a `u32` property declared on the named region.
    fn read_u32_prop(&self, name: &str, prop: &str) -> Result<u32, ResolveError>;
}

/// Window over a live hardware mapping.
///
/// Dropping the value releases the window; the underlying mapping is owned
/// by the platform and stays in place for the life of the process.
pub struct MmioRegion {
    base: *mut u8,
    len: usize,
}

// SAFETY: the window covers device memory that no Rust reference aliases;
// every access goes through volatile operations.
unsafe impl Send for MmioRegion {}
// SAFETY: as above; concurrent writers are serialized by the recorder's
// gate, and reads tolerate tearing-free last-write-wins semantics.
unsafe impl Sync for MmioRegion {}

impl MmioRegion {
    /// Wrap a mapped window.
    ///
    /// # Safety
    ///
    /// `base` must point to a mapping of at least `len` bytes that stays
    /// valid for the lifetime of the value and is not accessed through any
    /// Rust reference while the window is live.
    pub const unsafe fn new(base: *mut u8, len: usize) -> Self {
        Self { base, len }
    }
}

impl RegionIo for MmioRegion {
    fn len(&self) -> usize {
        self.len
    }

    fn write_u32(&self, offset: usize, value: u32) {
        debug_assert!(offset % 4 == 0);
        debug_assert!(offset + 4 <= self.len);
        // SAFETY: the constructor guarantees the mapping covers `len`
        // bytes and the bounds are asserted above.
        unsafe { core::ptr::write_volatile(self.base.add(offset).cast::<u32>(), value) };
        fence(Ordering::SeqCst);
    }

    fn write_bytes(&self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset + bytes.len() <= self.len);
        for (i, &b) in bytes.iter().enumerate() {
            // SAFETY: `offset + bytes.len()` is within the mapped window
            // per the assertion above and the constructor contract.
            unsafe { core::ptr::write_volatile(self.base.add(offset + i), b) };
        }
        fence(Ordering::SeqCst);
    }

    fn read_u32(&self, offset: usize) -> u32 {
        debug_assert!(offset % 4 == 0);
        debug_assert!(offset + 4 <= self.len);
        // SAFETY: bounds asserted above; the mapping outlives the window.
        unsafe { core::ptr::read_volatile(self.base.cast_const().add(offset).cast::<u32>()) }
    }
}
