//! Shared test doubles: RAM-backed regions, a fake platform source and a
//! fake fatal-error chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use reset_reason::{NotifierChain, NotifyOutcome, PanicCallback, RegionIo, RegionSource,
    ResolveError};

/// RAM-backed region that counts every write.
#[derive(Clone, Debug)]
pub struct FakeRegion {
    mem: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl FakeRegion {
    pub fn new(len: usize) -> Self {
        Self {
            mem: Arc::new(Mutex::new(vec![0; len])),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.mem.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Message field contents up to (not including) the first zero byte.
    pub fn message_at(&self, offset: usize) -> String {
        let mem = self.mem.lock().unwrap();
        let field = &mem[offset..];
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        String::from_utf8_lossy(&field[..end]).into_owned()
    }
}

impl RegionIo for FakeRegion {
    fn len(&self) -> usize {
        self.mem.lock().unwrap().len()
    }

    fn write_u32(&self, offset: usize, value: u32) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.mem.lock().unwrap()[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
    }

    fn write_bytes(&self, offset: usize, bytes: &[u8]) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.mem.lock().unwrap()[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    fn read_u32(&self, offset: usize) -> u32 {
        let mem = self.mem.lock().unwrap();
        u32::from_ne_bytes(mem[offset..offset + 4].try_into().unwrap())
    }
}

/// Fake platform locator. Regions and the size property can be removed to
/// simulate a missing or malformed hardware description.
pub struct FakeSource {
    pub reason: Option<FakeRegion>,
    pub info: Option<FakeRegion>,
    pub info_size: Option<u32>,
}

impl FakeSource {
    /// A fully described platform with the given declared info size.
    pub fn new(info_size: u32) -> Self {
        Self {
            reason: Some(FakeRegion::new(4)),
            info: Some(FakeRegion::new(info_size as usize)),
            info_size: Some(info_size),
        }
    }

    pub fn reason_region(&self) -> FakeRegion {
        self.reason.clone().unwrap()
    }

    pub fn info_region(&self) -> FakeRegion {
        self.info.clone().unwrap()
    }

    /// How many handles to the reason region's memory are still alive,
    /// besides the source's own.
    pub fn reason_handles_outstanding(&self) -> usize {
        Arc::strong_count(&self.reason.as_ref().unwrap().mem) - 1
    }
}

impl RegionSource for FakeSource {
    type Region = FakeRegion;

    fn resolve(&self, name: &str) -> Result<FakeRegion, ResolveError> {
        let slot = match name {
            reset_reason::region::REASON_REGION => &self.reason,
            reset_reason::region::INFO_REGION => &self.info,
            _ => &None,
        };
        slot.clone().ok_or(ResolveError::NotFound)
    }

    fn read_u32_prop(&self, name: &str, prop: &str) -> Result<u32, ResolveError> {
        if name == reset_reason::region::INFO_REGION
            && prop == reset_reason::region::INFO_SIZE_PROP
        {
            self.info_size.ok_or(ResolveError::PropertyMissing)
        } else {
            Err(ResolveError::PropertyMissing)
        }
    }
}

/// Fake fatal-error chain capturing registered callbacks.
#[derive(Default)]
pub struct FakeChain {
    callbacks: Mutex<Vec<&'static dyn PanicCallback>>,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    /// Invoke every registered callback, as the platform would on a fatal
    /// event, and collect the verdicts.
    pub fn fire(&self, context: Option<&str>) -> Vec<NotifyOutcome> {
        self.callbacks
            .lock()
            .unwrap()
            .iter()
            .map(|cb| cb.notify(context))
            .collect()
    }
}

impl NotifierChain for FakeChain {
    fn register(&self, callback: &'static dyn PanicCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }
}
