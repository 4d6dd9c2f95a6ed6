//! Fatal-error notifier seam.
//!
//! The platform owns a process-wide chain of callbacks invoked when the
//! kernel hits a fatal software failure. The recorder registers exactly one
//! callback for the remaining life of the process and never unregisters:
//! the record must outlive whatever context is dying.

/// Verdict returned to the notification mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Handled; keep notifying the remaining callbacks. The recorder never
    /// vetoes or halts the chain.
    Done,
}

/// One callback on the fatal-error chain.
///
/// Invoked from whatever context triggered the failure, possibly with a
/// limited stack and other subsystems already broken; implementations must
/// not block or allocate.
pub trait PanicCallback: Sync {
    /// Handle a fatal event. `context` carries diagnostic text when the
    /// failure site provided any.
    fn notify(&self, context: Option<&str>) -> NotifyOutcome;
}

/// Registry for fatal-error callbacks, injected at bind time.
pub trait NotifierChain {
    /// Append `callback` to the chain for the remaining process lifetime.
    fn register(&self, callback: &'static dyn PanicCallback);
}
