//! Error types for the restart-reason recorder.
//!
//! Binding errors are fatal: the recorder must never continue with a
//! partially mapped record, since later writes would land in arbitrary
//! memory. Losing the once-only race is expected and informational.

use core::fmt;

/// Errors surfaced while binding the persistent regions at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// The reason-code cell is absent from the platform description.
    ReasonRegionMissing,
    /// The restart-info block is absent from the platform description.
    InfoRegionMissing,
    /// The restart-info block exists but its declared size could not be read.
    SizeUnavailable,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReasonRegionMissing => {
                write!(f, "restart reason region missing from platform description")
            }
            Self::InfoRegionMissing => {
                write!(f, "restart info region missing from platform description")
            }
            Self::SizeUnavailable => {
                write!(f, "restart info region has no readable size property")
            }
        }
    }
}

/// Failure reported by a platform region locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// No region is described under the requested logical name.
    NotFound,
    /// The region exists but the requested property does not.
    PropertyMissing,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "region not found"),
            Self::PropertyMissing => write!(f, "region property missing"),
        }
    }
}

/// A later caller lost the once-only race for the restart record.
///
/// Not a failure of the system: whoever recorded first owns the narrative
/// and the caller's reason/message pair is dropped without any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadySet;

impl fmt::Display for AlreadySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "restart reason already recorded")
    }
}

/// Result type alias for binding operations.
pub type BindResult<T> = Result<T, BindError>;
