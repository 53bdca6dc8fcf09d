//! Error values reported by `RingBuffer` operations.

#[cfg(feature = "std")]
use std::error::Error;

use core::fmt;

/// Error value indicating that a zero capacity was requested.
///
/// This error only occurs at construction; a ring buffer must be able to
/// hold at least one element.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct InvalidCapacityError;

const CAPZERO: &str = "capacity must be greater than zero";

#[cfg(feature = "std")]
impl Error for InvalidCapacityError {}

impl fmt::Display for InvalidCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CAPZERO)
    }
}

impl fmt::Debug for InvalidCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", "InvalidCapacityError", CAPZERO)
    }
}

/// Error value indicating that the requested logical position does not
/// exist: the buffer is empty, or the index is not below the current
/// length.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct OutOfRangeError;

const OUTOFRANGE: &str = "no element at the requested position";

#[cfg(feature = "std")]
impl Error for OutOfRangeError {}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", OUTOFRANGE)
    }
}

impl fmt::Debug for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", "OutOfRangeError", OUTOFRANGE)
    }
}

/// Error value indicating insufficient capacity.
///
/// This error only occurs for bounded insertion; the rejected element is
/// handed back to the caller in `element`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}
