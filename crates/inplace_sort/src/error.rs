//! Error type for the sorting routines.

use std::collections::TryReserveError;
use std::fmt;

/// Errors returned by the sorts that need scratch memory.
///
/// A panicking comparator is not represented here; it unwinds through the
/// sort to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The reverse-bit array of a weak-heap sort could not be reserved.
    /// The sequence has not been modified.
    AllocationFailure {
        words: usize,
        source: TryReserveError,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::AllocationFailure { words, source } => {
                write!(
                    f,
                    "failed to allocate {} words of reverse bits: {}",
                    words, source
                )
            }
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::AllocationFailure { source, .. } => Some(source),
        }
    }
}
