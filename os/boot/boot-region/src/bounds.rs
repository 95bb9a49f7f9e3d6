//! Validated description of the scratch range.

use thiserror::Error;

/// Reasons a scratch-region description is rejected.
///
/// Only the hosted model ever sees these. The trampoline has no error
/// channel; a bad layout there is undefined corruption, which is exactly why
/// auditing the same numbers on a host is worth having.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// `end` precedes `start`.
    #[error("scratch region ends at {end:#x}, before its start at {start:#x}")]
    InvertedBounds { start: usize, end: usize },

    /// The stack sub-range does not fit inside the region.
    #[error("region of {region} bytes cannot hold a {stack} byte stack")]
    StackExceedsRegion { region: usize, stack: usize },
}

/// A byte range `[start, end)` fixed at link time.
///
/// Covers every statically declared zero-initialized object, the boot stack
/// included. `start == end` is a valid, empty region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionBounds {
    start: usize,
    end: usize,
}

impl RegionBounds {
    /// Validate and wrap a pair of bounds.
    ///
    /// # Errors
    /// [`LayoutError::InvertedBounds`] when `end < start`.
    pub const fn new(start: usize, end: usize) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::InvertedBounds { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}
