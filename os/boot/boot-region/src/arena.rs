//! Ownership-typed view of the scratch region.
//!
//! The typestate split makes two of the sequence's ordering rules
//! compile-time facts in the hosted model: no byte of the region can be read
//! before the zeroing step, and the stack can only be taken from a region
//! that has already been cleared.

use crate::bounds::LayoutError;
use crate::stack::{STACK_SIZE, StackRegion};
use crate::zero::zero_fill;

/// The region before the zeroing step has run.
///
/// Holds the bytes exclusively and exposes none of them; the only way
/// forward is [`clear`](Self::clear).
#[derive(Debug)]
pub struct ScratchArena<'a> {
    bytes: &'a mut [u8],
    stack_size: usize,
}

impl<'a> ScratchArena<'a> {
    /// Wrap a raw scratch range, reserving the default [`STACK_SIZE`] at its
    /// tail.
    ///
    /// # Errors
    /// [`LayoutError::StackExceedsRegion`] when the region is too small for
    /// the default stack.
    pub fn new(bytes: &'a mut [u8]) -> Result<Self, LayoutError> {
        Self::with_stack(bytes, STACK_SIZE)
    }

    /// Wrap a raw scratch range, reserving `stack_size` bytes at its tail.
    ///
    /// A zero-length region with a zero-sized stack is valid; the clear is
    /// then a no-op and the stack top collapses onto the region base.
    ///
    /// # Errors
    /// [`LayoutError::StackExceedsRegion`] when the stack does not fit.
    pub fn with_stack(bytes: &'a mut [u8], stack_size: usize) -> Result<Self, LayoutError> {
        if stack_size > bytes.len() {
            return Err(LayoutError::StackExceedsRegion {
                region: bytes.len(),
                stack: stack_size,
            });
        }
        Ok(Self { bytes, stack_size })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The zeroing step. Every byte of the region reads zero afterwards; an
    /// empty region completes in zero writes.
    #[must_use]
    pub fn clear(self) -> ClearedArena<'a> {
        let Self { bytes, stack_size } = self;
        zero_fill(bytes);
        let base = bytes.as_ptr() as usize + bytes.len() - stack_size;
        let stack = StackRegion::new(base, stack_size);
        ClearedArena { bytes, stack }
    }
}

/// The region after the zeroing step.
///
/// Globals may now be read from it and the stack may be established. The
/// boot sequence remains the logical owner until [`release`](Self::release)
/// hands the range to the kernel runtime.
pub struct ClearedArena<'a> {
    bytes: &'a mut [u8],
    stack: StackRegion,
}

impl<'a> ClearedArena<'a> {
    /// The stack sub-range at the region's tail.
    #[must_use]
    pub const fn stack(&self) -> StackRegion {
        self.stack
    }

    /// The value the sequence loads into the stack pointer.
    #[must_use]
    pub const fn stack_top(&self) -> usize {
        self.stack.top()
    }

    #[must_use]
    pub const fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// The ownership transfer: after this, the boot layer holds no reference
    /// into the region and the kernel runtime owns every byte of it.
    #[must_use]
    pub fn release(self) -> &'a mut [u8] {
        self.bytes
    }
}
