//! The zeroing step.
//!
//! Nothing at this layer may rely on hardware or loader behavior to deliver
//! zeroed memory; the guarantee "globals start at zero" is manufactured here
//! and nowhere else.

/// Write zero to every byte of `region`.
///
/// An empty slice completes without touching anything; bytes outside the
/// slice are never written.
pub fn zero_fill(region: &mut [u8]) {
    region.fill(0);
}

/// Zero `[start, end)` given raw bounds, typically the linker-provided
/// scratch symbols.
///
/// `start == end` is a no-op.
///
/// # Safety
/// - `[start, end)` must be one allocated, writable object and `end` must
///   not precede `start`.
/// - No live reference may point into the range.
/// - The caller must need the clear *now*: anything read from the range
///   before this returns sees unspecified bytes.
pub unsafe fn zero_range(start: *mut u8, end: *mut u8) {
    let len = end as usize - start as usize;
    // SAFETY: the caller guarantees the range is writable and unaliased.
    unsafe { core::ptr::write_bytes(start, 0, len) };
}
