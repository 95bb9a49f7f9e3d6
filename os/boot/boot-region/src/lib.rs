//! # Uninitialized-Data Region
//!
//! The link-time-reserved byte range that must read as zero before any other
//! code runs, modeled as an explicit, sized, addressable arena instead of an
//! implicit pair of linker symbols.
//!
//! The range is owned exclusively by the boot sequence until the hand-off
//! call, and the types here make that ownership and its transfer visible:
//!
//! ```text
//! ScratchArena          pre-clear; nothing can read through it
//!      │ clear()        the zeroing step, exactly once
//!      ▼
//! ClearedArena          globals readable, stack may be established
//!      │ release()      ownership passes to the kernel runtime
//!      ▼
//! &mut [u8]             the runtime's property; this crate holds nothing
//! ```
//!
//! The production trampoline performs the same steps over the raw linker
//! symbols ([`zero::zero_range`] is the primitive it shares with this model);
//! it takes the symbols on faith, while [`RegionBounds::new`] lets hosted
//! code audit a layout before trusting it. The stack is a fixed-size
//! sub-range at the region's tail; there is no guard page and overflow
//! silently corrupts the bytes below it, a known fragility of this layer,
//! carried rather than fixed.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod arena;
pub mod bounds;
pub mod stack;
pub mod zero;

pub use arena::{ClearedArena, ScratchArena};
pub use bounds::{LayoutError, RegionBounds};
pub use stack::{STACK_ALIGN, STACK_SIZE, StackRegion};
