//! # Kernel Image
//!
//! The bare-metal half of the boot path: the Multiboot descriptor the loader
//! scans for, the `_start` trampoline that manufactures a valid execution
//! environment out of nothing, and the landing code that takes over once a
//! stack exists. The hosted model of the same sequence lives in
//! `boot-sequence`; this binary is where its invariants meet hardware.
//!
//! The crate only means something on a bare-metal target. Hosted builds of
//! the workspace get an inert stub so `cargo build`/`cargo test` on a
//! development machine stay green.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![allow(unsafe_code)]

#[cfg(target_os = "none")]
mod entry;
#[cfg(target_os = "none")]
mod halt;
#[cfg(target_os = "none")]
mod landing;
#[cfg(target_os = "none")]
mod panic;

#[cfg(not(target_os = "none"))]
fn main() {
    // Nothing to do on a hosted target; see the crate docs.
}
