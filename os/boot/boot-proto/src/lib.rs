//! # Loader Handshake Protocol
//!
//! This crate is the authoritative description of the contract between the
//! boot loader and the kernel image: the record the image exposes so a loader
//! recognizes it, and the register state the loader guarantees in return.
//! Both sides of the boot path consume it: the trampoline embeds the
//! [`BootDescriptor`](descriptor::BootDescriptor) and relies on the
//! [`LoaderRegisters`](handoff::LoaderRegisters) mapping, and the hosted test
//! harness uses the very same types to simulate a loader.
//!
//! ## Handshake
//!
//! ```text
//! Image (compiled in)                    Loader (at boot)
//! ┌──────────────────────────┐
//! │ BootDescriptor           │  scan     ┌───────────────────────────┐
//! │   magic    0x1BAD_B002   │ ────────► │ locate within first 8 KiB │
//! │   flags    services      │           │ verify magic+flags+cksum  │
//! │   checksum two's compl.  │           │ honor requested services  │
//! └──────────────────────────┘           └───────────┬───────────────┘
//!                                                    │ accepted
//!                                                    ▼
//!                              EAX = 0x2BAD_B002 (reply magic)
//!                              EBX = boot-information address
//!                              jmp  entry symbol
//! ```
//!
//! The descriptor's `flags` select which loader services the image wants.
//! Requesting any service also changes the entry contract: the
//! boot-information pointer in `EBX` becomes meaningful and is forwarded to
//! the kernel's native entry routine. A zero `flags` word is the older,
//! bare variant in which the entry routine takes no argument. The two shapes
//! are tagged by [`EntryAbi`](handoff::EntryAbi).
//!
//! ## What this crate does not do
//!
//! It never dereferences the boot-information pointer. The record behind it
//! is loader-owned and loader-defined; this layer's whole obligation is to
//! carry the address bit-for-bit. It also performs no I/O and allocates
//! nothing; everything here is `const`-constructible data.

#![cfg_attr(not(any(test, doctest)), no_std)]

pub mod descriptor;
pub mod handoff;

pub use descriptor::{BootDescriptor, DESCRIPTOR_MAGIC, RequestFlags};
pub use handoff::{BootInfoAddr, EntryAbi, LOADER_REPLY_MAGIC, LoaderRegisters};
