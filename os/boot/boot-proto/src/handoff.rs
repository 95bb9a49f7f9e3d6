//! The register contract at the moment control reaches the entry symbol.

use crate::descriptor::RequestFlags;
use core::fmt;

/// Value the loader leaves in `EAX` once it has accepted the image.
pub const LOADER_REPLY_MAGIC: u32 = 0x2BAD_B002;

/// Opaque address of the loader-owned boot-information record.
///
/// The record's layout belongs to the boot protocol, not to this layer; the
/// only defined operation on the address is carrying it, unchanged, into the
/// kernel's native entry routine.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BootInfoAddr(u32);

impl BootInfoAddr {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BootInfoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BootInfoAddr({:#010x})", self.0)
    }
}

/// Register state the loader guarantees at the entry symbol.
///
/// | Register | Field         | Meaning                                      |
/// |----------|---------------|----------------------------------------------|
/// | `EAX`    | `reply_magic` | fixed acceptance constant                    |
/// | `EBX`    | `info_addr`   | physical address of the boot-information record |
///
/// This is the whole ABI boundary between loader and kernel; everything the
/// trampoline may touch before the hand-off call is scratch space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderRegisters {
    /// `EAX` at entry.
    pub reply_magic: u32,
    /// `EBX` at entry. Meaningful only under [`EntryAbi::WithBootInfo`].
    pub info_addr: u32,
}

impl LoaderRegisters {
    #[must_use]
    pub const fn new(reply_magic: u32, info_addr: u32) -> Self {
        Self {
            reply_magic,
            info_addr,
        }
    }

    /// Whether the loader's reply matches the protocol constant.
    ///
    /// Nothing on the boot path consults this before proceeding: the trampoline
    /// trusts the loader that just transferred control to it. The check
    /// exists for later layers that want to audit the hand-off.
    #[must_use]
    pub const fn reply_matches(&self) -> bool {
        self.reply_magic == LOADER_REPLY_MAGIC
    }

    /// The boot-information address as carried through the hand-off.
    #[must_use]
    pub const fn boot_info(&self) -> BootInfoAddr {
        BootInfoAddr::new(self.info_addr)
    }
}

/// The two supported shapes of the kernel's native entry routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryAbi {
    /// `fn() -> !`: the descriptor requested nothing from the loader, so no
    /// pointer is part of the contract.
    Bare,
    /// `fn(info_addr) -> !`: the boot-information address is forwarded as
    /// the single argument, in the standard calling convention.
    WithBootInfo,
}

impl EntryAbi {
    /// The contract variant a given service request selects.
    #[must_use]
    pub const fn for_flags(flags: RequestFlags) -> Self {
        if flags.requests_services() {
            Self::WithBootInfo
        } else {
            Self::Bare
        }
    }

    /// Whether the boot-information pointer is forwarded under this variant.
    #[must_use]
    pub const fn forwards_info(self) -> bool {
        matches!(self, Self::WithBootInfo)
    }
}
