//! The loader-readable record advertising a bootable image.

use bitfield_struct::bitfield;

/// Request magic the image advertises to the loader.
pub const DESCRIPTOR_MAGIC: u32 = 0x1BAD_B002;

/// The descriptor must sit within this many bytes of the image start for the
/// loader's linear scan to find it.
pub const DESCRIPTOR_SCAN_WINDOW: usize = 8192;

/// Alignment the loader's scan assumes.
pub const DESCRIPTOR_ALIGN: usize = 4;

/// Loader services the image requests, one bit each.
///
/// Anything beyond the defined bits is reserved and must stay zero; a loader
/// that sees an unknown mandatory bit refuses the image.
#[bitfield(u32, order = Lsb)]
pub struct RequestFlags {
    /// Bit 0 — load boot modules on page boundaries.
    pub page_aligned_modules: bool,

    /// Bit 1 — supply the physical memory summary and map through the
    /// boot-information record.
    pub memory_map: bool,

    /// Bit 2 — supply video mode information.
    pub video_mode: bool,

    /// Bits 3..=31 — reserved, must be zero.
    #[bits(29, access = RO)]
    pub reserved: u32,
}

impl RequestFlags {
    /// Whether any loader service is requested at all.
    ///
    /// A non-empty request widens the entry contract: the boot-information
    /// pointer becomes part of it.
    #[must_use]
    pub const fn requests_services(self) -> bool {
        self.into_bits() != 0
    }
}

/// Static record a loader scans for before accepting the image.
///
/// Compiled into the image, read-only, read exactly once by the loader, never
/// mutated. The constructor is the only place a checksum is ever computed;
/// there is deliberately no setter for anything.
///
/// Invariant: `magic + flags + checksum ≡ 0 (mod 2³²)`.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BootDescriptor {
    magic: u32,
    flags: RequestFlags,
    checksum: u32,
}

impl BootDescriptor {
    /// Build a coherent descriptor for the given service requests.
    #[must_use]
    pub const fn new(flags: RequestFlags) -> Self {
        let checksum = 0u32
            .wrapping_sub(DESCRIPTOR_MAGIC)
            .wrapping_sub(flags.into_bits());
        Self {
            magic: DESCRIPTOR_MAGIC,
            flags,
            checksum,
        }
    }

    /// Reassemble a descriptor from raw fields, the way a loader scanning an
    /// image would. Coherence is the caller's question to ask afterwards.
    #[must_use]
    pub const fn from_raw_parts(magic: u32, flags: RequestFlags, checksum: u32) -> Self {
        Self {
            magic,
            flags,
            checksum,
        }
    }

    #[must_use]
    pub const fn magic(&self) -> u32 {
        self.magic
    }

    #[must_use]
    pub const fn flags(&self) -> RequestFlags {
        self.flags
    }

    #[must_use]
    pub const fn checksum(&self) -> u32 {
        self.checksum
    }

    /// The acceptance invariant: the three words wrap to zero.
    #[must_use]
    pub const fn is_coherent(&self) -> bool {
        self.magic
            .wrapping_add(self.flags.into_bits())
            .wrapping_add(self.checksum)
            == 0
    }
}

const _: () = assert!(
    size_of::<BootDescriptor>() == 12,
    "descriptor layout is fixed by the boot protocol"
);
const _: () = assert!(align_of::<BootDescriptor>() == DESCRIPTOR_ALIGN);
