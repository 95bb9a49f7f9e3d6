//! Loader-facing surface: the descriptor, the trampoline, the link symbols.

use boot_proto::{BootDescriptor, RequestFlags};

/// Services requested from the loader: page-aligned modules and the physical
/// memory summary. Because the request is non-empty, the boot-information
/// pointer in `EBX` is part of the entry contract and gets forwarded.
pub const REQUESTED: RequestFlags = RequestFlags::new()
    .with_page_aligned_modules(true)
    .with_memory_map(true);

/// The record the loader scans for. Its own section lets the linker script
/// pin it to the front of the image, inside the scan window.
#[unsafe(link_section = ".boot.descriptor")]
#[unsafe(no_mangle)]
#[used]
pub static BOOT_DESCRIPTOR: BootDescriptor = BootDescriptor::new(REQUESTED);

const _: () = assert!(BootDescriptor::new(REQUESTED).is_coherent());

unsafe extern "C" {
    /// First byte of the scratch range: every zero-initialized object, the
    /// boot stack included.
    pub static mut __scratch_start: u8;
    /// One past the last byte of the scratch range.
    pub static mut __scratch_end: u8;
    /// Lowest stack byte; frames pushed below this corrupt the region.
    pub static __stack_bottom: u8;
    /// One past the highest stack byte; the initial `ESP` value.
    pub static __stack_top: u8;
}

// The trampoline. The loader arrives here in 32-bit protected mode with
// EAX = reply magic and EBX = boot-information address; both must survive
// untouched until the hand-off, and nothing may be read from or written to
// the scratch range before the clear finishes, which is why the clear runs
// stackless, out of registers the loader does not own.
#[cfg(target_arch = "x86")]
core::arch::global_asm!(
    ".section .text._start",
    ".global _start",
    "_start:",
    "    mov esi, eax",                  // reply magic out of rep stos's way
    "    mov edi, offset __scratch_start",
    "    mov ecx, offset __scratch_end",
    "    sub ecx, edi",
    "    xor eax, eax",
    "    rep stosb",                     // ecx == 0 clears nothing
    "    mov esp, offset __stack_top",   // first frame lands on zeroed bytes
    "    push ebx",                      // forward the pointer bit-for-bit
    "    call {entry}",
    // The entry routine owns the machine and must not come back. If it
    // does, park: interrupts off, halt, and stay halted.
    "2:",
    "    cli",
    "    hlt",
    "    jmp 2b",
    entry = sym crate::landing::kernel_entry,
);
