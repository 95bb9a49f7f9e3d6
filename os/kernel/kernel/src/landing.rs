//! First code to run on the established stack.

use boot_proto::{BootInfoAddr, EntryAbi};
use boot_region::{RegionBounds, StackRegion};
use kernel_debugcon::DebugconLogger;
use log::LevelFilter;

use crate::entry::{self, BOOT_DESCRIPTOR};
use crate::halt;

static LOGGER: DebugconLogger = DebugconLogger::new(LevelFilter::Trace);

/// The kernel's native entry routine.
///
/// The trampoline arrives here with the scratch range cleared, `ESP` on the
/// stack top and `info_addr` forwarded untouched from the loader's `EBX`.
/// From this point on the kernel runtime owns the machine, including the
/// scratch range the boot sequence just gave up.
#[unsafe(no_mangle)]
pub extern "C" fn kernel_entry(info_addr: u32) -> ! {
    let _ = DebugconLogger::install(&LOGGER);

    let info = BootInfoAddr::new(info_addr);
    log::info!("control from loader, boot info at {info:?}");

    match EntryAbi::for_flags(BOOT_DESCRIPTOR.flags()) {
        EntryAbi::WithBootInfo => log::debug!("entry contract carries the boot-information pointer"),
        EntryAbi::Bare => log::warn!("bare entry contract, the forwarded word is meaningless"),
    }

    // A console exists now, so the link-time layout the trampoline took on
    // faith can finally be audited.
    let start = unsafe { &raw const entry::__scratch_start } as usize;
    let end = unsafe { &raw const entry::__scratch_end } as usize;
    let stack_bottom = unsafe { &raw const entry::__stack_bottom } as usize;
    let stack_top = unsafe { &raw const entry::__stack_top } as usize;

    match RegionBounds::new(start, end) {
        Ok(scratch) => {
            let stack = StackRegion::new(stack_bottom, stack_top - stack_bottom);
            log::info!(
                "scratch region {len} bytes at {start:#010x}, stack top {top:#010x}",
                len = scratch.len(),
                start = scratch.start(),
                top = stack.top(),
            );
        }
        Err(err) => log::error!("link-time layout rejected: {err}"),
    }

    log::info!("hand-off complete; nothing scheduled, parking");
    halt::park()
}
