//! Terminal parking. No state transition leaves here.

/// Disable interrupts and halt, forever.
///
/// `hlt` can fall through on an NMI even with interrupts masked, hence the
/// loop around it.
pub fn park() -> ! {
    loop {
        #[cfg(target_arch = "x86")]
        // SAFETY: masking interrupts and halting is the defined terminal
        // state of this layer; there is nothing left to preempt.
        unsafe {
            core::arch::asm!("cli", "hlt", options(nomem, nostack));
        }
        core::hint::spin_loop();
    }
}
