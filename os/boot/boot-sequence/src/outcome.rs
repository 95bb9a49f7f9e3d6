//! The tagged hand-off outcome and the two seams around it.

use boot_proto::{BootDescriptor, BootInfoAddr, EntryAbi, LoaderRegisters};

/// What the sequence does once the execution environment is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// Invoke the kernel entry routine. The boot-information address is
    /// present exactly when the descriptor requested loader services.
    Proceed(Option<BootInfoAddr>),
    /// Park the processor. Nothing leaves this outcome.
    Fatal,
}

impl Handoff {
    /// The outcome a descriptor and the loader's registers select.
    ///
    /// The reply magic in `regs` is deliberately not consulted (see the
    /// crate docs). An incoherent descriptor, on the other hand, could never
    /// have been accepted by a loader; observing one here means the image
    /// itself is corrupt, which is this layer's definition of unrecoverable.
    #[must_use]
    pub fn plan(descriptor: &BootDescriptor, regs: LoaderRegisters) -> Self {
        if !descriptor.is_coherent() {
            return Self::Fatal;
        }
        match EntryAbi::for_flags(descriptor.flags()) {
            EntryAbi::Bare => Self::Proceed(None),
            EntryAbi::WithBootInfo => Self::Proceed(Some(regs.boot_info())),
        }
    }
}

/// The kernel's native entry routine, as seen from the trampoline.
///
/// `enter` is invoked exactly once per boot, after the zeroing step and the
/// stack establishment, with the forwarded pointer (or `None` under the bare
/// ABI variant). Returning from it at all is abnormal; the sequence routes a
/// return into the halt gate.
pub trait KernelEntry {
    fn enter(&mut self, boot_info: Option<BootInfoAddr>);
}

/// The terminal parking primitive.
///
/// The production implementation disables interrupts and halts the processor
/// without returning. Test implementations latch the call and return so the
/// harness can observe that the terminal state was reached.
pub trait HaltGate {
    fn park(&mut self);
}
