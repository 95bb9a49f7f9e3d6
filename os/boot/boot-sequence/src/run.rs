//! Driving the sequence end to end.

use crate::outcome::{HaltGate, Handoff, KernelEntry};
use crate::stage::BootStage;
use boot_proto::{BootDescriptor, LoaderRegisters};
use boot_region::ScratchArena;

/// What a hosted harness gets to see after the sequence terminates.
///
/// The production trampoline produces nothing of the sort (it either hands
/// off or parks), which is precisely why the model returns one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandoffReport {
    /// Stack-pointer value established before the hand-off call.
    pub stack_top: usize,
    /// The outcome the descriptor and registers selected.
    pub outcome: Handoff,
    /// The stage the machine ended in. Always [`BootStage::Halt`] when this
    /// report exists at all: a sequence that handed off successfully never
    /// came back to write one.
    pub terminal: BootStage,
}

/// Run the full sequence over a scratch arena: clear, establish the stack,
/// hand off, and route any return from the entry routine into the halt gate.
///
/// Step order mirrors the trampoline exactly. The loader's register values
/// are carried untouched through the clear and the stack setup (they live in
/// `regs`, never in the region being cleared), so the pointer the entry
/// routine observes is bit-for-bit the one the loader supplied.
///
/// This returns only because test [`HaltGate`]s return from `park`; the
/// production gate never does.
pub fn run<E: KernelEntry, H: HaltGate>(
    arena: ScratchArena<'_>,
    descriptor: &BootDescriptor,
    regs: LoaderRegisters,
    entry: &mut E,
    halt: &mut H,
) -> HandoffReport {
    let mut stage = BootStage::Reset;
    log::trace!("{stage:?}: registers {regs:?}");

    stage = stage.next();
    log::trace!("{stage:?}: clearing {} bytes", arena.len());
    let cleared = arena.clear();

    stage = stage.next();
    let stack_top = cleared.stack_top();
    log::trace!("{stage:?}: stack top {stack_top:#x}");

    let outcome = Handoff::plan(descriptor, regs);
    match outcome {
        Handoff::Proceed(boot_info) => {
            stage = stage.next();
            log::info!("{stage:?}: entering kernel, boot info {boot_info:?}");
            // The cleared region becomes the kernel runtime's property at
            // the call boundary; the sequence keeps no handle on it.
            let _ = cleared.release();
            entry.enter(boot_info);
            log::error!("kernel entry returned");
        }
        Handoff::Fatal => {
            log::error!("unrecoverable boot state, refusing to hand off");
        }
    }

    stage = BootStage::Halt;
    log::trace!("{stage:?}: parking");
    halt.park();

    HandoffReport {
        stack_top,
        outcome,
        terminal: stage,
    }
}
