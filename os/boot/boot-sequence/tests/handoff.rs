use boot_proto::{
    BootDescriptor, BootInfoAddr, LOADER_REPLY_MAGIC, LoaderRegisters, RequestFlags,
};
use boot_region::{STACK_ALIGN, STACK_SIZE, ScratchArena};
use boot_sequence::{BootStage, HaltGate, Handoff, KernelEntry, run};

#[repr(align(16))]
struct Aligned<const N: usize>([u8; N]);

/// Simulated loader: fills the image's scratch range with junk (the loader
/// guarantees nothing about it) and places the contract values in registers.
fn loader_jump(scratch: &mut [u8], info_addr: u32) -> LoaderRegisters {
    scratch.fill(0xCD);
    LoaderRegisters::new(LOADER_REPLY_MAGIC, info_addr)
}

#[derive(Default)]
struct RecordingEntry {
    calls: u32,
    observed: Option<Option<BootInfoAddr>>,
}

impl KernelEntry for RecordingEntry {
    fn enter(&mut self, boot_info: Option<BootInfoAddr>) {
        self.calls += 1;
        self.observed = Some(boot_info);
    }
}

#[derive(Default)]
struct HaltLatch {
    parked: u32,
}

impl HaltGate for HaltLatch {
    fn park(&mut self) {
        self.parked += 1;
    }
}

#[test]
fn memory_map_request_forwards_the_exact_pointer() {
    let mut buf = Aligned([0u8; 64 * 1024]);
    let descriptor = BootDescriptor::new(
        RequestFlags::new()
            .with_page_aligned_modules(true)
            .with_memory_map(true),
    );
    let regs = loader_jump(&mut buf.0, 0x0009_F800);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    run(arena, &descriptor, regs, &mut entry, &mut halt);

    // The pointer arrives bit-for-bit, untouched by the clear or the stack
    // setup.
    assert_eq!(entry.calls, 1);
    assert_eq!(entry.observed, Some(Some(BootInfoAddr::new(0x0009_F800))));
}

#[test]
fn bare_request_invokes_the_entry_with_nothing() {
    let mut buf = Aligned([0u8; 64 * 1024]);
    let descriptor = BootDescriptor::new(RequestFlags::new());
    let regs = loader_jump(&mut buf.0, 0x0009_F800);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    run(arena, &descriptor, regs, &mut entry, &mut halt);

    assert_eq!(entry.observed, Some(None));
}

#[test]
fn the_clear_precedes_the_entry_and_reaches_every_byte() {
    let mut buf = Aligned([0u8; 64 * 1024]);
    let descriptor = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let regs = loader_jump(&mut buf.0, 0x1000);

    {
        let mut entry = RecordingEntry::default();
        let mut halt = HaltLatch::default();
        let arena = ScratchArena::new(&mut buf.0).unwrap();
        run(arena, &descriptor, regs, &mut entry, &mut halt);
        assert_eq!(entry.calls, 1);
    }

    // The loader's junk is gone from the whole region.
    assert!(buf.0.iter().all(|&b| b == 0));
}

#[test]
fn stack_lands_on_the_region_top_aligned() {
    let mut buf = Aligned([0u8; 64 * 1024]);
    let region_end = buf.0.as_ptr() as usize + buf.0.len();
    let descriptor = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let regs = loader_jump(&mut buf.0, 0x1000);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    let report = run(arena, &descriptor, regs, &mut entry, &mut halt);

    assert_eq!(report.stack_top, region_end);
    assert_eq!(report.stack_top % STACK_ALIGN, 0);
    assert!(buf.0.len() >= STACK_SIZE);
}

#[test]
fn empty_region_boots_with_a_degenerate_stack() {
    let mut buf = Aligned::<0>([]);
    let base = buf.0.as_ptr() as usize;
    let descriptor = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let regs = LoaderRegisters::new(LOADER_REPLY_MAGIC, 0x2000);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::with_stack(&mut buf.0, 0).unwrap();
    let report = run(arena, &descriptor, regs, &mut entry, &mut halt);

    // The no-op clear still advances the sequence; the stack top collapses
    // onto the (aligned) region base and the hand-off happens anyway.
    assert_eq!(report.stack_top, base);
    assert_eq!(entry.observed, Some(Some(BootInfoAddr::new(0x2000))));
}

#[test]
fn a_returning_entry_routine_parks_the_machine() {
    let mut buf = Aligned([0u8; 32 * 1024]);
    let descriptor = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let regs = loader_jump(&mut buf.0, 0x3000);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    let report = run(arena, &descriptor, regs, &mut entry, &mut halt);

    assert_eq!(halt.parked, 1);
    assert_eq!(report.terminal, BootStage::Halt);
    assert!(report.terminal.is_terminal());
    // No state transition leaves the terminal stage.
    assert_eq!(report.terminal.next(), BootStage::Halt);
}

#[test]
fn bogus_loader_reply_is_still_trusted() {
    // The reply magic is deliberately not validated; a loader lying about it
    // still gets its pointer forwarded.
    let mut buf = Aligned([0u8; 32 * 1024]);
    let descriptor = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let mut regs = loader_jump(&mut buf.0, 0x4000);
    regs.reply_magic = 0x0BAD_0BAD;

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    run(arena, &descriptor, regs, &mut entry, &mut halt);

    assert_eq!(entry.observed, Some(Some(BootInfoAddr::new(0x4000))));
}

#[test]
fn corrupt_descriptor_never_reaches_the_entry() {
    let mut buf = Aligned([0u8; 32 * 1024]);
    let good = BootDescriptor::new(RequestFlags::new().with_memory_map(true));
    let bad = BootDescriptor::from_raw_parts(good.magic(), good.flags(), !good.checksum());
    let regs = loader_jump(&mut buf.0, 0x5000);

    let mut entry = RecordingEntry::default();
    let mut halt = HaltLatch::default();
    let arena = ScratchArena::new(&mut buf.0).unwrap();
    let report = run(arena, &bad, regs, &mut entry, &mut halt);

    assert_eq!(entry.calls, 0);
    assert_eq!(report.outcome, Handoff::Fatal);
    assert_eq!(halt.parked, 1);
}
