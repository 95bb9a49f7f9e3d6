//! Unrecoverable-fault sink.

use crate::halt;

/// No unwinding machinery exists at this layer; report through the debug
/// console if one is listening, then park.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    log::error!("kernel panic: {info}");
    halt::park()
}
