use std::{env, path::PathBuf};

/// Physical address Multiboot loaders place the image at.
const LOAD_ADDR: u64 = 0x0010_0000;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let ld = manifest_dir.join("kernel.ld");
    println!("cargo:rerun-if-changed={}", ld.display());

    // Sanity checks (fail fast during build)
    let stack_size = boot_region::STACK_SIZE as u64;
    assert_eq!(
        LOAD_ADDR & 0xfff,
        0,
        "load address must be page aligned (got {LOAD_ADDR:#x})"
    );
    assert_eq!(
        stack_size % boot_region::STACK_ALIGN as u64,
        0,
        "stack size must preserve ESP alignment (got {stack_size:#x})"
    );

    // Only bare-metal targets link against the script; hosted builds of the
    // workspace produce the inert stub and must stay untouched.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        println!("cargo:rustc-link-arg-bins=-T{}", ld.display());
        println!("cargo:rustc-link-arg-bins=--defsym=LOAD_ADDR={LOAD_ADDR:#x}");
        println!("cargo:rustc-link-arg-bins=--defsym=STACK_SIZE={stack_size:#x}");
    }
}
