fn main() {
    // Only run linker script setup for hardware builds
    #[cfg(feature = "hardware")]
    {
        use std::env;
        use std::fs;
        use std::path::PathBuf;

        // Put `memory.x` in our output directory and ensure it's on the linker search path.
        let Some(out_dir) = env::var_os("OUT_DIR") else {
            println!("cargo:warning=OUT_DIR not set; skipping memory.x");
            return;
        };
        let out = PathBuf::from(out_dir);
        if let Err(e) = fs::write(out.join("memory.x"), include_bytes!("memory.x")) {
            println!("cargo:warning=failed to write memory.x: {e}");
            return;
        }

        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        println!("cargo:rerun-if-changed=memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
