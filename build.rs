// Copies the static demo page to `dist/` so it can be served next to the
// wasm-pack output.
use std::{env, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // The demo page is only useful next to a wasm build.
    if env::var("TARGET").unwrap_or_default() != "wasm32-unknown-unknown" {
        return;
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    if let Err(err) = std::fs::create_dir_all("dist") {
        println!("cargo:warning=failed to create dist/: {err}");
        return;
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    if let Err(err) = copy(static_dir, "dist", &options) {
        println!("cargo:warning=failed to copy static/ to dist/: {err}");
    }
}
