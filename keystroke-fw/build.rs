// Copyright (c) 2026 ADNT Sarl <info@adnt.io>
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::PathBuf;

use keystroke_common::Platform;

const DEFAULT_PLATFORM: &str = "ubuntu";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let root_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap())
        .parent()
        .unwrap()
        .to_path_buf();
    let linker_dir = root_dir.join("linker_scripts");

    let linker_script = fs::read_to_string(linker_dir.join("memory_rp2040.x"))
        .expect("Failed to read memory_rp2040.x");
    fs::write(out_dir.join("memory.x"), linker_script).expect("Failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    if env::var("TARGET").is_ok_and(|target| target.starts_with("thumb")) {
        println!("cargo:rustc-link-arg=-Tlink.x");
        println!("cargo:rustc-link-arg=-Tdefmt.x");
    }
    println!(
        "cargo:rerun-if-changed={}",
        linker_dir.join("memory_rp2040.x").display()
    );
    println!("cargo:rerun-if-changed=build.rs");

    // Read version from project-root VERSION file
    let version_file = root_dir.join("VERSION");
    let version = fs::read_to_string(&version_file)
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();
    println!("cargo:rustc-env=KEYSTROKE_VERSION={}", version);
    println!("cargo:rerun-if-changed={}", version_file.display());

    // Platform the keystroke sequence targets, fixed at build time
    let requested =
        env::var("KEYSTROKE_PLATFORM").unwrap_or_else(|_| DEFAULT_PLATFORM.to_string());
    let platform: Platform = requested
        .parse()
        .unwrap_or_else(|e| panic!("KEYSTROKE_PLATFORM={requested:?}: {e}"));
    fs::write(
        out_dir.join("platform.rs"),
        format!("pub const PLATFORM: Platform = Platform::{platform:?};\n"),
    )
    .expect("Failed to write platform.rs");
    println!("cargo:rerun-if-env-changed=KEYSTROKE_PLATFORM");
}
