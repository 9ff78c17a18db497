//! Build script for bundlecfg-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("bundlecfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and write layered package-manager settings")
        .long_about(
            "Reads and writes settings kept in the per-project file, the per-user file \
             and BUNDLE_* environment variables, repairing settings that contradict a new value",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("app-config")
                .long("app-config")
                .help("Directory holding the per-project settings file")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("user-config")
                .long("user-config")
                .help("Per-user settings file")
                .value_name("FILE")
                .global(true)
                .env("BUNDLE_USER_CONFIG"),
        )
        .arg(
            Arg::new("prefer-local")
                .long("prefer-local")
                .help("Write to the per-project file when no scope is given")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("config")
                .about("List, show, set or delete settings")
                .long_about(
                    "With no arguments, list every setting. With a name, show where it is set. \
                     With a name and value, set it in the --local or --global scope. \
                     With --delete, remove it.",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("bundlecfg.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
