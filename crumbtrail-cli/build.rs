//! Build script for crumbtrail-cli.
//!
//! This script generates the man page at build time using clap_mangen.
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
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("crumbtrail")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Configure and render breadcrumb trails")
        .long_about(
            "Command-line tool for configuring per-content-type and per-role breadcrumb trails \
             and rendering the trail of any page",
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
            Arg::new("site")
                .long("site")
                .help("Use this site file instead of discovering one")
                .value_name("PATH")
                .global(true)
                .env("CRUMBTRAIL_SITE"),
        )
        .subcommands(vec![
            Command::new("trail")
                .about("Render the breadcrumb trail of a node, user or path")
                .long_about("Pick the applicable breadcrumb rule for a route and print its trail"),
            Command::new("show-settings")
                .about("Show the breadcrumb settings")
                .long_about("Show allowed types, referenceable bundles and excluded roles"),
            Command::new("set-settings")
                .about("Choose which content types use configured breadcrumbs")
                .long_about(
                    "Replace the allowed content types and the types that may be referenced",
                ),
            Command::new("set-path")
                .about("Set the breadcrumb path of a content type or role")
                .long_about("Replace the ordered ancestor pages of a content type or role"),
            Command::new("show-path")
                .about("Show the breadcrumb path of a content type or role")
                .long_about("Print the ancestor pages of a content type or role as references"),
            Command::new("list-types")
                .about("List content types and their breadcrumb settings")
                .long_about("Show which content types are allowed and referenceable"),
            Command::new("validate")
                .about("Validate a site file")
                .long_about("Check a crumbtrail site file for errors"),
            Command::new("init")
                .about("Create a starter site file")
                .long_about("Write a crumbtrail.yaml with one configured content type"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("crumbtrail.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
