//! The Jack compiler CLI.
//!
//! Compiles a single `.jack` file, or every `.jack` file in a directory,
//! to VM text. There are no subcommands or output-path flags: the VM
//! file for `Foo.jack` is always written alongside it as `Foo.vm`.

use std::path::PathBuf;

use clap::Parser;

use jackc::diagnostics;
use jackc::driver;

/// Command-line interface for the Jack compiler.
#[derive(Parser)]
#[command(name = "jackc")]
#[command(about = "A single-pass compiler for the Jack programming language", long_about = None)]
struct Cli {
    /// A `.jack` file, or a directory containing `.jack` files.
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let errors = driver::compile_path(&cli.path);
    if !errors.is_empty() {
        diagnostics::report_errors(&errors);
        std::process::exit(1);
    }
}
