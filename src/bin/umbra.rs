//! Umbra CLI binary.

use clap::Parser;
use std::process;
use umbra::cli::{args::UmbraArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = UmbraArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
