//! Deskbot CLI binary.

use clap::Parser;
use deskbot::cli::{args::DeskbotArgs, commands::execute_command};
use std::process;

fn main() {
    let args = DeskbotArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
