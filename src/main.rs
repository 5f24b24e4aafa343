//! Figpress command-line binary

use figpress::cli::Cli;
use std::process;

fn main() {
    let mut cli = Cli::new();
    if let Err(e) = cli.run() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
