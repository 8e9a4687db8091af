use std::fs;

use clap::Parser;
use quill_cfg::export::export_quill_file;

/// Translate a QUILL config file into a JSON document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    input: String,

    /// Path to the output JSON file.
    #[arg(short, long)]
    output: String,
}

fn main() {
    let args = Args::parse();

    // A failed parse leaves the output file untouched and exits non-zero
    // instead of logging and reporting success.
    let json = export_quill_file(&args.input).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    if let Err(e) = fs::write(&args.output, json) {
        eprintln!("Failed to write '{}': {}", args.output, e);
        std::process::exit(1);
    }

    println!("Configuration saved to {}", args.output);
}
