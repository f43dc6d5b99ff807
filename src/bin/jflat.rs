use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use leanjson::{process_file, Conversion, FileOutcome, TokenCounter};
use tracing_subscriber::EnvFilter;

/// Converts a JSON file into ultra-compact key:value text.
///
/// jflat drops structural braces and quoting, prints a report comparing the
/// token cost of the original file against the flattened text, and can save
/// the result next to the input.
#[derive(Parser, Debug)]
#[command(name = "jflat")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to flatten.
    #[arg(value_name = "FILE")]
    target: PathBuf,

    /// Save the result as `{stem}_flat.txt` next to the input.
    #[arg(long)]
    save: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jflat: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.target.is_file() {
        return Err(format!("file not found: '{}'", args.target.display()).into());
    }

    let counter = TokenCounter::new();
    let decorated = io::stdout().is_terminal();

    let outcome = process_file(&counter, &args.target, Conversion::Flatten, args.save, decorated);
    if outcome != FileOutcome::Success {
        process::exit(1);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
