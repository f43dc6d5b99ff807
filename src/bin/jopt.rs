use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use leanjson::{
    process_directory, process_file, Conversion, FileOutcome, OutputFormat, TokenCounter,
};
use tracing_subscriber::EnvFilter;

/// Re-encodes JSON as minified JSON or flow-style YAML to cut token costs.
///
/// jopt accepts a single file or a directory, in which case every `*.json`
/// file directly inside it is processed independently. Each file gets a
/// savings report; --save writes the converted text next to its input.
#[derive(Parser, Debug)]
#[command(name = "jopt")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file, or directory containing `*.json` files.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output encoding. YAML is usually the cheaper of the two.
    #[arg(long, value_enum, default_value = "yaml")]
    format: FormatArg,

    /// Save each result as `{stem}_opt.min.json` or `{stem}_opt.yaml`.
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jopt: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let format = match args.format {
        FormatArg::Json => OutputFormat::MinifiedJson,
        FormatArg::Yaml => OutputFormat::FlowYaml,
    };
    let conversion = Conversion::Optimize(format);

    let counter = TokenCounter::new();
    let decorated = io::stdout().is_terminal();

    if args.path.is_file() {
        let outcome = process_file(&counter, &args.path, conversion, args.save, decorated);
        if outcome != FileOutcome::Success {
            process::exit(1);
        }
    } else if args.path.is_dir() {
        let summary = process_directory(&counter, &args.path, conversion, args.save, decorated)?;
        if !summary.all_clean() {
            process::exit(1);
        }
    } else {
        return Err(format!("path does not exist: '{}'", args.path.display()).into());
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
