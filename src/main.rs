use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::{info, LevelFilter};

use headermap::errors::*;
use headermap::*;

/// Prefix FASTA headers with values from a key to value mapping file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input FASTA file
    input_file: PathBuf,
    /// Path to the output FASTA file, created or replaced
    output_file: PathBuf,
    /// Path to the mapping file with one `key value` pair per line
    mapping_file: PathBuf,
    /// Part of the header to look up: exact, id, or auto (exact, then id)
    #[arg(short = 'm', long = "match", default_value = "auto")]
    key_match: KeyMatch,
    /// Write run counts as YAML to this file
    #[arg(long)]
    summary: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, default_value_t = 0)]
    verbosity: u8,
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let map = KeyMap::from_file(&args.mapping_file)?;
    info!(
        "Loaded {} mapping(s) from \"{}\"",
        map.len(),
        args.mapping_file.display()
    );

    let stats = HeaderRewriter::new(&map)
        .key_match(args.key_match)
        .rewrite_file(&args.input_file, &args.output_file)?;

    if let Some(summary) = &args.summary {
        let file = File::create(summary).map_err(|e| Error::NotFound {
            file: summary.display().to_string(),
            source: e,
        })?;
        serde_yaml::to_writer(file, &stats)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter_level = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
