use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use symbols_prepare::{generate_unihan_table, logging};

/// Generates the Unihan ideograph table
#[derive(Parser, Debug)]
#[clap(version)]
struct Args
{
    /// Path to input Unihan definition file
    #[clap(short, long, value_parser)]
    input: PathBuf,

    /// Path to output C++ file
    #[clap(short, long, value_parser)]
    output: PathBuf,

    /// Debug logging, unless RUST_LOG is set
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode
{
    let args = Args::parse();
    logging::init(args.verbose);

    match generate_unihan_table(&args.input, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
