use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use symbols_prepare::{generate_symbol_table, logging};
use symbols_source::ParseOptions;

/// Generates the symbol class, uppercase and lowercase tables from UnicodeData.txt
#[derive(Parser, Debug)]
#[clap(version)]
struct Args
{
    /// UNICODE data file (UnicodeData.txt)
    #[clap(short, long, value_parser, value_name = "UNICODE_DATA")]
    from: PathBuf,

    /// Generated symbol table file
    #[clap(short, long, value_parser, value_name = "SYMBOL_TABLE")]
    to: PathBuf,

    /// Fill <..., First> ..= <..., Last> ranges with the properties of the first record
    #[clap(long)]
    expand_ranges: bool,

    /// Debug logging, unless RUST_LOG is set
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode
{
    let args = Args::parse();
    logging::init(args.verbose);

    let options = ParseOptions {
        expand_ranges: args.expand_ranges,
    };

    match generate_symbol_table(&args.from, &args.to, options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
