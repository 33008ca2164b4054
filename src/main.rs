use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hfinance::{config::UNBOUNDED, process_hfinance_file, DateRange};
use tracing_subscriber::EnvFilter;

/// Print account balances for a ledger read from standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start of period (d/m/y)
    #[arg(short, long, value_name = "DATE", default_value = UNBOUNDED)]
    start: String,

    /// End of period (d/m/y)
    #[arg(short, long, value_name = "DATE", default_value = UNBOUNDED)]
    end: String,
}

fn run(args: &Args) -> Result<()> {
    let range = DateRange::from_bounds(&args.start, &args.end);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read from stdin")?;

    let report = process_hfinance_file(&input, &range)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report.accounts)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
