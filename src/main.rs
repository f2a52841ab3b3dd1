use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use owo_colors::Stream;

use clibench::config::BenchConfig;
use clibench::display;
use clibench::errors::BenchError;
use clibench::runner::{self, ProcessLauncher, Progress};
use clibench::stats::Summary;
use clibench::types::Invocation;

#[derive(Parser)]
#[command(
    name = "clibench",
    version,
    about = "Time repeated runs of a command and report summary statistics"
)]
struct Cli {
    /// Command to benchmark, followed by the arguments passed to it
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,

    /// Warm-up runs, timed but excluded from the results [default: 10]
    #[arg(short, long)]
    warmup: Option<usize>,

    /// Measured runs [default: 100]
    #[arg(short, long)]
    runs: Option<usize>,

    /// Config file (defaults to <config dir>/clibench/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the results as JSON on stdout; progress goes to stderr
    #[arg(long)]
    json: bool,

    /// Print the timing of every run
    #[arg(short, long)]
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let invocation = Invocation::from_command_line(cli.command).ok_or(BenchError::MissingCommand)?;

    let config = match &cli.config {
        Some(path) => BenchConfig::load_from(path)?,
        None => BenchConfig::load_default()?,
    }
    .with_overrides(cli.warmup, cli.runs);
    config.validate()?;

    let mut launcher = ProcessLauncher;

    let record = if cli.json {
        let mut progress = Progress::new(io::stderr().lock(), Stream::Stderr);
        progress.verbose = cli.verbose;
        runner::run_benchmark(&mut launcher, &invocation, &config, &mut progress)?
    } else {
        let mut progress = Progress::new(io::stdout().lock(), Stream::Stdout);
        progress.verbose = cli.verbose;
        runner::run_benchmark(&mut launcher, &invocation, &config, &mut progress)?
    };

    let summary = Summary::from_samples(&record.samples).ok_or(BenchError::InvalidRunCount)?;

    if cli.json {
        println!(
            "{}",
            display::format_json(&invocation, &config, &record, &summary, Utc::now())
        );
    } else {
        print!("{}", display::format_report(&summary));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
