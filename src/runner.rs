use std::io::Write;
use std::process::Command;
use std::time::Instant;

use anyhow::Result;
use owo_colors::Stream;

use crate::config::BenchConfig;
use crate::display;
use crate::errors::BenchError;
use crate::types::{Invocation, Launch, RunRecord};

/// Upper bound on the samples buffer reserved before the first run.
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// Runs the target once and reports how long it took.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<Launch, BenchError>;
}

/// Spawns the target as a child process with stdout and stderr captured.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<Launch, BenchError> {
        let start = Instant::now();
        // `output()` pipes stdout/stderr and closes stdin. The captured output is dropped.
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|source| BenchError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        let elapsed = start.elapsed();

        Ok(Launch {
            elapsed,
            exit_code: output.status.code(),
        })
    }
}

/// Where progress lines go and how they look.
pub struct Progress<W: Write> {
    pub out: W,
    /// Stream that `out` ends up on, for color detection.
    pub stream: Stream,
    /// Print one timing line per run.
    pub verbose: bool,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, stream: Stream) -> Self {
        Self {
            out,
            stream,
            verbose: false,
        }
    }
}

/// Launches the target `warmup_runs + benchmark_runs` times, one after another,
/// and collects the timings of every run past the warm-up.
///
/// A non-zero exit only produces a warning. A launch error (target cannot be
/// spawned) aborts the whole session.
pub fn run_benchmark<L: Launcher, W: Write>(
    launcher: &mut L,
    invocation: &Invocation,
    config: &BenchConfig,
    progress: &mut Progress<W>,
) -> Result<RunRecord> {
    let mut record = RunRecord {
        samples: Vec::with_capacity(config.benchmark_runs.min(MAX_PREALLOCATED_SAMPLES)),
        ..RunRecord::default()
    };

    writeln!(progress.out, "{}", display::format_session_header(invocation))?;
    writeln!(progress.out, "{}", display::format_warmup_notice(config.warmup_runs))?;

    for i in 0..config.total_runs() {
        if i == config.warmup_runs {
            writeln!(
                progress.out,
                "{}",
                display::format_benchmark_notice(config.benchmark_runs)
            )?;
        }

        let launch = launcher.launch(invocation)?;
        record.total_launches += 1;

        let seconds = launch.elapsed.as_secs_f64();
        let warmup = i < config.warmup_runs;
        if !warmup {
            record.samples.push(seconds);
        }

        if progress.verbose {
            writeln!(
                progress.out,
                "{}",
                display::format_run_timing(i + 1, seconds, warmup, progress.stream)
            )?;
        }

        if !launch.succeeded() {
            if !warmup {
                record.failed_runs += 1;
            }
            writeln!(
                progress.out,
                "{}",
                display::format_run_warning(i + 1, launch.exit_code, progress.stream)
            )?;
        }
    }

    Ok(record)
}
