use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::config::BenchConfig;
use crate::stats::Summary;
use crate::types::{Invocation, RunRecord};

const BANNER_WIDTH: usize = 50;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Seconds to milliseconds with two decimal places.
pub fn format_ms(seconds: f64) -> String {
    format!("{:.2}", seconds * 1000.0)
}

pub fn format_session_header(invocation: &Invocation) -> String {
    format!("Benchmarking: {}", invocation)
}

pub fn format_warmup_notice(warmup_runs: usize) -> String {
    format!("Running {} warm-up runs...", warmup_runs)
}

pub fn format_benchmark_notice(benchmark_runs: usize) -> String {
    format!("Starting {} benchmark runs...", benchmark_runs)
}

/// Warning line for a run that did not exit cleanly. `run` is 1-based.
pub fn format_run_warning(run: usize, exit_code: Option<i32>, stream: Stream) -> String {
    let text = match exit_code {
        Some(code) => format!("Warning: Run {} exited with code {}", run, code),
        None => format!("Warning: Run {} was terminated by a signal", run),
    };
    text.if_supports_color(stream, |s| s.yellow()).to_string()
}

/// Per-run timing line printed in verbose mode.
pub fn format_run_timing(run: usize, seconds: f64, warmup: bool, stream: Stream) -> String {
    let line = format!("Run {}: {} ms", run, format_ms(seconds));
    if warmup {
        let tag = "(warm-up)"
            .if_supports_color(stream, |s| s.dimmed())
            .to_string();
        format!("{} {}", line, tag)
    } else {
        line
    }
}

/// Text results block: blank line, banner, the five statistics in ms, banner.
pub fn format_report(summary: &Summary) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&banner());
    out.push('\n');
    out.push_str(
        &"BENCHMARK RESULTS"
            .if_supports_color(Stream::Stdout, |s| s.bold())
            .to_string(),
    );
    out.push('\n');
    out.push_str(&banner());
    out.push('\n');

    let rows = [
        ("Average time: ", summary.mean),
        ("Median time:  ", summary.median),
        ("Shortest:     ", summary.min),
        ("Longest:      ", summary.max),
        ("Std dev:      ", summary.stddev),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{}{} ms\n", label, format_ms(value)));
    }

    out.push_str(&banner());
    out.push('\n');

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    command: &'a str,
    args: &'a [String],
    warmup_runs: usize,
    benchmark_runs: usize,
    failed_runs: usize,
    total_launches: usize,
    mean_ms: f64,
    median_ms: f64,
    min_ms: f64,
    max_ms: f64,
    stddev_ms: f64,
    samples_ms: Vec<f64>,
    timestamp: String,
}

pub fn format_json(
    invocation: &Invocation,
    config: &BenchConfig,
    record: &RunRecord,
    summary: &Summary,
    now: DateTime<Utc>,
) -> String {
    let report = JsonReport {
        command: &invocation.program,
        args: &invocation.args,
        warmup_runs: config.warmup_runs,
        benchmark_runs: config.benchmark_runs,
        failed_runs: record.failed_runs,
        total_launches: record.total_launches,
        mean_ms: summary.mean * 1000.0,
        median_ms: summary.median * 1000.0,
        min_ms: summary.min * 1000.0,
        max_ms: summary.max * 1000.0,
        stddev_ms: summary.stddev * 1000.0,
        samples_ms: record.samples.iter().map(|s| s * 1000.0).collect(),
        timestamp: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}
