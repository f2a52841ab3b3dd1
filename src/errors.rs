use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Usage: clibench [OPTIONS] <COMMAND> [ARGS]...")]
    MissingCommand,

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Benchmark run count must be at least 1")]
    InvalidRunCount,

    #[error("Too many runs: {warmup_runs} warm-up + {benchmark_runs} benchmark runs overflows the run counter")]
    RunCountOverflow {
        warmup_runs: usize,
        benchmark_runs: usize,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}
