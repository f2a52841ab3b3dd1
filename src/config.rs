use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::BenchError;

pub const DEFAULT_WARMUP_RUNS: usize = 10;
pub const DEFAULT_BENCHMARK_RUNS: usize = 100;

/// How many times the target is launched, and how many of those count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Initial runs that are executed and timed but excluded from the results.
    pub warmup_runs: usize,
    /// Runs whose timings make up the sample set.
    pub benchmark_runs: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_runs: DEFAULT_WARMUP_RUNS,
            benchmark_runs: DEFAULT_BENCHMARK_RUNS,
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    warmup_runs: Option<usize>,
    benchmark_runs: Option<usize>,
}

impl BenchConfig {
    /// Saturates at `usize::MAX`; `validate` rejects counts that would overflow.
    pub fn total_runs(&self) -> usize {
        self.warmup_runs.saturating_add(self.benchmark_runs)
    }

    /// Rejects configurations that would leave the sample set empty or whose
    /// total launch count does not fit in a `usize`.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.benchmark_runs == 0 {
            return Err(BenchError::InvalidRunCount);
        }
        if self.warmup_runs.checked_add(self.benchmark_runs).is_none() {
            return Err(BenchError::RunCountOverflow {
                warmup_runs: self.warmup_runs,
                benchmark_runs: self.benchmark_runs,
            });
        }
        Ok(())
    }

    /// Applies command-line overrides on top of `self`.
    pub fn with_overrides(self, warmup_runs: Option<usize>, benchmark_runs: Option<usize>) -> Self {
        Self {
            warmup_runs: warmup_runs.unwrap_or(self.warmup_runs),
            benchmark_runs: benchmark_runs.unwrap_or(self.benchmark_runs),
        }
    }

    /// Parses TOML config text, filling missing keys from the defaults.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, BenchError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| BenchError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.message().to_string(),
        })?;
        Ok(Self::default().with_overrides(file.warmup_runs, file.benchmark_runs))
    }

    /// Loads config from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Loads `<config_dir>/clibench/config.toml` if it exists, else the defaults.
    pub fn load_default() -> Result<Self, BenchError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clibench").join("config.toml"))
}
