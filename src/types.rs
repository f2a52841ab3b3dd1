use std::fmt;
use std::time::Duration;

/// The program under test and the arguments forwarded to it on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a raw command line into program and arguments.
    /// Returns `None` for an empty command line.
    pub fn from_command_line(mut command: Vec<String>) -> Option<Self> {
        if command.is_empty() {
            return None;
        }
        let program = command.remove(0);
        Some(Self::new(program, command))
    }
}

/// Program, one space, then the space-joined args. An empty argument list
/// still leaves the separating space.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// One timed execution of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub elapsed: Duration,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl Launch {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Everything the run loop collected over a completed session.
#[derive(Debug, Clone, Default)]
pub struct RunRecord {
    /// Elapsed seconds of each measured (post warm-up) run, in run order.
    pub samples: Vec<f64>,
    /// Measured runs that did not exit with code 0.
    pub failed_runs: usize,
    /// Every launch performed, warm-up included.
    pub total_launches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_args_with_spaces() {
        let inv = Invocation::new("echo", vec!["hello".into(), "world".into()]);
        assert_eq!(inv.to_string(), "echo hello world");
    }

    #[test]
    fn display_without_args_keeps_separator() {
        let inv = Invocation::new("true", vec![]);
        assert_eq!(inv.to_string(), "true ");
    }

    #[test]
    fn from_command_line_splits_program() {
        let inv = Invocation::from_command_line(vec!["sh".into(), "-c".into(), "exit 0".into()])
            .unwrap();
        assert_eq!(inv.program, "sh");
        assert_eq!(inv.args, vec!["-c".to_string(), "exit 0".to_string()]);
    }

    #[test]
    fn from_command_line_empty_is_none() {
        assert!(Invocation::from_command_line(vec![]).is_none());
    }

    #[test]
    fn launch_success_requires_zero_exit() {
        let ok = Launch {
            elapsed: Duration::from_millis(1),
            exit_code: Some(0),
        };
        let failed = Launch {
            exit_code: Some(2),
            ..ok
        };
        let signaled = Launch {
            exit_code: None,
            ..ok
        };
        assert!(ok.succeeded());
        assert!(!failed.succeeded());
        assert!(!signaled.succeeded());
    }
}
