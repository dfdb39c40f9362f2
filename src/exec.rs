// AWS CLI Gateway - Process Runner
//
// Executes the external binary with an argument vector — no shell
// interpretation, so metacharacters in arguments cannot inject.
// A non-zero exit is a NORMAL result carrying stderr; only a failure
// to launch the process at all is an error. No timeout, no retry,
// no output cap: every invocation is attempted exactly once.

use std::process::Command;
use thiserror::Error;

/// Transport-level failure: the process could not be started
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured outcome of one completed process
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Capability boundary for process execution. The dispatcher only sees
/// this trait, so tests substitute a recorder without spawning anything.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<ExecResult, ExecError>;
}

/// The real runner over std::process::Command
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<ExecResult, ExecError> {
        let (binary, args) = match argv.split_first() {
            Some((b, rest)) => (b.as_str(), rest),
            None => ("", &[][..]),
        };

        log::debug!("exec: {:?}", argv);

        let output = Command::new(binary)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                binary: binary.to_string(),
                source,
            })?;

        Ok(ExecResult {
            // Killed-by-signal leaves no code; report -1 like any failure
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_spawn_error() {
        let runner = ProcessRunner;
        let argv = vec!["definitely-not-a-real-binary-4c1f".to_string()];
        let result = runner.run(&argv);
        assert!(matches!(result, Err(ExecError::Spawn { .. })));
    }

    #[test]
    fn spawn_error_names_the_binary() {
        let runner = ProcessRunner;
        let argv = vec!["definitely-not-a-real-binary-4c1f".to_string()];
        let err = runner.run(&argv).unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-binary-4c1f"));
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let runner = ProcessRunner;
        let argv = vec!["echo".to_string(), "hello".to_string(), "world".to_string()];
        let result = runner.run(&argv).unwrap();
        assert!(result.success());
        assert_eq!(result.stdout.trim(), "hello world");
    }

    #[test]
    fn nonzero_exit_is_a_normal_result() {
        let runner = ProcessRunner;
        let argv = vec!["false".to_string()];
        let result = runner.run(&argv).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, 1);
    }
}
