//! Ties resolution, builtin dispatch and launching together.

use crate::builtin::Builtin;
use crate::env::Environment;
use crate::launcher::{self, LaunchError};
use crate::lexer;
use crate::resolver::{self, Resolved};
use std::io::Write;
use std::path::Path;

/// Diagnostic prefix, mirroring the `sh`-style `name: lineno: cmd: message`
/// shape. The line number is cosmetic.
const SHELL_NAME: &str = "minish";

/// What the read loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// The line held no command; read the next one. Nothing ran.
    Continue,
    /// A command ran (or failed to start) with this status; keep looping.
    Completed(i32),
    /// Terminate the shell process with this code.
    Exit(i32),
}

/// Executes one argument vector at a time against a fixed environment
/// snapshot.
///
/// The interpreter owns the snapshot taken at startup and a "last status"
/// register that the `exit` builtin defaults to. All per-line allocations
/// (tokens, resolved paths) live only for the duration of one
/// [`execute`](Interpreter::execute) call.
pub struct Interpreter {
    env: Environment,
    last_status: i32,
}

impl Interpreter {
    /// Create an interpreter over the given environment snapshot.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            last_status: 0,
        }
    }

    /// Status of the most recently executed command, 0 before any ran.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Tokenize `line` and execute it.
    pub fn execute_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExecutionStatus {
        let argv = lexer::tokenize(line);
        self.execute(&argv, stdout, stderr)
    }

    /// Execute a single argument vector.
    ///
    /// Builtins run in-process and write to `stdout`; external commands are
    /// resolved and launched, inheriting the real standard streams.
    /// Diagnostics (command not found, launch failures) go to `stderr`.
    pub fn execute(
        &mut self,
        argv: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExecutionStatus {
        let Some(command) = argv.first() else {
            return ExecutionStatus::Continue;
        };

        match resolver::resolve(&self.env, command) {
            Resolved::Builtin(builtin) => self.run_builtin(builtin, &argv[1..], stdout, stderr),
            Resolved::ExternalPath(path) => {
                let status = self.launch(&path, command, &argv[1..], stderr);
                self.last_status = status;
                ExecutionStatus::Completed(status)
            }
            Resolved::NotFound => {
                let _ = writeln!(stderr, "{SHELL_NAME}: 1: {command}: not found");
                self.last_status = 127;
                ExecutionStatus::Completed(127)
            }
        }
    }

    fn run_builtin(
        &mut self,
        builtin: Builtin,
        args: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExecutionStatus {
        match builtin.dispatch(args, &self.env, self.last_status, stdout) {
            Ok(status) => {
                if let ExecutionStatus::Completed(code) = status {
                    self.last_status = code;
                }
                status
            }
            Err(err) => {
                let _ = writeln!(stderr, "{SHELL_NAME}: {}: {err}", builtin.name());
                self.last_status = 1;
                ExecutionStatus::Completed(1)
            }
        }
    }

    fn launch(&self, path: &Path, command: &str, args: &[String], stderr: &mut dyn Write) -> i32 {
        match launcher::run(path, args) {
            Ok(outcome) => outcome.status(),
            Err(LaunchError::NotFound) => {
                let _ = writeln!(stderr, "{SHELL_NAME}: 1: {command}: not found");
                127
            }
            Err(LaunchError::NotExecutable) => {
                let _ = writeln!(stderr, "{SHELL_NAME}: 1: {command}: Permission denied");
                126
            }
            Err(LaunchError::Spawn(err)) => {
                let _ = writeln!(stderr, "{SHELL_NAME}: {command}: {err}");
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn interpreter_with_path(path: &str) -> Interpreter {
        Interpreter::new(Environment::from_entries([format!("PATH={path}")]))
    }

    fn execute(sh: &mut Interpreter, parts: &[&str]) -> (ExecutionStatus, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = sh.execute(&argv(parts), &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_argv_is_a_no_op() {
        let mut sh = interpreter_with_path("/bin");
        let (status, out, err) = execute(&mut sh, &[]);
        assert_eq!(status, ExecutionStatus::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(sh.last_status(), 0);
    }

    #[test]
    fn blank_lines_are_no_ops() {
        let mut sh = interpreter_with_path("/bin");
        for line in ["", "   ", "\t\t", " \r\n"] {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let status = sh.execute_line(line, &mut out, &mut err);
            assert_eq!(status, ExecutionStatus::Continue);
            assert!(out.is_empty());
            assert!(err.is_empty());
        }
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let mut sh = interpreter_with_path("/nonexistent-dir");
        let (status, out, err) = execute(&mut sh, &["doesnotexist123"]);
        assert_eq!(status, ExecutionStatus::Completed(127));
        assert!(out.is_empty());
        assert_eq!(err, "minish: 1: doesnotexist123: not found\n");
        assert_eq!(sh.last_status(), 127);
    }

    #[test]
    fn direct_path_skips_path_search() {
        // No usable PATH, yet the explicit path goes straight to the
        // launcher, which discovers the missing file.
        let mut sh = Interpreter::new(Environment::from_entries(["HOME=/root"]));
        let (status, _, err) = execute(&mut sh, &["./not-a-real-file", "arg1"]);
        assert_eq!(status, ExecutionStatus::Completed(127));
        assert!(err.contains("not found"));
    }

    #[test]
    #[cfg(unix)]
    fn external_command_status_is_surfaced() {
        let mut sh = interpreter_with_path("/bin:/usr/bin");
        let (status, _, err) = execute(&mut sh, &["/bin/sh", "-c", "exit 5"]);
        assert_eq!(status, ExecutionStatus::Completed(5));
        assert!(err.is_empty());
        assert_eq!(sh.last_status(), 5);
    }

    #[test]
    #[cfg(unix)]
    fn resolved_command_runs_from_path() {
        let mut sh = interpreter_with_path("/bin:/usr/bin");
        let (status, _, err) = execute(&mut sh, &["true"]);
        assert_eq!(status, ExecutionStatus::Completed(0));
        assert!(err.is_empty());
    }

    #[test]
    fn env_builtin_writes_snapshot() {
        let mut sh = Interpreter::new(Environment::from_entries(["A=1", "B=2"]));
        let (status, out, err) = execute(&mut sh, &["env"]);
        assert_eq!(status, ExecutionStatus::Completed(0));
        assert_eq!(out, "A=1\nB=2\n");
        assert!(err.is_empty());
    }

    #[test]
    fn exit_defaults_to_last_status() {
        let mut sh = interpreter_with_path("/nonexistent-dir");
        let (status, _, _) = execute(&mut sh, &["nope"]);
        assert_eq!(status, ExecutionStatus::Completed(127));

        let (status, _, _) = execute(&mut sh, &["exit"]);
        assert_eq!(status, ExecutionStatus::Exit(127));
    }

    #[test]
    fn exit_with_explicit_code() {
        let mut sh = interpreter_with_path("/bin");
        let (status, _, _) = execute(&mut sh, &["exit", "42"]);
        assert_eq!(status, ExecutionStatus::Exit(42));
    }

    #[test]
    fn builtin_wins_over_path() {
        // Even with a real `env` binary on PATH, the builtin runs: output
        // reproduces the synthetic snapshot, not the process environment.
        let mut sh = Interpreter::new(Environment::from_entries([
            "PATH=/bin:/usr/bin".to_string(),
            "MARKER=builtin".to_string(),
        ]));
        let (status, out, _) = execute(&mut sh, &["env"]);
        assert_eq!(status, ExecutionStatus::Completed(0));
        assert_eq!(out, "PATH=/bin:/usr/bin\nMARKER=builtin\n");
    }
}
