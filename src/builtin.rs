//! Commands executed inside the shell's own process.

use crate::ExecutionStatus;
use crate::env::Environment;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// The closed set of builtin commands.
///
/// Resolution matches on the exact command name; dispatch never forks, so a
/// builtin's side effects (writes, shell termination) happen immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Env,
}

impl Builtin {
    /// Match a command token against the builtin names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Self::Exit),
            "env" => Some(Self::Env),
            _ => None,
        }
    }

    /// Canonical name of the builtin.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Env => "env",
        }
    }

    /// Execute the builtin with the arguments that followed its name.
    ///
    /// `last_status` is the status of the most recently executed command,
    /// which `exit` uses as its default code.
    pub fn dispatch(
        self,
        args: &[String],
        env: &Environment,
        last_status: i32,
        stdout: &mut dyn Write,
    ) -> Result<ExecutionStatus> {
        match self {
            Self::Exit => dispatch_exit(args, last_status, stdout),
            Self::Env => dispatch_env(env, stdout),
        }
    }
}

/// Terminate the shell.
#[derive(FromArgs)]
struct Exit {
    #[argh(positional)]
    /// exit code to terminate with; defaults to the status of the last
    /// executed command.
    code: Option<i32>,
}

fn dispatch_exit(
    args: &[String],
    last_status: i32,
    stdout: &mut dyn Write,
) -> Result<ExecutionStatus> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match Exit::from_args(&["exit"], &args) {
        Ok(exit) => Ok(ExecutionStatus::Exit(exit.code.unwrap_or(last_status))),
        // A malformed argument (or --help) prints the argh output and keeps
        // the shell running rather than terminating with a garbage code.
        Err(EarlyExit { output, status }) => {
            stdout.write_all(output.as_bytes())?;
            Ok(ExecutionStatus::Completed(if status.is_err() { 1 } else { 0 }))
        }
    }
}

/// Print every environment entry, one `NAME=VALUE` per line, in snapshot
/// order. Arguments are ignored; the command always succeeds.
fn dispatch_env(env: &Environment, stdout: &mut dyn Write) -> Result<ExecutionStatus> {
    for entry in env.entries() {
        writeln!(stdout, "{entry}")?;
    }
    Ok(ExecutionStatus::Completed(0))
}
