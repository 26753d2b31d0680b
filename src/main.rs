use anyhow::Result;
use minish::{ExecutionStatus, Interpreter, env::Environment};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal};

fn main() -> Result<()> {
    let mut shell = Interpreter::new(Environment::capture());
    if io::stdin().is_terminal() {
        run_interactive(&mut shell)
    } else {
        run_stream(&mut shell)
    }
}

/// Prompt-read-execute loop for a terminal-attached shell.
///
/// Ctrl-D ends the session with immediate success; Ctrl-C abandons the
/// current line and prompts again.
fn run_interactive(shell: &mut Interpreter) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("$ ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                if let ExecutionStatus::Exit(code) = run_line(shell, &line) {
                    std::process::exit(code);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => std::process::exit(0),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Silent loop over a non-terminal stdin; end-of-input terminates the shell
/// with the status of the last executed command.
fn run_stream(shell: &mut Interpreter) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if let ExecutionStatus::Exit(code) = run_line(shell, &line) {
            std::process::exit(code);
        }
    }
    std::process::exit(shell.last_status());
}

fn run_line(shell: &mut Interpreter, line: &str) -> ExecutionStatus {
    shell.execute_line(line, &mut io::stdout(), &mut io::stderr())
}
