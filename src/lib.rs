//! A tiny command-line shell.
//!
//! This crate provides the building blocks of a minimal shell: a whitespace
//! tokenizer, a read-only environment snapshot, a command resolver that
//! distinguishes builtins from external programs found via `PATH`, and a
//! process launcher that spawns a child, waits for it and reports how it
//! terminated. It is intentionally small and easy to read, suitable for
//! experiments with process management and command resolution.
//!
//! The main entry point is [`Interpreter`], which executes one argument
//! vector at a time and tells the surrounding read loop whether to keep
//! going or terminate. The public modules expose the individual stages for
//! reuse and testing.

pub mod builtin;
pub mod env;
pub mod launcher;
pub mod lexer;
pub mod resolver;

mod interpreter;

pub use interpreter::{ExecutionStatus, Interpreter};
