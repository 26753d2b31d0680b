//! Read-only snapshot of the process environment.

use std::env as stdenv;

/// Ordered, read-only view of the environment taken once at startup.
///
/// Entries are kept as raw `NAME=VALUE` strings in the order the process
/// environment yields them, so the `env` builtin can reproduce them
/// verbatim. Nothing in the shell mutates the snapshot; children inherit
/// the real process environment directly.
#[derive(Debug, Clone)]
pub struct Environment {
    entries: Vec<String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        let entries = stdenv::vars().map(|(k, v)| format!("{k}={v}")).collect();
        Self { entries }
    }

    /// Build a snapshot from explicit `NAME=VALUE` entries.
    ///
    /// Intended for tests that need a synthetic environment.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Look up a variable by exact name.
    ///
    /// Scans the snapshot for an entry whose part before the first `=`
    /// equals `name` and returns the part after it. Entries without a `=`
    /// are malformed and skipped, never matched.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| {
            let (k, v) = entry.split_once('=')?;
            (k == name).then_some(v)
        })
    }

    /// Iterate raw `NAME=VALUE` entries in snapshot order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
