//! Mapping a command token to something runnable.

use crate::builtin::Builtin;
use crate::env::Environment;
use std::path::PathBuf;

/// Outcome of command resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The token names a builtin; no process will be spawned.
    Builtin(Builtin),
    /// A path to hand to the launcher, either given explicitly or found in
    /// a `PATH` directory.
    ExternalPath(PathBuf),
    /// Neither a builtin nor anywhere in `PATH`.
    NotFound,
}

/// Resolve a command token.
///
/// Builtin names win over everything. A token containing `/` is passed
/// through untouched with no existence check; whether it is actually
/// runnable is discovered at launch time. A bare name is searched for in
/// the `PATH` directories.
pub fn resolve(env: &Environment, token: &str) -> Resolved {
    if let Some(builtin) = Builtin::from_name(token) {
        return Resolved::Builtin(builtin);
    }
    if token.contains('/') {
        return Resolved::ExternalPath(PathBuf::from(token));
    }
    match env.lookup("PATH").and_then(|path| search_path(path, token)) {
        Some(found) => Resolved::ExternalPath(found),
        None => Resolved::NotFound,
    }
}

/// Search the colon-separated `path` directories in order for `command`,
/// returning the first candidate that exists on disk.
///
/// The check is a stat-style existence test, not an executability test;
/// first match wins and repeated directories are not deduplicated. An empty
/// segment (consecutive colons) is treated as the current directory, so the
/// candidate it produces is the bare relative `command`.
fn search_path(path: &str, command: &str) -> Option<PathBuf> {
    std::env::split_paths(path)
        .map(|dir| dir.join(command))
        .find(|candidate| candidate.exists())
}
