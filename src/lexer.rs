//! Splitting an input line into an argument vector.

/// Characters that separate tokens.
///
/// Besides the usual blanks this includes the bell character, which some
/// terminals can smuggle into pasted input.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{7}'];

/// Split a line into whitespace-delimited tokens.
///
/// Runs of delimiters count as a single separator, so the result never
/// contains empty strings; a blank or delimiter-only line yields an empty
/// vector, which callers treat as "no command given". Quotes, backslashes
/// and every other character are ordinary token characters.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c| DELIMITERS.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
