//! Custom assertions for censoring tests.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use censoror::redaction::FULL_BLOCK;

/// Builds a run of `n` full-block glyphs.
pub fn blocks(n: usize) -> String {
    FULL_BLOCK.to_string().repeat(n)
}

/// Asserts that `pattern` no longer appears in censored text.
///
/// # Panics
/// Panics if the pattern is still found.
pub fn assert_censored(text: &str, pattern: &str) {
    assert!(
        !text.contains(pattern),
        "Pattern '{}' should be censored but was found in:\n{}",
        pattern,
        text
    );
}

/// Asserts that `pattern` survived censoring.
///
/// # Panics
/// Panics if the pattern is missing.
pub fn assert_preserved(text: &str, pattern: &str) {
    assert!(
        text.contains(pattern),
        "Pattern '{}' should be preserved but was not found in:\n{}",
        pattern,
        text
    );
}

/// Asserts that censoring kept the character length of the text.
pub fn assert_same_char_len(original: &str, censored: &str) {
    assert_eq!(
        original.chars().count(),
        censored.chars().count(),
        "Censored text changed length:\noriginal: {}\ncensored: {}",
        original,
        censored
    );
}

/// Lengths of maximal block runs in `text`, left to right.
pub fn block_runs(text: &str) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for c in text.chars() {
        if c == FULL_BLOCK {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}
