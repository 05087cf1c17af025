//! Input file selection.
//!
//! Expands glob patterns relative to a root directory into a flat list of
//! paths, preserving pattern order and then match order.

use glob::MatchOptions;
use std::path::{Path, PathBuf};

/// Expands `patterns` against `root`.
///
/// Duplicates produced by overlapping patterns are kept, and every match is
/// returned, directories included. Wildcards do not match a leading `.`, so
/// hidden files are only selected by a pattern that names the dot. A
/// pattern that does not parse matches nothing, and entries that cannot be
/// read while walking are skipped; both are logged. An empty result means
/// nothing matched.
pub fn select_files<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Vec<PathBuf> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let full = root.join(pattern);
        let full = full.to_string_lossy();

        let entries = match glob::glob_with(&full, options) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(pattern, error = %e, "skipping invalid pattern");
                continue;
            }
        };

        let before = files.len();
        for entry in entries {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => {
                    tracing::warn!(
                        pattern,
                        path = %e.path().display(),
                        error = %e.error(),
                        "skipping unreadable entry"
                    );
                }
            }
        }
        tracing::debug!(pattern, matched = files.len() - before, "expanded pattern");
    }

    files
}

/// Output path for a censored copy: `<output_dir>/<file name>.censored`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".censored");
    output_dir.join(name)
}
