//! Per-file censoring driver.
//!
//! Each selected file is processed independently: read, censor, report,
//! write. A failure is reported with the file name and the batch moves on
//! to the next file. An output file already written is never rolled back.

use crate::domain::CensorCounts;
use crate::error::{CensorError, CensorResult};
use crate::redaction::RedactionService;
use crate::report::write_stats;
use crate::selection::output_path_for;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file censored successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensoredFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub counts: CensorCounts,
}

/// A file that failed, with the rendered error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: String,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: Vec<CensoredFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the censoring service over a list of files.
pub struct BatchProcessor {
    service: RedactionService,
}

impl BatchProcessor {
    pub fn new(service: RedactionService) -> Self {
        Self { service }
    }

    /// Processes `files` in order, writing outputs under `output_dir`.
    ///
    /// Progress and per-file errors go to `progress`; count reports go to
    /// `stats`. Only a failure to write to `progress` aborts the batch.
    pub fn run(
        &self,
        files: &[PathBuf],
        output_dir: &Path,
        progress: &mut dyn Write,
        stats: &mut dyn Write,
    ) -> io::Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for input in files {
            writeln!(progress, "\nProcessing file: {}", input.display())?;

            match self.process_file(input, output_dir, stats) {
                Ok(censored) => {
                    writeln!(progress, "Output file saved to: {}", censored.output.display())?;
                    tracing::info!(
                        input = %input.display(),
                        output = %censored.output.display(),
                        "file censored"
                    );
                    summary.succeeded.push(censored);
                }
                Err(err) => {
                    writeln!(progress, "Error processing file {}: {}", input.display(), err)?;
                    tracing::warn!(input = %input.display(), error = %err, "file failed");
                    summary.failed.push(FailedFile {
                        input: input.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Censors one file. Nothing is written unless every earlier step succeeds.
    pub fn process_file(
        &self,
        input: &Path,
        output_dir: &Path,
        stats: &mut dyn Write,
    ) -> CensorResult<CensoredFile> {
        let bytes = fs::read(input).map_err(|e| CensorError::io(input, e))?;
        let text = String::from_utf8(bytes).map_err(|_| CensorError::Decode {
            path: input.to_path_buf(),
        })?;

        let outcome = self.service.censor_text(&text)?;
        write_stats(stats, &outcome.counts).map_err(|e| CensorError::io("<stats>", e))?;

        let output = output_path_for(input, output_dir);
        fs::create_dir_all(output_dir).map_err(|e| CensorError::io(output_dir, e))?;
        fs::write(&output, outcome.text).map_err(|e| CensorError::io(&output, e))?;

        Ok(CensoredFile {
            input: input.to_path_buf(),
            output,
            counts: outcome.counts,
        })
    }
}
