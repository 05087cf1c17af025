//! Censor count reporting.

use crate::domain::CensorCounts;
use std::io::{self, Write};

/// Stream the count report is written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsDestination {
    Stdout,
    #[default]
    Stderr,
}

impl StatsDestination {
    /// Opens the chosen standard stream.
    pub fn writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Writes the four-line count report.
pub fn write_stats<W: Write + ?Sized>(out: &mut W, counts: &CensorCounts) -> io::Result<()> {
    writeln!(out, "Number of name censored - {}", counts.names)?;
    writeln!(out, "Number of address censored - {}", counts.addresses)?;
    writeln!(out, "Number of date censored - {}", counts.dates)?;
    writeln!(out, "Number of phone no. censored - {}", counts.phones)?;
    out.flush()
}
