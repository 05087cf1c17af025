//! Redaction strategy trait and supporting types.
//!
//! A strategy rewrites text given an ordered list of entity strings.
//! Implementations must be deterministic for a fixed list and order.

use crate::domain::CensorCounts;

/// Result of censoring one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensorOutcome {
    /// Text with every censored span replaced
    pub text: String,

    /// Per-category counts for the report
    pub counts: CensorCounts,

    /// Entity strings actually applied, after filtering
    pub applied: Vec<String>,
}

/// Strategy for hiding entity strings in text.
pub trait RedactionStrategy: Send + Sync {
    /// Returns `text` with the entities hidden.
    ///
    /// Entities are applied in list order against the progressively
    /// rewritten text, so the result depends on that order.
    fn redact(&self, text: &str, entities: &[String]) -> String;

    /// Entity strings this strategy would apply, in order.
    fn effective_entities(&self, entities: &[String]) -> Vec<String>;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;
}

