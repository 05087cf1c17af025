//! Entity extraction from raw text.
//!
//! Two collaborators feed the extractor: a local recognizer that finds
//! person names, and a remote entity-analysis service that finds dates,
//! addresses and phone numbers. Both sit behind traits so the pipeline can
//! be driven by fakes in tests.

pub mod google;
pub mod heuristic;
pub mod service_account;
#[cfg(test)]
mod test_server;

pub use google::GoogleLanguageClient;
pub use heuristic::HeuristicPersonRecognizer;
pub use service_account::ServiceAccountTokenSource;

use crate::domain::{CensorCounts, EntityCategory, EntityMatch};
use crate::error::CensorResult;
use serde::Serialize;

/// A labelled span produced by a local recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedSpan {
    pub text: String,
    pub label: String,
}

impl RecognizedSpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Text encoding the remote service should use for offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EncodingType {
    #[default]
    Utf8,
}

/// Local named-entity recognition model.
pub trait EntityRecognizer: Send + Sync {
    /// Labels spans of `text`. Only `PERSON` labels are consulted.
    fn recognize(&self, text: &str) -> CensorResult<Vec<RecognizedSpan>>;

    /// Returns a human-readable name for this model.
    fn name(&self) -> &str;
}

/// Remote entity-analysis service.
pub trait EntityAnalyzer: Send + Sync {
    /// Returns `(name, type)` entities in service order.
    fn analyze_entities(
        &self,
        text: &str,
        encoding: EncodingType,
    ) -> CensorResult<Vec<EntityMatch>>;

    /// Returns a human-readable name for this service.
    fn name(&self) -> &str;
}

/// Entities to censor for one document, plus the report counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Remote DATE/ADDRESS/PHONE_NUMBER names, then local PERSON names.
    pub entity_texts: Vec<String>,
    pub counts: CensorCounts,
}

/// Combines the local recognizer and the remote analyzer.
pub struct EntityExtractor {
    recognizer: Box<dyn EntityRecognizer>,
    analyzer: Box<dyn EntityAnalyzer>,
}

impl EntityExtractor {
    pub fn new(recognizer: Box<dyn EntityRecognizer>, analyzer: Box<dyn EntityAnalyzer>) -> Self {
        Self {
            recognizer,
            analyzer,
        }
    }

    /// Finds every entity to censor in `text`.
    ///
    /// Person names come only from the local recognizer; PERSON entities
    /// returned by the remote service are ignored. Errors from either side
    /// propagate unchanged.
    pub fn extract(&self, text: &str) -> CensorResult<Extraction> {
        let names: Vec<String> = self
            .recognizer
            .recognize(text)?
            .into_iter()
            .filter(|span| EntityCategory::from_label(&span.label) == EntityCategory::Person)
            .map(|span| span.text)
            .collect();
        tracing::debug!(
            recognizer = self.recognizer.name(),
            names = names.len(),
            "local recognition finished"
        );

        let entities = self.analyzer.analyze_entities(text, EncodingType::Utf8)?;
        tracing::debug!(
            analyzer = self.analyzer.name(),
            entities = entities.len(),
            "remote analysis finished"
        );

        let counts = CensorCounts::tally(names.len(), &entities);
        let mut entity_texts: Vec<String> = entities
            .into_iter()
            .filter(|entity| entity.category.is_remote_censored())
            .map(|entity| entity.text)
            .collect();
        entity_texts.extend(names);

        Ok(Extraction {
            entity_texts,
            counts,
        })
    }
}
