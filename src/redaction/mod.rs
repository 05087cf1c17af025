//! Redaction strategies and the censoring service.
//!
//! [`RedactionService`] couples entity extraction with a redaction
//! strategy, turning raw text into censored text plus report counts.

pub mod block;
pub mod strategy;

pub use crate::domain::filter_out_4_digit_numbers;
pub use block::{replace_with_blocks, BlockRedactionStrategy, FULL_BLOCK};
pub use strategy::{CensorOutcome, RedactionStrategy};

use crate::error::CensorResult;
use crate::extraction::{EntityAnalyzer, EntityExtractor, EntityRecognizer};

/// Censoring service coordinating extraction and redaction.
pub struct RedactionService {
    extractor: EntityExtractor,
    strategy: Box<dyn RedactionStrategy>,
}

impl RedactionService {
    /// Creates a new service with the specified extractor and strategy.
    pub fn new(extractor: EntityExtractor, strategy: Box<dyn RedactionStrategy>) -> Self {
        Self {
            extractor,
            strategy,
        }
    }

    /// Creates a service that blocks out entities with full-block glyphs.
    pub fn with_block_strategy(
        recognizer: Box<dyn EntityRecognizer>,
        analyzer: Box<dyn EntityAnalyzer>,
    ) -> Self {
        Self::new(
            EntityExtractor::new(recognizer, analyzer),
            Box::new(BlockRedactionStrategy::new()),
        )
    }

    /// Censors one document's text.
    pub fn censor_text(&self, text: &str) -> CensorResult<CensorOutcome> {
        let extraction = self.extractor.extract(text)?;
        let applied = self.strategy.effective_entities(&extraction.entity_texts);
        tracing::debug!(
            strategy = self.strategy.name(),
            detected = extraction.entity_texts.len(),
            applied = applied.len(),
            "redacting entities"
        );

        Ok(CensorOutcome {
            text: self.strategy.redact(text, &extraction.entity_texts),
            counts: extraction.counts,
            applied,
        })
    }
}
