//! Block-character redaction.
//!
//! Every literal occurrence of an entity string is overwritten with a run
//! of block glyphs of the same character count, so the layout and
//! character length of the text are preserved.

use super::strategy::RedactionStrategy;
use crate::domain::filter_out_4_digit_numbers;

/// U+2588 FULL BLOCK
pub const FULL_BLOCK: char = '\u{2588}';

/// Sequential literal-substring redaction with block glyphs.
///
/// Matching is exact and case-sensitive with no word boundaries: a common
/// word equal to a detected name is blocked too. Entities are applied in
/// order, and a later entity is matched against already-blocked text, so
/// a substring of an earlier, longer entity is only found where it still
/// appears on its own.
#[derive(Debug, Clone)]
pub struct BlockRedactionStrategy {
    glyph: char,
}

impl Default for BlockRedactionStrategy {
    fn default() -> Self {
        Self { glyph: FULL_BLOCK }
    }
}

impl BlockRedactionStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different glyph, e.g. `X` for terminals without block glyphs.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }
}

impl RedactionStrategy for BlockRedactionStrategy {
    fn redact(&self, text: &str, entities: &[String]) -> String {
        let mut text = text.to_string();
        for entity in self.effective_entities(entities) {
            let blocks: String = std::iter::repeat(self.glyph)
                .take(entity.chars().count())
                .collect();
            text = text.replace(&entity, &blocks);
        }
        text
    }

    fn effective_entities(&self, entities: &[String]) -> Vec<String> {
        filter_out_4_digit_numbers(entities)
            .into_iter()
            .filter(|e| !e.is_empty())
            .collect()
    }

    fn name(&self) -> &str {
        "block"
    }
}

/// Redacts `entities` from `text` with [`FULL_BLOCK`] glyphs.
pub fn replace_with_blocks<S: AsRef<str>>(text: &str, entities: &[S]) -> String {
    let entities: Vec<String> = entities.iter().map(|e| e.as_ref().to_string()).collect();
    BlockRedactionStrategy::new().redact(text, &entities)
}
