//! Heuristic person-name recognizer.
//!
//! The bundled local model. It exploits structural signals only:
//! runs of capitalized words on one line, honorifics such as `Dr.`, and a
//! small list of capitalized words that are not names (sentence starters,
//! months, weekdays). Runs ending in a street or organization suffix are
//! rejected.

use super::{EntityRecognizer, RecognizedSpan};
use crate::error::CensorResult;
use once_cell::sync::Lazy;
use regex::Regex;

const PERSON_LABEL: &str = "PERSON";

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "mx", "miss", "dr", "prof", "sir", "madam"];

// Capitalized words that start sentences or name calendar units
const NOT_NAMES: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "it", "he", "she", "we", "they", "i",
    "you", "my", "our", "your", "his", "her", "their", "in", "on", "at", "to", "for", "from",
    "by", "with", "and", "but", "or", "so", "if", "because", "contact", "call", "email", "visit",
    "please", "see", "note", "dear", "hi", "hello", "thanks", "regards", "sincerely", "today",
    "yesterday", "tomorrow", "now", "then", "what", "where", "when", "who", "why", "how", "is",
    "are", "was", "were", "yes", "no", "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december", "monday", "tuesday",
    "wednesday", "thursday", "friday", "saturday", "sunday",
];

// A run ending in one of these is a place or an organization
const NON_PERSON_SUFFIX: &[&str] = &[
    "street", "st", "avenue", "ave", "road", "rd", "boulevard", "blvd", "lane", "ln", "drive",
    "court", "ct", "place", "way", "highway", "parkway", "square", "city", "county", "state",
    "park", "inc", "corp", "ltd", "llc", "co", "company", "corporation", "university",
    "college", "bank", "group", "agency", "institute", "foundation", "hospital", "school",
];

fn word_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\p{L}[\p{L}\p{M}'’-]*\.?").expect("Valid word regex")
    });
    &PATTERN
}

/// Capitalization-based PERSON recognizer.
///
/// Construct once and share across documents; it holds no per-document state.
#[derive(Debug, Clone)]
pub struct HeuristicPersonRecognizer {
    min_words: usize,
}

impl Default for HeuristicPersonRecognizer {
    fn default() -> Self {
        Self { min_words: 2 }
    }
}

impl HeuristicPersonRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of capitalized words for an untitled name.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words.max(1);
        self
    }

    /// Finds the byte ranges of person names in `text`.
    pub fn find_names(&self, text: &str) -> Vec<(usize, usize)> {
        let mut names = Vec::new();
        let mut run = NameRun::default();
        let mut prev: Option<Token> = None;

        for m in word_pattern().find_iter(text) {
            let token = Token::classify(m.as_str(), m.start());

            let connected = prev.as_ref().is_some_and(|p| {
                (!p.closes_sentence || p.kind == TokenKind::Honorific)
                    && !p.possessive
                    && is_inline_gap(&text[p.end..m.start()])
            });
            if !connected {
                run.flush(text, self.min_words, &mut names);
            }

            match token.kind {
                TokenKind::Honorific => {
                    run.flush(text, self.min_words, &mut names);
                    run.titled = true;
                }
                TokenKind::Name => run.words.push((token.start, token.name_end)),
                TokenKind::Other => run.flush(text, self.min_words, &mut names),
            }
            prev = Some(token);
        }
        run.flush(text, self.min_words, &mut names);

        names
    }
}

impl EntityRecognizer for HeuristicPersonRecognizer {
    fn recognize(&self, text: &str) -> CensorResult<Vec<RecognizedSpan>> {
        Ok(self
            .find_names(text)
            .into_iter()
            .map(|(start, end)| RecognizedSpan::new(&text[start..end], PERSON_LABEL))
            .collect())
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Honorific,
    Name,
    Other,
}

#[derive(Debug)]
struct Token {
    kind: TokenKind,
    start: usize,
    /// End of the name part, without trailing period or possessive
    name_end: usize,
    end: usize,
    closes_sentence: bool,
    possessive: bool,
}

impl Token {
    fn classify(word: &str, start: usize) -> Self {
        let closes_sentence = word.ends_with('.');
        let bare = word.trim_end_matches('.');
        let stem = bare
            .strip_suffix("'s")
            .or_else(|| bare.strip_suffix("’s"))
            .unwrap_or(bare);
        let lower = stem.to_lowercase();

        let kind = if closes_sentence && HONORIFICS.contains(&lower.as_str()) {
            TokenKind::Honorific
        } else if is_capitalized(stem) && !NOT_NAMES.contains(&lower.as_str()) {
            TokenKind::Name
        } else {
            TokenKind::Other
        };

        Self {
            kind,
            start,
            name_end: start + stem.len(),
            end: start + word.len(),
            closes_sentence,
            possessive: stem.len() != bare.len(),
        }
    }
}

#[derive(Debug, Default)]
struct NameRun {
    words: Vec<(usize, usize)>,
    titled: bool,
}

impl NameRun {
    fn flush(&mut self, text: &str, min_words: usize, out: &mut Vec<(usize, usize)>) {
        let enough = self.words.len() >= min_words || (self.titled && !self.words.is_empty());
        if enough {
            if let (Some(first), Some(last)) = (self.words.first(), self.words.last()) {
                let suffix = text[last.0..last.1].to_lowercase();
                if !NON_PERSON_SUFFIX.contains(&suffix.as_str()) {
                    out.push((first.0, last.1));
                }
            }
        }
        self.words.clear();
        self.titled = false;
    }
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.filter(|c| c.is_alphabetic()).collect();
    // Single letters and ALL-CAPS acronyms are not names
    first.is_uppercase() && !rest.is_empty() && rest.iter().any(|c| c.is_lowercase())
}

fn is_inline_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t')
}
