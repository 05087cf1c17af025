//! Domain models for entity detection and censoring.
//!
//! Entities are transient: a surface string plus the category it was
//! detected as. No offsets are tracked, matching is done by literal text
//! search during redaction.

pub mod filter;

pub use filter::{filter_out_4_digit_numbers, is_four_digit_number};

use std::fmt;

/// Category an entity was labelled with by a recognizer or the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Person,
    Date,
    Address,
    PhoneNumber,
    /// Any label this tool does not censor (ORGANIZATION, LOCATION, ...)
    Other(String),
}

impl EntityCategory {
    /// Parses a wire label such as `PERSON` or `PHONE_NUMBER`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" => Self::Person,
            "DATE" => Self::Date,
            "ADDRESS" => Self::Address,
            "PHONE_NUMBER" => Self::PhoneNumber,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire label for this category.
    pub fn label(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Date => "DATE",
            Self::Address => "ADDRESS",
            Self::PhoneNumber => "PHONE_NUMBER",
            Self::Other(label) => label,
        }
    }

    /// Categories taken from the remote service for censoring.
    pub fn is_remote_censored(&self) -> bool {
        matches!(self, Self::Date | Self::Address | Self::PhoneNumber)
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A literal text span believed to belong to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    pub text: String,
    pub category: EntityCategory,
}

impl EntityMatch {
    pub fn new(text: impl Into<String>, category: EntityCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Per-document tally of censored entities, used only for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CensorCounts {
    pub names: usize,
    pub addresses: usize,
    pub dates: usize,
    pub phones: usize,
}

impl CensorCounts {
    /// Tallies remote-service entities by category.
    ///
    /// Person entities are not counted here; the name count always comes
    /// from the local recognizer.
    pub fn tally<'a, I>(names: usize, entities: I) -> Self
    where
        I: IntoIterator<Item = &'a EntityMatch>,
    {
        let mut counts = Self {
            names,
            ..Self::default()
        };
        for entity in entities {
            match entity.category {
                EntityCategory::Date => counts.dates += 1,
                EntityCategory::Address => counts.addresses += 1,
                EntityCategory::PhoneNumber => counts.phones += 1,
                _ => {}
            }
        }
        counts
    }
}
