//! False-positive suppression for detected entities.
//!
//! The remote service often labels bare years and short numeric codes as
//! DATE. Any span consisting of exactly four ASCII digits is never censored.

use once_cell::sync::Lazy;
use regex::Regex;

fn four_digits() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Valid four-digit regex"));
    &PATTERN
}

/// Returns true if `text` is exactly four ASCII digits.
pub fn is_four_digit_number(text: &str) -> bool {
    four_digits().is_match(text)
}

/// Drops every entry that is exactly four ASCII digits, keeping order.
pub fn filter_out_4_digit_numbers<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    strings
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !is_four_digit_number(s))
        .map(str::to_string)
        .collect()
}
