//! Language normalization tables and locale helpers
//!
//! All tables are immutable and allocation-free during lookup. Normalization
//! here serves comparison only; callers keep the original text for display.

pub mod cjk;
pub mod normalize;
pub mod thai;

pub use cjk::{is_punctuation_equivalent, to_halfwidth_punctuation};
pub use normalize::{nfkc, normalize_for_comparison};
pub use thai::{
    arabic_to_thai_digit, is_buddhist_year_equivalent, normalize_thai_digits,
    strip_thai_particles, thai_to_arabic_digit,
};

/// Languages written without spaces between words
const NO_SPACE_LANGUAGES: &[&str] = &["th", "zh", "ja", "ko"];

/// Lowercased primary subtag of a BCP-47 tag (`th-TH` -> `th`)
pub fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Whether words in `locale` are delimited by whitespace
pub fn uses_word_spacing(locale: &str) -> bool {
    !NO_SPACE_LANGUAGES.contains(&primary_language(locale).as_str())
}

pub fn is_thai(locale: &str) -> bool {
    primary_language(locale) == "th"
}

pub fn is_cjk(locale: &str) -> bool {
    matches!(primary_language(locale).as_str(), "zh" | "ja" | "ko")
}
