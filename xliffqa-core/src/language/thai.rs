//! Thai numerals, politeness particles and Buddhist Era years

use crate::constants::BUDDHIST_YEAR_OFFSET;
use std::borrow::Cow;

/// Thai digits ๐-๙ paired with their Arabic equivalents
const THAI_DIGITS: [(char, char); 10] = [
    ('๐', '0'),
    ('๑', '1'),
    ('๒', '2'),
    ('๓', '3'),
    ('๔', '4'),
    ('๕', '5'),
    ('๖', '6'),
    ('๗', '7'),
    ('๘', '8'),
    ('๙', '9'),
];

/// Sentence-final particles that only carry tone or politeness
const THAI_PARTICLES: &[&str] = &[
    "ครับ", "คับ", "ค่ะ", "คะ", "ค่า", "นะ", "น่ะ", "จ้ะ", "จ้า", "จ๊ะ", "ฮะ",
];

pub fn thai_to_arabic_digit(ch: char) -> Option<char> {
    THAI_DIGITS
        .iter()
        .find(|(thai, _)| *thai == ch)
        .map(|(_, arabic)| *arabic)
}

pub fn arabic_to_thai_digit(ch: char) -> Option<char> {
    THAI_DIGITS
        .iter()
        .find(|(_, arabic)| *arabic == ch)
        .map(|(thai, _)| *thai)
}

/// Replace Thai digits with Arabic ones, borrowing when there are none
pub fn normalize_thai_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| thai_to_arabic_digit(ch).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| thai_to_arabic_digit(ch).unwrap_or(ch))
            .collect(),
    )
}

/// Strip trailing particles until none match, trimming after each strip
pub fn strip_thai_particles(text: &str) -> &str {
    let mut current = text.trim();
    'scan: loop {
        for particle in THAI_PARTICLES {
            if let Some(rest) = current.strip_suffix(particle) {
                current = rest.trim();
                continue 'scan;
            }
        }
        return current;
    }
}

/// Two values are calendar-equivalent iff both are integers differing by 543
pub fn is_buddhist_year_equivalent(a: f64, b: f64) -> bool {
    if a.fract() != 0.0 || b.fract() != 0.0 || !a.is_finite() || !b.is_finite() {
        return false;
    }
    let offset = BUDDHIST_YEAR_OFFSET as f64;
    a - b == offset || b - a == offset
}
