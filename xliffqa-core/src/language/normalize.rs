//! NFKC normalization for comparison
//!
//! Never feed NFKC output to word segmentation: Thai SARA AM (U+0E33)
//! decomposes under compatibility mapping and splits segmenter tokens.

use unicode_normalization::UnicodeNormalization;

pub fn nfkc(text: &str) -> String {
    text.nfkc().collect()
}

/// NFKC plus surrounding whitespace removal
pub fn normalize_for_comparison(text: &str) -> String {
    nfkc(text.trim()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_letters_fold() {
        assert_eq!(nfkc("ＡＢＣ１２３"), "ABC123");
    }

    #[test]
    fn test_thai_sara_am_decomposes() {
        // "น้ำ" changes under NFKC, which is why segmentation avoids it
        assert_ne!(nfkc("น้ำ"), "น้ำ");
    }

    #[test]
    fn test_normalize_for_comparison_trims() {
        assert_eq!(normalize_for_comparison("  Hello\u{3000}"), "Hello");
    }
}
