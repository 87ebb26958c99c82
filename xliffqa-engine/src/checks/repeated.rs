//! Adjacent duplicate words in target

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use unicode_segmentation::UnicodeSegmentation;
use xliffqa_core::SegmentRecord;

pub fn check_repeated_words(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let target = segment.segment.target_text.as_str();
    let words: Vec<(usize, &str)> = target.unicode_word_indices().collect();

    words
        .windows(2)
        .filter_map(|pair| {
            let (prev_start, prev) = pair[0];
            let (start, word) = pair[1];
            let prev_end = prev_start + prev.len();
            let gap = &target[prev_end..start];
            let repeated = !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && prev.to_lowercase() == word.to_lowercase();
            repeated.then(|| {
                RuleCheckResult::new(
                    segment,
                    RuleCategory::RepeatedWord,
                    Severity::Minor,
                    format!("Repeated word \"{word}\" in target"),
                )
                .with_suggested_fix(format!("{}{}", &target[..prev_end], &target[start + word.len()..]))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::en_de;

    fn ctx() -> SegmentCheckContext {
        SegmentCheckContext::new("en", "de")
    }

    #[test]
    fn test_case_insensitive_duplicate() {
        let findings = check_repeated_words(&en_de("x", "Das das ist gut"), &ctx());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, RuleCategory::RepeatedWord);
        assert_eq!(findings[0].suggested_fix.as_deref(), Some("Das ist gut"));
    }

    #[test]
    fn test_numbers_repeat_too() {
        assert_eq!(check_repeated_words(&en_de("x", "Seite 10 10"), &ctx()).len(), 1);
    }

    #[test]
    fn test_punctuation_between_words_is_not_repetition() {
        assert!(check_repeated_words(&en_de("x", "Nein, nein"), &ctx()).is_empty());
        assert!(check_repeated_words(&en_de("x", "ein kleines Haus"), &ctx()).is_empty());
    }
}
