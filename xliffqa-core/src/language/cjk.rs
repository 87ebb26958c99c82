//! Fullwidth CJK punctuation equivalence

/// Fullwidth punctuation and its halfwidth counterpart
const FULLWIDTH_PUNCTUATION: [(char, char); 6] = [
    ('。', '.'),
    ('！', '!'),
    ('？', '?'),
    ('，', ','),
    ('：', ':'),
    ('；', ';'),
];

/// Map fullwidth punctuation to halfwidth; other characters pass through
pub fn to_halfwidth_punctuation(ch: char) -> char {
    FULLWIDTH_PUNCTUATION
        .iter()
        .find(|(full, _)| *full == ch)
        .map_or(ch, |(_, half)| *half)
}

/// Whether two punctuation marks are the same up to width
pub fn is_punctuation_equivalent(a: char, b: char) -> bool {
    a == b || to_halfwidth_punctuation(a) == to_halfwidth_punctuation(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_maps_to_halfwidth() {
        assert_eq!(to_halfwidth_punctuation('。'), '.');
        assert_eq!(to_halfwidth_punctuation('？'), '?');
        assert_eq!(to_halfwidth_punctuation('a'), 'a');
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        assert!(is_punctuation_equivalent('。', '.'));
        assert!(is_punctuation_equivalent('.', '。'));
        assert!(is_punctuation_equivalent('！', '！'));
        assert!(!is_punctuation_equivalent('。', '!'));
    }
}
