//! Script-sensitive word counting
//!
//! Space-delimited languages count whitespace-separated tokens. Thai and
//! CJK text runs through dictionary word segmentation in bounded chunks,
//! counting only word-like segments. Chunks are cut where the segmenter
//! breaks regardless of context, so the count does not depend on where a
//! chunk ends.

use crate::language::uses_word_spacing;
use icu_segmenter::WordSegmenter;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Upper bound of one segmentation chunk, in bytes
pub const SEGMENT_CHUNK_BYTES: usize = 4 * 1024;

/// Tag-shaped tokens, `{0}`-style and `%s`-style placeholders
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"</?[A-Za-z][^<>]*>|\{\{[^{}]*\}\}|\{[^{}\s]*\}|%(?:\d+\$)?[-+0#]*\d*(?:\.\d+)?[sdifuxXeEgGc@]",
    )
    .expect("markup pattern is valid")
});

thread_local! {
    static WORD_SEGMENTER: WordSegmenter = WordSegmenter::new_dictionary();
}

/// Count words in `text` for `locale`
pub fn count_words(text: &str, locale: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let stripped = strip_markup(text);
    if uses_word_spacing(locale) {
        stripped.split_whitespace().count()
    } else {
        segment_chunks(&stripped).map(segmented_word_count).sum()
    }
}

/// Replace markup-like substrings with a space
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP.replace_all(text, " ")
}

/// Word-like segments reported by the dictionary segmenter
fn segmented_word_count(text: &str) -> usize {
    WORD_SEGMENTER.with(|segmenter| {
        let mut breaks = segmenter.segment_str(text);
        let mut count = 0;
        while let Some(position) = breaks.next() {
            if position > 0 && breaks.is_word_like() {
                count += 1;
            }
        }
        count
    })
}

/// Segment boundaries of `text`, including 0 and `text.len()`
fn segment_breaks(text: &str) -> Vec<usize> {
    WORD_SEGMENTER.with(|segmenter| segmenter.segment_str(text).collect())
}

/// Fullwidth punctuation that always ends a segmenter run
fn is_run_terminator(ch: char) -> bool {
    matches!(
        ch,
        '。' | '、' | '，' | '！' | '？' | '：' | '；' | '「' | '」' | '『' | '』' | '（' | '）'
    )
}

/// Split `text` into chunks of at most `SEGMENT_CHUNK_BYTES`
pub fn segment_chunks(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = chunk_end(rest, SEGMENT_CHUNK_BYTES);
        let (chunk, tail) = rest.split_at(cut);
        rest = tail;
        Some(chunk)
    })
}

/// Byte length of the next chunk of `text`
///
/// Preference order: after the last whitespace or fullwidth punctuation
/// mark, at the second to last segmenter boundary (leaving the segmenter
/// lookahead for the last word), at the last grapheme boundary, at the last
/// char boundary.
fn chunk_end(text: &str, max_bytes: usize) -> usize {
    if text.len() <= max_bytes {
        return text.len();
    }
    let limit = floor_char_boundary(text, max_bytes);
    let window = &text[..limit];

    if let Some((idx, ch)) = window
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace() || is_run_terminator(*ch))
    {
        return idx + ch.len_utf8();
    }

    let breaks = segment_breaks(window);
    if breaks.len() >= 3 {
        let cut = breaks[breaks.len() - 2];
        if cut > 0 {
            return cut;
        }
    }

    match window.grapheme_indices(true).last() {
        Some((idx, _)) if idx > 0 => idx,
        _ => limit.max(first_char_len(text)),
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut idx = index.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn first_char_len(text: &str) -> usize {
    text.chars().next().map_or(0, char::len_utf8)
}
