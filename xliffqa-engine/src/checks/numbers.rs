//! Number consistency
//!
//! Both sides are NFKC-normalized and Thai digits mapped to ASCII before
//! numbers are read. A `-` counts as a sign only when it does not follow a
//! letter or digit, so ranges (`10-20`) and phone numbers keep their parts
//! positive.

use super::placeholders::strip_placeholders;
use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::Regex;
use std::sync::LazyLock;
use xliffqa_core::language::{is_buddhist_year_equivalent, is_thai, nfkc, normalize_thai_digits};
use xliffqa_core::SegmentRecord;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+(?:[.,][0-9]+)*").expect("number pattern is valid"));

/// A number as written and its numeric value
#[derive(Debug, Clone, PartialEq)]
pub struct NumberToken {
    pub raw: String,
    pub value: f64,
}

/// Numbers in `text` in order of appearance
pub fn extract_numbers(text: &str) -> Vec<NumberToken> {
    let normalized = nfkc(text);
    let normalized = normalize_thai_digits(&normalized);
    let text = strip_placeholders(&normalized);

    NUMBER
        .find_iter(&text)
        .flat_map(|m| {
            let mut raw = m.as_str();
            if raw.starts_with('-') && follows_alphanumeric(&text, m.start()) {
                raw = &raw[1..];
            }
            number_tokens(raw)
        })
        .collect()
}

/// One token for a well-formed number, otherwise one per list item
///
/// `1,2,3` is a list of three numbers rather than `123`.
fn number_tokens(raw: &str) -> Vec<NumberToken> {
    if let Some(value) = parse_number(raw) {
        return vec![NumberToken {
            raw: raw.to_string(),
            value,
        }];
    }
    let sep = if raw.contains(',') { ',' } else { '.' };
    if !raw.contains(sep) {
        return Vec::new();
    }
    raw.split(sep)
        .filter(|part| !part.is_empty() && part != &"-")
        .flat_map(number_tokens)
        .collect()
}

fn follows_alphanumeric(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

/// True when `sep` splits `digits` into a 1-3 digit lead and 3-digit groups
fn is_grouped(digits: &str, sep: char) -> bool {
    let mut groups = digits.split(sep);
    let lead_ok = groups
        .next()
        .is_some_and(|lead| (1..=3).contains(&lead.len()));
    let mut rest = groups.peekable();
    lead_ok && rest.peek().is_some() && rest.all(|group| group.len() == 3)
}

/// Value of a number with `.`/`,` separators
///
/// With both separators present the last one is the decimal mark and the
/// other must group the integer part in threes. A single separator kind is
/// grouping when every group after it has three digits, a decimal mark when
/// it appears once, and a list separator otherwise (returns `None`).
fn parse_number(raw: &str) -> Option<f64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let normalized: String = match (digits.rfind('.'), digits.rfind(',')) {
        (None, None) => digits.to_string(),
        (Some(dot), Some(comma)) => {
            let (decimal, grouping, decimal_idx) = if dot > comma {
                ('.', ',', dot)
            } else {
                (',', '.', comma)
            };
            if digits.matches(decimal).count() > 1 || !is_grouped(&digits[..decimal_idx], grouping) {
                return None;
            }
            digits
                .chars()
                .filter(|c| *c != grouping)
                .map(|c| if c == decimal { '.' } else { c })
                .collect()
        }
        (Some(idx), None) | (None, Some(idx)) => {
            let sep = digits[idx..].chars().next()?;
            if is_grouped(digits, sep) {
                digits.chars().filter(|c| *c != sep).collect()
            } else if digits.matches(sep).count() == 1 {
                digits.replace(sep, ".")
            } else {
                return None;
            }
        }
    };

    let value: f64 = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn same_value(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn check_number_consistency(
    segment: &SegmentRecord,
    ctx: &SegmentCheckContext,
) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    if s.target_text.trim().is_empty() {
        return Vec::new();
    }
    let source = extract_numbers(&s.source_text);
    if source.is_empty() {
        return Vec::new();
    }
    let target = extract_numbers(&s.target_text);
    let thai_target = is_thai(&ctx.target_lang);

    let mut missing: Vec<&str> = Vec::new();
    for number in &source {
        let matched = target.iter().any(|t| {
            same_value(number.value, t.value)
                || (thai_target && is_buddhist_year_equivalent(number.value, t.value))
        });
        if !matched && !missing.contains(&number.raw.as_str()) {
            missing.push(&number.raw);
        }
    }
    if missing.is_empty() {
        return Vec::new();
    }

    let description = match missing.as_slice() {
        [one] => format!("Number {one} from source is missing in target"),
        many => format!("Numbers {} from source are missing in target", many.join(", ")),
    };
    vec![RuleCheckResult::new(
        segment,
        RuleCategory::NumberFormat,
        Severity::Major,
        description,
    )]
}
