//! Fallback detection of numbers written without a country code.

use crate::digits::{count_digits, mask_segment};
use crate::masker::MaskingStats;
use crate::patterns::local_patterns;
use crate::span::{PhoneCandidate, TextSpan};
use regex::Captures;
use tracing::trace;

/// Find local-format candidates, one pass per pattern in bank order.
///
/// Within a pass candidates are left to right. Passes are not merged, so a
/// span found by an earlier pattern may be reported again by a later one.
pub fn find_local(text: &str) -> Vec<PhoneCandidate> {
    local_patterns()
        .into_iter()
        .flat_map(|pattern| {
            pattern
                .regex
                .find_iter(text)
                .filter(move |m| pattern.accepts(m.as_str()))
                .map(|m| PhoneCandidate::local(TextSpan::from(m)))
        })
        .collect()
}

/// Mask every local-format number in `text`.
///
/// Each pass runs over the output of the previous one. Masked digits are no
/// longer digits, so later passes never mask more than they would have on
/// the original text.
pub fn mask_local(text: &str, mask_char: char, unmasked_digits: usize) -> String {
    let mut stats = MaskingStats::default();
    mask_local_counting(text, mask_char, unmasked_digits, &mut stats)
}

pub(crate) fn mask_local_counting(
    text: &str,
    mask_char: char,
    unmasked_digits: usize,
    stats: &mut MaskingStats,
) -> String {
    let mut result = text.to_string();

    for pattern in local_patterns() {
        let mut matched = 0usize;
        let masked = pattern.regex.replace_all(&result, |caps: &Captures<'_>| {
            let segment = &caps[0];
            if !pattern.accepts(segment) {
                return segment.to_string();
            }

            let digits = count_digits(segment);
            matched += 1;
            stats.digits_masked += digits - unmasked_digits.min(digits);
            trace!(pattern = pattern.name, len = segment.len(), "Masked local number");
            mask_segment(segment, mask_char, unmasked_digits)
        });
        let masked = masked.into_owned();

        if matched > 0 {
            stats.local_masked += matched;
            if !stats.matched_patterns.iter().any(|name| name == pattern.name) {
                stats.matched_patterns.push(pattern.name.to_string());
            }
        }
        result = masked;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_local_eleven_digits() {
        let text = "ring 01625327162 after six";
        let found = find_local(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span.slice(text), Some("01625327162"));
        assert_eq!(found[0].country, None);
    }

    #[test]
    fn test_find_local_reports_overlapping_passes() {
        // Matched as separated groups and again together with its area code.
        let text = "(415) 555-0123-4567";
        let found: Vec<_> = find_local(text)
            .iter()
            .filter_map(|c| c.span.slice(text))
            .collect();
        assert_eq!(found, vec!["555-0123-4567", "(415) 555-0123"]);
    }

    #[test]
    fn test_find_local_ignores_short_numbers() {
        assert!(find_local("born 1987, 12 cats, room 4521").is_empty());
    }

    #[test]
    fn test_mask_local_shapes() {
        assert_eq!(mask_local("01625327162", '*', 2), "*********62");
        assert_eq!(mask_local("4155550123", '*', 2), "********23");
        assert_eq!(mask_local("020 7946 0958", '*', 2), "*** **** **58");
        assert_eq!(mask_local("(415) 555-0123", '*', 2), "(***) ***-**23");
        assert_eq!(mask_local("612345678", '*', 2), "*******78");
        assert_eq!(mask_local("98765432", '*', 3), "*****432");
    }

    #[test]
    fn test_mask_local_leaves_non_numbers() {
        let text = "Invoice 2024, qty 12, code 1234567";
        assert_eq!(mask_local(text, '*', 2), text);
    }

    #[test]
    fn test_mask_local_is_idempotent() {
        let text = "home 020 7946 0958, cell 07911123456";
        let once = mask_local(text, '*', 2);
        assert_eq!(once, "home *** **** **58, cell *********56");
        assert_eq!(mask_local(&once, '*', 2), once);
    }

    #[test]
    fn test_mask_local_counts() {
        let mut stats = MaskingStats::default();
        let out = mask_local_counting("01625327162 and 98765432", '*', 2, &mut stats);
        assert_eq!(out, "*********62 and ******32");
        assert_eq!(stats.local_masked, 2);
        assert_eq!(stats.digits_masked, 15);
        assert_eq!(
            stats.matched_patterns,
            vec!["eleven_digit_leading_zero".to_string(), "eight_digit".to_string()]
        );
    }
}
