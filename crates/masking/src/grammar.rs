//! Phone number grammar seam.
//!
//! The masking engine does not know how phone numbers are structured. It asks
//! a [`PhoneGrammar`] for the numbers present in a text and works with the
//! spans and regions that come back.

use crate::digits::count_digits;
use crate::span::TextSpan;
use orbit_common::CountryCode;
use phonenumber::{country, PhoneNumber};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// A number reported by a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMatch {
    pub span: TextSpan,
    /// Region the number belongs to, when the grammar could resolve it.
    pub country: Option<CountryCode>,
}

/// Something that can find phone numbers in free text.
///
/// Implementations should report non-overlapping spans from left to right.
pub trait PhoneGrammar {
    fn find_numbers(&self, text: &str, default_country: Option<CountryCode>) -> Vec<GrammarMatch>;
}

impl<G: PhoneGrammar + ?Sized> PhoneGrammar for &G {
    fn find_numbers(&self, text: &str, default_country: Option<CountryCode>) -> Vec<GrammarMatch> {
        (**self).find_numbers(text, default_country)
    }
}

/// Runs of digit groups joined by at most one separator, optionally led by `+`.
static CANDIDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\(?[0-9]+\)?(?:[ .\-]?\(?[0-9]+\)?)*").unwrap()
});

/// One digit group of a run, with its parentheses.
static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(?[0-9]+\)?").unwrap());

/// Fewest digits a candidate may carry.
pub const MIN_CANDIDATE_DIGITS: usize = 7;

/// Most digits a candidate may carry (country code plus longest national number).
pub const MAX_CANDIDATE_DIGITS: usize = 17;

/// Grammar backed by the `phonenumber` crate's libphonenumber metadata.
///
/// A run of digit groups may hold a number followed by unrelated digits, or
/// two numbers side by side. Each run is split greedily: the longest prefix
/// of groups that parses (and by default is valid) becomes a number, and the
/// search resumes after it.
///
/// Without a default country only numbers written with a leading `+` are
/// considered, since nothing else can be attributed to a region.
#[derive(Debug, Clone)]
pub struct LibPhoneGrammar {
    require_valid: bool,
}

impl Default for LibPhoneGrammar {
    fn default() -> Self {
        Self {
            require_valid: true,
        }
    }
}

impl LibPhoneGrammar {
    /// Accept numbers that are valid for their region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept every candidate the parser understands, valid or not.
    pub fn lenient() -> Self {
        Self {
            require_valid: false,
        }
    }

    fn parse(&self, candidate: &str, region: Option<country::Id>) -> Option<PhoneNumber> {
        let number = match phonenumber::parse(region, candidate) {
            Ok(number) => number,
            Err(err) => {
                trace!(len = candidate.len(), error = ?err, "Candidate rejected by parser");
                return None;
            }
        };

        if self.require_valid && !phonenumber::is_valid(&number) {
            trace!(len = candidate.len(), "Candidate parsed but is not a valid number");
            return None;
        }

        Some(number)
    }

    /// The longest number made of the leading `groups`, and how many groups it used.
    fn longest_number(
        &self,
        text: &str,
        groups: &[TextSpan],
        region: Option<country::Id>,
        needs_plus: bool,
    ) -> Option<(usize, GrammarMatch)> {
        let start = groups.first()?.start;
        if starts_in_word(text, start) {
            return None;
        }

        for used in (1..=groups.len()).rev() {
            let mut span = TextSpan {
                start,
                end: groups[used - 1].end,
            };
            let Some(candidate) = span.slice(text) else {
                continue;
            };

            // A trailing ')' without its opener belongs to the surrounding prose.
            if candidate.ends_with(')')
                && candidate.matches('(').count() < candidate.matches(')').count()
            {
                span.end -= 1;
            }
            let Some(candidate) = span.slice(text) else {
                continue;
            };

            if needs_plus && !candidate.starts_with('+') {
                return None;
            }
            let digits = count_digits(candidate);
            if digits > MAX_CANDIDATE_DIGITS {
                continue;
            }
            if digits < MIN_CANDIDATE_DIGITS {
                break;
            }
            if ends_in_word(text, span.end) {
                continue;
            }

            if let Some(number) = self.parse(candidate, region) {
                let country = number
                    .country()
                    .id()
                    .and_then(|id| format!("{:?}", id).parse::<CountryCode>().ok());
                return Some((used, GrammarMatch { span, country }));
            }
        }

        None
    }
}

impl PhoneGrammar for LibPhoneGrammar {
    fn find_numbers(&self, text: &str, default_country: Option<CountryCode>) -> Vec<GrammarMatch> {
        let region = default_country.and_then(|code| code.as_str().parse::<country::Id>().ok());
        // An unknown default region leaves only `+` numbers parseable.
        let needs_plus = region.is_none();

        let mut matches = Vec::new();
        for run in CANDIDATE_PATTERN.find_iter(text) {
            let groups = run_groups(run);
            let mut first = 0;
            while first < groups.len() {
                match self.longest_number(text, &groups[first..], region, needs_plus) {
                    Some((used, found)) => {
                        matches.push(found);
                        first += used;
                    }
                    // Only the run's first group can carry the `+`.
                    None if needs_plus => break,
                    None => first += 1,
                }
            }
        }

        matches
    }
}

/// Spans of the digit groups in a candidate run. A leading `+` joins the first group.
fn run_groups(run: regex::Match<'_>) -> Vec<TextSpan> {
    let offset = run.start();
    let mut groups: Vec<TextSpan> = GROUP_PATTERN
        .find_iter(run.as_str())
        .map(|m| TextSpan {
            start: offset + m.start(),
            end: offset + m.end(),
        })
        .collect();
    if let Some(first) = groups.first_mut() {
        first.start = offset;
    }
    groups
}

fn starts_in_word(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_some_and(char::is_alphanumeric)
}

fn ends_in_word(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(s: &str) -> CountryCode {
        s.parse().unwrap()
    }

    fn found<'a>(grammar: &LibPhoneGrammar, text: &'a str, default: Option<&str>) -> Vec<&'a str> {
        grammar
            .find_numbers(text, default.map(code))
            .iter()
            .filter_map(|m| m.span.slice(text))
            .collect()
    }

    #[test]
    fn test_run_groups() {
        let text = "call +1 415-555-0123 24";
        let run = CANDIDATE_PATTERN.find(text).unwrap();
        let groups: Vec<&str> = run_groups(run)
            .iter()
            .filter_map(|g| g.slice(text))
            .collect();
        assert_eq!(groups, vec!["+1", "415", "555", "0123", "24"]);
    }

    #[test]
    fn test_international_numbers_between_prose() {
        let text = "US: +1 415-555-0123, UK: +44 20 7946 0958";
        assert_eq!(
            found(&LibPhoneGrammar::new(), text, None),
            vec!["+1 415-555-0123", "+44 20 7946 0958"]
        );
    }

    #[test]
    fn test_trailing_digit_group_left_in_text() {
        let grammar = LibPhoneGrammar::new();
        let text = "Call +1 415-555-0123 24 hours a day";
        let numbers = grammar.find_numbers(text, None);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].span.slice(text), Some("+1 415-555-0123"));
        assert_eq!(numbers[0].country, Some(code("US")));

        let text = "+44 20 7946 0958 24";
        let numbers = grammar.find_numbers(text, None);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].span.slice(text), Some("+44 20 7946 0958"));
        assert_eq!(numbers[0].country, Some(code("GB")));
    }

    #[test]
    fn test_adjacent_numbers_are_split() {
        let grammar = LibPhoneGrammar::new();
        let text = "+44 20 7946 0958 07911123456";
        let numbers = grammar.find_numbers(text, None);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].span.slice(text), Some("+44 20 7946 0958"));
        assert_eq!(numbers[0].country, Some(code("GB")));
    }

    #[test]
    fn test_space_separated_numbers() {
        let grammar = LibPhoneGrammar::new();
        let text = "+1 415-555-0123 +44 20 7946 0958";
        let numbers = grammar.find_numbers(text, None);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[0].span.slice(text), Some("+1 415-555-0123"));
        assert_eq!(numbers[0].country, Some(code("US")));
        assert_eq!(numbers[1].span.slice(text), Some("+44 20 7946 0958"));
        assert_eq!(numbers[1].country, Some(code("GB")));
    }

    #[test]
    fn test_default_country_ignores_prose_digits() {
        let grammar = LibPhoneGrammar::new();
        assert!(found(&grammar, "year 2024 2025 2026", Some("US")).is_empty());
        assert_eq!(
            found(&grammar, "call 415 555 0123 5 times", Some("US")),
            vec!["415 555 0123"]
        );
    }

    #[test]
    fn test_needs_plus_without_region() {
        let grammar = LibPhoneGrammar::new();
        assert!(found(&grammar, "call 415-555-0123 now", None).is_empty());
        assert_eq!(
            found(&grammar, "call 415-555-0123 now", Some("US")),
            vec!["415-555-0123"]
        );
    }

    #[test]
    fn test_skips_short_runs_and_words() {
        let grammar = LibPhoneGrammar::new();
        assert!(found(&grammar, "in 2024 we had 12 calls", Some("US")).is_empty());
        assert!(found(&grammar, "order A4155550123 shipped", Some("US")).is_empty());
        assert!(found(&grammar, "ref 4155550123B", Some("US")).is_empty());
    }

    #[test]
    fn test_drops_unbalanced_paren() {
        let grammar = LibPhoneGrammar::new();
        assert_eq!(
            found(&grammar, "(call +1 415-555-0123)", None),
            vec!["+1 415-555-0123"]
        );
        assert_eq!(
            found(&grammar, "office (415) 555-0123", Some("US")),
            vec!["(415) 555-0123"]
        );
    }

    #[test]
    fn test_lenient_keeps_whole_run() {
        let text = "Call +1 415-555-0123 24 hours";
        assert_eq!(
            found(&LibPhoneGrammar::lenient(), text, None),
            vec!["+1 415-555-0123 24"]
        );
        assert_eq!(found(&LibPhoneGrammar::new(), text, None), vec!["+1 415-555-0123"]);
    }

    #[test]
    fn test_find_numbers_without_digits() {
        let grammar = LibPhoneGrammar::new();
        assert!(grammar.find_numbers("nothing to see here", None).is_empty());
    }
}
