//! Regex patterns for phone numbers written without a country code.

use regex::Regex;
use std::sync::LazyLock;

/// Fewest digits a local match must contain to count as a phone number.
pub const MIN_LOCAL_DIGITS: usize = 8;

/// 11 digits with a trunk `0`, the shape of many national mobile numbers.
pub static ELEVEN_DIGIT_LEADING_ZERO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b0[0-9]{10}\b").unwrap());

/// 10 digits without a trunk prefix.
pub static TEN_DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[1-9][0-9]{9}\b").unwrap());

/// Three digit groups separated by a space or hyphen, e.g. `020 7946 0958`.
pub static SEPARATED_GROUPS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{2,5}[ \-][0-9]{3,4}[ \-][0-9]{3,6}\b").unwrap()
});

/// Parenthesized area code, e.g. `(415) 555-0123`.
pub static PARENTHESIZED_AREA_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([0-9]{2,4}\)[ \-]?[0-9]{3,4}[ \-]?[0-9]{3,6}\b").unwrap()
});

/// 9 digits without a trunk prefix.
pub static NINE_DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[1-9][0-9]{8}\b").unwrap());

/// 8 digits without a trunk prefix.
pub static EIGHT_DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[1-9][0-9]{7}\b").unwrap());

/// One entry of the local pattern bank.
#[derive(Debug, Clone, Copy)]
pub struct LocalPattern {
    pub name: &'static str,
    pub regex: &'static Regex,
    /// Matches with fewer digits than this are ignored.
    pub min_digits: usize,
}

impl LocalPattern {
    /// Whether a match of this pattern carries enough digits to be a number.
    pub fn accepts(&self, matched: &str) -> bool {
        crate::digits::count_digits(matched) >= self.min_digits
    }
}

/// The local pattern bank, in the order the passes run.
pub fn local_patterns() -> [LocalPattern; 6] {
    let entry = |name, regex: &'static LazyLock<Regex>| LocalPattern {
        name,
        regex,
        min_digits: MIN_LOCAL_DIGITS,
    };

    [
        entry("eleven_digit_leading_zero", &ELEVEN_DIGIT_LEADING_ZERO_PATTERN),
        entry("ten_digit", &TEN_DIGIT_PATTERN),
        entry("separated_groups", &SEPARATED_GROUPS_PATTERN),
        entry("parenthesized_area_code", &PARENTHESIZED_AREA_CODE_PATTERN),
        entry("nine_digit", &NINE_DIGIT_PATTERN),
        entry("eight_digit", &EIGHT_DIGIT_PATTERN),
    ]
}
