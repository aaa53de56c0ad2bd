//! Card number validation service.

use crate::luhn::is_luhn_valid;
use crate::provider::{classify, CardProvider};
use crate::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Kind of card. Numbers alone do not tell debit from credit, so valid
/// cards are always reported as [`CardType::Credit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Credit,
    Debit,
    Unknown,
}

/// Outcome of validating a card number.
///
/// `card_type`, `provider`, `formatted` and `last_four` are set exactly when
/// `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardValidationResult {
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub card_type: Option<CardType>,
    pub provider: Option<CardProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
}

impl CardValidationResult {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            card_type: None,
            provider: None,
            formatted: None,
            last_four: None,
        }
    }
}

/// Validate a card number written with or without spaces or dashes.
///
/// ```
/// use orbit_card::{validate_card, CardProvider};
///
/// let result = validate_card("4539 1488 0343 6467");
/// assert!(result.is_valid);
/// assert_eq!(result.provider, Some(CardProvider::Visa));
/// assert_eq!(result.last_four.as_deref(), Some("6467"));
/// ```
pub fn validate_card(card_number: &str) -> CardValidationResult {
    if card_number.is_empty() {
        return CardValidationResult::invalid();
    }

    let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        trace!(len = digits.len(), "Card number has the wrong number of digits");
        return CardValidationResult::invalid();
    }

    if !is_luhn_valid(&digits) {
        trace!(len = digits.len(), "Card number failed the Luhn check");
        return CardValidationResult::invalid();
    }

    let provider = classify(&digits);
    let last_four = digits[digits.len() - 4..].to_string();

    CardValidationResult {
        is_valid: true,
        card_type: Some(CardType::Credit),
        provider: Some(provider),
        formatted: Some(format_digits(&digits)),
        last_four: Some(last_four),
    }
}

/// Validate a card number that arrived as an untyped JSON value.
///
/// Anything other than a JSON string is invalid.
pub fn validate_card_value(value: &Value) -> CardValidationResult {
    match value {
        Value::String(card_number) => validate_card(card_number),
        _ => CardValidationResult::invalid(),
    }
}

/// Group digits in fours separated by single spaces.
fn format_digits(digits: &str) -> String {
    // Only ASCII digits reach here, so byte chunks are whole characters.
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<Vec<_>>()
        .join(" ")
}
