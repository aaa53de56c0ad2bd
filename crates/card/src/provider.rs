//! Card provider inference from leading digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing network of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardProvider {
    Visa,
    Mastercard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    Discover,
    #[serde(rename = "Diners Club")]
    DinersClub,
    #[serde(rename = "JCB")]
    Jcb,
    UnionPay,
    Maestro,
    Others,
}

impl CardProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardProvider::Visa => "Visa",
            CardProvider::Mastercard => "Mastercard",
            CardProvider::AmericanExpress => "American Express",
            CardProvider::Discover => "Discover",
            CardProvider::DinersClub => "Diners Club",
            CardProvider::Jcb => "JCB",
            CardProvider::UnionPay => "UnionPay",
            CardProvider::Maestro => "Maestro",
            CardProvider::Others => "Others",
        }
    }
}

impl fmt::Display for CardProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test against the leading digits of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// Starts with this exact digit string.
    Prefix(&'static str),
    /// The first `len` digits, read as a number, lie in `low..=high`.
    Range { len: usize, low: u32, high: u32 },
}

impl PrefixRule {
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            PrefixRule::Prefix(prefix) => digits.starts_with(prefix),
            PrefixRule::Range { len, low, high } => digits
                .get(..len)
                .and_then(|head| head.parse::<u32>().ok())
                .is_some_and(|value| (low..=high).contains(&value)),
        }
    }
}

const fn range(len: usize, low: u32, high: u32) -> PrefixRule {
    PrefixRule::Range { len, low, high }
}

/// Provider rules in precedence order; the first matching rule wins.
pub const PROVIDER_RULES: &[(PrefixRule, CardProvider)] = &[
    (PrefixRule::Prefix("4"), CardProvider::Visa),
    (range(2, 51, 55), CardProvider::Mastercard),
    (range(2, 22, 27), CardProvider::Mastercard),
    (PrefixRule::Prefix("34"), CardProvider::AmericanExpress),
    (PrefixRule::Prefix("37"), CardProvider::AmericanExpress),
    (PrefixRule::Prefix("6011"), CardProvider::Discover),
    (PrefixRule::Prefix("65"), CardProvider::Discover),
    (range(3, 644, 649), CardProvider::Discover),
    (PrefixRule::Prefix("622"), CardProvider::Discover),
    (range(3, 300, 305), CardProvider::DinersClub),
    (PrefixRule::Prefix("36"), CardProvider::DinersClub),
    (PrefixRule::Prefix("38"), CardProvider::DinersClub),
    (PrefixRule::Prefix("35"), CardProvider::Jcb),
    (PrefixRule::Prefix("62"), CardProvider::UnionPay),
    (PrefixRule::Prefix("5018"), CardProvider::Maestro),
    (PrefixRule::Prefix("5020"), CardProvider::Maestro),
    (PrefixRule::Prefix("5038"), CardProvider::Maestro),
    (PrefixRule::Prefix("6304"), CardProvider::Maestro),
    (PrefixRule::Prefix("6759"), CardProvider::Maestro),
    (range(4, 6761, 6763), CardProvider::Maestro),
];

/// Provider for a normalized digit string.
pub fn classify(digits: &str) -> CardProvider {
    PROVIDER_RULES
        .iter()
        .find(|(rule, _)| rule.matches(digits))
        .map(|(_, provider)| *provider)
        .unwrap_or(CardProvider::Others)
}
