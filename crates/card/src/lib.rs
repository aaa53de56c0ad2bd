//! Payment card number validation.
//!
//! A number is accepted when, after dropping formatting characters, it has
//! 13 to 19 digits and passes the Luhn checksum. Accepted numbers are
//! attributed to a provider by their leading digits.

pub mod luhn;
pub mod provider;
pub mod validator;

pub use provider::{classify, CardProvider};
pub use validator::{validate_card, validate_card_value, CardType, CardValidationResult};

/// Fewest digits a card number may have.
pub const MIN_CARD_DIGITS: usize = 13;

/// Most digits a card number may have.
pub const MAX_CARD_DIGITS: usize = 19;
