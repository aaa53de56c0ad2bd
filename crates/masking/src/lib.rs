//! Phone number masking for free text.
//!
//! Numbers are found in two phases: a structured international parse through
//! a [`PhoneGrammar`], then a heuristic local-pattern fallback for numbers
//! written without a country code. Every digit of a match except the last few
//! is replaced with a mask character; formatting characters are kept.

pub mod digits;
pub mod grammar;
pub mod international;
pub mod local;
pub mod masker;
pub mod options;
pub mod patterns;
pub mod span;

pub use grammar::{GrammarMatch, LibPhoneGrammar, PhoneGrammar};
pub use masker::{mask_phone_numbers, MaskingResult, MaskingStats, PhoneMasker};
pub use options::{MaskingConfig, MaskingOptions};
pub use orbit_common::CountryCode;
pub use span::{PhoneCandidate, TextSpan};

/// Default character substituted for masked digits.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Default number of trailing digits left visible.
pub const DEFAULT_UNMASKED_DIGITS: usize = 2;
