//! Common utilities and types shared across orbit crates.

pub mod country;
pub mod error;

pub use country::CountryCode;
pub use error::{Error, Result};
