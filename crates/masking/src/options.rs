//! Masking options and their configuration form.

use crate::{DEFAULT_MASK_CHAR, DEFAULT_UNMASKED_DIGITS};
use orbit_common::{CountryCode, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fully resolved options for one masking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskingOptions {
    /// Character substituted for masked digits.
    pub mask_char: char,
    /// How many trailing digits of each number stay visible.
    pub unmasked_digits: usize,
    /// Region assumed for numbers written without a country code.
    pub default_country: Option<CountryCode>,
    /// When set, international numbers from other regions are left as is.
    pub allowed_countries: Option<BTreeSet<CountryCode>>,
}

impl Default for MaskingOptions {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            unmasked_digits: DEFAULT_UNMASKED_DIGITS,
            default_country: None,
            allowed_countries: None,
        }
    }
}

impl MaskingOptions {
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn with_unmasked_digits(mut self, unmasked_digits: usize) -> Self {
        self.unmasked_digits = unmasked_digits;
        self
    }

    pub fn with_default_country(mut self, country: CountryCode) -> Self {
        self.default_country = Some(country);
        self
    }

    pub fn with_allowed_countries<I>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = CountryCode>,
    {
        self.allowed_countries = Some(countries.into_iter().collect());
        self
    }

    /// Whether a number attributed to `country` should be masked.
    ///
    /// Numbers of unknown origin are always masked.
    pub fn allows(&self, country: Option<CountryCode>) -> bool {
        match (&self.allowed_countries, country) {
            (Some(allowed), Some(country)) => allowed.contains(&country),
            _ => true,
        }
    }

    /// Resolve options from a JSON document such as `{"maskChar": "#"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MaskingConfig = serde_json::from_str(json)?;
        config.resolve()
    }

    /// Resolve options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: MaskingConfig = serde_yaml::from_str(yaml)?;
        config.resolve()
    }
}

/// Masking options as written in a configuration document.
///
/// Every field is optional; missing fields take the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskingConfig {
    pub mask_char: Option<String>,
    pub unmasked_digits: Option<i64>,
    pub default_country: Option<String>,
    pub allowed_countries: Option<Vec<String>>,
}

impl MaskingConfig {
    /// Validate the document and turn it into options.
    pub fn resolve(&self) -> Result<MaskingOptions> {
        let mut options = MaskingOptions::default();

        if let Some(mask) = &self.mask_char {
            let mut chars = mask.chars();
            options.mask_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::TypeMismatch(format!(
                        "maskChar must be a single character, got {:?}",
                        mask
                    )))
                }
            };
        }

        if let Some(digits) = self.unmasked_digits {
            options.unmasked_digits = usize::try_from(digits).map_err(|_| {
                Error::RangeInvalid(format!(
                    "unmaskedDigits must not be negative, got {}",
                    digits
                ))
            })?;
        }

        if let Some(country) = &self.default_country {
            options.default_country = Some(country.parse()?);
        }

        if let Some(countries) = &self.allowed_countries {
            let allowed = countries
                .iter()
                .map(|c| c.parse())
                .collect::<Result<BTreeSet<CountryCode>>>()?;
            options.allowed_countries = Some(allowed);
        }

        Ok(options)
    }
}
