//! # Jurisdiction Codes
//!
//! A jurisdiction is a US state (or DC) addressed by its two-letter postal
//! code. The code is the lookup key for every registry, validator, and
//! template operation.
//!
//! ## Validation
//!
//! [`JurisdictionCode::new`] trims surrounding whitespace, requires exactly
//! two ASCII letters, and uppercases the result. Deserialization goes
//! through the same constructor, so a `JurisdictionCode` in memory is always
//! well-formed. Whether the registry actually holds data for a well-formed
//! code is a separate question answered by the registry.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated, uppercase two-letter jurisdiction code (e.g. `"CA"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] when the trimmed
    /// input is empty, is not exactly two characters long, or contains a
    /// non-alphabetic character.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        let reject = |reason| ValidationError::InvalidJurisdictionCode {
            input: raw.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(reject("code is empty"));
        }
        if trimmed.chars().count() != 2 {
            return Err(reject("code must be exactly two letters"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(reject("code must be alphabetic"));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for JurisdictionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for JurisdictionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// -- Validating Deserialize ---------------------------------------------------

impl<'de> Deserialize<'de> for JurisdictionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
