//! # Error Types
//!
//! Errors raised while constructing core values. Everything here describes
//! bad caller input; none of it represents an internal fault.

use thiserror::Error;

/// A value failed validation at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The jurisdiction code is empty, the wrong length, or not alphabetic.
    #[error("invalid jurisdiction code {input:?}: {reason}")]
    InvalidJurisdictionCode {
        /// The raw input as supplied by the caller.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    /// A share fraction could not be parsed or is out of range.
    #[error("invalid share fraction {input:?}: {reason}")]
    InvalidShareFraction {
        /// The raw input.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Dollar amounts are integers and fractions are strings.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
