//! Registry error types.
//!
//! Loading errors carry the offending path or jurisdiction so a bad data
//! file can be located without a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or querying the requirements registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The code is empty, the wrong length, or not alphabetic.
    #[error(transparent)]
    InvalidJurisdictionCode(#[from] probate_core::ValidationError),

    /// The code is well-formed but the registry holds no entry for it.
    #[error("no requirements on record for jurisdiction {code}")]
    NotFound { code: String },

    /// The registry document is not valid YAML or does not match the model.
    #[error("failed to parse registry data: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A registry file could not be read.
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An entry parsed but failed structural validation.
    #[error("registry entry {code} failed validation: {}", .errors.join("; "))]
    InvalidData { code: String, errors: Vec<String> },

    /// Snapshot canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] probate_core::CanonicalizationError),
}
