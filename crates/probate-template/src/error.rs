//! Template error types.

use thiserror::Error;

use probate_pack::RegistryError;

/// Errors from template generation.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The code is empty, the wrong length, or not alphabetic.
    #[error(transparent)]
    InvalidJurisdictionCode(probate_core::ValidationError),

    /// The code is well-formed but the registry holds no rules for it.
    #[error("unknown jurisdiction {code}: no will-execution rules on record")]
    UnknownJurisdiction { code: String },

    /// The registry itself could not be loaded.
    #[error("registry unavailable: {0}")]
    Registry(RegistryError),
}

impl From<RegistryError> for TemplateError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidJurisdictionCode(e) => Self::InvalidJurisdictionCode(e),
            RegistryError::NotFound { code } => Self::UnknownJurisdiction { code },
            other => Self::Registry(other),
        }
    }
}
