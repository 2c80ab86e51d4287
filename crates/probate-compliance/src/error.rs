//! Compliance error types.

use thiserror::Error;

use probate_pack::RegistryError;

/// Errors from compliance validation and strategy derivation.
///
/// A non-compliant will is not an error; it is a report with violations.
/// These variants mean the caller asked about a jurisdiction we cannot
/// evaluate.
#[derive(Debug, Error)]
pub enum ComplianceError {
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

impl From<RegistryError> for ComplianceError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidJurisdictionCode(e) => Self::InvalidJurisdictionCode(e),
            RegistryError::NotFound { code } => Self::UnknownJurisdiction { code },
            other => Self::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_unknown_jurisdiction() {
        let err: ComplianceError = RegistryError::NotFound { code: "ZZ".into() }.into();
        assert!(matches!(err, ComplianceError::UnknownJurisdiction { ref code } if code == "ZZ"));
    }

    #[test]
    fn malformed_code_passes_through() {
        let inner = probate_core::JurisdictionCode::new("1").unwrap_err();
        let err: ComplianceError = RegistryError::InvalidJurisdictionCode(inner.clone()).into();
        assert!(matches!(err, ComplianceError::InvalidJurisdictionCode(e) if e == inner));
    }
}
