//! # Requirements Registry
//!
//! Immutable, keyed mapping from jurisdiction code to [`StateRequirements`].
//!
//! The built-in registry is parsed from the embedded
//! `data/jurisdictions.yaml` on first use and shared behind an `Arc` for the
//! lifetime of the process. Alternative data files load through
//! [`Registry::from_path`]. Every entry passes
//! [`validate_requirements`](crate::validation::validate_requirements)
//! before a registry is handed out.
//!
//! ## Data File Format
//!
//! ```yaml
//! jurisdictions:
//!   CA:
//!     jurisdictionName: California
//!     witnessRequirements: { ... }
//!     ...
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use probate_core::{sha256_digest, CanonicalBytes, ContentDigest, JurisdictionCode};

use crate::error::RegistryError;
use crate::requirements::StateRequirements;
use crate::validation::validate_requirements;

const BUILTIN_DATA: &str = include_str!("../data/jurisdictions.yaml");

static BUILTIN: OnceLock<Arc<Registry>> = OnceLock::new();

/// On-disk shape of a registry document. Keys stay raw until
/// [`Registry::from_yaml_str`] normalizes them, so `ca` and `CA` in the same
/// file are caught as duplicates.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    jurisdictions: BTreeMap<String, StateRequirements>,
}

#[derive(Serialize)]
struct RegistryFileRef<'a> {
    jurisdictions: &'a BTreeMap<JurisdictionCode, StateRequirements>,
}

/// A snapshot of per-jurisdiction will-execution requirements.
///
/// Read-only once built; safe to share across threads. Iteration is in
/// code order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<JurisdictionCode, StateRequirements>,
}

impl Registry {
    /// Build a registry from entries, validating each one.
    ///
    /// Warnings are logged. The first entry with errors aborts the build.
    pub fn from_entries(
        entries: BTreeMap<JurisdictionCode, StateRequirements>,
    ) -> Result<Self, RegistryError> {
        for (code, req) in &entries {
            check_entry(code, req)?;
        }
        Ok(Self { entries })
    }

    /// Parse a registry document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        let mut entries = BTreeMap::new();
        let mut seen: BTreeMap<JurisdictionCode, String> = BTreeMap::new();
        for (raw, req) in file.jurisdictions {
            let code = JurisdictionCode::new(&raw)?;
            if let Some(previous) = seen.insert(code.clone(), raw.clone()) {
                return Err(RegistryError::InvalidData {
                    code: code.to_string(),
                    errors: vec![format!(
                        "{code}: duplicate entry (keys {previous:?} and {raw:?})"
                    )],
                });
            }
            entries.insert(code, req);
        }
        Self::from_entries(entries)
    }

    /// Read and parse a registry document from disk.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            jurisdictions = registry.len(),
            "loaded registry file"
        );
        Ok(registry)
    }

    /// The registry compiled into this crate, parsed once per process.
    ///
    /// A parse failure is returned rather than cached, so every caller
    /// sees it.
    pub fn builtin() -> Result<Arc<Registry>, RegistryError> {
        if let Some(registry) = BUILTIN.get() {
            return Ok(Arc::clone(registry));
        }
        let parsed = Arc::new(Self::from_yaml_str(BUILTIN_DATA)?);
        Ok(Arc::clone(BUILTIN.get_or_init(|| parsed)))
    }

    /// Look up the requirements for a raw jurisdiction code.
    ///
    /// The code is trimmed and uppercased first. A malformed code is
    /// [`RegistryError::InvalidJurisdictionCode`]; a well-formed code with
    /// no entry is [`RegistryError::NotFound`].
    pub fn lookup(&self, code: &str) -> Result<&StateRequirements, RegistryError> {
        let code = JurisdictionCode::new(code)?;
        let found = self.get(&code);
        tracing::debug!(jurisdiction = %code, found = found.is_some(), "registry lookup");
        found.ok_or_else(|| RegistryError::NotFound {
            code: code.to_string(),
        })
    }

    /// Requirements for an already-validated code.
    pub fn get(&self, code: &JurisdictionCode) -> Option<&StateRequirements> {
        self.entries.get(code)
    }

    /// Covered jurisdiction codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = &JurisdictionCode> {
        self.entries.keys()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&JurisdictionCode, &StateRequirements)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA-256 digest of the canonical JSON of all entries.
    ///
    /// Identical data always yields the same digest, so a host can record
    /// which snapshot produced a report.
    pub fn digest(&self) -> Result<ContentDigest, RegistryError> {
        let canonical = CanonicalBytes::new(&self.entries)?;
        Ok(sha256_digest(&canonical))
    }

    /// Serialize the registry back into its data-file form.
    pub fn to_yaml_string(&self) -> Result<String, RegistryError> {
        let file = RegistryFileRef {
            jurisdictions: &self.entries,
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub(crate) fn into_entries(self) -> BTreeMap<JurisdictionCode, StateRequirements> {
        self.entries
    }
}

/// Validate one entry, logging warnings and converting errors.
pub(crate) fn check_entry(
    code: &JurisdictionCode,
    req: &StateRequirements,
) -> Result<(), RegistryError> {
    let result = validate_requirements(code, req);
    for warning in &result.warnings {
        tracing::warn!(jurisdiction = %code, "{warning}");
    }
    if result.is_valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidData {
            code: code.to_string(),
            errors: result.errors,
        })
    }
}

/// Look up requirements in the built-in registry.
///
/// Returns an owned copy so the caller is not tied to the registry's
/// lifetime.
pub fn lookup_requirements(code: &str) -> Result<StateRequirements, RegistryError> {
    let registry = Registry::builtin()?;
    registry.lookup(code).cloned()
}
