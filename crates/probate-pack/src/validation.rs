//! # Registry Data Validation
//!
//! Structural checks run on every entry when a registry is loaded or an
//! update supplies replacement requirements. Errors reject the data;
//! warnings are logged and the entry is accepted.

use std::collections::BTreeSet;

use probate_core::{HolographicCondition, JurisdictionCode};

use crate::requirements::StateRequirements;

/// Upper bound on `minimumWitnesses`. No US jurisdiction asks for more
/// than three; anything past this is a data-entry mistake.
pub const MAX_WITNESSES: u32 = 10;

/// Accepted range for `witnessMinimumAge`.
pub const WITNESS_AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=25;

// ---------------------------------------------------------------------------
// Validation Results
// ---------------------------------------------------------------------------

/// Outcome of validating registry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryValidationResult {
    /// Whether the data is structurally valid.
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl RegistryValidationResult {
    /// A passing result with no findings.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error. Marks result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for RegistryValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ---------------------------------------------------------------------------
// Entry Validation
// ---------------------------------------------------------------------------

/// Validate one registry entry.
///
/// Messages are prefixed with the jurisdiction code.
pub fn validate_requirements(
    code: &JurisdictionCode,
    req: &StateRequirements,
) -> RegistryValidationResult {
    let mut result = RegistryValidationResult::ok();
    let witnesses = &req.witness_requirements;
    let holographic = &req.holographic_will;

    if req.jurisdiction_name.trim().is_empty() {
        result.add_error(format!("{code}: jurisdictionName is empty"));
    }

    if witnesses.minimum_witnesses > MAX_WITNESSES {
        result.add_error(format!(
            "{code}: minimumWitnesses {} exceeds {MAX_WITNESSES}",
            witnesses.minimum_witnesses
        ));
    }

    if !WITNESS_AGE_RANGE.contains(&witnesses.witness_minimum_age) {
        result.add_error(format!(
            "{code}: witnessMinimumAge {} outside {}..={}",
            witnesses.witness_minimum_age,
            WITNESS_AGE_RANGE.start(),
            WITNESS_AGE_RANGE.end()
        ));
    }

    if holographic.allowed {
        if holographic.conditions.is_empty() {
            result.add_warning(format!(
                "{code}: holographic wills allowed with no conditions"
            ));
        }
    } else if !holographic.conditions.is_empty() {
        result.add_error(format!(
            "{code}: holographic conditions listed but holographic wills are not allowed"
        ));
    }

    if req.requires(HolographicCondition::EntirelyHandwritten)
        && req.requires(HolographicCondition::MaterialPortionsHandwritten)
    {
        result.add_error(format!(
            "{code}: holographic conditions require both entire and material-portion handwriting"
        ));
    }

    let mut seen_kinds = BTreeSet::new();
    for tag in &req.restrictions {
        if !seen_kinds.insert(tag.kind_name()) {
            result.add_error(format!(
                "{code}: duplicate restriction kind {}",
                tag.kind_name()
            ));
        }
    }

    let mut seen_alternatives = Vec::new();
    for alt in &req.probate_alternatives {
        if seen_alternatives.contains(&alt.kind) {
            result.add_warning(format!(
                "{code}: probate alternative {} listed more than once",
                alt.kind
            ));
        } else {
            seen_alternatives.push(alt.kind);
        }
    }

    result
}
