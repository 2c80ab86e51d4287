//! # Compliance Validator
//!
//! Checks a draft [`WillDocument`] against one jurisdiction's
//! [`StateRequirements`] and produces a [`ComplianceReport`].
//!
//! ## Check Order
//!
//! Checks run in a fixed sequence so report ordering is stable:
//!
//! 1. Witness count
//! 2. Witness age
//! 3. Beneficiary witnesses
//! 4. Notarization
//! 5. Testator signature
//! 6. Holographic-will eligibility
//! 7. Restriction advisories
//! 8. Self-proving affidavit
//! 9. Closing recommendations
//!
//! Every violation pushes exactly one required action.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use probate_core::{normalized_email, HolographicCondition, RestrictionTag, WillDocument};
use probate_pack::{Registry, StateRequirements};

use crate::error::ComplianceError;

/// Outcome of validating one will against one jurisdiction.
///
/// `compliant` is true exactly when `violations` is empty. Computed fresh
/// per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub compliant: bool,
    /// Hard failures that block legal validity.
    pub violations: Vec<String>,
    /// Jurisdiction peculiarities that do not invalidate the will.
    pub warnings: Vec<String>,
    /// Remediation steps, one per violation, in violation order.
    pub required_actions: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Accumulates findings while checks run.
#[derive(Default)]
struct ReportBuilder {
    violations: Vec<String>,
    warnings: Vec<String>,
    required_actions: Vec<String>,
    recommendations: Vec<String>,
}

impl ReportBuilder {
    fn violation(&mut self, violation: String, action: String) {
        self.violations.push(violation);
        self.required_actions.push(action);
    }

    fn advisory(&mut self, warning: String, recommendation: String) {
        self.warnings.push(warning);
        self.recommendations.push(recommendation);
    }

    fn finish(self) -> ComplianceReport {
        ComplianceReport {
            compliant: self.violations.is_empty(),
            violations: self.violations,
            warnings: self.warnings,
            required_actions: self.required_actions,
            recommendations: self.recommendations,
        }
    }
}

/// Validates wills against a registry snapshot.
///
/// Cheap to clone; the snapshot is shared.
#[derive(Debug, Clone)]
pub struct ComplianceValidator {
    registry: Arc<Registry>,
}

impl ComplianceValidator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// A validator over the built-in registry.
    pub fn builtin() -> Result<Self, ComplianceError> {
        Ok(Self::new(Registry::builtin()?))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validate `will` against the rules of `jurisdiction`.
    ///
    /// # Errors
    ///
    /// [`ComplianceError::InvalidJurisdictionCode`] for a malformed code,
    /// [`ComplianceError::UnknownJurisdiction`] when the registry has no
    /// entry. A non-compliant will is never an error.
    pub fn validate(
        &self,
        will: &WillDocument,
        jurisdiction: &str,
    ) -> Result<ComplianceReport, ComplianceError> {
        let requirements = self.registry.lookup(jurisdiction)?;
        let report = check(will, requirements);
        tracing::debug!(
            jurisdiction = %jurisdiction.trim().to_ascii_uppercase(),
            compliant = report.compliant,
            violations = report.violations.len(),
            warnings = report.warnings.len(),
            "compliance report produced"
        );
        Ok(report)
    }
}

/// Validate against the built-in registry.
pub fn validate_compliance(
    will: &WillDocument,
    jurisdiction: &str,
) -> Result<ComplianceReport, ComplianceError> {
    ComplianceValidator::builtin()?.validate(will, jurisdiction)
}

/// Run every check against one set of requirements.
pub fn check(will: &WillDocument, req: &StateRequirements) -> ComplianceReport {
    let mut report = ReportBuilder::default();
    let name = req.jurisdiction_name.as_str();
    let witness_rules = &req.witness_requirements;

    // 1. Witness count
    let required = witness_rules.minimum_witnesses as usize;
    let provided = will.witnesses.len();
    if provided < required {
        if provided == 0 {
            report.violation(
                format!("No witnesses specified; {required} required in {name}"),
                format!("Add {required} more witness(es)"),
            );
        } else {
            report.violation(
                format!("Insufficient witnesses: {provided} provided, {required} required"),
                format!("Add {} more witness(es)", required - provided),
            );
        }
    }

    // 2. Witness age
    let min_age = witness_rules.witness_minimum_age;
    for (i, witness) in will.witnesses.iter().enumerate() {
        if witness.age.is_some_and(|age| age < min_age) {
            let n = i + 1;
            report.violation(
                format!("Witness {n} is under the required age of {min_age}"),
                format!("Replace witness {n} with a witness at least {min_age} years old"),
            );
        }
    }

    // 3. Beneficiary witnesses
    if req.disqualifies_beneficiaries() {
        let beneficiary_emails: BTreeSet<String> = will
            .beneficiaries
            .iter()
            .filter_map(|b| normalized_email(b.email.as_deref()))
            .collect();
        for (i, witness) in will.witnesses.iter().enumerate() {
            let is_beneficiary = normalized_email(witness.email.as_deref())
                .is_some_and(|email| beneficiary_emails.contains(&email));
            if is_beneficiary {
                let n = i + 1;
                report.violation(
                    format!("Witness {n} cannot be a beneficiary in {name}"),
                    format!("Replace witness {n} with a non-beneficiary witness"),
                );
            }
        }
    }

    // 4. Notarization
    if witness_rules.notarization_required && !will.notarized {
        report.violation(
            format!("Notarization required in {name}"),
            "Have the will notarized".to_string(),
        );
    }

    // 5. Signature
    if !will.testator_signature_present {
        report.violation(
            "Testator signature required".to_string(),
            "Sign the will".to_string(),
        );
    }

    // 6. Holographic-will eligibility
    if will.is_holographic {
        if !req.holographic_will.allowed {
            report.violation(
                format!("Holographic wills not recognized in {name}"),
                format!(
                    "Create a typed will executed with {} witnesses",
                    witness_rules.minimum_witnesses
                ),
            );
        } else if req.requires(HolographicCondition::EntirelyHandwritten)
            && !will.entirely_handwritten
        {
            report.violation(
                format!("Holographic will must be entirely handwritten by the testator in {name}"),
                "Rewrite the will entirely in the testator's handwriting or execute a typed, witnessed will"
                    .to_string(),
            );
        }
    }

    // 7. Restriction advisories
    let married = will.personal_info.is_married();
    for tag in &req.restrictions {
        match tag {
            RestrictionTag::HomesteadExemption { cap_dollars } if will.real_estate_owned => {
                let cap = cap_dollars
                    .map(|cap| format!(" (exemption capped at {})", format_dollars(cap)))
                    .unwrap_or_default();
                report.advisory(
                    format!(
                        "{name} has homestead exemption rules that may affect real estate distribution{cap}"
                    ),
                    "Review homestead exemption implications".to_string(),
                );
            }
            RestrictionTag::HomesteadDeviseRestriction if will.real_estate_owned => {
                report.advisory(
                    format!(
                        "{name} restricts devise of a homestead when survived by a spouse or minor child"
                    ),
                    format!(
                        "Confirm the residence can be devised as intended under {name} homestead rules"
                    ),
                );
            }
            RestrictionTag::CommunityProperty { opt_in } if married => {
                let warning = if *opt_in {
                    format!(
                        "{name} allows spouses to opt into community property - any community property agreement affects property distribution"
                    )
                } else {
                    format!("{name} is a community property state - this affects property distribution")
                };
                report.advisory(warning, "Review community property laws with spouse".to_string());
            }
            RestrictionTag::ElectiveShare {
                fraction,
                minimum_dollars,
                augmented_estate,
            } if married => {
                let estate = if *augmented_estate {
                    "augmented estate"
                } else {
                    "estate"
                };
                let minimum = minimum_dollars
                    .map(|m| format!(", minimum {}", format_dollars(m)))
                    .unwrap_or_default();
                report.advisory(
                    format!(
                        "Surviving spouse has elective share rights in {name} ({fraction} of the {estate}{minimum})"
                    ),
                    "Consider spousal elective share implications".to_string(),
                );
            }
            RestrictionTag::LifetimeTransferElection if married => {
                report.warnings.push(format!(
                    "{name} counts certain lifetime transfers toward the surviving spouse's elective share"
                ));
            }
            RestrictionTag::HomesteadExemption { .. }
            | RestrictionTag::HomesteadDeviseRestriction
            | RestrictionTag::CommunityProperty { .. }
            | RestrictionTag::ElectiveShare { .. }
            | RestrictionTag::LifetimeTransferElection
            | RestrictionTag::StatutoryWillForm
            | RestrictionTag::IndependentAdministration => {}
        }
    }

    // 8. Self-proving affidavit
    if witness_rules.self_proving_affidavit_supported && !will.self_proving_affidavit_attached {
        report.recommendations.push(
            "Consider adding a self-proving affidavit to simplify the probate process".to_string(),
        );
    }

    // 9. Closing recommendations
    report
        .recommendations
        .push(format!("Review will compliance with {name} law"));
    report
        .recommendations
        .push("Consider consulting a local estate planning attorney".to_string());

    report.finish()
}

/// Whole dollars with thousands separators, e.g. `$184,500`.
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
