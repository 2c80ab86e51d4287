//! # State Requirements
//!
//! The will-execution rules of one jurisdiction, as stored in the registry
//! data file. Field names serialize in camelCase and are exposed verbatim
//! to host applications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use probate_core::{
    DisqualifiedWitnessRole, HolographicCondition, ProbateAlternative, RestrictionTag,
};

/// Witnessing and attestation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessRequirements {
    /// Number of attesting witnesses a formal will needs.
    pub minimum_witnesses: u32,
    /// Minimum age, in years, of each attesting witness.
    pub witness_minimum_age: u32,
    pub notarization_required: bool,
    pub self_proving_affidavit_supported: bool,
    /// Relationships that disqualify a person from witnessing.
    #[serde(default)]
    pub disqualified_witness_roles: Vec<DisqualifiedWitnessRole>,
}

/// Whether an unwitnessed handwritten will is recognized, and on what terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolographicWillRules {
    pub allowed: bool,
    #[serde(default)]
    pub conditions: Vec<HolographicCondition>,
}

/// Complete will-execution requirements for one jurisdiction.
///
/// Entries are created once when the registry loads and never mutated;
/// legal updates produce a new registry snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRequirements {
    /// Display name, e.g. "California".
    pub jurisdiction_name: String,
    pub witness_requirements: WitnessRequirements,
    pub holographic_will: HolographicWillRules,
    #[serde(default)]
    pub restrictions: Vec<RestrictionTag>,
    #[serde(default)]
    pub probate_alternatives: Vec<ProbateAlternative>,
    /// Court with probate jurisdiction, for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probate_court: Option<String>,
    /// Informational notes with no effect on validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_rules: Vec<String>,
    /// Date the entry was last reviewed. Informational only.
    pub last_updated: NaiveDate,
}

impl StateRequirements {
    /// Whether a beneficiary is barred from witnessing. An interested-party
    /// bar covers beneficiaries too.
    pub fn disqualifies_beneficiaries(&self) -> bool {
        self.witness_requirements
            .disqualified_witness_roles
            .iter()
            .any(|role| {
                matches!(
                    role,
                    DisqualifiedWitnessRole::Beneficiary | DisqualifiedWitnessRole::InterestedParty
                )
            })
    }

    /// Whether a holographic will must satisfy `condition` here.
    pub fn requires(&self, condition: HolographicCondition) -> bool {
        self.holographic_will.conditions.contains(&condition)
    }

    /// The community property tag, if the jurisdiction has one. Yields the
    /// `opt_in` flag.
    pub fn community_property(&self) -> Option<bool> {
        self.restrictions.iter().find_map(|tag| match tag {
            RestrictionTag::CommunityProperty { opt_in } => Some(*opt_in),
            _ => None,
        })
    }

    /// Whether any homestead-related tag is present.
    pub fn has_homestead(&self) -> bool {
        self.restrictions.iter().any(RestrictionTag::relates_to_homestead)
    }
}
