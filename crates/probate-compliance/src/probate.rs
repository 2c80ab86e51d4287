//! # Probate Avoidance
//!
//! Derives the probate-avoidance strategies available in a jurisdiction
//! from its registry entry: the universal non-probate transfer devices,
//! plus any statutory short-form procedures, community property
//! survivorship, and homestead limitations the entry records.

use serde::{Deserialize, Serialize};

use probate_core::ProbateAlternativeKind;
use probate_pack::{Registry, StateRequirements};

use crate::error::ComplianceError;
use crate::validator::format_dollars;

/// Transfer devices that bypass probate in every US jurisdiction.
pub const UNIVERSAL_STRATEGIES: [&str; 5] = [
    "Revocable living trust",
    "Joint tenancy with right of survivorship",
    "Payable-on-death (POD) bank accounts",
    "Transfer-on-death (TOD) securities registration",
    "Beneficiary designations on life insurance and retirement accounts",
];

/// Strategies, their preconditions, and caveats for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbateAvoidancePlan {
    pub strategies: Vec<String>,
    /// Conditions a strategy depends on.
    pub requirements: Vec<String>,
    pub limitations: Vec<String>,
}

/// Build the probate-avoidance plan for one set of requirements.
pub fn probate_avoidance(req: &StateRequirements) -> ProbateAvoidancePlan {
    let mut plan = ProbateAvoidancePlan {
        strategies: UNIVERSAL_STRATEGIES.iter().map(|s| s.to_string()).collect(),
        requirements: Vec::new(),
        limitations: Vec::new(),
    };

    for alt in &req.probate_alternatives {
        let line = match alt.threshold_dollars {
            Some(limit) => format!("{} for estates up to {}", alt.kind, format_dollars(limit)),
            None => alt.kind.to_string(),
        };
        plan.strategies.push(line);
        if alt.kind == ProbateAlternativeKind::MunimentOfTitle {
            plan.requirements
                .push("No unpaid debts except those secured by real estate".to_string());
        }
    }

    if let Some(opt_in) = req.community_property() {
        plan.strategies
            .push("Community property with right of survivorship".to_string());
        if opt_in {
            plan.requirements.push(format!(
                "Spouses must elect community property treatment by written agreement in {}",
                req.jurisdiction_name
            ));
        }
        plan.limitations.push(
            "Community property survivorship requires a written agreement signed by both spouses"
                .to_string(),
        );
    }

    if req.has_homestead() {
        plan.limitations.push(format!(
            "Homestead property in {} may pass outside the will and is subject to special rules",
            req.jurisdiction_name
        ));
    }

    plan
}

/// Probate-avoidance plan for a raw jurisdiction code.
///
/// Uses the same error taxonomy as compliance validation.
pub fn probate_avoidance_for(
    registry: &Registry,
    jurisdiction: &str,
) -> Result<ProbateAvoidancePlan, ComplianceError> {
    let req = registry.lookup(jurisdiction)?;
    Ok(probate_avoidance(req))
}
