//! Witness execution instructions derived from a registry entry.

use probate_core::DisqualifiedWitnessRole;
use probate_pack::{Registry, StateRequirements};

use crate::error::TemplateError;

/// Ordered steps for executing a will in the jurisdiction.
pub fn witness_instructions(req: &StateRequirements) -> Vec<String> {
    let rules = &req.witness_requirements;
    let name = &req.jurisdiction_name;
    let mut steps = Vec::new();

    if rules.minimum_witnesses == 0 {
        steps.push(format!("Sign the will; {name} does not require attesting witnesses"));
    } else {
        steps.push(format!(
            "Sign the will in the presence of at least {} witness(es)",
            rules.minimum_witnesses
        ));
        steps.push(format!(
            "Each witness must be at least {} years old",
            rules.witness_minimum_age
        ));
    }

    for role in &rules.disqualified_witness_roles {
        steps.push(
            match role {
                DisqualifiedWitnessRole::Beneficiary => {
                    "Witnesses must not be beneficiaries under the will"
                }
                DisqualifiedWitnessRole::SpouseOfBeneficiary => {
                    "Witnesses must not be spouses of beneficiaries"
                }
                DisqualifiedWitnessRole::InterestedParty => {
                    "Witnesses must not be beneficiaries or have any financial interest in the will"
                }
            }
            .to_string(),
        );
    }

    if rules.notarization_required {
        steps.push(format!(
            "Sign before a notary public; {name} requires notarization"
        ));
    }

    if rules.self_proving_affidavit_supported {
        steps.push(
            "Have the testator and witnesses sign a self-proving affidavit before a notary"
                .to_string(),
        );
    }

    if req.holographic_will.allowed && !req.holographic_will.conditions.is_empty() {
        let conditions: Vec<String> = req
            .holographic_will
            .conditions
            .iter()
            .map(ToString::to_string)
            .collect();
        steps.push(format!(
            "{name} also accepts an unwitnessed handwritten will that is {}",
            conditions.join(", ")
        ));
    }

    steps.push("The testator and all witnesses should sign in the same session".to_string());
    steps
}

/// Witness instructions for a raw jurisdiction code.
pub fn witness_instructions_for(
    registry: &Registry,
    jurisdiction: &str,
) -> Result<Vec<String>, TemplateError> {
    Ok(witness_instructions(registry.lookup(jurisdiction)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(code: &str) -> Vec<String> {
        let registry = Registry::builtin().unwrap();
        witness_instructions_for(&registry, code).unwrap()
    }

    #[test]
    fn california_steps() {
        assert_eq!(
            steps("CA"),
            vec![
                "Sign the will in the presence of at least 2 witness(es)",
                "Each witness must be at least 18 years old",
                "Witnesses must not be beneficiaries under the will",
                "Witnesses must not be beneficiaries or have any financial interest in the will",
                "Have the testator and witnesses sign a self-proving affidavit before a notary",
                "California also accepts an unwitnessed handwritten will that is material portions in the testator's handwriting, signed by the testator",
                "The testator and all witnesses should sign in the same session",
            ]
        );
    }

    #[test]
    fn louisiana_requires_notary() {
        let s = steps("LA");
        assert!(s.contains(&"Sign before a notary public; Louisiana requires notarization".to_string()));
        assert!(s.contains(&"Each witness must be at least 16 years old".to_string()));
    }

    #[test]
    fn maryland_has_no_affidavit_or_holographic_step() {
        let s = steps("MD");
        assert!(!s.iter().any(|l| l.contains("self-proving")));
        assert!(!s.iter().any(|l| l.contains("handwritten")));
        assert_eq!(
            s.last().map(String::as_str),
            Some("The testator and all witnesses should sign in the same session")
        );
    }

    #[test]
    fn unknown_code() {
        let registry = Registry::builtin().unwrap();
        assert!(matches!(
            witness_instructions_for(&registry, "ZZ"),
            Err(TemplateError::UnknownJurisdiction { .. })
        ));
    }
}
