//! Read-only jurisdiction queries: `probate requirements`,
//! `probate strategies`, and `probate instructions`.

use anyhow::Result;
use clap::Args;

use probate_compliance::validator::format_dollars;
use probate_compliance::{probate_avoidance, ProbateAvoidancePlan};
use probate_core::RestrictionTag;
use probate_pack::StateRequirements;
use probate_template::witness_instructions;

use crate::config::OutputFormat;
use crate::{push_section, Context};

/// Arguments shared by the single-jurisdiction queries.
#[derive(Args, Debug)]
pub struct JurisdictionArgs {
    /// Two-letter jurisdiction code (e.g. CA, tx).
    pub code: String,
}

// ---------------------------------------------------------------------------
// requirements
// ---------------------------------------------------------------------------

/// Execute `probate requirements`.
pub fn run_requirements(args: &JurisdictionArgs, ctx: &Context) -> Result<u8> {
    let req = ctx.registry.lookup(&args.code)?;
    print!("{}", render_requirements(req, ctx.format)?);
    Ok(0)
}

/// Render one jurisdiction's requirements.
pub fn render_requirements(req: &StateRequirements, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return crate::to_json(req);
    }

    let w = &req.witness_requirements;
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut out = format!("{}\n", req.jurisdiction_name);
    if let Some(court) = &req.probate_court {
        out.push_str(&format!("Probate court: {court}\n"));
    }
    out.push_str(&format!(
        "Witnesses: {} (minimum age {})\n\
         Notarization required: {}\n\
         Self-proving affidavit: {}\n",
        w.minimum_witnesses,
        w.witness_minimum_age,
        yes_no(w.notarization_required),
        yes_no(w.self_proving_affidavit_supported),
    ));
    if !w.disqualified_witness_roles.is_empty() {
        let roles: Vec<String> = w
            .disqualified_witness_roles
            .iter()
            .map(ToString::to_string)
            .collect();
        out.push_str(&format!("Disqualified witnesses: {}\n", roles.join(", ")));
    }

    let holographic = if req.holographic_will.allowed {
        let conditions: Vec<String> = req
            .holographic_will
            .conditions
            .iter()
            .map(ToString::to_string)
            .collect();
        if conditions.is_empty() {
            "allowed".to_string()
        } else {
            format!("allowed if {}", conditions.join(", "))
        }
    } else {
        "not recognized".to_string()
    };
    out.push_str(&format!("Holographic wills: {holographic}\n"));

    let restrictions: Vec<String> = req.restrictions.iter().map(describe_restriction).collect();
    push_section(&mut out, "Restrictions", &restrictions);

    let alternatives: Vec<String> = req
        .probate_alternatives
        .iter()
        .map(|alt| match alt.threshold_dollars {
            Some(limit) => format!("{} (up to {})", alt.kind, format_dollars(limit)),
            None => alt.kind.to_string(),
        })
        .collect();
    push_section(&mut out, "Probate alternatives", &alternatives);
    push_section(&mut out, "Special rules", &req.special_rules);
    out.push_str(&format!("Last updated: {}\n", req.last_updated));
    Ok(out)
}

fn describe_restriction(tag: &RestrictionTag) -> String {
    match tag {
        RestrictionTag::CommunityProperty { opt_in: false } => "Community property".to_string(),
        RestrictionTag::CommunityProperty { opt_in: true } => {
            "Community property (opt-in by agreement)".to_string()
        }
        RestrictionTag::HomesteadExemption { cap_dollars } => match cap_dollars {
            Some(cap) => format!("Homestead exemption (capped at {})", format_dollars(*cap)),
            None => "Homestead exemption".to_string(),
        },
        RestrictionTag::HomesteadDeviseRestriction => "Homestead devise restriction".to_string(),
        RestrictionTag::ElectiveShare {
            fraction,
            minimum_dollars,
            augmented_estate,
        } => {
            let base = if *augmented_estate {
                "augmented estate"
            } else {
                "estate"
            };
            let minimum = minimum_dollars
                .map(|m| format!(", minimum {}", format_dollars(m)))
                .unwrap_or_default();
            format!("Elective share: {fraction} of the {base}{minimum}")
        }
        RestrictionTag::LifetimeTransferElection => {
            "Elective share reaches lifetime transfers".to_string()
        }
        RestrictionTag::StatutoryWillForm => "Statutory will form available".to_string(),
        RestrictionTag::IndependentAdministration => {
            "Independent administration available".to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// strategies
// ---------------------------------------------------------------------------

/// Execute `probate strategies`.
pub fn run_strategies(args: &JurisdictionArgs, ctx: &Context) -> Result<u8> {
    let req = ctx.registry.lookup(&args.code)?;
    print!("{}", render_strategies(req, &probate_avoidance(req), ctx.format)?);
    Ok(0)
}

/// Render a probate-avoidance plan.
pub fn render_strategies(
    req: &StateRequirements,
    plan: &ProbateAvoidancePlan,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return crate::to_json(plan);
    }
    let mut out = format!("Probate avoidance in {}\n\n", req.jurisdiction_name);
    push_section(&mut out, "Strategies", &plan.strategies);
    push_section(&mut out, "Requirements", &plan.requirements);
    push_section(&mut out, "Limitations", &plan.limitations);
    Ok(out)
}

// ---------------------------------------------------------------------------
// instructions
// ---------------------------------------------------------------------------

/// Execute `probate instructions`.
pub fn run_instructions(args: &JurisdictionArgs, ctx: &Context) -> Result<u8> {
    let req = ctx.registry.lookup(&args.code)?;
    print!("{}", render_instructions(req, ctx.format)?);
    Ok(0)
}

/// Render numbered witness execution steps.
pub fn render_instructions(req: &StateRequirements, format: OutputFormat) -> Result<String> {
    let steps = witness_instructions(req);
    if format == OutputFormat::Json {
        return crate::to_json(&steps);
    }
    let mut out = format!("Executing a will in {}\n\n", req.jurisdiction_name);
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("{:>2}. {step}\n", i + 1));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use probate_pack::Registry;

    fn req(code: &str) -> StateRequirements {
        Registry::builtin().unwrap().lookup(code).unwrap().clone()
    }

    #[test]
    fn requirements_text() {
        let out = render_requirements(&req("NY"), OutputFormat::Text).unwrap();
        assert!(out.starts_with("New York\nProbate court: Surrogate's Court\n"));
        assert!(out.contains("Witnesses: 2 (minimum age 18)\n"));
        assert!(out.contains("Disqualified witnesses: beneficiary, spouse of a beneficiary\n"));
        assert!(out.contains("Holographic wills: not recognized\n"));
        assert!(out.contains("  - Elective share: 1/3 of the estate, minimum $50,000\n"));
        assert!(out.ends_with("Last updated: 2024-01-20\n"));
    }

    #[test]
    fn requirements_json_is_registry_shape() {
        let out = render_requirements(&req("TX"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["jurisdictionName"], "Texas");
        assert_eq!(value["witnessRequirements"]["witnessMinimumAge"], 14);
    }

    #[test]
    fn strategies_text() {
        let texas = req("TX");
        let out = render_strategies(&texas, &probate_avoidance(&texas), OutputFormat::Text).unwrap();
        assert!(out.starts_with("Probate avoidance in Texas\n\nStrategies:\n  - Revocable living trust\n"));
        assert!(out.contains("Requirements:\n  - No unpaid debts except those secured by real estate\n"));
    }

    #[test]
    fn instructions_are_numbered() {
        let out = render_instructions(&req("CA"), OutputFormat::Text).unwrap();
        assert!(out.contains(" 1. Sign the will in the presence of at least 2 witness(es)\n"));
    }

    #[test]
    fn restriction_descriptions() {
        assert_eq!(
            describe_restriction(&RestrictionTag::HomesteadExemption {
                cap_dollars: Some(15_500)
            }),
            "Homestead exemption (capped at $15,500)"
        );
        assert_eq!(
            describe_restriction(&RestrictionTag::CommunityProperty { opt_in: true }),
            "Community property (opt-in by agreement)"
        );
    }
}
