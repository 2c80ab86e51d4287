//! # Legal Updates
//!
//! Merges caller-supplied legal updates into a new registry snapshot.
//!
//! Fetching updates is the host's job; this module only merges them. The
//! input registry is never mutated. Updates apply in effective-date order
//! (stable for equal dates), so a later replacement supersedes an earlier
//! one for the same jurisdiction.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use probate_core::JurisdictionCode;

use crate::error::RegistryError;
use crate::registry::{check_entry, Registry};
use crate::requirements::StateRequirements;

/// How much a legal change matters to existing wills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateSeverity {
    Low,
    Medium,
    High,
}

/// A change in one jurisdiction's law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalUpdate {
    pub jurisdiction: JurisdictionCode,
    pub severity: UpdateSeverity,
    pub description: String,
    pub effective_date: NaiveDate,
    /// Full replacement requirements, when the change alters the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<StateRequirements>,
}

/// Update status of one jurisdiction after a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub has_updates: bool,
    /// Latest of the entry's review date and any applied effective date.
    pub last_updated: NaiveDate,
    /// Descriptions of high-severity updates.
    pub critical_changes: Vec<String>,
}

/// Per-jurisdiction status for every entry of the merged snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub jurisdictions: BTreeMap<JurisdictionCode, UpdateStatus>,
}

impl UpdateSummary {
    /// Jurisdictions that received at least one update.
    pub fn with_updates(&self) -> impl Iterator<Item = &JurisdictionCode> {
        self.jurisdictions
            .iter()
            .filter(|(_, status)| status.has_updates)
            .map(|(code, _)| code)
    }

    /// Whether any applied update was high severity.
    pub fn has_critical_changes(&self) -> bool {
        self.jurisdictions
            .values()
            .any(|status| !status.critical_changes.is_empty())
    }
}

impl Registry {
    /// Merge `updates` into a new snapshot.
    ///
    /// Replacement requirements must pass entry validation. An update for a
    /// jurisdiction the registry does not hold, without replacement data,
    /// is skipped with a warning.
    pub fn apply_updates(
        &self,
        updates: &[LegalUpdate],
    ) -> Result<(Registry, UpdateSummary), RegistryError> {
        let mut ordered: Vec<&LegalUpdate> = updates.iter().collect();
        ordered.sort_by_key(|u| u.effective_date);

        let mut entries = self.clone().into_entries();
        let mut applied: BTreeMap<JurisdictionCode, Vec<&LegalUpdate>> = BTreeMap::new();

        // Codes present once every replacement lands, so an annotation dated
        // before the replacement that adds its jurisdiction is kept.
        let known: BTreeSet<&JurisdictionCode> = self
            .codes()
            .chain(
                updates
                    .iter()
                    .filter(|u| u.requirements.is_some())
                    .map(|u| &u.jurisdiction),
            )
            .collect();

        for update in ordered {
            let code = &update.jurisdiction;
            match &update.requirements {
                Some(replacement) => {
                    check_entry(code, replacement)?;
                    entries.insert(code.clone(), replacement.clone());
                }
                None if !known.contains(code) => {
                    tracing::warn!(
                        jurisdiction = %code,
                        "skipping legal update for jurisdiction with no registry entry"
                    );
                    continue;
                }
                None => {}
            }
            applied.entry(code.clone()).or_default().push(update);
        }

        let jurisdictions = entries
            .iter()
            .map(|(code, req)| {
                let updates = applied.get(code).map(Vec::as_slice).unwrap_or_default();
                (code.clone(), status_for(req, updates))
            })
            .collect();

        let summary = UpdateSummary { jurisdictions };
        tracing::info!(
            supplied = updates.len(),
            updated = summary.with_updates().count(),
            critical = summary.has_critical_changes(),
            "merged legal updates"
        );
        Ok((Registry::from_entries(entries)?, summary))
    }
}

fn status_for(req: &StateRequirements, updates: &[&LegalUpdate]) -> UpdateStatus {
    let last_updated = updates
        .iter()
        .map(|u| u.effective_date)
        .fold(req.last_updated, std::cmp::max);
    UpdateStatus {
        has_updates: !updates.is_empty(),
        last_updated,
        critical_changes: updates
            .iter()
            .filter(|u| u.severity == UpdateSeverity::High)
            .map(|u| u.description.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
jurisdictions:
  QQ:
    jurisdictionName: Testland
    witnessRequirements:
      minimumWitnesses: 2
      witnessMinimumAge: 18
      notarizationRequired: false
      selfProvingAffidavitSupported: true
    holographicWill: { allowed: false }
    lastUpdated: "2024-01-15"
  RR:
    jurisdictionName: Otherland
    witnessRequirements:
      minimumWitnesses: 2
      witnessMinimumAge: 18
      notarizationRequired: false
      selfProvingAffidavitSupported: true
    holographicWill: { allowed: false }
    lastUpdated: "2024-01-15"
"#;

    fn code(s: &str) -> JurisdictionCode {
        JurisdictionCode::new(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn update(jurisdiction: &str, severity: UpdateSeverity, effective: NaiveDate) -> LegalUpdate {
        LegalUpdate {
            jurisdiction: code(jurisdiction),
            severity,
            description: format!("{jurisdiction} change"),
            effective_date: effective,
            requirements: None,
        }
    }

    #[test]
    fn no_updates_leaves_snapshot_identical() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let (merged, summary) = registry.apply_updates(&[]).unwrap();
        assert_eq!(merged, registry);
        assert_eq!(summary.jurisdictions.len(), 2);
        assert_eq!(summary.with_updates().count(), 0);
        assert!(!summary.has_critical_changes());
    }

    #[test]
    fn informational_update_marks_status() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let (merged, summary) = registry
            .apply_updates(&[update("QQ", UpdateSeverity::High, date(2024, 6, 1))])
            .unwrap();
        assert_eq!(merged, registry);
        let status = &summary.jurisdictions[&code("QQ")];
        assert!(status.has_updates);
        assert_eq!(status.last_updated, date(2024, 6, 1));
        assert_eq!(status.critical_changes, vec!["QQ change"]);
        assert!(!summary.jurisdictions[&code("RR")].has_updates);
    }

    #[test]
    fn older_effective_date_keeps_entry_date() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let (_, summary) = registry
            .apply_updates(&[update("QQ", UpdateSeverity::Low, date(2020, 1, 1))])
            .unwrap();
        let status = &summary.jurisdictions[&code("QQ")];
        assert_eq!(status.last_updated, date(2024, 1, 15));
        assert!(status.critical_changes.is_empty());
    }

    #[test]
    fn replacement_supersedes_entry_without_mutating_input() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let mut replacement = registry.lookup("QQ").unwrap().clone();
        replacement.witness_requirements.minimum_witnesses = 3;

        let mut u = update("QQ", UpdateSeverity::Medium, date(2024, 7, 1));
        u.requirements = Some(replacement);
        let (merged, _) = registry.apply_updates(&[u]).unwrap();

        assert_eq!(
            merged.lookup("QQ").unwrap().witness_requirements.minimum_witnesses,
            3
        );
        assert_eq!(
            registry.lookup("QQ").unwrap().witness_requirements.minimum_witnesses,
            2
        );
        assert_ne!(merged.digest().unwrap(), registry.digest().unwrap());
    }

    #[test]
    fn later_replacement_wins_regardless_of_input_order() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let base = registry.lookup("QQ").unwrap().clone();

        let mut early = update("QQ", UpdateSeverity::Low, date(2024, 3, 1));
        let mut early_req = base.clone();
        early_req.witness_requirements.witness_minimum_age = 19;
        early.requirements = Some(early_req);

        let mut late = update("QQ", UpdateSeverity::Low, date(2024, 9, 1));
        let mut late_req = base;
        late_req.witness_requirements.witness_minimum_age = 21;
        late.requirements = Some(late_req);

        let (merged, _) = registry.apply_updates(&[late, early]).unwrap();
        assert_eq!(
            merged.lookup("QQ").unwrap().witness_requirements.witness_minimum_age,
            21
        );
    }

    #[test]
    fn unknown_jurisdiction_without_data_is_skipped() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let (merged, summary) = registry
            .apply_updates(&[update("ZZ", UpdateSeverity::High, date(2024, 6, 1))])
            .unwrap();
        assert_eq!(merged.len(), 2);
        assert!(!summary.jurisdictions.contains_key(&code("ZZ")));
        assert!(!summary.has_critical_changes());
    }

    #[test]
    fn unknown_jurisdiction_with_data_is_added() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let mut req = registry.lookup("QQ").unwrap().clone();
        req.jurisdiction_name = "Newland".into();
        let mut u = update("ZZ", UpdateSeverity::Low, date(2024, 6, 1));
        u.requirements = Some(req);
        let (merged, summary) = registry.apply_updates(&[u]).unwrap();
        assert_eq!(merged.lookup("ZZ").unwrap().jurisdiction_name, "Newland");
        assert!(summary.jurisdictions[&code("ZZ")].has_updates);
    }

    #[test]
    fn annotation_before_adding_replacement_is_kept() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let mut req = registry.lookup("QQ").unwrap().clone();
        req.jurisdiction_name = "Newland".into();

        let mut critical = update("ZZ", UpdateSeverity::High, date(2024, 1, 1));
        critical.description = "Remote witnessing repealed".into();
        let mut added = update("ZZ", UpdateSeverity::Low, date(2024, 6, 1));
        added.requirements = Some(req);

        let (merged, summary) = registry.apply_updates(&[critical, added]).unwrap();
        assert!(merged.lookup("ZZ").is_ok());
        let status = &summary.jurisdictions[&code("ZZ")];
        assert_eq!(status.critical_changes, vec!["Remote witnessing repealed"]);
        assert_eq!(status.last_updated, date(2024, 6, 1));
        assert!(summary.has_critical_changes());
    }

    #[test]
    fn invalid_replacement_is_rejected() {
        let registry = Registry::from_yaml_str(BASE).unwrap();
        let mut req = registry.lookup("QQ").unwrap().clone();
        req.jurisdiction_name = String::new();
        let mut u = update("QQ", UpdateSeverity::Low, date(2024, 6, 1));
        u.requirements = Some(req);
        assert!(matches!(
            registry.apply_updates(&[u]),
            Err(RegistryError::InvalidData { .. })
        ));
    }

    #[test]
    fn update_parses_from_json() {
        let json = r#"{
            "jurisdiction": "qq",
            "severity": "high",
            "description": "Remote witnessing authorised",
            "effectiveDate": "2025-01-01"
        }"#;
        let parsed: LegalUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.jurisdiction.as_str(), "QQ");
        assert_eq!(parsed.severity, UpdateSeverity::High);
        assert!(parsed.requirements.is_none());
    }
}
