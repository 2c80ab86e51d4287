//! # Will Document Model
//!
//! The draft will a caller submits for compliance validation, and the
//! personal information the template generator fills in.
//!
//! These types are owned by the caller and read-only to this workspace.
//! Field names serialize in camelCase; that naming is the JSON contract
//! host applications rely on. Boolean document-state flags default to
//! `false` when absent, and every personal-info field is optional.

use serde::{Deserialize, Serialize};

use crate::jurisdiction::JurisdictionCode;

/// Marital status of the testator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
    Single,
    Married,
    DomesticPartner,
    Divorced,
    Widowed,
    Separated,
}

impl MaritalStatus {
    /// Phrase completing the sentence "I am ...".
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::DomesticPartner => "in a registered domestic partnership",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Separated => "separated",
        }
    }
}

/// Gender of the testator. Only affects attestation pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Possessive pronoun used in the attestation clause.
    pub fn possessive(gender: Option<Self>) -> &'static str {
        match gender {
            Some(Self::Male) => "his",
            Some(Self::Female) => "her",
            Some(Self::Other) | None => "their",
        }
    }
}

/// Identifying details of the testator. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// ISO 8601 date, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Jurisdiction of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<JurisdictionCode>,
}

impl PersonalInfo {
    /// Whether the testator is married. Drives community-property and
    /// elective-share advisories.
    pub fn is_married(&self) -> bool {
        self.marital_status == Some(MaritalStatus::Married)
    }
}

/// A person who attests the testator's signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// A person or organization who takes under the will.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub share_percentage: f64,
}

/// A draft will submitted for compliance validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    /// Witnesses in signing order. Messages refer to them by 1-based
    /// position in this list.
    #[serde(default)]
    pub witnesses: Vec<Witness>,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    #[serde(default)]
    pub testator_signature_present: bool,
    #[serde(default)]
    pub notarized: bool,
    #[serde(default)]
    pub is_holographic: bool,
    #[serde(default)]
    pub entirely_handwritten: bool,
    #[serde(default)]
    pub self_proving_affidavit_attached: bool,
    #[serde(default)]
    pub real_estate_owned: bool,
}

/// Normalize an email for comparison: trimmed and lowercased, `None` when
/// blank.
pub fn normalized_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}
