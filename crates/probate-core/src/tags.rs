//! # Jurisdiction Tag Vocabularies
//!
//! Closed enums for the jurisdiction peculiarities the registry records:
//! restriction tags, holographic-will conditions, disqualified witness
//! roles, and probate alternatives.
//!
//! Every consumer matches on these exhaustively. Adding a variant forces the
//! validator and the template generator to decide what it means for them at
//! compile time.
//!
//! ## Serialized Form
//!
//! Tags serialize in kebab-case. Restrictions are internally tagged on
//! `kind`, so the registry data file reads:
//!
//! ```yaml
//! restrictions:
//!   - { kind: community-property }
//!   - { kind: homestead-exemption, capDollars: 150000 }
//!   - { kind: elective-share, fraction: "1/3", minimumDollars: 50000 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// ShareFraction
// ---------------------------------------------------------------------------

/// A statutory fraction of an estate, such as the spousal elective share.
///
/// Serialized as the string `"numerator/denominator"` so registry data
/// stays float-free and canonicalizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareFraction {
    numerator: u32,
    denominator: u32,
}

impl ShareFraction {
    /// Create a fraction in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidShareFraction`] for a zero
    /// numerator or denominator, or a fraction greater than one.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, ValidationError> {
        let input = format!("{numerator}/{denominator}");
        if denominator == 0 {
            return Err(ValidationError::InvalidShareFraction {
                input,
                reason: "denominator must be non-zero",
            });
        }
        if numerator == 0 {
            return Err(ValidationError::InvalidShareFraction {
                input,
                reason: "numerator must be non-zero",
            });
        }
        if numerator > denominator {
            return Err(ValidationError::InvalidShareFraction {
                input,
                reason: "fraction must not exceed one",
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The numerator.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// The denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }
}

impl std::fmt::Display for ShareFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl std::str::FromStr for ShareFraction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::InvalidShareFraction {
            input: s.to_string(),
            reason: "expected the form numerator/denominator",
        };
        let (num, den) = s.trim().split_once('/').ok_or_else(malformed)?;
        let num: u32 = num.trim().parse().map_err(|_| malformed())?;
        let den: u32 = den.trim().parse().map_err(|_| malformed())?;
        Self::new(num, den)
    }
}

impl Serialize for ShareFraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShareFraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// RestrictionTag
// ---------------------------------------------------------------------------

/// A jurisdiction peculiarity that affects how a will operates.
///
/// Consumed by the compliance validator (advisory warnings) and by the
/// template generator (optional clauses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RestrictionTag {
    /// Marital property acquired during marriage is owned in common.
    /// `opt_in` marks jurisdictions where spouses may elect the regime by
    /// agreement rather than having it by default.
    #[serde(rename_all = "camelCase")]
    CommunityProperty {
        #[serde(default)]
        opt_in: bool,
    },

    /// The primary residence is protected by a homestead exemption.
    #[serde(rename_all = "camelCase")]
    HomesteadExemption {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cap_dollars: Option<u64>,
    },

    /// A homestead cannot be freely devised when the testator is survived
    /// by a spouse or minor child.
    HomesteadDeviseRestriction,

    /// A surviving spouse may claim a statutory fraction of the estate
    /// regardless of the will's terms.
    #[serde(rename_all = "camelCase")]
    ElectiveShare {
        fraction: ShareFraction,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum_dollars: Option<u64>,
        #[serde(default)]
        augmented_estate: bool,
    },

    /// The elective share reaches certain lifetime (non-probate) transfers.
    LifetimeTransferElection,

    /// The legislature publishes a fill-in statutory will form.
    StatutoryWillForm,

    /// Independent (court-light) estate administration is available.
    IndependentAdministration,
}

impl RestrictionTag {
    /// The serialized `kind` of this tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::CommunityProperty { .. } => "community-property",
            Self::HomesteadExemption { .. } => "homestead-exemption",
            Self::HomesteadDeviseRestriction => "homestead-devise-restriction",
            Self::ElectiveShare { .. } => "elective-share",
            Self::LifetimeTransferElection => "lifetime-transfer-election",
            Self::StatutoryWillForm => "statutory-will-form",
            Self::IndependentAdministration => "independent-administration",
        }
    }

    /// Whether the tag concerns homestead protection of real estate.
    pub fn relates_to_homestead(&self) -> bool {
        matches!(
            self,
            Self::HomesteadExemption { .. } | Self::HomesteadDeviseRestriction
        )
    }

    /// Whether the tag concerns the community property regime.
    pub fn relates_to_community_property(&self) -> bool {
        matches!(self, Self::CommunityProperty { .. })
    }

    /// Whether the tag concerns the surviving spouse's elective share.
    pub fn relates_to_elective_share(&self) -> bool {
        matches!(
            self,
            Self::ElectiveShare { .. } | Self::LifetimeTransferElection
        )
    }
}

// ---------------------------------------------------------------------------
// Holographic conditions and witness roles
// ---------------------------------------------------------------------------

/// A requirement a holographic will must meet to be admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolographicCondition {
    /// The whole instrument is in the testator's handwriting.
    EntirelyHandwritten,
    /// Only the signature and material portions need be handwritten.
    MaterialPortionsHandwritten,
    /// The testator signed the instrument.
    SignedByTestator,
    /// The instrument bears a date.
    Dated,
}

impl std::fmt::Display for HolographicCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EntirelyHandwritten => "entirely in the testator's handwriting",
            Self::MaterialPortionsHandwritten => "material portions in the testator's handwriting",
            Self::SignedByTestator => "signed by the testator",
            Self::Dated => "dated",
        };
        f.write_str(s)
    }
}

/// A relationship that disqualifies a person from witnessing a will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisqualifiedWitnessRole {
    /// A person who takes under the will.
    Beneficiary,
    /// The spouse of a person who takes under the will.
    SpouseOfBeneficiary,
    /// Any person with a financial interest in the will. Includes
    /// beneficiaries.
    InterestedParty,
}

impl std::fmt::Display for DisqualifiedWitnessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Beneficiary => "beneficiary",
            Self::SpouseOfBeneficiary => "spouse of a beneficiary",
            Self::InterestedParty => "interested party",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Probate alternatives
// ---------------------------------------------------------------------------

/// A procedure that lets an estate bypass full probate administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbateAlternativeKind {
    /// Heirs collect assets by sworn affidavit.
    SmallEstateAffidavit,
    /// Streamlined court distribution without a personal representative.
    SummaryAdministration,
    /// The will is probated as a muniment of title, transferring property
    /// without administration.
    MunimentOfTitle,
    /// Abbreviated court procedure for modest estates.
    SimplifiedProbate,
    /// A relative administers the estate by voluntary filing.
    VoluntaryAdministration,
}

impl std::fmt::Display for ProbateAlternativeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SmallEstateAffidavit => "Small Estate Affidavit",
            Self::SummaryAdministration => "Summary Administration",
            Self::MunimentOfTitle => "Muniment of Title",
            Self::SimplifiedProbate => "Simplified Probate",
            Self::VoluntaryAdministration => "Voluntary Administration",
        };
        f.write_str(s)
    }
}

/// A named probate alternative with its estate-value ceiling, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbateAlternative {
    /// Which procedure.
    pub kind: ProbateAlternativeKind,
    /// Maximum estate value in whole dollars, where the statute sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_dollars: Option<u64>,
}
