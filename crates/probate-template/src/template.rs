//! # Will Template Generator
//!
//! Builds a fillable plain-text will for a jurisdiction. Mandatory
//! sections are always present; optional clauses are inserted from the
//! registry entry:
//!
//! | Clause | Inserted when |
//! |---|---|
//! | Community property declaration | a community-property tag is present |
//! | Homestead declaration | a homestead tag is present |
//! | Self-proving affidavit | `selfProvingAffidavitSupported` |
//!
//! Missing personal-info fields become bracketed placeholders such as
//! `[FULL_NAME]`. The placeholder list is collected from the finished text,
//! so it always matches the tokens actually present.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use probate_core::{Gender, PersonalInfo};
use probate_pack::{Registry, StateRequirements};

use crate::error::TemplateError;

/// Blank for a date the testator fills in at signing.
const DATE_BLANK: &str = "_____ day of __________, ______";
const SIGNATURE_LINE: &str = "______________________________";

/// Named sections of a generated will, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseName {
    Revocation,
    Identification,
    CommunityPropertyDeclaration,
    HomesteadDeclaration,
    WitnessAttestation,
    SelfProvingAffidavit,
}

impl ClauseName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revocation => "revocation",
            Self::Identification => "identification",
            Self::CommunityPropertyDeclaration => "community-property-declaration",
            Self::HomesteadDeclaration => "homestead-declaration",
            Self::WitnessAttestation => "witness-attestation",
            Self::SelfProvingAffidavit => "self-proving-affidavit",
        }
    }

    /// Whether every generated will carries this clause.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Self::Revocation | Self::Identification | Self::WitnessAttestation
        )
    }
}

impl std::fmt::Display for ClauseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated will template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillTemplate {
    pub template_text: String,
    /// Every bracketed token in `template_text`, in order of first
    /// appearance.
    pub placeholder_list: Vec<String>,
    /// Every clause in the text, mandatory ones included, in document
    /// order.
    pub included_clause_names: Vec<ClauseName>,
}

/// Generates will templates from a registry snapshot.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    registry: Arc<Registry>,
}

impl TemplateGenerator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self::new(Registry::builtin()?))
    }

    /// Generate a template for `jurisdiction`.
    ///
    /// # Errors
    ///
    /// [`TemplateError::InvalidJurisdictionCode`] for a malformed code,
    /// [`TemplateError::UnknownJurisdiction`] when the registry has no entry.
    pub fn generate(
        &self,
        info: &PersonalInfo,
        jurisdiction: &str,
    ) -> Result<WillTemplate, TemplateError> {
        let req = self.registry.lookup(jurisdiction)?;
        let template = render(info, req);
        tracing::debug!(
            jurisdiction = %jurisdiction.trim().to_ascii_uppercase(),
            clauses = template.included_clause_names.len(),
            placeholders = template.placeholder_list.len(),
            "will template generated"
        );
        Ok(template)
    }
}

/// Generate a template against the built-in registry.
pub fn generate_template(
    info: &PersonalInfo,
    jurisdiction: &str,
) -> Result<WillTemplate, TemplateError> {
    TemplateGenerator::builtin()?.generate(info, jurisdiction)
}

/// Render a template for one set of requirements.
pub fn render(info: &PersonalInfo, req: &StateRequirements) -> WillTemplate {
    let fields = Fields::from_info(info);
    let name = req.jurisdiction_name.as_str();
    let witnesses = req.witness_requirements.minimum_witnesses;

    let mut sections = vec![format!(
        "LAST WILL AND TESTAMENT\nOF\n{}\n\nUNDER THE LAWS OF {}",
        fields.full_name,
        name.to_uppercase()
    )];
    let mut clauses = Vec::new();
    let mut article = 0u32;
    let mut next_article = || {
        article += 1;
        to_roman(article)
    };

    sections.push(format!(
        "ARTICLE {} - REVOCATION\n\
         I, {}, residing at {}, {}, {}, declare this to be my last will and \
         testament, and I revoke all wills and codicils previously made by me.",
        next_article(),
        fields.full_name,
        fields.address,
        fields.city,
        name
    ));
    clauses.push(ClauseName::Revocation);

    sections.push(format!(
        "ARTICLE {} - IDENTIFICATION\n\
         I am {} years of age and of sound mind. I am {}. This will is made \
         under and shall be governed by the laws of {}.",
        next_article(),
        fields.age,
        fields.marital_status,
        name
    ));
    clauses.push(ClauseName::Identification);

    if let Some(opt_in) = req.community_property() {
        let body = if opt_in {
            format!(
                "{name} permits spouses to hold property as community property by \
                 written agreement. To the extent my spouse and I hold property under \
                 such an agreement, this will disposes only of my one-half interest in \
                 that property."
            )
        } else {
            format!(
                "I declare that {name} is a community property jurisdiction. This will \
                 disposes of my separate property and of my one-half interest in our \
                 community property only, and I confirm my spouse's one-half interest \
                 in our community property."
            )
        };
        sections.push(format!(
            "ARTICLE {} - COMMUNITY PROPERTY\n{body}",
            next_article()
        ));
        clauses.push(ClauseName::CommunityPropertyDeclaration);
    }

    if req.has_homestead() {
        sections.push(format!(
            "ARTICLE {} - HOMESTEAD\n\
             My residence, described as [HOMESTEAD_PROPERTY_DESCRIPTION], may be \
             protected homestead under the laws of {name}. Any gift of that residence \
             under this will takes effect only to the extent permitted by the \
             homestead laws of {name}.",
            next_article()
        ));
        clauses.push(ClauseName::HomesteadDeclaration);
    }

    sections.push(attestation(&fields, req));
    clauses.push(ClauseName::WitnessAttestation);

    if req.witness_requirements.self_proving_affidavit_supported {
        sections.push(self_proving_affidavit(&fields, name, witnesses));
        clauses.push(ClauseName::SelfProvingAffidavit);
    }

    let template_text = sections.join("\n\n") + "\n";
    WillTemplate {
        placeholder_list: collect_placeholders(&template_text),
        template_text,
        included_clause_names: clauses,
    }
}

/// Personal-info values or their placeholders.
struct Fields {
    full_name: String,
    address: String,
    city: String,
    county: String,
    age: String,
    marital_status: String,
    pronoun: &'static str,
}

impl Fields {
    fn from_info(info: &PersonalInfo) -> Self {
        Self {
            full_name: text_or(info.full_name.as_deref(), "FULL_NAME"),
            address: text_or(info.address.as_deref(), "ADDRESS"),
            city: text_or(info.city.as_deref(), "CITY"),
            county: text_or(info.county.as_deref(), "COUNTY"),
            age: info
                .age
                .map(|a| a.to_string())
                .unwrap_or_else(|| placeholder("AGE")),
            marital_status: info
                .marital_status
                .map(|m| m.describe().to_string())
                .unwrap_or_else(|| placeholder("MARITAL_STATUS")),
            pronoun: Gender::possessive(info.gender),
        }
    }
}

fn placeholder(token: &str) -> String {
    format!("[{token}]")
}

/// A supplied value, or the placeholder when blank. Square brackets in
/// supplied text become parentheses so only generated tokens read as
/// placeholders.
fn text_or(value: Option<&str>, token: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.replace('[', "(").replace(']', ")"),
        _ => placeholder(token),
    }
}

fn witness_token(n: u32, field: &str) -> String {
    placeholder(&format!("WITNESS_{n}_{field}"))
}

fn attestation(fields: &Fields, req: &StateRequirements) -> String {
    let witnesses = req.witness_requirements.minimum_witnesses;
    let pronoun = fields.pronoun;
    let mut block = format!(
        "IN WITNESS WHEREOF, I have signed this will on the {DATE_BLANK}.\n\n\
         {SIGNATURE_LINE}\n{}, Testator",
        fields.full_name
    );

    if witnesses == 0 {
        block.push_str(&format!(
            "\n\nATTESTATION\n{} does not require attesting witnesses for this will.",
            req.jurisdiction_name
        ));
        return block;
    }

    block.push_str(&format!(
        "\n\nATTESTATION\n\
         The foregoing instrument was signed by {} as {pronoun} last will in our \
         presence, and we, at {pronoun} request and in {pronoun} presence and in the \
         presence of each other, have signed below as witnesses. Each of us is at \
         least {} years of age.",
        fields.full_name, req.witness_requirements.witness_minimum_age
    ));
    for n in 1..=witnesses {
        block.push_str(&format!(
            "\n\n{SIGNATURE_LINE}\n{}, Witness, residing at {}",
            witness_token(n, "NAME"),
            witness_token(n, "ADDRESS")
        ));
    }
    block
}

fn self_proving_affidavit(fields: &Fields, jurisdiction_name: &str, witnesses: u32) -> String {
    let witness_names: Vec<String> = (1..=witnesses).map(|n| witness_token(n, "NAME")).collect();
    let appeared = if witness_names.is_empty() {
        fields.full_name.clone()
    } else {
        format!("{} and {}", fields.full_name, witness_names.join(", "))
    };
    let mut block = format!(
        "SELF-PROVING AFFIDAVIT\n\
         {}\nCOUNTY OF {}\n\n\
         Before me, the undersigned authority, on this day personally appeared \
         {appeared}, known to me to be the testator and the witnesses whose names \
         are signed to the foregoing instrument. The testator declared the \
         instrument to be {} last will, signed willingly, and each witness \
         declared that the testator appeared to be of sound mind and under no \
         constraint or undue influence.\n\n\
         {SIGNATURE_LINE}\n{}, Testator",
        jurisdiction_name.to_uppercase(),
        fields.county,
        fields.pronoun,
        fields.full_name
    );
    for name in &witness_names {
        block.push_str(&format!("\n\n{SIGNATURE_LINE}\n{name}, Witness"));
    }
    block.push_str(&format!(
        "\n\nSubscribed and sworn to before me on the {DATE_BLANK}.\n\n\
         {SIGNATURE_LINE}\nNotary Public"
    ));
    block
}

/// Bracketed tokens of uppercase letters, digits, and underscores, in
/// order of first appearance.
pub fn collect_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let body_len = after
            .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'))
            .unwrap_or(after.len());
        if body_len > 0 && after[body_len..].starts_with(']') {
            let token = format!("[{}]", &after[..body_len]);
            if !found.contains(&token) {
                found.push(token);
            }
            rest = &after[body_len + 1..];
        } else {
            rest = after;
        }
    }
    found
}

fn to_roman(n: u32) -> String {
    const NUMERALS: [(u32, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut n = n;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use probate_core::MaritalStatus;

    fn generate(info: &PersonalInfo, code: &str) -> WillTemplate {
        generate_template(info, code).unwrap()
    }

    #[test]
    fn florida_empty_info() {
        let t = generate(&PersonalInfo::default(), "FL");
        assert_eq!(
            t.included_clause_names,
            vec![
                ClauseName::Revocation,
                ClauseName::Identification,
                ClauseName::HomesteadDeclaration,
                ClauseName::WitnessAttestation,
                ClauseName::SelfProvingAffidavit,
            ]
        );
        for token in ["[FULL_NAME]", "[ADDRESS]", "[CITY]", "[AGE]", "[MARITAL_STATUS]"] {
            assert!(t.placeholder_list.contains(&token.to_string()), "{token}");
        }
        assert!(t.template_text.contains("UNDER THE LAWS OF FLORIDA"));
    }

    #[test]
    fn california_includes_community_property() {
        let t = generate(&PersonalInfo::default(), "CA");
        assert!(t
            .included_clause_names
            .contains(&ClauseName::CommunityPropertyDeclaration));
        assert!(t
            .template_text
            .contains("California is a community property jurisdiction"));
    }

    #[test]
    fn opt_in_community_property_wording() {
        let t = generate(&PersonalInfo::default(), "AK");
        assert!(t
            .template_text
            .contains("Alaska permits spouses to hold property as community property"));
    }

    #[test]
    fn no_affidavit_where_unsupported() {
        let t = generate(&PersonalInfo::default(), "OH");
        assert!(!t
            .included_clause_names
            .contains(&ClauseName::SelfProvingAffidavit));
        assert!(!t.template_text.contains("SELF-PROVING AFFIDAVIT"));
        assert!(!t.placeholder_list.contains(&"[COUNTY]".to_string()));
    }

    #[test]
    fn filled_fields_replace_placeholders() {
        let info = PersonalInfo {
            full_name: Some("Maria Lopez".into()),
            address: Some("12 Oak St".into()),
            city: Some("Austin".into()),
            county: Some("Travis".into()),
            age: Some(52),
            marital_status: Some(MaritalStatus::Widowed),
            gender: Some(Gender::Female),
            ..PersonalInfo::default()
        };
        let t = generate(&info, "TX");
        assert!(t.template_text.contains("I, Maria Lopez, residing at 12 Oak St, Austin, Texas"));
        assert!(t.template_text.contains("I am 52 years of age"));
        assert!(t.template_text.contains("I am widowed."));
        assert!(t.template_text.contains("as her last will"));
        assert!(t.template_text.contains("COUNTY OF Travis"));
        for token in ["[FULL_NAME]", "[ADDRESS]", "[CITY]", "[COUNTY]", "[AGE]"] {
            assert!(!t.placeholder_list.contains(&token.to_string()));
        }
    }

    #[test]
    fn bracketed_user_text_is_not_a_placeholder() {
        let info = PersonalInfo {
            full_name: Some("Ann [SEAL]".into()),
            county: Some("[COUNTY]".into()),
            ..PersonalInfo::default()
        };
        let t = generate(&info, "TX");
        assert!(t.template_text.contains("I, Ann (SEAL), residing at"));
        assert!(t.template_text.contains("COUNTY OF (COUNTY)"));
        assert!(!t.placeholder_list.contains(&"[SEAL]".to_string()));
        assert!(!t.placeholder_list.contains(&"[COUNTY]".to_string()));
        assert_eq!(t.placeholder_list.first().map(String::as_str), Some("[ADDRESS]"));
    }

    #[test]
    fn blank_field_is_placeholder() {
        let info = PersonalInfo {
            full_name: Some("   ".into()),
            ..PersonalInfo::default()
        };
        let t = generate(&info, "NY");
        assert_eq!(t.placeholder_list.first().map(String::as_str), Some("[FULL_NAME]"));
    }

    #[test]
    fn witness_block_sized_to_requirement() {
        let t = generate(&PersonalInfo::default(), "NY");
        assert!(t.placeholder_list.contains(&"[WITNESS_2_NAME]".to_string()));
        assert!(!t.placeholder_list.contains(&"[WITNESS_3_NAME]".to_string()));
        assert!(t.template_text.contains("at least 18 years of age"));
    }

    #[test]
    fn unspecified_gender_uses_their() {
        let t = generate(&PersonalInfo::default(), "NY");
        assert!(t.template_text.contains("as their last will"));
    }

    #[test]
    fn articles_are_numbered_in_order() {
        let t = generate(&PersonalInfo::default(), "CA");
        let revocation = t.template_text.find("ARTICLE I - REVOCATION").unwrap();
        let identification = t.template_text.find("ARTICLE II - IDENTIFICATION").unwrap();
        let community = t.template_text.find("ARTICLE III - COMMUNITY PROPERTY").unwrap();
        let homestead = t.template_text.find("ARTICLE IV - HOMESTEAD").unwrap();
        assert!(revocation < identification && identification < community && community < homestead);
    }

    #[test]
    fn no_hardcoded_year() {
        let t = generate(&PersonalInfo::default(), "CA");
        assert!(t.template_text.contains("_____ day of __________, ______"));
        assert!(!t.template_text.contains("20__"));
    }

    #[test]
    fn unknown_jurisdiction() {
        assert!(matches!(
            generate_template(&PersonalInfo::default(), "ZZ"),
            Err(TemplateError::UnknownJurisdiction { code }) if code == "ZZ"
        ));
        assert!(matches!(
            generate_template(&PersonalInfo::default(), "123"),
            Err(TemplateError::InvalidJurisdictionCode(_))
        ));
    }

    #[test]
    fn placeholder_scan() {
        assert_eq!(
            collect_placeholders("[A] x [B_1] [a] [] [A] [C"),
            vec!["[A]", "[B_1]"]
        );
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(6), "VI");
        assert_eq!(to_roman(9), "IX");
    }

    #[test]
    fn clause_names_serialize_kebab_case() {
        let t = generate(&PersonalInfo::default(), "FL");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["includedClauseNames"][2], "homestead-declaration");
        assert!(json["placeholderList"].is_array());
        assert!(json["templateText"].is_string());
    }

    #[test]
    fn mandatory_clauses_always_present() {
        let registry = Registry::builtin().unwrap();
        for code in registry.codes() {
            let t = generate(&PersonalInfo::default(), code.as_str());
            for clause in [
                ClauseName::Revocation,
                ClauseName::Identification,
                ClauseName::WitnessAttestation,
            ] {
                assert!(clause.is_mandatory());
                assert!(t.included_clause_names.contains(&clause), "{code} {clause}");
            }
        }
    }
}
