//! # probate-compliance — Will Compliance Validation
//!
//! Evaluates a draft will against the will-execution rules of a
//! jurisdiction and derives the probate-avoidance options it offers.
//!
//! ## Architecture
//!
//! ```text
//! probate-pack (data)  -->  probate-compliance (evaluation)
//!   Registry                  ComplianceValidator -> ComplianceReport
//!   StateRequirements         probate_avoidance   -> ProbateAvoidancePlan
//! ```
//!
//! Validation is pure and synchronous. The validator holds a registry
//! snapshot and never fetches data; a host that merges legal updates
//! builds a new validator over the merged snapshot.

pub mod error;
pub mod probate;
pub mod validator;

pub use error::ComplianceError;
pub use probate::{probate_avoidance, probate_avoidance_for, ProbateAvoidancePlan};
pub use validator::{check, validate_compliance, ComplianceReport, ComplianceValidator};
