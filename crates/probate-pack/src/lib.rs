//! # probate-pack — State Requirements Registry
//!
//! Per-jurisdiction will-execution rules for all 50 US states and the
//! District of Columbia.
//!
//! ## Components
//!
//! - [`requirements`]: the `StateRequirements` model, one per jurisdiction.
//! - [`registry`]: the immutable `Registry`, loaded once from the embedded
//!   `data/jurisdictions.yaml` or from a caller-selected file.
//! - [`validation`]: structural checks every entry passes before a
//!   registry is built.
//! - [`updates`]: merges caller-supplied legal updates into a new snapshot.
//!
//! ## Lookup Semantics
//!
//! Codes are normalized to uppercase. A malformed code is
//! `InvalidJurisdictionCode`; a well-formed code without data is
//! `NotFound`. The registry never falls back to another jurisdiction's
//! rules.

pub mod error;
pub mod registry;
pub mod requirements;
pub mod updates;
pub mod validation;

pub use error::RegistryError;
pub use registry::{lookup_requirements, Registry};
pub use requirements::{HolographicWillRules, StateRequirements, WitnessRequirements};
pub use updates::{LegalUpdate, UpdateSeverity, UpdateStatus, UpdateSummary};
pub use validation::{validate_requirements, RegistryValidationResult};
