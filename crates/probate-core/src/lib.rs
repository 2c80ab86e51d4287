//! # probate-core — Foundational Types
//!
//! Leaf crate of the workspace. Defines the type-system primitives every
//! other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated jurisdiction codes.** `JurisdictionCode` can only be built
//!    through a constructor that uppercases and checks the two-letter form.
//!    A malformed code is a `ValidationError`, never a silent lookup miss.
//!
//! 2. **Closed tag vocabularies.** Restrictions, holographic-will
//!    conditions, and disqualified witness roles are enums. Validator and
//!    template logic `match` on them exhaustively instead of searching
//!    free text.
//!
//! 3. **Caller-owned will data.** `WillDocument` and `PersonalInfo` are
//!    plain serde types with camelCase field names, the JSON contract
//!    exposed to host applications.
//!
//! 4. **`CanonicalBytes` for digests.** Registry snapshot digests are
//!    computed only over canonical JSON (sorted keys, compact separators,
//!    no floats).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `probate-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod jurisdiction;
pub mod tags;
pub mod will;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, ValidationError};
pub use jurisdiction::JurisdictionCode;
pub use tags::{
    DisqualifiedWitnessRole, HolographicCondition, ProbateAlternative, ProbateAlternativeKind,
    RestrictionTag, ShareFraction,
};
pub use will::{
    normalized_email, Beneficiary, Gender, MaritalStatus, PersonalInfo, WillDocument, Witness,
};
