//! # probate-template — Will Template Generation
//!
//! Produces fillable plain-text will templates whose optional clauses
//! follow the selected jurisdiction's registry entry, and the witness
//! execution instructions that go with them.
//!
//! Output is plain text. Rendering to a document format is the host's
//! concern.

pub mod error;
pub mod instructions;
pub mod template;

pub use error::TemplateError;
pub use instructions::{witness_instructions, witness_instructions_for};
pub use template::{
    collect_placeholders, generate_template, render, ClauseName, TemplateGenerator, WillTemplate,
};
