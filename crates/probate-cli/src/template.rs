//! # Template Subcommand
//!
//! Generates a fillable will for a jurisdiction.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use probate_core::PersonalInfo;
use probate_template::{TemplateGenerator, WillTemplate};

use crate::config::OutputFormat;
use crate::{push_section, read_json, Context};

/// Arguments for `probate template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Jurisdiction whose law governs the will.
    #[arg(long)]
    pub state: String,

    /// Personal information (JSON, camelCase fields). Omitted fields become
    /// placeholders.
    #[arg(long)]
    pub info: Option<PathBuf>,
}

/// Execute `probate template`.
pub fn run_template(args: &TemplateArgs, ctx: &Context) -> Result<u8> {
    let info: PersonalInfo = match &args.info {
        Some(path) => read_json(path, "personal info")?,
        None => PersonalInfo::default(),
    };
    let generator = TemplateGenerator::new(ctx.registry.clone());
    let template = generator.generate(&info, &args.state)?;
    print!("{}", render_template(&template, ctx.format)?);
    Ok(0)
}

/// Render a generated template.
pub fn render_template(template: &WillTemplate, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return crate::to_json(template);
    }
    let mut out = template.template_text.clone();
    out.push_str("\n----\n");
    let clauses: Vec<String> = template
        .included_clause_names
        .iter()
        .map(ToString::to_string)
        .collect();
    push_section(&mut out, "Clauses", &clauses);
    push_section(&mut out, "Placeholders to fill in", &template.placeholder_list);
    Ok(out)
}
