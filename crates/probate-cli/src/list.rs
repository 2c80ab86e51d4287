//! # List Subcommand
//!
//! Covered jurisdictions and the registry snapshot digest.

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntry<'a> {
    code: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    probate_court: Option<&'a str>,
    last_updated: String,
    has_updates: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    digest: String,
    jurisdictions: Vec<ListEntry<'a>>,
}

/// Execute `probate list`.
pub fn run_list(ctx: &Context) -> Result<u8> {
    print!("{}", render_list(ctx)?);
    Ok(0)
}

/// Render the jurisdiction listing.
pub fn render_list(ctx: &Context) -> Result<String> {
    let digest = ctx.registry.digest()?.to_string();
    let jurisdictions: Vec<ListEntry<'_>> = ctx
        .registry
        .iter()
        .map(|(code, req)| {
            let status = ctx
                .update_summary
                .as_ref()
                .and_then(|s| s.jurisdictions.get(code));
            ListEntry {
                code: code.as_str(),
                name: &req.jurisdiction_name,
                probate_court: req.probate_court.as_deref(),
                last_updated: status
                    .map(|s| s.last_updated)
                    .unwrap_or(req.last_updated)
                    .to_string(),
                has_updates: status.is_some_and(|s| s.has_updates),
            }
        })
        .collect();

    if ctx.format == OutputFormat::Json {
        return crate::to_json(&ListOutput {
            digest,
            jurisdictions,
        });
    }

    let mut out = String::from("Covered jurisdictions:\n\n");
    for entry in &jurisdictions {
        let court = entry
            .probate_court
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        let marker = if entry.has_updates { " [updated]" } else { "" };
        out.push_str(&format!(
            "  {:<4} {}{court}, reviewed {}{marker}\n",
            entry.code, entry.name, entry.last_updated
        ));
    }
    out.push_str(&format!(
        "\nTotal: {} jurisdictions\nSnapshot: {digest}\n",
        jurisdictions.len()
    ));
    Ok(out)
}
