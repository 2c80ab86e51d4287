//! # probate-cli — Command-Line Tool
//!
//! Provides the `probate` binary.
//!
//! ## Subcommands
//!
//! - `probate list`: covered jurisdictions and the snapshot digest.
//! - `probate requirements <CODE>`: will-execution rules.
//! - `probate validate --state <CODE> --will <FILE>`: compliance report.
//!   Exits 0 when compliant, 2 when not.
//! - `probate template --state <CODE> [--info <FILE>]`: fillable will.
//! - `probate strategies <CODE>`: probate-avoidance options.
//! - `probate instructions <CODE>`: witness execution steps.
//!
//! Each subcommand has a `run_*` handler returning the process exit code
//! and a `render_*` function returning the output as a `String`.

pub mod config;
pub mod list;
pub mod lookup;
pub mod template;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use serde::Serialize;

use probate_pack::{LegalUpdate, Registry, UpdateSummary};

use crate::config::{CliConfig, OutputFormat};

/// Exit code for a will that failed validation.
pub const EXIT_NON_COMPLIANT: u8 = 2;

/// Registry snapshot and settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub registry: Arc<Registry>,
    /// Present when a legal updates file was merged.
    pub update_summary: Option<UpdateSummary>,
    pub format: OutputFormat,
}

impl Context {
    /// Load the registry named by `config` and merge any updates file.
    pub fn load(config: &CliConfig) -> Result<Self> {
        let base = match &config.registry_path {
            Some(path) => Arc::new(
                Registry::from_path(path)
                    .with_context(|| format!("loading registry {}", path.display()))?,
            ),
            None => Registry::builtin().context("loading built-in registry")?,
        };

        let (registry, update_summary) = match &config.updates_path {
            Some(path) => {
                let updates = read_updates(path)?;
                let (merged, summary) = base
                    .apply_updates(&updates)
                    .with_context(|| format!("applying legal updates from {}", path.display()))?;
                (Arc::new(merged), Some(summary))
            }
            None => (base, None),
        };

        tracing::debug!(
            jurisdictions = registry.len(),
            updates = update_summary.is_some(),
            "registry ready"
        );
        Ok(Self {
            registry,
            update_summary,
            format: config.format,
        })
    }

    /// Context over an explicit registry.
    pub fn with_registry(registry: Arc<Registry>, format: OutputFormat) -> Self {
        Self {
            registry,
            update_summary: None,
            format,
        }
    }
}

/// Read a list of legal updates. YAML is a superset of JSON, so both work.
pub fn read_updates(path: &Path) -> Result<Vec<LegalUpdate>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading updates file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("parsing updates file {}", path.display()))
}

/// Read and parse a JSON input file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {what} {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {what} {}", path.display()))
}

/// Pretty JSON with a trailing newline.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

/// Append a titled bullet section, skipping empty lists.
pub(crate) fn push_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(title);
    out.push_str(":\n");
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}
