//! # Validate Subcommand
//!
//! Checks a will document against a jurisdiction. Exits 2 when the will is
//! not compliant.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use probate_compliance::{ComplianceReport, ComplianceValidator};
use probate_core::WillDocument;

use crate::config::OutputFormat;
use crate::{push_section, read_json, Context, EXIT_NON_COMPLIANT};

/// Arguments for `probate validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Jurisdiction whose law governs the will.
    #[arg(long)]
    pub state: String,

    /// Will document (JSON, camelCase fields).
    #[arg(long)]
    pub will: PathBuf,
}

/// Execute `probate validate`. Exits 0 when compliant, 2 when not.
pub fn run_validate(args: &ValidateArgs, ctx: &Context) -> Result<u8> {
    let will: WillDocument = read_json(&args.will, "will document")?;
    let validator = ComplianceValidator::new(ctx.registry.clone());
    let report = validator.validate(&will, &args.state)?;
    let name = ctx
        .registry
        .lookup(&args.state)
        .map(|r| r.jurisdiction_name.clone())?;
    print!("{}", render_report(&name, &report, ctx.format)?);
    Ok(if report.compliant {
        0
    } else {
        EXIT_NON_COMPLIANT
    })
}

/// Render a compliance report.
pub fn render_report(
    jurisdiction_name: &str,
    report: &ComplianceReport,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return crate::to_json(report);
    }
    let verdict = if report.compliant {
        "COMPLIANT"
    } else {
        "NOT COMPLIANT"
    };
    let mut out = format!("{jurisdiction_name}: {verdict}\n\n");
    push_section(&mut out, "Violations", &report.violations);
    push_section(&mut out, "Required actions", &report.required_actions);
    push_section(&mut out, "Warnings", &report.warnings);
    push_section(&mut out, "Recommendations", &report.recommendations);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use probate_pack::Registry;

    fn ctx(format: OutputFormat) -> Context {
        Context::with_registry(Registry::builtin().unwrap(), format)
    }

    fn will_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const COMPLIANT: &str = r#"{
        "witnesses": [{"name": "A", "age": 30}, {"name": "B", "age": 40}],
        "testatorSignaturePresent": true
    }"#;

    #[test]
    fn compliant_will_exits_zero() {
        let file = will_file(COMPLIANT);
        let args = ValidateArgs {
            state: "ca".into(),
            will: file.path().to_path_buf(),
        };
        assert_eq!(run_validate(&args, &ctx(OutputFormat::Text)).unwrap(), 0);
    }

    #[test]
    fn non_compliant_will_exits_two() {
        let file = will_file("{}");
        let args = ValidateArgs {
            state: "CA".into(),
            will: file.path().to_path_buf(),
        };
        assert_eq!(
            run_validate(&args, &ctx(OutputFormat::Json)).unwrap(),
            EXIT_NON_COMPLIANT
        );
    }

    #[test]
    fn unknown_state_is_error() {
        let file = will_file(COMPLIANT);
        let args = ValidateArgs {
            state: "ZZ".into(),
            will: file.path().to_path_buf(),
        };
        let err = run_validate(&args, &ctx(OutputFormat::Text)).unwrap_err();
        assert!(err.to_string().contains("unknown jurisdiction ZZ"));
    }

    #[test]
    fn malformed_will_is_error() {
        let file = will_file("{ not json");
        let args = ValidateArgs {
            state: "CA".into(),
            will: file.path().to_path_buf(),
        };
        let err = run_validate(&args, &ctx(OutputFormat::Text)).unwrap_err();
        assert!(format!("{err:#}").contains("parsing will document"));
    }

    #[test]
    fn text_report_sections() {
        let report = ComplianceReport {
            compliant: false,
            violations: vec!["Testator signature required".into()],
            warnings: vec![],
            required_actions: vec!["Sign the will".into()],
            recommendations: vec!["Consider consulting a local estate planning attorney".into()],
        };
        let out = render_report("Ohio", &report, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "Ohio: NOT COMPLIANT\n\n\
             Violations:\n  - Testator signature required\n\
             Required actions:\n  - Sign the will\n\
             Recommendations:\n  - Consider consulting a local estate planning attorney\n"
        );
    }
}
