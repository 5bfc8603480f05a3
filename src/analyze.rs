//! The `analyze` command: collect state, submit it, print the drift report.

use std::io::Write;

use colored::Colorize;

use crate::api::{AnalysisRequest, CasedClient};
use crate::config::Settings;
use crate::error::CasedError;
use crate::output::print_drift_report;
use crate::resource::DriftReport;
use crate::terraform::{ShowCommand, StateCollector};

/// Runs one analysis. Returns the report that was printed, if any.
pub async fn run<W: Write>(
    settings: &Settings,
    runner: Box<dyn ShowCommand>,
    out: &mut W,
) -> Result<Option<DriftReport>, CasedError> {
    let collector = StateCollector::new(settings.working_dir.clone(), runner)
        .with_provider_prefix(settings.provider_prefix.clone());
    let client = CasedClient::new(settings.api_key.clone(), &settings.api_url)?;

    tracing::info!(dir = %collector.working_dir().display(), "collecting terraform state");
    writeln!(out, "Running terraform show...")?;
    let snapshot = collector.collect().await?;

    writeln!(out)?;
    writeln!(out, "Terraform output summary:")?;
    match &snapshot.summary {
        Some(tree) => write!(out, "{}", tree)?,
        None => writeln!(out, "- No resources found in state")?,
    }

    let request = AnalysisRequest::new(snapshot.show_output, settings.environment.clone());

    if settings.dry_run {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "Dry run mode - showing what would be analyzed:".yellow()
        )?;
        writeln!(out)?;
        writeln!(out, "{}", "=== Dry Run - API Request Details ===".yellow())?;
        writeln!(out)?;
        writeln!(out, "{}", client.dry_run_preview(&settings.project, &request)?)?;
        return Ok(None);
    }

    writeln!(out)?;
    writeln!(out, "Analyzing infrastructure...")?;
    let report = client.analyze(&settings.project, &request).await?;

    print_drift_report(report.as_ref(), out)?;
    Ok(report)
}
