//! Drift report rendering.

use std::io::{self, Write};

use colored::Colorize;

use crate::resource::{DriftReport, DriftValue, ResourceRecord};

/// Prints `report` to `out`. `None` (a dry run, or an empty API result)
/// prints nothing.
pub fn print_drift_report<W: Write>(report: Option<&DriftReport>, out: &mut W) -> io::Result<()> {
    let Some(report) = report else {
        return Ok(());
    };

    if report.is_empty() {
        writeln!(out, "{}", "✅ No resources found".green().bold())?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "=== Infrastructure Drift Report ===")?;

    if !report.managed_resources.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🔍 Managed Resources:".blue().bold())?;
        for resource in &report.managed_resources {
            print_managed(resource, out)?;
        }
    }

    if !report.unmanaged_resources.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "⚠️  Unmanaged Resources:".yellow().bold())?;
        for resource in &report.unmanaged_resources {
            writeln!(out, "{}", headline(resource).yellow())?;
            writeln!(out, "  Type: {}", resource.service_type)?;
            writeln!(out)?;
        }
    }

    if !report.missing_resources.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "❌ Missing Resources:".red().bold())?;
        for resource in &report.missing_resources {
            writeln!(out, "{}", headline(resource).red())?;
            writeln!(out, "  Type: {}", resource.service_type)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn print_managed<W: Write>(resource: &ResourceRecord, out: &mut W) -> io::Result<()> {
    let line = headline(resource);
    if resource.is_synced() {
        writeln!(out, "{}", line.green())?;
    } else {
        writeln!(out, "{}", line.yellow())?;
    }
    writeln!(out, "  Type: {}", resource.service_type)?;
    writeln!(out, "  Status: {}", resource.status)?;

    if resource.has_changes() {
        writeln!(out, "{}", "  Changes:".yellow())?;
        for change in &resource.drift {
            writeln!(
                out,
                "    - {}: expected {}, got {}",
                change.field,
                DriftValue(&change.expected),
                DriftValue(&change.actual)
            )?;
        }
    }

    writeln!(out)
}

fn headline(resource: &ResourceRecord) -> String {
    format!(
        "• {} - {} ({})",
        resource.service_name,
        DriftValue(&resource.name),
        DriftValue(&resource.id)
    )
}
