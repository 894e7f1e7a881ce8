// src/output/summary.rs

use crate::constants::{SUMMARY_HEADER, SUMMARY_LABEL_WIDTH};
use crate::report::RunReport;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Writes the end-of-run summary block.
///
/// Dry-runs report a "Would change" count instead of "Changed" so the two kinds
/// of run are easy to tell apart, and end with a hint about `--apply`.
pub fn write_summary(writer: &mut dyn Write, report: &RunReport, root: &Path) -> io::Result<()> {
    debug!("Writing summary: {:?}", report);
    writeln!(writer)?;
    writeln!(writer, "{}", SUMMARY_HEADER)?;
    write_row(writer, "Root:", &root.display().to_string())?;
    write_row(writer, "Checked files:", &report.checked.to_string())?;
    write_row(writer, "Matched filenames:", &report.matched.to_string())?;
    if report.dry_run {
        write_row(writer, "Would change:", &report.would_change.to_string())?;
    } else {
        write_row(writer, "Changed:", &report.changed.to_string())?;
    }
    write_row(writer, "Skipped:", &report.skipped.to_string())?;
    write_row(writer, "Collisions skipped:", &report.collisions.to_string())?;
    write_row(writer, "Errors:", &report.errors.len().to_string())?;

    if report.has_errors() {
        writeln!(writer, "\nErrors:")?;
        for (path, reason) in &report.errors {
            writeln!(writer, "  - {}: {}", path.display(), reason)?;
        }
    }
    if report.checked > 0 && report.matched == 0 {
        writeln!(
            writer,
            "\nNo filenames contained the phrase (with current options). Try --loose and/or -i."
        )?;
    }
    if report.dry_run {
        writeln!(
            writer,
            "\nThis was a dry run. Add --apply to perform the renames."
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_row(writer: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(
        writer,
        "  {:<width$}{}",
        label,
        value,
        width = SUMMARY_LABEL_WIDTH
    )?;
    Ok(())
}
