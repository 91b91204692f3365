//! Plain-text layout report export

use std::fs;
use std::path::Path;

use crate::algorithm::outcome::PlacementOutcome;
use crate::io::configuration::REPORT_RULE_WIDTH;
use crate::io::error::{Result, WithPath};
use crate::report::{normalize, render_grid, report_lines};

/// Build the report text for an outcome
///
/// The report carries the outcome summary, search statistics, one line per
/// placed word and the trimmed grid.
pub fn format_layout_report(outcome: &PlacementOutcome) -> String {
    let normalized = normalize(&outcome.layout);
    let (rows, cols) = normalized.dimensions();

    let mut lines = vec![
        "CROSSWORD LAYOUT".to_string(),
        "=".repeat(REPORT_RULE_WIDTH),
        String::new(),
        outcome.summary(),
        format!(
            "Intersections: {}, grid: {rows} x {cols}",
            outcome.layout.intersection_count()
        ),
        format!(
            "Search: {} steps, {} backtracks, {:.2?}",
            outcome.stats.steps, outcome.stats.backtracks, outcome.stats.elapsed
        ),
        String::new(),
        "WORDS PLACED:".to_string(),
    ];
    lines.extend(report_lines(&normalized).into_iter().map(|line| format!("  {line}")));

    lines.push(String::new());
    lines.push("GRID LAYOUT:".to_string());
    let grid = render_grid(&normalized);
    if grid.is_empty() {
        lines.push("  (empty)".to_string());
    }
    lines.extend(grid.into_iter().map(|row| format!("  {row}")));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Write the report for an outcome, creating parent directories as needed
///
/// # Errors
///
/// Returns [`crate::LayoutError::FileSystem`] if a directory cannot be created
/// or the file cannot be written.
pub fn write_layout_report(outcome: &PlacementOutcome, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent, "create report directory")?;
    }
    fs::write(path, format_layout_report(outcome)).with_path(path, "write layout report")?;
    log::debug!("wrote layout report to {}", path.display());
    Ok(())
}
