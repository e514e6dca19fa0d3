//! Rendering of validation reports for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use samplesheet_validate::{Issue, ValidationReport};

/// Printed after a report with no issues.
pub const SUCCESS_MESSAGE: &str = "All good!  :)";

/// Output format for a validation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One diagnostic per line, as plain text.
    #[default]
    Text,
    /// A table of issues followed by a per-rule summary.
    Table,
    /// The serialized report.
    Json,
}

/// Whether table output may carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    #[default]
    Auto,
    Always,
    Never,
}

/// Render a report in the requested format.
///
/// Text and table output end with [`SUCCESS_MESSAGE`] when the report
/// passes; failing reports only list their issues.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(
    report: &ValidationReport,
    format: ReportFormat,
    styling: Styling,
) -> serde_json::Result<String> {
    let mut out = match format {
        ReportFormat::Json => return serde_json::to_string_pretty(report).map(|json| json + "\n"),
        ReportFormat::Text => render_text(report),
        ReportFormat::Table => render_tables(report, styling),
    };
    if report.is_ok() {
        out.push_str(SUCCESS_MESSAGE);
        out.push('\n');
    }
    Ok(out)
}

fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    for issue in &report.issues {
        for line in issue.lines() {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn render_tables(report: &ValidationReport, styling: Styling) -> String {
    let mut out = String::new();
    if !report.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Code"),
            header_cell("Rule"),
            header_cell("Row"),
            header_cell("Message"),
        ]);
        apply_table_style(&mut table, styling);
        align_column(&mut table, 2, CellAlignment::Right);
        for issue in &report.issues {
            table.add_row(issue_row(issue));
        }
        out.push_str(&format!("Issues:\n{table}\n"));
    }

    let mut summary = Table::new();
    summary.set_header(vec![
        header_cell("Code"),
        header_cell("Rule"),
        header_cell("Result"),
        header_cell("Issues"),
    ]);
    apply_table_style(&mut summary, styling);
    align_column(&mut summary, 3, CellAlignment::Right);
    for outcome in &report.outcomes {
        summary.add_row(vec![
            Cell::new(outcome.rule.code()),
            Cell::new(outcome.rule.label()),
            result_cell(outcome.passed),
            count_cell(outcome.issue_count),
        ]);
    }
    out.push_str(&format!(
        "Rows checked: {}\n{summary}\n",
        report.rows_checked
    ));
    out
}

fn issue_row(issue: &Issue) -> Vec<Cell> {
    let rule = issue.rule();
    vec![
        Cell::new(rule.code()).fg(Color::Red),
        Cell::new(rule.label()),
        issue.row().map_or_else(|| dim_cell("-"), Cell::new),
        Cell::new(issue.message()),
    ]
}

fn apply_table_style(table: &mut Table, styling: Styling) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    match styling {
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
        Styling::Auto => {}
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn result_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("PASS").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
