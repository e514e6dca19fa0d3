//! Sample sheet validation.
//!
//! Five independent checks run over a parsed [`SampleSheet`]:
//!
//! - **Required headers**: the four mandatory columns are present
//! - **Sample + library**: (Sample ID, Submitter Library Name) is unique
//! - **Sample + i7**: (Sample ID, Index 1 sequence) is unique among single-index rows
//! - **Sample + tag**: (Sample ID, Index Tag) is unique among dual-index rows
//! - **Index tag**: a populated Index Tag equals `<i7>-<i5>`
//!
//! # Example
//!
//! ```ignore
//! use samplesheet_validate::validate_sheet;
//!
//! let report = validate_sheet(&sheet);
//! for issue in &report.issues {
//!     println!("[{}] {}", issue.rule().code(), issue.message());
//! }
//! ```

mod checks;
mod duplicates;
mod issue;
mod report;
mod rule;

use samplesheet_model::SampleSheet;
use tracing::{debug, info_span};

pub use duplicates::find_duplicates;
pub use issue::Issue;
pub use report::{RuleOutcome, ValidationReport};
pub use rule::{Rule, UniqueKey};

/// Validate a sample sheet against all rules.
///
/// Rules never abort: every rule runs and every issue is collected.
pub fn validate_sheet(sheet: &SampleSheet) -> ValidationReport {
    let span = info_span!("validate", rows = sheet.len());
    let _guard = span.enter();
    let report = checks::run_all(sheet);
    debug!(
        passed = report.is_ok(),
        issue_count = report.len(),
        "validation complete"
    );
    report
}

/// Run one rule in isolation.
pub fn validate_rule(rule: Rule, sheet: &SampleSheet) -> Vec<Issue> {
    checks::run_rule(rule, sheet)
}
