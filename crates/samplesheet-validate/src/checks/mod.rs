//! Validation check modules.
//!
//! Each check reads the sheet and returns its issues; none of them mutate
//! shared state, so the final outcome does not depend on execution order.

mod headers;
mod index_tag;
mod uniqueness;

use samplesheet_model::SampleSheet;
use tracing::debug;

use crate::issue::Issue;
use crate::report::ValidationReport;
use crate::rule::Rule;

type Check = fn(&SampleSheet) -> Vec<Issue>;

/// Implementation of a rule.
fn check_for(rule: Rule) -> Check {
    match rule {
        Rule::RequiredHeaders => headers::check,
        Rule::SampleLibraryUnique => uniqueness::check_sample_library,
        Rule::SampleIndex1SeqUnique => uniqueness::check_sample_index1_seq,
        Rule::SampleIndexTagUnique => uniqueness::check_sample_index_tag,
        Rule::IndexTagConsistency => index_tag::check,
    }
}

/// Run all validation checks on a sheet in [`Rule::ALL`] order. Every check
/// runs regardless of earlier failures.
pub fn run_all(sheet: &SampleSheet) -> ValidationReport {
    let mut report = ValidationReport::new(sheet.len());
    for rule in Rule::ALL {
        let issues = run_rule(rule, sheet);
        debug!(
            rule = rule.code(),
            issue_count = issues.len(),
            "{}",
            rule.label()
        );
        report.record(rule, issues);
    }
    report
}

/// Run a single rule.
pub fn run_rule(rule: Rule, sheet: &SampleSheet) -> Vec<Issue> {
    check_for(rule)(sheet)
}
