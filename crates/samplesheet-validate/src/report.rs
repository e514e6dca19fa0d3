//! Validation report: per-rule outcomes plus every issue found.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::rule::Rule;

/// Pass/fail result of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub passed: bool,
    pub issue_count: usize,
}

/// Aggregate result of validating one sample sheet.
///
/// `passed` starts true and is AND-ed with each recorded rule outcome, so it
/// can only move from true to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub rows_checked: usize,
    pub outcomes: Vec<RuleOutcome>,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Create an empty, passing report.
    pub fn new(rows_checked: usize) -> Self {
        Self {
            passed: true,
            rows_checked,
            outcomes: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Record the issues a rule produced. An empty list is a pass.
    pub fn record(&mut self, rule: Rule, issues: Vec<Issue>) {
        let passed = issues.is_empty();
        self.passed &= passed;
        self.outcomes.push(RuleOutcome {
            rule,
            passed,
            issue_count: issues.len(),
        });
        self.issues.extend(issues);
    }

    /// True when every recorded rule passed.
    pub fn is_ok(&self) -> bool {
        self.passed
    }

    /// Check if the report has any issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Issues produced by one rule.
    pub fn issues_for(&self, rule: Rule) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.rule() == rule)
    }

    /// Outcome of a rule, or `None` if it has not been recorded.
    pub fn rule_passed(&self, rule: Rule) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.rule == rule)
            .map(|outcome| outcome.passed)
    }

    /// Rules that produced at least one issue.
    pub fn failed_rules(&self) -> Vec<Rule> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.rule)
            .collect()
    }
}
