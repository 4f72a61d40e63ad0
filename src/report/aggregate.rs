use serde::Serialize;

use crate::rules::registry::RuleSet;
use crate::rules::types::{RuleResult, Severity};
use crate::scene::model::Structure;

/// Totals across a set of rule results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rules evaluated.
    pub total: usize,
    /// Rules without error-severity issues.
    pub passed: usize,
    /// Rules with at least one error.
    pub failed: usize,
    /// Error-severity issues across all rules.
    pub criticals: usize,
    /// Warning-severity issues across all rules.
    pub warnings: usize,
}

/// Overall verdict: `true` iff every rule passed.
pub fn aggregate<'a>(results: impl IntoIterator<Item = &'a RuleResult>) -> (bool, Summary) {
    let mut s = Summary::default();
    for r in results {
        s.total += 1;
        if r.passed {
            s.passed += 1;
        } else {
            s.failed += 1;
        }
        s.criticals += r.count(Severity::Error);
        s.warnings += r.count(Severity::Warning);
    }
    (s.failed == 0, s)
}

/// Results of running a rule set over one document.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditReport {
    /// Document version, as loaded or as resolved from the project directory.
    pub version: String,
    /// Document phase.
    pub phase: String,
    /// Total component count.
    pub components: usize,
    /// AND of every rule's `passed`.
    pub passed: bool,
    /// Totals.
    pub summary: Summary,
    /// Per-rule results in evaluation order.
    pub audits: Vec<(String, RuleResult)>,
}

impl AuditReport {
    /// Result of the named rule.
    pub fn get(&self, rule: &str) -> Option<&RuleResult> {
        self.audits
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, r)| r)
    }

    /// `"passed"` or `"failed"`.
    pub fn status(&self) -> &'static str {
        status_label(self.passed)
    }
}

pub(crate) fn status_label(passed: bool) -> &'static str {
    if passed { "passed" } else { "failed" }
}

/// Run every rule in `rules` and aggregate.
#[tracing::instrument(skip_all, fields(version = %doc.version, rules = rules.len()))]
pub fn run_audit(doc: &Structure, rules: &RuleSet) -> AuditReport {
    let audits: Vec<(String, RuleResult)> = rules
        .run(doc)
        .into_iter()
        .map(|(name, r)| (name.to_owned(), r))
        .collect();
    let (passed, summary) = aggregate(audits.iter().map(|(_, r)| r));
    tracing::info!(
        passed,
        failed = summary.failed,
        criticals = summary.criticals,
        warnings = summary.warnings,
        "audit complete"
    );
    AuditReport {
        version: doc.version.clone(),
        phase: doc.phase.clone(),
        components: doc.component_count(),
        passed,
        summary,
        audits,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/aggregate.rs"]
mod tests;
