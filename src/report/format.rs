//! Text and JSON renderings of rule results, audits and suggestions.

use std::fmt::Write as _;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::report::aggregate::{AuditReport, status_label};
use crate::rules::types::{Issue, RuleResult};
use crate::suggest::engine::Suggestion;

#[derive(Serialize)]
struct RuleJson<'a> {
    status: &'static str,
    issues: &'a [Issue],
}

impl<'a> From<&'a RuleResult> for RuleJson<'a> {
    fn from(r: &'a RuleResult) -> Self {
        Self {
            status: status_label(r.passed),
            issues: &r.issues,
        }
    }
}

struct Audits<'a>(&'a [(String, RuleResult)]);

impl Serialize for Audits<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut m = serializer.serialize_map(Some(self.0.len()))?;
        for (name, r) in self.0 {
            m.serialize_entry(name, &RuleJson::from(r))?;
        }
        m.end()
    }
}

impl Serialize for AuditReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut m = serializer.serialize_map(Some(6))?;
        m.serialize_entry("status", self.status())?;
        m.serialize_entry("version", &self.version)?;
        m.serialize_entry("phase", &self.phase)?;
        m.serialize_entry("components", &self.components)?;
        m.serialize_entry("summary", &self.summary)?;
        m.serialize_entry("audits", &Audits(&self.audits))?;
        m.end()
    }
}

fn to_pretty<T: Serialize>(value: &T) -> WirecheckResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| WirecheckError::serde(e.to_string()))
}

/// `{status, issues}` for a single rule.
pub fn rule_json(result: &RuleResult) -> WirecheckResult<String> {
    to_pretty(&RuleJson::from(result))
}

/// `{status, version, phase, components, summary, audits}` with audits in evaluation order.
pub fn audit_json(report: &AuditReport) -> WirecheckResult<String> {
    to_pretty(report)
}

/// Suggestions as a JSON array.
pub fn suggestions_json(suggestions: &[Suggestion]) -> WirecheckResult<String> {
    to_pretty(&suggestions)
}

/// One block per rule, then a summary line.
pub fn audit_text(report: &AuditReport) -> String {
    let mut out = String::new();
    for (name, r) in &report.audits {
        write_rule(&mut out, name, r);
    }
    let s = &report.summary;
    let _ = writeln!(
        out,
        "\n{}: {}/{} rules passed, {} failed, {} errors, {} warnings",
        report.status(),
        s.passed,
        s.total,
        s.failed,
        s.criticals,
        s.warnings
    );
    out
}

/// One rule block: a `✓`/`✗` header and indented issues.
pub fn rule_text(name: &str, result: &RuleResult) -> String {
    let mut out = String::new();
    write_rule(&mut out, name, result);
    out
}

fn write_rule(out: &mut String, name: &str, r: &RuleResult) {
    let mark = if r.passed { '✓' } else { '✗' };
    let _ = writeln!(out, "{mark} {name}");
    for i in &r.issues {
        let _ = write!(out, "    [{}] {}: {}", i.severity, i.component, i.message);
        if let Some(c) = &i.category {
            let _ = write!(out, " ({c})");
        }
        if let Some(v) = &i.viewport {
            let _ = write!(out, " @{v}");
        }
        out.push('\n');
    }
}

/// Suggestions grouped under their category.
pub fn suggestions_text(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    let mut current = None;
    for s in suggestions {
        if current != Some(s.category) {
            let _ = writeln!(out, "{}", s.category);
            current = Some(s.category);
        }
        let _ = writeln!(out, "    [{}] {}: {}", s.kind.as_str(), s.component, s.message);
    }
    if suggestions.is_empty() {
        out.push_str("no suggestions\n");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/report/format.rs"]
mod tests;
