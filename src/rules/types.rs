use serde::{Deserialize, Serialize};

/// Finding severity. Only `Error` fails a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Objectively wrong.
    Error,
    /// Likely wrong, context-dependent.
    Warning,
    /// Advisory.
    Info,
}

impl Severity {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding emitted by a rule evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// How bad it is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Offending component ID (`"layout"` for document-level layout values, `"document"` for
    /// whole-document findings).
    pub component: String,
    /// Sub-check that produced the finding, e.g. `navigation_overload`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Viewport the finding applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
}

impl Issue {
    /// Build an issue of the given severity.
    pub fn new(severity: Severity, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            component: component.into(),
            category: None,
            viewport: None,
        }
    }

    /// Error-severity issue.
    pub fn error(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, component, message)
    }

    /// Warning-severity issue.
    pub fn warning(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, component, message)
    }

    /// Info-severity issue.
    pub fn info(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, component, message)
    }

    /// Tag with a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Tag with a viewport label.
    pub fn with_viewport(mut self, viewport: impl Into<String>) -> Self {
        self.viewport = Some(viewport.into());
        self
    }
}

/// Outcome of one rule: `passed` is `false` iff an error-severity issue is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// No error-severity issue present.
    pub passed: bool,
    /// Findings in traversal order.
    pub issues: Vec<Issue>,
}

impl RuleResult {
    /// Derive `passed` from the issue list.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let passed = !issues.iter().any(|i| i.severity == Severity::Error);
        Self { passed, issues }
    }

    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Issues with the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rules/types.rs"]
mod tests;
