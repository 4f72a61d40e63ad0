//! Dark-mode readiness hints.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::Structure;
use crate::scene::walk::walk;

const ABSOLUTES: [&str; 2] = ["#000000", "#FFFFFF"];

/// Dark-mode rule. Has no thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DarkModeConfig {}

impl Rule for DarkModeConfig {
    fn name(&self) -> &'static str {
        "dark_mode"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc)
    }
}

fn is_absolute(hex: &str) -> bool {
    ABSOLUTES.iter().any(|a| a.eq_ignore_ascii_case(hex.trim()))
}

/// One document-level hint, then one per component using pure black or white.
pub fn evaluate(doc: &Structure) -> RuleResult {
    let mut issues = vec![Issue::info(
        "document",
        "use semantic color tokens (text-primary, surface, border) so a dark theme can remap them",
    )];
    for c in walk(doc).into_iter().map(|v| v.component) {
        if is_absolute(&c.color) || is_absolute(&c.layout.background) {
            issues.push(Issue::info(
                &c.id,
                "pure black/white does not adapt to dark mode, use an adaptive token",
            ));
        }
    }
    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/dark_mode.rs"]
mod tests;
