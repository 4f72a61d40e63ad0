//! 8-pt spacing grid.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::Structure;
use crate::scene::tokens::{is_half_step, is_on_grid, nearest_grid_value};
use crate::scene::walk::walk;

/// Thresholds for the spacing rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    /// Half-step values (4, 12, 20, …) tolerated before an aggregate warning.
    pub max_half_step_usage: usize,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            max_half_step_usage: 5,
        }
    }
}

impl Rule for SpacingConfig {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// Check the layout spacing and padding, then every component's padding, gap and margin.
pub fn evaluate(doc: &Structure, cfg: &SpacingConfig) -> RuleResult {
    let mut values: Vec<(&str, &'static str, u32)> = vec![
        ("layout", "spacing", doc.layout.spacing),
        ("layout", "padding", doc.layout.padding),
    ];
    for c in walk(doc).into_iter().map(|v| v.component) {
        values.push((c.id.as_str(), "padding", c.layout.padding));
        values.push((c.id.as_str(), "gap", c.layout.gap));
        values.push((c.id.as_str(), "margin_bottom", c.layout.margin_bottom));
    }

    let mut issues = Vec::new();
    let mut half_steps = 0usize;
    for (component, field, v) in values {
        if is_half_step(v) {
            half_steps += 1;
        }
        if is_on_grid(v) {
            continue;
        }
        issues.push(Issue::warning(
            component,
            format!("{field} {v}px is not on 8pt grid"),
        ));
        issues.push(Issue::info(
            component,
            format!("use {}px instead of {v}px", nearest_grid_value(v)),
        ));
    }

    if half_steps > cfg.max_half_step_usage {
        issues.push(Issue::warning(
            "document",
            format!(
                "half-step spacing used {half_steps} times (max {}), prefer multiples of 8",
                cfg.max_half_step_usage
            ),
        ));
    }

    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/spacing.rs"]
mod tests;
