//! Focus indicator reminders.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::Structure;
use crate::scene::walk::walk;

/// Focus ring requirements quoted in the reminders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Minimum outline width in pixels.
    pub min_outline_width: u32,
    /// Minimum contrast of the outline against its surroundings.
    pub min_contrast: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            min_outline_width: 2,
            min_contrast: 3.0,
        }
    }
}

impl Rule for FocusConfig {
    fn name(&self) -> &'static str {
        "focus"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// One reminder per interactive element. Never fails.
pub fn evaluate(doc: &Structure, cfg: &FocusConfig) -> RuleResult {
    let issues = walk(doc)
        .into_iter()
        .map(|v| v.component)
        .filter(|c| c.is_interactive())
        .map(|c| {
            Issue::info(
                &c.id,
                format!(
                    "define a visible focus state (outline >= {}px, contrast >= {}:1)",
                    cfg.min_outline_width, cfg.min_contrast
                ),
            )
        })
        .collect();
    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/focus.rs"]
mod tests;
