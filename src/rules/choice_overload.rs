//! Hick's law: containers that offer too many choices.

use serde::{Deserialize, Serialize};

use crate::rules::classify::{direct_button_count, is_card_grid, is_form, is_navigation};
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{ComponentKind, Structure};
use crate::scene::walk::{descendants, walk};

/// Limits for the choice-overload rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceOverloadConfig {
    /// Interactive descendants of a navigation container.
    pub max_nav_items: usize,
    /// Input descendants of a form.
    pub max_form_fields: usize,
    /// Direct button children of a button group.
    pub max_button_group: usize,
    /// Direct children of a card grid.
    pub max_grid_items: usize,
}

impl Default for ChoiceOverloadConfig {
    fn default() -> Self {
        Self {
            max_nav_items: 7,
            max_form_fields: 7,
            max_button_group: 3,
            max_grid_items: 12,
        }
    }
}

impl Rule for ChoiceOverloadConfig {
    fn name(&self) -> &'static str {
        "choice_overload"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// Classify each container once (navigation, form, card grid, then button group) and check its
/// limit.
pub fn evaluate(doc: &Structure, cfg: &ChoiceOverloadConfig) -> RuleResult {
    let mut issues = Vec::new();
    for c in walk(doc).into_iter().map(|v| v.component) {
        if c.children.is_empty() {
            continue;
        }
        let (category, what, count, max) = if is_navigation(c) {
            let n = descendants(c).filter(|d| d.is_interactive()).count();
            ("navigation_overload", "navigation items", n, cfg.max_nav_items)
        } else if is_form(c) {
            let n = descendants(c)
                .filter(|d| d.kind == ComponentKind::Input)
                .count();
            ("form_overload", "form fields", n, cfg.max_form_fields)
        } else if is_card_grid(c) {
            ("card_grid_overload", "grid items", c.children.len(), cfg.max_grid_items)
        } else {
            let n = direct_button_count(c);
            if n < 2 {
                continue;
            }
            ("button_group_overload", "buttons", n, cfg.max_button_group)
        };
        if count > max {
            issues.push(
                Issue::warning(
                    &c.id,
                    format!("{count} {what} exceeds the recommended maximum of {max}"),
                )
                .with_category(category),
            );
        }
    }
    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/choice_overload.rs"]
mod tests;
