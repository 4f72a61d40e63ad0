//! Labels, heading order, nesting depth, focus declaration and tab order.

use serde::{Deserialize, Serialize};

use crate::rules::classify::headings;
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::tokens::MAX_NESTING_DEPTH;
use crate::scene::walk::{first_too_deep, id_prefix, walk};

const BLANKET_LABELS: &str = "all_interactive_elements";
const LABEL_SUFFIXES: [&str; 4] = ["-input", "-field", "-button", "-btn"];

/// Thresholds for the accessibility rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Deepest allowed nesting level, root components at 0.
    pub max_nesting_depth: usize,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl Rule for AccessibilityConfig {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// ID a label text is expected to carry for the given interactive element.
pub fn label_id_for(id: &str) -> String {
    let base = LABEL_SUFFIXES
        .iter()
        .find_map(|s| id.strip_suffix(s))
        .unwrap_or(id);
    format!("{base}-label")
}

/// Run every accessibility check in a fixed order.
pub fn evaluate(doc: &Structure, cfg: &AccessibilityConfig) -> RuleResult {
    let visits = walk(doc);
    let mut issues = Vec::new();

    let blanket = doc.accessibility.labels == BLANKET_LABELS;
    for c in visits.iter().map(|v| v.component) {
        if !c.is_interactive() || blanket || !c.content.is_empty() {
            continue;
        }
        let wanted = label_id_for(&c.id);
        let labelled = visits
            .iter()
            .any(|v| v.component.kind == ComponentKind::Text && v.component.id == wanted);
        if !labelled {
            issues.push(Issue::error(
                &c.id,
                format!("{} has no label (add content or a '{wanted}' text)", c.kind),
            ));
        }
    }

    let mut prev: Option<u8> = None;
    for h in headings(doc) {
        if let Some(p) = prev
            && h.level > p + 1
        {
            issues.push(Issue::error(
                &h.component.id,
                format!("heading level skipped: h{p} followed by h{}", h.level),
            ));
        }
        prev = Some(h.level);
    }

    if let Some(v) = first_too_deep(doc, cfg.max_nesting_depth) {
        issues.push(Issue::error(
            &v.component.id,
            format!(
                "nesting depth {} exceeds maximum of {}",
                v.depth, cfg.max_nesting_depth
            ),
        ));
    }

    let has_interactive = visits.iter().any(|v| v.component.is_interactive());
    if has_interactive && doc.accessibility.focus_indicators != "visible" {
        issues.push(Issue::warning(
            "document",
            "accessibility.focus_indicators should be \"visible\"",
        ));
    }

    for v in &visits {
        let Some(next) = v.siblings.get(v.index + 1) else {
            continue;
        };
        if tab_order_confusing(v.component, next) {
            issues.push(Issue::warning(
                &v.component.id,
                format!(
                    "button comes before input '{}' in the same group, tab order may confuse",
                    next.id
                ),
            ));
        }
    }

    RuleResult::from_issues(issues)
}

fn tab_order_confusing(first: &Component, second: &Component) -> bool {
    first.kind == ComponentKind::Button
        && second.kind == ComponentKind::Input
        && id_prefix(&first.id) == id_prefix(&second.id)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/accessibility.rs"]
mod tests;
