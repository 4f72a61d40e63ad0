//! Visual hierarchy: heading sizes follow heading levels and the primary action dominates.

use serde::{Deserialize, Serialize};

use crate::rules::classify::{button_width, headings, is_primary_button};
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::walk::walk;

/// Thresholds for the hierarchy rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Minimum width of a primary button.
    pub min_primary_cta_size: u32,
    /// Recommended ratio between adjacent heading sizes. Only quoted in messages.
    pub scale_ratio: f64,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            min_primary_cta_size: 120,
            scale_ratio: 1.25,
        }
    }
}

impl Rule for HierarchyConfig {
    fn name(&self) -> &'static str {
        "hierarchy"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// Check heading sizes against levels and button widths against the primary action.
pub fn evaluate(doc: &Structure, cfg: &HierarchyConfig) -> RuleResult {
    let mut issues = Vec::new();

    let hs = headings(doc);
    for (i, a) in hs.iter().enumerate() {
        for b in &hs[i + 1..] {
            let (major, minor) = match a.level.cmp(&b.level) {
                std::cmp::Ordering::Less => (a, b),
                std::cmp::Ordering::Greater => (b, a),
                std::cmp::Ordering::Equal => continue,
            };
            let (Some(major_size), Some(minor_size)) = (major.size, minor.size) else {
                continue;
            };
            if major_size <= minor_size {
                issues.push(Issue::warning(
                    &minor.component.id,
                    format!(
                        "h{} '{}' ({}) should be smaller than h{} '{}' ({}); use a scale ratio of about {}",
                        minor.level,
                        minor.component.id,
                        minor_size,
                        major.level,
                        major.component.id,
                        major_size,
                        cfg.scale_ratio
                    ),
                ));
            }
        }
    }

    let buttons: Vec<&Component> = walk(doc)
        .into_iter()
        .map(|v| v.component)
        .filter(|c| c.kind == ComponentKind::Button)
        .collect();
    let (primaries, secondaries): (Vec<&Component>, Vec<&Component>) =
        buttons.into_iter().partition(|c| is_primary_button(c, doc));

    for p in &primaries {
        let w = button_width(p);
        if w < cfg.min_primary_cta_size {
            issues.push(Issue::warning(
                &p.id,
                format!(
                    "primary button is {w}px wide, below the {}px minimum",
                    cfg.min_primary_cta_size
                ),
            ));
        }
    }

    for s in &secondaries {
        let sw = button_width(s);
        for p in &primaries {
            let pw = button_width(p);
            if sw > pw {
                issues.push(Issue::error(
                    &s.id,
                    format!(
                        "secondary button ({sw}px) is wider than primary '{}' ({pw}px)",
                        p.id
                    ),
                ));
            }
        }
    }

    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/hierarchy.rs"]
mod tests;
