//! Touch target size and spacing between interactive elements.

use serde::{Deserialize, Serialize};

use crate::rules::classify::is_dangerous;
use crate::rules::geometry::{Geometry, axis_gap};
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, Structure};
use crate::scene::tokens::TOUCH_TARGET_MIN_PX;
use crate::scene::walk::walk;

/// Thresholds for the touch-target rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchTargetConfig {
    /// Minimum edge length of a button or input.
    pub min_size: u32,
    /// Minimum gap between two interactive elements.
    pub min_spacing: u32,
    /// Minimum gap when either element is a dangerous action.
    pub dangerous_spacing: u32,
    /// Root width used for the geometry estimate.
    pub viewport_width: u32,
}

impl Default for TouchTargetConfig {
    fn default() -> Self {
        Self {
            min_size: TOUCH_TARGET_MIN_PX,
            min_spacing: 8,
            dangerous_spacing: 16,
            viewport_width: 1200,
        }
    }
}

impl Rule for TouchTargetConfig {
    fn name(&self) -> &'static str {
        "touch_targets"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// Check target sizes, then pairwise spacing of axis-aligned interactive elements.
pub fn evaluate(doc: &Structure, cfg: &TouchTargetConfig) -> RuleResult {
    let geom = Geometry::estimate(doc, f64::from(cfg.viewport_width));
    let targets: Vec<(&Component, kurbo::Rect)> = walk(doc)
        .into_iter()
        .map(|v| v.component)
        .filter(|c| c.is_interactive())
        .filter_map(|c| geom.rect(&c.id).map(|r| (c, r)))
        .collect();

    let mut issues = Vec::new();
    let min = f64::from(cfg.min_size);
    for (c, r) in &targets {
        if r.width() < min || r.height() < min {
            issues.push(Issue::error(
                &c.id,
                format!(
                    "touch target is {}x{}px, minimum is {}x{}px",
                    r.width().round(),
                    r.height().round(),
                    cfg.min_size,
                    cfg.min_size
                ),
            ));
        }
    }

    for (i, (a, ra)) in targets.iter().enumerate() {
        for (b, rb) in &targets[i + 1..] {
            let Some(gap) = axis_gap(*ra, *rb) else {
                continue;
            };
            let dangerous = [a, b].into_iter().find(|c| is_dangerous(c));
            if let Some(d) = dangerous {
                if gap < f64::from(cfg.dangerous_spacing) {
                    let other = if d.id == a.id { &b.id } else { &a.id };
                    issues.push(Issue::error(
                        &d.id,
                        format!(
                            "destructive action is {}px from '{other}', keep at least {}px",
                            gap.round(),
                            cfg.dangerous_spacing
                        ),
                    ));
                }
            } else if gap < f64::from(cfg.min_spacing) {
                issues.push(Issue::warning(
                    &b.id,
                    format!(
                        "only {}px from '{}', keep at least {}px between touch targets",
                        gap.round(),
                        a.id,
                        cfg.min_spacing
                    ),
                ));
            }
        }
    }

    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/touch_targets.rs"]
mod tests;
