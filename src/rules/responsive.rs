//! Breakpoint fit.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Viewport;
use crate::rules::geometry::Geometry;
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::Structure;
use crate::scene::tokens::TOUCH_TARGET_MIN_PX;
use crate::scene::walk::walk;

/// Thresholds for the responsive rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveConfig {
    /// Minimum touch target edge on mobile.
    pub mobile_min_target: u32,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            mobile_min_target: TOUCH_TARGET_MIN_PX,
        }
    }
}

impl Rule for ResponsiveConfig {
    fn name(&self) -> &'static str {
        "responsive"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// Check widths against each breakpoint, and touch targets on mobile.
pub fn evaluate(doc: &Structure, cfg: &ResponsiveConfig) -> RuleResult {
    let visits = walk(doc);
    let mut issues = Vec::new();

    for vp in Viewport::ALL {
        let bp = vp.breakpoint_width();
        let label = vp.as_str();
        if doc.layout.max_width > bp {
            issues.push(
                Issue::warning(
                    "layout",
                    format!(
                        "max_width {}px exceeds the {label} breakpoint ({bp}px)",
                        doc.layout.max_width
                    ),
                )
                .with_viewport(label),
            );
        }
        for c in visits.iter().map(|v| v.component) {
            for (field, v) in [("width", c.layout.width), ("max_width", c.layout.max_width)] {
                if v > bp {
                    issues.push(
                        Issue::warning(
                            &c.id,
                            format!("{field} {v}px exceeds the {label} breakpoint ({bp}px)"),
                        )
                        .with_viewport(label),
                    );
                }
            }
        }

        if vp == Viewport::Mobile {
            let geom = Geometry::estimate(doc, f64::from(bp));
            let min = f64::from(cfg.mobile_min_target);
            for c in visits.iter().map(|v| v.component) {
                if !c.is_interactive() {
                    continue;
                }
                let Some(r) = geom.rect(&c.id) else {
                    continue;
                };
                if r.width() < min || r.height() < min {
                    issues.push(
                        Issue::warning(
                            &c.id,
                            format!(
                                "{}x{}px is below the {}px mobile touch target",
                                r.width().round(),
                                r.height().round(),
                                cfg.mobile_min_target
                            ),
                        )
                        .with_viewport(label),
                    );
                }
            }
        }
    }

    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/responsive.rs"]
mod tests;
