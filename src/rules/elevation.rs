//! Elevation scale for shadows.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::walk::walk;

/// Canonical box-shadow per elevation level 0–5.
pub const ELEVATION_SHADOWS: [&str; 6] = [
    "none",
    "0 1px 2px 0 rgba(0,0,0,0.05)",
    "0 2px 4px 0 rgba(0,0,0,0.1)",
    "0 4px 8px 0 rgba(0,0,0,0.12)",
    "0 8px 16px 0 rgba(0,0,0,0.15)",
    "0 16px 32px 0 rgba(0,0,0,0.2)",
];

/// Elevation rule. Has no thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationConfig {}

impl Rule for ElevationConfig {
    fn name(&self) -> &'static str {
        "elevation"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc)
    }
}

fn normalize(shadow: &str) -> String {
    shadow
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(", ", ",")
        .replace("( ", "(")
        .replace(" )", ")")
}

/// Level of a shadow string that matches the scale after whitespace and case normalization.
pub fn validate_shadow_value(shadow: &str) -> Option<u8> {
    let n = normalize(shadow);
    ELEVATION_SHADOWS
        .iter()
        .position(|s| *s == n)
        .map(|i| i as u8)
}

/// Closest level for an arbitrary shadow, bucketed by blur radius.
///
/// The blur radius is the third length of the shadow. Returns `None` when it cannot be read.
pub fn closest_level(shadow: &str) -> Option<u8> {
    let n = normalize(shadow);
    if n == "none" {
        return Some(0);
    }
    let blur: f64 = n
        .split(' ')
        .nth(2)?
        .trim_end_matches("px")
        .parse()
        .ok()?;
    Some(match blur {
        b if b <= 1.0 => 1,
        b if b <= 3.0 => 2,
        b if b <= 6.0 => 3,
        b if b <= 12.0 => 4,
        _ => 5,
    })
}

/// Recommended level for the component's (type, role).
pub fn recommended_level(c: &Component) -> Option<u8> {
    let role = c.role_lower();
    match (&c.kind, role.as_str()) {
        (ComponentKind::Box, "card") => Some(1),
        (ComponentKind::Button, _) => Some(2),
        (ComponentKind::Box, "dropdown" | "menu") => Some(3),
        (ComponentKind::Box, "modal" | "dialog") => Some(4),
        _ => None,
    }
}

/// Recommend levels for canonical roles and check declared shadows against the scale.
pub fn evaluate(doc: &Structure) -> RuleResult {
    let mut issues = Vec::new();
    for c in walk(doc).into_iter().map(|v| v.component) {
        let rec = recommended_level(c);
        if let Some(level) = rec {
            let what = if c.role.is_empty() {
                c.kind.as_str()
            } else {
                c.role.as_str()
            };
            issues.push(Issue::info(
                &c.id,
                format!(
                    "{what} sits at elevation {level}: box-shadow {}",
                    ELEVATION_SHADOWS[usize::from(level)]
                ),
            ));
        }

        let shadow = c.layout.box_shadow.trim();
        if shadow.is_empty() {
            continue;
        }
        match validate_shadow_value(shadow) {
            Some(level) => {
                if let Some(want) = rec
                    && want != level
                {
                    issues.push(Issue::info(
                        &c.id,
                        format!("box-shadow is elevation {level}, expected {want}"),
                    ));
                }
            }
            None => {
                let msg = match closest_level(shadow) {
                    Some(l) => format!(
                        "box-shadow '{shadow}' is off the elevation scale, closest is level {l}: {}",
                        ELEVATION_SHADOWS[usize::from(l)]
                    ),
                    None => format!("box-shadow '{shadow}' is off the elevation scale"),
                };
                issues.push(Issue::warning(&c.id, msg));
            }
        }
    }
    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/elevation.rs"]
mod tests;
