//! Loading, empty and error states.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, Structure};
use crate::scene::walk::walk;

/// Recognized component states. The empty string means "not stateful".
pub const VALID_STATES: [&str; 5] = ["loading", "error", "empty", "default", ""];

/// Recognized skeleton element shapes.
pub const SKELETON_KINDS: [&str; 3] = ["circle", "text", "rect"];

/// Loading-state rule. Has no thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingStatesConfig {}

impl Rule for LoadingStatesConfig {
    fn name(&self) -> &'static str {
        "loading_states"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc)
    }
}

/// Check every component's state and skeleton configuration.
pub fn evaluate(doc: &Structure) -> RuleResult {
    let mut issues = Vec::new();
    for c in walk(doc).into_iter().map(|v| v.component) {
        check_component(c, &mut issues);
    }
    RuleResult::from_issues(issues)
}

fn check_component(c: &Component, issues: &mut Vec<Issue>) {
    let state = c.state.as_str();
    if !VALID_STATES.contains(&state) {
        issues.push(Issue::error(
            &c.id,
            format!("unknown state '{state}', expected loading, error, empty or default"),
        ));
    }
    if state == "loading" && c.skeleton.is_none() {
        issues.push(Issue::info(
            &c.id,
            "loading state has no skeleton placeholder",
        ));
    }
    if let Some(skeleton) = &c.skeleton {
        for (i, el) in skeleton.elements.iter().enumerate() {
            match el.kind.as_str() {
                "circle" if el.size == 0 => issues.push(Issue::warning(
                    &c.id,
                    format!("skeleton element {i} (circle) has no size"),
                )),
                k @ ("text" | "rect") if el.width == 0 => issues.push(Issue::warning(
                    &c.id,
                    format!("skeleton element {i} ({k}) has no width"),
                )),
                k if !SKELETON_KINDS.contains(&k) => issues.push(Issue::error(
                    &c.id,
                    format!("skeleton element {i} has unknown type '{k}'"),
                )),
                _ => {}
            }
        }
    }
    if (state == "empty" || state == "error") && c.content.is_empty() && c.children.is_empty() {
        issues.push(Issue::info(
            &c.id,
            format!("{state} state shows nothing, add a message or an action"),
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rules/loading_states.rs"]
mod tests;
