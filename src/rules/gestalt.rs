//! Gestalt proximity and similarity.

use serde::{Deserialize, Serialize};

use crate::rules::geometry::{Geometry, axis_gap};
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::walk::{id_prefix, walk};

/// Thresholds for the gestalt rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestaltConfig {
    /// Expected spacing inside a group. Related items may sit up to twice this apart.
    pub intra_group_spacing: u32,
    /// Minimum spacing between unrelated items.
    pub inter_group_spacing: u32,
    /// Root width used for the geometry estimate.
    pub viewport_width: u32,
}

impl Default for GestaltConfig {
    fn default() -> Self {
        Self {
            intra_group_spacing: 16,
            inter_group_spacing: 24,
            viewport_width: 1200,
        }
    }
}

impl Rule for GestaltConfig {
    fn name(&self) -> &'static str {
        "gestalt"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// `true` when two siblings belong to the same visual group.
pub fn are_related(a: &Component, b: &Component) -> bool {
    let pa = id_prefix(&a.id);
    if !pa.is_empty() && pa == id_prefix(&b.id) {
        return true;
    }
    if a.kind == b.kind && !a.role.is_empty() && a.role == b.role {
        return true;
    }
    let label_pair = matches!(
        (&a.kind, &b.kind),
        (ComponentKind::Text, ComponentKind::Input) | (ComponentKind::Input, ComponentKind::Text)
    );
    label_pair && (a.id_lower().contains("label") || b.id_lower().contains("label"))
}

/// Proximity within every sibling list, then similarity across role groups.
pub fn evaluate(doc: &Structure, cfg: &GestaltConfig) -> RuleResult {
    let geom = Geometry::estimate(doc, f64::from(cfg.viewport_width));
    let mut issues = Vec::new();

    let mut lists: Vec<&[Component]> = vec![&doc.components];
    lists.extend(
        walk(doc)
            .into_iter()
            .filter(|v| !v.component.children.is_empty())
            .map(|v| v.component.children.as_slice()),
    );
    let max_related = f64::from(cfg.intra_group_spacing) * 2.0;
    let min_unrelated = f64::from(cfg.inter_group_spacing);
    for list in lists {
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                let (Some(ra), Some(rb)) = (geom.rect(&a.id), geom.rect(&b.id)) else {
                    continue;
                };
                let Some(gap) = axis_gap(ra, rb) else {
                    continue;
                };
                if are_related(a, b) {
                    if gap > max_related {
                        issues.push(Issue::warning(
                            &b.id,
                            format!(
                                "related to '{}' but {}px away, keep related items within {}px",
                                a.id,
                                gap.round(),
                                max_related
                            ),
                        ));
                    }
                } else if gap < min_unrelated {
                    issues.push(Issue::info(
                        &b.id,
                        format!(
                            "unrelated to '{}' but only {}px away, separate groups by at least {}px",
                            a.id,
                            gap.round(),
                            cfg.inter_group_spacing
                        ),
                    ));
                }
            }
        }
    }

    issues.extend(similarity(doc));
    RuleResult::from_issues(issues)
}

fn similarity(doc: &Structure) -> Vec<Issue> {
    let mut groups: Vec<((&ComponentKind, &str), Vec<&Component>)> = Vec::new();
    for v in walk(doc) {
        let c = v.component;
        if c.role.is_empty() {
            continue;
        }
        let key = (&c.kind, c.role.as_str());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(c),
            None => groups.push((key, vec![c])),
        }
    }

    let mut issues = Vec::new();
    for ((kind, role), members) in groups {
        if members.len() < 2 {
            continue;
        }
        let first = &members[0].id;
        let sizes = distinct(members.iter().map(|c| c.size.as_str()));
        if sizes > 1 {
            issues.push(Issue::warning(
                first,
                format!("{role} {kind} components use {sizes} different sizes"),
            ));
        }
        let colors = distinct(members.iter().map(|c| c.color.as_str()));
        if colors > 1 {
            issues.push(Issue::warning(
                first,
                format!("{role} {kind} components use {colors} different colors"),
            ));
        }
        let paddings = distinct(members.iter().map(|c| c.layout.padding));
        if paddings > 2 {
            issues.push(Issue::warning(
                first,
                format!("{role} {kind} components use {paddings} different paddings"),
            ));
        }
    }
    issues
}

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> usize {
    let mut seen: Vec<T> = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen.len()
}

#[cfg(test)]
#[path = "../../tests/unit/rules/gestalt.rs"]
mod tests;
