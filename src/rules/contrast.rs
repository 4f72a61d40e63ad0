//! WCAG AA color contrast.

use serde::{Deserialize, Serialize};

use crate::foundation::color::{Rgba8, contrast_ratio, suggest_accessible_foreground};
use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::tokens::SizeToken;

/// Thresholds for the contrast rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Minimum ratio for normal text.
    pub normal_text: f64,
    /// Minimum ratio for large text.
    pub large_text: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            normal_text: 4.5,
            large_text: 3.0,
        }
    }
}

impl Rule for ContrastConfig {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// WCAG large text: `xl` and up, or `lg` and up when bold.
pub fn is_large_text(c: &Component) -> bool {
    match c.size_token() {
        Some(s) => s >= SizeToken::Xl || (s >= SizeToken::Lg && c.is_bold()),
        None => false,
    }
}

/// Walk the tree with the inherited background and check every colored text and every button.
pub fn evaluate(doc: &Structure, cfg: &ContrastConfig) -> RuleResult {
    let mut issues = Vec::new();
    for c in &doc.components {
        visit(c, Rgba8::WHITE, cfg, &mut issues);
    }
    RuleResult::from_issues(issues)
}

fn visit(c: &Component, inherited: Rgba8, cfg: &ContrastConfig, issues: &mut Vec<Issue>) {
    let bg = Rgba8::from_hex_or(&c.layout.background, inherited);
    match c.kind {
        ComponentKind::Text if !c.color.is_empty() => {
            if let Ok(fg) = Rgba8::from_hex(&c.color) {
                check(c, fg, bg, cfg, issues);
            }
        }
        ComponentKind::Button => {
            let fg = Rgba8::from_hex_or(&c.color, Rgba8::WHITE);
            let bg = Rgba8::from_hex_or(&c.layout.background, Rgba8::BLACK);
            check(c, fg, bg, cfg, issues);
        }
        _ => {}
    }
    for child in &c.children {
        visit(child, bg, cfg, issues);
    }
}

fn check(c: &Component, fg: Rgba8, bg: Rgba8, cfg: &ContrastConfig, issues: &mut Vec<Issue>) {
    let (target, label) = if is_large_text(c) {
        (cfg.large_text, "large")
    } else {
        (cfg.normal_text, "normal")
    };
    let ratio = contrast_ratio(fg, bg);
    if ratio >= target {
        return;
    }
    issues.push(Issue::error(
        &c.id,
        format!(
            "contrast {ratio:.2}:1 of {} on {} is below {target}:1 for {label} text",
            fg.to_hex(),
            bg.to_hex()
        ),
    ));
    if let Some((better, r)) = suggest_accessible_foreground(fg, bg, target) {
        issues.push(Issue::info(
            &c.id,
            format!("use {} instead ({r:.2}:1)", better.to_hex()),
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rules/contrast.rs"]
mod tests;
