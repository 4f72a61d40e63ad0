//! Typography scale tokens.

use serde::{Deserialize, Serialize};

use crate::rules::rule::Rule;
use crate::rules::types::{Issue, RuleResult};
use crate::scene::model::{ComponentKind, Structure};
use crate::scene::tokens::SizeToken;
use crate::scene::walk::walk;

/// Typography scale parameters. Informational only, quoted in messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    /// Ratio between consecutive scale steps.
    pub scale_ratio: f64,
    /// Base font size in pixels.
    pub base_size: u32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            scale_ratio: 1.25,
            base_size: 16,
        }
    }
}

impl Rule for TypographyConfig {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn evaluate(&self, doc: &Structure) -> RuleResult {
        evaluate(doc, self)
    }
}

/// `xs (12px), sm (14px), …` on the type scale.
pub fn valid_tokens_listing() -> String {
    SizeToken::ALL
        .iter()
        .map(|t| format!("{t} ({}px)", t.scale_px()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flag text components whose size is not one of the nine tokens.
pub fn evaluate(doc: &Structure, cfg: &TypographyConfig) -> RuleResult {
    let mut issues = Vec::new();
    for c in walk(doc).into_iter().map(|v| v.component) {
        if c.kind != ComponentKind::Text || c.size.is_empty() || c.size_token().is_some() {
            continue;
        }
        issues.push(Issue::warning(
            &c.id,
            format!("'{}' is not a valid size token", c.size),
        ));
        issues.push(Issue::info(
            &c.id,
            format!(
                "valid sizes on the {}px / {} scale: {}",
                cfg.base_size,
                cfg.scale_ratio,
                valid_tokens_listing()
            ),
        ));
    }
    RuleResult::from_issues(issues)
}

#[cfg(test)]
#[path = "../../tests/unit/rules/typography.rs"]
mod tests;
