use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::rules::config::RulesConfig;
use crate::rules::rule::Rule;
use crate::rules::types::RuleResult;
use crate::scene::model::Structure;

/// Every rule name, in aggregation order.
pub const RULE_NAMES: [&str; 13] = [
    "hierarchy",
    "touch_targets",
    "gestalt",
    "accessibility",
    "choice_overload",
    "contrast",
    "spacing",
    "typography",
    "elevation",
    "loading_states",
    "responsive",
    "focus",
    "dark_mode",
];

/// An ordered selection of configured rules.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl RuleSet {
    /// All 13 rules with default thresholds.
    pub fn standard() -> Self {
        Self {
            rules: all_rules(&RulesConfig::default()),
        }
    }

    /// Rules from `cfg`, restricted to `cfg.enabled` when present.
    pub fn from_config(cfg: &RulesConfig) -> WirecheckResult<Self> {
        match &cfg.enabled {
            Some(names) => Self::select(cfg, names),
            None => Ok(Self {
                rules: all_rules(cfg),
            }),
        }
    }

    /// Rules named in `names`, kept in aggregation order. An empty list selects everything.
    pub fn select(cfg: &RulesConfig, names: &[String]) -> WirecheckResult<Self> {
        if let Some(bad) = names.iter().find(|n| !RULE_NAMES.contains(&n.as_str())) {
            return Err(WirecheckError::validation(format!(
                "unknown rule '{bad}', expected one of: {}",
                RULE_NAMES.join(", ")
            )));
        }
        let mut rules = all_rules(cfg);
        if !names.is_empty() {
            rules.retain(|r| names.iter().any(|n| n == r.name()));
        }
        Ok(Self { rules })
    }

    /// Selected rule names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of selected rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every selected rule in order.
    pub fn run(&self, doc: &Structure) -> Vec<(&'static str, RuleResult)> {
        self.rules
            .iter()
            .map(|r| {
                let result = r.evaluate(doc);
                tracing::debug!(
                    rule = r.name(),
                    issues = result.issues.len(),
                    passed = result.passed,
                    "rule evaluated"
                );
                (r.name(), result)
            })
            .collect()
    }
}

fn all_rules(cfg: &RulesConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(cfg.hierarchy.clone()),
        Box::new(cfg.touch_targets.clone()),
        Box::new(cfg.gestalt.clone()),
        Box::new(cfg.accessibility.clone()),
        Box::new(cfg.choice_overload.clone()),
        Box::new(cfg.contrast.clone()),
        Box::new(cfg.spacing.clone()),
        Box::new(cfg.typography.clone()),
        Box::new(cfg.elevation.clone()),
        Box::new(cfg.loading_states.clone()),
        Box::new(cfg.responsive.clone()),
        Box::new(cfg.focus.clone()),
        Box::new(cfg.dark_mode.clone()),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/rules/registry.rs"]
mod tests;
