use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::rules::accessibility::AccessibilityConfig;
use crate::rules::choice_overload::ChoiceOverloadConfig;
use crate::rules::contrast::ContrastConfig;
use crate::rules::dark_mode::DarkModeConfig;
use crate::rules::elevation::ElevationConfig;
use crate::rules::focus::FocusConfig;
use crate::rules::gestalt::GestaltConfig;
use crate::rules::hierarchy::HierarchyConfig;
use crate::rules::loading_states::LoadingStatesConfig;
use crate::rules::responsive::ResponsiveConfig;
use crate::rules::spacing::SpacingConfig;
use crate::rules::touch_targets::TouchTargetConfig;
use crate::rules::typography::TypographyConfig;

/// Thresholds for every rule plus an optional allow-list.
///
/// Missing keys keep their defaults and unknown keys are ignored, so a config file only needs
/// to mention what it changes:
///
/// ```json
/// { "enabled": ["contrast", "spacing"], "spacing": { "max_half_step_usage": 2 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule names to run, in the standard order. `None` runs all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Vec<String>>,
    /// Visual hierarchy.
    pub hierarchy: HierarchyConfig,
    /// Touch targets and spacing between them.
    pub touch_targets: TouchTargetConfig,
    /// Proximity and similarity.
    pub gestalt: GestaltConfig,
    /// Labels, headings, depth, focus declaration.
    pub accessibility: AccessibilityConfig,
    /// Hick's law limits.
    pub choice_overload: ChoiceOverloadConfig,
    /// WCAG thresholds.
    pub contrast: ContrastConfig,
    /// 8-pt grid.
    pub spacing: SpacingConfig,
    /// Type scale.
    pub typography: TypographyConfig,
    /// Elevation scale.
    pub elevation: ElevationConfig,
    /// State coverage.
    pub loading_states: LoadingStatesConfig,
    /// Breakpoints.
    pub responsive: ResponsiveConfig,
    /// Focus reminders.
    pub focus: FocusConfig,
    /// Dark-mode hints.
    pub dark_mode: DarkModeConfig,
}

impl RulesConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> WirecheckResult<Self> {
        serde_json::from_str(s).map_err(|e| WirecheckError::serde(format!("rules config: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> WirecheckResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            WirecheckError::serde(format!("read rules config {}: {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rules/config.rs"]
mod tests;
