use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scene::px;
use crate::scene::tokens::SizeToken;

/// Root of a Phase 1 structure document.
///
/// The model is a pure value tree: parents own their children and there are no back-pointers.
/// Every consumer borrows a loaded `Structure` read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    /// Document version label, e.g. `"v3"`.
    pub version: String,
    /// Version this document was derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_version: Option<String>,
    /// Lifecycle phase, `"structure"` or `"design"`.
    pub phase: String,
    /// Set once the document has been approved.
    pub locked: bool,
    /// Approval timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<String>,
    /// Who approved the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// What the screen is for.
    pub intent: Intent,
    /// Root layout.
    pub layout: Layout,
    /// Top-level components, in document order.
    pub components: Vec<Component>,
    /// Breakpoint overrides.
    pub responsive: Responsive,
    /// Accessibility declarations.
    pub accessibility: Accessibility,
    /// Prior self-reported validation scores, kept verbatim.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub validation: serde_json::Value,
}

/// Narrative intent of the screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    /// Why the screen exists.
    pub purpose: String,
    /// ID of the component carrying the primary action.
    pub primary_action: String,
    /// Who uses it and in which situation.
    pub user_context: String,
    /// Ordered list of the main interactions.
    pub key_interactions: Vec<String>,
}

/// Document-level layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// `stack`, `grid` or `sidebar`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `vertical` or `horizontal`.
    pub direction: String,
    /// Gap between root components.
    #[serde(deserialize_with = "px::deserialize")]
    pub spacing: u32,
    /// Maximum content width, 0 = unbounded.
    #[serde(deserialize_with = "px::deserialize")]
    pub max_width: u32,
    /// Outer padding.
    #[serde(deserialize_with = "px::deserialize")]
    pub padding: u32,
}

/// A node in the component tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Unique ID within the document.
    pub id: String,
    /// Component type tag.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Free-form semantic role (`header`, `navigation`, `card`, `modal`, …).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
    /// UI state: `loading`, `error`, `empty`, `default` or empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    /// Box model and flex/grid properties.
    pub layout: ComponentLayout,
    /// Text, label or placeholder.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Typographic size token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub size: String,
    /// `normal` or `bold`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub weight: String,
    /// Foreground hex color.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Child components, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
    /// Skeleton placeholder used while `state == "loading"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<Skeleton>,
}

impl Component {
    /// `true` for buttons and inputs.
    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, ComponentKind::Button | ComponentKind::Input)
    }

    /// Parsed size token; empty sizes resolve to `base`, unknown tokens to `None`.
    pub fn size_token(&self) -> Option<SizeToken> {
        SizeToken::parse_or_base(&self.size)
    }

    /// `true` when `weight == "bold"`.
    pub fn is_bold(&self) -> bool {
        self.weight.eq_ignore_ascii_case("bold")
    }

    /// Lowercased ID, for fuzzy classification.
    pub fn id_lower(&self) -> String {
        self.id.to_ascii_lowercase()
    }

    /// Lowercased role, for fuzzy classification.
    pub fn role_lower(&self) -> String {
        self.role.to_ascii_lowercase()
    }

    /// `true` when the lowercased ID or role contains any of `needles`.
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        let id = self.id_lower();
        let role = self.role_lower();
        needles.iter().any(|n| id.contains(n) || role.contains(n))
    }

    /// Number of components in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Component::subtree_len).sum::<usize>()
    }
}

/// Box model and flex/grid properties of a component. Numeric fields are pixels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentLayout {
    /// `flex`, `grid` or `block`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display: String,
    /// `vertical` or `horizontal`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction: String,
    /// Padding on all four sides.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub padding: u32,
    /// Background hex color.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub background: String,
    /// Border on all four sides (CSS-ish).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub border: String,
    /// Bottom border only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub border_bottom: String,
    /// Right border only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub border_right: String,
    /// Gap between children.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub gap: u32,
    /// Track list such as `"repeat(4, 1fr)"` or `"300px 1fr 300px"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub grid_template_columns: String,
    /// Explicit width.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub width: u32,
    /// Explicit height.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub height: u32,
    /// Minimum height.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub min_height: u32,
    /// Maximum width.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub max_width: u32,
    /// Flex grow factor.
    #[serde(skip_serializing_if = "is_zero")]
    pub flex: u32,
    /// `flex-start`, `center` or `space-between`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub justify_content: String,
    /// Cross-axis alignment, carried but not used by the solver.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub align_items: String,
    /// Bottom margin.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub margin_bottom: u32,
    /// CSS box-shadow, checked against the elevation scale.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub box_shadow: String,
}

impl ComponentLayout {
    /// `true` for horizontal main axis.
    pub fn is_horizontal(&self) -> bool {
        self.direction.eq_ignore_ascii_case("horizontal")
            || self.direction.eq_ignore_ascii_case("row")
    }

    /// `true` for `display: grid`.
    pub fn is_grid(&self) -> bool {
        self.display.eq_ignore_ascii_case("grid")
    }

    /// `true` for `display: flex`.
    pub fn is_flex(&self) -> bool {
        self.display.eq_ignore_ascii_case("flex")
    }

    /// `true` when any border string is present.
    pub fn has_any_border(&self) -> bool {
        !self.border.is_empty() || !self.border_bottom.is_empty() || !self.border_right.is_empty()
    }
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

/// Component type tag. Unknown tags are preserved so the schema validator can report them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    /// Container.
    Box,
    /// Text run.
    Text,
    /// Form field.
    Input,
    /// Button.
    Button,
    /// Image placeholder.
    Image,
    /// Anything else, kept verbatim.
    Unknown(String),
}

impl ComponentKind {
    /// Wire name.
    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Box => "box",
            ComponentKind::Text => "text",
            ComponentKind::Input => "input",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::Unknown(s) => s,
        }
    }
}

impl Default for ComponentKind {
    fn default() -> Self {
        ComponentKind::Unknown(String::new())
    }
}

impl From<String> for ComponentKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "box" => ComponentKind::Box,
            "text" => ComponentKind::Text,
            "input" => ComponentKind::Input,
            "button" => ComponentKind::Button,
            "image" => ComponentKind::Image,
            _ => ComponentKind::Unknown(value),
        }
    }
}

impl From<ComponentKind> for String {
    fn from(value: ComponentKind) -> Self {
        match value {
            ComponentKind::Unknown(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skeleton placeholder configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skeleton {
    /// Placeholder shapes, in drawing order.
    pub elements: Vec<SkeletonElement>,
    /// Optional animation name (`pulse`, `wave`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub animation: String,
}

/// One skeleton shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonElement {
    /// `circle`, `text` or `rect`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Width for `text` / `rect`.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub width: u32,
    /// Height for `rect`.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub height: u32,
    /// Diameter for `circle`.
    #[serde(deserialize_with = "px::deserialize", skip_serializing_if = "is_zero")]
    pub size: u32,
}

/// Breakpoint overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Responsive {
    /// Mobile breakpoint.
    pub mobile: Breakpoint,
    /// Tablet breakpoint.
    pub tablet: Breakpoint,
}

/// One breakpoint and its change map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoint {
    /// Width at which the breakpoint applies.
    #[serde(deserialize_with = "px::deserialize")]
    pub breakpoint: u32,
    /// Component ID (or property) to change description.
    pub changes: BTreeMap<String, serde_json::Value>,
}

/// Accessibility declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessibility {
    /// Declared minimum touch target.
    #[serde(deserialize_with = "px::deserialize")]
    pub touch_targets_min: u32,
    /// `visible`, `hidden`, …
    pub focus_indicators: String,
    /// Labelling policy, e.g. `all_interactive_elements`.
    pub labels: String,
    /// Whether semantic structure is declared.
    pub semantic_structure: bool,
}

impl Structure {
    /// Total number of components in the tree.
    pub fn component_count(&self) -> usize {
        self.components.iter().map(Component::subtree_len).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
