//! Wirecheck reviews Phase 1 wireframe documents.
//!
//! A Phase 1 structure is a black-and-white JSON wireframe: a tree of boxes, text, inputs,
//! buttons and image placeholders plus the screen's intent. Wirecheck can
//!
//! - validate it against the Phase 1 schema ([`Structure::validate`]),
//! - lay it out and rasterize it ([`compute_layout`], [`render_document`]),
//! - run 13 design-rule evaluators over it ([`RuleSet`], [`run_audit`]),
//! - suggest UI patterns ([`suggest`]),
//! - and manage the versioned documents of a project directory ([`Project`]).
//!
//! Everything except the project helpers is pure and in-memory; a loaded [`Structure`] is
//! borrowed read-only by every stage.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod layout;
pub(crate) mod project;
pub(crate) mod render;
pub(crate) mod report;
pub(crate) mod rules;
pub(crate) mod scene;
pub(crate) mod schema;
pub(crate) mod suggest;

pub use crate::foundation::color::{Rgba8, contrast_ratio, suggest_accessible_foreground};
pub use crate::foundation::core::{RectPx, Scale, Viewport};
pub use crate::foundation::error::{WirecheckError, WirecheckResult};

pub use crate::scene::model::{
    Accessibility, Breakpoint, Component, ComponentKind, ComponentLayout, Intent, Layout,
    Responsive, Skeleton, SkeletonElement, Structure,
};
pub use crate::scene::tokens::{
    MAX_NESTING_DEPTH, PHASE1_PALETTE, SPACING_GRID, SizeToken, TOUCH_TARGET_MIN_PX,
    nearest_grid_value,
};
pub use crate::scene::walk::{Visit, walk};
pub use crate::schema::validate::{SchemaError, validate_structure};

pub use crate::layout::solver::{LayoutMap, compute_layout};
pub use crate::render::compare::{COMPARE_GUTTER, compose_side_by_side};
pub use crate::render::cpu::{
    MAX_CANVAS_PIXELS, MIN_CANVAS_HEIGHT, RenderOpts, render_document, render_structure,
};
pub use crate::render::raster::FrameRGBA;

pub use crate::rules::accessibility::AccessibilityConfig;
pub use crate::rules::choice_overload::ChoiceOverloadConfig;
pub use crate::rules::config::RulesConfig;
pub use crate::rules::contrast::ContrastConfig;
pub use crate::rules::dark_mode::DarkModeConfig;
pub use crate::rules::elevation::{
    ELEVATION_SHADOWS, ElevationConfig, closest_level, validate_shadow_value,
};
pub use crate::rules::focus::FocusConfig;
pub use crate::rules::gestalt::GestaltConfig;
pub use crate::rules::hierarchy::HierarchyConfig;
pub use crate::rules::loading_states::LoadingStatesConfig;
pub use crate::rules::registry::{RULE_NAMES, RuleSet};
pub use crate::rules::responsive::ResponsiveConfig;
pub use crate::rules::rule::Rule;
pub use crate::rules::spacing::SpacingConfig;
pub use crate::rules::touch_targets::TouchTargetConfig;
pub use crate::rules::types::{Issue, RuleResult, Severity};
pub use crate::rules::typography::TypographyConfig;

pub use crate::suggest::engine::{Category, Suggestion, SuggestionKind, suggest};

pub use crate::report::aggregate::{AuditReport, Summary, aggregate, run_audit};
pub use crate::report::format::{
    audit_json, audit_text, rule_json, rule_text, suggestions_json, suggestions_text,
};

pub use crate::project::discover::{
    APPROVED_FILE, Project, ResolvedDoc, STRUCTURE_DIR, Selector, VersionEntry, load_doc_ref,
};
pub use crate::project::scaffold::starter_document;
