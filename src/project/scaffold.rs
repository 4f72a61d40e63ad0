use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::project::discover::Project;
use crate::scene::model::{
    Accessibility, Breakpoint, Component, ComponentKind, Intent, Layout, Responsive, Structure,
};

const PRIMARY_ACTION: &str = "primary-action";

fn text(id: &str, content: &str, size: &str, weight: &str) -> Component {
    Component {
        id: id.to_owned(),
        kind: ComponentKind::Text,
        content: content.to_owned(),
        size: size.to_owned(),
        weight: weight.to_owned(),
        color: "#000000".to_owned(),
        ..Component::default()
    }
}

fn stack(id: &str, role: &str, gap: u32, children: Vec<Component>) -> Component {
    let mut c = Component {
        id: id.to_owned(),
        kind: ComponentKind::Box,
        role: role.to_owned(),
        children,
        ..Component::default()
    };
    c.layout.display = "flex".to_owned();
    c.layout.direction = "vertical".to_owned();
    c.layout.gap = gap;
    c.layout.padding = 24;
    c
}

/// Minimal valid starting document: a header with the page title and a main section with a
/// short description and the primary action.
pub fn starter_document(purpose: &str, now: DateTime<Utc>) -> Structure {
    let mut cta = Component {
        id: PRIMARY_ACTION.to_owned(),
        kind: ComponentKind::Button,
        role: "primary".to_owned(),
        content: "Get started".to_owned(),
        ..Component::default()
    };
    cta.layout.background = "#000000".to_owned();
    cta.layout.width = 160;

    Structure {
        version: "v1".to_owned(),
        phase: "structure".to_owned(),
        created_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        intent: Intent {
            purpose: purpose.to_owned(),
            primary_action: PRIMARY_ACTION.to_owned(),
            user_context: String::new(),
            key_interactions: vec![PRIMARY_ACTION.to_owned()],
        },
        layout: Layout {
            kind: "stack".to_owned(),
            direction: "vertical".to_owned(),
            spacing: 24,
            max_width: 1200,
            padding: 24,
        },
        components: vec![
            stack(
                "header",
                "header",
                8,
                vec![text("h1-title", purpose, "3xl", "bold")],
            ),
            stack(
                "main",
                "main",
                16,
                vec![text("intro", "Describe the screen here.", "base", "normal"), cta],
            ),
        ],
        responsive: Responsive {
            mobile: Breakpoint {
                breakpoint: 375,
                ..Breakpoint::default()
            },
            tablet: Breakpoint {
                breakpoint: 768,
                ..Breakpoint::default()
            },
        },
        accessibility: Accessibility {
            touch_targets_min: 44,
            focus_indicators: "visible".to_owned(),
            labels: "all_interactive_elements".to_owned(),
            semantic_structure: true,
        },
        ..Structure::default()
    }
}

impl Project {
    /// Create `phase1-structure/v1.json` from the starter document.
    ///
    /// Refuses to overwrite: fails if any numbered version already exists.
    pub fn onboard(&self, purpose: &str, now: DateTime<Utc>) -> WirecheckResult<PathBuf> {
        let dir = self.structure_dir();
        if dir.is_dir() && !self.versions()?.is_empty() {
            return Err(WirecheckError::project(format!(
                "{} already has versions",
                dir.display()
            )));
        }
        std::fs::create_dir_all(&dir)
            .map_err(|e| WirecheckError::project(format!("create {}: {e}", dir.display())))?;
        let doc = starter_document(purpose, now);
        let out = self.version_path(1);
        std::fs::write(&out, doc.to_json_pretty()?)
            .map_err(|e| WirecheckError::project(format!("write {}: {e}", out.display())))?;
        tracing::info!(path = %out.display(), "onboarded");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/scaffold.rs"]
mod tests;
