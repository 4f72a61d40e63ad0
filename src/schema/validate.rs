use std::fmt;

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::tokens::{MAX_NESTING_DEPTH, PHASE1_PALETTE, SizeToken, is_palette_color};

const LAYOUT_TYPES: [&str; 3] = ["stack", "grid", "sidebar"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

/// A single schema violation, located by a `$.a.b[0]` style path.
#[derive(Debug, Clone)]
pub struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    /// Component the violation belongs to, if any.
    pub component: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            component: None,
            message: message.into(),
        }
    }

    fn for_component(mut self, id: &str) -> Self {
        if !id.is_empty() {
            self.component = Some(id.to_owned());
        }
        self
    }

    /// Rendered `$.components[0].color` path.
    pub fn path(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

impl std::error::Error for SchemaError {}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Check Phase 1 constraints, stopping at the first violation.
///
/// Order: phase, required fields, then a depth-first walk validating `id`, `type`, `size`,
/// `color` and `background` before recursing into children.
pub fn validate_structure(doc: &Structure) -> Result<(), SchemaError> {
    if doc.phase != "structure" {
        return Err(SchemaError::at(
            &[SchemaPathElem::Field("phase")],
            format!("phase must be \"structure\", got \"{}\"", doc.phase),
        ));
    }
    if doc.version.trim().is_empty() {
        return Err(SchemaError::at(
            &[SchemaPathElem::Field("version")],
            "version must be non-empty",
        ));
    }
    if doc.intent.purpose.trim().is_empty() {
        return Err(SchemaError::at(
            &[
                SchemaPathElem::Field("intent"),
                SchemaPathElem::Field("purpose"),
            ],
            "intent.purpose must be non-empty",
        ));
    }
    if !LAYOUT_TYPES.contains(&doc.layout.kind.as_str()) {
        return Err(SchemaError::at(
            &[
                SchemaPathElem::Field("layout"),
                SchemaPathElem::Field("type"),
            ],
            format!(
                "layout.type must be one of {}, got \"{}\"",
                LAYOUT_TYPES.join(", "),
                doc.layout.kind
            ),
        ));
    }
    if doc.components.is_empty() {
        return Err(SchemaError::at(
            &[SchemaPathElem::Field("components")],
            "components must be non-empty",
        ));
    }

    let mut path = vec![SchemaPathElem::Field("components")];
    for (i, c) in doc.components.iter().enumerate() {
        path.push(SchemaPathElem::Index(i));
        validate_component(c, &mut path, 0)?;
        path.pop();
    }
    Ok(())
}

fn field(path: &[SchemaPathElem], name: &'static str) -> Vec<SchemaPathElem> {
    [path, &[SchemaPathElem::Field(name)]].concat()
}

fn validate_component(
    c: &Component,
    path: &mut Vec<SchemaPathElem>,
    depth: usize,
) -> Result<(), SchemaError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(SchemaError::at(
            path,
            format!(
                "component \"{}\" is nested at depth {depth}, maximum is {MAX_NESTING_DEPTH}",
                c.id
            ),
        )
        .for_component(&c.id));
    }
    if c.id.trim().is_empty() {
        return Err(SchemaError::at(
            &field(path, "id"),
            "component id must be non-empty",
        ));
    }
    if let ComponentKind::Unknown(kind) = &c.kind {
        return Err(SchemaError::at(
            &field(path, "type"),
            format!(
                "component \"{}\" has type \"{kind}\", expected box, text, input, button or image",
                c.id
            ),
        )
        .for_component(&c.id));
    }
    if !c.size.is_empty() && SizeToken::parse(&c.size).is_none() {
        return Err(SchemaError::at(
            &field(path, "size"),
            format!("component \"{}\" has unknown size \"{}\"", c.id, c.size),
        )
        .for_component(&c.id));
    }
    if !c.color.is_empty() && !is_palette_color(&c.color) {
        return Err(SchemaError::at(
            &field(path, "color"),
            format!(
                "component \"{}\" color \"{}\" is not in the Phase 1 palette ({})",
                c.id,
                c.color,
                PHASE1_PALETTE.join(", ")
            ),
        )
        .for_component(&c.id));
    }
    if !c.layout.background.is_empty() && !is_palette_color(&c.layout.background) {
        let mut p = field(path, "layout");
        p.push(SchemaPathElem::Field("background"));
        return Err(SchemaError::at(
            &p,
            format!(
                "component \"{}\" background \"{}\" is not in the Phase 1 palette ({})",
                c.id,
                c.layout.background,
                PHASE1_PALETTE.join(", ")
            ),
        )
        .for_component(&c.id));
    }

    path.push(SchemaPathElem::Field("children"));
    for (i, child) in c.children.iter().enumerate() {
        path.push(SchemaPathElem::Index(i));
        validate_component(child, path, depth + 1)?;
        path.pop();
    }
    path.pop();
    Ok(())
}

impl Structure {
    /// Validate against the Phase 1 schema, folding the failure into [`WirecheckError`].
    pub fn validate(&self) -> WirecheckResult<()> {
        validate_structure(self)
            .map_err(|e| WirecheckError::validation(format!("schema validation failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
