//! Component classification helpers shared by several evaluators.

use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::tokens::SizeToken;
use crate::scene::walk::walk;

/// Default button width when none is declared.
pub const DEFAULT_BUTTON_WIDTH: u32 = 120;

const DANGEROUS_WORDS: [&str; 6] = ["delete", "remove", "destroy", "clear", "reset", "cancel"];

/// A text component classified as a heading.
#[derive(Clone, Copy, Debug)]
pub struct Heading<'a> {
    /// The text component.
    pub component: &'a Component,
    /// Heading level, 1 = most important.
    pub level: u8,
    /// Parsed size token; `None` for unknown tokens.
    pub size: Option<SizeToken>,
}

/// Classify a component as a heading.
///
/// An ID starting with `h1`…`h6` (not followed by another digit) gives the level directly.
/// Otherwise a role or ID mentioning "heading" or "title" with a size of at least `2xl` gets its
/// level from the size.
pub fn heading_of(c: &Component) -> Option<Heading<'_>> {
    if c.kind != ComponentKind::Text {
        return None;
    }
    let size = c.size_token();
    if let Some(level) = id_heading_level(&c.id) {
        return Some(Heading {
            component: c,
            level,
            size,
        });
    }
    if c.mentions_any(&["heading", "title"])
        && let Some(tok) = size
        && let Some(level) = tok.heading_level()
    {
        return Some(Heading {
            component: c,
            level,
            size,
        });
    }
    None
}

fn id_heading_level(id: &str) -> Option<u8> {
    let bytes = id.as_bytes();
    if bytes.len() < 2 || !bytes[0].eq_ignore_ascii_case(&b'h') {
        return None;
    }
    let level = match bytes[1] {
        d @ b'1'..=b'6' => d - b'0',
        _ => return None,
    };
    match bytes.get(2) {
        Some(next) if next.is_ascii_digit() => None,
        _ => Some(level),
    }
}

/// All headings in traversal order.
pub fn headings(doc: &Structure) -> Vec<Heading<'_>> {
    walk(doc)
        .into_iter()
        .filter_map(|v| heading_of(v.component))
        .collect()
}

/// `true` for the primary call to action.
pub fn is_primary_button(c: &Component, doc: &Structure) -> bool {
    c.kind == ComponentKind::Button
        && ((!doc.intent.primary_action.is_empty() && c.id == doc.intent.primary_action)
            || c.id_lower().contains("primary"))
}

/// Declared width of a button, or the default.
pub fn button_width(c: &Component) -> u32 {
    if c.layout.width > 0 {
        c.layout.width
    } else {
        DEFAULT_BUTTON_WIDTH
    }
}

/// `true` when the ID or role names a destructive or cancelling action.
pub fn is_dangerous(c: &Component) -> bool {
    c.mentions_any(&DANGEROUS_WORDS)
}

/// Navigation container: ID mentions `nav`/`menu` or role is `navigation`/`menu`.
pub fn is_navigation(c: &Component) -> bool {
    let id = c.id_lower();
    let role = c.role_lower();
    id.contains("nav") || id.contains("menu") || role == "navigation" || role == "menu"
}

/// Form container: ID mentions `form`/`signup`/`login`/`register` or role is `form`.
pub fn is_form(c: &Component) -> bool {
    let id = c.id_lower();
    ["form", "signup", "login", "register"]
        .iter()
        .any(|w| id.contains(w))
        || c.role_lower() == "form"
}

/// Card grid: ID mentions `grid`/`card`/`list` and the container uses `display: grid`.
pub fn is_card_grid(c: &Component) -> bool {
    let id = c.id_lower();
    ["grid", "card", "list"].iter().any(|w| id.contains(w)) && c.layout.is_grid()
}

/// Number of direct children that are buttons.
pub fn direct_button_count(c: &Component) -> usize {
    c.children
        .iter()
        .filter(|ch| ch.kind == ComponentKind::Button)
        .count()
}

#[cfg(test)]
#[path = "../../tests/unit/rules/classify.rs"]
mod tests;
