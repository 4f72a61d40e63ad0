//! Deterministic pre-order traversal shared by the validator, the evaluators and the
//! suggestion engine.

use crate::scene::model::{Component, Structure};

/// One visited component with its traversal context.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    /// The component itself.
    pub component: &'a Component,
    /// Enclosing component, `None` for root components.
    pub parent: Option<&'a Component>,
    /// The sibling list containing `component` (the root list for root components).
    pub siblings: &'a [Component],
    /// Position within `siblings`.
    pub index: usize,
    /// Nesting depth, 0 for root components.
    pub depth: usize,
}

/// Visit every component in document order.
pub fn walk(doc: &Structure) -> Vec<Visit<'_>> {
    let mut out = Vec::with_capacity(doc.component_count());
    walk_list(&doc.components, None, 0, &mut out);
    out
}

/// Visit every component of a subtree (including `root`, at depth 0) in document order.
pub fn walk_subtree(root: &Component) -> Vec<Visit<'_>> {
    let mut out = Vec::with_capacity(root.subtree_len());
    walk_list(std::slice::from_ref(root), None, 0, &mut out);
    out
}

fn walk_list<'a>(
    list: &'a [Component],
    parent: Option<&'a Component>,
    depth: usize,
    out: &mut Vec<Visit<'a>>,
) {
    for (index, component) in list.iter().enumerate() {
        out.push(Visit {
            component,
            parent,
            siblings: list,
            index,
            depth,
        });
        walk_list(&component.children, Some(component), depth + 1, out);
    }
}

/// Find a component by ID anywhere in the tree.
pub fn find_by_id<'a>(doc: &'a Structure, id: &str) -> Option<&'a Component> {
    walk(doc)
        .into_iter()
        .map(|v| v.component)
        .find(|c| c.id == id)
}

/// First component whose depth exceeds `max_depth`, in document order.
pub fn first_too_deep(doc: &Structure, max_depth: usize) -> Option<Visit<'_>> {
    walk(doc).into_iter().find(|v| v.depth > max_depth)
}

/// Deepest depth present in the tree, `None` for an empty tree.
pub fn max_depth(doc: &Structure) -> Option<usize> {
    walk(doc).iter().map(|v| v.depth).max()
}

/// Descendants of `root` (excluding `root`) in document order.
pub fn descendants(root: &Component) -> impl Iterator<Item = &Component> {
    walk_subtree(root)
        .into_iter()
        .skip(1)
        .map(|v| v.component)
}

/// First hyphen-separated token of an ID, lowercased (`"email-input"` → `"email"`).
pub fn id_prefix(id: &str) -> String {
    id.split('-').next().unwrap_or(id).to_ascii_lowercase()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/walk.rs"]
mod tests;
