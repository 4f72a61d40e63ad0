use std::collections::BTreeMap;

use crate::foundation::core::RectPx;
use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::layout::text::{estimate_text_width, text_height};
use crate::layout::tracks::{column_offsets, parse_template, resolve_widths};
use crate::scene::model::{Component, ComponentKind, Structure};

const BUTTON_WIDTH: i32 = 120;
const BUTTON_HEIGHT: i32 = 44;
const INPUT_HEIGHT: i32 = 40;
const IMAGE_HEIGHT: i32 = 150;
const EMPTY_BOX_HEIGHT: i32 = 100;
const DEFAULT_STACK_GAP: i32 = 8;

/// Pixel field as `i32`, saturating at `i32::MAX`.
fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Absolute box for every component ID, in unscaled pixels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutMap {
    boxes: BTreeMap<String, RectPx>,
}

impl LayoutMap {
    /// Box for `id`, if laid out.
    pub fn get(&self, id: &str) -> Option<RectPx> {
        self.boxes.get(id).copied()
    }

    /// Box for `id`, or a layout error naming the missing component.
    pub fn box_for(&self, id: &str) -> WirecheckResult<RectPx> {
        self.get(id)
            .ok_or_else(|| WirecheckError::layout(format!("no layout box for {id}")))
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// `true` when nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Boxes ordered by component ID.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RectPx)> {
        self.boxes.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Largest bottom edge over all boxes, 0 when empty.
    pub fn content_bottom(&self) -> i32 {
        self.boxes.values().map(|r| r.bottom()).max().unwrap_or(0)
    }

    /// Copy with every box multiplied by `scale`.
    pub fn scaled(&self, scale: u32) -> Self {
        Self {
            boxes: self
                .boxes
                .iter()
                .map(|(k, r)| (k.clone(), r.scaled(scale)))
                .collect(),
        }
    }

    fn insert(&mut self, id: &str, rect: RectPx) {
        self.boxes.insert(id.to_owned(), rect);
    }
}

/// Lay out a document for a viewport of `viewport_width` pixels.
///
/// Root components are stacked top to bottom at `x = 0`, each offered the full viewport width,
/// separated by `layout.spacing`. Pure and deterministic; never fails on well-formed input.
#[tracing::instrument(skip(doc), fields(components = doc.components.len()))]
pub fn compute_layout(doc: &Structure, viewport_width: u32) -> LayoutMap {
    let mut map = LayoutMap::default();
    let width = px(viewport_width);
    let spacing = px(doc.layout.spacing);

    let mut cursor: i32 = 0;
    for c in &doc.components {
        let rect = layout_node(c, 0, cursor, width, None, &mut map);
        cursor = cursor.saturating_add(rect.h).saturating_add(spacing);
    }
    tracing::debug!(boxes = map.len(), bottom = map.content_bottom(), "layout solved");
    map
}

/// Size and place `c` at `(x, y)`, recursing into its children.
///
/// `forced_w` is set by flex/grid parents that have already decided the width.
fn layout_node(
    c: &Component,
    x: i32,
    y: i32,
    avail_w: i32,
    forced_w: Option<i32>,
    map: &mut LayoutMap,
) -> RectPx {
    let l = &c.layout;
    let mut w = if l.width > 0 {
        px(l.width)
    } else if let Some(fw) = forced_w {
        fw
    } else {
        match c.kind {
            ComponentKind::Button => BUTTON_WIDTH.min(avail_w.max(0)),
            _ => avail_w,
        }
    };
    if l.max_width > 0 {
        w = w.min(px(l.max_width));
    }
    let w = w.max(0);

    let mut h = match c.kind {
        ComponentKind::Text => text_height(&c.content),
        ComponentKind::Button => BUTTON_HEIGHT,
        ComponentKind::Input => INPUT_HEIGHT,
        ComponentKind::Image => IMAGE_HEIGHT,
        ComponentKind::Box if c.children.is_empty() => EMPTY_BOX_HEIGHT,
        ComponentKind::Box => {
            let pad = px(l.padding);
            let inset = pad.saturating_mul(2);
            let content = RectPx::new(
                x.saturating_add(pad),
                y.saturating_add(pad),
                w.saturating_sub(inset),
                0,
            );
            layout_children(c, content, map).saturating_add(inset)
        }
        ComponentKind::Unknown(_) => 0,
    };
    if l.height > 0 {
        h = px(l.height);
    }
    h = h.max(px(l.min_height));

    let rect = RectPx::new(x, y, w, h);
    map.insert(&c.id, rect);
    rect
}

/// Lay out `parent`'s children inside `content` and return the content height used.
fn layout_children(parent: &Component, content: RectPx, map: &mut LayoutMap) -> i32 {
    let l = &parent.layout;
    if l.is_grid() {
        layout_grid(parent, content, map)
    } else if l.is_flex() && l.is_horizontal() {
        if l.justify_content.eq_ignore_ascii_case("space-between") {
            layout_space_between(parent, content, map)
        } else {
            layout_flex_row(parent, content, map)
        }
    } else {
        layout_stack(parent, content, map)
    }
}

fn layout_stack(parent: &Component, content: RectPx, map: &mut LayoutMap) -> i32 {
    let gap = match px(parent.layout.gap) {
        0 => DEFAULT_STACK_GAP,
        g => g,
    };
    let mut cursor = content.y;
    for (i, child) in parent.children.iter().enumerate() {
        if i > 0 {
            cursor = cursor.saturating_add(gap);
        }
        let rect = layout_node(child, content.x, cursor, content.w, None, map);
        cursor = cursor
            .saturating_add(rect.h)
            .saturating_add(px(child.layout.margin_bottom));
    }
    cursor.saturating_sub(content.y)
}

fn layout_flex_row(parent: &Component, content: RectPx, map: &mut LayoutMap) -> i32 {
    let gap = px(parent.layout.gap);
    let gaps = gap.saturating_mul(gap_count(parent));

    let fixed = parent
        .children
        .iter()
        .filter(|c| c.layout.width > 0)
        .fold(0i32, |acc, c| acc.saturating_add(px(c.layout.width)));
    let total_flex = parent
        .children
        .iter()
        .filter(|c| c.layout.width == 0)
        .fold(0u64, |acc, c| acc + u64::from(c.layout.flex));
    let avail_flex = content.w.saturating_sub(fixed).saturating_sub(gaps).max(0);

    let mut x = content.x;
    let mut row_h = 0;
    for child in &parent.children {
        let forced = if child.layout.width == 0 && child.layout.flex > 0 && total_flex > 0 {
            let share = u64::from(avail_flex as u32) * u64::from(child.layout.flex) / total_flex;
            Some(i32::try_from(share).unwrap_or(i32::MAX))
        } else {
            None
        };
        let rect = layout_node(child, x, content.y, content.w, forced, map);
        x = x.saturating_add(rect.w).saturating_add(gap);
        row_h = row_h.max(rect.h);
    }
    row_h
}

/// Gaps between `parent`'s children, as an `i32` multiplier.
fn gap_count(parent: &Component) -> i32 {
    i32::try_from(parent.children.len().saturating_sub(1)).unwrap_or(i32::MAX)
}

fn layout_space_between(parent: &Component, content: RectPx, map: &mut LayoutMap) -> i32 {
    let gap = px(parent.layout.gap);
    let slots = gap_count(parent);
    let share = content
        .w
        .saturating_sub(gap.saturating_mul(slots))
        .max(0)
        / slots.saturating_add(1);

    let widths: Vec<i32> = parent
        .children
        .iter()
        .map(|c| {
            if c.layout.width > 0 {
                px(c.layout.width)
            } else {
                match c.kind {
                    ComponentKind::Text => {
                        estimate_text_width(&c.content, c.size_token()).min(content.w)
                    }
                    ComponentKind::Button => BUTTON_WIDTH,
                    _ => share,
                }
            }
        })
        .collect();
    let used = widths.iter().fold(0i32, |acc, w| acc.saturating_add(*w));
    let slack = content.w.saturating_sub(used);
    let spacing = if slots > 0 { gap.max(slack / slots) } else { 0 };

    let mut x = content.x;
    let mut row_h = 0;
    for (child, w) in parent.children.iter().zip(&widths) {
        let rect = layout_node(child, x, content.y, content.w, Some(*w), map);
        x = x.saturating_add(rect.w).saturating_add(spacing);
        row_h = row_h.max(rect.h);
    }
    row_h
}

fn layout_grid(parent: &Component, content: RectPx, map: &mut LayoutMap) -> i32 {
    let gap = px(parent.layout.gap);
    let tracks = parse_template(&parent.layout.grid_template_columns);
    let widths = resolve_widths(&tracks, content.w, gap);
    let offsets = column_offsets(&widths, gap);
    let cols = widths.len();

    let mut y = content.y;
    let mut row_h = 0;
    for (i, child) in parent.children.iter().enumerate() {
        let col = i % cols;
        if col == 0 && i > 0 {
            y = y.saturating_add(row_h).saturating_add(gap);
            row_h = 0;
        }
        let rect = layout_node(
            child,
            content.x.saturating_add(offsets[col]),
            y,
            widths[col],
            Some(widths[col]),
            map,
        );
        row_h = row_h.max(rect.h);
    }
    y.saturating_add(row_h).saturating_sub(content.y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
