//! Estimated component geometry for the spacing-sensitive evaluators.
//!
//! This is a deliberately simplified cursor walk, independent of the layout engine: explicit
//! sizes win, otherwise buttons are 120×44, inputs 300×44, text 24 px per line and images 150 px
//! tall. Declared gaps are used as-is, with no default stacking gap. Inputs are estimated at
//! the 44 px touch minimum, so a default input (40 px in the layout engine) is not flagged.

use std::collections::BTreeMap;

use kurbo::Rect;

use crate::layout::text::{estimate_text_width, line_count};
use crate::scene::model::{Component, ComponentKind, Structure};

const BUTTON_SIZE: (f64, f64) = (120.0, 44.0);
const INPUT_SIZE: (f64, f64) = (300.0, 44.0);
const TEXT_LINE_HEIGHT: f64 = 24.0;
const IMAGE_HEIGHT: f64 = 150.0;

/// Estimated rectangles keyed by component ID.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    rects: BTreeMap<String, Rect>,
}

impl Geometry {
    /// Estimate every component of `doc` with the given root width.
    pub fn estimate(doc: &Structure, root_width: f64) -> Self {
        let mut g = Self::default();
        let pad = f64::from(doc.layout.padding);
        let spacing = f64::from(doc.layout.spacing);
        let mut avail = (root_width - 2.0 * pad).max(0.0);
        if doc.layout.max_width > 0 {
            avail = avail.min(f64::from(doc.layout.max_width));
        }
        let horizontal = doc.layout.direction.eq_ignore_ascii_case("horizontal");
        g.place_list(&doc.components, pad, pad, avail, spacing, horizontal);
        g
    }

    /// Rectangle for `id`.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    fn place_list(
        &mut self,
        list: &[Component],
        x0: f64,
        y0: f64,
        avail: f64,
        gap: f64,
        horizontal: bool,
    ) -> (f64, f64) {
        let (mut x, mut y) = (x0, y0);
        let (mut right, mut bottom) = (x0, y0);
        for (i, c) in list.iter().enumerate() {
            if i > 0 {
                if horizontal {
                    x += gap;
                } else {
                    y += gap;
                }
            }
            let remaining = if horizontal { (x0 + avail - x).max(0.0) } else { avail };
            let r = self.place(c, x, y, remaining);
            right = right.max(r.x1);
            bottom = bottom.max(r.y1);
            if horizontal {
                x = r.x1;
            } else {
                y = r.y1;
            }
        }
        (right - x0, bottom - y0)
    }

    fn place(&mut self, c: &Component, x: f64, y: f64, avail: f64) -> Rect {
        let l = &c.layout;
        let mut w = if l.width > 0 {
            f64::from(l.width)
        } else {
            match c.kind {
                ComponentKind::Button => BUTTON_SIZE.0,
                ComponentKind::Input => INPUT_SIZE.0.min(avail),
                ComponentKind::Text => {
                    f64::from(estimate_text_width(&c.content, c.size_token())).min(avail)
                }
                _ => avail,
            }
        };
        if l.max_width > 0 {
            w = w.min(f64::from(l.max_width));
        }

        let pad = f64::from(l.padding);
        let content_h = if c.children.is_empty() {
            0.0
        } else {
            let inner = (w - 2.0 * pad).max(0.0);
            let horizontal = l.is_horizontal() && !l.is_grid();
            let (_, h) = self.place_list(
                &c.children,
                x + pad,
                y + pad,
                inner,
                f64::from(l.gap),
                horizontal,
            );
            h
        };
        let mut h = if l.height > 0 {
            f64::from(l.height)
        } else {
            match c.kind {
                ComponentKind::Button => BUTTON_SIZE.1,
                ComponentKind::Input => INPUT_SIZE.1,
                ComponentKind::Text => TEXT_LINE_HEIGHT * line_count(&c.content) as f64,
                ComponentKind::Image => IMAGE_HEIGHT,
                _ => content_h + 2.0 * pad,
            }
        };
        h = h.max(f64::from(l.min_height));

        let r = Rect::new(x, y, x + w, y + h);
        self.rects.insert(c.id.clone(), r);
        r
    }
}

/// Gap between two rectangles that line up along one axis.
///
/// Returns `None` when they overlap or are only diagonally related. Rectangles that share a
/// row (overlapping vertical extent) are measured horizontally, otherwise vertically.
pub fn axis_gap(a: Rect, b: Rect) -> Option<f64> {
    let overlap_x = a.x0 < b.x1 && b.x0 < a.x1;
    let overlap_y = a.y0 < b.y1 && b.y0 < a.y1;
    match (overlap_x, overlap_y) {
        (true, true) => None,
        (false, true) => Some((b.x0 - a.x1).max(a.x0 - b.x1)),
        (true, false) => Some((b.y0 - a.y1).max(a.y0 - b.y1)),
        (false, false) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rules/geometry.rs"]
mod tests;
