use crate::foundation::color::{Rgba8, find_hex_token};
use crate::foundation::core::{RectPx, Scale, Viewport};
use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::layout::solver::{LayoutMap, compute_layout};
use crate::render::font::{ASCENT, CELL_HEIGHT, draw_text, text_width};
use crate::render::raster::FrameRGBA;
use crate::scene::model::{Component, ComponentKind, Structure};

/// Canvas height used when the layout is shorter than this.
pub const MIN_CANVAS_HEIGHT: u32 = 400;
/// Largest canvas, in pixels, that a render will allocate.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;
const CANVAS_BOTTOM_MARGIN: i32 = 20;
const GRID_STEP: i32 = 8;
const GRID_MAJOR_STEP: i32 = 64;

/// Options for rasterizing a structure document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOpts {
    /// Viewport width in unscaled pixels.
    pub width: u32,
    /// Canvas height in unscaled pixels; 0 derives it from the layout.
    pub height: u32,
    /// Integer pixel multiplier.
    pub scale: Scale,
    /// Draw component IDs and outlines.
    pub annotate: bool,
    /// Draw an 8 px spacing grid under the components.
    pub grid_overlay: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self::for_viewport(Viewport::Desktop)
    }
}

impl RenderOpts {
    /// Options for a viewport preset with automatic height.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            width: viewport.render_width(),
            height: 0,
            scale: Scale::ONE,
            annotate: false,
            grid_overlay: false,
        }
    }

    /// Return options with a different scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

/// Lay out and rasterize `doc` in one step.
pub fn render_document(doc: &Structure, opts: &RenderOpts) -> WirecheckResult<FrameRGBA> {
    let layout = compute_layout(doc, opts.width);
    render_structure(doc, &layout, opts)
}

/// Rasterize `doc` using a precomputed (unscaled) layout.
///
/// Fails when a component has no box in `layout`, carries an unknown type, or the canvas would
/// exceed [`MAX_CANVAS_PIXELS`].
#[tracing::instrument(skip(doc, layout), fields(width = opts.width, scale = opts.scale.get()))]
pub fn render_structure(
    doc: &Structure,
    layout: &LayoutMap,
    opts: &RenderOpts,
) -> WirecheckResult<FrameRGBA> {
    let k = opts.scale.get();
    let height = if opts.height == 0 {
        let bottom = layout
            .content_bottom()
            .saturating_add(CANVAS_BOTTOM_MARGIN)
            .max(0) as u32;
        bottom.max(MIN_CANVAS_HEIGHT)
    } else {
        opts.height
    };
    let (w, h) = (u64::from(opts.width) * u64::from(k), u64::from(height) * u64::from(k));
    let too_large = || {
        WirecheckError::render(format!(
            "canvas {w}x{h} exceeds the {MAX_CANVAS_PIXELS} pixel limit"
        ))
    };
    if w * h > MAX_CANVAS_PIXELS {
        return Err(too_large());
    }
    let mut frame = FrameRGBA::new(
        u32::try_from(w).map_err(|_| too_large())?,
        u32::try_from(h).map_err(|_| too_large())?,
        Rgba8::WHITE,
    );
    tracing::debug!(w = frame.width, h = frame.height, "canvas allocated");

    let mut painter = Painter {
        frame: &mut frame,
        layout,
        scale: k as i32,
        annotate: opts.annotate,
    };
    if opts.grid_overlay {
        painter.draw_grid();
    }
    for c in &doc.components {
        painter.draw_component(c)?;
    }
    Ok(frame)
}

struct Painter<'a> {
    frame: &'a mut FrameRGBA,
    layout: &'a LayoutMap,
    scale: i32,
    annotate: bool,
}

impl Painter<'_> {
    fn draw_component(&mut self, c: &Component) -> WirecheckResult<()> {
        let r = self.layout.box_for(&c.id)?.scaled(self.scale as u32);
        let k = self.scale;
        if let ComponentKind::Unknown(kind) = &c.kind {
            return Err(WirecheckError::render(format!(
                "unknown component type \"{kind}\" on \"{}\"",
                c.id
            )));
        }
        // Boxes starting past the canvas edge only need their subtree checked.
        if r.x >= self.frame.width as i32 || r.y >= self.frame.height as i32 {
            for child in &c.children {
                self.draw_component(child)?;
            }
            return Ok(());
        }
        match &c.kind {
            ComponentKind::Box => {
                if !c.layout.background.is_empty() {
                    let bg = Rgba8::from_hex_or(&c.layout.background, Rgba8::WHITE);
                    self.frame.fill_rect(r, bg);
                }
                self.draw_borders(c, r);
                if self.annotate {
                    self.frame.stroke_rect(r, 1, Rgba8::LIGHT_GRAY);
                }
                self.draw_label(c, r);
                for child in &c.children {
                    self.draw_component(child)?;
                }
                return Ok(());
            }
            ComponentKind::Text => {
                let color = Rgba8::from_hex_or(&c.color, Rgba8::BLACK);
                for (i, line) in c.content.split('\n').enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    let baseline = r.y + (14 + i as i32 * 16) * k;
                    draw_text(self.frame, r.x, baseline, line, color, k);
                }
            }
            ComponentKind::Button => {
                let bg = Rgba8::from_hex_or(&c.layout.background, Rgba8::BLACK);
                self.frame.fill_rect(r, bg);
                let fg = Rgba8::from_hex_or(&c.color, Rgba8::WHITE);
                draw_text(self.frame, r.x + 10 * k, r.y + 25 * k, &c.content, fg, k);
            }
            ComponentKind::Input => {
                self.frame.stroke_rect(r, k, Rgba8::LIGHT_GRAY);
                draw_text(
                    self.frame,
                    r.x + 8 * k,
                    r.y + 22 * k,
                    &c.content,
                    Rgba8::MID_GRAY,
                    k,
                );
            }
            ComponentKind::Image => {
                self.frame.fill_rect(r, Rgba8::LIGHT_GRAY);
                let label = "IMAGE";
                let x = r.x + (r.w - text_width(label, k)) / 2;
                let y = r.y + r.h / 2 + (ASCENT / 2) * k;
                draw_text(self.frame, x, y, label, Rgba8::MID_GRAY, k);
            }
            ComponentKind::Unknown(_) => {}
        }
        if self.annotate {
            self.frame.stroke_rect(r, 1, Rgba8::LIGHT_GRAY);
        }
        self.draw_label(c, r);
        Ok(())
    }

    fn draw_borders(&mut self, c: &Component, r: RectPx) {
        let k = self.scale;
        let l = &c.layout;
        if !l.border.is_empty() {
            self.frame.stroke_rect(r, k, border_color(&l.border));
        }
        if !l.border_bottom.is_empty() {
            let color = border_color(&l.border_bottom);
            self.frame.hline(r.x, r.bottom() - k, r.w, k, color);
        }
        if !l.border_right.is_empty() {
            let color = border_color(&l.border_right);
            self.frame.vline(r.right() - k, r.y, r.h, k, color);
        }
    }

    fn draw_label(&mut self, c: &Component, r: RectPx) {
        if !self.annotate || c.id.is_empty() {
            return;
        }
        let k = self.scale;
        let pad = 2 * k;
        let plate = RectPx::new(
            r.x,
            r.y,
            text_width(&c.id, k).saturating_add(2 * pad),
            CELL_HEIGHT * k + pad,
        );
        self.frame.fill_rect(plate, Rgba8::WHITE);
        draw_text(
            self.frame,
            r.x + pad,
            r.y + pad + ASCENT * k,
            &c.id,
            Rgba8::MID_GRAY,
            k,
        );
    }

    fn draw_grid(&mut self) {
        let k = self.scale;
        let w = self.frame.width as i32;
        let h = self.frame.height as i32;
        let step = GRID_STEP * k;
        let major = GRID_MAJOR_STEP * k;
        let mut x = 0;
        while x < w {
            let color = if x % major == 0 { Rgba8::MID_GRAY } else { Rgba8::LIGHT_GRAY };
            self.frame.vline(x, 0, h, 1, color);
            x += step;
        }
        let mut y = 0;
        while y < h {
            let color = if y % major == 0 { Rgba8::MID_GRAY } else { Rgba8::LIGHT_GRAY };
            self.frame.hline(0, y, w, 1, color);
            y += step;
        }
    }
}

fn border_color(spec: &str) -> Rgba8 {
    find_hex_token(spec).unwrap_or(Rgba8::LIGHT_GRAY)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
