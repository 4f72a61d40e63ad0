use crate::foundation::error::{WirecheckError, WirecheckResult};

/// Axis-aligned box in integer pixels, `x`/`y` at the top-left corner.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RectPx {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, never negative.
    pub w: i32,
    /// Height, never negative.
    pub h: i32,
}

impl RectPx {
    /// Build a rectangle, clamping negative sizes to zero.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    /// Right edge (exclusive).
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Multiply every coordinate by an integer scale factor.
    pub fn scaled(self, scale: u32) -> Self {
        let k = i32::try_from(scale).unwrap_or(i32::MAX);
        Self {
            x: self.x.saturating_mul(k),
            y: self.y.saturating_mul(k),
            w: self.w.saturating_mul(k),
            h: self.h.saturating_mul(k),
        }
    }
}

/// Named viewport widths used by the renderer and the responsive checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// 375 px.
    Mobile,
    /// 768 px.
    Tablet,
    /// 1200 px when rendering, 1440 px as a responsive breakpoint.
    Desktop,
}

impl Viewport {
    /// All presets, narrowest first.
    pub const ALL: [Viewport; 3] = [Viewport::Mobile, Viewport::Tablet, Viewport::Desktop];

    /// Width used when rendering a wireframe at this preset.
    pub fn render_width(self) -> u32 {
        match self {
            Viewport::Mobile => 375,
            Viewport::Tablet => 768,
            Viewport::Desktop => 1200,
        }
    }

    /// Width used as a breakpoint by the responsive evaluator.
    pub fn breakpoint_width(self) -> u32 {
        match self {
            Viewport::Mobile => 375,
            Viewport::Tablet => 768,
            Viewport::Desktop => 1440,
        }
    }

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Tablet => "tablet",
            Viewport::Desktop => "desktop",
        }
    }

    /// Parse a preset label (case-insensitive).
    pub fn parse(s: &str) -> WirecheckResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Viewport::Mobile),
            "tablet" => Ok(Viewport::Tablet),
            "desktop" => Ok(Viewport::Desktop),
            other => Err(WirecheckError::validation(format!(
                "unknown viewport \"{other}\" (expected mobile, tablet or desktop)"
            ))),
        }
    }
}

/// Integer render scale, restricted to `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scale(u32);

impl Scale {
    /// Scale factor of one.
    pub const ONE: Scale = Scale(1);

    /// Create a validated scale factor.
    pub fn new(k: u32) -> WirecheckResult<Self> {
        if !(1..=3).contains(&k) {
            return Err(WirecheckError::validation("scale must be 1, 2 or 3"));
        }
        Ok(Self(k))
    }

    /// Raw factor.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
