//! Design tokens shared by the layout engine, renderer and rule evaluators.

/// Phase 1 palette. Any non-empty `color` or `layout.background` must be one of these.
pub const PHASE1_PALETTE: [&str; 5] = ["#FFFFFF", "#000000", "#E5E5E5", "#737373", "#525252"];

/// Allowed spacing values on the 8-pt grid, ascending.
pub const SPACING_GRID: [u32; 11] = [0, 4, 8, 12, 16, 24, 32, 48, 64, 96, 128];

/// Minimum touch target edge in pixels.
pub const TOUCH_TARGET_MIN_PX: u32 = 44;

/// Maximum component nesting depth; the root component sits at depth 0.
pub const MAX_NESTING_DEPTH: usize = 4;

/// `true` when `hex` is one of the Phase 1 palette colors (case-insensitive).
pub fn is_palette_color(hex: &str) -> bool {
    PHASE1_PALETTE
        .iter()
        .any(|p| p.eq_ignore_ascii_case(hex.trim()))
}

/// `true` when `v` lies on the 8-pt grid.
pub fn is_on_grid(v: u32) -> bool {
    SPACING_GRID.contains(&v)
}

/// Nearest grid value; equidistant neighbors resolve to the smaller one.
pub fn nearest_grid_value(v: u32) -> u32 {
    let mut best = SPACING_GRID[0];
    let mut best_dist = u32::MAX;
    for &g in &SPACING_GRID {
        let d = g.abs_diff(v);
        if d < best_dist {
            best = g;
            best_dist = d;
        }
    }
    best
}

/// `true` for multiples of 4 that are not multiples of 8 (e.g. 4, 12, 20).
pub fn is_half_step(v: u32) -> bool {
    v % 4 == 0 && v % 8 != 0
}

/// One of the nine typographic size tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeToken {
    /// `xs`
    Xs,
    /// `sm`
    Sm,
    /// `base`
    Base,
    /// `md`
    Md,
    /// `lg`
    Lg,
    /// `xl`
    Xl,
    /// `2xl`
    Xl2,
    /// `3xl`
    Xl3,
    /// `4xl`
    Xl4,
}

impl SizeToken {
    /// All tokens, smallest first.
    pub const ALL: [SizeToken; 9] = [
        SizeToken::Xs,
        SizeToken::Sm,
        SizeToken::Base,
        SizeToken::Md,
        SizeToken::Lg,
        SizeToken::Xl,
        SizeToken::Xl2,
        SizeToken::Xl3,
        SizeToken::Xl4,
    ];

    /// Parse a wire token. Matching is exact; unknown tokens yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "xs" => SizeToken::Xs,
            "sm" => SizeToken::Sm,
            "base" => SizeToken::Base,
            "md" => SizeToken::Md,
            "lg" => SizeToken::Lg,
            "xl" => SizeToken::Xl,
            "2xl" => SizeToken::Xl2,
            "3xl" => SizeToken::Xl3,
            "4xl" => SizeToken::Xl4,
            _ => return None,
        })
    }

    /// Parse with the document default (`base`) for empty strings.
    pub fn parse_or_base(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(SizeToken::Base);
        }
        Self::parse(s)
    }

    /// Wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::Xs => "xs",
            SizeToken::Sm => "sm",
            SizeToken::Base => "base",
            SizeToken::Md => "md",
            SizeToken::Lg => "lg",
            SizeToken::Xl => "xl",
            SizeToken::Xl2 => "2xl",
            SizeToken::Xl3 => "3xl",
            SizeToken::Xl4 => "4xl",
        }
    }

    /// Nominal pixel height used by the renderer and the WCAG large-text classifier.
    pub fn nominal_px(self) -> u32 {
        match self {
            SizeToken::Xs => 12,
            SizeToken::Sm => 14,
            SizeToken::Base => 16,
            SizeToken::Md => 18,
            SizeToken::Lg => 20,
            SizeToken::Xl => 24,
            SizeToken::Xl2 => 24,
            SizeToken::Xl3 => 30,
            SizeToken::Xl4 => 36,
        }
    }

    /// Pixel height on the Major Third (1.25) type scale.
    pub fn scale_px(self) -> u32 {
        match self {
            SizeToken::Xs => 12,
            SizeToken::Sm => 14,
            SizeToken::Base => 16,
            SizeToken::Md => 18,
            SizeToken::Lg => 20,
            SizeToken::Xl => 25,
            SizeToken::Xl2 => 31,
            SizeToken::Xl3 => 39,
            SizeToken::Xl4 => 49,
        }
    }

    /// Average glyph advance used to estimate text widths during layout.
    pub fn char_width(self) -> u32 {
        match self {
            SizeToken::Xs => 5,
            SizeToken::Sm => 6,
            SizeToken::Base => 7,
            SizeToken::Md => 8,
            SizeToken::Lg => 9,
            SizeToken::Xl => 11,
            SizeToken::Xl2 => 14,
            SizeToken::Xl3 => 18,
            SizeToken::Xl4 => 22,
        }
    }

    /// Heading level implied by a display size (`4xl` → 1, `3xl` → 2, `2xl` → 3).
    pub fn heading_level(self) -> Option<u8> {
        match self {
            SizeToken::Xl4 => Some(1),
            SizeToken::Xl3 => Some(2),
            SizeToken::Xl2 => Some(3),
            _ => None,
        }
    }
}

impl std::fmt::Display for SizeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tokens.rs"]
mod tests;
