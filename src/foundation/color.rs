use crate::foundation::error::{WirecheckError, WirecheckResult};

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
    /// Palette light gray (`#E5E5E5`), used for borders and placeholders.
    pub const LIGHT_GRAY: Rgba8 = Rgba8::rgb(0xE5, 0xE5, 0xE5);
    /// Palette mid gray (`#737373`), used for placeholder text.
    pub const MID_GRAY: Rgba8 = Rgba8::rgb(0x73, 0x73, 0x73);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` / `#RRGGBBAA` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> WirecheckResult<Self> {
        parse_hex(s).map_err(WirecheckError::validation)
    }

    /// Parse a hex color, falling back to `default` for empty or malformed input.
    pub fn from_hex_or(s: &str, default: Rgba8) -> Self {
        if s.trim().is_empty() {
            return default;
        }
        Self::from_hex(s).unwrap_or(default)
    }

    /// Uppercase `#RRGGBB` form (alpha dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as an `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// WCAG 2.0 relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Scale every channel toward black by `amount` in `[0, 1]`.
    pub fn darken(self, amount: f64) -> Self {
        let k = 1.0 - amount.clamp(0.0, 1.0);
        let f = |c: u8| (f64::from(c) * k).round().clamp(0.0, 255.0) as u8;
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    /// Move every channel toward white by `amount` in `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Self {
        let k = amount.clamp(0.0, 1.0);
        let f = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * k).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    /// `true` when the color reads as a dark background.
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < 0.5
    }
}

/// WCAG contrast ratio between two colors, always `>= 1.0`.
pub fn contrast_ratio(a: Rgba8, b: Rgba8) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Find a nearby foreground that reaches `target` against `bg`.
///
/// Darkens in 10% steps first; when the background is dark, lightens in 10% steps next.
/// Returns the first candidate meeting the target together with its ratio.
pub fn suggest_accessible_foreground(fg: Rgba8, bg: Rgba8, target: f64) -> Option<(Rgba8, f64)> {
    let steps = (1..=10).map(|k| f64::from(k) / 10.0);
    for amount in steps.clone() {
        let c = fg.darken(amount);
        let ratio = contrast_ratio(c, bg);
        if ratio >= target {
            return Some((c, ratio));
        }
    }
    if bg.is_dark() {
        for amount in steps {
            let c = fg.lighten(amount);
            let ratio = contrast_ratio(c, bg);
            if ratio >= target {
                return Some((c, ratio));
            }
        }
    }
    None
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Extract the first `#RRGGBB` token from a CSS-ish string such as `"1px solid #000000"`.
pub fn find_hex_token(s: &str) -> Option<Rgba8> {
    s.split_whitespace()
        .filter(|tok| tok.starts_with('#'))
        .find_map(|tok| parse_hex(tok.trim_end_matches([',', ';'])).ok())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
