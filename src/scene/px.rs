//! Pixel-length deserialization: accepts `16`, `16.0`, `"16"` and `"16px"`.
//!
//! Relative units (`%`, `rem`, `auto`) carry no fixed pixel size and deserialize to 0, which the
//! layout engine treats as "unset".

use serde::Deserialize;

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Float(f64),
        Str(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Int(v) => u32::try_from(v)
            .map_err(|_| serde::de::Error::custom(format!("pixel value {v} out of range"))),
        Repr::Float(v) => {
            if !v.is_finite() || v < 0.0 {
                return Err(serde::de::Error::custom(format!(
                    "pixel value {v} must be finite and >= 0"
                )));
            }
            Ok(v.round() as u32)
        }
        Repr::Str(s) => parse_px(&s).map_err(serde::de::Error::custom),
    }
}

/// Parse a CSS-ish length into whole pixels.
pub(crate) fn parse_px(s: &str) -> Result<u32, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }
    let num = match s.strip_suffix("px") {
        Some(n) => n.trim(),
        None if s.bytes().all(|b| b.is_ascii_digit() || b == b'.') => s,
        None => return Ok(0),
    };
    let v: f64 = num
        .parse()
        .map_err(|_| format!("invalid pixel length \"{s}\""))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("pixel length \"{s}\" must be >= 0"));
    }
    Ok(v.round() as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/px.rs"]
mod tests;
