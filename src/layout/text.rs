//! Text metrics heuristics. Not exact; only used to size text boxes and distribute slack.

use crate::scene::tokens::SizeToken;

/// Number of lines in `content`, at least one.
pub fn line_count(content: &str) -> usize {
    content.matches('\n').count() + 1
}

/// Box height of a text block: `14 + lines * 16 + 8`.
pub fn text_height(content: &str) -> i32 {
    let lines = i32::try_from(line_count(content)).unwrap_or(i32::MAX);
    lines.saturating_mul(16).saturating_add(22)
}

/// Estimated width of the longest line at the given size.
pub fn estimate_text_width(content: &str, size: Option<SizeToken>) -> i32 {
    let per_char = size.unwrap_or(SizeToken::Base).char_width() as i32;
    let longest = content
        .split('\n')
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    i32::try_from(longest)
        .unwrap_or(i32::MAX)
        .saturating_mul(per_char)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
