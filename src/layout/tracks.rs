//! `grid-template-columns` parsing and track sizing.

/// Upper bound on the number of column tracks in one template.
pub const MAX_TRACKS: usize = 4096;

/// One column track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Track {
    /// Fixed width in pixels (`"300px"`).
    Px(u32),
    /// Fraction of the remaining space (`"1fr"`).
    Fr(f64),
}

/// Parse a track list such as `"repeat(4, 1fr)"`, `"300px 1fr 300px"` or
/// `"200px repeat(2, 1fr)"`.
///
/// Tokens that are neither `px` nor `fr` (e.g. `auto`) count as `1fr`. An empty list yields a
/// single `1fr` column. The list is cut at [`MAX_TRACKS`] entries.
pub fn parse_template(template: &str) -> Vec<Track> {
    let mut tracks = Vec::new();
    for token in tokenize(template) {
        if let Some(inner) = token
            .strip_prefix("repeat(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let (count, body) = match inner.split_once(',') {
                Some((n, body)) => (n.trim().parse::<usize>().unwrap_or(1), body),
                None => (1, inner),
            };
            let unit: Vec<Track> = body.split_whitespace().map(parse_track).collect();
            if unit.is_empty() {
                continue;
            }
            let room = MAX_TRACKS.saturating_sub(tracks.len());
            let count = count.min(room.div_ceil(unit.len()));
            for _ in 0..count {
                tracks.extend_from_slice(&unit);
            }
        } else {
            tracks.push(parse_track(&token));
        }
        if tracks.len() >= MAX_TRACKS {
            tracks.truncate(MAX_TRACKS);
            break;
        }
    }
    if tracks.is_empty() {
        tracks.push(Track::Fr(1.0));
    }
    tracks
}

/// Split on whitespace while keeping `repeat(...)` groups intact.
fn tokenize(template: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut depth = 0usize;
    for ch in template.trim().chars() {
        match ch {
            '(' => {
                depth += 1;
                cur.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                cur.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

fn parse_track(token: &str) -> Track {
    let token = token.trim();
    if let Some(px) = token.strip_suffix("px")
        && let Ok(v) = px.trim().parse::<f64>()
        && v.is_finite()
        && v >= 0.0
    {
        return Track::Px(v.round() as u32);
    }
    if let Some(fr) = token.strip_suffix("fr")
        && let Ok(v) = fr.trim().parse::<f64>()
        && v.is_finite()
        && v > 0.0
    {
        return Track::Fr(v);
    }
    Track::Fr(1.0)
}

/// Resolve track widths for a content box of `content_w` pixels with `gap` between columns.
///
/// Fraction tracks share `content_w - sum(px) - gap * (cols - 1)`, rounded down, so the
/// columns plus gaps never exceed the content width when the fixed tracks fit.
pub fn resolve_widths(tracks: &[Track], content_w: i32, gap: i32) -> Vec<i32> {
    let gaps = i32::try_from(tracks.len().saturating_sub(1)).unwrap_or(i32::MAX);
    let fixed = tracks.iter().fold(0i32, |acc, t| match t {
        Track::Px(v) => acc.saturating_add(px(*v)),
        Track::Fr(_) => acc,
    });
    let total_fr: f64 = tracks
        .iter()
        .map(|t| match t {
            Track::Fr(k) => *k,
            Track::Px(_) => 0.0,
        })
        .sum();
    let available = content_w
        .saturating_sub(fixed)
        .saturating_sub(gap.saturating_mul(gaps))
        .max(0);

    tracks
        .iter()
        .map(|t| match t {
            Track::Px(v) => px(*v),
            Track::Fr(k) if total_fr > 0.0 => (f64::from(available) * k / total_fr).floor() as i32,
            Track::Fr(_) => 0,
        })
        .collect()
}

/// Left offsets of each column relative to the content box.
pub fn column_offsets(widths: &[i32], gap: i32) -> Vec<i32> {
    let mut x: i32 = 0;
    widths
        .iter()
        .map(|w| {
            let at = x;
            x = x.saturating_add(*w).saturating_add(gap);
            at
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tracks.rs"]
mod tests;
