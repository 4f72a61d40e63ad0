use crate::foundation::color::Rgba8;
use crate::foundation::error::WirecheckResult;
use crate::render::font::{ASCENT, draw_text};
use crate::render::raster::FrameRGBA;

/// Horizontal space between the two frames.
pub const COMPARE_GUTTER: u32 = 20;
const CAPTION_HEIGHT: u32 = 24;

/// Place two rendered frames next to each other on a white canvas.
///
/// Captions, when given, are drawn in a strip above each frame. The shorter frame is padded
/// with white at the bottom and a light divider runs down the middle of the gutter.
pub fn compose_side_by_side(
    left: &FrameRGBA,
    right: &FrameRGBA,
    captions: Option<(&str, &str)>,
) -> WirecheckResult<FrameRGBA> {
    let top = if captions.is_some() { CAPTION_HEIGHT } else { 0 };
    let width = left.width + COMPARE_GUTTER + right.width;
    let height = top + left.height.max(right.height);

    let mut canvas = FrameRGBA::new(width, height, Rgba8::WHITE).to_image()?;
    image::imageops::replace(&mut canvas, &left.to_image()?, 0, i64::from(top));
    image::imageops::replace(
        &mut canvas,
        &right.to_image()?,
        i64::from(left.width + COMPARE_GUTTER),
        i64::from(top),
    );

    let mut out = FrameRGBA::from_image(canvas);
    let divider_x = (left.width + COMPARE_GUTTER / 2) as i32;
    out.vline(divider_x, 0, height as i32, 1, Rgba8::LIGHT_GRAY);

    if let Some((a, b)) = captions {
        let baseline = 6 + ASCENT;
        draw_text(&mut out, 4, baseline, a, Rgba8::BLACK, 1);
        let rx = (left.width + COMPARE_GUTTER) as i32 + 4;
        draw_text(&mut out, rx, baseline, b, Rgba8::BLACK, 1);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compare.rs"]
mod tests;
