use std::path::Path;

use crate::foundation::color::Rgba8;
use crate::foundation::core::RectPx;
use crate::foundation::error::{WirecheckError, WirecheckResult};

/// A rendered wireframe as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Allocate a frame filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> Self {
        let px = fill.to_array();
        let len = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    /// Write one pixel; coordinates outside the frame are clipped.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Fill a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, r: RectPx, color: Rgba8) {
        let x0 = r.x.max(0);
        let y0 = r.y.max(0);
        let x1 = r.right().min(self.width as i32);
        let y1 = r.bottom().min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = color.to_array();
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = y as usize * stride;
            for x in x0..x1 {
                let i = row + x as usize * 4;
                self.data[i..i + 4].copy_from_slice(&px);
            }
        }
    }

    /// Horizontal run of `thickness` rows starting at `(x, y)`.
    pub fn hline(&mut self, x: i32, y: i32, len: i32, thickness: i32, color: Rgba8) {
        self.fill_rect(RectPx::new(x, y, len, thickness), color);
    }

    /// Vertical run of `thickness` columns starting at `(x, y)`.
    pub fn vline(&mut self, x: i32, y: i32, len: i32, thickness: i32, color: Rgba8) {
        self.fill_rect(RectPx::new(x, y, thickness, len), color);
    }

    /// Outline all four sides of `r`, drawn inside the rectangle.
    pub fn stroke_rect(&mut self, r: RectPx, thickness: i32, color: Rgba8) {
        self.hline(r.x, r.y, r.w, thickness, color);
        self.hline(r.x, r.bottom() - thickness, r.w, thickness, color);
        self.vline(r.x, r.y, r.h, thickness, color);
        self.vline(r.right() - thickness, r.y, r.h, thickness, color);
    }

    /// Convert into an `image` buffer.
    pub fn to_image(&self) -> WirecheckResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| WirecheckError::render("frame buffer size does not match dimensions"))
    }

    /// Wrap an `image` buffer.
    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Encode as PNG at `path`, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> WirecheckResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                WirecheckError::render(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| WirecheckError::render(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
