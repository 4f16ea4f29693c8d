use crate::foundation::color::Color;
use crate::foundation::core::FrameSize;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Raster image in premultiplied RGBA8 form.
///
/// Transforms return new values; a prepared image is never modified in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    /// Wrap an existing premultiplied buffer, checking its length.
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> ThumbResult<Self> {
        let expected = FrameSize::new(width, height)?.rgba_len()?;
        if rgba8_premul.len() != expected {
            return Err(ThumbError::geometry(format!(
                "expected {expected} bytes for a {width}x{height} image, got {}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }

    /// An image filled with one colour.
    pub fn solid(width: u32, height: u32, color: Color) -> ThumbResult<Self> {
        let len = FrameSize::new(width, height)?.rgba_len()?;
        let px = color.to_premul();
        let mut data = vec![0u8; len];
        for c in data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
        Self::from_premul(width, height, data)
    }

    /// Pixel dimensions.
    pub fn size(&self) -> FrameSize {
        FrameSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied pixel at `(x, y)`; out-of-bounds reads are transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.rgba8_premul[idx],
            self.rgba8_premul[idx + 1],
            self.rgba8_premul[idx + 2],
            self.rgba8_premul[idx + 3],
        ]
    }

    /// Lanczos3 resample to exactly `target`.
    ///
    /// Filtering runs on premultiplied data so transparent pixels do not bleed colour.
    pub fn resized(&self, target: FrameSize) -> ThumbResult<Self> {
        let target = FrameSize::new(target.width, target.height)?;
        if target == self.size() {
            return Ok(self.clone());
        }
        let src = image::RgbaImage::from_raw(self.width, self.height, self.rgba8_premul.clone())
            .ok_or_else(|| ThumbError::geometry("image buffer does not match its dimensions"))?;
        let out = image::imageops::resize(
            &src,
            target.width,
            target.height,
            image::imageops::FilterType::Lanczos3,
        );
        let mut data = out.into_raw();
        // Lanczos ringing can push colour above alpha, which is not valid premultiplied data.
        for px in data.chunks_exact_mut(4) {
            let a = px[3];
            px[0] = px[0].min(a);
            px[1] = px[1].min(a);
            px[2] = px[2].min(a);
        }
        Self::from_premul(target.width, target.height, data)
    }

    /// Convert to straight-alpha RGBA8 for encoding.
    pub fn to_straight_rgba(&self) -> ThumbResult<image::RgbaImage> {
        let mut data = self.rgba8_premul.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| ThumbError::geometry("image buffer does not match its dimensions"))
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
