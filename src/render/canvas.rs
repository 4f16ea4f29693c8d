use crate::assets::raster::PreparedImage;
use crate::effects::composite::{premul_over_in_place, premul_over_px};
use crate::foundation::color::Color;
use crate::foundation::core::FrameSize;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::geometry::mask::Mask;

/// Mutable premultiplied RGBA8 working surface owned by one compositing run.
pub(crate) struct Canvas {
    size: FrameSize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub(crate) fn filled(size: FrameSize, color: Color) -> ThumbResult<Self> {
        let img = PreparedImage::solid(size.width, size.height, color)?;
        Ok(Self {
            size,
            pixels: img.rgba8_premul,
        })
    }

    pub(crate) fn size(&self) -> FrameSize {
        self.size
    }

    /// Source-over `img` with its top-left at `(x, y)`; parts outside the canvas are clipped.
    pub(crate) fn draw_image(&mut self, img: &PreparedImage, x: i64, y: i64) {
        self.blend_rows(img, None, x, y);
    }

    /// Source-over `img` at `(x, y)` with `mask` as stencil: where the mask is 0 the canvas is
    /// left untouched.
    pub(crate) fn paste_masked(
        &mut self,
        img: &PreparedImage,
        mask: &Mask,
        x: i64,
        y: i64,
    ) -> ThumbResult<()> {
        if mask.width() != img.width || mask.height() != img.height {
            return Err(ThumbError::geometry(format!(
                "mask {}x{} does not match pasted image {}",
                mask.width(),
                mask.height(),
                img.size()
            )));
        }
        self.blend_rows(img, Some(mask), x, y);
        Ok(())
    }

    fn blend_rows(&mut self, img: &PreparedImage, mask: Option<&Mask>, x: i64, y: i64) {
        let cw = i64::from(self.size.width);
        let ch = i64::from(self.size.height);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(img.width)).min(cw);
        let y1 = (y + i64::from(img.height)).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            let sy = (dy - y) as u32;
            for dx in x0..x1 {
                let sx = (dx - x) as u32;
                let mut src = img.pixel(sx, sy);
                if let Some(m) = mask {
                    let w = u16::from(m.get(sx, sy));
                    if w == 0 {
                        continue;
                    }
                    if w != 255 {
                        for c in src.iter_mut() {
                            *c = crate::foundation::math::mul_div255_u8(u16::from(*c), w);
                        }
                    }
                }
                let idx = ((dy * cw + dx) as usize) * 4;
                let d = &mut self.pixels[idx..idx + 4];
                let out = premul_over_px([d[0], d[1], d[2], d[3]], src);
                d.copy_from_slice(&out);
            }
        }
    }

    /// Source-over a full-canvas premultiplied layer.
    pub(crate) fn draw_layer(&mut self, layer: &[u8]) -> ThumbResult<()> {
        premul_over_in_place(&mut self.pixels, layer)
    }

    /// Multiply the whole canvas by `mask` (used for the rounded output corners).
    pub(crate) fn apply_mask(&mut self, mask: &Mask) -> ThumbResult<()> {
        if mask.width() != self.size.width || mask.height() != self.size.height {
            return Err(ThumbError::geometry(format!(
                "mask {}x{} does not match canvas {}",
                mask.width(),
                mask.height(),
                self.size
            )));
        }
        mask.apply_to(&mut self.pixels)
    }

    pub(crate) fn into_image(self) -> ThumbResult<PreparedImage> {
        PreparedImage::from_premul(self.size.width, self.size.height, self.pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
