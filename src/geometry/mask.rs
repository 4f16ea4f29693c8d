//! Alpha masks for circular crops and rounded frame corners.
//!
//! Masks are single-channel rasters where 0 is fully transparent and 255 fully opaque. Pixel
//! coverage is decided at the pixel centre, so edges are hard (no anti-aliasing) and every mask is
//! a pure function of its integer inputs.

use crate::foundation::core::FrameSize;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::foundation::math::mul_div255_u8;

/// Single-channel alpha raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl Mask {
    /// A mask of the given size filled with `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> ThumbResult<Self> {
        let size = FrameSize::new(width, height)?;
        let len = (size.width as usize)
            .checked_mul(size.height as usize)
            .ok_or_else(|| ThumbError::geometry("mask size overflow"))?;
        Ok(Self {
            width,
            height,
            alpha: vec![value; len],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`; out-of-bounds reads are transparent.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Row-major alpha bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.alpha
    }

    fn set(&mut self, x: u32, y: u32, v: u8) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.alpha[idx] = v;
    }

    /// Scale every channel of a premultiplied RGBA8 buffer of the same size by this mask.
    pub fn apply_to(&self, rgba8_premul: &mut [u8]) -> ThumbResult<()> {
        if rgba8_premul.len() != self.alpha.len().saturating_mul(4) {
            return Err(ThumbError::geometry(format!(
                "mask {}x{} does not match target buffer of {} bytes",
                self.width,
                self.height,
                rgba8_premul.len()
            )));
        }
        for (px, &m) in rgba8_premul.chunks_exact_mut(4).zip(&self.alpha) {
            if m == 255 {
                continue;
            }
            let w = u16::from(m);
            for c in px.iter_mut() {
                *c = mul_div255_u8(u16::from(*c), w);
            }
        }
        Ok(())
    }
}

/// 255 inside the circle inscribed in a `diameter × diameter` square, 0 outside.
pub fn circular_mask(diameter: u32) -> ThumbResult<Mask> {
    if diameter == 0 {
        return Err(ThumbError::geometry("circle diameter must be > 0"));
    }
    let mut mask = Mask::filled(diameter, diameter, 0)?;
    let r = f64::from(diameter) / 2.0;
    for y in 0..diameter {
        for x in 0..diameter {
            if inside_disk(x, y, r, r, r) {
                mask.set(x, y, 255);
            }
        }
    }
    Ok(mask)
}

/// 255 inside a `width × height` rectangle whose corners are quarter-circles of `radius`.
///
/// `radius` must be positive and no larger than half the shorter side.
pub fn rounded_corner_mask(width: u32, height: u32, radius: u32) -> ThumbResult<Mask> {
    let size = FrameSize::new(width, height)?;
    if radius == 0 {
        return Err(ThumbError::geometry("corner radius must be > 0"));
    }
    if radius > size.min_side() / 2 {
        return Err(ThumbError::geometry(format!(
            "corner radius {radius} exceeds half the shorter side of {size}"
        )));
    }

    let stencil = quarter_stencil(radius)?;
    let mut mask = Mask::filled(width, height, 255)?;
    let right = width - radius;
    let bottom = height - radius;
    let last = radius - 1;
    for y in 0..radius {
        for x in 0..radius {
            let v = stencil.get(x, y);
            mask.set(x, y, v);
            mask.set(right + x, y, stencil.get(last - x, y));
            mask.set(x, bottom + y, stencil.get(x, last - y));
            mask.set(right + x, bottom + y, stencil.get(last - x, last - y));
        }
    }
    Ok(mask)
}

// Top-left quadrant of a disk of the given radius; the arc centre sits on the stencil's
// bottom-right corner.
fn quarter_stencil(radius: u32) -> ThumbResult<Mask> {
    let mut stencil = Mask::filled(radius, radius, 0)?;
    let r = f64::from(radius);
    for y in 0..radius {
        for x in 0..radius {
            if inside_disk(x, y, r, r, r) {
                stencil.set(x, y, 255);
            }
        }
    }
    Ok(stencil)
}

fn inside_disk(x: u32, y: u32, cx: f64, cy: f64, r: f64) -> bool {
    let dx = f64::from(x) + 0.5 - cx;
    let dy = f64::from(y) + 0.5 - cy;
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
