use crate::assets::raster::PreparedImage;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Kernel radius covering three standard deviations.
pub(crate) fn kernel_radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Separable Gaussian blur over premultiplied RGBA8 with clamp-to-edge sampling.
///
/// Weights are quantized to Q16 so the output is bit-exact across platforms.
pub(crate) fn gaussian_blur(img: &PreparedImage, sigma: f32) -> ThumbResult<PreparedImage> {
    let radius = kernel_radius_for_sigma(sigma);
    if radius == 0 {
        return Ok(img.clone());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let len = img.rgba8_premul.len();
    let mut tmp = vec![0u8; len];
    let mut out = vec![0u8; len];

    horizontal_pass(&img.rgba8_premul, &mut tmp, img.width, img.height, &kernel);
    vertical_pass(&tmp, &mut out, img.width, img.height, &kernel);
    PreparedImage::from_premul(img.width, img.height, out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ThumbResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ThumbError::validation("blur sigma must be finite and > 0"));
    }

    let taps = radius
        .checked_mul(2)
        .and_then(|t| t.checked_add(1))
        .and_then(|t| usize::try_from(t).ok())
        .ok_or_else(|| ThumbError::validation(format!("blur radius {radius} is too large")))?;
    let r = i32::try_from(radius)
        .map_err(|_| ThumbError::validation(format!("blur radius {radius} is too large")))?;
    let mut weights_f = Vec::<f64>::with_capacity(taps);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Fold rounding drift into the centre tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
