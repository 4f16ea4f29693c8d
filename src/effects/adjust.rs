use crate::assets::raster::PreparedImage;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Scale colour channels by `factor`, leaving alpha untouched.
pub(crate) fn brightness(img: &PreparedImage, factor: f32) -> ThumbResult<PreparedImage> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(ThumbError::validation(
            "brightness factor must be finite and >= 0",
        ));
    }
    let mut out = vec![0u8; img.rgba8_premul.len()];
    color_matrix_rgba8_premul(&img.rgba8_premul, &mut out, brightness_matrix(factor));
    PreparedImage::from_premul(img.width, img.height, out)
}

fn brightness_matrix(f: f32) -> [f32; 20] {
    [
        f, 0.0, 0.0, 0.0, 0.0, //
        0.0, f, 0.0, 0.0, 0.0, //
        0.0, 0.0, f, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]
}

// Row-major 4x5 matrix applied to straight-alpha colour; inputs and outputs are premultiplied.
fn color_matrix_rgba8_premul(src: &[u8], dst: &mut [u8], m: [f32; 20]) {
    debug_assert_eq!(src.len(), dst.len());
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let pr = s[0] as f32 / 255.0;
        let pg = s[1] as f32 / 255.0;
        let pb = s[2] as f32 / 255.0;
        let pa = s[3] as f32 / 255.0;

        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = pr * inv_a;
        let g = pg * inv_a;
        let b = pb * inv_a;
        let a = pa;

        let out_r = (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0);
        let out_g = (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0);
        let out_b = (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0);
        let out_a = (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0);

        d[0] = ((out_r * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        d[1] = ((out_g * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        d[2] = ((out_b * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;
