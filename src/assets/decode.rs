use crate::assets::raster::{PreparedImage, premultiply_rgba8_in_place};
use crate::foundation::error::{ThumbError, ThumbResult};

/// Decode encoded image bytes (PNG, JPEG, ...) and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> ThumbResult<PreparedImage> {
    if bytes.is_empty() {
        return Err(ThumbError::decode("source image buffer is empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ThumbError::decode(format!("decode source image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    PreparedImage::from_premul(width, height, rgba8_premul)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
