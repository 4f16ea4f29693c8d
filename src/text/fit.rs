use crate::assets::font::FontResource;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::text::measure::TextMeasure;

/// Result of [`fit_font`]: a size and the font it applies to.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedFont {
    /// Pixel size, within the `[min_size, start_size]` search range.
    pub size: u32,
    /// Font the size was measured with.
    pub font: FontResource,
}

/// Largest size in `min_size..=start_size` at which `text` is at most `max_pixel_width` wide.
///
/// Sizes are tried from `start_size` downward, one pixel at a time. When nothing fits, the result
/// is `min_size` and the text is allowed to overflow. Only measurement failures (an unusable font)
/// or a zero `min_size` are errors. A `start_size` below `min_size` searches `min_size` alone.
pub fn fit_font<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    max_pixel_width: f32,
    font: &FontResource,
    start_size: u32,
    min_size: u32,
) -> ThumbResult<FittedFont> {
    if min_size == 0 {
        return Err(ThumbError::validation("minimum font size must be > 0"));
    }
    let start_size = start_size.max(min_size);

    for size in (min_size..=start_size).rev() {
        let extent = measure.measure(text, font, size as f32)?;
        if extent.width <= max_pixel_width {
            return Ok(FittedFont {
                size,
                font: font.clone(),
            });
        }
    }

    tracing::debug!(
        text,
        max_pixel_width,
        min_size,
        "text overflows at minimum size"
    );
    Ok(FittedFont {
        size: min_size,
        font: font.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
