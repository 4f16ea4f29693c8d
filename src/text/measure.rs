use crate::assets::font::FontResource;
use crate::foundation::error::ThumbResult;

/// Laid-out extent of a single line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width of the line.
    pub width: f32,
    /// Line height (ascent + descent + leading).
    pub height: f32,
}

/// Pixel measurement of single-line text.
///
/// Implementations must be pure in `(text, font, size_px)`: the same inputs always produce the
/// same extent. Font fitting depends on this to be well defined.
pub trait TextMeasure {
    /// Measure `text` set in `font` at `size_px`.
    fn measure(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
    ) -> ThumbResult<TextExtent>;
}
