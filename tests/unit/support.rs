//! Shared fixtures for unit tests.

use crate::assets::font::FontResource;
use crate::foundation::error::ThumbResult;
use crate::text::measure::{TextExtent, TextMeasure};

/// Checked-in DejaVu Sans fixture; see `tests/data/fonts/LICENSE-DejaVu.txt`.
pub(crate) const FONT_FIXTURE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/fonts/DejaVuSans.ttf");

/// The real font used by every test that shapes or rasterizes text.
pub(crate) fn test_font() -> FontResource {
    FontResource::from_path(FONT_FIXTURE).unwrap()
}

/// Every character advances `size_px * 0.5`; line height is `size_px * 1.2`.
#[derive(Debug, Default)]
pub(crate) struct MonospaceMeasure {
    pub(crate) calls: usize,
}

impl TextMeasure for MonospaceMeasure {
    fn measure(
        &mut self,
        text: &str,
        _font: &FontResource,
        size_px: f32,
    ) -> ThumbResult<TextExtent> {
        self.calls += 1;
        Ok(TextExtent {
            width: text.chars().count() as f32 * size_px * 0.5,
            height: size_px * 1.2,
        })
    }
}

pub(crate) fn dummy_font() -> FontResource {
    FontResource::from_bytes("dummy", vec![0u8; 16]).unwrap()
}
