use std::collections::HashMap;

use crate::assets::font::FontResource;
use crate::foundation::color::Color;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::text::measure::{TextExtent, TextMeasure};

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// Registered font families are remembered by content hash, so measuring the same font at many
/// sizes only registers it once.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Color>,
    families: HashMap<u64, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    fn family_for(&mut self, font: &FontResource) -> ThumbResult<String> {
        if let Some(name) = self.families.get(&font.key()) {
            return Ok(name.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ThumbError::resource(format!("no font families found in '{}'", font.name()))
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| {
                ThumbError::resource(format!("font family in '{}' has no name", font.name()))
            })?
            .to_string();

        tracing::debug!(font = font.name(), family = %family_name, "registered font");
        self.families.insert(font.key(), family_name.clone());
        Ok(family_name)
    }

    /// Shape and lay out one unwrapped line of text.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
        brush: Color,
    ) -> ThumbResult<parley::Layout<Color>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ThumbError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.family_for(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Color> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for TextLayoutEngine {
    fn measure(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
    ) -> ThumbResult<TextExtent> {
        let layout = self.layout_line(text, font, size_px, Color::WHITE)?;
        Ok(TextExtent {
            width: layout.width(),
            height: layout.height(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
