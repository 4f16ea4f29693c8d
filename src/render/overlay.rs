//! Vector layer for text, divider and dot, rasterized with `vello_cpu`.
//!
//! Primitives are drawn in call order, so the order of calls is the z-order of the layer. The
//! finished layer is a transparent full-frame pixmap that the caller composites over the canvas.

use vello_cpu::kurbo::Shape;

use crate::assets::font::FontResource;
use crate::foundation::color::Color;
use crate::foundation::core::{FrameSize, Point};
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::text::engine::TextLayoutEngine;
use crate::text::measure::{TextExtent, TextMeasure};

pub(crate) struct Overlay<'a> {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    engine: &'a mut TextLayoutEngine,
}

impl<'a> Overlay<'a> {
    pub(crate) fn new(size: FrameSize, engine: &'a mut TextLayoutEngine) -> ThumbResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| ThumbError::geometry("overlay width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| ThumbError::geometry("overlay height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.reset();
        Ok(Self {
            ctx,
            width,
            height,
            engine,
        })
    }

    pub(crate) fn measure(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
    ) -> ThumbResult<TextExtent> {
        self.engine.measure(text, font, size_px)
    }

    pub(crate) fn engine(&mut self) -> &mut TextLayoutEngine {
        &mut *self.engine
    }

    /// Draw one line of text with its layout box's top-left corner at `origin`.
    pub(crate) fn text(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
        origin: Point,
        color: Color,
    ) -> ThumbResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let layout = self.engine.layout_line(text, font, size_px, color)?;

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // The run may have been shaped with a fallback family, so draw with its font.
                let font_data: vello_cpu::peniko::FontData = run.run().font().clone();
                self.ctx.set_paint(run.style().brush.to_paint());
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    pub(crate) fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        self.ctx.set_paint(color.to_paint());
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x1, y1));
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let path = vello_cpu::kurbo::Circle::new((center.x, center.y), radius).to_path(0.1);
        self.ctx.set_paint(color.to_paint());
        self.ctx.fill_path(&path);
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 bytes.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
