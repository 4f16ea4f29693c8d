//! The fixed thumbnail layout.
//!
//! Layers are produced in this order, which is also their z-order:
//! blurred and darkened backdrop, circular crop, title lines, info line, accent divider and dot,
//! duration, watermark. The rounded frame mask is applied last to everything.

use crate::assets::font::{FontResource, FontSet};
use crate::assets::raster::PreparedImage;
use crate::effects::adjust::brightness;
use crate::effects::blur::gaussian_blur;
use crate::foundation::color::Color;
use crate::foundation::core::{FrameSize, Point};
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::geometry::mask::{circular_mask, rounded_corner_mask};
use crate::metadata::model::Metadata;
use crate::render::accent::AccentSource;
use crate::render::canvas::Canvas;
use crate::render::overlay::Overlay;
use crate::style::model::{AccentStyle, TextStyle, ThumbnailStyle, TitleStyle, WatermarkStyle};
use crate::text::engine::TextLayoutEngine;
use crate::text::fit::fit_font;
use crate::text::segment::{TextBlock, segment_title};

/// Layout decisions taken while rendering one thumbnail.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    /// How the title was split.
    pub title: TextBlock,
    /// Fitted size of the first title line, if it was drawn.
    pub line1_size: Option<u32>,
    /// Fitted size of the second title line, if it was drawn.
    pub line2_size: Option<u32>,
    /// Accent colour used for the divider and dot.
    pub accent: Color,
}

/// A finished frame before encoding.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Premultiplied frame pixels.
    pub image: PreparedImage,
    /// Decisions taken while laying it out.
    pub report: RenderReport,
}

/// Render `source` and `metadata` into one frame according to `style`.
pub(crate) fn render(
    source: &PreparedImage,
    metadata: &Metadata,
    fonts: &FontSet,
    style: &ThumbnailStyle,
    accent: &AccentSource,
) -> ThumbResult<Rendered> {
    style.validate()?;
    let frame = style.frame.size;

    let mut canvas = background(source, style)?;
    paste_circle(&mut canvas, source, style)?;

    let accent = accent.pick(style.accent.channel_min..=style.accent.channel_max);
    tracing::debug!(accent = %accent.to_hex(), "picked accent colour");

    let mut engine = TextLayoutEngine::new();
    let mut overlay = Overlay::new(frame, &mut engine)?;

    let (title, line1_size, line2_size) =
        draw_title(&mut overlay, metadata.title(), &fonts.heading, &style.title)?;
    draw_text(
        &mut overlay,
        &metadata.info_line(),
        &fonts.secondary,
        &style.info,
    )?;
    draw_accent(&mut overlay, &style.accent, accent);
    draw_text(
        &mut overlay,
        metadata.duration(),
        &fonts.secondary,
        &style.duration,
    )?;
    draw_watermark(&mut overlay, &fonts.secondary, &style.watermark, frame)?;

    canvas.draw_layer(&overlay.finish())?;
    round_corners(&mut canvas, style.frame.corner_radius)?;

    Ok(Rendered {
        image: canvas.into_image()?,
        report: RenderReport {
            title,
            line1_size,
            line2_size,
            accent,
        },
    })
}

/// Resize to fit the frame, blur, darken, and centre over the backdrop colour.
fn background(source: &PreparedImage, style: &ThumbnailStyle) -> ThumbResult<Canvas> {
    let frame = style.frame.size;
    let bg = &style.background;

    let fitted = source.size().fit_within(frame);
    let resized = source.resized(fitted)?;
    let blurred = gaussian_blur(&resized, bg.blur_sigma)?;
    let darkened = brightness(&blurred, bg.brightness)?;

    let mut canvas = Canvas::filled(frame, bg.backdrop.with_alpha(255))?;
    let x = (i64::from(frame.width) - i64::from(fitted.width)) / 2;
    let y = (i64::from(frame.height) - i64::from(fitted.height)) / 2;
    canvas.draw_image(&darkened, x, y);

    tracing::debug!(source = %source.size(), fitted = %fitted, x, y, "background ready");
    Ok(canvas)
}

/// Crop the unblurred source into a disk and paste it at the configured origin.
fn paste_circle(
    canvas: &mut Canvas,
    source: &PreparedImage,
    style: &ThumbnailStyle,
) -> ThumbResult<()> {
    let circle = &style.circle;
    let d = circle.diameter;
    let square = source.resized(FrameSize::new(d, d)?)?;
    let mask = circular_mask(d)?;

    let x = circle.origin.x.round() as i64;
    let y = circle.origin.y.round() as i64;
    let frame = canvas.size();
    if x < 0
        || y < 0
        || x + i64::from(d) > i64::from(frame.width)
        || y + i64::from(d) > i64::from(frame.height)
    {
        return Err(ThumbError::geometry(format!(
            "circle of diameter {d} at ({x}, {y}) falls outside the {frame} frame"
        )));
    }
    canvas.paste_masked(&square, &mask, x, y)
}

fn draw_title(
    overlay: &mut Overlay<'_>,
    title: &str,
    font: &FontResource,
    style: &TitleStyle,
) -> ThumbResult<(TextBlock, Option<u32>, Option<u32>)> {
    let block = segment_title(title, style.max_chars_per_line);

    let mut sizes = [None, None];
    for (slot, (text, line)) in sizes
        .iter_mut()
        .zip([(&block.line1, &style.line1), (&block.line2, &style.line2)])
    {
        if text.is_empty() {
            continue;
        }
        let fitted = fit_font(
            overlay.engine(),
            text,
            style.max_width,
            font,
            line.start_size,
            line.min_size,
        )?;
        overlay.text(
            text,
            &fitted.font,
            fitted.size as f32,
            line.origin,
            line.color,
        )?;
        *slot = Some(fitted.size);
    }

    tracing::debug!(
        line1 = %block.line1,
        line2 = %block.line2,
        line1_size = ?sizes[0],
        line2_size = ?sizes[1],
        "title laid out"
    );
    Ok((block, sizes[0], sizes[1]))
}

fn draw_text(
    overlay: &mut Overlay<'_>,
    text: &str,
    font: &FontResource,
    style: &TextStyle,
) -> ThumbResult<()> {
    overlay.text(text, font, style.size as f32, style.origin, style.color)
}

/// Divider line and dot. The line is a horizontal band centred on `line_start.y`.
fn draw_accent(overlay: &mut Overlay<'_>, style: &AccentStyle, color: Color) {
    let half = style.line_width / 2.0;
    overlay.fill_rect(
        style.line_start.x,
        style.line_start.y - half,
        style.line_end_x,
        style.line_start.y + half,
        color,
    );
    overlay.fill_circle(style.dot_center, style.dot_radius, color);
}

/// Bottom-right label: four glow copies offset diagonally, then the label itself.
fn draw_watermark(
    overlay: &mut Overlay<'_>,
    font: &FontResource,
    style: &WatermarkStyle,
    frame: FrameSize,
) -> ThumbResult<()> {
    if style.text.is_empty() {
        return Ok(());
    }
    let size = style.size as f32;
    let extent = overlay.measure(&style.text, font, size)?;
    let origin = Point::new(
        f64::from(frame.width) - f64::from(extent.width) - style.margin,
        f64::from(frame.height) - f64::from(extent.height) - style.margin,
    );

    let o = style.glow_offset;
    for (dx, dy) in [(-o, -o), (-o, o), (o, -o), (o, o)] {
        overlay.text(
            &style.text,
            font,
            size,
            Point::new(origin.x + dx, origin.y + dy),
            style.glow,
        )?;
    }
    overlay.text(&style.text, font, size, origin, style.fill)
}

fn round_corners(canvas: &mut Canvas, radius: u32) -> ThumbResult<()> {
    let size = canvas.size();
    let mask = rounded_corner_mask(size.width, size.height, radius)?;
    canvas.apply_mask(&mask)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
