//! Layout and styling of the promotional frame.
//!
//! Every coordinate, size and colour the compositor uses lives here. `ThumbnailStyle::default()`
//! is the canonical 1280×720 layout; JSON files may override any subset of fields.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::effects::blur::kernel_radius_for_sigma;
use crate::foundation::color::Color;
use crate::foundation::core::{FrameSize, Point};
use crate::foundation::error::{ThumbError, ThumbResult};

/// Complete style of a thumbnail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailStyle {
    /// Output frame size and corner rounding.
    pub frame: FrameStyle,
    /// Blurred, darkened backdrop.
    pub background: BackgroundStyle,
    /// Circular crop of the source image.
    pub circle: CircleStyle,
    /// Title lines.
    pub title: TitleStyle,
    /// `"<channel> | <views>"` line.
    pub info: TextStyle,
    /// Divider line and dot.
    pub accent: AccentStyle,
    /// Duration label next to the accent dot.
    pub duration: TextStyle,
    /// Bottom-right watermark with diagonal glow.
    pub watermark: WatermarkStyle,
}

/// Output frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameStyle {
    /// Output size in pixels.
    pub size: FrameSize,
    /// Radius of the rounded output corners.
    pub corner_radius: u32,
}

/// Background treatment of the resized source image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundStyle {
    /// Gaussian standard deviation in pixels; 0 disables the blur.
    pub blur_sigma: f32,
    /// Colour multiplier applied after blurring (0.6 = 60% brightness).
    pub brightness: f32,
    /// Opaque fill behind the image.
    pub backdrop: Color,
}

/// Circular crop placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircleStyle {
    /// Diameter of the crop in pixels.
    pub diameter: u32,
    /// Top-left corner of the crop's bounding square.
    pub origin: Point,
}

/// Title segmentation and per-line fitting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleStyle {
    /// Character budget of the first line.
    pub max_chars_per_line: usize,
    /// Pixel width both lines are fitted into.
    pub max_width: f32,
    /// First line.
    pub line1: TitleLineStyle,
    /// Overflow line.
    pub line2: TitleLineStyle,
}

/// One auto-sized title line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleLineStyle {
    /// Top-left of the text layout box.
    pub origin: Point,
    /// First size tried.
    pub start_size: u32,
    /// Smallest size allowed.
    pub min_size: u32,
    /// Fill colour.
    pub color: Color,
}

/// Fixed-size text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextStyle {
    /// Top-left of the text layout box.
    pub origin: Point,
    /// Pixel size.
    pub size: u32,
    /// Fill colour.
    pub color: Color,
}

/// Divider line and dot drawn in the accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccentStyle {
    /// Left end of the horizontal divider (centre of the stroke).
    pub line_start: Point,
    /// Right end x coordinate of the divider.
    pub line_end_x: f64,
    /// Stroke width of the divider.
    pub line_width: f64,
    /// Centre of the filled dot.
    pub dot_center: Point,
    /// Radius of the filled dot.
    pub dot_radius: f64,
    /// Lowest value a random accent channel may take.
    pub channel_min: u8,
    /// Highest value a random accent channel may take.
    pub channel_max: u8,
}

/// Watermark label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatermarkStyle {
    /// Label text; an empty string disables the watermark.
    pub text: String,
    /// Pixel size.
    pub size: u32,
    /// Distance of the text box from the right and bottom frame edges.
    pub margin: f64,
    /// Diagonal offset of the four glow copies.
    pub glow_offset: f64,
    /// Colour of the glow copies.
    pub glow: Color,
    /// Colour of the label itself.
    pub fill: Color,
}

impl Default for ThumbnailStyle {
    fn default() -> Self {
        Self {
            frame: FrameStyle::default(),
            background: BackgroundStyle::default(),
            circle: CircleStyle::default(),
            title: TitleStyle::default(),
            info: TextStyle {
                origin: Point::new(565.0, 305.0),
                size: 28,
                color: Color::rgb(240, 240, 240),
            },
            accent: AccentStyle::default(),
            duration: TextStyle {
                origin: Point::new(1080.0, 385.0),
                size: 26,
                color: Color::WHITE,
            },
            watermark: WatermarkStyle::default(),
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            size: FrameSize::HD,
            corner_radius: 30,
        }
    }
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            blur_sigma: 6.0,
            brightness: 0.6,
            backdrop: Color::BLACK,
        }
    }
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            diameter: 450,
            origin: Point::new(100.0, 150.0),
        }
    }
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            max_chars_per_line: 35,
            max_width: 540.0,
            line1: TitleLineStyle {
                origin: Point::new(565.0, 180.0),
                start_size: 42,
                min_size: 28,
                color: Color::WHITE,
            },
            line2: TitleLineStyle {
                origin: Point::new(565.0, 225.0),
                start_size: 36,
                min_size: 24,
                color: Color::rgb(220, 220, 220),
            },
        }
    }
}

impl Default for AccentStyle {
    fn default() -> Self {
        Self {
            line_start: Point::new(565.0, 370.0),
            line_end_x: 990.0,
            line_width: 6.0,
            dot_center: Point::new(1000.0, 372.0),
            dot_radius: 10.0,
            channel_min: 100,
            channel_max: 255,
        }
    }
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            text: "thumbkit".to_owned(),
            size: 24,
            margin: 25.0,
            glow_offset: 1.0,
            glow: Color::BLACK.with_alpha(180),
            fill: Color::WHITE.with_alpha(240),
        }
    }
}

impl ThumbnailStyle {
    /// Parse a style from a JSON reader. Missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ThumbResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ThumbError::validation(format!("parse style JSON: {e}")))
    }

    /// Parse a style from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ThumbResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ThumbError::resource(format!("open style JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check geometric and numeric invariants before any pixels are touched.
    pub fn validate(&self) -> ThumbResult<()> {
        let size = FrameSize::new(self.frame.size.width, self.frame.size.height)?;
        if size.width > u32::from(u16::MAX) || size.height > u32::from(u16::MAX) {
            return Err(ThumbError::geometry(format!(
                "frame {size} exceeds the rasterizer limit of {} pixels per side",
                u16::MAX
            )));
        }
        if self.frame.corner_radius == 0 || self.frame.corner_radius > size.min_side() / 2 {
            return Err(ThumbError::geometry(format!(
                "corner radius {} must be in 1..={} for a {size} frame",
                self.frame.corner_radius,
                size.min_side() / 2
            )));
        }

        let bg = &self.background;
        if !bg.blur_sigma.is_finite() || bg.blur_sigma < 0.0 {
            return Err(ThumbError::validation("background.blur_sigma must be >= 0"));
        }
        if kernel_radius_for_sigma(bg.blur_sigma) > size.min_side() {
            return Err(ThumbError::validation(format!(
                "background.blur_sigma {} needs a kernel wider than the {size} frame",
                bg.blur_sigma
            )));
        }
        if !bg.brightness.is_finite() || bg.brightness < 0.0 {
            return Err(ThumbError::validation("background.brightness must be >= 0"));
        }

        let c = &self.circle;
        if c.diameter == 0 {
            return Err(ThumbError::geometry("circle.diameter must be > 0"));
        }
        let d = f64::from(c.diameter);
        if !c.origin.is_finite()
            || c.origin.x < 0.0
            || c.origin.y < 0.0
            || c.origin.x + d > f64::from(size.width)
            || c.origin.y + d > f64::from(size.height)
        {
            return Err(ThumbError::geometry(format!(
                "circle of diameter {} at ({}, {}) does not fit inside the {size} frame",
                c.diameter, c.origin.x, c.origin.y
            )));
        }

        let t = &self.title;
        if t.max_chars_per_line == 0 {
            return Err(ThumbError::validation("title.max_chars_per_line must be > 0"));
        }
        if !t.max_width.is_finite() || t.max_width <= 0.0 {
            return Err(ThumbError::validation("title.max_width must be > 0"));
        }
        for (name, line) in [("title.line1", &t.line1), ("title.line2", &t.line2)] {
            if line.min_size == 0 || line.start_size < line.min_size {
                return Err(ThumbError::validation(format!(
                    "{name} sizes must satisfy 0 < min_size <= start_size"
                )));
            }
        }

        for (name, text) in [("info", &self.info), ("duration", &self.duration)] {
            if text.size == 0 {
                return Err(ThumbError::validation(format!("{name}.size must be > 0")));
            }
        }
        if self.watermark.size == 0 {
            return Err(ThumbError::validation("watermark.size must be > 0"));
        }

        let a = &self.accent;
        if a.channel_min > a.channel_max {
            return Err(ThumbError::validation(
                "accent.channel_min must be <= accent.channel_max",
            ));
        }
        if !(a.line_width > 0.0 && a.dot_radius > 0.0) {
            return Err(ThumbError::geometry(
                "accent.line_width and accent.dot_radius must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
