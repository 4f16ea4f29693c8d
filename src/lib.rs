//! thumbkit renders fixed-layout promotional thumbnails.
//!
//! Given the bytes of a source image and a few text fields, a [`Thumbnailer`] produces a
//! 1280x720 PNG with rounded corners. The source is shown twice, once as a blurred and darkened
//! backdrop and once as a circular crop. The title, channel line, duration and a watermark are
//! laid out next to it, along with an accent divider.
//!
//! - Build a [`FontSet`] and optionally a [`ThumbnailStyle`]
//! - Create a [`Thumbnailer`]
//! - Call [`Thumbnailer::compose`] and [`publish`] the result
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod geometry;
mod metadata;
mod pipeline;
mod render;
mod style;
mod text;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{FrameSize, Point};
pub use crate::foundation::error::{FailureReason, ThumbError, ThumbResult};

pub use crate::assets::decode::decode_image;
pub use crate::assets::font::{FontResource, FontSet};
pub use crate::assets::raster::PreparedImage;
pub use crate::encode::png::{EncodedImage, OutputFormat, encode_png};
pub use crate::geometry::mask::{Mask, circular_mask, rounded_corner_mask};
pub use crate::metadata::model::{
    Metadata, SearchRecord, UNKNOWN_CHANNEL, UNKNOWN_DURATION, UNKNOWN_TITLE, UNKNOWN_VIEWS,
    normalize_title,
};
pub use crate::pipeline::driver::{CompositeResult, Failure, Thumbnailer, compose};
pub use crate::pipeline::publish::{publish, remove_best_effort};
pub use crate::render::accent::AccentSource;
pub use crate::render::compositor::{RenderReport, Rendered};
pub use crate::style::model::{
    AccentStyle, BackgroundStyle, CircleStyle, FrameStyle, TextStyle, ThumbnailStyle, TitleLineStyle,
    TitleStyle, WatermarkStyle,
};
pub use crate::text::engine::TextLayoutEngine;
pub use crate::text::fit::{FittedFont, fit_font};
pub use crate::text::measure::{TextExtent, TextMeasure};
pub use crate::text::segment::{TextBlock, segment_title};
