//! Bytes in, PNG or typed failure out.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::assets::decode::decode_image;
use crate::assets::font::FontSet;
use crate::assets::raster::PreparedImage;
use crate::encode::png::{EncodedImage, encode_png};
use crate::foundation::error::{FailureReason, ThumbError, ThumbResult};
use crate::metadata::model::Metadata;
use crate::render::accent::AccentSource;
use crate::render::compositor::{Rendered, render};
use crate::style::model::ThumbnailStyle;

/// Why a composition produced no image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Failure {
    /// Machine-readable classification.
    pub reason: FailureReason,
    /// Human-readable detail.
    pub message: String,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.reason, self.message)
    }
}

impl From<ThumbError> for Failure {
    fn from(err: ThumbError) -> Self {
        Self {
            reason: err.reason(),
            message: err.to_string(),
        }
    }
}

/// Outcome of [`Thumbnailer::compose`]. A failure never carries partial output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompositeResult {
    /// The encoded thumbnail.
    Success(EncodedImage),
    /// What went wrong.
    Failure(Failure),
}

impl CompositeResult {
    /// True for [`CompositeResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<EncodedImage, Failure> {
        match self {
            Self::Success(img) => Ok(img),
            Self::Failure(f) => Err(f),
        }
    }
}

/// Fonts, layout and accent policy bundled for repeated compositions.
///
/// A `Thumbnailer` holds no per-render state and can be shared across threads.
#[derive(Clone, Debug)]
pub struct Thumbnailer {
    fonts: FontSet,
    style: ThumbnailStyle,
    accent: AccentSource,
}

impl Thumbnailer {
    /// Default layout with a random accent colour per render.
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            style: ThumbnailStyle::default(),
            accent: AccentSource::Random,
        }
    }

    /// Replace the layout. The style is validated here so bad configs fail early.
    pub fn with_style(mut self, style: ThumbnailStyle) -> ThumbResult<Self> {
        style.validate()?;
        self.style = style;
        Ok(self)
    }

    /// Replace the accent colour policy.
    pub fn with_accent(mut self, accent: AccentSource) -> Self {
        self.accent = accent;
        self
    }

    /// Active layout.
    pub fn style(&self) -> &ThumbnailStyle {
        &self.style
    }

    /// Render an already decoded source without encoding it.
    pub fn render(&self, source: &PreparedImage, metadata: &Metadata) -> ThumbResult<Rendered> {
        render(source, metadata, &self.fonts, &self.style, &self.accent)
    }

    /// Decode, render and encode, propagating the first error.
    #[tracing::instrument(skip(self, source_bytes, metadata), fields(len = source_bytes.len()))]
    pub fn try_compose(
        &self,
        source_bytes: &[u8],
        metadata: &Metadata,
    ) -> ThumbResult<EncodedImage> {
        let source = decode_image(source_bytes)?;
        let rendered = self.render(&source, metadata)?;
        let encoded = encode_png(&rendered.image)?;
        tracing::debug!(bytes = encoded.bytes.len(), "thumbnail encoded");
        Ok(encoded)
    }

    /// Like [`Thumbnailer::try_compose`], but every error and any panic becomes a
    /// [`CompositeResult::Failure`].
    pub fn compose(&self, source_bytes: &[u8], metadata: &Metadata) -> CompositeResult {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.try_compose(source_bytes, metadata)
        }));
        let failure = match outcome {
            Ok(Ok(img)) => return CompositeResult::Success(img),
            Ok(Err(err)) => Failure::from(err),
            Err(payload) => Failure {
                reason: FailureReason::Internal,
                message: format!("compositor panicked: {}", panic_message(payload.as_ref())),
            },
        };
        tracing::warn!(reason = %failure.reason, message = %failure.message, "composition failed");
        CompositeResult::Failure(failure)
    }
}

/// One-shot composition with the default layout and a random accent colour.
pub fn compose(source_bytes: &[u8], metadata: &Metadata, fonts: &FontSet) -> CompositeResult {
    Thumbnailer::new(fonts.clone()).compose(source_bytes, metadata)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/driver.rs"]
mod tests;
