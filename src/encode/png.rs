use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::assets::raster::PreparedImage;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Container format of an [`EncodedImage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG with an alpha channel.
    #[default]
    Png,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
        }
    }
}

/// Encoded bytes of a finished thumbnail.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// File contents.
    pub bytes: Vec<u8>,
    /// Container format of `bytes`.
    pub format: OutputFormat,
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Encode a prepared image as straight-alpha RGBA PNG.
pub fn encode_png(img: &PreparedImage) -> ThumbResult<EncodedImage> {
    let rgba = img.to_straight_rgba()?;
    let mut out = Cursor::new(Vec::new());
    rgba.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| ThumbError::encode(format!("png encode {}: {e}", img.size())))?;
    Ok(EncodedImage {
        bytes: out.into_inner(),
        format: OutputFormat::Png,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
