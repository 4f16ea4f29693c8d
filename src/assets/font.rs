use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::foundation::math::hash_bytes;

/// A font supplied by the host as raw TrueType/OpenType bytes.
///
/// Cloning is cheap; the bytes are shared.
#[derive(Clone)]
pub struct FontResource {
    name: String,
    bytes: Arc<Vec<u8>>,
    key: u64,
}

impl FontResource {
    /// Wrap font bytes under a human-readable name used in diagnostics.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> ThumbResult<Self> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(ThumbError::resource(format!("font '{name}' is empty")));
        }
        let key = hash_bytes(&bytes);
        Ok(Self {
            name,
            bytes: Arc::new(bytes),
            key,
        })
    }

    /// Read a font file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ThumbResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ThumbError::resource(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(path.display().to_string(), bytes)
    }

    /// Diagnostic name (file path or caller-provided label).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw font bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PartialEq for FontResource {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.bytes == other.bytes
    }
}

/// The two font families the layout needs.
#[derive(Clone, Debug)]
pub struct FontSet {
    /// Title lines.
    pub heading: FontResource,
    /// Channel/views line, duration and watermark.
    pub secondary: FontResource,
}

impl FontSet {
    /// Load both fonts from disk.
    pub fn from_paths(heading: impl AsRef<Path>, secondary: impl AsRef<Path>) -> ThumbResult<Self> {
        Ok(Self {
            heading: FontResource::from_path(heading)?,
            secondary: FontResource::from_path(secondary)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
