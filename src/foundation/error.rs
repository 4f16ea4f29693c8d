/// Convenience result type used across thumbkit.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// Source bytes are malformed or in an unsupported format.
    #[error("decode error: {0}")]
    Decode(String),

    /// A required asset (font, file) is missing or unreadable.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Size, radius or placement parameters violate their invariants.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid user-provided data (metadata, style config).
    #[error("validation error: {0}")]
    Validation(String),

    /// The final frame could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ThumbError::ResourceUnavailable`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }

    /// Build a [`ThumbError::InvalidGeometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`ThumbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Classify this error for the [`crate::CompositeResult`] failure contract.
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Decode(_) => FailureReason::DecodeError,
            Self::ResourceUnavailable(_) => FailureReason::ResourceUnavailable,
            Self::InvalidGeometry(_) => FailureReason::InvalidGeometry,
            Self::Validation(_) => FailureReason::InvalidInput,
            Self::Encode(_) => FailureReason::EncodeError,
            Self::Other(_) => FailureReason::Internal,
        }
    }
}

/// Failure classification surfaced by [`crate::compose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Source bytes could not be decoded.
    DecodeError,
    /// A font or other asset was missing.
    ResourceUnavailable,
    /// Geometry parameters were out of range.
    InvalidGeometry,
    /// Metadata or style values were rejected.
    InvalidInput,
    /// PNG encoding failed.
    EncodeError,
    /// Anything else, including a panic caught at the driver boundary.
    Internal,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DecodeError => "decode_error",
            Self::ResourceUnavailable => "resource_unavailable",
            Self::InvalidGeometry => "invalid_geometry",
            Self::InvalidInput => "invalid_input",
            Self::EncodeError => "encode_error",
            Self::Internal => "internal",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
