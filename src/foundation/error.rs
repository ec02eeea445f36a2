/// Convenience result type used across stitchpress.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    /// Garment tag outside the supported set.
    ///
    /// Unknown tags are rejected rather than silently mapped to a default
    /// placement rule.
    #[error("invalid garment type: '{0}'")]
    InvalidGarmentType(String),

    /// Input bytes could not be interpreted as raster image data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Design image has zero width or height.
    #[error("empty design: design width and height must be positive")]
    EmptyDesign,

    /// Invalid user-provided or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PreviewError {
    /// Build a [`PreviewError::InvalidGarmentType`] value.
    pub fn invalid_garment_type(tag: impl Into<String>) -> Self {
        Self::InvalidGarmentType(tag.into())
    }

    /// Build a [`PreviewError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PreviewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
