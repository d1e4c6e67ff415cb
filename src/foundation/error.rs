/// Convenience result type used across canvas-bridge.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Top-level error taxonomy used by bridge APIs.
///
/// Unsupported extensions are not errors: vending returns `None` for them.
#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A symbolic name that is not part of the compiled-in capability table.
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    /// The owning GPU surface has been destroyed.
    #[error("surface destroyed")]
    SurfaceDestroyed,

    /// An asset handle that was released (or belongs to another arena).
    #[error("stale asset handle")]
    StaleHandle,

    /// Pixel data could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Pixel data could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Remote or local fetch of encoded bytes failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Platform resource (drawable) lookup or rasterization failed.
    #[error("resource error: {0}")]
    Resource(String),

    /// Worker pool construction or submission failure.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// Invalid configuration file or values.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CanvasError {
    /// Build a [`CanvasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CanvasError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CanvasError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CanvasError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`CanvasError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`CanvasError::Pool`] value.
    pub fn pool(msg: impl Into<String>) -> Self {
        Self::Pool(msg.into())
    }

    /// Build a [`CanvasError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
