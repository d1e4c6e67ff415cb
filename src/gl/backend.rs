use crate::foundation::core::{GlVersion, Token};

/// Error code reported by the driver's `glGetError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlError {
    /// `GL_NO_ERROR`.
    NoError,
    /// `GL_INVALID_ENUM`.
    InvalidEnum,
    /// `GL_INVALID_VALUE`.
    InvalidValue,
    /// `GL_INVALID_OPERATION`.
    InvalidOperation,
    /// Any other code (out of memory, context lost, vendor codes).
    Other(u32),
}

impl GlError {
    /// Raw `GL_NO_ERROR`.
    pub const NO_ERROR: u32 = 0;
    /// Raw `GL_INVALID_ENUM`.
    pub const INVALID_ENUM: u32 = 0x0500;
    /// Raw `GL_INVALID_VALUE`.
    pub const INVALID_VALUE: u32 = 0x0501;
    /// Raw `GL_INVALID_OPERATION`.
    pub const INVALID_OPERATION: u32 = 0x0502;

    /// Classify a raw `glGetError` value.
    pub fn from_raw(code: u32) -> Self {
        match code {
            Self::NO_ERROR => Self::NoError,
            Self::INVALID_ENUM => Self::InvalidEnum,
            Self::INVALID_VALUE => Self::InvalidValue,
            Self::INVALID_OPERATION => Self::InvalidOperation,
            other => Self::Other(other),
        }
    }

    /// Raw code for this error.
    pub fn raw(self) -> u32 {
        match self {
            Self::NoError => Self::NO_ERROR,
            Self::InvalidEnum => Self::INVALID_ENUM,
            Self::InvalidValue => Self::INVALID_VALUE,
            Self::InvalidOperation => Self::INVALID_OPERATION,
            Self::Other(code) => code,
        }
    }
}

/// Native rendering-context boundary.
///
/// Implementations wrap a context that is current on the calling thread. Every method maps to
/// one driver entry point; none of them retries or translates driver failures, which stay
/// observable through [`GlBackend::get_error`].
pub trait GlBackend {
    /// Context version reported by the driver.
    fn version(&self) -> GlVersion;

    /// Driver extension strings (`GL_EXT_draw_buffers`, ...).
    fn extensions(&self) -> Vec<String>;

    /// `glGetIntegerv` for a single value.
    fn get_integer(&mut self, pname: Token) -> i32;

    /// `glDrawBuffers(buffers.len(), buffers, 0)`.
    fn draw_buffers(&mut self, buffers: &[Token]);

    /// `glGetError`; clears the sticky error flag.
    fn get_error(&mut self) -> GlError;
}

#[cfg(test)]
#[path = "../../tests/unit/gl/backend.rs"]
mod tests;
