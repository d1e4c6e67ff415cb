#![allow(unsafe_code)]

use glow::HasContext as _;

use crate::{
    foundation::core::{GlVersion, Token},
    gl::backend::{GlBackend, GlError},
};

/// [`GlBackend`] over a live `glow` context.
///
/// The context must be current on the thread that owns the surface for as long as the surface
/// exists. `GpuSurface` is `!Send`, so the surface cannot migrate away from that thread.
pub struct GlowBackend {
    gl: glow::Context,
}

impl GlowBackend {
    /// Wrap a context created by the host (EGL, EAGL, surfman, ...).
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Give the context back to the host.
    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

impl GlBackend for GlowBackend {
    fn version(&self) -> GlVersion {
        let v = self.gl.version();
        GlVersion {
            es: v.is_embedded,
            major: v.major,
            minor: v.minor,
        }
    }

    fn extensions(&self) -> Vec<String> {
        let mut out: Vec<String> = self.gl.supported_extensions().iter().cloned().collect();
        out.sort();
        out
    }

    fn get_integer(&mut self, pname: Token) -> i32 {
        // SAFETY: the context is current on this thread (see type docs).
        unsafe { self.gl.get_parameter_i32(pname.get()) }
    }

    fn draw_buffers(&mut self, buffers: &[Token]) {
        let raw: Vec<u32> = buffers.iter().map(|t| t.get()).collect();
        // SAFETY: the context is current on this thread (see type docs).
        unsafe { self.gl.draw_buffers(&raw) }
    }

    fn get_error(&mut self) -> GlError {
        // SAFETY: the context is current on this thread (see type docs).
        GlError::from_raw(unsafe { self.gl.get_error() })
    }
}
