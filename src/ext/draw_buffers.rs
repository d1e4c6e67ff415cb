use crate::{
    caps::registry::Capability,
    ext::{Vend, name::ExtensionName},
    foundation::{core::Token, error::CanvasResult},
    surface::context::SurfaceLink,
};

/// `WEBGL_draw_buffers`: write to several color attachments from one draw call.
///
/// The constants are the WebGL-facing aliases, already resolved to driver values.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct WebglDrawBuffers {
    /// `COLOR_ATTACHMENT0_WEBGL` ..= `COLOR_ATTACHMENT15_WEBGL`.
    pub color_attachments: [Token; 16],
    /// `DRAW_BUFFER0_WEBGL` ..= `DRAW_BUFFER15_WEBGL`.
    pub draw_buffers: [Token; 16],
    /// `MAX_COLOR_ATTACHMENTS_WEBGL`.
    pub max_color_attachments: Token,
    /// `MAX_DRAW_BUFFERS_WEBGL`.
    pub max_draw_buffers: Token,
    surface: SurfaceLink,
}

impl Vend for WebglDrawBuffers {
    fn vend(link: &SurfaceLink) -> Self {
        let consts = ExtensionName::WebglDrawBuffers.constants();
        Self {
            color_attachments: std::array::from_fn(|i| consts[i].token()),
            draw_buffers: std::array::from_fn(|i| consts[16 + i].token()),
            max_color_attachments: Capability::MAX_COLOR_ATTACHMENTS_WEBGL.token(),
            max_draw_buffers: Capability::MAX_DRAW_BUFFERS_WEBGL.token(),
            surface: link.clone(),
        }
    }
}

impl WebglDrawBuffers {
    /// `drawBuffersWEBGL(buffers)`: forwards the ordered list to the driver's draw-buffers call.
    ///
    /// Fails only when the owning surface is gone; driver-side rejections surface through
    /// `GpuSurface::get_error`.
    pub fn draw_buffers_webgl(&self, buffers: &[Token]) -> CanvasResult<()> {
        self.surface.upgrade()?.draw_buffers(buffers);
        Ok(())
    }

    /// Current value of `MAX_DRAW_BUFFERS_WEBGL` on the owning surface's driver.
    pub fn query_max_draw_buffers(&self) -> CanvasResult<i32> {
        Ok(self.surface.upgrade()?.get_parameter(self.max_draw_buffers))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ext/draw_buffers.rs"]
mod tests;
