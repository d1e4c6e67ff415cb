use crate::{
    caps::registry::{Capability, is_color_attachment},
    foundation::core::{GlVersion, Token},
    gl::backend::{GlBackend, GlError},
};

/// Driver model that keeps GLES draw-buffer state in memory.
///
/// Used where no native context exists (tooling, tests, hosts rendering off-screen on the CPU).
/// It validates calls the way a conformant GLES driver does for a bound framebuffer object and
/// records the first error until [`GlBackend::get_error`] clears it.
#[derive(Clone, Debug)]
pub struct HeadlessGl {
    version: GlVersion,
    extensions: Vec<String>,
    max_draw_buffers: i32,
    max_color_attachments: i32,
    max_anisotropy: i32,
    draw_buffers: Vec<Token>,
    error: GlError,
}

impl HeadlessGl {
    /// Model a context of `version` with its baseline limits.
    ///
    /// ES 3.0+ contexts get four draw buffers and color attachments; older ones get one.
    pub fn new(version: GlVersion) -> Self {
        let mrt = if version.es_at_least(3, 0) || !version.es {
            4
        } else {
            1
        };
        let mut draw_buffers = vec![Token::NONE; mrt as usize];
        draw_buffers[0] = Capability::GL_COLOR_ATTACHMENT0_EXT.token();
        Self {
            version,
            extensions: Vec::new(),
            max_draw_buffers: mrt,
            max_color_attachments: mrt,
            max_anisotropy: 16,
            draw_buffers,
            error: GlError::NoError,
        }
    }

    /// Advertise driver extension strings.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        if self.max_draw_buffers == 1
            && self
                .extensions
                .iter()
                .any(|e| e == "GL_EXT_draw_buffers" || e == "GL_NV_draw_buffers")
        {
            self = self.with_limits(4, 4);
        }
        self
    }

    /// Override `MAX_DRAW_BUFFERS` and `MAX_COLOR_ATTACHMENTS` (clamped to `1..=16`).
    pub fn with_limits(mut self, max_draw_buffers: i32, max_color_attachments: i32) -> Self {
        self.max_draw_buffers = max_draw_buffers.clamp(1, 16);
        self.max_color_attachments = max_color_attachments.clamp(1, 16);
        self.draw_buffers
            .resize(self.max_draw_buffers as usize, Token::NONE);
        self
    }

    fn record(&mut self, err: GlError) {
        if self.error == GlError::NoError {
            self.error = err;
        }
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    fn validate_draw_buffers(&self, buffers: &[Token]) -> Result<(), GlError> {
        if buffers.len() > self.max_draw_buffers as usize {
            return Err(GlError::InvalidValue);
        }
        let base = Capability::GL_COLOR_ATTACHMENT0_EXT.token().get();
        for (i, token) in buffers.iter().enumerate() {
            if *token == Token::NONE {
                continue;
            }
            if *token == Token::BACK {
                // only the default framebuffer accepts BACK
                return Err(GlError::InvalidOperation);
            }
            if !is_color_attachment(*token) {
                return Err(GlError::InvalidEnum);
            }
            let attachment = token.get() - base;
            if attachment as usize != i || attachment as i32 >= self.max_color_attachments {
                return Err(GlError::InvalidOperation);
            }
        }
        Ok(())
    }
}

impl GlBackend for HeadlessGl {
    fn version(&self) -> GlVersion {
        self.version
    }

    fn extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn get_integer(&mut self, pname: Token) -> i32 {
        let draw_buffer0 = Capability::GL_DRAW_BUFFER0_EXT.token().get();
        match pname {
            p if p == Capability::GL_MAX_DRAW_BUFFERS_EXT.token() => self.max_draw_buffers,
            p if p == Capability::GL_MAX_COLOR_ATTACHMENTS_EXT.token() => {
                self.max_color_attachments
            }
            p if p == Capability::GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT.token()
                && self.has_extension("GL_EXT_texture_filter_anisotropic") =>
            {
                self.max_anisotropy
            }
            p if (draw_buffer0..draw_buffer0 + 16).contains(&p.get()) => {
                let i = (p.get() - draw_buffer0) as usize;
                if i < self.draw_buffers.len() {
                    self.draw_buffers[i].get() as i32
                } else {
                    self.record(GlError::InvalidEnum);
                    0
                }
            }
            _ => {
                self.record(GlError::InvalidEnum);
                0
            }
        }
    }

    fn draw_buffers(&mut self, buffers: &[Token]) {
        match self.validate_draw_buffers(buffers) {
            Ok(()) => {
                for (i, slot) in self.draw_buffers.iter_mut().enumerate() {
                    *slot = buffers.get(i).copied().unwrap_or(Token::NONE);
                }
            }
            Err(err) => self.record(err),
        }
    }

    fn get_error(&mut self) -> GlError {
        std::mem::replace(&mut self.error, GlError::NoError)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gl/headless.rs"]
mod tests;
