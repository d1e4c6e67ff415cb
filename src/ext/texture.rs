//! Texture and renderbuffer format extensions.

use crate::{
    caps::registry::Capability,
    ext::Vend,
    foundation::{core::Token, error::CanvasResult},
    surface::context::SurfaceLink,
};

/// `EXT_color_buffer_half_float`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct ExtColorBufferHalfFloat {
    pub rgba16f_ext: Token,
    pub rgb16f_ext: Token,
    pub framebuffer_attachment_component_type_ext: Token,
    pub unsigned_normalized_ext: Token,
}

impl Vend for ExtColorBufferHalfFloat {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            rgba16f_ext: Capability::RGBA16F_EXT.token(),
            rgb16f_ext: Capability::RGB16F_EXT.token(),
            framebuffer_attachment_component_type_ext:
                Capability::FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT.token(),
            unsigned_normalized_ext: Capability::UNSIGNED_NORMALIZED_EXT.token(),
        }
    }
}

/// `WEBGL_color_buffer_float`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct WebglColorBufferFloat {
    pub rgba32f_ext: Token,
    pub framebuffer_attachment_component_type_ext: Token,
    pub unsigned_normalized_ext: Token,
}

impl Vend for WebglColorBufferFloat {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            rgba32f_ext: Capability::RGBA32F_EXT.token(),
            framebuffer_attachment_component_type_ext:
                Capability::FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT.token(),
            unsigned_normalized_ext: Capability::UNSIGNED_NORMALIZED_EXT.token(),
        }
    }
}

/// `EXT_sRGB`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct ExtSrgb {
    pub srgb_ext: Token,
    pub srgb_alpha_ext: Token,
    pub srgb8_alpha8_ext: Token,
    pub framebuffer_attachment_color_encoding_ext: Token,
}

impl Vend for ExtSrgb {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            srgb_ext: Capability::SRGB_EXT.token(),
            srgb_alpha_ext: Capability::SRGB_ALPHA_EXT.token(),
            srgb8_alpha8_ext: Capability::SRGB8_ALPHA8_EXT.token(),
            framebuffer_attachment_color_encoding_ext:
                Capability::FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT.token(),
        }
    }
}

/// `EXT_texture_filter_anisotropic`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ExtTextureFilterAnisotropic {
    /// `TEXTURE_MAX_ANISOTROPY_EXT`, a `texParameter` name.
    pub texture_max_anisotropy_ext: Token,
    /// `MAX_TEXTURE_MAX_ANISOTROPY_EXT`, a `getParameter` name.
    pub max_texture_max_anisotropy_ext: Token,
    surface: SurfaceLink,
}

impl Vend for ExtTextureFilterAnisotropic {
    fn vend(link: &SurfaceLink) -> Self {
        Self {
            texture_max_anisotropy_ext: Capability::TEXTURE_MAX_ANISOTROPY_EXT.token(),
            max_texture_max_anisotropy_ext: Capability::MAX_TEXTURE_MAX_ANISOTROPY_EXT.token(),
            surface: link.clone(),
        }
    }
}

impl ExtTextureFilterAnisotropic {
    /// Driver's maximum anisotropy.
    pub fn max_anisotropy(&self) -> CanvasResult<i32> {
        Ok(self
            .surface
            .upgrade()?
            .get_parameter(self.max_texture_max_anisotropy_ext))
    }
}

/// `OES_texture_float`. Enables float texel uploads; exposes no constants.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct OesTextureFloat {}

impl Vend for OesTextureFloat {
    fn vend(_: &SurfaceLink) -> Self {
        Self {}
    }
}

/// `OES_texture_half_float`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct OesTextureHalfFloat {
    /// `HALF_FLOAT_OES`.
    pub half_float_oes: Token,
}

impl Vend for OesTextureHalfFloat {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            half_float_oes: Capability::HALF_FLOAT_OES.token(),
        }
    }
}

/// `WEBGL_compressed_texture_s3tc`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct WebglCompressedTextureS3tc {
    pub compressed_rgb_s3tc_dxt1_ext: Token,
    pub compressed_rgba_s3tc_dxt1_ext: Token,
    pub compressed_rgba_s3tc_dxt3_ext: Token,
    pub compressed_rgba_s3tc_dxt5_ext: Token,
}

impl Vend for WebglCompressedTextureS3tc {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            compressed_rgb_s3tc_dxt1_ext: Capability::COMPRESSED_RGB_S3TC_DXT1_EXT.token(),
            compressed_rgba_s3tc_dxt1_ext: Capability::COMPRESSED_RGBA_S3TC_DXT1_EXT.token(),
            compressed_rgba_s3tc_dxt3_ext: Capability::COMPRESSED_RGBA_S3TC_DXT3_EXT.token(),
            compressed_rgba_s3tc_dxt5_ext: Capability::COMPRESSED_RGBA_S3TC_DXT5_EXT.token(),
        }
    }
}

/// `WEBGL_compressed_texture_s3tc_srgb`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct WebglCompressedTextureS3tcSrgb {
    pub compressed_srgb_s3tc_dxt1_ext: Token,
    pub compressed_srgb_alpha_s3tc_dxt1_ext: Token,
    pub compressed_srgb_alpha_s3tc_dxt3_ext: Token,
    pub compressed_srgb_alpha_s3tc_dxt5_ext: Token,
}

impl Vend for WebglCompressedTextureS3tcSrgb {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            compressed_srgb_s3tc_dxt1_ext: Capability::COMPRESSED_SRGB_S3TC_DXT1_EXT.token(),
            compressed_srgb_alpha_s3tc_dxt1_ext: Capability::COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT
                .token(),
            compressed_srgb_alpha_s3tc_dxt3_ext: Capability::COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT
                .token(),
            compressed_srgb_alpha_s3tc_dxt5_ext: Capability::COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT
                .token(),
        }
    }
}

/// `WEBGL_compressed_texture_atc`. The WebGL names alias the AMD driver values.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct WebglCompressedTextureAtc {
    pub compressed_rgb_atc_webgl: Token,
    pub compressed_rgba_atc_explicit_alpha_webgl: Token,
    pub compressed_rgba_atc_interpolated_alpha_webgl: Token,
}

impl Vend for WebglCompressedTextureAtc {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            compressed_rgb_atc_webgl: Capability::COMPRESSED_RGB_ATC_WEBGL.token(),
            compressed_rgba_atc_explicit_alpha_webgl:
                Capability::COMPRESSED_RGBA_ATC_EXPLICIT_ALPHA_WEBGL.token(),
            compressed_rgba_atc_interpolated_alpha_webgl:
                Capability::COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL.token(),
        }
    }
}

/// `WEBGL_compressed_texture_pvrtc`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct WebglCompressedTexturePvrtc {
    pub compressed_rgb_pvrtc_4bppv1_img: Token,
    pub compressed_rgb_pvrtc_2bppv1_img: Token,
    pub compressed_rgba_pvrtc_4bppv1_img: Token,
    pub compressed_rgba_pvrtc_2bppv1_img: Token,
}

impl Vend for WebglCompressedTexturePvrtc {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            compressed_rgb_pvrtc_4bppv1_img: Capability::COMPRESSED_RGB_PVRTC_4BPPV1_IMG.token(),
            compressed_rgb_pvrtc_2bppv1_img: Capability::COMPRESSED_RGB_PVRTC_2BPPV1_IMG.token(),
            compressed_rgba_pvrtc_4bppv1_img: Capability::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG
                .token(),
            compressed_rgba_pvrtc_2bppv1_img: Capability::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG
                .token(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ext/texture.rs"]
mod tests;
