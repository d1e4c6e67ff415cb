use std::fmt;

use crate::{
    caps::registry::Capability,
    foundation::core::{GlVersion, Platform},
};

/// WebGL extension names the surface knows how to vend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionName {
    /// `WEBGL_draw_buffers`
    WebglDrawBuffers,
    /// `EXT_blend_minmax`
    ExtBlendMinmax,
    /// `EXT_color_buffer_half_float`
    ExtColorBufferHalfFloat,
    /// `WEBGL_color_buffer_float`
    WebglColorBufferFloat,
    /// `EXT_sRGB`
    ExtSrgb,
    /// `EXT_texture_filter_anisotropic`
    ExtTextureFilterAnisotropic,
    /// `EXT_disjoint_timer_query`
    ExtDisjointTimerQuery,
    /// `OES_standard_derivatives`
    OesStandardDerivatives,
    /// `OES_texture_float`
    OesTextureFloat,
    /// `OES_texture_half_float`
    OesTextureHalfFloat,
    /// `OES_vertex_array_object`
    OesVertexArrayObject,
    /// `WEBGL_compressed_texture_s3tc`
    WebglCompressedTextureS3tc,
    /// `WEBGL_compressed_texture_s3tc_srgb`
    WebglCompressedTextureS3tcSrgb,
    /// `WEBGL_compressed_texture_atc`
    WebglCompressedTextureAtc,
    /// `WEBGL_compressed_texture_pvrtc`
    WebglCompressedTexturePvrtc,
}

/// Minimum platform and driver support for one extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    /// Lowest Android SDK level whose GL bindings expose the needed entry points.
    pub min_android_api: u32,
    /// Lowest iOS `(major, minor)`.
    pub min_ios: (u32, u32),
    /// GLES version in which the feature is core, if any.
    pub core_since_es: Option<(u32, u32)>,
    /// Desktop OpenGL version in which the feature is core, if any.
    pub core_since_gl: Option<(u32, u32)>,
    /// Driver extension strings, any one of which is sufficient.
    pub driver_any_of: &'static [&'static str],
}

impl Requirement {
    /// Platform/OS gate.
    pub fn platform_ok(&self, platform: Platform) -> bool {
        match platform {
            Platform::Android { api_level } => api_level >= self.min_android_api,
            Platform::Ios { major, minor } => (major, minor) >= self.min_ios,
            Platform::Desktop => true,
        }
    }

    /// Driver gate: core in this context version, or one advertised extension string.
    pub fn driver_ok(&self, version: GlVersion, extensions: &[String]) -> bool {
        if let Some((major, minor)) = self.core_since_es
            && version.es_at_least(major, minor)
        {
            return true;
        }
        if let Some((major, minor)) = self.core_since_gl
            && version.desktop_at_least(major, minor)
        {
            return true;
        }
        self.driver_any_of
            .iter()
            .any(|wanted| extensions.iter().any(|have| have == wanted))
    }
}

const NO_GATE: u32 = 0;
const ES3: Option<(u32, u32)> = Some((3, 0));

impl ExtensionName {
    /// Every vendable extension, in `getSupportedExtensions` order.
    pub const ALL: &'static [ExtensionName] = &[
        ExtensionName::ExtBlendMinmax,
        ExtensionName::ExtColorBufferHalfFloat,
        ExtensionName::ExtDisjointTimerQuery,
        ExtensionName::ExtSrgb,
        ExtensionName::ExtTextureFilterAnisotropic,
        ExtensionName::OesStandardDerivatives,
        ExtensionName::OesTextureFloat,
        ExtensionName::OesTextureHalfFloat,
        ExtensionName::OesVertexArrayObject,
        ExtensionName::WebglColorBufferFloat,
        ExtensionName::WebglCompressedTextureAtc,
        ExtensionName::WebglCompressedTexturePvrtc,
        ExtensionName::WebglCompressedTextureS3tc,
        ExtensionName::WebglCompressedTextureS3tcSrgb,
        ExtensionName::WebglDrawBuffers,
    ];

    /// WebGL registry name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebglDrawBuffers => "WEBGL_draw_buffers",
            Self::ExtBlendMinmax => "EXT_blend_minmax",
            Self::ExtColorBufferHalfFloat => "EXT_color_buffer_half_float",
            Self::WebglColorBufferFloat => "WEBGL_color_buffer_float",
            Self::ExtSrgb => "EXT_sRGB",
            Self::ExtTextureFilterAnisotropic => "EXT_texture_filter_anisotropic",
            Self::ExtDisjointTimerQuery => "EXT_disjoint_timer_query",
            Self::OesStandardDerivatives => "OES_standard_derivatives",
            Self::OesTextureFloat => "OES_texture_float",
            Self::OesTextureHalfFloat => "OES_texture_half_float",
            Self::OesVertexArrayObject => "OES_vertex_array_object",
            Self::WebglCompressedTextureS3tc => "WEBGL_compressed_texture_s3tc",
            Self::WebglCompressedTextureS3tcSrgb => "WEBGL_compressed_texture_s3tc_srgb",
            Self::WebglCompressedTextureAtc => "WEBGL_compressed_texture_atc",
            Self::WebglCompressedTexturePvrtc => "WEBGL_compressed_texture_pvrtc",
        }
    }

    /// Match a `getExtension` argument. WebGL compares extension names ASCII case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.as_str().eq_ignore_ascii_case(name))
    }

    /// Minimum support needed before the surface vends this extension.
    pub fn requirement(self) -> Requirement {
        let (min_android_api, core_since_es, driver_any_of): (u32, _, &'static [&'static str]) =
            match self {
                Self::WebglDrawBuffers => (
                    Platform::ANDROID_JELLY_BEAN_MR2,
                    ES3,
                    &[
                        "GL_EXT_draw_buffers",
                        "GL_NV_draw_buffers",
                        "GL_ARB_draw_buffers",
                    ],
                ),
                Self::ExtBlendMinmax => (NO_GATE, ES3, &["GL_EXT_blend_minmax"]),
                Self::ExtColorBufferHalfFloat => {
                    (NO_GATE, None, &["GL_EXT_color_buffer_half_float"])
                }
                Self::WebglColorBufferFloat => (NO_GATE, None, &["GL_EXT_color_buffer_float"]),
                Self::ExtSrgb => (NO_GATE, ES3, &["GL_EXT_sRGB"]),
                Self::ExtTextureFilterAnisotropic => {
                    (NO_GATE, None, &["GL_EXT_texture_filter_anisotropic"])
                }
                Self::ExtDisjointTimerQuery => (
                    Platform::ANDROID_JELLY_BEAN_MR2,
                    None,
                    &["GL_EXT_disjoint_timer_query"],
                ),
                Self::OesStandardDerivatives => {
                    (NO_GATE, ES3, &["GL_OES_standard_derivatives"])
                }
                Self::OesTextureFloat => (NO_GATE, ES3, &["GL_OES_texture_float"]),
                Self::OesTextureHalfFloat => (NO_GATE, ES3, &["GL_OES_texture_half_float"]),
                Self::OesVertexArrayObject => (
                    Platform::ANDROID_JELLY_BEAN_MR2,
                    ES3,
                    &["GL_OES_vertex_array_object", "GL_ARB_vertex_array_object"],
                ),
                Self::WebglCompressedTextureS3tc => (
                    NO_GATE,
                    None,
                    &[
                        "GL_EXT_texture_compression_s3tc",
                        "GL_EXT_texture_compression_dxt1",
                    ],
                ),
                Self::WebglCompressedTextureS3tcSrgb => (
                    NO_GATE,
                    None,
                    &["GL_EXT_texture_compression_s3tc_srgb", "GL_NV_sRGB_formats"],
                ),
                Self::WebglCompressedTextureAtc => (
                    NO_GATE,
                    None,
                    &[
                        "GL_AMD_compressed_ATC_texture",
                        "GL_ATI_texture_compression_atitc",
                    ],
                ),
                Self::WebglCompressedTexturePvrtc => {
                    (NO_GATE, None, &["GL_IMG_texture_compression_pvrtc"])
                }
            };
        Requirement {
            min_android_api,
            min_ios: self.min_ios(),
            core_since_es,
            core_since_gl: self.core_since_gl(),
            driver_any_of,
        }
    }

    /// EAGL gained ES 3.0 (and with it `glDrawBuffers`) in iOS 7, sRGB formats in iOS 5 and
    /// vertex array objects in iOS 4.
    fn min_ios(self) -> (u32, u32) {
        match self {
            Self::WebglDrawBuffers => (7, 0),
            Self::ExtSrgb => (5, 0),
            Self::OesVertexArrayObject => (4, 0),
            _ => (0, 0),
        }
    }

    fn core_since_gl(self) -> Option<(u32, u32)> {
        match self {
            Self::ExtBlendMinmax => Some((1, 4)),
            Self::WebglDrawBuffers | Self::OesStandardDerivatives => Some((2, 0)),
            Self::ExtSrgb => Some((2, 1)),
            Self::OesTextureFloat
            | Self::OesTextureHalfFloat
            | Self::OesVertexArrayObject
            | Self::ExtColorBufferHalfFloat
            | Self::WebglColorBufferFloat => Some((3, 0)),
            Self::ExtDisjointTimerQuery => Some((3, 3)),
            Self::ExtTextureFilterAnisotropic => Some((4, 6)),
            Self::WebglCompressedTextureS3tc
            | Self::WebglCompressedTextureS3tcSrgb
            | Self::WebglCompressedTextureAtc
            | Self::WebglCompressedTexturePvrtc => None,
        }
    }

    /// WebGL-facing constants the extension object exposes, pre-resolved through the registry.
    pub fn constants(self) -> &'static [Capability] {
        use Capability as C;
        match self {
            Self::WebglDrawBuffers => &[
                C::COLOR_ATTACHMENT0_WEBGL,
                C::COLOR_ATTACHMENT1_WEBGL,
                C::COLOR_ATTACHMENT2_WEBGL,
                C::COLOR_ATTACHMENT3_WEBGL,
                C::COLOR_ATTACHMENT4_WEBGL,
                C::COLOR_ATTACHMENT5_WEBGL,
                C::COLOR_ATTACHMENT6_WEBGL,
                C::COLOR_ATTACHMENT7_WEBGL,
                C::COLOR_ATTACHMENT8_WEBGL,
                C::COLOR_ATTACHMENT9_WEBGL,
                C::COLOR_ATTACHMENT10_WEBGL,
                C::COLOR_ATTACHMENT11_WEBGL,
                C::COLOR_ATTACHMENT12_WEBGL,
                C::COLOR_ATTACHMENT13_WEBGL,
                C::COLOR_ATTACHMENT14_WEBGL,
                C::COLOR_ATTACHMENT15_WEBGL,
                C::DRAW_BUFFER0_WEBGL,
                C::DRAW_BUFFER1_WEBGL,
                C::DRAW_BUFFER2_WEBGL,
                C::DRAW_BUFFER3_WEBGL,
                C::DRAW_BUFFER4_WEBGL,
                C::DRAW_BUFFER5_WEBGL,
                C::DRAW_BUFFER6_WEBGL,
                C::DRAW_BUFFER7_WEBGL,
                C::DRAW_BUFFER8_WEBGL,
                C::DRAW_BUFFER9_WEBGL,
                C::DRAW_BUFFER10_WEBGL,
                C::DRAW_BUFFER11_WEBGL,
                C::DRAW_BUFFER12_WEBGL,
                C::DRAW_BUFFER13_WEBGL,
                C::DRAW_BUFFER14_WEBGL,
                C::DRAW_BUFFER15_WEBGL,
                C::MAX_COLOR_ATTACHMENTS_WEBGL,
                C::MAX_DRAW_BUFFERS_WEBGL,
            ],
            Self::ExtBlendMinmax => &[C::MIN_EXT, C::MAX_EXT],
            Self::ExtColorBufferHalfFloat => &[
                C::RGBA16F_EXT,
                C::RGB16F_EXT,
                C::FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT,
                C::UNSIGNED_NORMALIZED_EXT,
            ],
            Self::WebglColorBufferFloat => &[
                C::RGBA32F_EXT,
                C::FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT,
                C::UNSIGNED_NORMALIZED_EXT,
            ],
            Self::ExtSrgb => &[
                C::SRGB_EXT,
                C::SRGB_ALPHA_EXT,
                C::SRGB8_ALPHA8_EXT,
                C::FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT,
            ],
            Self::ExtTextureFilterAnisotropic => &[
                C::TEXTURE_MAX_ANISOTROPY_EXT,
                C::MAX_TEXTURE_MAX_ANISOTROPY_EXT,
            ],
            Self::ExtDisjointTimerQuery => &[
                C::QUERY_COUNTER_BITS_EXT,
                C::CURRENT_QUERY_EXT,
                C::QUERY_RESULT_EXT,
                C::QUERY_RESULT_AVAILABLE_EXT,
                C::TIME_ELAPSED_EXT,
                C::TIMESTAMP_EXT,
                C::GPU_DISJOINT_EXT,
            ],
            Self::OesStandardDerivatives => &[C::FRAGMENT_SHADER_DERIVATIVE_HINT_OES],
            Self::OesTextureFloat => &[],
            Self::OesTextureHalfFloat => &[C::HALF_FLOAT_OES],
            Self::OesVertexArrayObject => &[C::VERTEX_ARRAY_BINDING_OES],
            Self::WebglCompressedTextureS3tc => &[
                C::COMPRESSED_RGB_S3TC_DXT1_EXT,
                C::COMPRESSED_RGBA_S3TC_DXT1_EXT,
                C::COMPRESSED_RGBA_S3TC_DXT3_EXT,
                C::COMPRESSED_RGBA_S3TC_DXT5_EXT,
            ],
            Self::WebglCompressedTextureS3tcSrgb => &[
                C::COMPRESSED_SRGB_S3TC_DXT1_EXT,
                C::COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT,
                C::COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT,
                C::COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT,
            ],
            Self::WebglCompressedTextureAtc => &[
                C::COMPRESSED_RGB_ATC_WEBGL,
                C::COMPRESSED_RGBA_ATC_EXPLICIT_ALPHA_WEBGL,
                C::COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL,
            ],
            Self::WebglCompressedTexturePvrtc => &[
                C::COMPRESSED_RGB_PVRTC_4BPPV1_IMG,
                C::COMPRESSED_RGB_PVRTC_2BPPV1_IMG,
                C::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG,
                C::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG,
            ],
        }
    }
}

impl fmt::Display for ExtensionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ext/name.rs"]
mod tests;
