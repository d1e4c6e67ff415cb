//! Closed, compiled-in table of GPU capability tokens.
//!
//! Vendor-suffixed platform values (`GL_*_EXT`, `GL_*_OES`, `GL_*_AMD`, `GL_*_IMG`) are listed
//! separately from the WebGL-facing aliases that extension objects expose. An alias always
//! resolves through its platform entry, so both names yield the same driver value.

use std::{collections::HashMap, sync::OnceLock};

use crate::foundation::{
    core::Token,
    error::{CanvasError, CanvasResult},
};

macro_rules! capability_table {
    (
        tokens { $($name:ident = $value:literal,)* }
        aliases { $($alias:ident => $target:ident,)* }
    ) => {
        /// Symbolic name of a GPU constant known to the bridge.
        #[allow(non_camel_case_types, missing_docs)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Capability {
            $($name,)*
            $($alias,)*
        }

        impl Capability {
            /// Every entry of the table, platform values first, then aliases.
            pub const ALL: &'static [Capability] = &[
                $(Capability::$name,)*
                $(Capability::$alias,)*
            ];

            /// Driver value for this name.
            pub const fn token(self) -> Token {
                match self {
                    $(Capability::$name => Token($value),)*
                    $(Capability::$alias => Capability::$target.token(),)*
                }
            }

            /// Symbolic name exactly as written in the table.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Capability::$name => stringify!($name),)*
                    $(Capability::$alias => stringify!($alias),)*
                }
            }

            /// Platform entry this name aliases, `None` for platform entries themselves.
            pub const fn alias_of(self) -> Option<Capability> {
                match self {
                    $(Capability::$name => None,)*
                    $(Capability::$alias => Some(Capability::$target),)*
                }
            }
        }
    };
}

capability_table! {
    tokens {
        GL_NONE = 0x0000,
        GL_BACK = 0x0405,
        GL_RGBA16F_EXT = 0x881A,
        GL_RGB16F_EXT = 0x881B,
        GL_RG16F_EXT = 0x822F,
        GL_R16F_EXT = 0x822D,
        GL_R32F_EXT = 0x822E,
        GL_RG32F_EXT = 0x8230,
        GL_RGBA32F_EXT = 0x8814,
        GL_RGB32F_EXT = 0x8815,
        GL_MIN_EXT = 0x8007,
        GL_MAX_EXT = 0x8008,
        GL_FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT = 0x8211,
        GL_UNSIGNED_NORMALIZED_EXT = 0x8C17,
        GL_SRGB_EXT = 0x8C40,
        GL_SRGB_ALPHA_EXT = 0x8C42,
        GL_SRGB8_ALPHA8_EXT = 0x8C43,
        GL_FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT = 0x8210,
        GL_TEXTURE_MAX_ANISOTROPY_EXT = 0x84FE,
        GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT = 0x84FF,
        GL_QUERY_COUNTER_BITS_EXT = 0x8864,
        GL_CURRENT_QUERY_EXT = 0x8865,
        GL_QUERY_RESULT_EXT = 0x8866,
        GL_QUERY_RESULT_AVAILABLE_EXT = 0x8867,
        GL_TIME_ELAPSED_EXT = 0x88BF,
        GL_TIMESTAMP_EXT = 0x8E28,
        GL_GPU_DISJOINT_EXT = 0x8FBB,
        GL_FRAGMENT_SHADER_DERIVATIVE_HINT_OES = 0x8B8B,
        GL_HALF_FLOAT_OES = 0x8D61,
        GL_VERTEX_ARRAY_BINDING_OES = 0x85B5,
        GL_ATC_RGB_AMD = 0x8C92,
        GL_ATC_RGBA_EXPLICIT_ALPHA_AMD = 0x8C93,
        GL_ATC_RGBA_INTERPOLATED_ALPHA_AMD = 0x87EE,
        GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG = 0x8C00,
        GL_COMPRESSED_RGB_PVRTC_2BPPV1_IMG = 0x8C01,
        GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG = 0x8C02,
        GL_COMPRESSED_RGBA_PVRTC_2BPPV1_IMG = 0x8C03,
        GL_COMPRESSED_RGB_S3TC_DXT1_EXT = 0x83F0,
        GL_COMPRESSED_RGBA_S3TC_DXT1_EXT = 0x83F1,
        GL_COMPRESSED_RGBA_S3TC_DXT3_EXT = 0x83F2,
        GL_COMPRESSED_RGBA_S3TC_DXT5_EXT = 0x83F3,
        GL_COMPRESSED_SRGB_S3TC_DXT1_EXT = 0x8C4C,
        GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT = 0x8C4D,
        GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT = 0x8C4E,
        GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT = 0x8C4F,
        GL_MAX_COLOR_ATTACHMENTS_EXT = 0x8CDF,
        GL_MAX_DRAW_BUFFERS_EXT = 0x8824,
        GL_DRAW_BUFFER0_EXT = 0x8825,
        GL_DRAW_BUFFER1_EXT = 0x8826,
        GL_DRAW_BUFFER2_EXT = 0x8827,
        GL_DRAW_BUFFER3_EXT = 0x8828,
        GL_DRAW_BUFFER4_EXT = 0x8829,
        GL_DRAW_BUFFER5_EXT = 0x882A,
        GL_DRAW_BUFFER6_EXT = 0x882B,
        GL_DRAW_BUFFER7_EXT = 0x882C,
        GL_DRAW_BUFFER8_EXT = 0x882D,
        GL_DRAW_BUFFER9_EXT = 0x882E,
        GL_DRAW_BUFFER10_EXT = 0x882F,
        GL_DRAW_BUFFER11_EXT = 0x8830,
        GL_DRAW_BUFFER12_EXT = 0x8831,
        GL_DRAW_BUFFER13_EXT = 0x8832,
        GL_DRAW_BUFFER14_EXT = 0x8833,
        GL_DRAW_BUFFER15_EXT = 0x8834,
        GL_COLOR_ATTACHMENT0_EXT = 0x8CE0,
        GL_COLOR_ATTACHMENT1_EXT = 0x8CE1,
        GL_COLOR_ATTACHMENT2_EXT = 0x8CE2,
        GL_COLOR_ATTACHMENT3_EXT = 0x8CE3,
        GL_COLOR_ATTACHMENT4_EXT = 0x8CE4,
        GL_COLOR_ATTACHMENT5_EXT = 0x8CE5,
        GL_COLOR_ATTACHMENT6_EXT = 0x8CE6,
        GL_COLOR_ATTACHMENT7_EXT = 0x8CE7,
        GL_COLOR_ATTACHMENT8_EXT = 0x8CE8,
        GL_COLOR_ATTACHMENT9_EXT = 0x8CE9,
        GL_COLOR_ATTACHMENT10_EXT = 0x8CEA,
        GL_COLOR_ATTACHMENT11_EXT = 0x8CEB,
        GL_COLOR_ATTACHMENT12_EXT = 0x8CEC,
        GL_COLOR_ATTACHMENT13_EXT = 0x8CED,
        GL_COLOR_ATTACHMENT14_EXT = 0x8CEE,
        GL_COLOR_ATTACHMENT15_EXT = 0x8CEF,
        MAX_CLIENT_WAIT_TIMEOUT_WEBGL = 0x9247,
    }
    aliases {
        COLOR_ATTACHMENT0_WEBGL => GL_COLOR_ATTACHMENT0_EXT,
        COLOR_ATTACHMENT1_WEBGL => GL_COLOR_ATTACHMENT1_EXT,
        COLOR_ATTACHMENT2_WEBGL => GL_COLOR_ATTACHMENT2_EXT,
        COLOR_ATTACHMENT3_WEBGL => GL_COLOR_ATTACHMENT3_EXT,
        COLOR_ATTACHMENT4_WEBGL => GL_COLOR_ATTACHMENT4_EXT,
        COLOR_ATTACHMENT5_WEBGL => GL_COLOR_ATTACHMENT5_EXT,
        COLOR_ATTACHMENT6_WEBGL => GL_COLOR_ATTACHMENT6_EXT,
        COLOR_ATTACHMENT7_WEBGL => GL_COLOR_ATTACHMENT7_EXT,
        COLOR_ATTACHMENT8_WEBGL => GL_COLOR_ATTACHMENT8_EXT,
        COLOR_ATTACHMENT9_WEBGL => GL_COLOR_ATTACHMENT9_EXT,
        COLOR_ATTACHMENT10_WEBGL => GL_COLOR_ATTACHMENT10_EXT,
        COLOR_ATTACHMENT11_WEBGL => GL_COLOR_ATTACHMENT11_EXT,
        COLOR_ATTACHMENT12_WEBGL => GL_COLOR_ATTACHMENT12_EXT,
        COLOR_ATTACHMENT13_WEBGL => GL_COLOR_ATTACHMENT13_EXT,
        COLOR_ATTACHMENT14_WEBGL => GL_COLOR_ATTACHMENT14_EXT,
        COLOR_ATTACHMENT15_WEBGL => GL_COLOR_ATTACHMENT15_EXT,
        DRAW_BUFFER0_WEBGL => GL_DRAW_BUFFER0_EXT,
        DRAW_BUFFER1_WEBGL => GL_DRAW_BUFFER1_EXT,
        DRAW_BUFFER2_WEBGL => GL_DRAW_BUFFER2_EXT,
        DRAW_BUFFER3_WEBGL => GL_DRAW_BUFFER3_EXT,
        DRAW_BUFFER4_WEBGL => GL_DRAW_BUFFER4_EXT,
        DRAW_BUFFER5_WEBGL => GL_DRAW_BUFFER5_EXT,
        DRAW_BUFFER6_WEBGL => GL_DRAW_BUFFER6_EXT,
        DRAW_BUFFER7_WEBGL => GL_DRAW_BUFFER7_EXT,
        DRAW_BUFFER8_WEBGL => GL_DRAW_BUFFER8_EXT,
        DRAW_BUFFER9_WEBGL => GL_DRAW_BUFFER9_EXT,
        DRAW_BUFFER10_WEBGL => GL_DRAW_BUFFER10_EXT,
        DRAW_BUFFER11_WEBGL => GL_DRAW_BUFFER11_EXT,
        DRAW_BUFFER12_WEBGL => GL_DRAW_BUFFER12_EXT,
        DRAW_BUFFER13_WEBGL => GL_DRAW_BUFFER13_EXT,
        DRAW_BUFFER14_WEBGL => GL_DRAW_BUFFER14_EXT,
        DRAW_BUFFER15_WEBGL => GL_DRAW_BUFFER15_EXT,
        MAX_COLOR_ATTACHMENTS_WEBGL => GL_MAX_COLOR_ATTACHMENTS_EXT,
        MAX_DRAW_BUFFERS_WEBGL => GL_MAX_DRAW_BUFFERS_EXT,
        MIN_EXT => GL_MIN_EXT,
        MAX_EXT => GL_MAX_EXT,
        RGBA16F_EXT => GL_RGBA16F_EXT,
        RGB16F_EXT => GL_RGB16F_EXT,
        FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT => GL_FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE_EXT,
        UNSIGNED_NORMALIZED_EXT => GL_UNSIGNED_NORMALIZED_EXT,
        RGBA32F_EXT => GL_RGBA32F_EXT,
        SRGB_EXT => GL_SRGB_EXT,
        SRGB_ALPHA_EXT => GL_SRGB_ALPHA_EXT,
        SRGB8_ALPHA8_EXT => GL_SRGB8_ALPHA8_EXT,
        FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT => GL_FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING_EXT,
        TEXTURE_MAX_ANISOTROPY_EXT => GL_TEXTURE_MAX_ANISOTROPY_EXT,
        MAX_TEXTURE_MAX_ANISOTROPY_EXT => GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT,
        QUERY_COUNTER_BITS_EXT => GL_QUERY_COUNTER_BITS_EXT,
        CURRENT_QUERY_EXT => GL_CURRENT_QUERY_EXT,
        QUERY_RESULT_EXT => GL_QUERY_RESULT_EXT,
        QUERY_RESULT_AVAILABLE_EXT => GL_QUERY_RESULT_AVAILABLE_EXT,
        TIME_ELAPSED_EXT => GL_TIME_ELAPSED_EXT,
        TIMESTAMP_EXT => GL_TIMESTAMP_EXT,
        GPU_DISJOINT_EXT => GL_GPU_DISJOINT_EXT,
        FRAGMENT_SHADER_DERIVATIVE_HINT_OES => GL_FRAGMENT_SHADER_DERIVATIVE_HINT_OES,
        HALF_FLOAT_OES => GL_HALF_FLOAT_OES,
        VERTEX_ARRAY_BINDING_OES => GL_VERTEX_ARRAY_BINDING_OES,
        COMPRESSED_RGB_S3TC_DXT1_EXT => GL_COMPRESSED_RGB_S3TC_DXT1_EXT,
        COMPRESSED_RGBA_S3TC_DXT1_EXT => GL_COMPRESSED_RGBA_S3TC_DXT1_EXT,
        COMPRESSED_RGBA_S3TC_DXT3_EXT => GL_COMPRESSED_RGBA_S3TC_DXT3_EXT,
        COMPRESSED_RGBA_S3TC_DXT5_EXT => GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
        COMPRESSED_SRGB_S3TC_DXT1_EXT => GL_COMPRESSED_SRGB_S3TC_DXT1_EXT,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT => GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT => GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT => GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT,
        COMPRESSED_RGB_PVRTC_4BPPV1_IMG => GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG,
        COMPRESSED_RGB_PVRTC_2BPPV1_IMG => GL_COMPRESSED_RGB_PVRTC_2BPPV1_IMG,
        COMPRESSED_RGBA_PVRTC_4BPPV1_IMG => GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG,
        COMPRESSED_RGBA_PVRTC_2BPPV1_IMG => GL_COMPRESSED_RGBA_PVRTC_2BPPV1_IMG,
        COMPRESSED_RGB_ATC_WEBGL => GL_ATC_RGB_AMD,
        COMPRESSED_RGBA_ATC_EXPLICIT_ALPHA_WEBGL => GL_ATC_RGBA_EXPLICIT_ALPHA_AMD,
        COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL => GL_ATC_RGBA_INTERPOLATED_ALPHA_AMD,
    }
}

impl Capability {
    /// Look up a name in the table.
    pub fn from_name(name: &str) -> Option<Capability> {
        static INDEX: OnceLock<HashMap<&'static str, Capability>> = OnceLock::new();
        INDEX
            .get_or_init(|| Capability::ALL.iter().map(|c| (c.name(), *c)).collect())
            .get(name)
            .copied()
    }

    /// `COLOR_ATTACHMENTn` platform entry for `n < 16`.
    pub fn color_attachment(n: u32) -> Option<Capability> {
        if n >= 16 {
            return None;
        }
        Capability::from_name(&format!("GL_COLOR_ATTACHMENT{n}_EXT"))
    }

    /// `DRAW_BUFFERn` platform entry for `n < 16`.
    pub fn draw_buffer(n: u32) -> Option<Capability> {
        if n >= 16 {
            return None;
        }
        Capability::from_name(&format!("GL_DRAW_BUFFER{n}_EXT"))
    }
}

/// Resolve a symbolic name to its driver token.
///
/// The table is closed, so an unknown name is a caller bug rather than a device condition.
pub fn resolve(name: &str) -> CanvasResult<Token> {
    Capability::from_name(name)
        .map(Capability::token)
        .ok_or_else(|| CanvasError::UnknownCapability(name.to_string()))
}

/// `true` when `token` names one of the sixteen color attachments.
pub fn is_color_attachment(token: Token) -> bool {
    let base = Capability::GL_COLOR_ATTACHMENT0_EXT.token().get();
    (base..base + 16).contains(&token.get())
}

#[cfg(test)]
#[path = "../../tests/unit/caps/registry.rs"]
mod tests;
