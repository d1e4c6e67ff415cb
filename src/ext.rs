pub(crate) mod draw_buffers;
pub(crate) mod misc;
pub(crate) mod name;
pub(crate) mod texture;

use crate::{
    ext::{
        draw_buffers::WebglDrawBuffers,
        misc::{ExtBlendMinmax, ExtDisjointTimerQuery, OesStandardDerivatives, OesVertexArrayObject},
        name::ExtensionName,
        texture::{
            ExtColorBufferHalfFloat, ExtSrgb, ExtTextureFilterAnisotropic, OesTextureFloat,
            OesTextureHalfFloat, WebglColorBufferFloat, WebglCompressedTextureAtc,
            WebglCompressedTexturePvrtc, WebglCompressedTextureS3tc,
            WebglCompressedTextureS3tcSrgb,
        },
    },
    foundation::core::Token,
    surface::context::SurfaceLink,
};

mod sealed {
    pub trait Sealed {}
}

/// A typed extension object that a [`crate::GpuSurface`] can vend.
///
/// Implemented only by this crate's extension types; values exist only after the surface has
/// confirmed support.
pub trait Extension: sealed::Sealed + Sized {
    /// Registry name of the extension.
    const NAME: ExtensionName;

    #[doc(hidden)]
    fn from_object(object: ExtensionObject) -> Option<Self>;
}

/// Construction from a surface link. Kept crate-private so only the surface can vend.
pub(crate) trait Vend {
    fn vend(link: &SurfaceLink) -> Self;
}

macro_rules! extension_objects {
    ($($name:ident,)*) => {
        /// Extension object returned by `getExtension`.
        #[derive(Clone, Debug)]
        pub enum ExtensionObject {
            $(
                #[doc = concat!("Vended [`", stringify!($name), "`].")]
                $name($name),
            )*
        }

        impl ExtensionObject {
            /// Registry name of the vended extension.
            pub fn name(&self) -> ExtensionName {
                match self {
                    $(Self::$name(_) => ExtensionName::$name,)*
                }
            }
        }

        $(
            impl sealed::Sealed for $name {}

            impl Extension for $name {
                const NAME: ExtensionName = ExtensionName::$name;

                fn from_object(object: ExtensionObject) -> Option<Self> {
                    match object {
                        ExtensionObject::$name(ext) => Some(ext),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )*

        pub(crate) fn vend(name: ExtensionName, link: SurfaceLink) -> ExtensionObject {
            match name {
                $(ExtensionName::$name => ExtensionObject::$name(<$name as Vend>::vend(&link)),)*
            }
        }
    };
}

extension_objects! {
    WebglDrawBuffers,
    ExtBlendMinmax,
    ExtColorBufferHalfFloat,
    WebglColorBufferFloat,
    ExtSrgb,
    ExtTextureFilterAnisotropic,
    ExtDisjointTimerQuery,
    OesStandardDerivatives,
    OesTextureFloat,
    OesTextureHalfFloat,
    OesVertexArrayObject,
    WebglCompressedTextureS3tc,
    WebglCompressedTextureS3tcSrgb,
    WebglCompressedTextureAtc,
    WebglCompressedTexturePvrtc,
}

impl ExtensionObject {
    /// Constant exposed by this object under its WebGL name, e.g. `MAX_DRAW_BUFFERS_WEBGL`.
    pub fn constant(&self, name: &str) -> Option<Token> {
        self.name()
            .constants()
            .iter()
            .find(|cap| cap.name() == name)
            .map(|cap| cap.token())
    }

    /// Every constant token the object exposes.
    pub fn tokens(&self) -> Vec<Token> {
        self.name().constants().iter().map(|cap| cap.token()).collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/ext/mod.rs"]
mod tests;
