//! canvas-bridge is the native side of a WebGL/Canvas host.
//!
//! It gives a host three things:
//!
//! 1. **Capability registry**: a closed, compiled-in table mapping symbolic GPU constant names
//!    (vendor-suffixed driver values and their WebGL-facing aliases) to exact token values.
//! 2. **GPU surface + extension objects**: a [`GpuSurface`] wraps one native GL context, detects
//!    platform and driver support once, and vends WebGL extension objects such as
//!    [`WebglDrawBuffers`] (`getExtension`). Unsupported extensions yield `None`, never an error.
//! 3. **Asset bridge**: an [`AssetBridge`] decodes images from paths, bytes, shared buffers,
//!    URLs, bitmaps and host resources into arena-owned pixel buffers and encodes them back to
//!    disk, either blocking or on an injectable [`WorkerPool`] with exactly-once callbacks.
//!
//! # Threading
//!
//! GPU state is single-thread-affine: [`GpuSurface`] and the extension objects that call into it
//! are `!Send`, so they stay on the thread that owns the native context. Asset work runs on
//! worker threads; completion callbacks are delivered there, not on the caller's thread.
//!
//! # Native contexts
//!
//! [`HeadlessGl`] models a GLES driver in memory. With the `glow` feature, `GlowBackend` drives a
//! live context created by the host.
#![cfg_attr(not(feature = "glow"), forbid(unsafe_code))]
#![cfg_attr(feature = "glow", deny(unsafe_code))]
#![deny(missing_docs)]

mod assets;
mod caps;
mod ext;
mod foundation;
mod gl;
mod surface;

pub use assets::arena::{AssetArena, AssetHandle, ImageAsset};
pub use assets::bitmap::{
    BitmapPixels, ImageBitmapOptions, PremultiplyAlpha, ResizeQuality, SrcRect,
    create_image_bitmap,
};
pub use assets::bridge::{AssetBridge, OpState, PendingOp};
pub use assets::codec::{OutputFormat, decode, encode, encode_to_path};
pub use assets::pool::WorkerPool;
pub use assets::source::{
    AssetSource, Bitmap, ColorDrawable, Drawable, ResourceResolver, ResourceTable,
};
pub use caps::registry::{Capability, is_color_attachment, resolve};
pub use ext::draw_buffers::WebglDrawBuffers;
pub use ext::misc::{
    ExtBlendMinmax, ExtDisjointTimerQuery, OesStandardDerivatives, OesVertexArrayObject,
};
pub use ext::name::{ExtensionName, Requirement};
pub use ext::texture::{
    ExtColorBufferHalfFloat, ExtSrgb, ExtTextureFilterAnisotropic, OesTextureFloat,
    OesTextureHalfFloat, WebglColorBufferFloat, WebglCompressedTextureAtc,
    WebglCompressedTexturePvrtc, WebglCompressedTextureS3tc, WebglCompressedTextureS3tcSrgb,
};
pub use ext::{Extension, ExtensionObject};
pub use foundation::config::{BridgeConfig, FetchOpts, SurfaceOpts, WorkerPoolOpts};
pub use foundation::core::{GlVersion, Platform, Size, Token};
pub use foundation::error::{CanvasError, CanvasResult};
pub use gl::backend::{GlBackend, GlError};
#[cfg(feature = "glow")]
pub use gl::glow_backend::GlowBackend;
pub use gl::headless::HeadlessGl;
pub use surface::caps::SurfaceCaps;
pub use surface::context::{GpuSurface, SurfaceId, SurfaceLiveness};
