use super::*;
use crate::{
    foundation::{
        config::SurfaceOpts,
        core::{GlVersion, Platform},
    },
    gl::headless::HeadlessGl,
    surface::context::GpuSurface,
};

#[test]
fn anisotropy_needs_driver_string() {
    let plain = GpuSurface::with_backend(SurfaceOpts::default(), HeadlessGl::new(GlVersion::ES_3_0));
    assert!(plain.extension::<ExtTextureFilterAnisotropic>().is_none());

    let gl = HeadlessGl::new(GlVersion::ES_3_0)
        .with_extensions(["GL_EXT_texture_filter_anisotropic"]);
    let surface = GpuSurface::with_backend(SurfaceOpts::default(), gl);
    let ext = surface.extension::<ExtTextureFilterAnisotropic>().unwrap();
    assert_eq!(ext.texture_max_anisotropy_ext, Token(0x84FE));
    assert_eq!(ext.max_texture_max_anisotropy_ext, Token(0x84FF));
    assert_eq!(ext.max_anisotropy().unwrap(), 16);
}

#[test]
fn atc_aliases_resolve_to_amd_values() {
    let gl = HeadlessGl::new(GlVersion::ES_2_0).with_extensions(["GL_AMD_compressed_ATC_texture"]);
    let surface = GpuSurface::with_backend(
        SurfaceOpts {
            platform: Platform::Android { api_level: 16 },
        },
        gl,
    );
    let atc = surface.extension::<WebglCompressedTextureAtc>().unwrap();
    assert_eq!(atc.compressed_rgb_atc_webgl, Token(0x8C92));
    assert_eq!(atc.compressed_rgba_atc_explicit_alpha_webgl, Token(0x8C93));
    assert_eq!(atc.compressed_rgba_atc_interpolated_alpha_webgl, Token(0x87EE));
}

#[test]
fn core_es3_formats_need_no_driver_string() {
    let surface = GpuSurface::with_backend(SurfaceOpts::default(), HeadlessGl::new(GlVersion::ES_3_0));
    let half = surface.extension::<OesTextureHalfFloat>().unwrap();
    assert_eq!(half.half_float_oes, Token(0x8D61));
    let srgb = surface.extension::<ExtSrgb>().unwrap();
    assert_eq!(srgb.srgb8_alpha8_ext, Token(0x8C43));
    assert!(surface.extension::<OesTextureFloat>().is_some());
    assert!(surface.extension::<WebglCompressedTexturePvrtc>().is_none());
}
