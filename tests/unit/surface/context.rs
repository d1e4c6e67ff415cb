use super::*;
use crate::{
    caps::registry::Capability,
    foundation::core::{GlVersion, Platform},
    gl::headless::HeadlessGl,
};

fn surface(platform: Platform, gl: HeadlessGl) -> GpuSurface {
    GpuSurface::with_backend(SurfaceOpts { platform }, gl)
}

#[test]
fn draw_buffers_gated_by_api_level() {
    let old = surface(
        Platform::Android { api_level: 17 },
        HeadlessGl::new(GlVersion::ES_3_0),
    );
    for _ in 0..3 {
        assert!(old.get_extension("WEBGL_draw_buffers").is_none());
    }
    assert!(!old.supported_extensions().contains(&"WEBGL_draw_buffers"));

    let new = surface(
        Platform::Android { api_level: 18 },
        HeadlessGl::new(GlVersion::ES_3_0),
    );
    let object = new.get_extension("webgl_draw_buffers").unwrap();
    assert_eq!(
        object.constant("MAX_COLOR_ATTACHMENTS_WEBGL"),
        Some(Capability::GL_MAX_COLOR_ATTACHMENTS_EXT.token())
    );
    assert!(new.supported_extensions().contains(&"WEBGL_draw_buffers"));
}

#[test]
fn default_draw_buffer_is_attachment_zero() {
    let s = surface(Platform::Desktop, HeadlessGl::new(GlVersion::ES_3_0));
    assert_eq!(
        s.draw_buffer_config(),
        vec![Capability::GL_COLOR_ATTACHMENT0_EXT.token()]
    );
    assert_eq!(s.active_draw_targets(), 1);
}

#[test]
fn configures_exactly_n_targets_in_order() {
    let s = surface(Platform::Desktop, HeadlessGl::new(GlVersion::ES_3_0));
    let list: Vec<Token> = (0..4)
        .map(|i| Capability::color_attachment(i).unwrap().token())
        .collect();
    s.draw_buffers(&list);
    assert_eq!(s.get_error(), GlError::NoError);
    assert_eq!(s.draw_buffer_config(), list);
    assert_eq!(s.active_draw_targets(), 4);

    s.draw_buffers(&[]);
    assert_eq!(s.active_draw_targets(), 0);
}

#[test]
fn limits_are_cached_from_the_driver() {
    let s = surface(
        Platform::Desktop,
        HeadlessGl::new(GlVersion::ES_3_0).with_limits(8, 8),
    );
    assert_eq!(s.max_draw_buffers(), 8);
    assert_eq!(s.max_color_attachments(), 8);
    assert_eq!(s.caps().platform(), Platform::Desktop);
}

#[test]
fn liveness_flips_on_destroy() {
    let s = surface(Platform::Desktop, HeadlessGl::new(GlVersion::ES_2_0));
    let live = s.liveness();
    assert_eq!(live.id(), s.id());
    assert!(live.is_alive());
    s.destroy();
    assert!(!live.is_alive());
}

#[test]
fn surface_ids_are_distinct() {
    let a = surface(Platform::Desktop, HeadlessGl::new(GlVersion::ES_2_0));
    let b = surface(Platform::Desktop, HeadlessGl::new(GlVersion::ES_2_0));
    assert_ne!(a.id(), b.id());
}
