use super::*;
use crate::{
    caps::registry::resolve,
    foundation::{
        config::SurfaceOpts,
        core::{GlVersion, Platform},
        error::CanvasError,
    },
    gl::{backend::GlError, headless::HeadlessGl},
    surface::context::GpuSurface,
};

fn android(api_level: u32) -> GpuSurface {
    GpuSurface::with_backend(
        SurfaceOpts {
            platform: Platform::Android { api_level },
        },
        HeadlessGl::new(GlVersion::ES_3_0),
    )
}

#[test]
fn unavailable_below_jelly_bean_mr2() {
    let surface = android(17);
    assert!(surface.get_extension("WEBGL_draw_buffers").is_none());
    assert!(surface.extension::<WebglDrawBuffers>().is_none());
    assert!(surface.enabled_tokens().is_empty());
}

#[test]
fn constants_come_from_the_registry() {
    let surface = android(18);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    assert_eq!(
        ext.max_color_attachments,
        resolve("MAX_COLOR_ATTACHMENTS_WEBGL").unwrap()
    );
    assert_eq!(ext.max_draw_buffers, resolve("MAX_DRAW_BUFFERS_WEBGL").unwrap());
    assert_eq!(ext.color_attachments[0], Token(0x8CE0));
    assert_eq!(ext.color_attachments[15], Token(0x8CEF));
    assert_eq!(ext.draw_buffers[0], Token(0x8825));
    assert_eq!(ext.draw_buffers[15], Token(0x8834));

    let object = surface.get_extension("WEBGL_draw_buffers").unwrap();
    assert_eq!(
        object.constant("MAX_COLOR_ATTACHMENTS_WEBGL"),
        Some(ext.max_color_attachments)
    );
}

#[test]
fn forwards_buffers_in_order() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    let list = [ext.color_attachments[0], Token::NONE, ext.color_attachments[2]];
    ext.draw_buffers_webgl(&list).unwrap();

    assert_eq!(surface.get_error(), GlError::NoError);
    assert_eq!(surface.draw_buffer_config(), list.to_vec());
    assert_eq!(surface.active_draw_targets(), 2);
    assert_eq!(
        surface.get_parameter(ext.draw_buffers[2]) as u32,
        ext.color_attachments[2].get()
    );
}

#[test]
fn empty_list_disables_every_target() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    ext.draw_buffers_webgl(&[]).unwrap();
    assert!(surface.draw_buffer_config().is_empty());
    assert_eq!(surface.active_draw_targets(), 0);
    assert_eq!(surface.get_error(), GlError::NoError);
}

#[test]
fn driver_rejection_is_reported_through_get_error() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    let too_many: Vec<Token> = ext.color_attachments[..5].to_vec();
    ext.draw_buffers_webgl(&too_many).unwrap();
    assert_eq!(surface.get_error(), GlError::InvalidValue);
    assert_eq!(surface.draw_buffer_config(), vec![ext.color_attachments[0]]);
    assert_eq!(surface.active_draw_targets(), 1);
}

#[test]
fn rejected_order_keeps_previous_configuration() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    ext.draw_buffers_webgl(&[ext.color_attachments[0], ext.color_attachments[1]])
        .unwrap();
    assert_eq!(surface.get_error(), GlError::NoError);

    ext.draw_buffers_webgl(&[ext.color_attachments[1], ext.color_attachments[0]])
        .unwrap();
    assert_eq!(surface.get_error(), GlError::InvalidOperation);
    assert_eq!(
        surface.draw_buffer_config(),
        vec![ext.color_attachments[0], ext.color_attachments[1]]
    );
    assert_eq!(surface.active_draw_targets(), 2);
    assert_eq!(
        surface.get_parameter(ext.draw_buffers[0]) as u32,
        ext.color_attachments[0].get()
    );
}

#[test]
fn queries_limit_through_the_surface() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    assert_eq!(ext.query_max_draw_buffers().unwrap(), surface.max_draw_buffers());
}

#[test]
fn fails_after_surface_destroyed() {
    let surface = android(21);
    let ext = surface.extension::<WebglDrawBuffers>().unwrap();
    surface.destroy();
    let err = ext.draw_buffers_webgl(&[]).unwrap_err();
    assert!(matches!(err, CanvasError::SurfaceDestroyed));
    assert!(ext.query_max_draw_buffers().is_err());
}
