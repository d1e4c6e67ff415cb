use super::*;

fn att(n: u32) -> Token {
    Capability::color_attachment(n).unwrap().token()
}

fn draw_buffer_param(n: u32) -> Token {
    Capability::draw_buffer(n).unwrap().token()
}

#[test]
fn baseline_limits_follow_version() {
    let mut es3 = HeadlessGl::new(GlVersion::ES_3_0);
    assert_eq!(
        es3.get_integer(Capability::GL_MAX_DRAW_BUFFERS_EXT.token()),
        4
    );
    let mut es2 = HeadlessGl::new(GlVersion::ES_2_0);
    assert_eq!(
        es2.get_integer(Capability::GL_MAX_DRAW_BUFFERS_EXT.token()),
        1
    );
    let mut es2_ext = HeadlessGl::new(GlVersion::ES_2_0).with_extensions(["GL_EXT_draw_buffers"]);
    assert_eq!(
        es2_ext.get_integer(Capability::GL_MAX_COLOR_ATTACHMENTS_EXT.token()),
        4
    );
}

#[test]
fn draw_buffers_updates_state_in_order() {
    let mut gl = HeadlessGl::new(GlVersion::ES_3_0);
    gl.draw_buffers(&[att(0), Token::NONE, att(2)]);
    assert_eq!(gl.get_error(), GlError::NoError);
    assert_eq!(gl.get_integer(draw_buffer_param(0)) as u32, att(0).get());
    assert_eq!(gl.get_integer(draw_buffer_param(1)) as u32, 0);
    assert_eq!(gl.get_integer(draw_buffer_param(2)) as u32, att(2).get());
    assert_eq!(gl.get_integer(draw_buffer_param(3)) as u32, 0);
}

#[test]
fn empty_draw_buffers_disables_all_targets() {
    let mut gl = HeadlessGl::new(GlVersion::ES_3_0);
    gl.draw_buffers(&[]);
    assert_eq!(gl.get_error(), GlError::NoError);
    for i in 0..4 {
        assert_eq!(gl.get_integer(draw_buffer_param(i)), 0);
    }
}

#[test]
fn too_many_buffers_is_invalid_value_and_keeps_state() {
    let mut gl = HeadlessGl::new(GlVersion::ES_3_0).with_limits(2, 2);
    gl.draw_buffers(&[att(0), att(1), Token::NONE]);
    assert_eq!(gl.get_error(), GlError::InvalidValue);
    assert_eq!(gl.get_error(), GlError::NoError);
    assert_eq!(gl.get_integer(draw_buffer_param(0)) as u32, att(0).get());
}

#[test]
fn misplaced_or_bogus_tokens_are_rejected() {
    let mut gl = HeadlessGl::new(GlVersion::ES_3_0);
    gl.draw_buffers(&[att(1)]);
    assert_eq!(gl.get_error(), GlError::InvalidOperation);

    gl.draw_buffers(&[Token::BACK]);
    assert_eq!(gl.get_error(), GlError::InvalidOperation);

    gl.draw_buffers(&[Token(0x1234)]);
    assert_eq!(gl.get_error(), GlError::InvalidEnum);
}

#[test]
fn first_error_is_sticky_until_queried() {
    let mut gl = HeadlessGl::new(GlVersion::ES_3_0).with_limits(1, 1);
    gl.draw_buffers(&[att(0), att(1)]);
    gl.draw_buffers(&[Token(0x1234)]);
    assert_eq!(gl.get_error(), GlError::InvalidValue);
    assert_eq!(gl.get_error(), GlError::NoError);
}

#[test]
fn anisotropy_query_requires_extension() {
    let pname = Capability::GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT.token();
    let mut plain = HeadlessGl::new(GlVersion::ES_3_0);
    assert_eq!(plain.get_integer(pname), 0);
    assert_eq!(plain.get_error(), GlError::InvalidEnum);

    let mut aniso = HeadlessGl::new(GlVersion::ES_3_0)
        .with_extensions(["GL_EXT_texture_filter_anisotropic"]);
    assert_eq!(aniso.get_integer(pname), 16);
}
