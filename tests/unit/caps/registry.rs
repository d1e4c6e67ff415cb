use std::collections::HashSet;

use super::*;

#[test]
fn resolve_is_stable_for_every_name() {
    for cap in Capability::ALL {
        let a = resolve(cap.name()).unwrap();
        let b = resolve(cap.name()).unwrap();
        assert_eq!(a, b, "{}", cap.name());
        assert_eq!(a, cap.token());
    }
}

#[test]
fn names_are_unique() {
    let mut seen = HashSet::new();
    for cap in Capability::ALL {
        assert!(seen.insert(cap.name()), "duplicate name {}", cap.name());
    }
}

#[test]
fn aliases_resolve_to_platform_values() {
    assert_eq!(
        resolve("MAX_COLOR_ATTACHMENTS_WEBGL").unwrap(),
        resolve("GL_MAX_COLOR_ATTACHMENTS_EXT").unwrap()
    );
    assert_eq!(resolve("MAX_COLOR_ATTACHMENTS_WEBGL").unwrap(), Token(0x8CDF));
    assert_eq!(resolve("MAX_DRAW_BUFFERS_WEBGL").unwrap(), Token(0x8824));
    assert_eq!(resolve("COLOR_ATTACHMENT15_WEBGL").unwrap(), Token(0x8CEF));
    assert_eq!(resolve("DRAW_BUFFER15_WEBGL").unwrap(), Token(0x8834));
    assert_eq!(resolve("COMPRESSED_RGB_ATC_WEBGL").unwrap(), Token(0x8C92));
    assert_eq!(
        resolve("COMPRESSED_RGBA_ATC_INTERPOLATED_ALPHA_WEBGL").unwrap(),
        Token(0x87EE)
    );

    for cap in Capability::ALL {
        if let Some(target) = cap.alias_of() {
            assert_eq!(cap.token(), target.token(), "{}", cap.name());
            assert!(target.alias_of().is_none(), "alias chains are not allowed");
        }
    }
}

#[test]
fn vendor_and_webgl_names_are_distinct_entries() {
    let vendor = Capability::from_name("GL_COLOR_ATTACHMENT0_EXT").unwrap();
    let webgl = Capability::from_name("COLOR_ATTACHMENT0_WEBGL").unwrap();
    assert_ne!(vendor, webgl);
    assert_eq!(vendor.token(), webgl.token());
    assert_eq!(webgl.alias_of(), Some(vendor));
}

#[test]
fn fixed_webgl_constants_keep_their_values() {
    assert_eq!(resolve("MAX_CLIENT_WAIT_TIMEOUT_WEBGL").unwrap(), Token(0x9247));
    assert_eq!(resolve("GL_HALF_FLOAT_OES").unwrap(), Token(0x8D61));
    assert_eq!(resolve("GL_TEXTURE_MAX_ANISOTROPY_EXT").unwrap(), Token(0x84FE));
}

#[test]
fn unknown_name_is_an_error() {
    let err = resolve("GL_NOT_A_THING").unwrap_err();
    assert!(matches!(err, CanvasError::UnknownCapability(ref n) if n == "GL_NOT_A_THING"));
    assert!(Capability::from_name("").is_none());
}

#[test]
fn attachment_helpers() {
    assert_eq!(
        Capability::color_attachment(3).unwrap().token(),
        Token(0x8CE3)
    );
    assert_eq!(Capability::draw_buffer(0).unwrap().token(), Token(0x8825));
    assert!(Capability::color_attachment(16).is_none());
    assert!(is_color_attachment(Token(0x8CE0)));
    assert!(is_color_attachment(Token(0x8CEF)));
    assert!(!is_color_attachment(Token(0x8CF0)));
    assert!(!is_color_attachment(Token::BACK));
}
