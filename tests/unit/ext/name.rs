use super::*;
use crate::caps::registry::resolve;

#[test]
fn names_round_trip_case_insensitively() {
    for ext in ExtensionName::ALL {
        assert_eq!(ExtensionName::parse(ext.as_str()), Some(*ext));
        assert_eq!(
            ExtensionName::parse(&ext.as_str().to_ascii_lowercase()),
            Some(*ext)
        );
    }
    assert_eq!(ExtensionName::parse("WEBGL_lose_context"), None);
    assert_eq!(ExtensionName::parse(""), None);
}

#[test]
fn draw_buffers_requires_jelly_bean_mr2() {
    let req = ExtensionName::WebglDrawBuffers.requirement();
    assert!(!req.platform_ok(Platform::Android { api_level: 17 }));
    assert!(req.platform_ok(Platform::Android { api_level: 18 }));
    assert!(req.platform_ok(Platform::Desktop));
}

#[test]
fn draw_buffers_requires_ios_7() {
    let req = ExtensionName::WebglDrawBuffers.requirement();
    assert!(!req.platform_ok(Platform::Ios { major: 6, minor: 1 }));
    assert!(req.platform_ok(Platform::Ios { major: 7, minor: 0 }));
    assert!(ExtensionName::ExtBlendMinmax
        .requirement()
        .platform_ok(Platform::Ios { major: 3, minor: 0 }));
}

#[test]
fn desktop_contexts_use_desktop_core_versions() {
    let gl = |major, minor| GlVersion {
        es: false,
        major,
        minor,
    };
    let draw_buffers = ExtensionName::WebglDrawBuffers.requirement();
    assert!(draw_buffers.driver_ok(gl(3, 3), &[]));
    assert!(!draw_buffers.driver_ok(gl(1, 5), &[]));
    assert!(draw_buffers.driver_ok(gl(1, 5), &["GL_ARB_draw_buffers".to_string()]));

    let aniso = ExtensionName::ExtTextureFilterAnisotropic.requirement();
    assert!(!aniso.driver_ok(gl(4, 1), &[]));
    assert!(aniso.driver_ok(gl(4, 6), &[]));

    let s3tc = ExtensionName::WebglCompressedTextureS3tc.requirement();
    assert!(!s3tc.driver_ok(gl(4, 6), &[]));
}

#[test]
fn driver_gate_accepts_core_version_or_any_listed_string() {
    let req = ExtensionName::WebglDrawBuffers.requirement();
    assert!(req.driver_ok(GlVersion::ES_3_0, &[]));
    assert!(!req.driver_ok(GlVersion::ES_2_0, &[]));
    assert!(req.driver_ok(GlVersion::ES_2_0, &["GL_NV_draw_buffers".to_string()]));
    assert!(!req.driver_ok(GlVersion::ES_2_0, &["GL_EXT_draw_buffers2".to_string()]));

    let aniso = ExtensionName::ExtTextureFilterAnisotropic.requirement();
    assert!(!aniso.driver_ok(GlVersion::ES_3_0, &[]));
}

#[test]
fn constants_resolve_to_registry_values() {
    for ext in ExtensionName::ALL {
        for cap in ext.constants() {
            assert_eq!(resolve(cap.name()).unwrap(), cap.token(), "{ext} {}", cap.name());
        }
    }
    assert_eq!(ExtensionName::WebglDrawBuffers.constants().len(), 34);
}

#[test]
fn all_is_sorted_by_name() {
    let names: Vec<&str> = ExtensionName::ALL.iter().map(|e| e.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|s| s.to_ascii_lowercase());
    assert_eq!(names, sorted);
}
