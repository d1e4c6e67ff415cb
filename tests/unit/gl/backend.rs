use super::*;

#[test]
fn gl_error_raw_round_trips_known_codes() {
    for code in [
        GlError::NO_ERROR,
        GlError::INVALID_ENUM,
        GlError::INVALID_VALUE,
        GlError::INVALID_OPERATION,
        0x0505,
    ] {
        assert_eq!(GlError::from_raw(code).raw(), code);
    }
    assert_eq!(GlError::from_raw(0x0505), GlError::Other(0x0505));
    assert_eq!(GlError::from_raw(0), GlError::NoError);
}
