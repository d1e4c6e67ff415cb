use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CanvasError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CanvasError::decode("x").to_string().contains("decode error:"));
    assert!(CanvasError::encode("x").to_string().contains("encode error:"));
    assert!(CanvasError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        CanvasError::resource("x")
            .to_string()
            .contains("resource error:")
    );
    assert!(
        CanvasError::pool("x")
            .to_string()
            .contains("worker pool error:")
    );
    assert!(CanvasError::config("x").to_string().contains("config error:"));
    assert_eq!(
        CanvasError::UnknownCapability("GL_NOPE".to_string()).to_string(),
        "unknown capability: GL_NOPE"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CanvasError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn inner() -> CanvasResult<()> {
        use anyhow::Context as _;
        std::fs::read("/definitely/not/here/canvas-bridge")
            .context("read fixture")
            .map_err(CanvasError::from)?;
        Ok(())
    }

    let err = inner().unwrap_err();
    assert!(matches!(err, CanvasError::Other(_)));
    assert!(err.to_string().contains("read fixture"));
}
