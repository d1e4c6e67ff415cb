use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = BridgeConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, BridgeConfig::default());
    assert_eq!(cfg.pool.thread_name, "canvas-asset");
    assert_eq!(cfg.fetch.timeout(), Duration::from_secs(30));
    assert_eq!(cfg.surface.platform, Platform::Desktop);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let json = r#"{
        "pool": { "threads": 3 },
        "surface": { "platform": { "os": "android", "api_level": 17 } }
    }"#;
    let cfg = BridgeConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.pool.threads, Some(3));
    assert_eq!(cfg.pool.thread_name, "canvas-asset");
    assert_eq!(cfg.surface.platform, Platform::Android { api_level: 17 });
    assert_eq!(cfg.fetch, FetchOpts::default());
}

#[test]
fn zero_threads_is_config_error() {
    let err = BridgeConfig::from_reader(r#"{"pool":{"threads":0}}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CanvasError::Config(_)));
    assert!(err.to_string().contains("pool.threads"));
}

#[test]
fn malformed_json_is_config_error() {
    let err = BridgeConfig::from_reader("{".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("config error: "));
}

#[test]
fn missing_file_names_the_path() {
    let err = BridgeConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
