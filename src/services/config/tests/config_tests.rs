use super::*;
use crate::services::wallpaper::{ResampleFilter, TargetSize};
use tempfile::TempDir;

#[test]
fn test_defaults_match_device() {
    let config = AdapterConfig::default();
    assert_eq!(config.top.size, TargetSize::new(1920, 1080));
    assert_eq!(config.bottom.size, TargetSize::new(1240, 1080));
    assert_eq!(config.top.file_name, "ayn_thor_top_1920x1080.png");
    assert_eq!(config.bottom.file_name, "ayn_thor_bottom_1240x1080.png");
    assert_eq!(config.filter, ResampleFilter::Lanczos3);
}

#[test]
fn test_no_path_gives_defaults() {
    assert_eq!(load_config(None).unwrap(), AdapterConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = parse_config(r#"{"filter": "catmullrom"}"#).unwrap();
    assert_eq!(config.filter, ResampleFilter::CatmullRom);
    assert_eq!(config.top, AdapterConfig::default().top);
    assert_eq!(config.bottom, AdapterConfig::default().bottom);
}

#[test]
fn test_screen_override() {
    let json = r#"{
        "bottom": { "size": { "width": 640, "height": 480 }, "file_name": "small.png" }
    }"#;
    let config = parse_config(json).unwrap();
    assert_eq!(config.bottom.size, TargetSize::new(640, 480));
    assert_eq!(config.screen(Screen::Bottom).file_name, "small.png");
    assert_eq!(config.top, AdapterConfig::default().top);
}

#[test]
fn test_zero_size_rejected_at_parse() {
    let json = r#"{
        "top": { "size": { "width": 0, "height": 1080 }, "file_name": "top.png" }
    }"#;
    let err = parse_config(json).unwrap_err();
    assert!(err.contains("Invalid target size 0x1080"), "{err}");
}

#[test]
fn test_file_name_with_separator_rejected() {
    let json = r#"{
        "top": { "size": { "width": 10, "height": 10 }, "file_name": "../top.png" }
    }"#;
    assert!(parse_config(json).is_err());
}

#[test]
fn test_clashing_file_names_rejected() {
    let json = r#"{
        "top": { "size": { "width": 10, "height": 10 }, "file_name": "wall.png" },
        "bottom": { "size": { "width": 10, "height": 10 }, "file_name": "WALL.png" }
    }"#;
    let err = parse_config(json).unwrap_err();
    assert!(err.contains("must differ"));
}

#[test]
fn test_load_config_malformed_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("adapter.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, CommandError::Config(_)));
}

#[test]
fn test_load_config_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = load_config(Some(&tmp.path().join("missing.json"))).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to read"));
}

#[test]
fn test_load_config_roundtrips_serialized_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("adapter.json");
    let json = serde_json::to_string_pretty(&AdapterConfig::default()).unwrap();
    std::fs::write(&path, json).unwrap();

    assert_eq!(load_config(Some(&path)).unwrap(), AdapterConfig::default());
}
