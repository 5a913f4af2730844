// src/loader/json_loader.rs
use crate::config::EngineConfig;
use crate::error::EngineError;
use macroquad::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct JsonConfig {
    tile_size: [f32; 2],
    texture_origin: [f32; 2],
    offset_x: [f32; 2],
    offset_y: [f32; 2],
    #[serde(default = "default_stack_offset")]
    stack_offset: [f32; 2],
}

fn default_stack_offset() -> [f32; 2] {
    [0.0, 0.0]
}

fn v(a: [f32; 2]) -> Vec2 {
    vec2(a[0], a[1])
}

fn config_from_json(j: JsonConfig) -> Result<EngineConfig, EngineError> {
    let config = EngineConfig {
        tile_size: v(j.tile_size),
        texture_origin: v(j.texture_origin),
        offset_x: v(j.offset_x),
        offset_y: v(j.offset_y),
        stack_offset: v(j.stack_offset),
    };
    config.validate()?;
    Ok(config)
}

/// Parse an engine config from a JSON string.
pub fn decode_config_str(json: &str) -> Result<EngineConfig, EngineError> {
    let j: JsonConfig = serde_json::from_str(json)?;
    config_from_json(j)
}

/// Load an engine config from a `.json` file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, EngineError> {
    let p = path.as_ref();
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(EngineError::UnsupportedFormat(p.display().to_string()));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| EngineError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let j: JsonConfig = serde_json::from_str(&txt).map_err(|source| EngineError::Json {
        path: p.to_path_buf(),
        source,
    })?;

    let config = config_from_json(j)?;
    log::info!("loaded engine config from {}", p.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("mq_iso_config_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    const CONFIG_JSON: &str = r#"{
      "tile_size": [64, 42],
      "texture_origin": [32, 16],
      "offset_x": [32, -16],
      "offset_y": [32, 16],
      "stack_offset": [0, -10],
      "comment": "unknown fields are ignored"
    }"#;

    #[test]
    fn parses_config_from_file() {
        let dir = temp_dir();
        let path = dir.join("engine.json");
        fs::write(&path, CONFIG_JSON).expect("failed to write config");

        let config = load_config(&path).expect("load");
        assert_eq!(config.tile_size, vec2(64.0, 42.0));
        assert_eq!(config.offset_x, vec2(32.0, -16.0));
        assert_eq!(config.stack_offset, vec2(0.0, -10.0));
    }

    #[test]
    fn stack_offset_defaults_to_zero() {
        let json = r#"{
          "tile_size": [16, 16],
          "texture_origin": [8, 8],
          "offset_x": [16, 0],
          "offset_y": [0, 16]
        }"#;
        let config = decode_config_str(json).expect("decode");
        assert_eq!(config.stack_offset, Vec2::ZERO);
    }

    #[test]
    fn returns_typed_error_for_malformed_json() {
        let dir = temp_dir();
        let path = dir.join("engine.json");
        fs::write(&path, "{ not json").expect("failed to write config");

        let err = load_config(&path).err().expect("expected decode error");
        assert!(matches!(err, EngineError::Json { .. }));
    }

    #[test]
    fn malformed_string_input_reports_no_path() {
        let err = EngineConfig::from_json_str("{ 1: 2 }").unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("JSON parse error: "), "{}", msg);
        assert!(!msg.contains(" in :"), "{}", msg);
    }

    #[test]
    fn returns_typed_error_for_missing_file() {
        let dir = temp_dir();
        let err = load_config(dir.join("missing.json"))
            .err()
            .expect("expected io error");
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn rejects_non_json_extension() {
        let err = load_config("engine.toml").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat(p) if p == "engine.toml"));
    }

    #[test]
    fn rejects_non_positive_tile_size() {
        let json = r#"{
          "tile_size": [0, 16],
          "texture_origin": [8, 8],
          "offset_x": [16, 0],
          "offset_y": [0, 16]
        }"#;
        let err = decode_config_str(json).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
