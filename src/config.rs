use macroquad::prelude::*;

use crate::error::EngineError;

/// Projection parameters fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Pixel size of one tile texture, used for culling bounds.
    pub tile_size: Vec2,
    /// Anchor inside each tile texture.
    pub texture_origin: Vec2,
    /// World delta for one step along the grid x axis.
    pub offset_x: Vec2,
    /// World delta for one step along the grid y axis.
    pub offset_y: Vec2,
    /// World delta between two stacked levels; points up for negative y.
    pub stack_offset: Vec2,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tile_size: vec2(64.0, 42.0),
            texture_origin: vec2(32.0, 16.0),
            offset_x: vec2(32.0, -16.0),
            offset_y: vec2(32.0, 16.0),
            stack_offset: vec2(0.0, -10.0),
        }
    }
}

impl EngineConfig {
    /// Reject values that would make culling or placement meaningless.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("tile_size", self.tile_size),
            ("texture_origin", self.texture_origin),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("stack_offset", self.stack_offset),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(EngineError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if self.tile_size.x <= 0.0 || self.tile_size.y <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "tile_size must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        crate::loader::json_loader::decode_config_str(json)
    }
}
