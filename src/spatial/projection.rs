use macroquad::prelude::*;

use crate::config::EngineConfig;
use crate::grid::{Tile, TileCoord};

/// World position of a grid (or screen cell) coordinate.
#[inline]
pub fn grid_to_world(config: &EngineConfig, c: TileCoord) -> Vec2 {
    c.x as f32 * config.offset_x + c.y as f32 * config.offset_y
}

/// Displacement from a tile's base level to its top level.
#[inline]
pub fn stack_top_offset(config: &EngineConfig, tile: &Tile) -> Vec2 {
    let levels = tile.stack.len().saturating_sub(1);
    config.stack_offset * levels as f32
}

/// Displacement of stack level `level` from the base.
#[inline]
pub fn stack_level_offset(config: &EngineConfig, level: usize) -> Vec2 {
    config.stack_offset * level as f32
}
