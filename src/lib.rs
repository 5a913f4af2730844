#![warn(missing_docs)]

//! Rotatable isometric tile engine for Macroquad: stacked tiles, viewport
//! culling and overlays merged into painter's order.

mod command;
mod config;
mod engine;
mod error;
mod grid;
mod loader {
    pub mod json_loader;
}
mod overlay;
mod registry;
mod render {
    pub mod cull;
    pub mod schedule;
    pub mod sink;
}
mod selection;
mod spatial {
    pub mod projection;
    pub mod rotation;
}

pub use command::{build_commands, DrawCommand};
pub use config::EngineConfig;
pub use engine::TileEngine;
pub use error::EngineError;
pub use grid::{Grid, MapSize, Tile, TileCoord};
pub use loader::json_loader::load_config;
pub use overlay::{draw_order_key, Overlay, OverlayQueue};
pub use registry::TextureRegistry;
pub use render::cull::{tile_bounds, transformed_viewport, ScreenRect};
pub use render::schedule::{schedule, DrawEntry, FrameParams, FrameSchedule};
pub use render::sink::{CommandBuffer, DrawSink, MacroquadSink};
pub use selection::{cursor_bob, selection_overlays, Cursor, SelectionStyle};
pub use spatial::projection::{grid_to_world, stack_level_offset, stack_top_offset};
pub use spatial::rotation::{rotate, rotate_direction, Rotation};
