use macroquad::prelude::*;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::registry::TextureRegistry;
use crate::render::schedule::{DrawEntry, FrameParams};
use crate::spatial::projection::stack_level_offset;

/// One textured quad, already in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand<T> {
    /// Texture handle to draw.
    pub texture: T,
    /// Screen-space anchor.
    pub position: Vec2,
    /// Anchor inside the texture, in texture pixels.
    pub origin: Vec2,
    /// Uniform zoom applied to the texture size and origin.
    pub scale: f32,
    /// Colour multiplier; `WHITE` leaves the texture unchanged.
    pub tint: Color,
}

/// Expand scheduled entries into quads: every stack bottom to top, then the
/// entry's overlays on the stack top.
pub fn build_commands<T: Clone>(
    config: &EngineConfig,
    registry: &TextureRegistry<T>,
    frame: &FrameParams,
    entries: &[DrawEntry<'_, T>],
) -> Result<Vec<DrawCommand<T>>, EngineError> {
    let to_screen = |world: Vec2| world * frame.scale + frame.screen_offset;
    let mut out = Vec::with_capacity(entries.len());

    for entry in entries {
        if let Some(tile) = entry.tile {
            registry.check_tile(entry.coord, tile)?;
            if let Some(type_index) = tile.type_index {
                for (level, &texture_index) in tile.stack.iter().enumerate() {
                    // check_tile guarantees the lookup succeeds.
                    let texture = registry.get(type_index, texture_index).ok_or(
                        EngineError::UnknownTexture {
                            coord: entry.coord,
                            type_index,
                            texture_index,
                        },
                    )?;
                    out.push(DrawCommand {
                        texture: texture.clone(),
                        position: to_screen(entry.anchor + stack_level_offset(config, level)),
                        origin: config.texture_origin,
                        scale: frame.scale,
                        tint: WHITE,
                    });
                }
            }
        }

        let top = to_screen(entry.anchor + entry.top_offset);
        for overlay in &entry.overlays {
            out.push(DrawCommand {
                texture: overlay.texture.clone(),
                position: top,
                origin: overlay.origin,
                scale: frame.scale,
                tint: overlay.tint,
            });
        }
    }

    Ok(out)
}
