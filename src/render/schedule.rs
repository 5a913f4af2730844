use macroquad::prelude::*;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::{Grid, Tile, TileCoord};
use crate::overlay::{Overlay, OverlayQueue};
use crate::render::cull::{tile_bounds, transformed_viewport};
use crate::spatial::projection::{grid_to_world, stack_top_offset};
use crate::spatial::rotation::{rotate, Rotation};

/// Per-frame view parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Visible screen rectangle.
    pub viewport: Rect,
    /// Screen-space translation applied after scaling.
    pub screen_offset: Vec2,
    /// Zoom factor, finite and > 0.
    pub scale: f32,
    /// View rotation.
    pub rotation: Rotation,
}

impl FrameParams {
    /// Bundle the per-frame view parameters.
    pub fn new(viewport: Rect, screen_offset: Vec2, scale: f32, rotation: Rotation) -> Self {
        FrameParams {
            viewport,
            screen_offset,
            scale,
            rotation,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(EngineError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// One slot of the painter's order.
#[derive(Debug, Clone)]
pub struct DrawEntry<'g, T> {
    /// The tile to draw; `None` when the tile was culled or has no stack but
    /// still carries overlays.
    pub tile: Option<&'g Tile>,
    /// Screen cell (rotated coordinate) this entry is drawn at.
    pub cell: TileCoord,
    /// Grid coordinate of the tile.
    pub coord: TileCoord,
    /// Unscaled world anchor of the cell.
    pub anchor: Vec2,
    /// Displacement from the base level to the top level.
    pub top_offset: Vec2,
    /// Overlays attached to this tile, in submission order.
    pub overlays: Vec<Overlay<T>>,
}

/// Ordered entries for one frame plus bookkeeping.
#[derive(Debug, Clone)]
pub struct FrameSchedule<'g, T> {
    /// Entries in paint order.
    pub entries: Vec<DrawEntry<'g, T>>,
    /// Tiles skipped by the viewport test.
    pub culled: usize,
    /// Overlays that reached the front of the queue with no tile to attach to.
    pub discarded: usize,
}

impl<'g, T> FrameSchedule<'g, T> {
    /// Grid coordinates of the tiles that will be drawn, in order.
    pub fn visible_tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.entries.iter().filter(|e| e.tile.is_some()).map(|e| e.coord)
    }
}

/// Walk the screen cells back to front and collect what to draw.
///
/// Rows go top to bottom and each row right to left; with the isometric axis
/// offsets that order never paints a tile over one that should sit in front
/// of it. Cells are mapped back to the grid through the inverse rotation,
/// culled against the viewport, and overlays are merged in as their key comes
/// up. Footprints without stack levels are skipped. A culled or empty
/// footprint that still has overlays yields an entry with `tile: None` so the
/// overlays keep their slot in the order.
pub fn schedule<'g, T>(
    config: &EngineConfig,
    grid: &'g Grid,
    frame: &FrameParams,
    overlays: Vec<Overlay<T>>,
) -> Result<FrameSchedule<'g, T>, EngineError> {
    frame.validate()?;

    let size = grid.size();
    let max = size.max_size();
    let inverse = frame.rotation.inverse();
    let mut queue = OverlayQueue::build(overlays, frame.rotation, size);
    let screen = transformed_viewport(frame.viewport, frame.screen_offset, frame.scale);

    let mut entries = Vec::new();
    let mut culled = 0;
    let mut discarded = 0;

    for y in 0..=max {
        for x in (0..=max).rev() {
            let cell = TileCoord::new(x, y);
            let coord = rotate(cell, inverse, max);
            let Some(tile) = grid.get(coord) else {
                continue;
            };

            let anchor = grid_to_world(config, cell);
            let top_offset = stack_top_offset(config, tile);
            let bounds = tile_bounds(config, anchor, top_offset, frame.scale);
            let visible = bounds.intersects(&screen);

            let (matched, stray) = queue.drain_through(cell);
            for o in &stray {
                log::debug!(
                    "discarding overlay at cell {:?}: no tile drawn there",
                    o.position
                );
            }
            discarded += stray.len();

            if tile.is_empty() {
                // Nothing to paint; overlays still get their slot below.
            } else if visible {
                entries.push(DrawEntry {
                    tile: Some(tile),
                    cell,
                    coord,
                    anchor,
                    top_offset,
                    overlays: matched,
                });
                continue;
            } else {
                culled += 1;
            }

            if !matched.is_empty() {
                entries.push(DrawEntry {
                    tile: None,
                    cell,
                    coord,
                    anchor,
                    top_offset,
                    overlays: matched,
                });
            }
        }
    }

    // Anything left never met a cell; only possible if keys were not monotone.
    if !queue.is_empty() {
        log::debug!("{} overlays left undrawn at end of frame", queue.len());
        discarded += queue.len();
    }

    log::trace!(
        "scheduled {} entries ({} culled, {} overlays discarded)",
        entries.len(),
        culled,
        discarded
    );

    Ok(FrameSchedule {
        entries,
        culled,
        discarded,
    })
}
