use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::grid::{MapSize, TileCoord};
use crate::spatial::rotation::{rotate, Rotation};

/// A per-frame decoration drawn on top of one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<T> {
    /// Grid coordinate the overlay belongs to.
    pub position: TileCoord,
    /// Texture handle to draw.
    pub texture: T,
    /// Anchor inside the overlay texture.
    pub origin: Vec2,
    /// Tint applied when drawing.
    pub tint: Color,
}

impl<T> Overlay<T> {
    /// Overlay drawn untinted.
    pub fn new(position: TileCoord, texture: T, origin: Vec2) -> Self {
        Overlay {
            position,
            texture,
            origin,
            tint: WHITE,
        }
    }

    /// Replace the default `WHITE` tint.
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}

/// Painter's-order key of a screen cell inside the padded square.
///
/// Strictly increasing along the scheduler's walk: rows top to bottom,
/// columns right to left.
#[inline]
pub fn draw_order_key(cell: TileCoord, size: MapSize) -> i64 {
    let side = size.max_size() as i64 + 1;
    (side - 1 - cell.x as i64) + side * cell.y as i64
}

/// Overlays rotated into screen cells and sorted by draw order.
pub struct OverlayQueue<T> {
    queue: VecDeque<Overlay<T>>,
    size: MapSize,
}

impl<T> OverlayQueue<T> {
    /// Drop out-of-grid overlays, rotate the rest, and stable-sort them.
    pub fn build(overlays: Vec<Overlay<T>>, rotation: Rotation, size: MapSize) -> Self {
        let max = size.max_size();
        let mut kept: Vec<Overlay<T>> = overlays
            .into_iter()
            .filter(|o| {
                let inside = size.contains(o.position);
                if !inside {
                    log::trace!("dropping overlay outside grid at {:?}", o.position);
                }
                inside
            })
            .map(|mut o| {
                o.position = rotate(o.position, rotation, max);
                o
            })
            .collect();

        // Vec::sort_by_key is stable.
        kept.sort_by_key(|o| draw_order_key(o.position, size));

        OverlayQueue {
            queue: kept.into(),
            size,
        }
    }

    /// Overlays still waiting to be drawn.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True once every overlay has been drained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Next overlay in draw order, with its position in screen cells.
    pub fn peek(&self) -> Option<&Overlay<T>> {
        self.queue.front()
    }

    /// Pop every overlay whose key is at or before `cell`'s key.
    /// Returns the ones sitting exactly on `cell` and the ones that do not.
    pub fn drain_through(&mut self, cell: TileCoord) -> (Vec<Overlay<T>>, Vec<Overlay<T>>) {
        let key = draw_order_key(cell, self.size);
        let mut matched = Vec::new();
        let mut stray = Vec::new();
        while let Some(front) = self.queue.front() {
            if draw_order_key(front.position, self.size) > key {
                break;
            }
            if let Some(o) = self.queue.pop_front() {
                if o.position == cell {
                    matched.push(o);
                } else {
                    stray.push(o);
                }
            }
        }
        (matched, stray)
    }
}
