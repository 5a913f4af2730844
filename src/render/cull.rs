use macroquad::prelude::*;

use crate::config::EngineConfig;

/// Integer rectangle in scaled screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl ScreenRect {
    /// Rectangle from its top-left corner and size.
    #[inline]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        ScreenRect { x, y, w, h }
    }

    /// Truncating conversion; fractional pixels are dropped, not rounded.
    #[inline]
    pub fn from_f32(x: f32, y: f32, w: f32, h: f32) -> Self {
        ScreenRect::new(x as i32, y as i32, w as i32, h as i32)
    }

    /// Overlap test with exclusive edges: rectangles that only touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        other.x < self.x + self.w
            && self.x < other.x + other.w
            && other.y < self.y + self.h
            && self.y < other.y + other.h
    }
}

/// The viewport moved into the space tile rectangles are computed in.
pub fn transformed_viewport(viewport: Rect, screen_offset: Vec2, scale: f32) -> ScreenRect {
    ScreenRect::from_f32(
        viewport.x * scale - screen_offset.x,
        viewport.y * scale - screen_offset.y,
        viewport.w,
        viewport.h,
    )
}

/// Scaled bounds covering every level of a stack anchored at `anchor`.
pub fn tile_bounds(config: &EngineConfig, anchor: Vec2, top_offset: Vec2, scale: f32) -> ScreenRect {
    let base = anchor - config.texture_origin;
    let top = base + top_offset;
    let min = base.min(top);
    let extent = config.tile_size + top_offset.abs();
    ScreenRect::from_f32(
        min.x * scale,
        min.y * scale,
        extent.x * scale,
        extent.y * scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = ScreenRect::new(0, 0, 10, 10);
        assert!(!a.intersects(&ScreenRect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&ScreenRect::new(0, -5, 5, 5)));
        assert!(a.intersects(&ScreenRect::new(9, 9, 5, 5)));
        assert!(a.intersects(&ScreenRect::new(-3, -3, 20, 20)));
    }

    #[test]
    fn conversion_truncates_toward_zero() {
        let r = ScreenRect::from_f32(1.9, -1.9, 10.99, 0.5);
        assert_eq!(r, ScreenRect::new(1, -1, 10, 0));
    }

    #[test]
    fn viewport_scales_position_but_not_size() {
        let r = transformed_viewport(Rect::new(10.0, 20.0, 800.0, 600.0), vec2(5.0, -5.0), 2.0);
        assert_eq!(r, ScreenRect::new(15, 45, 800, 600));
    }

    #[test]
    fn stacked_tile_bounds_grow_upward() {
        let config = EngineConfig::default();
        let flat = tile_bounds(&config, vec2(100.0, 100.0), Vec2::ZERO, 1.0);
        assert_eq!(flat, ScreenRect::new(68, 84, 64, 42));

        let tall = tile_bounds(&config, vec2(100.0, 100.0), vec2(0.0, -20.0), 1.0);
        assert_eq!(tall, ScreenRect::new(68, 64, 64, 62));

        let scaled = tile_bounds(&config, vec2(100.0, 100.0), vec2(0.0, -20.0), 0.5);
        assert_eq!(scaled, ScreenRect::new(34, 32, 32, 31));
    }
}
