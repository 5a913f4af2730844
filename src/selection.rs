use macroquad::prelude::*;

use crate::grid::{Grid, MapSize, TileCoord};
use crate::overlay::Overlay;
use crate::spatial::rotation::{rotate_direction, Rotation};

/// Selected tile, moved in screen directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Selected tile in grid coordinates.
    pub position: TileCoord,
}

impl Cursor {
    /// Cursor on `position`.
    pub fn new(position: TileCoord) -> Self {
        Cursor { position }
    }

    /// Move by an on-screen step (e.g. arrow keys) under the current view
    /// rotation, staying inside the grid.
    pub fn move_by(&mut self, screen_delta: TileCoord, rotation: Rotation, size: MapSize) {
        let d = rotate_direction(screen_delta, rotation.inverse());
        let next = TileCoord::new(self.position.x + d.x, self.position.y + d.y);
        self.position = size.clamp(next);
    }
}

/// Textures used to mark a selection.
#[derive(Debug, Clone)]
pub struct SelectionStyle<T> {
    /// Marker drawn on the selected tile and its reachable neighbours.
    pub highlight: T,
    /// Anchor inside the highlight texture.
    pub highlight_origin: Vec2,
    /// Tint for the highlight.
    pub highlight_tint: Color,
    /// Cursor sprite drawn on the selected tile.
    pub cursor: T,
    /// Anchor inside the cursor texture; animate it for a bobbing cursor.
    pub cursor_origin: Vec2,
}

/// Vertical bob added to the cursor's origin at `time` seconds: sixteen
/// pixels plus a ten pixel swing at five radians per second.
pub fn cursor_bob(time: f64) -> Vec2 {
    vec2(0.0, (16.0 + 10.0 * (5.0 * time).sin()) as f32)
}

/// Overlays for a selected tile: a highlight and the cursor on it, plus a
/// highlight on each orthogonal neighbour at most one level higher or lower.
pub fn selection_overlays<T: Clone>(
    grid: &Grid,
    selected: TileCoord,
    style: &SelectionStyle<T>,
) -> Vec<Overlay<T>> {
    let Some(tile) = grid.get(selected) else {
        return Vec::new();
    };
    let height = tile.height();
    let highlight = |at: TileCoord| {
        Overlay::new(at, style.highlight.clone(), style.highlight_origin)
            .with_tint(style.highlight_tint)
    };

    let mut out = vec![
        highlight(selected),
        Overlay::new(selected, style.cursor.clone(), style.cursor_origin),
    ];

    for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
        let n = TileCoord::new(selected.x + dx, selected.y + dy);
        if let Some(neighbour) = grid.get(n) {
            if neighbour.height().abs_diff(height) <= 1 {
                out.push(highlight(n));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;

    fn size() -> MapSize {
        MapSize {
            width: 4,
            height: 3,
        }
    }

    #[test]
    fn cursor_clamps_to_grid() {
        let mut c = Cursor::new(TileCoord::new(0, 0));
        c.move_by(TileCoord::new(-1, 0), Rotation::Deg0, size());
        assert_eq!(c.position, TileCoord::new(0, 0));
        for _ in 0..10 {
            c.move_by(TileCoord::new(1, 1), Rotation::Deg0, size());
        }
        assert_eq!(c.position, TileCoord::new(3, 2));
    }

    #[test]
    fn cursor_follows_screen_direction_when_rotated() {
        let s = size();
        let max = s.max_size();
        for r in Rotation::ALL {
            let mut c = Cursor::new(TileCoord::new(1, 1));
            let before = crate::spatial::rotation::rotate(c.position, r, max);
            c.move_by(TileCoord::new(1, 0), r, s);
            let after = crate::spatial::rotation::rotate(c.position, r, max);
            assert_eq!(after, TileCoord::new(before.x + 1, before.y), "{:?}", r);
        }
    }

    #[test]
    fn neighbours_within_one_level_are_highlighted() {
        let mut grid = Grid::from_fn(3, 3, |_| Tile::new(0, vec![0, 0])).unwrap();
        grid.set(TileCoord::new(2, 1), Tile::new(0, vec![0, 0, 0, 0])).unwrap();
        let style = SelectionStyle {
            highlight: "hl",
            highlight_origin: Vec2::ZERO,
            highlight_tint: BLUE,
            cursor: "cur",
            cursor_origin: vec2(8.0, 16.0),
        };

        let overlays = selection_overlays(&grid, TileCoord::new(1, 1), &style);
        let at: Vec<_> = overlays.iter().map(|o| (o.texture, o.position.x, o.position.y)).collect();
        assert_eq!(
            at,
            vec![
                ("hl", 1, 1),
                ("cur", 1, 1),
                ("hl", 1, 2),
                ("hl", 0, 1),
                ("hl", 1, 0),
            ]
        );
        assert_eq!(overlays[0].tint, BLUE);
        assert_eq!(overlays[1].tint, WHITE);
    }

    #[test]
    fn cursor_bob_swings_ten_pixels_around_sixteen() {
        assert_eq!(cursor_bob(0.0), vec2(0.0, 16.0));
        let quarter = std::f64::consts::FRAC_PI_2 / 5.0;
        assert!((cursor_bob(quarter).y - 26.0).abs() < 1e-4);
        assert!((cursor_bob(3.0 * quarter).y - 6.0).abs() < 1e-4);
        assert_eq!(cursor_bob(7.25).x, 0.0);
    }

    #[test]
    fn edge_selection_skips_missing_neighbours() {
        let grid = Grid::from_fn(2, 2, |_| Tile::new(0, vec![0])).unwrap();
        let style = SelectionStyle {
            highlight: 0,
            highlight_origin: Vec2::ZERO,
            highlight_tint: WHITE,
            cursor: 1,
            cursor_origin: Vec2::ZERO,
        };
        assert_eq!(selection_overlays(&grid, TileCoord::new(0, 0), &style).len(), 4);
        assert!(selection_overlays(&grid, TileCoord::new(5, 5), &style).is_empty());
    }
}
