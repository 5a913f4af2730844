use crate::error::EngineError;

/// Integer grid (or screen cell) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl TileCoord {
    /// Shorthand constructor.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        TileCoord { x, y }
    }
}

/// Grid dimensions in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl MapSize {
    /// True when `c` addresses a tile of the grid.
    #[inline]
    pub fn contains(self, c: TileCoord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    /// Largest coordinate of the padded square that rotations work in.
    #[inline]
    pub fn max_size(self) -> i32 {
        self.width.max(self.height) - 1
    }

    /// Clamp a coordinate into the grid.
    pub fn clamp(self, c: TileCoord) -> TileCoord {
        TileCoord {
            x: c.x.clamp(0, self.width - 1),
            y: c.y.clamp(0, self.height - 1),
        }
    }
}

/// One grid footprint: a texture family plus the levels stacked on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tile {
    /// Texture family in the registry; `None` means no tile.
    pub type_index: Option<usize>,
    /// Texture indices drawn bottom to top.
    pub stack: Vec<usize>,
}

impl Tile {
    /// A footprint that renders nothing.
    pub fn empty() -> Self {
        Tile::default()
    }

    /// A tile of the given type with its stack of texture indices.
    pub fn new(type_index: usize, stack: Vec<usize>) -> Self {
        Tile {
            type_index: Some(type_index),
            stack,
        }
    }

    /// Number of stacked levels.
    #[inline]
    pub fn height(&self) -> usize {
        self.stack.len()
    }

    /// Renders nothing: no stack levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Fixed-size row-major array of tiles.
#[derive(Debug, Clone)]
pub struct Grid {
    size: MapSize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Grid filled with empty tiles. Zero dimensions are rejected, and so is
    /// any size whose tile count does not fit an `i32` index.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyGrid);
        }
        let too_large = EngineError::GridTooLarge { width, height };
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(too_large),
        };
        let count = match w.checked_mul(h).and_then(|n| usize::try_from(n).ok()) {
            Some(n) => n,
            None => return Err(too_large),
        };
        Ok(Grid {
            size: MapSize { width: w, height: h },
            tiles: vec![Tile::empty(); count],
        })
    }

    /// Build a grid by asking `f` for every coordinate.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(TileCoord) -> Tile,
    ) -> Result<Self, EngineError> {
        let mut grid = Grid::new(width, height)?;
        for y in 0..grid.size.height {
            for x in 0..grid.size.width {
                let c = TileCoord::new(x, y);
                let idx = grid.index_of(c);
                grid.tiles[idx] = f(c);
            }
        }
        Ok(grid)
    }

    /// Dimensions, fixed at construction.
    #[inline]
    pub fn size(&self) -> MapSize {
        self.size
    }

    #[inline]
    fn index_of(&self, c: TileCoord) -> usize {
        (c.y * self.size.width + c.x) as usize
    }

    /// Tile at `c`, or `None` outside the grid.
    pub fn get(&self, c: TileCoord) -> Option<&Tile> {
        if !self.size.contains(c) {
            return None;
        }
        self.tiles.get(self.index_of(c))
    }

    /// Mutable tile at `c`, or `None` outside the grid.
    pub fn tile_mut(&mut self, c: TileCoord) -> Option<&mut Tile> {
        if !self.size.contains(c) {
            return None;
        }
        let idx = self.index_of(c);
        self.tiles.get_mut(idx)
    }

    /// Replace the tile at `c`.
    pub fn set(&mut self, c: TileCoord, tile: Tile) -> Result<(), EngineError> {
        let slot = self.tile_mut(c).ok_or(EngineError::GridOutOfBounds(c))?;
        *slot = tile;
        Ok(())
    }

    /// Every tile with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &Tile)> + '_ {
        let w = self.size.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (TileCoord::new(i as i32 % w, i as i32 / w), t))
    }
}
