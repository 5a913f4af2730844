use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::grid::TileCoord;

/// Error type for the tile engine
#[derive(Debug)]
pub enum EngineError {
    /// A grid was requested with a zero width or height
    EmptyGrid,
    /// Grid dimensions whose tile count does not fit the coordinate range
    GridTooLarge {
        /// Requested columns
        width: u32,
        /// Requested rows
        height: u32,
    },
    /// A rotation value outside the four canonical states
    InvalidRotation(i32),
    /// Frame scale must be finite and strictly positive
    InvalidScale(f32),
    /// A coordinate outside the grid was used to address a tile
    GridOutOfBounds(TileCoord),
    /// A texture was added to a type that was never registered
    UnknownType(usize),
    /// A tile references a type missing from the registry
    UnknownTileType {
        /// Grid coordinate of the offending tile
        coord: TileCoord,
        /// The type index it references
        type_index: usize,
    },
    /// A tile's stack references a texture its type does not have
    UnknownTexture {
        /// Grid coordinate of the offending tile
        coord: TileCoord,
        /// The tile's type index
        type_index: usize,
        /// The missing texture index
        texture_index: usize,
    },
    /// A tile has stack levels but no type to draw them from
    StackWithoutType {
        /// Grid coordinate of the offending tile
        coord: TileCoord,
    },
    /// Configuration values that cannot produce a sane projection
    InvalidConfig(String),
    /// File I/O error
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// JSON parse error in an in-memory document
    Parse(serde_json::Error),
    /// JSON parse error in a file
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
    /// Unsupported file format (non-JSON)
    UnsupportedFormat(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Parse(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyGrid => write!(f, "Grid dimensions must be non-zero"),
            EngineError::GridTooLarge { width, height } => {
                write!(f, "Grid of {}x{} tiles is too large", width, height)
            }
            EngineError::InvalidRotation(v) => {
                write!(f, "Invalid rotation {}: expected 0, 90, 180 or 270 degrees", v)
            }
            EngineError::InvalidScale(s) => write!(f, "Invalid scale {}: must be finite and > 0", s),
            EngineError::GridOutOfBounds(c) => write!(f, "Coordinate ({}, {}) is outside the grid", c.x, c.y),
            EngineError::UnknownType(t) => write!(f, "Tile type {} is not registered", t),
            EngineError::UnknownTileType { coord, type_index } => write!(
                f,
                "Tile at ({}, {}) references unregistered type {}",
                coord.x, coord.y, type_index
            ),
            EngineError::UnknownTexture {
                coord,
                type_index,
                texture_index,
            } => write!(
                f,
                "Tile at ({}, {}) references texture {} which type {} does not have",
                coord.x, coord.y, texture_index, type_index
            ),
            EngineError::StackWithoutType { coord } => write!(
                f,
                "Tile at ({}, {}) has stack levels but no type",
                coord.x, coord.y
            ),
            EngineError::InvalidConfig(msg) => write!(f, "Invalid engine config: {}", msg),
            EngineError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            EngineError::Parse(e) => write!(f, "JSON parse error: {}", e),
            EngineError::Json { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            EngineError::UnsupportedFormat(ext) => write!(f, "Unsupported file format: {}", ext),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io { source, .. } => Some(source),
            EngineError::Parse(source) => Some(source),
            EngineError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
