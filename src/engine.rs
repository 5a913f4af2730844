use macroquad::prelude::*;

use crate::command::{build_commands, DrawCommand};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::{Grid, MapSize};
use crate::overlay::Overlay;
use crate::registry::TextureRegistry;
use crate::render::schedule::{schedule, FrameParams, FrameSchedule};
use crate::render::sink::DrawSink;

/// Isometric tile engine: projection config, tile grid and texture registry.
///
/// `T` is the texture handle type; [`Texture2D`] when drawing through
/// macroquad, anything `Clone` for headless use.
pub struct TileEngine<T = Texture2D> {
    config: EngineConfig,
    grid: Grid,
    registry: TextureRegistry<T>,
}

impl<T: Clone> TileEngine<T> {
    /// Engine over an existing grid with an empty registry. Fails on an
    /// invalid config.
    pub fn new(config: EngineConfig, grid: Grid) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            grid,
            registry: TextureRegistry::new(),
        })
    }

    /// Engine over an empty `width` x `height` grid.
    pub fn with_size(config: EngineConfig, width: u32, height: u32) -> Result<Self, EngineError> {
        Self::new(config, Grid::new(width, height)?)
    }

    /// Projection settings.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Grid dimensions.
    #[inline]
    pub fn map_size(&self) -> MapSize {
        self.grid.size()
    }

    /// The tile grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing tiles in place.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Swap in a new grid, e.g. after a resize. Returns the old one.
    pub fn replace_grid(&mut self, grid: Grid) -> Grid {
        let size = grid.size();
        log::info!("replacing grid with {}x{}", size.width, size.height);
        std::mem::replace(&mut self.grid, grid)
    }

    /// Texture families used by the grid.
    #[inline]
    pub fn registry(&self) -> &TextureRegistry<T> {
        &self.registry
    }

    /// Mutable registry.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut TextureRegistry<T> {
        &mut self.registry
    }

    /// Register a new tile type and return its index.
    pub fn add_type(&mut self) -> usize {
        self.registry.add_type()
    }

    /// Append a texture to a registered type; see [`TextureRegistry::add_texture`].
    pub fn add_texture(&mut self, type_index: usize, texture: T) -> Result<usize, EngineError> {
        self.registry.add_texture(type_index, texture)
    }

    /// Append several textures to a registered type, in order.
    pub fn add_textures(
        &mut self,
        type_index: usize,
        textures: impl IntoIterator<Item = T>,
    ) -> Result<(), EngineError> {
        self.registry.add_textures(type_index, textures)
    }

    /// Number of registered tile types.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.registry.type_count()
    }

    /// Painter's order for one frame, without touching any texture.
    pub fn schedule(
        &self,
        frame: &FrameParams,
        overlays: Vec<Overlay<T>>,
    ) -> Result<FrameSchedule<'_, T>, EngineError> {
        schedule(&self.config, &self.grid, frame, overlays)
    }

    /// Ordered quads for one frame.
    pub fn commands(
        &self,
        frame: &FrameParams,
        overlays: Vec<Overlay<T>>,
    ) -> Result<Vec<DrawCommand<T>>, EngineError> {
        let scheduled = self.schedule(frame, overlays)?;
        build_commands(&self.config, &self.registry, frame, &scheduled.entries)
    }

    /// Draw one frame into `sink`.
    ///
    /// Tile references are checked before anything is drawn, so a bad tile
    /// fails the whole frame instead of leaving it half painted.
    pub fn draw<S: DrawSink<T>>(
        &self,
        frame: &FrameParams,
        overlays: Vec<Overlay<T>>,
        sink: &mut S,
    ) -> Result<(), EngineError> {
        let commands = self.commands(frame, overlays)?;
        for cmd in &commands {
            sink.draw(cmd);
        }
        Ok(())
    }
}
