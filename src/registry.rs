use crate::error::EngineError;
use crate::grid::{Tile, TileCoord};

/// Texture families: `types[type_index][texture_index]`.
#[derive(Debug, Clone)]
pub struct TextureRegistry<T> {
    types: Vec<Vec<T>>,
}

impl<T> Default for TextureRegistry<T> {
    fn default() -> Self {
        TextureRegistry { types: Vec::new() }
    }
}

impl<T> TextureRegistry<T> {
    /// Registry with no types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty texture family and return its index.
    pub fn add_type(&mut self) -> usize {
        self.types.push(Vec::new());
        self.types.len() - 1
    }

    /// Append a texture to a family and return its index within it.
    pub fn add_texture(&mut self, type_index: usize, texture: T) -> Result<usize, EngineError> {
        let family = self
            .types
            .get_mut(type_index)
            .ok_or(EngineError::UnknownType(type_index))?;
        family.push(texture);
        Ok(family.len() - 1)
    }

    /// Append textures in order.
    pub fn add_textures(
        &mut self,
        type_index: usize,
        textures: impl IntoIterator<Item = T>,
    ) -> Result<(), EngineError> {
        let family = self
            .types
            .get_mut(type_index)
            .ok_or(EngineError::UnknownType(type_index))?;
        family.extend(textures);
        Ok(())
    }

    /// Number of registered types.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Textures in a family, or `None` for an unknown type.
    pub fn texture_count(&self, type_index: usize) -> Option<usize> {
        self.types.get(type_index).map(Vec::len)
    }

    /// Texture `texture_index` of family `type_index`, if both exist.
    #[inline]
    pub fn get(&self, type_index: usize, texture_index: usize) -> Option<&T> {
        self.types.get(type_index)?.get(texture_index)
    }

    /// Check that every level of `tile` resolves to a texture.
    pub fn check_tile(&self, coord: TileCoord, tile: &Tile) -> Result<(), EngineError> {
        let type_index = match tile.type_index {
            Some(t) => t,
            None if tile.stack.is_empty() => return Ok(()),
            None => return Err(EngineError::StackWithoutType { coord }),
        };
        let family = self
            .types
            .get(type_index)
            .ok_or(EngineError::UnknownTileType { coord, type_index })?;
        if let Some(&texture_index) = tile.stack.iter().find(|&&i| i >= family.len()) {
            return Err(EngineError::UnknownTexture {
                coord,
                type_index,
                texture_index,
            });
        }
        Ok(())
    }
}
