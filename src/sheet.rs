//! Tile-sheet geometry and tile addressing.
//!
//! A tile sheet is a single texture holding same-sized tiles in a row-major
//! grid. [`SheetLayout`] captures the grid geometry and maps a linear tile id
//! to the pixel rectangle of that tile. The mapping is pure; invalid geometry
//! is rejected when the layout is constructed, and ids that would read past
//! the texture are rejected at setup via [`SheetLayout::validate_extent`],
//! never discovered per frame.

use crate::error::SheetError;

/// Pixel rectangle of one tile inside the sheet texture.
///
/// Used as the source (clip) rectangle of a draw call. `x`/`y` are computed
/// from the tile id; `w`/`h` are the layout's tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Validated grid geometry of a tile sheet.
///
/// Construction rejects zero tile dimensions and a zero column count, so
/// [`SheetLayout::tile_rect`] never divides by zero and has no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    tile_width: u32,
    tile_height: u32,
    columns: u32,
}

impl SheetLayout {
    /// Create a layout, rejecting degenerate geometry.
    pub fn new(tile_width: u32, tile_height: u32, columns: u32) -> Result<Self, SheetError> {
        if tile_width == 0 {
            return Err(SheetError::InvalidGeometry("tile_width"));
        }
        if tile_height == 0 {
            return Err(SheetError::InvalidGeometry("tile_height"));
        }
        if columns == 0 {
            return Err(SheetError::InvalidGeometry("columns"));
        }
        Ok(Self {
            tile_width,
            tile_height,
            columns,
        })
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Pixel rectangle of the tile with row-major linear id `id`.
    pub fn tile_rect(&self, id: u32) -> TileRect {
        TileRect {
            x: ((id % self.columns) * self.tile_width) as i32,
            y: ((id / self.columns) * self.tile_height) as i32,
            w: self.tile_width,
            h: self.tile_height,
        }
    }

    /// Check that every tile id in `0..=max_id` addresses pixels inside a
    /// texture of `tex_width` x `tex_height`.
    ///
    /// The full column extent must fit the texture width, and the rows
    /// implied by `max_id` must fit the texture height.
    pub fn validate_extent(
        &self,
        tex_width: u32,
        tex_height: u32,
        max_id: u32,
    ) -> Result<(), SheetError> {
        // Widened so oversized geometry reports its true extent instead of
        // wrapping the multiplications past the texture bounds.
        let need_width = u64::from(self.tile_width) * u64::from(self.columns);
        let rows = u64::from(max_id / self.columns) + 1;
        let need_height = rows * u64::from(self.tile_height);
        if need_width > u64::from(tex_width) || need_height > u64::from(tex_height) {
            return Err(SheetError::ExceedsTexture {
                need_width,
                need_height,
                tex_width,
                tex_height,
            });
        }
        Ok(())
    }
}
