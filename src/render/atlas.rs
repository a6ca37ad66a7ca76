use glam::{UVec2, Vec2};

use crate::constants::*;
use crate::core::block::Cell;

/// Which atlas a tile is looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtlasKind {
    Blocks,
    Decorations,
}

impl AtlasKind {
    pub fn columns(&self) -> u32 {
        match self {
            AtlasKind::Blocks => ATLAS_COLUMNS,
            AtlasKind::Decorations => DECORATION_ATLAS_COLUMNS,
        }
    }
}

/// Column/row of a tile in one of the two atlases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasTile {
    pub kind: AtlasKind,
    pub column: u32,
    pub row: u32,
}

impl AtlasTile {
    pub fn new(kind: AtlasKind, ty: u32) -> Self {
        let columns = kind.columns();
        AtlasTile {
            kind,
            column: ty % columns,
            row: ty / columns,
        }
    }

    pub fn block(ty: u32) -> Self {
        Self::new(AtlasKind::Blocks, ty)
    }

    pub fn decoration(ty: u32) -> Self {
        Self::new(AtlasKind::Decorations, ty)
    }

    /// Tile for a cell, `None` for air.
    pub fn for_cell(cell: Cell) -> Option<Self> {
        match cell {
            Cell::Empty => None,
            Cell::Solid(ty) => Some(Self::block(ty)),
            Cell::Decoration(ty) => Some(Self::decoration(ty)),
        }
    }

    /// Top-left corner of the tile in normalized coordinates of its own atlas.
    /// Both atlases are square, one tile is `1 / columns` wide.
    pub fn uv_origin(&self) -> Vec2 {
        Vec2::new(self.column as f32, self.row as f32) * self.uv_scale()
    }

    pub fn uv_scale(&self) -> f32 {
        1.0 / self.kind.columns() as f32
    }

    /// Remap a unit-quad texcoord into this tile.
    pub fn remap(&self, uv: [f32; 2]) -> [f32; 2] {
        let origin = self.uv_origin();
        let scale = self.uv_scale();
        [uv[0] * scale + origin.x, uv[1] * scale + origin.y]
    }

    /// Source rectangle in texels: (x, y) of the corner, side is `TILE_PIXELS`.
    pub fn pixel_origin(&self) -> UVec2 {
        UVec2::new(self.column, self.row) * TILE_PIXELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tiles_wrap_at_sixteen() {
        assert_eq!(AtlasTile::block(0), AtlasTile { kind: AtlasKind::Blocks, column: 0, row: 0 });
        assert_eq!(AtlasTile::block(15).column, 15);
        let t = AtlasTile::block(17);
        assert_eq!((t.column, t.row), (1, 1));
    }

    #[test]
    fn test_decoration_tiles_wrap_at_eight() {
        let t = AtlasTile::decoration(9);
        assert_eq!((t.column, t.row), (1, 1));
        assert_eq!(t.pixel_origin(), UVec2::new(16, 16));
        assert_eq!(AtlasTile::for_cell(Cell::from_code(-1)), Some(AtlasTile::decoration(0)));
        assert_eq!(AtlasTile::for_cell(Cell::Empty), None);
    }

    #[test]
    fn test_remap_into_tile() {
        let t = AtlasTile::block(2 + 16 * 3);
        let [u, v] = t.remap([1.0, 0.0]);
        assert!((u - 3.0 / 16.0).abs() < 1e-6);
        assert!((v - 3.0 / 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_decoration_remap_uses_eight_columns() {
        let t = AtlasTile::decoration(9);
        assert_eq!(t.uv_scale(), 0.125);
        let [u, v] = t.remap([0.0, 0.0]);
        assert!((u - 0.125).abs() < 1e-6);
        assert!((v - 0.125).abs() < 1e-6);
        let [u, v] = t.remap([1.0, 1.0]);
        assert!((u - 0.25).abs() < 1e-6);
        assert!((v - 0.25).abs() < 1e-6);
    }
}
