use glam::{IVec3, Vec3};

use crate::constants::*;
use crate::core::block::Cell;
use crate::error::WorldError;

/// A decoration cell to be drawn as a camera-facing quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub center: Vec3,
    pub decoration: u32,
}

/// Dense 64³ voxel grid, flat indexed as `x + y*S + z*S*S`.
pub struct Grid {
    cells: Box<[i32]>,
}

impl Grid {
    pub fn empty() -> Self {
        Grid {
            cells: vec![0; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Flat playable terrain used when no saved world exists.
    pub fn generate_default() -> Self {
        let mut grid = Grid::empty();
        for &(first, last, code) in DEFAULT_LAYERS.iter() {
            for y in first..=last {
                grid.fill_layer(y, code);
            }
        }
        grid
    }

    fn fill_layer(&mut self, y: i32, code: i32) {
        let start = y as usize * CHUNK_SIZE as usize;
        for z in 0..CHUNK_SIZE as usize {
            let row = start + z * CHUNK_AREA;
            self.cells[row..row + CHUNK_SIZE as usize].fill(code);
        }
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        (0..CHUNK_SIZE).contains(&x) && (0..CHUNK_SIZE).contains(&y) && (0..CHUNK_SIZE).contains(&z)
    }

    #[inline]
    pub fn index_of(x: i32, y: i32, z: i32) -> Option<usize> {
        if Self::in_bounds(x, y, z) {
            Some((x + y * CHUNK_SIZE + z * CHUNK_SIZE * CHUNK_SIZE) as usize)
        } else {
            None
        }
    }

    pub fn position_of(index: usize) -> IVec3 {
        let i = index as i32;
        IVec3::new(
            i % CHUNK_SIZE,
            (i / CHUNK_SIZE) % CHUNK_SIZE,
            i / (CHUNK_SIZE * CHUNK_SIZE),
        )
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<i32> {
        Self::index_of(x, y, z).map(|i| self.cells[i])
    }

    pub fn get_at(&self, pos: IVec3) -> Option<i32> {
        self.get(pos.x, pos.y, pos.z)
    }

    pub fn cell(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.get(x, y, z).map(Cell::from_code)
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, code: i32) -> Result<(), WorldError> {
        let i = Self::index_of(x, y, z).ok_or(WorldError::OutOfBounds { x, y, z })?;
        self.cells[i] = code;
        Ok(())
    }

    pub fn set_at(&mut self, pos: IVec3, code: i32) -> Result<(), WorldError> {
        self.set(pos.x, pos.y, pos.z, code)
    }

    /// Out-of-range cells are never solid.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_some_and(|code| code > 0)
    }

    pub fn is_occupied(&self, pos: IVec3) -> bool {
        self.get_at(pos).is_some_and(|code| code != 0)
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    pub fn decorations(&self) -> impl Iterator<Item = Billboard> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &code)| match Cell::from_code(code) {
            Cell::Decoration(decoration) => Some(Billboard {
                center: Self::position_of(i).as_vec3() + Vec3::splat(0.5),
                decoration,
            }),
            _ => None,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(CHUNK_VOLUME * CELL_BYTES);
        for code in self.cells.iter() {
            bytes.extend_from_slice(&code.to_le_bytes());
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WorldError> {
        let expected = CHUNK_VOLUME * CELL_BYTES;
        if bytes.len() != expected {
            return Err(WorldError::ShortFile {
                expected,
                actual: bytes.len(),
            });
        }

        let cells: Vec<i32> = bytes
            .chunks_exact(CELL_BYTES)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Ok(Grid {
            cells: cells.into_boxed_slice(),
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
