use glam::IVec3;

use crate::constants::*;
use crate::core::block::Cell;
use crate::core::grid::Grid;
use crate::render::atlas::AtlasTile;
use crate::render::buffer::GrowableBuffer;

/// One side of a unit cube, in the order faces are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,  // +Z
    Back,   // -Z
    Top,    // +Y
    Bottom, // -Y
    Right,  // +X
    Left,   // -X
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    pub fn offset(&self) -> IVec3 {
        match self {
            Face::Front => IVec3::new(0, 0, 1),
            Face::Back => IVec3::new(0, 0, -1),
            Face::Top => IVec3::new(0, 1, 0),
            Face::Bottom => IVec3::new(0, -1, 0),
            Face::Right => IVec3::new(1, 0, 0),
            Face::Left => IVec3::new(-1, 0, 0),
        }
    }

    pub fn normal(&self) -> [f32; 3] {
        self.offset().as_vec3().to_array()
    }

    /// Cube-local corners, counter-clockwise seen from outside.
    pub fn corners(&self) -> [[f32; 3]; 4] {
        match self {
            Face::Front => [[0., 0., 1.], [1., 0., 1.], [1., 1., 1.], [0., 1., 1.]],
            Face::Back => [[0., 0., 0.], [0., 1., 0.], [1., 1., 0.], [1., 0., 0.]],
            Face::Top => [[0., 1., 0.], [0., 1., 1.], [1., 1., 1.], [1., 1., 0.]],
            Face::Bottom => [[0., 0., 0.], [1., 0., 0.], [1., 0., 1.], [0., 0., 1.]],
            Face::Right => [[1., 0., 0.], [1., 1., 0.], [1., 1., 1.], [1., 0., 1.]],
            Face::Left => [[0., 0., 0.], [0., 0., 1.], [0., 1., 1.], [0., 1., 0.]],
        }
    }

    /// Unit-quad texcoords matching `corners`.
    pub fn texcoords(&self) -> [[f32; 2]; 4] {
        match self {
            Face::Front | Face::Bottom | Face::Left => {
                [[1., 1.], [0., 1.], [0., 0.], [1., 0.]]
            }
            Face::Back | Face::Top | Face::Right => {
                [[0., 1.], [0., 0.], [1., 0.], [1., 1.]]
            }
        }
    }
}

/// CPU-side mesh streams ready for upload.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub texcoords: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshStats {
    pub vertices: usize,
    pub indices: usize,
    pub quads: usize,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count(),
            indices: self.indices.len(),
            quads: self.vertex_count() / 4,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn texcoord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texcoords)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

struct MeshStreams {
    positions: GrowableBuffer<f32>,
    texcoords: GrowableBuffer<f32>,
    normals: GrowableBuffer<f32>,
}

impl MeshStreams {
    fn new() -> Self {
        Self {
            positions: GrowableBuffer::with_capacity(MESH_INITIAL_CAPACITY),
            texcoords: GrowableBuffer::with_capacity(MESH_INITIAL_CAPACITY),
            normals: GrowableBuffer::with_capacity(MESH_INITIAL_CAPACITY),
        }
    }

    fn add_face(&mut self, pos: IVec3, face: Face, tile: AtlasTile) {
        let origin = pos.as_vec3().to_array();
        let normal = face.normal();
        for (corner, uv) in face.corners().iter().zip(face.texcoords()) {
            self.positions.push(corner[0] + origin[0]);
            self.positions.push(corner[1] + origin[1]);
            self.positions.push(corner[2] + origin[2]);
            self.texcoords.extend_from_slice(&tile.remap(uv));
            self.normals.extend_from_slice(&normal);
        }
    }

    fn finish(self) -> MeshBuffers {
        let quads = self.positions.len() / 12;
        MeshBuffers {
            positions: self.positions.into_vec(),
            texcoords: self.texcoords.into_vec(),
            normals: self.normals.into_vec(),
            indices: quad_indices(quads),
        }
    }
}

/// Two triangles per quad: `(0, 1, 2, 0, 2, 3)` offset by `4 * quad`.
pub fn quad_indices(quads: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quads * 6);
    for k in 0..quads as u32 {
        let base = 4 * k;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

/// A face is visible unless the neighbour it points at is a solid cell.
pub fn face_visible(grid: &Grid, pos: IVec3, face: Face) -> bool {
    let n = pos + face.offset();
    !grid.is_solid(n.x, n.y, n.z)
}

/// Rebuild the full face-culled mesh for the grid.
pub fn build_mesh(grid: &Grid) -> MeshBuffers {
    let mut streams = MeshStreams::new();

    for (i, &code) in grid.cells().iter().enumerate() {
        let Cell::Solid(ty) = Cell::from_code(code) else {
            continue;
        };
        let pos = Grid::position_of(i);
        let tile = AtlasTile::block(ty);

        for face in Face::ALL {
            if face_visible(grid, pos, face) {
                streams.add_face(pos, face, tile);
            }
        }
    }

    streams.finish()
}

/// Holds the most recently installed mesh for the renderer.
#[derive(Default)]
pub struct WorldMesh {
    current: Option<MeshBuffers>,
    generation: u64,
}

impl WorldMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current mesh, handing back the previous one.
    pub fn install(&mut self, mesh: MeshBuffers) -> Option<MeshBuffers> {
        self.generation += 1;
        self.current.replace(mesh)
    }

    pub fn rebuild(&mut self, grid: &Grid) -> MeshStats {
        let mesh = build_mesh(grid);
        let stats = mesh.stats();
        if let Some(old) = self.install(mesh) {
            drop(old);
        }
        tracing::debug!(
            "Rebuilt world mesh #{}: {} quads, {} vertices",
            self.generation,
            stats.quads,
            stats.vertices
        );
        stats
    }

    pub fn current(&self) -> Option<&MeshBuffers> {
        self.current.as_ref()
    }

    /// Incremented once per installed mesh.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn release(&mut self) -> Option<MeshBuffers> {
        self.current.take()
    }
}
