//! Rendering-related modules
//! Contains the growable mesh streams, atlas lookup and the culled mesh builder.

pub mod atlas;
pub mod buffer;
pub mod mesh;

// Re-export commonly used types
pub use atlas::{AtlasKind, AtlasTile};
pub use buffer::GrowableBuffer;
pub use mesh::{Face, MeshBuffers, MeshStats, WorldMesh, build_mesh};
