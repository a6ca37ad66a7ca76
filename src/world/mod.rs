//! Spatial queries over the grid
//! Contains the DDA raycaster and the distance field used for collision.

pub mod dda;
pub mod sdf;

// Re-export commonly used types
pub use dda::{DdaCursor, RayHit, raycast};
pub use sdf::{NO_SURFACE, distance};
