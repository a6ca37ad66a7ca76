//! Core data structures for the game
//! Contains the cell codes and the dense voxel grid.

pub mod block;
pub mod grid;

// Re-export commonly used types
pub use block::Cell;
pub use grid::{Billboard, Grid};
