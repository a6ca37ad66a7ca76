// Core module with fundamental types
pub mod core;

// Player module with camera, input, physics and interaction
pub mod player;

// Render module with mesh-building code
pub mod render;

// World module with raycasting and the distance field
pub mod world;

// Other modules
pub mod constants;
pub mod error;
pub mod save;
pub mod session;
pub mod utils;

// Re-exports
pub use constants::*;
pub use crate::core::{Billboard, Cell, Grid};
pub use error::{SettingsError, WorldError};
pub use player::{Action, CameraPose, Controller, Hotbar, InputState, Interaction, Player};
pub use render::{AtlasTile, GrowableBuffer, MeshBuffers, MeshStats, WorldMesh, build_mesh};
pub use save::{load_or_generate, load_world, save_world};
pub use session::{FrameReport, Session};
pub use utils::GameSettings;
pub use world::{DdaCursor, NO_SURFACE, RayHit, distance, raycast};
