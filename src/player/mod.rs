//! Player-related modules
//! Contains camera, input handling, physics and block interaction.

pub mod camera;
pub mod controller;
pub mod hotbar;
pub mod input;
pub mod interaction;

// Re-export commonly used types
pub use camera::CameraPose;
pub use controller::{Controller, Player};
pub use hotbar::Hotbar;
pub use input::{DiggingState, InputState};
pub use interaction::{Action, BreakProgress, Interaction, InteractionOutcome, PlaceRefusal};
