pub mod settings;

pub use settings::{
    ControlsSettings, GameSettings, PhysicsSettings, WorldSettings, load_settings,
    load_settings_or_default, save_settings,
};
