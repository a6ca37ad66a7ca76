use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::SettingsError;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GameSettings {
    #[serde(default)]
    pub physics: PhysicsSettings,
    #[serde(default)]
    pub controls: ControlsSettings,
    #[serde(default)]
    pub world: WorldSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub jump_speed: f32,
    pub move_speed: f32,
    pub radius: f32,
    pub eye_height: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_FORCE,
            move_speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            eye_height: EYE_HEIGHT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsSettings {
    pub mouse_sensitivity: f32,
    pub reach_steps: usize,
    pub break_time: f32,
    pub hotbar: [i32; HOTBAR_SIZE],
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            reach_steps: REACH_STEPS,
            break_time: BREAK_TIME,
            hotbar: DEFAULT_HOTBAR,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldSettings {
    pub path: PathBuf,
    pub spawn: [f32; 3],
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_WORLD_FILE),
            spawn: SPAWN_POSITION,
        }
    }
}

/// Per-user settings location, if the platform has one.
pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "blockwalk")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<(), SettingsError> {
    let encoded = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, encoded).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Load settings, falling back to defaults when the file is missing or broken.
pub fn load_settings_or_default(path: &Path) -> GameSettings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings at {}, using defaults", path.display());
            GameSettings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to load settings: {}. Using defaults.", e);
            GameSettings::default()
        }
    }
}
