// World constants
pub const CHUNK_SIZE: i32 = 64;
pub const CHUNK_AREA: usize = (CHUNK_SIZE * CHUNK_SIZE) as usize;
pub const CHUNK_VOLUME: usize = CHUNK_AREA * CHUNK_SIZE as usize;
pub const CELL_BYTES: usize = std::mem::size_of::<i32>();

// Default terrain layers, (first y, last y, cell code)
pub const DEFAULT_LAYERS: [(i32, i32, i32); 3] = [(0, 3, 2), (4, 4, 3), (5, 5, 1)];

// Atlas layout
pub const ATLAS_COLUMNS: u32 = 16;
pub const DECORATION_ATLAS_COLUMNS: u32 = 8;
pub const TILE_PIXELS: u32 = 16;
pub const BREAK_STAGES: u32 = 10;

// Mesh builder
pub const MESH_INITIAL_CAPACITY: usize = 32 * 32;

// Player constants
pub const GRAVITY: f32 = -9.8;
pub const JUMP_FORCE: f32 = 6.0;
pub const PLAYER_SPEED: f32 = 8.0;
pub const PLAYER_RADIUS: f32 = 0.3;
pub const EYE_HEIGHT: f32 = 1.4;
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
pub const SPAWN_POSITION: [f32; 3] = [16.0, 10.0, CHUNK_SIZE as f32 / 2.0];

// Collision probes
pub const GROUNDED_EPSILON: f32 = 0.01;
pub const GRADIENT_EPSILON: f32 = 0.01;
pub const FLOOR_PROBE: f32 = 0.1;
pub const CONTACT_DISTANCE: f32 = 0.2;
pub const CEILING_PROBE: f32 = 1.4;

// Interaction
pub const REACH_STEPS: usize = 12;
pub const BREAK_TIME: f32 = 1.0;
pub const HOTBAR_SIZE: usize = 9;
pub const DEFAULT_HOTBAR: [i32; HOTBAR_SIZE] = [1, 2, 3, 4, -5, -4, -3, -2, -1];

pub const DEFAULT_WORLD_FILE: &str = "world";
pub const SETTINGS_FILE: &str = "settings.toml";
