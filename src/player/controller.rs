use glam::{IVec3, Vec2, Vec3};

use crate::constants::*;
use crate::core::grid::Grid;
use crate::player::camera::CameraPose;
use crate::player::input::InputState;
use crate::utils::settings::PhysicsSettings;
use crate::world::sdf::{distance, horizontal_gradient};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Player {
            position: spawn,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Cell containing the player's feet.
    pub fn cell(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }
}

/// First-person walker driven by the distance field.
pub struct Controller {
    pub player: Player,
    physics: PhysicsSettings,
    sensitivity: f32,
    camera: CameraPose,
}

impl Controller {
    pub fn new(spawn: Vec3, physics: PhysicsSettings, sensitivity: f32) -> Self {
        let player = Player::new(spawn);
        let camera = CameraPose::from_angles(
            spawn + Vec3::new(0.0, physics.eye_height, 0.0),
            player.yaw,
            player.pitch,
        );
        Controller {
            player,
            physics,
            sensitivity,
            camera,
        }
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn physics(&self) -> &PhysicsSettings {
        &self.physics
    }

    /// Standing on something, measured one radius below the feet.
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        let probe = self.player.position - Vec3::new(0.0, self.physics.radius, 0.0);
        distance(grid, probe) < GROUNDED_EPSILON
    }

    /// Advance one frame. The order of the steps matters for collision.
    pub fn update(&mut self, grid: &Grid, dt: f32, input: &InputState) -> CameraPose {
        self.player.velocity.y += self.physics.gravity * dt;

        let movement = self.wish_movement(input, dt);

        if input.jump_pressed && self.is_grounded(grid) {
            self.player.velocity.y = self.physics.jump_speed;
        }

        self.player.position += Vec3::new(movement.x, 0.0, movement.z);
        self.push_out_horizontal(grid);
        self.integrate_vertical(grid, dt);
        self.stop_at_ceiling(grid);
        self.apply_look(input.mouse_delta);

        self.camera = CameraPose::from_angles(
            self.player.position + Vec3::new(0.0, self.physics.eye_height, 0.0),
            self.player.yaw,
            self.player.pitch,
        );
        self.camera
    }

    fn wish_movement(&self, input: &InputState, dt: f32) -> Vec3 {
        let mut axes = Vec2::ZERO;
        if input.forward {
            axes.y += 1.0;
        }
        if input.backward {
            axes.y -= 1.0;
        }
        if input.left {
            axes.x -= 1.0;
        }
        if input.right {
            axes.x += 1.0;
        }

        let mut movement = self.player.forward() * axes.y + self.player.right() * axes.x;
        movement.y = 0.0;
        if movement.length_squared() > 0.0 {
            movement = movement.normalize() * self.physics.move_speed * dt;
        }
        movement
    }

    fn push_out_horizontal(&mut self, grid: &Grid) {
        let radius = self.physics.radius;
        let d = distance(grid, self.player.position);
        if d < radius {
            let normal = horizontal_gradient(grid, self.player.position, d);
            self.player.position += Vec3::new(normal.x, 0.0, normal.y) * (radius - d);
        }
    }

    fn integrate_vertical(&mut self, grid: &Grid, dt: f32) {
        let old_y = self.player.position.y;
        self.player.position.y += self.player.velocity.y * dt;

        let floor = distance(grid, self.player.position - Vec3::new(0.0, FLOOR_PROBE, 0.0));
        if floor < CONTACT_DISTANCE {
            if self.player.velocity.y < 0.0 {
                self.player.position.y = old_y;
            } else {
                self.player.position.y += CONTACT_DISTANCE - floor;
            }
            self.player.velocity.y = 0.0;
        }
    }

    fn stop_at_ceiling(&mut self, grid: &Grid) {
        let head = distance(grid, self.player.position + Vec3::new(0.0, CEILING_PROBE, 0.0));
        if head < CONTACT_DISTANCE && self.player.velocity.y > 0.0 {
            self.player.velocity.y = 0.0;
        }
    }

    fn apply_look(&mut self, mouse_delta: Vec2) {
        self.player.yaw += mouse_delta.x * self.sensitivity;
        self.player.pitch -= mouse_delta.y * self.sensitivity;
        self.player.pitch = self.player.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
