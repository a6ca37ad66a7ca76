use glam::Vec3;

use crate::core::grid::{Billboard, Grid};
use crate::error::WorldError;
use crate::player::{
    BreakProgress, CameraPose, Controller, Hotbar, InputState, Interaction, InteractionOutcome,
};
use crate::render::mesh::{MeshBuffers, MeshStats, WorldMesh};
use crate::save::{load_or_generate, load_world, save_world};
use crate::utils::settings::GameSettings;
use crate::world::dda::RayHit;

/// What happened during one call to [`Session::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub camera: CameraPose,
    pub target: Option<RayHit>,
    pub interaction: Option<InteractionOutcome>,
    pub rebuilds: u32,
}

/// Everything one player in one chunk needs, updated once per frame.
pub struct Session {
    settings: GameSettings,
    grid: Grid,
    controller: Controller,
    interaction: Interaction,
    hotbar: Hotbar,
    mesh: WorldMesh,
    paused: bool,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        let grid = load_or_generate(&settings.world.path);
        Self::with_grid(settings, grid)
    }

    pub fn with_grid(settings: GameSettings, grid: Grid) -> Self {
        let controller = Controller::new(
            Vec3::from_array(settings.world.spawn),
            settings.physics.clone(),
            settings.controls.mouse_sensitivity,
        );
        let interaction = Interaction::new(&settings.controls);
        let hotbar = Hotbar::new(settings.controls.hotbar);

        let mut session = Session {
            settings,
            grid,
            controller,
            interaction,
            hotbar,
            mesh: WorldMesh::new(),
            paused: false,
        };
        session.rebuild_mesh();
        session
    }

    /// One update pass: persistence requests, movement, interaction, then hotbar.
    /// Every grid change triggers a full mesh rebuild before returning.
    pub fn frame(&mut self, dt: f32, input: &InputState) -> FrameReport {
        let mut rebuilds = 0;

        if input.save_pressed {
            if let Err(e) = self.save() {
                tracing::error!("Failed to save world: {}", e);
            }
        }
        if input.load_pressed {
            match self.reload() {
                Ok(()) => rebuilds += 1,
                Err(e) => tracing::error!("Failed to load world: {}", e),
            }
        }

        if self.paused {
            let camera = self.controller.camera();
            return FrameReport {
                camera,
                target: None,
                interaction: None,
                rebuilds,
            };
        }

        let camera = self.controller.update(&self.grid, dt, input);

        let outcome = self.interaction.update(
            &mut self.grid,
            &camera,
            self.controller.player.cell(),
            &mut self.hotbar,
            input,
            dt,
        );
        // A scroll takes effect from the next frame's placement.
        self.hotbar.scroll(input.wheel_delta);
        if outcome.grid_changed() {
            self.rebuild_mesh();
            rebuilds += 1;
        }

        FrameReport {
            camera,
            target: outcome.target,
            interaction: Some(outcome),
            rebuilds,
        }
    }

    pub fn rebuild_mesh(&mut self) -> MeshStats {
        self.mesh.rebuild(&self.grid)
    }

    /// Write a cell from outside the interaction path and remesh.
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, code: i32) -> Result<(), WorldError> {
        self.grid.set(x, y, z, code)?;
        self.rebuild_mesh();
        Ok(())
    }

    pub fn save(&self) -> Result<(), WorldError> {
        save_world(&self.settings.world.path, &self.grid)
    }

    /// Replace the grid with the saved one. Unlike startup, a missing file is an error here.
    pub fn reload(&mut self) -> Result<(), WorldError> {
        self.grid = load_world(&self.settings.world.path)?;
        self.rebuild_mesh();
        Ok(())
    }

    /// A paused session still honours save/load but skips movement and interaction.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn hotbar(&self) -> &Hotbar {
        &self.hotbar
    }

    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.mesh.current()
    }

    pub fn mesh_generation(&self) -> u64 {
        self.mesh.generation()
    }

    pub fn billboards(&self) -> Vec<Billboard> {
        self.grid.decorations().collect()
    }

    pub fn break_progress(&self) -> Option<BreakProgress> {
        self.interaction.break_progress()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }
}
