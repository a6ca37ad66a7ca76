use glam::IVec3;

use crate::constants::*;
use crate::core::grid::Grid;
use crate::player::camera::CameraPose;
use crate::player::hotbar::Hotbar;
use crate::player::input::{DiggingState, InputState};
use crate::utils::settings::ControlsSettings;
use crate::world::dda::{RayHit, raycast};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceRefusal {
    InsidePlayer,
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Digging,
    Broke(IVec3),
    Picked(i32),
    Placed(IVec3),
    Refused(PlaceRefusal),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub target: Option<RayHit>,
    pub action: Action,
}

impl InteractionOutcome {
    pub fn grid_changed(&self) -> bool {
        matches!(self.action, Action::Broke(_) | Action::Placed(_))
    }
}

/// Crack overlay state for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakProgress {
    pub cell: IVec3,
    pub fraction: f32,
    pub stage: u32,
}

/// Break, pick and place against whatever the camera is looking at.
pub struct Interaction {
    digging: DiggingState,
    reach_steps: usize,
    break_time: f32,
}

impl Interaction {
    pub fn new(controls: &ControlsSettings) -> Self {
        Interaction {
            digging: DiggingState::default(),
            reach_steps: controls.reach_steps,
            break_time: controls.break_time,
        }
    }

    pub fn digging(&self) -> &DiggingState {
        &self.digging
    }

    pub fn break_progress(&self) -> Option<BreakProgress> {
        let index = self.digging.target?;
        let fraction = (self.digging.progress / self.break_time).clamp(0.0, 1.0);
        Some(BreakProgress {
            cell: Grid::position_of(index),
            fraction,
            stage: (self.digging.progress * BREAK_STAGES as f32) as u32 % BREAK_STAGES,
        })
    }

    pub fn target(&self, grid: &Grid, camera: &CameraPose) -> Option<RayHit> {
        raycast(grid, camera.position, camera.forward(), self.reach_steps)
    }

    /// Run one frame of interaction. Break wins over pick, pick over place.
    pub fn update(
        &mut self,
        grid: &mut Grid,
        camera: &CameraPose,
        player_cell: IVec3,
        hotbar: &mut Hotbar,
        input: &InputState,
        dt: f32,
    ) -> InteractionOutcome {
        let target = self.target(grid, camera);

        let action = match target {
            Some(hit) if input.break_held => self.dig(grid, hit, dt),
            Some(hit) if input.pick_pressed => {
                hotbar.set_selected_code(hit.code);
                Action::Picked(hit.code)
            }
            Some(hit) if input.wants_place() => {
                place(grid, hit, player_cell, hotbar.selected_code())
            }
            _ => Action::None,
        };

        if !input.break_held || target.is_none() {
            self.digging.reset();
        }

        InteractionOutcome { target, action }
    }

    fn dig(&mut self, grid: &mut Grid, hit: RayHit, dt: f32) -> Action {
        let Some(index) = Grid::index_of(hit.cell.x, hit.cell.y, hit.cell.z) else {
            return Action::None;
        };

        if self.digging.target != Some(index) {
            self.digging.target = Some(index);
            self.digging.progress = 0.0;
            return Action::Digging;
        }

        self.digging.progress += dt;
        if self.digging.progress < self.break_time {
            return Action::Digging;
        }

        self.digging.reset();
        match grid.set_at(hit.cell, 0) {
            Ok(()) => Action::Broke(hit.cell),
            Err(_) => Action::None,
        }
    }
}

/// Put `code` in the empty cell in front of the hit face.
pub fn place(grid: &mut Grid, hit: RayHit, player_cell: IVec3, code: i32) -> Action {
    let cell = hit.adjacent();
    if cell == player_cell || cell == player_cell - IVec3::Y {
        tracing::debug!("Refusing to place block inside the player at {}", cell);
        return Action::Refused(PlaceRefusal::InsidePlayer);
    }
    match grid.set_at(cell, code) {
        Ok(()) => Action::Placed(cell),
        Err(_) => Action::Refused(PlaceRefusal::OutOfBounds),
    }
}
