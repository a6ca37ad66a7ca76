use glam::Vec2;

/// Per-frame snapshot of the controls, filled in by the windowing layer.
///
/// `*_pressed` fields are true only on the frame the button went down,
/// `*_held` fields for as long as it stays down.
#[derive(Default, Clone, Debug)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub sneak_held: bool,
    pub mouse_delta: Vec2,
    pub wheel_delta: i32,
    pub break_held: bool,
    pub pick_pressed: bool,
    pub place_pressed: bool,
    pub place_held: bool,
    pub save_pressed: bool,
    pub load_pressed: bool,
}

impl InputState {
    /// Place fires once per click, or every frame while sneaking with the button down.
    pub fn wants_place(&self) -> bool {
        self.place_pressed || (self.place_held && self.sneak_held)
    }

    /// Clear edge-triggered fields; held state carries over to the next frame.
    pub fn end_frame(&mut self) {
        self.jump_pressed = false;
        self.pick_pressed = false;
        self.place_pressed = false;
        self.save_pressed = false;
        self.load_pressed = false;
        self.mouse_delta = Vec2::ZERO;
        self.wheel_delta = 0;
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DiggingState {
    pub target: Option<usize>,
    pub progress: f32,
}

impl DiggingState {
    pub fn reset(&mut self) {
        self.target = None;
        self.progress = 0.0;
    }
}
