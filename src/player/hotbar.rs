use crate::constants::*;

/// Fixed row of cell codes; the selected slot is what gets placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotbar {
    slots: [i32; HOTBAR_SIZE],
    selected: usize,
}

impl Hotbar {
    pub fn new(slots: [i32; HOTBAR_SIZE]) -> Self {
        Hotbar { slots, selected: 0 }
    }

    pub fn selected_code(&self) -> i32 {
        self.slots[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn slots(&self) -> &[i32; HOTBAR_SIZE] {
        &self.slots
    }

    /// Wheel up moves left, wheel down moves right, wrapping around.
    pub fn scroll(&mut self, wheel: i32) {
        if wheel == 0 {
            return;
        }
        let n = HOTBAR_SIZE as i32;
        self.selected = (self.selected as i32 - wheel).rem_euclid(n) as usize;
    }

    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SIZE {
            self.selected = index;
        }
    }

    /// Overwrite the selected slot, as done by the pick action.
    pub fn set_selected_code(&mut self, code: i32) {
        self.slots[self.selected] = code;
    }
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new(DEFAULT_HOTBAR)
    }
}
