//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad (gilrs) once per frame and
//! combines them behind the [`InputSource`] trait.

use macroquad::prelude::{is_key_down, KeyCode};

use super::gamepad::{Gamepad, PadButtons};
use super::{Action, InputSource};

/// Unified input state for keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// Gamepad buttons sampled by the last `poll`
    pad: PadButtons,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            pad: PadButtons::default(),
        }
    }

    /// Call once per frame before objects read actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.pad = self.gamepad.buttons();
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Jump => {
                is_key_down(KeyCode::Space) || is_key_down(KeyCode::Up) || is_key_down(KeyCode::W)
            }
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.pad.left,
            Action::MoveRight => self.pad.right,
            Action::Jump => self.pad.jump,
        }
    }
}

impl InputSource for InputState {
    fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Input held down by hand, for driving objects without a window
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    held: std::collections::HashSet<Action>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(actions: &[Action]) -> Self {
        let mut input = Self::new();
        for &action in actions {
            input.press(action);
        }
        input
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn action_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
