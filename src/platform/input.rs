//! Input actions
//!
//! The host updates [`InputState`] from its own events; the simulation
//! polls it once per frame and never sees raw key codes.

use std::collections::HashMap;

use crate::sim::TickInput;

const ACTION_COUNT: usize = 1;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
}

impl Action {
    fn index(self) -> usize {
        match self {
            Action::Jump => 0,
        }
    }
}

/// Pressed/released state of every action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; ACTION_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    /// Snapshot for one simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            jump: self.is_pressed(Action::Jump),
        }
    }
}

/// Key code to action table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<u32, Action>,
}

/// Space bar
pub const KEY_SPACE: u32 = 32;

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = HashMap::new();
        keys.insert(KEY_SPACE, Action::Jump);
        Self { keys }
    }
}

impl KeyBindings {
    pub fn bind(&mut self, key_code: u32, action: Action) {
        self.keys.insert(key_code, action);
    }

    pub fn action_for(&self, key_code: u32) -> Option<Action> {
        self.keys.get(&key_code).copied()
    }

    /// Apply a key event. Returns true if the key is bound, so the host
    /// can suppress its default handling.
    pub fn handle_key(&self, input: &mut InputState, key_code: u32, pressed: bool) -> bool {
        match self.action_for(key_code) {
            Some(action) => {
                input.set(action, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_jumps() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        assert!(bindings.handle_key(&mut input, KEY_SPACE, true));
        assert!(input.is_pressed(Action::Jump));
        assert_eq!(input.tick_input(), TickInput { jump: true });

        assert!(bindings.handle_key(&mut input, KEY_SPACE, false));
        assert!(!input.tick_input().jump);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        assert!(!bindings.handle_key(&mut input, 65, true));
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::default();
        bindings.bind(38, Action::Jump);
        assert_eq!(bindings.action_for(38), Some(Action::Jump));
        assert_eq!(bindings.action_for(KEY_SPACE), Some(Action::Jump));
    }
}
