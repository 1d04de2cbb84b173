//! Per-frame input snapshot.
//!
//! The core never talks to a keyboard. Whatever drives the game loop writes
//! the relevant key states into the [`InputState`] resource once per frame
//! and the behavior systems read it from there.
//!
//! Attack debouncing is explicit rather than buried in an input backend:
//! [`DebouncedAction`] remembers when a press was last accepted and is
//! queried with the simulation clock, so a held key re-fires at a fixed
//! cadence and the first press fires immediately.

use bevy_ecs::prelude::Resource;

/// Boolean key state for one logical action.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Record this frame's raw key state, deriving the edge flags.
    pub fn set(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay:
/// the four cursor directions plus the attack action.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub attack: BoolState,
}

/// Edge tracker for an action that must not re-fire faster than a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebouncedAction {
    /// Clock value of the last accepted press, if any.
    pub last_accept: Option<f32>,
}

impl DebouncedAction {
    /// Accept an active press when at least `window` seconds passed since
    /// the last accepted one. The first press is accepted immediately.
    pub fn accept(&mut self, active: bool, now: f32, window: f32) -> bool {
        if !active {
            return false;
        }
        if let Some(last) = self.last_accept {
            if now - last < window {
                return false;
            }
        }
        self.last_accept = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_edges() {
        let mut key = BoolState::default();
        key.set(true);
        assert!(key.active && key.just_pressed && !key.just_released);
        key.set(true);
        assert!(key.active && !key.just_pressed);
        key.set(false);
        assert!(!key.active && key.just_released);
        key.set(false);
        assert!(!key.just_released);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.up.active);
        assert!(!input.down.active);
        assert!(!input.left.active);
        assert!(!input.right.active);
        assert!(!input.attack.active);
    }

    #[test]
    fn test_first_press_is_accepted_immediately() {
        let mut action = DebouncedAction::default();
        assert!(action.accept(true, 0.0, 1.0));
    }

    #[test]
    fn test_held_key_refires_once_per_window() {
        let mut action = DebouncedAction::default();
        assert!(action.accept(true, 0.0, 1.0));
        assert!(!action.accept(true, 0.5, 1.0));
        assert!(!action.accept(true, 0.99, 1.0));
        assert!(action.accept(true, 1.0, 1.0));
        assert!(!action.accept(true, 1.5, 1.0));
    }

    #[test]
    fn test_inactive_key_is_never_accepted() {
        let mut action = DebouncedAction::default();
        assert!(!action.accept(false, 10.0, 1.0));
        assert_eq!(action.last_accept, None);
    }
}
