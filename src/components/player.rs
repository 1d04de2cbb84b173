//! Player-side components.

use bevy_ecs::prelude::Component;

use crate::lpc::AnimName;
use crate::resources::input::DebouncedAction;

/// Marker for the player entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// The player's attack: which clip plays and how often a held attack key is
/// accepted.
#[derive(Component, Clone, Debug)]
pub struct AttackAction {
    /// Clip played while attacking (slash for the fighter, thrust for the
    /// wizard).
    pub anim: AnimName,
    /// Minimum seconds between accepted presses.
    pub rate_secs: f32,
    /// Edge tracker holding the last accepted press.
    pub debounce: DebouncedAction,
}

impl AttackAction {
    pub fn new(anim: AnimName, rate_secs: f32) -> Self {
        Self { anim, rate_secs, debounce: DebouncedAction::default() }
    }
}
