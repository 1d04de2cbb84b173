//! Behavior state machine component.
//!
//! Every acting entity carries a [`Behavior`] holding its current
//! [`BehaviorState`]. The per-variant behavior systems evaluate the next
//! state first and then act in the (possibly new) state within the same
//! tick, mirroring the two-step update every variant shares.
//!
//! The state set is a closed enum on purpose: there is no "unknown state"
//! branch anywhere, the compiler checks every match is exhaustive.

use bevy_ecs::prelude::Component;

/// The states every acting entity can be in. There is no terminal state;
/// the machine loops for the lifetime of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorState {
    /// Moving (or standing) under its controller's direction.
    Walking,
    /// Playing the attack animation, standing still.
    Attacking,
    /// The attack animation finished; damage is applied this tick.
    DealingDamage,
}

/// Current behavior state. Entities spawn walking.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Behavior {
    pub state: BehaviorState,
}

impl Default for Behavior {
    fn default() -> Self {
        Self { state: BehaviorState::Walking }
    }
}
