//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity the movement system
//! integrates into [`MapPosition`](super::mapposition::MapPosition) each
//! frame. Behavior systems own it exclusively: they overwrite the velocity
//! every tick, so there is no damping or force accumulation here.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self { velocity: Vec2::ZERO }
    }

    /// Set the velocity of the body.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Zero the velocity (attacking entities stand still).
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// True when the net velocity is not the zero vector.
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }
}
