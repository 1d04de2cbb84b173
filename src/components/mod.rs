//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback head over registered sprite clips
//! - [`behavior`] – walking/attacking/dealing-damage state machine state
//! - [`facing`] – sprite facing direction resolved from velocity
//! - [`health`] – hit points, unclamped
//! - [`mapposition`] – world-space position (center) of an entity
//! - [`monster`] – monster marker and aggro bookkeeping
//! - [`player`] – player marker and attack action
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`stats`] – movement speed, attack reach, display name

pub mod animation;
pub mod behavior;
pub mod facing;
pub mod health;
pub mod mapposition;
pub mod monster;
pub mod player;
pub mod rigidbody;
pub mod stats;
