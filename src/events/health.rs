//! Health depletion event.
//!
//! The core never despawns an entity: when damage takes a monster's health
//! from positive to zero or below, it triggers [`HealthDepletedEvent`] once
//! and leaves the entity in place. Whatever owns the game decides what death
//! means by observing the event:
//!
//! ```ignore
//! world.add_observer(|trigger: On<HealthDepletedEvent>| {
//!     let event = trigger.event();
//!     info!("entity {:?} dropped to {} hp", event.entity, event.health);
//! });
//! ```

use bevy_ecs::prelude::*;

/// Event emitted when an entity's health crosses from above zero to zero or
/// below. Fired exactly once per crossing; further damage on an already
/// depleted entity stays silent.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthDepletedEvent {
    /// The entity whose health ran out.
    pub entity: Entity,
    /// The health value after the damage was applied (zero or negative).
    pub health: i32,
}
