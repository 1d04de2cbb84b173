//! Movement: velocity integration and steering.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate rigid body velocities into positions.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos += rigidbody.velocity * time.delta;
    }
}

/// Point an entity toward `direction`: normalize, scale by the speed stat and
/// the frame delta in milliseconds, write the velocity and re-resolve the
/// facing. A zero direction stops the body and keeps the facing.
pub fn steer(
    body: &mut RigidBody,
    facing: &mut Facing,
    direction: Vec2,
    speed: f32,
    delta_ms: f32,
) {
    let velocity = direction.normalize_or_zero() * (speed * delta_ms);
    body.set_velocity(velocity);
    facing.turn_from_velocity(body.velocity);
}
