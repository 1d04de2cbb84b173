//! Player behavior system.
//!
//! Runs the player's state machine once per tick: the next state is computed
//! first, then the entity acts in the (possibly new) state within the same
//! tick.
//!
//! Transitions:
//! - Walking -> Attacking when the attack action is accepted by the
//!   debounced tracker (window = the player's `rate_secs`)
//! - Attacking -> DealingDamage when the attack clip's progress reaches 1
//! - DealingDamage -> Attacking on another accepted press, -> Walking
//!   otherwise
//!
//! Actions:
//! - Walking: steer from the cursor snapshot, face the motion, loop the walk
//!   clip while moving, halt the clip when standing
//! - Attacking: stand still and play the configured attack clip
//! - DealingDamage: apply one point of damage to every live monster. No
//!   range or field-of-view check is applied here.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::Animation;
use crate::components::behavior::{Behavior, BehaviorState};
use crate::components::facing::Facing;
use crate::components::health::Health;
use crate::components::monster::Monster;
use crate::components::player::{AttackAction, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::stats::{ActorName, MoveSpeed};
use crate::events::health::HealthDepletedEvent;
use crate::lpc::AnimName;
use crate::resources::clipstore::ClipStore;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::steer;

/// Advance the player state machine and act for the current tick.
pub fn player_behavior(
    mut players: Query<
        (
            &mut Behavior,
            &mut RigidBody,
            &mut Facing,
            &mut Animation,
            &mut AttackAction,
            &MoveSpeed,
        ),
        (With<Player>, Without<Monster>),
    >,
    mut monsters: Query<(Entity, &mut Health, Option<&ActorName>), (With<Monster>, Without<Player>)>,
    input: Res<InputState>,
    clips: Res<ClipStore>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (mut behavior, mut body, mut facing, mut anim, mut attack, speed) in players.iter_mut() {
        let window = attack.rate_secs;

        behavior.state = match behavior.state {
            BehaviorState::Walking => {
                if attack.debounce.accept(input.attack.active, time.elapsed, window) {
                    BehaviorState::Attacking
                } else {
                    BehaviorState::Walking
                }
            }
            BehaviorState::Attacking => {
                if anim.progress(&clips) >= 1.0 {
                    BehaviorState::DealingDamage
                } else {
                    BehaviorState::Attacking
                }
            }
            BehaviorState::DealingDamage => {
                if attack.debounce.accept(input.attack.active, time.elapsed, window) {
                    BehaviorState::Attacking
                } else {
                    BehaviorState::Walking
                }
            }
        };

        match behavior.state {
            BehaviorState::Walking => {
                let mut movement = Vec2::ZERO;
                // Horizontal movement
                if input.left.active {
                    movement.x = -1.0;
                } else if input.right.active {
                    movement.x = 1.0;
                }
                // Vertical movement
                if input.up.active {
                    movement.y = -1.0;
                } else if input.down.active {
                    movement.y = 1.0;
                }
                steer(&mut body, &mut facing, movement, speed.0, time.delta_ms());

                if body.is_moving() {
                    anim.play_directional(AnimName::Walk, facing.direction, true);
                } else {
                    anim.stop();
                }
            }
            BehaviorState::Attacking => {
                body.stop();
                anim.play_directional(attack.anim, facing.direction, true);
            }
            BehaviorState::DealingDamage => {
                for (entity, mut health, name) in monsters.iter_mut() {
                    let was_alive = health.current > 0;
                    health.take_damage(1);
                    debug!(
                        "{} took damage, health = {}",
                        name.map(|n| n.0.as_str()).unwrap_or("monster"),
                        health.current
                    );
                    if was_alive && health.is_depleted() {
                        commands.trigger(HealthDepletedEvent { entity, health: health.current });
                    }
                }
            }
        }
    }
}
