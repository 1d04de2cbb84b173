//! Monster behavior system.
//!
//! Same two-step update as the player: compute the next state, then act in
//! it on the same tick. Monsters key their transitions on the squared
//! distance to the player, refreshed at the start of every tick.
//!
//! Transitions:
//! - Walking -> Attacking when strictly inside aggro range
//! - Attacking -> Walking when strictly outside; otherwise -> DealingDamage
//!   once the attack clip's progress reaches 1
//! - DealingDamage -> Attacking when still strictly inside, -> Walking
//!   otherwise
//!
//! Actions:
//! - Walking: chase the player center, loop the walk clip while moving
//! - Attacking: stand still and play the slash clip
//! - DealingDamage: placeholder, no damage is applied yet

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::behavior::{Behavior, BehaviorState};
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::monster::{Aggro, Monster};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::stats::MoveSpeed;
use crate::lpc::AnimName;
use crate::resources::clipstore::ClipStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::steer;

/// Advance every monster's state machine and act for the current tick.
///
/// Without a live player entity the system is a no-op.
pub fn monster_behavior(
    mut monsters: Query<
        (
            &MapPosition,
            &mut Behavior,
            &mut RigidBody,
            &mut Facing,
            &mut Animation,
            &mut Aggro,
            &MoveSpeed,
        ),
        (With<Monster>, Without<Player>),
    >,
    players: Query<&MapPosition, (With<Player>, Without<Monster>)>,
    clips: Res<ClipStore>,
    time: Res<WorldTime>,
) {
    let Some(player_pos) = players.iter().next() else {
        return;
    };

    for (position, mut behavior, mut body, mut facing, mut anim, mut aggro, speed) in
        monsters.iter_mut()
    {
        let to_player = player_pos.pos - position.pos;
        aggro.dist_sq = to_player.length_squared();

        behavior.state = match behavior.state {
            BehaviorState::Walking => {
                if aggro.in_range() {
                    BehaviorState::Attacking
                } else {
                    BehaviorState::Walking
                }
            }
            BehaviorState::Attacking => {
                if aggro.out_of_range() {
                    BehaviorState::Walking
                } else if anim.progress(&clips) >= 1.0 {
                    BehaviorState::DealingDamage
                } else {
                    BehaviorState::Attacking
                }
            }
            BehaviorState::DealingDamage => {
                if aggro.in_range() {
                    BehaviorState::Attacking
                } else {
                    BehaviorState::Walking
                }
            }
        };

        match behavior.state {
            BehaviorState::Walking => {
                steer(&mut body, &mut facing, to_player, speed.0, time.delta_ms());
                if body.is_moving() {
                    anim.play_directional(AnimName::Walk, facing.direction, true);
                } else {
                    anim.stop();
                }
            }
            BehaviorState::Attacking => {
                body.stop();
                anim.play_directional(AnimName::Slash, facing.direction, true);
            }
            BehaviorState::DealingDamage => {
                debug!("monster deals damage");
            }
        }
    }
}
