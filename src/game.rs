//! High-level game assembly.
//!
//! [`Game`] is the explicit simulation world: it owns the ECS [`World`] and
//! the update [`Schedule`], and exposes the surface a host loop needs -
//! registering animations, spawning the cast, writing input and ticking.
//! The clip registry is built once and injected at construction; nothing in
//! here is global.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::Animation;
use crate::components::behavior::Behavior;
use crate::components::facing::Facing;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::monster::{Aggro, Monster};
use crate::components::player::{AttackAction, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::stats::{ActorName, AttackReach, MoveSpeed};
use crate::lpc::{AnimName, SheetDescriptor};
use crate::resources::clipstore::{ClipStore, RegistryError};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::monster::monster_behavior;
use crate::systems::movement::movement;
use crate::systems::player::player_behavior;
use crate::systems::time::update_world_time;

/// Where the demo player enters the map.
const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 100.0);
/// Anchor of the monster spawn scatter.
const MONSTER_SPAWN_ANCHOR: Vec2 = Vec2::new(150.0, 150.0);

/// Spawn parameters for the player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Display name; empty or absent picks `{texture}{index}`.
    pub name: Option<String>,
    pub texture: String,
    /// Clip played while attacking.
    pub attack_anim: AnimName,
    pub position: Vec2,
    pub speed: f32,
    pub health: i32,
    /// Seconds between accepted attack presses.
    pub attack_rate: f32,
    pub attack_range: f32,
    pub attack_fov: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: None,
            texture: "fighter".into(),
            attack_anim: AnimName::Slash,
            position: PLAYER_SPAWN,
            speed: 1.0,
            health: 100,
            attack_rate: 1.0,
            attack_range: 10.0,
            attack_fov: 90.0,
        }
    }
}

/// Spawn parameters for a monster.
#[derive(Debug, Clone)]
pub struct MonsterConfig {
    /// Display name; empty or absent picks `{texture}{index}`.
    pub name: Option<String>,
    pub texture: String,
    pub position: Vec2,
    pub speed: f32,
    pub health: i32,
    /// Aggro distance.
    pub min_dist_to_player: f32,
    pub attack_range: f32,
    pub attack_fov: f32,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            name: None,
            texture: "skeleton".into(),
            position: Vec2::ZERO,
            speed: 1.0,
            health: 100,
            min_dist_to_player: 50.0,
            attack_range: 10.0,
            attack_fov: 90.0,
        }
    }
}

/// The simulation world and its update schedule.
pub struct Game {
    world: World,
    schedule: Schedule,
    spawned: usize,
}

impl Game {
    /// Build a world around a prebuilt clip registry and gameplay config.
    pub fn new(config: GameConfig, clips: ClipStore) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(config);
        world.insert_resource(clips);

        let mut schedule = Schedule::default();
        // Behavior first, then integration, then playback - entities act on
        // this tick's state and the clip heads advance afterwards.
        schedule.add_systems((player_behavior, monster_behavior, movement, animation).chain());

        Self { world, schedule, spawned: 0 }
    }

    /// Build the clip registry for a sheet roster. Fatal on malformed
    /// definitions or key collisions; call once at boot.
    pub fn register_animations(sheets: &[SheetDescriptor]) -> Result<ClipStore, RegistryError> {
        ClipStore::register_all(sheets)
    }

    /// Read a sheet roster from a JSON file.
    pub fn load_sheet_roster(path: impl AsRef<Path>) -> Result<Vec<SheetDescriptor>, String> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read sheet roster: {e}"))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse sheet roster: {e}"))
    }

    /// Spawn the player entity.
    pub fn spawn_player(&mut self, config: PlayerConfig) -> Entity {
        let name = self.actor_name(config.name.as_deref(), &config.texture);
        let entity = self
            .world
            .spawn((
                Player,
                ActorName(name.clone()),
                MapPosition::new(config.position.x, config.position.y),
                RigidBody::new(),
                Facing::default(),
                Behavior::default(),
                Health::new(config.health),
                MoveSpeed(config.speed),
                AttackReach { range: config.attack_range, fov: config.attack_fov },
                AttackAction::new(config.attack_anim, config.attack_rate),
                Animation::new(config.texture.clone()),
            ))
            .id();
        self.spawned += 1;
        debug!(
            "spawned player '{}': texture={} health={} speed={} attack={}",
            name,
            config.texture,
            config.health,
            config.speed,
            config.attack_anim.as_str()
        );
        entity
    }

    /// Spawn a monster entity.
    pub fn spawn_monster(&mut self, config: MonsterConfig) -> Entity {
        let name = self.actor_name(config.name.as_deref(), &config.texture);
        let entity = self
            .world
            .spawn((
                Monster,
                ActorName(name.clone()),
                MapPosition::new(config.position.x, config.position.y),
                RigidBody::new(),
                Facing::default(),
                Behavior::default(),
                Health::new(config.health),
                MoveSpeed(config.speed),
                AttackReach { range: config.attack_range, fov: config.attack_fov },
                Aggro::new(config.min_dist_to_player),
                Animation::new(config.texture.clone()),
            ))
            .id();
        self.spawned += 1;
        debug!(
            "spawned monster '{}': texture={} health={} speed={} aggro={}",
            name, config.texture, config.health, config.speed, config.min_dist_to_player
        );
        entity
    }

    /// Spawn the demo cast: the fighter at the map entrance and a pack of
    /// skeletons scattered around the spawn anchor, with speeds rolled
    /// uniformly from the configured range. Returns the player entity.
    pub fn populate_demo(&mut self) -> Entity {
        let config = self.world.resource::<GameConfig>().clone();

        let player = self.spawn_player(PlayerConfig {
            speed: config.player_speed,
            attack_rate: config.player_attack_rate,
            ..PlayerConfig::default()
        });

        for _ in 0..config.monster_count {
            let angle = fastrand::f32() * std::f32::consts::TAU;
            let position =
                MONSTER_SPAWN_ANCHOR + Vec2::new(angle.cos(), angle.sin()) * config.monster_scatter;
            let speed = config.monster_speed_min
                + fastrand::f32() * (config.monster_speed_max - config.monster_speed_min);
            self.spawn_monster(MonsterConfig {
                position,
                speed,
                min_dist_to_player: config.monster_min_dist,
                ..MonsterConfig::default()
            });
        }

        player
    }

    /// Advance the simulation by one frame of `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        update_world_time(&mut self.world, delta);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Write this frame's keyboard snapshot.
    pub fn write_input(&mut self, up: bool, down: bool, left: bool, right: bool, attack: bool) {
        let mut input = self.world.resource_mut::<InputState>();
        input.up.set(up);
        input.down.set(down);
        input.left.set(left);
        input.right.set(right);
        input.attack.set(attack);
    }

    /// Direct access to the input snapshot, for hosts that track edges
    /// themselves.
    pub fn input_mut(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn actor_name(&self, name: Option<&str>, texture: &str) -> String {
        match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{texture}{}", self.spawned),
        }
    }
}
