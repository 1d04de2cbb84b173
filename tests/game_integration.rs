//! End-to-end tests driving the public `Game` surface the way a host would.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use lpcquest::components::behavior::{Behavior, BehaviorState};
use lpcquest::components::health::Health;
use lpcquest::components::monster::Monster;
use lpcquest::components::player::Player;
use lpcquest::events::health::HealthDepletedEvent;
use lpcquest::game::{Game, MonsterConfig, PlayerConfig};
use lpcquest::lpc::AnimName;
use lpcquest::resources::gameconfig::GameConfig;

const DT: f32 = 0.25;

fn boot() -> Game {
    let roster = Game::load_sheet_roster("assets/sheets.json").expect("roster should load");
    let clips = Game::register_animations(&roster).expect("roster should register");
    Game::new(GameConfig::new(), clips)
}

#[test]
fn roster_file_describes_the_demo_cast() {
    let roster = Game::load_sheet_roster("assets/sheets.json").unwrap();
    assert_eq!(roster.len(), 4);
    let fighter = roster.iter().find(|s| s.texture == "fighter").unwrap();
    assert_eq!(fighter.oversize, Some(AnimName::Slash));
    let skeleton = roster.iter().find(|s| s.texture == "skeleton").unwrap();
    assert_eq!(skeleton.oversize, None);
}

#[test]
fn registered_roster_resolves_the_oversize_slash() {
    let roster = Game::load_sheet_roster("assets/sheets.json").unwrap();
    let clips = Game::register_animations(&roster).unwrap();
    let clip = clips.get("fighter_slash_up").unwrap();
    assert_eq!(clip.texture_key, "fighter_oversize");
    let expected: Vec<u32> = (56..62).collect();
    assert_eq!(clip.frames.as_slice(), expected.as_slice());
    // The wizard's oversize is the thrust instead.
    let clip = clips.get("wizard_thrust_up").unwrap();
    assert_eq!(clip.texture_key, "wizard_oversize");
    let clip = clips.get("wizard_slash_up").unwrap();
    assert_eq!(clip.texture_key, "wizard");
}

#[test]
fn held_attack_cycles_through_damage_and_back() {
    let mut game = boot();
    game.spawn_player(PlayerConfig::default());
    let a = game.spawn_monster(MonsterConfig {
        position: Vec2::new(2000.0, 0.0),
        ..MonsterConfig::default()
    });
    let b = game.spawn_monster(MonsterConfig {
        position: Vec2::new(-2000.0, 0.0),
        ..MonsterConfig::default()
    });

    // Hold the attack key: accepted on the first tick, the slash plays out
    // over one second (two playthroughs), then one damage pass hits both
    // monsters no matter how far away they are.
    for _ in 0..5 {
        game.write_input(false, false, false, false, true);
        game.tick(DT);
    }
    assert_eq!(game.world().get::<Health>(a).unwrap().current, 99);
    assert_eq!(game.world().get::<Health>(b).unwrap().current, 99);

    // Still holding: the debounce window has elapsed, so the next tick winds
    // up attacking again.
    game.write_input(false, false, false, false, true);
    game.tick(DT);
    let world = game.world_mut();
    let mut players = world.query_filtered::<&Behavior, With<Player>>();
    let state = players.iter(world).next().unwrap().state;
    assert_eq!(state, BehaviorState::Attacking);
}

#[test]
fn skirmish_runs_a_monster_into_attack_range() {
    let mut game = boot();
    game.spawn_player(PlayerConfig::default());
    let monster = game.spawn_monster(MonsterConfig {
        position: Vec2::new(250.0, 100.0),
        speed: 4.0,
        ..MonsterConfig::default()
    });

    // Nobody touches the keyboard; the skeleton closes in on its own.
    for _ in 0..240 {
        game.write_input(false, false, false, false, false);
        game.tick(1.0 / 60.0);
    }

    let state = game.world().get::<Behavior>(monster).unwrap().state;
    assert!(matches!(state, BehaviorState::Attacking | BehaviorState::DealingDamage));
}

#[test]
fn depleted_monster_stays_in_the_world_and_reports_once() {
    let mut game = boot();

    let fired = std::sync::Arc::new(std::sync::Mutex::new(0u32));
    let fired_clone = fired.clone();
    game.world_mut().add_observer(move |_trigger: On<HealthDepletedEvent>| {
        *fired_clone.lock().unwrap() += 1;
    });
    game.world_mut().flush();

    game.spawn_player(PlayerConfig::default());
    let monster = game.spawn_monster(MonsterConfig {
        position: Vec2::new(2000.0, 0.0),
        health: 2,
        ..MonsterConfig::default()
    });

    // Hold the attack for long enough to land several damage passes.
    for _ in 0..48 {
        game.write_input(false, false, false, false, true);
        game.tick(DT);
    }

    let health = game.world().get::<Health>(monster).unwrap();
    assert!(health.current < 0, "monster keeps taking damage past zero");
    assert!(game.world().get::<Monster>(monster).is_some(), "no despawn on depletion");
    assert_eq!(*fired.lock().unwrap(), 1);
}

#[test]
fn populate_demo_builds_a_playable_world() {
    fastrand::seed(42);
    let mut game = boot();
    let player = game.populate_demo();

    // The demo world ticks without input and the player stays put, walking.
    for _ in 0..10 {
        game.write_input(false, false, false, false, false);
        game.tick(1.0 / 60.0);
    }

    assert_eq!(game.world().get::<Behavior>(player).unwrap().state, BehaviorState::Walking);
    let world = game.world_mut();
    let mut monsters = world.query_filtered::<(), With<Monster>>();
    assert_eq!(monsters.iter(world).count(), 5);
}
