//! lpcquest headless demo.
//!
//! Boots the simulation core the way a real host would:
//!
//! 1. Load `config.ini` and the spritesheet roster from `assets/sheets.json`
//! 2. Build the clip registry (fatal on malformed input)
//! 3. Spawn the demo cast and tick a fixed-step loop with a scripted input
//!    trace: walk south-east for a second, then hold the attack key
//!
//! There is no window - the engine collaborator owning rendering, physics
//! and the real keyboard is out of scope here. The log shows the texture
//! loads it would have to perform and the fights the state machines run.

mod components;
mod events;
mod game;
mod lpc;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use crate::components::behavior::Behavior;
use crate::components::health::Health;
use crate::components::stats::ActorName;
use crate::events::health::HealthDepletedEvent;
use crate::game::Game;
use crate::lpc::sheet_loads;
use crate::resources::gameconfig::GameConfig;

/// Headless demo of the lpcquest simulation core.
#[derive(Parser)]
#[command(version, about = "LPC action-game core, ticked without an engine")]
struct Cli {
    /// Path to the INI config file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to the spritesheet roster JSON.
    #[arg(long, value_name = "PATH", default_value = "./assets/sheets.json")]
    sheets: PathBuf,

    /// Number of fixed 60Hz frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let roster = match Game::load_sheet_roster(&cli.sheets) {
        Ok(roster) => roster,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    for sheet in &roster {
        for load in sheet_loads(sheet) {
            info!(
                "texture load required: '{}' from {} ({}x{} frames, starting at {})",
                load.texture_key,
                load.image_url,
                load.frame_width,
                load.frame_height,
                load.start_frame
            );
        }
    }

    let clips = match Game::register_animations(&roster) {
        Ok(clips) => clips,
        Err(e) => {
            error!("clip registration failed: {e}");
            std::process::exit(1);
        }
    };

    let mut game = Game::new(config, clips);
    game.world_mut().add_observer(|trigger: On<HealthDepletedEvent>, names: Query<&ActorName>| {
        let event = trigger.event();
        let name =
            names.get(event.entity).map(|n| n.0.clone()).unwrap_or_else(|_| "?".to_string());
        info!("'{}' is out of the fight ({} hp)", name, event.health);
    });
    game.world_mut().flush();
    game.populate_demo();

    const DT: f32 = 1.0 / 60.0;
    for frame in 0..cli.frames {
        let walking = frame < 60;
        game.write_input(false, walking, false, walking, !walking);
        game.tick(DT);
    }

    let world = game.world_mut();
    let mut query = world.query::<(&ActorName, &Health, &Behavior)>();
    for (name, health, behavior) in query.iter(world) {
        info!("'{}': {} hp, {:?}", name.0, health.current, behavior.state);
    }
}
