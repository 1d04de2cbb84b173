//! Game configuration resource.
//!
//! Manages gameplay tunables loaded from an INI configuration file. Provides
//! defaults for safe startup; missing files or keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! speed = 8.0
//! attack_rate = 1.0
//!
//! [monsters]
//! count = 5
//! min_dist_to_player = 50.0
//! scatter = 300.0
//! speed_min = 1.0
//! speed_max = 10.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_PLAYER_SPEED: f32 = 8.0;
const DEFAULT_PLAYER_ATTACK_RATE: f32 = 1.0;
const DEFAULT_MONSTER_COUNT: u32 = 5;
const DEFAULT_MONSTER_MIN_DIST: f32 = 50.0;
const DEFAULT_MONSTER_SCATTER: f32 = 300.0;
const DEFAULT_MONSTER_SPEED_MIN: f32 = 1.0;
const DEFAULT_MONSTER_SPEED_MAX: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Gameplay tunables for the demo world.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Player walk speed stat.
    pub player_speed: f32,
    /// Seconds between accepted attack presses.
    pub player_attack_rate: f32,
    /// How many monsters the demo spawns.
    pub monster_count: u32,
    /// Aggro distance for spawned monsters.
    pub monster_min_dist: f32,
    /// Radius of the random spawn scatter around the spawn anchor.
    pub monster_scatter: f32,
    /// Monster speed stats roll uniformly in `[speed_min, speed_max)`.
    pub monster_speed_min: f32,
    pub monster_speed_max: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            player_speed: DEFAULT_PLAYER_SPEED,
            player_attack_rate: DEFAULT_PLAYER_ATTACK_RATE,
            monster_count: DEFAULT_MONSTER_COUNT,
            monster_min_dist: DEFAULT_MONSTER_MIN_DIST,
            monster_scatter: DEFAULT_MONSTER_SCATTER,
            monster_speed_min: DEFAULT_MONSTER_SPEED_MIN,
            monster_speed_max: DEFAULT_MONSTER_SPEED_MAX,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { config_path: path.into(), ..Self::new() }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(rate) = config.getfloat("player", "attack_rate").ok().flatten() {
            self.player_attack_rate = rate as f32;
        }

        // [monsters] section
        if let Some(count) = config.getuint("monsters", "count").ok().flatten() {
            self.monster_count = count as u32;
        }
        if let Some(dist) = config.getfloat("monsters", "min_dist_to_player").ok().flatten() {
            self.monster_min_dist = dist as f32;
        }
        if let Some(scatter) = config.getfloat("monsters", "scatter").ok().flatten() {
            self.monster_scatter = scatter as f32;
        }
        if let Some(min) = config.getfloat("monsters", "speed_min").ok().flatten() {
            self.monster_speed_min = min as f32;
        }
        if let Some(max) = config.getfloat("monsters", "speed_max").ok().flatten() {
            self.monster_speed_max = max as f32;
        }

        info!(
            "Loaded config: player speed={} attack_rate={}, monsters count={} min_dist={} scatter={}",
            self.player_speed,
            self.player_attack_rate,
            self.monster_count,
            self.monster_min_dist,
            self.monster_scatter
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.player_speed, 8.0);
        assert_eq!(config.player_attack_rate, 1.0);
        assert_eq!(config.monster_count, 5);
        assert_eq!(config.monster_min_dist, 50.0);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/lpcquest.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player_speed, 8.0);
        assert_eq!(config.monster_count, 5);
    }
}
