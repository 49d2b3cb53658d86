use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::Position;

/// Cells per row and column
pub const DEFAULT_TILE_COUNT: i32 = 30;
pub const FOOD_REWARD: u32 = 10;
pub const MAX_SHADOW_TRAIL: usize = 5;
pub const SHADOW_OPACITY_DECAY: f32 = 0.2;
pub const TICK_INTERVAL_MS: u64 = 100;
pub const PLAYER1_START: Position = Position { x: 10, y: 10 };
pub const PLAYER2_START: Position = Position { x: 20, y: 20 };
pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

/// Configuration for the game
///
/// Loaded once at startup and fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles along each side of the square grid
    pub tile_count: i32,
    /// Score added per food eaten
    pub food_reward: u32,
    /// Maximum number of vacated cells kept in a shadow trail
    pub max_shadow_trail: usize,
    /// Opacity lost per step of shadow trail age
    pub shadow_opacity_decay: f32,
    /// Period of the tick scheduler in milliseconds
    pub tick_interval_ms: u64,
    /// Initial head of player 1
    pub player1_start: Position,
    /// Initial head of player 2
    pub player2_start: Position,
    /// Samples allowed per food before spawning gives up for the tick
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            food_reward: FOOD_REWARD,
            max_shadow_trail: MAX_SHADOW_TRAIL,
            shadow_opacity_decay: SHADOW_OPACITY_DECAY,
            tick_interval_ms: TICK_INTERVAL_MS,
            player1_start: PLAYER1_START,
            player2_start: PLAYER2_START,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom tile count
    pub fn new(tile_count: i32) -> Self {
        Self {
            tile_count,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    ///
    /// Start positions are pulled in so that both snakes fit.
    pub fn small() -> Self {
        Self {
            tile_count: 10,
            player1_start: Position::new(2, 2),
            player2_start: Position::new(7, 7),
            ..Default::default()
        }
    }

    /// Read a JSON configuration file and validate it
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&raw).context("Failed to deserialize config")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Returns the first problem found as a message.
    pub fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.tile_count) {
            return Err(format!(
                "tile_count must be in [5, 100], got {}",
                self.tile_count
            ));
        }

        for (name, start) in [
            ("player1_start", self.player1_start),
            ("player2_start", self.player2_start),
        ] {
            let inside = (0..self.tile_count).contains(&start.x)
                && (0..self.tile_count).contains(&start.y);
            if !inside {
                return Err(format!(
                    "{} ({}, {}) is outside a {}x{} grid",
                    name, start.x, start.y, self.tile_count, self.tile_count
                ));
            }
        }

        if self.player1_start == self.player2_start {
            return Err("player1_start and player2_start must differ".to_string());
        }

        if self.food_reward == 0 {
            return Err("food_reward must be positive".to_string());
        }

        if self.max_shadow_trail == 0 {
            return Err("max_shadow_trail must be at least 1".to_string());
        }

        if self.shadow_opacity_decay <= 0.0 || self.shadow_opacity_decay > 1.0 {
            return Err(format!(
                "shadow_opacity_decay must be in (0, 1], got {}",
                self.shadow_opacity_decay
            ));
        }

        if !(20..=2000).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be in [20, 2000], got {}",
                self.tick_interval_ms
            ));
        }

        if self.max_spawn_attempts == 0 {
            return Err("max_spawn_attempts must be at least 1".to_string());
        }

        Ok(())
    }
}
