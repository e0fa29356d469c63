use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::Position;

/// Configuration for the game
///
/// Every tunable the engine uses lives here so tests can shrink the board or
/// change the progression without touching engine code. Missing fields in a
/// config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board, in cells
    pub tile_count: usize,
    /// Tick interval at the start of a run, in milliseconds
    pub base_speed_ms: u64,
    /// Points awarded per food eaten
    pub score_per_food: u32,
    /// How much the tick interval shrinks per food eaten
    pub speed_step_ms: u64,
    /// Floor for the tick interval
    pub min_speed_ms: u64,
    /// Random samples tried before food is placed regardless of the snake
    pub max_food_attempts: u32,
    /// Cell the single-segment snake starts on
    pub start_position: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            base_speed_ms: 150,
            score_per_food: 10,
            speed_step_ms: 1,
            min_speed_ms: 50,
            max_food_attempts: 100,
            start_position: Position::new(10, 10),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    ///
    /// The start position is moved to the centre of the board.
    pub fn new(tile_count: usize) -> Self {
        Self::default().with_tile_count(tile_count)
    }

    /// Resize the board, re-centring the start position
    pub fn with_tile_count(self, tile_count: usize) -> Self {
        let center = (tile_count / 2) as i32;
        Self {
            tile_count,
            start_position: Position::new(center, center),
            ..self
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a JSON file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse game config")?;
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid game config in {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_count < 2 {
            return Err(format!(
                "tile_count must be at least 2, got {}",
                self.tile_count
            ));
        }

        if self.tile_count > i32::MAX as usize {
            return Err(format!("tile_count is too large: {}", self.tile_count));
        }

        let n = self.tile_count as i32;
        let Position { x, y } = self.start_position;
        if !(0..n).contains(&x) || !(0..n).contains(&y) {
            return Err(format!(
                "start_position ({}, {}) is outside the {}x{} board",
                x, y, n, n
            ));
        }

        if self.base_speed_ms == 0 {
            return Err("base_speed_ms must be at least 1".to_string());
        }

        if self.min_speed_ms == 0 {
            return Err("min_speed_ms must be at least 1".to_string());
        }

        if self.score_per_food == 0 {
            return Err("score_per_food must be at least 1".to_string());
        }

        if self.max_food_attempts == 0 {
            return Err("max_food_attempts must be at least 1".to_string());
        }

        Ok(())
    }
}
