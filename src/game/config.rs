use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::board::ContributionMode;
use super::error::SetupError;
use super::rng::Seed;
use crate::ai::AiStrategy;

/// Where the snake's head is placed when a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPosition {
    /// Near the left third of the middle rows
    #[default]
    Left,
    /// As close to the board center as the body allows
    Center,
    /// Bottom rows first, centered horizontally
    BottomCenter,
    /// Any fitting cell of the lower half, drawn from the seeded RNG
    LowerHalfRandom,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    #[serde(rename = "width")]
    pub grid_width: usize,
    /// Height of the game grid
    #[serde(rename = "height")]
    pub grid_height: usize,
    /// How contribution intensity shapes the board
    pub contribution_mode: ContributionMode,
    /// Intensity at or above which a cell becomes a wall in `walls` mode.
    /// A threshold of 5 disables walls entirely.
    pub wall_threshold: u8,
    /// Initial length of the snake
    #[serde(rename = "initial_length")]
    pub initial_snake_length: usize,
    /// Hard cap on simulated ticks
    pub max_ticks: u32,
    /// Controller used to steer the snake
    pub ai_strategy: AiStrategy,
    /// Seed for food placement and random spawns; `None` draws one from entropy
    pub seed: Option<Seed>,
    /// Initial placement of the snake
    pub spawn_position: SpawnPosition,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 52,
            grid_height: 7,
            contribution_mode: ContributionMode::Walls,
            wall_threshold: 3,
            initial_snake_length: 3,
            max_ticks: 500,
            ai_strategy: AiStrategy::BfsSafe,
            seed: None,
            spawn_position: SpawnPosition::Left,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small seeded grid for testing
    pub fn small() -> Self {
        Self {
            seed: Some(Seed::Number(42)),
            ..Self::new(10, 10)
        }
    }

    /// Read a configuration from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&raw).context("Failed to parse game configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the engine relies on
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SetupError::InvalidConfig("grid dimensions must be positive"));
        }
        if self.wall_threshold > 5 {
            return Err(SetupError::InvalidConfig("wall_threshold must be within 0..=5"));
        }
        if self.initial_snake_length == 0 {
            return Err(SetupError::InvalidConfig("initial_length must be at least 1"));
        }
        if self.max_ticks == 0 {
            return Err(SetupError::InvalidConfig("max_ticks must be at least 1"));
        }
        Ok(())
    }
}
