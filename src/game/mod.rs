//! Core simulation for the contribution snake
//!
//! This module contains the board, the snake and the tick engine without any
//! I/O or rendering dependencies. Runs are pure functions of their
//! configuration, intensity grid and seed.

pub mod action;
pub mod board;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod rng;
pub mod spawn;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use board::{Board, CellKind, ContributionMode, MAX_INTENSITY};
pub use collision::CollisionKind;
pub use config::{GameConfig, SpawnPosition};
pub use engine::{simulate, GameEngine};
pub use error::{PlacementError, SetupError};
pub use rng::{Seed, SeededRng};
pub use state::{GameState, GameStatus, Position, Snake};
