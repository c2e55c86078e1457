//! Autopilot for the snake.
//!
//! The controller is a pure decision function over the board, the snake and
//! the current food. It never draws random numbers; the engine owns the RNG.

pub mod controller;
pub mod pathfinding;
pub mod strategy;

pub use controller::decide;
pub use pathfinding::{flood_fill, legal_moves, PathCost};
pub use strategy::AiStrategy;
