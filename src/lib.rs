//! Contrib Snake - an autopiloted snake that plays across a contribution grid
//!
//! This library provides:
//! - Core simulation: board, snake, collision, food and the tick engine (game module)
//! - Steering strategies for the snake (ai module)
//! - Loading, resampling and sampling of contribution grids (contributions module)
//! - Summary statistics over a finished run (metrics module)

pub mod ai;
pub mod contributions;
pub mod game;
pub mod metrics;
