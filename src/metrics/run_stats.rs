//! Summary of one finished run, computed from its snapshots

use serde::Serialize;

use crate::game::{GameState, GameStatus};

/// Statistics for a single run
///
/// # Example
///
/// ```rust
/// use contrib_snake::game::{simulate, GameConfig, Seed};
/// use contrib_snake::metrics::RunStats;
///
/// let config = GameConfig {
///     seed: Some(Seed::from("docs")),
///     max_ticks: 50,
///     ..GameConfig::new(12, 7)
/// };
/// let snapshots = simulate(config, &vec![vec![0; 12]; 7]).unwrap();
/// let stats = RunStats::from_snapshots(&snapshots).unwrap();
/// assert!(stats.ticks <= 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    /// Ticks executed
    pub ticks: u32,
    /// Food eaten
    pub score: u32,
    pub final_length: usize,
    pub status: GameStatus,
    /// Food eaten per executed tick
    pub food_per_tick: f64,
    /// Longest run of ticks between two meals (or from the start / to the end)
    pub longest_hungry_stretch: u32,
}

impl RunStats {
    /// Summarize a run; `None` when there are no snapshots
    pub fn from_snapshots(snapshots: &[GameState]) -> Option<Self> {
        let first = snapshots.first()?;
        let last = snapshots.last()?;

        let mut last_meal = first.tick;
        let mut longest = 0;
        let mut previous_score = first.score;
        for state in snapshots {
            if state.score > previous_score {
                longest = longest.max(state.tick - last_meal);
                last_meal = state.tick;
                previous_score = state.score;
            }
        }
        longest = longest.max(last.tick - last_meal);

        let food_per_tick = if last.tick == 0 {
            0.0
        } else {
            f64::from(last.score) / f64::from(last.tick)
        };

        Some(Self {
            ticks: last.tick,
            score: last.score,
            final_length: last.snake.len(),
            status: last.status,
            food_per_tick,
            longest_hungry_stretch: longest,
        })
    }

    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }
}
