use super::run_stats::RunStats;
use crate::game::GameStatus;

/// Running tally across many runs, e.g. a seed sweep
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameMetrics {
    pub games_played: u32,
    pub high_score: u32,
    pub wins: u32,
    pub collisions: u32,
    pub timeouts: u32,
    total_score: u64,
    total_ticks: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_game_over(&mut self, stats: &RunStats) {
        self.games_played += 1;
        self.high_score = self.high_score.max(stats.score);
        self.total_score += u64::from(stats.score);
        self.total_ticks += u64::from(stats.ticks);
        match stats.status {
            GameStatus::Won => self.wins += 1,
            GameStatus::Collision(_) => self.collisions += 1,
            GameStatus::Timeout => self.timeouts += 1,
            GameStatus::Running => {}
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / f64::from(self.games_played)
    }

    pub fn average_ticks(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_ticks as f64 / f64::from(self.games_played)
    }

    /// One-line summary, e.g. for a log line after a sweep
    pub fn format_summary(&self) -> String {
        format!(
            "games: {} | high score: {} | avg score: {:.2} | won: {} | crashed: {} | timed out: {}",
            self.games_played,
            self.high_score,
            self.average_score(),
            self.wins,
            self.collisions,
            self.timeouts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CollisionKind;

    fn stats(score: u32, ticks: u32, status: GameStatus) -> RunStats {
        RunStats {
            ticks,
            score,
            final_length: 3 + score as usize,
            status,
            food_per_tick: 0.0,
            longest_hungry_stretch: 0,
        }
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(&stats(10, 100, GameStatus::Timeout));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(&stats(5, 40, GameStatus::Collision(CollisionKind::SelfCollision)));
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(&stats(15, 60, GameStatus::Won));
        assert_eq!(metrics.high_score, 15); // Should update
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_outcome_counts_and_averages() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.average_score(), 0.0);

        metrics.on_game_over(&stats(2, 10, GameStatus::Won));
        metrics.on_game_over(&stats(4, 30, GameStatus::Timeout));

        assert_eq!(metrics.wins, 1);
        assert_eq!(metrics.timeouts, 1);
        assert_eq!(metrics.collisions, 0);
        assert_eq!(metrics.average_score(), 3.0);
        assert_eq!(metrics.average_ticks(), 20.0);
        assert!(metrics.format_summary().contains("games: 2"));
    }
}
