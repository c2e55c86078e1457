use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controller used to steer the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiStrategy {
    /// Head straight for the food, no lookahead
    Greedy,
    /// Shortest path to food, guarded by a trap check
    #[default]
    BfsSafe,
    /// Maximize room to move, ignore food
    Survival,
    /// Like `BfsSafe`, but favors paths over busy contribution cells
    CommitHunter,
}

impl AiStrategy {
    pub const ALL: [AiStrategy; 4] = [
        AiStrategy::Greedy,
        AiStrategy::BfsSafe,
        AiStrategy::Survival,
        AiStrategy::CommitHunter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AiStrategy::Greedy => "greedy",
            AiStrategy::BfsSafe => "bfs_safe",
            AiStrategy::Survival => "survival",
            AiStrategy::CommitHunter => "commit_hunter",
        }
    }
}

impl fmt::Display for AiStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AiStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown AI strategy '{}'", s))
    }
}
