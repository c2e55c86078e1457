use serde::Serialize;

use super::board::Board;
use super::state::{Position, Snake};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKind {
    /// Snake left the grid
    Boundary,
    /// Snake ran into a wall cell
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Classify moving the head of `snake` onto `candidate`.
///
/// Checks run boundary, then wall, then body. The tail only counts as body
/// while the snake is growing; otherwise it vacates during the same move.
pub fn classify(board: &Board, snake: &Snake, candidate: Position) -> Option<CollisionKind> {
    if !board.in_bounds(candidate) {
        return Some(CollisionKind::Boundary);
    }

    if board.is_blocked(candidate) {
        return Some(CollisionKind::Wall);
    }

    let solid = if snake.is_growing() {
        snake.len()
    } else {
        snake.len() - 1
    };
    if snake.segments().take(solid).any(|pos| pos == candidate) {
        return Some(CollisionKind::SelfCollision);
    }

    None
}
