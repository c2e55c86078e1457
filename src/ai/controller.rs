use super::pathfinding::{
    first_step_towards, legal_moves, move_safety, tail_reachable_after, PathCost,
};
use super::strategy::AiStrategy;
use crate::game::{Board, Direction, Position, Snake};

/// Choose the next heading for `snake`.
///
/// Pure and total: the same inputs always give the same heading, and when
/// every move is blocked the current heading comes back unchanged so the
/// engine's collision check ends the run.
pub fn decide(
    board: &Board,
    snake: &Snake,
    food: Option<Position>,
    strategy: AiStrategy,
) -> Direction {
    let moves = legal_moves(board, snake);
    if moves.is_empty() {
        return snake.direction();
    }

    match strategy {
        AiStrategy::Greedy => greedy(snake, food, &moves),
        AiStrategy::BfsSafe => hunt(board, snake, food, &moves, PathCost::Uniform),
        AiStrategy::CommitHunter => hunt(board, snake, food, &moves, PathCost::Intensity),
        AiStrategy::Survival => survive(board, snake, food, &moves),
    }
}

/// Legal heading closest to the food by Manhattan distance
fn greedy(snake: &Snake, food: Option<Position>, moves: &[Direction]) -> Direction {
    let Some(food) = food else {
        return moves[0];
    };

    // min_by_key keeps the first minimum, which is the priority order
    moves
        .iter()
        .copied()
        .min_by_key(|&direction| snake.head().moved_in_direction(direction).manhattan(food))
        .unwrap_or(moves[0])
}

/// Follow the shortest path to food unless the step walks into a trap
fn hunt(
    board: &Board,
    snake: &Snake,
    food: Option<Position>,
    moves: &[Direction],
    cost: PathCost,
) -> Direction {
    let Some(target) = food else {
        return escape(board, snake, food, moves);
    };

    if let Some(step) = first_step_towards(board, snake, target, cost) {
        let eats = snake.head().moved_in_direction(step) == target;
        let length_after = snake.len() + usize::from(eats);
        if moves.contains(&step)
            && move_safety(board, snake, step, food) >= length_after
            && tail_reachable_after(board, snake, step, food)
        {
            return step;
        }
    }

    escape(board, snake, food, moves)
}

/// Move that leaves the most room
fn survive(
    board: &Board,
    snake: &Snake,
    food: Option<Position>,
    moves: &[Direction],
) -> Direction {
    best_by(moves, |direction| move_safety(board, snake, direction, food))
}

/// Fallback for the hunters: keep the tail in reach first, then the most room
fn escape(
    board: &Board,
    snake: &Snake,
    food: Option<Position>,
    moves: &[Direction],
) -> Direction {
    best_by(moves, |direction| {
        (
            tail_reachable_after(board, snake, direction, food),
            move_safety(board, snake, direction, food),
        )
    })
}

/// Highest-ranked move, first in priority order on ties
fn best_by<K: Ord>(moves: &[Direction], mut rank: impl FnMut(Direction) -> K) -> Direction {
    let mut best = moves[0];
    let mut best_rank = None;
    for &direction in moves {
        let current = rank(direction);
        if best_rank.as_ref().map_or(true, |top| current > *top) {
            best = direction;
            best_rank = Some(current);
        }
    }
    best
}
