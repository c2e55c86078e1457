//! Grid searches used by the controller.
//!
//! All searches expand neighbors in [`Direction::PRIORITY`] order, which makes
//! every result a pure function of the board and snake.

use std::collections::VecDeque;

use crate::game::collision::classify;
use crate::game::{Board, Direction, Position, Snake};

/// How path length ties are broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCost {
    /// First path found in priority order
    Uniform,
    /// Among equally short paths, the one crossing the most intensity
    Intensity,
}

/// Headings that are not a reversal and do not collide this tick, in priority order
pub fn legal_moves(board: &Board, snake: &Snake) -> Vec<Direction> {
    Direction::PRIORITY
        .into_iter()
        .filter(|&direction| !snake.direction().is_opposite(direction))
        .filter(|&direction| {
            classify(board, snake, snake.head().moved_in_direction(direction)).is_none()
        })
        .collect()
}

fn mask(board: &Board, cells: &[Position]) -> Vec<bool> {
    let mut blocked = vec![false; board.area()];
    for &pos in cells {
        if let Some(idx) = board.index(pos) {
            blocked[idx] = true;
        }
    }
    blocked
}

fn is_open(board: &Board, blocked: &[bool], pos: Position) -> bool {
    match board.index(pos) {
        Some(idx) => !blocked[idx] && !board.is_blocked(pos),
        None => false,
    }
}

/// Body right after stepping onto `next`, head first
fn body_after(snake: &Snake, next: Position, eats: bool) -> Vec<Position> {
    let keep = if eats || snake.is_growing() {
        snake.len()
    } else {
        snake.len() - 1
    };
    std::iter::once(next).chain(snake.segments().take(keep)).collect()
}

/// Number of open cells connected to `start`, `start` included
pub fn flood_fill(board: &Board, start: Position, blocked: &[bool]) -> usize {
    if !is_open(board, blocked, start) {
        return 0;
    }

    let mut visited = vec![false; board.area()];
    let mut queue = VecDeque::new();
    if let Some(idx) = board.index(start) {
        visited[idx] = true;
    }
    queue.push_back(start);

    let mut count = 0;
    while let Some(current) = queue.pop_front() {
        count += 1;
        for direction in Direction::PRIORITY {
            let neighbor = current.moved_in_direction(direction);
            if !is_open(board, blocked, neighbor) {
                continue;
            }
            if let Some(idx) = board.index(neighbor) {
                if !visited[idx] {
                    visited[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    count
}

/// Room left after moving in `direction`: the flood-fill area from the new
/// head with the moved body blocked
pub fn move_safety(
    board: &Board,
    snake: &Snake,
    direction: Direction,
    food: Option<Position>,
) -> usize {
    let next = snake.head().moved_in_direction(direction);
    let body = body_after(snake, next, food == Some(next));
    flood_fill(board, next, &mask(board, &body[1..]))
}

/// Whether the head can still reach the tail after moving in `direction`.
///
/// A snake that can follow its own tail always has a way out.
pub fn tail_reachable_after(
    board: &Board,
    snake: &Snake,
    direction: Direction,
    food: Option<Position>,
) -> bool {
    let next = snake.head().moved_in_direction(direction);
    let body = body_after(snake, next, food == Some(next));
    let tail = body[body.len() - 1];
    if tail == next {
        return true;
    }

    let blocked = mask(board, &body[1..body.len() - 1]);
    let mut visited = vec![false; board.area()];
    let mut queue = VecDeque::from([next]);
    if let Some(idx) = board.index(next) {
        visited[idx] = true;
    }

    while let Some(current) = queue.pop_front() {
        for direction in Direction::PRIORITY {
            let neighbor = current.moved_in_direction(direction);
            if neighbor == tail {
                return true;
            }
            if !is_open(board, &blocked, neighbor) {
                continue;
            }
            if let Some(idx) = board.index(neighbor) {
                if !visited[idx] {
                    visited[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    false
}

/// First heading of the shortest path from the head to `target`.
///
/// The body blocks the search except for a tail that vacates this tick. The
/// head never expands backwards into its own neck.
pub fn first_step_towards(
    board: &Board,
    snake: &Snake,
    target: Position,
    cost: PathCost,
) -> Option<Direction> {
    let head = snake.head();
    let (head_idx, target_idx) = (board.index(head)?, board.index(target)?);
    if head == target {
        return None;
    }

    let keep = if snake.is_growing() {
        snake.len()
    } else {
        snake.len() - 1
    };
    let solid: Vec<Position> = snake.segments().take(keep).collect();
    let blocked = mask(board, &solid);

    let mut dist = vec![u32::MAX; board.area()];
    let mut gain = vec![0u32; board.area()];
    let mut first: Vec<Option<Direction>> = vec![None; board.area()];
    let mut queue = VecDeque::from([head]);
    dist[head_idx] = 0;

    while let Some(current) = queue.pop_front() {
        if current == target {
            break;
        }
        let Some(current_idx) = board.index(current) else {
            continue;
        };

        for direction in Direction::PRIORITY {
            if current == head && snake.direction().is_opposite(direction) {
                continue;
            }
            let neighbor = current.moved_in_direction(direction);
            if !is_open(board, &blocked, neighbor) {
                continue;
            }
            let Some(idx) = board.index(neighbor) else {
                continue;
            };

            let step_gain = match cost {
                PathCost::Uniform => 0,
                PathCost::Intensity => u32::from(board.intensity_at(neighbor)),
            };
            let candidate_gain = gain[current_idx] + step_gain;
            let candidate_first = first[current_idx].or(Some(direction));

            if dist[idx] == u32::MAX {
                dist[idx] = dist[current_idx] + 1;
                gain[idx] = candidate_gain;
                first[idx] = candidate_first;
                queue.push_back(neighbor);
            } else if dist[idx] == dist[current_idx] + 1 && candidate_gain > gain[idx] {
                // Same layer, not expanded yet: take the richer route
                gain[idx] = candidate_gain;
                first[idx] = candidate_first;
            }
        }
    }

    first[target_idx]
}
