use super::board::{Board, CellKind, ContributionMode};
use super::error::PlacementError;
use super::rng::SeededRng;
use super::state::{Position, Snake};

/// Pick the next food cell.
///
/// Candidates are the traversable cells not covered by the snake, in row-major
/// order. In `food` mode the draw is weighted by intensity and restricted to
/// contribution cells while any remain; every other case draws uniformly.
pub fn place(
    board: &Board,
    snake: &Snake,
    rng: &mut SeededRng,
) -> Result<Position, PlacementError> {
    let candidates: Vec<Position> = board
        .empty_positions()
        .into_iter()
        .filter(|&pos| !snake.contains(pos))
        .collect();

    if candidates.is_empty() {
        return Err(PlacementError::BoardFull);
    }

    if board.mode() == ContributionMode::Food {
        let weights: Vec<u32> = candidates
            .iter()
            .map(|&pos| match board.cell_at(pos) {
                Some(CellKind::Contribution(intensity)) => u32::from(intensity),
                _ => 0,
            })
            .collect();
        if let Some(idx) = rng.weighted_index(&weights) {
            return Ok(candidates[idx]);
        }
    }

    Ok(candidates[rng.index(candidates.len())])
}
