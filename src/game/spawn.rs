use super::action::Direction;
use super::board::Board;
use super::config::SpawnPosition;
use super::error::SetupError;
use super::rng::SeededRng;
use super::state::{Position, Snake};

/// Place the initial snake, heading right with its body trailing left.
///
/// Candidate head cells are tried in the order the spawn strategy dictates,
/// followed by every cell in row-major order; the first cell where the whole
/// body fits wins.
pub fn spawn_snake(
    board: &Board,
    spawn: SpawnPosition,
    length: usize,
    rng: &mut SeededRng,
) -> Result<Snake, SetupError> {
    let (width, height) = (board.width() as i32, board.height() as i32);
    let all_cells = || (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)));

    let mut candidates: Vec<Position> = match spawn {
        SpawnPosition::Left => {
            let first_column = length as i32 - 1;
            let last_column = (width / 3).max(first_column).min(width - 1);
            let rows = (height / 2 - 2).max(0)..=(height / 2 + 2).min(height - 1);
            rows.flat_map(|y| (first_column..=last_column).map(move |x| Position::new(x, y)))
                .collect()
        }
        SpawnPosition::Center => {
            let center = Position::new(width / 2, height / 2);
            let mut cells: Vec<Position> = all_cells().collect();
            cells.sort_by_key(|pos| (pos.manhattan(center), pos.y, pos.x));
            cells
        }
        SpawnPosition::BottomCenter => {
            let middle = width / 2;
            (height / 2..height)
                .rev()
                .flat_map(|y| {
                    let mut row: Vec<Position> = (0..width).map(|x| Position::new(x, y)).collect();
                    row.sort_by_key(|pos| (pos.x.abs_diff(middle), pos.x));
                    row
                })
                .collect()
        }
        SpawnPosition::LowerHalfRandom => {
            let mut cells: Vec<Position> = all_cells().filter(|pos| pos.y >= height / 2).collect();
            rng.shuffle(&mut cells);
            cells
        }
    };
    candidates.extend(all_cells());

    candidates
        .into_iter()
        .find_map(|head| Snake::new(board, head, Direction::Right, length).ok())
        .ok_or(SetupError::InsufficientSpace { length })
}
