//! Board construction from a contribution intensity grid.
//!
//! The board is classified once, when it is built, and never changes
//! afterwards. Everything that varies during a run (snake, food, score) lives
//! in the engine.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::state::Position;

/// Highest intensity a contribution calendar reports
pub const MAX_INTENSITY: u8 = 4;

/// How contribution intensity shapes the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionMode {
    /// Busy days become walls
    #[default]
    Walls,
    /// Busy days attract food
    Food,
    /// Busy days are tagged as pace modifiers for the renderer
    Speed,
}

/// Classification of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellKind {
    Empty,
    Wall,
    /// Traversable cell tagged with its non-zero intensity
    Contribution(u8),
}

impl CellKind {
    /// Classify one intensity value
    pub fn classify(intensity: u8, mode: ContributionMode, wall_threshold: u8) -> Self {
        match mode {
            ContributionMode::Walls if intensity >= wall_threshold => CellKind::Wall,
            ContributionMode::Walls => CellKind::Empty,
            ContributionMode::Food | ContributionMode::Speed if intensity > 0 => {
                CellKind::Contribution(intensity)
            }
            ContributionMode::Food | ContributionMode::Speed => CellKind::Empty,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, CellKind::Wall)
    }
}

/// Immutable game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    mode: ContributionMode,
    cells: Vec<CellKind>,
    intensities: Vec<u8>,
}

impl Board {
    /// Build a board from rows of intensities (row index = y, column index = x)
    pub fn build(
        grid: &[Vec<u8>],
        mode: ContributionMode,
        wall_threshold: u8,
    ) -> Result<Self, SetupError> {
        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(SetupError::InvalidDimensions("grid is empty".to_string()));
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut intensities = Vec::with_capacity(width * height);
        for (row, values) in grid.iter().enumerate() {
            if values.len() != width {
                return Err(SetupError::InvalidDimensions(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    width
                )));
            }
            for (column, &value) in values.iter().enumerate() {
                if value > MAX_INTENSITY {
                    return Err(SetupError::InvalidIntensity { row, column, value });
                }
                cells.push(CellKind::classify(value, mode, wall_threshold));
                intensities.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            mode,
            cells,
            intensities,
        })
    }

    /// A wall-free board of zero intensity
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            mode: ContributionMode::Walls,
            cells: vec![CellKind::Empty; width * height],
            intensities: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> ContributionMode {
        self.mode
    }

    /// Number of cells, walls included
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Classification of a cell, `None` outside the grid
    pub fn cell_at(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Raw calendar intensity of a cell, 0 outside the grid
    pub fn intensity_at(&self, pos: Position) -> u8 {
        self.index(pos).map_or(0, |idx| self.intensities[idx])
    }

    /// True for walls and for anything off the grid
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cell_at(pos).map_or(true, |cell| cell.is_wall())
    }

    /// Every traversable position in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_wall())
            .map(|(idx, _)| Position::new((idx % self.width) as i32, (idx / self.width) as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Vec<Vec<u8>> {
        rows.iter().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn test_walls_mode_thresholds() {
        let board = Board::build(&grid(&[&[0, 2, 3], &[4, 1, 0]]), ContributionMode::Walls, 3)
            .unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.cell_at(Position::new(1, 0)), Some(CellKind::Empty));
        assert_eq!(board.cell_at(Position::new(2, 0)), Some(CellKind::Wall));
        assert_eq!(board.cell_at(Position::new(0, 1)), Some(CellKind::Wall));
        assert_eq!(board.intensity_at(Position::new(1, 0)), 2);
        assert!(board.is_blocked(Position::new(2, 0)));
        assert!(!board.is_blocked(Position::new(1, 1)));
    }

    #[test]
    fn test_food_mode_tags_contributions() {
        let board =
            Board::build(&grid(&[&[0, 4], &[1, 0]]), ContributionMode::Food, 3).unwrap();

        assert_eq!(board.cell_at(Position::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(board.cell_at(Position::new(1, 0)), Some(CellKind::Contribution(4)));
        assert_eq!(board.cell_at(Position::new(0, 1)), Some(CellKind::Contribution(1)));
        // Nothing is a wall outside walls mode
        assert_eq!(board.empty_positions().len(), 4);
    }

    #[test]
    fn test_speed_mode_tags_contributions() {
        let board =
            Board::build(&grid(&[&[0, 3], &[4, 2]]), ContributionMode::Speed, 0).unwrap();

        assert_eq!(board.cell_at(Position::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(board.cell_at(Position::new(1, 0)), Some(CellKind::Contribution(3)));
        assert_eq!(board.cell_at(Position::new(0, 1)), Some(CellKind::Contribution(4)));
        assert_eq!(board.cell_at(Position::new(1, 1)), Some(CellKind::Contribution(2)));
        // A zero threshold only matters in walls mode
        assert!(!board.is_blocked(Position::new(0, 1)));
        assert_eq!(board.empty_positions().len(), 4);
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(matches!(
            Board::build(&[], ContributionMode::Walls, 3),
            Err(SetupError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Board::build(&[vec![]], ContributionMode::Walls, 3),
            Err(SetupError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Board::build(&grid(&[&[0, 0], &[0]]), ContributionMode::Walls, 3),
            Err(SetupError::InvalidDimensions(_))
        ));
        assert_eq!(
            Board::build(&grid(&[&[0, 7]]), ContributionMode::Walls, 3),
            Err(SetupError::InvalidIntensity {
                row: 0,
                column: 1,
                value: 7
            })
        );
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let board = Board::blank(4, 3);
        assert!(board.is_blocked(Position::new(-1, 0)));
        assert!(board.is_blocked(Position::new(4, 0)));
        assert!(board.is_blocked(Position::new(0, 3)));
        assert_eq!(board.cell_at(Position::new(0, -1)), None);
        assert_eq!(board.intensity_at(Position::new(9, 9)), 0);
    }

    #[test]
    fn test_empty_positions_row_major_without_walls() {
        let board = Board::build(&grid(&[&[0, 4], &[0, 0]]), ContributionMode::Walls, 4).unwrap();
        assert_eq!(
            board.empty_positions(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_cell_classification_is_stable() {
        let board = Board::build(&grid(&[&[3, 0, 1]]), ContributionMode::Walls, 3).unwrap();
        for x in 0..3 {
            let pos = Position::new(x, 0);
            assert_eq!(board.cell_at(pos), board.cell_at(pos));
        }
    }
}
