use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;

use super::action::Direction;
use super::board::Board;
use super::collision::CollisionKind;
use super::error::SetupError;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn manhattan(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Heading that steps from self onto an adjacent `other`
    pub fn direction_to(&self, other: Position) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|&direction| self.moved_in_direction(direction) == other)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Position>,
    /// Current direction of movement
    direction: Direction,
    /// Moves left during which the tail stays put
    pending_growth: u32,
}

impl Snake {
    /// Lay out a straight snake of `length` cells with its body trailing behind `head`
    pub fn new(
        board: &Board,
        head: Position,
        direction: Direction,
        length: usize,
    ) -> Result<Self, SetupError> {
        if length == 0 {
            return Err(SetupError::InsufficientSpace { length });
        }

        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        for _ in 0..length {
            if board.is_blocked(segment) {
                return Err(SetupError::InsufficientSpace { length });
            }
            body.push_back(segment);
            segment = segment.moved_by(-dx, -dy);
        }

        Ok(Self {
            body,
            direction,
            pending_growth: 0,
        })
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Segments must be distinct, grid-adjacent and on traversable cells.
    pub fn from_segments(
        board: &Board,
        segments: &[Position],
        direction: Direction,
    ) -> Result<Self, SetupError> {
        if segments.is_empty() {
            return Err(SetupError::InsufficientSpace { length: 0 });
        }
        if segments.iter().any(|&pos| board.is_blocked(pos)) {
            return Err(SetupError::InsufficientSpace {
                length: segments.len(),
            });
        }
        let adjacent = segments.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1);
        let distinct = segments
            .iter()
            .enumerate()
            .all(|(i, pos)| !segments[..i].contains(pos));
        if !adjacent || !distinct {
            return Err(SetupError::InvalidConfig(
                "snake segments must be distinct and adjacent",
            ));
        }

        Ok(Self {
            body: segments.iter().copied().collect(),
            direction,
            pending_growth: 0,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// True when the next move keeps the tail in place
    pub fn is_growing(&self) -> bool {
        self.pending_growth > 0
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }

    /// Check if a position is occupied by any segment
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Heading actually taken for a request; reversals keep the current heading
    pub fn resolve_heading(&self, requested: Direction) -> Direction {
        if self.direction.is_opposite(requested) {
            self.direction
        } else {
            requested
        }
    }

    /// Where the head would land, without moving
    pub fn propose_move(&self, requested: Direction) -> Position {
        self.head()
            .moved_in_direction(self.resolve_heading(requested))
    }

    /// Schedule `amount` extra segments; the engine pairs this with `apply_move(_, true)`
    pub(crate) fn grant_growth(&mut self, amount: u32) {
        self.pending_growth += amount;
    }

    /// Advance onto `next_head`, keeping the tail when `grew` is set
    pub fn apply_move(&mut self, next_head: Position, grew: bool) {
        if let Some(direction) = self.head().direction_to(next_head) {
            self.direction = direction;
        }
        self.body.push_front(next_head);

        if grew {
            self.pending_growth = self.pending_growth.saturating_sub(1);
        } else {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    /// No free cell is left for food
    Won,
    /// The last move hit something
    Collision(CollisionKind),
    /// The tick cap was reached first
    Timeout,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Immutable snapshot of one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    #[serde(skip)]
    pub board: Arc<Board>,
    /// Head first
    pub snake: Vec<Position>,
    pub heading: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub tick: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.manhattan(Position::new(2, 7)), 5);
        assert_eq!(pos.direction_to(Position::new(5, 4)), Some(Direction::Up));
        assert_eq!(pos.direction_to(Position::new(7, 5)), None);
    }

    #[test]
    fn test_snake_creation() {
        let board = Board::blank(10, 10);
        let snake = Snake::new(&board, Position::new(5, 5), Direction::Right, 3).unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(
            snake.positions(),
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_creation_needs_space() {
        let board = Board::blank(5, 5);
        assert_eq!(
            Snake::new(&board, Position::new(1, 2), Direction::Right, 3),
            Err(SetupError::InsufficientSpace { length: 3 })
        );
        assert!(Snake::new(&board, Position::new(2, 2), Direction::Right, 3).is_ok());
        assert!(Snake::new(&board, Position::new(2, 2), Direction::Right, 0).is_err());

        let walled = Board::build(
            &[vec![0, 0, 0, 0], vec![0, 4, 0, 0]],
            crate::game::ContributionMode::Walls,
            3,
        )
        .unwrap();
        assert!(Snake::new(&walled, Position::new(3, 1), Direction::Right, 3).is_err());
        assert!(Snake::new(&walled, Position::new(3, 0), Direction::Right, 3).is_ok());
    }

    #[test]
    fn test_snake_movement() {
        let board = Board::blank(10, 10);
        let mut snake = Snake::new(&board, Position::new(5, 5), Direction::Right, 3).unwrap();

        // Move without growing
        let next = snake.propose_move(Direction::Right);
        snake.apply_move(next, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Move with growing
        snake.grant_growth(1);
        let next = snake.propose_move(Direction::Down);
        snake.apply_move(next, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 6));
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_reverse_request_keeps_heading() {
        let board = Board::blank(10, 10);
        let snake = Snake::new(&board, Position::new(5, 5), Direction::Right, 3).unwrap();

        assert_eq!(
            snake.propose_move(Direction::Left),
            snake.propose_move(Direction::Right)
        );
        assert_eq!(snake.resolve_heading(Direction::Left), Direction::Right);
        assert_eq!(snake.propose_move(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_from_segments_validates_shape() {
        let board = Board::blank(6, 6);
        let bent = [
            Position::new(2, 2),
            Position::new(2, 3),
            Position::new(3, 3),
        ];
        let snake = Snake::from_segments(&board, &bent, Direction::Up).unwrap();
        assert_eq!(snake.tail(), Position::new(3, 3));

        let gap = [Position::new(2, 2), Position::new(4, 2)];
        assert!(Snake::from_segments(&board, &gap, Direction::Right).is_err());

        let repeated = [
            Position::new(2, 2),
            Position::new(2, 3),
            Position::new(2, 2),
        ];
        assert!(Snake::from_segments(&board, &repeated, Direction::Up).is_err());

        let off_grid = [Position::new(0, 0), Position::new(-1, 0)];
        assert!(Snake::from_segments(&board, &off_grid, Direction::Right).is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Running.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Timeout.is_terminal());
        assert!(GameStatus::Collision(CollisionKind::Wall).is_terminal());
    }
}
