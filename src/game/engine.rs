use std::sync::Arc;

use tracing::{debug, info, trace};

use super::{
    board::Board,
    collision::classify,
    config::GameConfig,
    error::{PlacementError, SetupError},
    food,
    rng::SeededRng,
    spawn::spawn_snake,
    state::{GameState, GameStatus, Position, Snake},
};
use crate::ai;

/// The game engine that owns a run and advances it tick by tick
pub struct GameEngine {
    config: GameConfig,
    board: Arc<Board>,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    tick: u32,
    status: GameStatus,
    rng: SeededRng,
    history: Vec<GameState>,
}

impl GameEngine {
    /// Build a run from a configuration and an intensity grid of the configured size
    pub fn new(config: GameConfig, intensities: &[Vec<u8>]) -> Result<Self, SetupError> {
        config.validate()?;
        let board = Board::build(
            intensities,
            config.contribution_mode,
            config.wall_threshold,
        )?;
        if board.width() != config.grid_width || board.height() != config.grid_height {
            return Err(SetupError::InvalidDimensions(format!(
                "grid is {}x{}, configuration expects {}x{}",
                board.width(),
                board.height(),
                config.grid_width,
                config.grid_height
            )));
        }

        let mut rng = SeededRng::from_seed(config.seed.as_ref());
        let snake = spawn_snake(
            &board,
            config.spawn_position,
            config.initial_snake_length,
            &mut rng,
        )?;
        Self::assemble(config, board, snake, None, rng)
    }

    /// Build a run from a prepared board and snake.
    ///
    /// Grid size comes from the board. Without `food`, the first food is
    /// placed from the seeded RNG as usual.
    pub fn with_parts(
        config: GameConfig,
        board: Board,
        snake: Snake,
        food: Option<Position>,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        if snake.segments().any(|pos| board.is_blocked(pos)) {
            return Err(SetupError::InsufficientSpace { length: snake.len() });
        }
        if snake.is_growing() {
            return Err(SetupError::InvalidConfig("snake must start without pending growth"));
        }
        if food.is_some_and(|pos| board.is_blocked(pos) || snake.contains(pos)) {
            return Err(SetupError::InvalidConfig("food must sit on a free cell"));
        }
        let rng = SeededRng::from_seed(config.seed.as_ref());
        Self::assemble(config, board, snake, food, rng)
    }

    fn assemble(
        config: GameConfig,
        board: Board,
        snake: Snake,
        food: Option<Position>,
        mut rng: SeededRng,
    ) -> Result<Self, SetupError> {
        let mut status = GameStatus::Running;
        let food = match food {
            Some(pos) => Some(pos),
            None => match food::place(&board, &snake, &mut rng) {
                Ok(pos) => Some(pos),
                Err(PlacementError::BoardFull) => {
                    status = GameStatus::Won;
                    None
                }
            },
        };

        debug!(
            width = board.width(),
            height = board.height(),
            mode = ?board.mode(),
            strategy = %config.ai_strategy,
            seed = rng.seed(),
            head = ?snake.head(),
            "engine ready"
        );

        let mut engine = Self {
            config,
            board: Arc::new(board),
            snake,
            food,
            score: 0,
            tick: 0,
            status,
            rng,
            history: Vec::new(),
        };
        engine.record();
        Ok(engine)
    }

    /// Execute one tick and return its snapshot.
    ///
    /// Once the run is over this returns the final snapshot without change.
    pub fn step(&mut self) -> &GameState {
        if self.status.is_terminal() {
            return self.latest();
        }

        let heading = ai::decide(
            &self.board,
            &self.snake,
            self.food,
            self.config.ai_strategy,
        );
        let next_head = self.snake.propose_move(heading);

        if let Some(kind) = classify(&self.board, &self.snake, next_head) {
            self.status = GameStatus::Collision(kind);
            self.tick += 1;
            info!(tick = self.tick, score = self.score, ?kind, "snake crashed");
            return self.record();
        }

        let grew = self.food == Some(next_head);
        if grew {
            self.snake.grant_growth(1);
        }
        self.snake.apply_move(next_head, grew);

        if grew {
            self.score += 1;
            self.food = None;
            match food::place(&self.board, &self.snake, &mut self.rng) {
                Ok(pos) => self.food = Some(pos),
                Err(PlacementError::BoardFull) => {
                    self.status = GameStatus::Won;
                    info!(tick = self.tick + 1, score = self.score, "board filled");
                }
            }
        }

        self.tick += 1;
        if self.status == GameStatus::Running && self.tick >= self.config.max_ticks {
            self.status = GameStatus::Timeout;
            info!(tick = self.tick, score = self.score, "tick limit reached");
        }

        trace!(
            tick = self.tick,
            ?heading,
            head = ?next_head,
            score = self.score,
            "tick"
        );
        self.record()
    }

    /// Step until a terminal status and return every snapshot, initial state first
    pub fn run_to_completion(&mut self) -> &[GameState] {
        while !self.status.is_terminal() {
            self.step();
        }
        &self.history
    }

    fn record(&mut self) -> &GameState {
        self.history.push(GameState {
            board: Arc::clone(&self.board),
            snake: self.snake.positions(),
            heading: self.snake.direction(),
            food: self.food,
            score: self.score,
            tick: self.tick,
            status: self.status,
        });
        self.latest()
    }

    fn latest(&self) -> &GameState {
        &self.history[self.history.len() - 1]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Numeric seed of this run; replaying with it reproduces the run
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshots recorded so far, initial state first
    pub fn snapshots(&self) -> &[GameState] {
        &self.history
    }

    /// Consume the engine, keeping only its snapshots
    pub fn into_snapshots(self) -> Vec<GameState> {
        self.history
    }
}

/// Build an engine and play it to the end
pub fn simulate(config: GameConfig, intensities: &[Vec<u8>]) -> Result<Vec<GameState>, SetupError> {
    let mut engine = GameEngine::new(config, intensities)?;
    engine.run_to_completion();
    Ok(engine.into_snapshots())
}
