use log::{debug, info, warn};

use super::{
    config::{ConfigError, GameConfig},
    food::FoodPlacer,
    grid::Grid,
    state::{CollisionType, GameState, Snake, Status},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake advanced this step
    pub moved: bool,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether the game is over after this step
    pub terminated: bool,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            moved: false,
            ate_food: false,
            collision: None,
            terminated: false,
        }
    }

    fn frozen() -> Self {
        Self {
            terminated: true,
            ..Self::idle()
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    grid: Grid,
    food: FoodPlacer,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_placer(config.grid()?, FoodPlacer::new(config.seed)))
    }

    pub fn with_placer(grid: Grid, food: FoodPlacer) -> Self {
        Self { grid, food }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Start a fresh session: centred single-segment snake, no direction,
    /// zero score, freshly placed food.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center());
        let food = self.food.place(&self.grid);

        info!(
            "new game on {}x{} grid, food at ({}, {})",
            self.grid.width(),
            self.grid.height(),
            food.x,
            food.y
        );

        GameState::new(self.grid, snake, food)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.is_game_over() {
            return StepResult::frozen();
        }

        let direction = state.direction;
        if direction.is_none() {
            return StepResult::idle();
        }

        let candidate = state.snake.head().moved_in_direction(direction);
        let ate_food = candidate == state.food;

        if ate_food {
            state.snake.advance_and_grow(direction);
            state.score += 1;
            state.food = self.food.place(&state.grid);
            debug!(
                "food eaten at ({}, {}), score {}, next food at ({}, {})",
                candidate.x, candidate.y, state.score, state.food.x, state.food.y
            );
        } else {
            state.snake.advance_and_slide(direction);
        }

        state.steps += 1;

        let collision = Self::check_collision(state);
        if let Some(kind) = collision {
            state.status = Status::GameOver;
            state.collision = Some(kind);
            Self::log_game_over(state, kind);
        }

        StepResult {
            moved: true,
            ate_food,
            collision,
            terminated: collision.is_some(),
        }
    }

    /// Check the already-advanced head against walls and the rest of the body
    fn check_collision(state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.grid.in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn log_game_over(state: &GameState, kind: CollisionType) {
        info!(
            "game over after {} steps: {:?}, score {}",
            state.steps, kind, state.score
        );
        match serde_json::to_string(state) {
            Ok(snapshot) => debug!("final state: {snapshot}"),
            Err(err) => warn!("could not serialize final state: {err}"),
        }
    }
}
