use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;

/// A cell on the game grid
///
/// Coordinates are signed so that a head pushed past the wall can still be
/// represented; see [`Grid::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Check if cell collides with snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body[1..].contains(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend a new head one step in `direction` and keep the tail
    pub fn advance_and_grow(&mut self, direction: Direction) {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);
    }

    /// Prepend a new head one step in `direction` and drop the tail
    pub fn advance_and_slide(&mut self, direction: Direction) {
        self.advance_and_grow(direction);
        self.body.pop();
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Phase of the tick state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Running,
    GameOver,
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub steps: u32,
    pub status: Status,
    pub collision: Option<CollisionType>,
}

impl GameState {
    /// Create a running session with a stationary snake
    pub fn new(grid: Grid, snake: Snake, food: Cell) -> Self {
        Self {
            grid,
            snake,
            food,
            direction: Direction::None,
            score: 0,
            steps: 0,
            status: Status::Running,
            collision: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Propose a new committed direction.
    ///
    /// Exact reversals are dropped silently, as is any proposal once the game
    /// is over; the return value says whether the proposal was taken.
    pub fn steer(&mut self, proposed: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let resolved = Direction::resolve(self.direction, proposed);
        self.direction = resolved;
        resolved == proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_snake() -> Snake {
        Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]).unwrap()
    }

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.moved_in_direction(Direction::None), cell);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_advance_and_slide() {
        let mut snake = line_snake();
        snake.advance_and_slide(Direction::Right);

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments(),
            &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn test_advance_and_grow() {
        let mut snake = line_snake();
        snake.advance_and_grow(Direction::Down);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert_eq!(snake.tail(), Cell::new(3, 5));
    }

    #[test]
    fn test_collision_detection() {
        let snake = line_snake();
        assert!(!snake.collides_with_body(Cell::new(5, 5))); // head
        assert!(snake.collides_with_body(Cell::new(4, 5))); // body
        assert!(!snake.collides_with_body(Cell::new(10, 10))); // empty
        assert!(snake.contains(Cell::new(5, 5)));
    }

    #[test]
    fn test_steer() {
        let grid = Grid::new(20, 20).unwrap();
        let mut state = GameState::new(grid, Snake::new(grid.center()), Cell::new(0, 0));
        assert_eq!(state.direction, Direction::None);

        assert!(state.steer(Direction::Right));
        assert!(!state.steer(Direction::Left));
        assert_eq!(state.direction, Direction::Right);

        // last writer wins between ticks
        assert!(state.steer(Direction::Up));
        assert!(state.steer(Direction::Left));
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_steer_ignored_after_game_over() {
        let grid = Grid::new(20, 20).unwrap();
        let mut state = GameState::new(grid, Snake::new(Cell::new(19, 5)), Cell::new(0, 0));
        state.steer(Direction::Right);
        state.status = Status::GameOver;
        let frozen = state.clone();

        assert!(!state.steer(Direction::Up));
        assert!(!state.steer(Direction::Down));
        assert_eq!(state, frozen);
    }
}
