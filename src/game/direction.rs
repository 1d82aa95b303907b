use serde::{Deserialize, Serialize};

/// Direction the snake is committed to
///
/// `None` is the stationary direction a fresh game starts with; the snake
/// does not move until the first admissible turn arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Direction::None
    }

    /// Decide which direction ends up committed when `proposed` arrives
    /// while `committed` is in effect. Exact reversals keep `committed`.
    pub fn resolve(committed: Direction, proposed: Direction) -> Direction {
        if committed.is_opposite(proposed) {
            committed
        } else {
            proposed
        }
    }
}
