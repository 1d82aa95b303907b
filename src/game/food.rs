use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::Grid;
use super::state::Cell;

/// Picks food cells uniformly over the whole grid.
///
/// The snake's body is not consulted, so food may land underneath it.
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn place(&mut self, grid: &Grid) -> Cell {
        let x = self.rng.gen_range(0..grid.width()) as i32;
        let y = self.rng.gen_range(0..grid.height()) as i32;
        Cell::new(x, y)
    }
}

impl Default for FoodPlacer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_stays_on_grid() {
        let mut placer = FoodPlacer::from_entropy();
        for (width, height) in [(20, 20), (3, 7), (1, 1)] {
            let grid = Grid::new(width, height).unwrap();
            for _ in 0..2_000 {
                assert!(grid.in_bounds(placer.place(&grid)));
            }
        }
    }

    #[test]
    fn test_seeded_placement_is_repeatable() {
        let grid = Grid::new(20, 20).unwrap();
        let mut a = FoodPlacer::seeded(42);
        let mut b = FoodPlacer::new(Some(42));

        let first: Vec<Cell> = (0..16).map(|_| a.place(&grid)).collect();
        let second: Vec<Cell> = (0..16).map(|_| b.place(&grid)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placement_reaches_every_corner() {
        let grid = Grid::new(2, 2).unwrap();
        let mut placer = FoodPlacer::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(placer.place(&grid));
        }
        assert_eq!(seen.len(), 4);
    }
}
