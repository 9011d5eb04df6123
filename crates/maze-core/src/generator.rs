use crate::{Cell, Grid, MazeError, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for maze generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid height, border included
    pub rows: usize,
    /// Grid width, border included
    pub cols: usize,
    /// Obstacle density control: the obstacle count is drawn uniformly
    /// from `[difficulty, 2 * difficulty]`
    pub difficulty: u32,
    /// Ceiling on regeneration attempts before `new_maze` gives up
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 7,
            difficulty: 5,
            max_attempts: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Reject dimensions that cannot hold a walled border plus distinct
    /// start and goal interior cells.
    ///
    /// 3x3 is excluded because its single interior cell would have to be
    /// both start and goal.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < 3 || self.cols < 3 || (self.rows == 3 && self.cols == 3) {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Start cell coordinate for these dimensions
    pub fn start(&self) -> Position {
        Position::new(1, 1)
    }

    /// Goal cell coordinate for these dimensions
    pub fn goal(&self) -> Position {
        Position::new(self.rows - 2, self.cols - 2)
    }
}

/// Random maze generator
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        // Default config is statically valid
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a custom, validated configuration
    pub fn with_config(config: GeneratorConfig) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Raise the obstacle density by one step (goal-reached progression)
    pub fn raise_difficulty(&mut self) {
        self.config.difficulty = self.config.difficulty.saturating_add(1);
    }

    /// Generate one candidate maze.
    ///
    /// The border is walled, the interior starts open, and an obstacle
    /// count drawn from `[difficulty, 2 * difficulty]` controls how many
    /// uniform interior picks become walls. Picks may repeat, so the
    /// realized wall count can be lower than the draw. Start and goal are
    /// stamped last and overwrite any obstacle landing on them.
    ///
    /// The result is not guaranteed reachable; see [`crate::new_maze`].
    pub fn generate(&mut self) -> Grid {
        let GeneratorConfig { rows, cols, .. } = self.config;
        let mut grid = Grid::bordered(rows, cols);

        let difficulty = self.config.difficulty;
        let obstacle_count = self
            .rng
            .gen_range(difficulty..=difficulty.saturating_mul(2));
        for _ in 0..obstacle_count {
            let row = self.rng.gen_range(1..=rows - 2);
            let col = self.rng.gen_range(1..=cols - 2);
            grid.set(Position::new(row, col), Cell::Wall);
        }

        grid.set(self.config.start(), Cell::Start);
        grid.set(self.config.goal(), Cell::Goal);
        grid
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, cols: usize, difficulty: u32) -> GeneratorConfig {
        GeneratorConfig {
            rows,
            cols,
            difficulty,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn generated_grid_satisfies_invariants() {
        for (rows, cols) in [(7, 7), (5, 9), (4, 4), (12, 6)] {
            let mut generator = Generator::with_seed(config(rows, cols, 5), 42).unwrap();
            for _ in 0..20 {
                let grid = generator.generate();
                for col in 0..cols {
                    assert_eq!(grid.get(Position::new(0, col)), Some(Cell::Wall));
                    assert_eq!(grid.get(Position::new(rows - 1, col)), Some(Cell::Wall));
                }
                for row in 0..rows {
                    assert_eq!(grid.get(Position::new(row, 0)), Some(Cell::Wall));
                    assert_eq!(grid.get(Position::new(row, cols - 1)), Some(Cell::Wall));
                }
                assert_eq!(grid.count(Cell::Start), 1);
                assert_eq!(grid.count(Cell::Goal), 1);
                assert_eq!(grid.find(Cell::Start), Some(Position::new(1, 1)));
                assert_eq!(grid.find(Cell::Goal), Some(Position::new(rows - 2, cols - 2)));
            }
        }
    }

    #[test]
    fn zero_difficulty_leaves_interior_open() {
        let mut generator = Generator::with_seed(config(7, 7, 0), 7).unwrap();
        let grid = generator.generate();
        for pos in grid.interior().collect::<Vec<_>>() {
            assert_ne!(grid.get(pos), Some(Cell::Wall));
        }
    }

    #[test]
    fn interior_wall_count_bounded_by_draw_range() {
        // Duplicate picks are idempotent, so the realized count can only
        // fall at or below the upper end of the draw range.
        let mut generator = Generator::with_seed(config(9, 9, 4), 99).unwrap();
        for _ in 0..50 {
            let grid = generator.generate();
            let interior_walls = grid
                .interior()
                .filter(|&p| grid.get(p) == Some(Cell::Wall))
                .count();
            assert!(interior_walls <= 8, "got {interior_walls} walls");
        }
    }

    #[test]
    fn start_and_goal_overwrite_obstacles() {
        // High difficulty on a tiny interior guarantees obstacle picks land
        // on the start and goal cells.
        let mut generator = Generator::with_seed(config(4, 4, 1000), 3).unwrap();
        let grid = generator.generate();
        assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Start));
        assert_eq!(grid.get(Position::new(2, 2)), Some(Cell::Goal));
    }

    #[test]
    fn degenerate_dimensions_rejected() {
        for (rows, cols) in [(2, 7), (7, 2), (0, 0), (3, 3)] {
            let err = Generator::with_config(config(rows, cols, 5)).unwrap_err();
            assert_eq!(err, MazeError::InvalidDimensions { rows, cols });
        }
        assert!(Generator::with_config(config(3, 4, 5)).is_ok());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let cfg = config(7, 7, 5);
        let mut a = Generator::with_seed(cfg, 1234).unwrap();
        let mut b = Generator::with_seed(cfg, 1234).unwrap();
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }
}
