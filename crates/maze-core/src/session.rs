use crate::{is_reachable, Cell, Direction, Generator, GeneratorConfig, Grid, MazeError, Position};

/// Session phase: `Transitioning` covers the pause between reaching the
/// goal and the next maze appearing, during which moves are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Transitioning,
}

/// Result of a movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player advanced one cell
    Moved,
    /// The destination was a wall, out of bounds, or the session is
    /// between mazes
    Blocked,
    /// The player advanced onto the goal cell
    GoalReached,
}

/// Produce a reachable maze by rejection sampling.
///
/// Generates candidates until the validator accepts one, up to the
/// configured `max_attempts`, then derives the start and goal coordinates
/// by scanning for the marker cells. Exceeding the ceiling means the
/// difficulty is statistically incompatible with the grid size and is
/// reported as [`MazeError::Exhausted`].
pub fn new_maze(generator: &mut Generator) -> Result<(Grid, Position, Position), MazeError> {
    let max_attempts = generator.config().max_attempts;
    for _ in 0..max_attempts {
        let grid = generator.generate();
        if !is_reachable(&grid) {
            continue;
        }
        let (Some(start), Some(goal)) = (grid.find(Cell::Start), grid.find(Cell::Goal)) else {
            continue;
        };
        return Ok((grid, start, goal));
    }
    Err(MazeError::Exhausted {
        attempts: max_attempts,
    })
}

/// A running game session: the current maze, the player, and the
/// level/difficulty progression.
///
/// The session never returns an unreachable grid; every maze it exposes
/// has passed the validator.
#[derive(Debug)]
pub struct Session {
    generator: Generator,
    grid: Grid,
    player: Position,
    goal: Position,
    level: u32,
    phase: Phase,
}

impl Session {
    /// Start a session with an entropy-seeded generator
    pub fn new(config: GeneratorConfig) -> Result<Self, MazeError> {
        Self::from_generator(Generator::with_config(config)?)
    }

    /// Start a session with a seeded generator for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, MazeError> {
        Self::from_generator(Generator::with_seed(config, seed)?)
    }

    fn from_generator(mut generator: Generator) -> Result<Self, MazeError> {
        let (grid, player, goal) = new_maze(&mut generator)?;
        Ok(Self {
            generator,
            grid,
            player,
            goal,
            level: 1,
            phase: Phase::Playing,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Current level, starting at 1
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current obstacle difficulty
    pub fn difficulty(&self) -> u32 {
        self.generator.config().difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the current maze with a fresh one at the same difficulty,
    /// resetting the player to the start cell
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let (grid, player, goal) = new_maze(&mut self.generator)?;
        self.grid = grid;
        self.player = player;
        self.goal = goal;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Handle the goal-reached event: bump level and difficulty by one
    /// each, then generate the next maze.
    ///
    /// The host calls this after its win-transition delay.
    pub fn advance_level(&mut self) -> Result<(), MazeError> {
        self.level += 1;
        self.generator.raise_difficulty();
        self.regenerate()
    }

    /// Validate a movement intent against the grid.
    ///
    /// Accepted moves update the player position; a move onto the goal
    /// cell reports [`MoveOutcome::GoalReached`] and enters
    /// [`Phase::Transitioning`].
    pub fn try_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.phase == Phase::Transitioning {
            return MoveOutcome::Blocked;
        }
        let Some(next) = self.grid.neighbor(self.player, dir) else {
            return MoveOutcome::Blocked;
        };
        if !self.grid.is_passable(next) {
            return MoveOutcome::Blocked;
        }
        self.player = next;
        if self.player == self.goal {
            self.phase = Phase::Transitioning;
            MoveOutcome::GoalReached
        } else {
            MoveOutcome::Moved
        }
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
    fn session_starts_with_reachable_default_maze() {
        let session = Session::with_seed(GeneratorConfig::default(), 11).unwrap();
        assert!(is_reachable(session.grid()));
        assert_eq!(session.player(), Position::new(1, 1));
        assert_eq!(session.goal(), Position::new(5, 5));
        assert_eq!(session.level(), 1);
        assert_eq!(session.difficulty(), 5);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn new_maze_only_returns_reachable_grids() {
        let mut generator = Generator::with_seed(config(7, 7, 8), 5).unwrap();
        for _ in 0..50 {
            let (grid, start, goal) = new_maze(&mut generator).unwrap();
            assert!(is_reachable(&grid));
            assert_eq!(start, Position::new(1, 1));
            assert_eq!(goal, Position::new(5, 5));
        }
    }

    #[test]
    fn level_and_difficulty_climb_together() {
        let mut session = Session::with_seed(GeneratorConfig::default(), 8).unwrap();
        for n in 1..=10u32 {
            session.advance_level().unwrap();
            assert_eq!(session.level(), 1 + n);
            assert_eq!(session.difficulty(), 5 + n);
            assert!(is_reachable(session.grid()));
            assert_eq!(session.player(), Position::new(1, 1));
        }
    }

    #[test]
    fn moves_into_border_walls_are_rejected() {
        let mut session = Session::with_seed(GeneratorConfig::default(), 11).unwrap();
        // Player starts at (1,1), hemmed in by the border above and left.
        assert_eq!(session.try_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(session.try_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(session.player(), Position::new(1, 1));
    }

    #[test]
    fn walking_an_open_maze_to_the_goal() {
        // Difficulty 0 draws zero obstacles, so the interior is fully open.
        let mut session = Session::with_seed(config(7, 7, 0), 2).unwrap();
        for _ in 0..4 {
            assert_eq!(session.try_move(Direction::Down), MoveOutcome::Moved);
        }
        for _ in 0..3 {
            assert_eq!(session.try_move(Direction::Right), MoveOutcome::Moved);
        }
        assert_eq!(session.try_move(Direction::Right), MoveOutcome::GoalReached);
        assert_eq!(session.phase(), Phase::Transitioning);

        // Moves are ignored until the host advances the level.
        assert_eq!(session.try_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(session.player(), session.goal());

        session.advance_level().unwrap();
        assert_eq!(session.level(), 2);
        assert_eq!(session.difficulty(), 1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.player(), Position::new(1, 1));
    }

    #[test]
    fn regenerate_keeps_level_and_difficulty() {
        let mut session = Session::with_seed(GeneratorConfig::default(), 4).unwrap();
        session.regenerate().unwrap();
        assert_eq!(session.level(), 1);
        assert_eq!(session.difficulty(), 5);
        assert!(is_reachable(session.grid()));
    }

    #[test]
    fn impossible_configuration_exhausts_the_retry_budget() {
        // A 3x5 interior is a single corridor of three cells; a huge
        // difficulty walls the middle cell on essentially every draw, so
        // the bounded loop must give up rather than spin forever.
        let cfg = GeneratorConfig {
            rows: 3,
            cols: 5,
            difficulty: 10_000,
            max_attempts: 25,
        };
        let err = Session::with_seed(cfg, 17).unwrap_err();
        assert_eq!(err, MazeError::Exhausted { attempts: 25 });
    }
}
