pub mod goal;
pub mod maker;
pub mod obstacles;
pub mod solver;

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use goal::select_goal;
use maker::{Grid, MazeMaker, PATH, Position};
use obstacles::{Obstacle, obstacle_count, place_obstacles};
use solver::is_reachable;

/// Retry cap for `Maze::generate`. Supported sizes almost always succeed on
/// the first attempt.
pub const DEFAULT_MAX_ATTEMPTS: usize = 256;

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    pub size: usize,
    pub grid: Grid, // 0 is path, 1 is wall.
    pub start: Position,
    pub goal: Position,
    pub obstacles: Vec<Obstacle>,
}

#[derive(Debug)]
enum Rejection {
    Unsolvable,
    BlockedByObstacles,
}

impl Maze {
    /// Generates a solvable `size` x `size` maze using the thread-local
    /// random generator.
    pub fn generate(size: usize) -> Result<Self, GenerationError> {
        Self::generate_with(size, &mut rand::rng(), DEFAULT_MAX_ATTEMPTS)
    }

    /// Generates a solvable maze, drawing every random choice from `rng`.
    /// Each failed attempt is thrown away whole and generation starts over
    /// from carving.
    pub fn generate_with<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, GenerationError> {
        if size == 0 {
            return Err(GenerationError::EmptyGrid);
        }

        for attempt in 1..=max_attempts {
            match Self::attempt(size, rng) {
                Ok(maze) => {
                    debug!(size, attempt, goal = ?maze.goal, "maze generated");
                    return Ok(maze);
                }
                Err(reason) => {
                    debug!(size, attempt, ?reason, "discarding maze");
                }
            }
        }

        Err(GenerationError::Exhausted {
            size,
            attempts: max_attempts,
        })
    }

    fn attempt<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, Rejection> {
        let maker = MazeMaker::new(size, rng);
        let start = maker.start();
        let grid = maker.into_grid();

        // The start cell is always carved, so the goal pool is never empty.
        let goal = select_goal(&grid, start, rng).unwrap_or(start);
        if !is_reachable(&grid, start, goal, &HashSet::new()) {
            return Err(Rejection::Unsolvable);
        }

        let obstacles = place_obstacles(&grid, start, goal, obstacle_count(size), rng);
        let maze = Maze {
            size,
            grid,
            start,
            goal,
            obstacles,
        };
        if !maze.is_solvable() {
            return Err(Rejection::BlockedByObstacles);
        }

        Ok(maze)
    }

    pub fn blocked(&self) -> HashSet<Position> {
        self.obstacles.iter().map(Obstacle::position).collect()
    }

    /// Whether the goal can be reached from the start without passing
    /// through walls or obstacles.
    pub fn is_solvable(&self) -> bool {
        is_reachable(&self.grid, self.start, self.goal, &self.blocked())
    }

    pub fn path_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&cell| cell == PATH).count()
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &cell)| self.symbol(Position::new(x, y), cell))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn symbol(&self, cell: Position, value: u8) -> String {
        if cell == self.start {
            return "S ".to_string();
        }
        if cell == self.goal {
            return "G ".to_string();
        }
        if let Some(obstacle) = self.obstacles.iter().find(|o| o.position() == cell) {
            return obstacle.kind.to_string();
        }
        if value == PATH {
            "  ".to_string()
        } else {
            "██".to_string()
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
