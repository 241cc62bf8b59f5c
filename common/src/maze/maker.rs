pub mod algorithms;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use algorithms::{backtrack::Backtrack, shortcuts::Shortcuts};

pub const PATH: u8 = 0;
pub const WALL: u8 = 1;

/// Row-major, indexed as `grid[y][x]`.
pub type Grid = Vec<Vec<u8>>;

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The 4-connected neighbors of this position that lie inside a
    /// `width` x `height` grid.
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Position> {
        let (x, y) = (self.x as isize, self.y as isize);

        DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            let nx = x + dx;
            let ny = y + dy;
            let in_bounds = nx >= 0 && ny >= 0 && nx < width as isize && ny < height as isize;
            in_bounds.then(|| Position::new(nx as usize, ny as usize))
        })
    }
}

pub fn is_path(grid: &Grid, cell: Position) -> bool {
    grid.get(cell.y)
        .and_then(|row| row.get(cell.x))
        .is_some_and(|&value| value == PATH)
}

pub fn path_cells(grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    grid.iter().enumerate().flat_map(|(y, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == PATH)
            .map(move |(x, _)| Position::new(x, y))
    })
}

pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: Grid,
    pub rng: &'a mut R,
    size: usize,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    /// Carves a `size` x `size` maze rooted at the bottom-right corner.
    /// `size` must be at least 1.
    pub fn new(size: usize, rng: &'a mut R) -> Self {
        debug_assert!(size > 0, "maze size must be at least 1");

        let grid = vec![vec![WALL; size]; size];
        let mut maze = Self::with_grid(grid, rng);
        let root = maze.start();
        maze.backtrack(root);
        maze.add_shortcuts();
        maze
    }

    fn with_grid(grid: Grid, rng: &'a mut R) -> Self {
        let size = grid.len();
        MazeMaker { grid, rng, size }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    fn get_neighbors(&self, cell: Position, only_if_unvisited: bool) -> Vec<Position> {
        cell.neighbors(self.size, self.size)
            .filter(|&neighbor| !only_if_unvisited || !self.is_visited(neighbor))
            .collect()
    }

    fn pick_neighbor(&mut self, cell: Position, only_if_unvisited: bool) -> Option<Position> {
        let neighbors = self.get_neighbors(cell, only_if_unvisited);

        neighbors.choose(&mut *self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Position) {
        let Position { x, y } = cell;
        self.grid[y][x] = PATH;
    }

    fn is_visited(&self, cell: Position) -> bool {
        self.grid[cell.y][cell.x] == PATH
    }

    fn pick_cell(&mut self) -> Position {
        let x = self.rng.random_range(0..self.size);
        let y = self.rng.random_range(0..self.size);
        Position::new(x, y)
    }

    fn count_adjacent_paths(&self, cell: Position) -> usize {
        self.get_neighbors(cell, false)
            .into_iter()
            .filter(|&neighbor| self.is_visited(neighbor))
            .count()
    }
}
