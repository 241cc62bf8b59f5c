use rand::Rng;

use super::super::{MazeMaker, WALL};

/// A wall cell touching at least this many path cells may be opened without
/// splitting what is already connected.
const MIN_ADJACENT_PATHS: usize = 2;

pub trait Shortcuts {
    fn add_shortcuts(&mut self);
}

impl<R: Rng + ?Sized> Shortcuts for MazeMaker<'_, R> {
    // Opens a few random walls to break up long single corridors.
    fn add_shortcuts(&mut self) {
        let attempts = (self.size() / 3).max(2);

        for _ in 0..attempts {
            let cell = self.pick_cell();
            if self.grid[cell.y][cell.x] != WALL {
                continue;
            }

            if self.count_adjacent_paths(cell) >= MIN_ADJACENT_PATHS {
                self.visit_cell(cell);
            }
        }
    }
}
