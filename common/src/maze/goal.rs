use rand::{Rng, prelude::IndexedRandom};

use super::maker::{Grid, Position, path_cells};

pub const MIN_GOAL_DISTANCE: usize = 4;

/// Picks a path cell at least `MIN_GOAL_DISTANCE` steps (Manhattan) from
/// `start`, or any path cell if none is that far away. Returns `None` only
/// when the grid has no path cells at all.
pub fn select_goal<R: Rng + ?Sized>(
    grid: &Grid,
    start: Position,
    rng: &mut R,
) -> Option<Position> {
    let all: Vec<Position> = path_cells(grid).collect();
    let far: Vec<Position> = all
        .iter()
        .copied()
        .filter(|cell| cell.manhattan_distance(&start) >= MIN_GOAL_DISTANCE)
        .collect();

    if far.is_empty() {
        all.choose(rng).copied()
    } else {
        far.choose(rng).copied()
    }
}
