use std::collections::{HashSet, VecDeque};

use super::maker::{Grid, Position, is_path};

/// Breadth-first search from `start` to `goal` over 4-connected path cells,
/// treating every cell in `blocked` as impassable. `start == goal` is always
/// reachable.
pub fn is_reachable(
    grid: &Grid,
    start: Position,
    goal: Position,
    blocked: &HashSet<Position>,
) -> bool {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if start.x >= width || start.y >= height {
        return false;
    }

    let mut visited = vec![vec![false; width]; height];
    let mut queue = VecDeque::new();

    visited[start.y][start.x] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return true;
        }

        for next in cell.neighbors(width, height) {
            if visited[next.y][next.x] || !is_path(grid, next) || blocked.contains(&next) {
                continue;
            }
            visited[next.y][next.x] = true;
            queue.push_back(next);
        }
    }

    false
}
