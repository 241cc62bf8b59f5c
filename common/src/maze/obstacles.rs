use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, VariantArray};

use super::maker::{Grid, Position, path_cells};

/// How an obstacle is drawn. Has no effect on pathfinding.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, VariantArray,
)]
pub enum ObstacleKind {
    #[serde(rename = "🦈")]
    #[strum(serialize = "🦈")]
    Shark,
    #[serde(rename = "🪨")]
    #[strum(serialize = "🪨")]
    Rock,
    #[serde(rename = "🪸")]
    #[strum(serialize = "🪸")]
    Coral,
}

impl ObstacleKind {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let i = rng.random_range(0..Self::VARIANTS.len());
        Self::VARIANTS[i]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Obstacles per maze, tuned for the sizes the game serves (4 to 7).
/// Other sizes get none.
pub fn obstacle_count(size: usize) -> usize {
    match size {
        4 => 2,
        5 => 4,
        6 => 9,
        7 => 15,
        _ => 0,
    }
}

/// Scatters up to `count` obstacles over path cells other than `start` and
/// `goal`. Places fewer when there is not enough room.
pub fn place_obstacles<R: Rng + ?Sized>(
    grid: &Grid,
    start: Position,
    goal: Position,
    count: usize,
    rng: &mut R,
) -> Vec<Obstacle> {
    let mut available: Vec<Position> = path_cells(grid)
        .filter(|&cell| cell != start && cell != goal)
        .collect();
    available.shuffle(rng);

    available
        .into_iter()
        .take(count)
        .map(|cell| Obstacle {
            x: cell.x,
            y: cell.y,
            kind: ObstacleKind::random(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::maker::{PATH, WALL};

    #[test]
    fn test_obstacle_count_table() {
        assert_eq!(obstacle_count(4), 2);
        assert_eq!(obstacle_count(5), 4);
        assert_eq!(obstacle_count(6), 9);
        assert_eq!(obstacle_count(7), 15);
        assert_eq!(obstacle_count(3), 0);
        assert_eq!(obstacle_count(10), 0);
    }

    #[test]
    fn test_obstacles_avoid_start_goal_and_walls() {
        let grid = vec![
            vec![PATH, PATH, WALL, PATH],
            vec![WALL, PATH, WALL, PATH],
            vec![PATH, PATH, PATH, PATH],
            vec![PATH, WALL, WALL, PATH],
        ];
        let start = Position::new(3, 3);
        let goal = Position::new(0, 0);

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let obstacles = place_obstacles(&grid, start, goal, 4, &mut rng);

            assert_eq!(obstacles.len(), 4);
            let unique: HashSet<Position> = obstacles.iter().map(Obstacle::position).collect();
            assert_eq!(unique.len(), obstacles.len());

            for obstacle in &obstacles {
                assert_ne!(obstacle.position(), start);
                assert_ne!(obstacle.position(), goal);
                assert_eq!(grid[obstacle.y][obstacle.x], PATH);
            }
        }
    }

    #[test]
    fn test_fewer_obstacles_when_room_runs_out() {
        let grid = vec![vec![PATH, PATH], vec![WALL, PATH]];
        let mut rng = StdRng::seed_from_u64(2);
        let obstacles = place_obstacles(
            &grid,
            Position::new(1, 1),
            Position::new(0, 0),
            15,
            &mut rng,
        );

        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].position(), Position::new(1, 0));
    }

    #[test]
    fn test_every_kind_eventually_appears() {
        let mut rng = StdRng::seed_from_u64(4);
        let seen: HashSet<ObstacleKind> = (0..256)
            .map(|_| ObstacleKind::random(&mut rng))
            .collect();
        assert_eq!(seen.len(), ObstacleKind::VARIANTS.len());
    }

    #[test]
    fn test_obstacle_serializes_kind_as_type_glyph() {
        let obstacle = Obstacle {
            x: 1,
            y: 2,
            kind: ObstacleKind::Coral,
        };
        let json = serde_json::to_value(obstacle).expect("obstacle should serialize");
        assert_eq!(json, serde_json::json!({ "x": 1, "y": 2, "type": "🪸" }));
        assert_eq!(ObstacleKind::Shark.to_string(), "🦈");
        assert_eq!(ObstacleKind::Rock.as_ref(), "🪨");
    }
}
