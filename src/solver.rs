//! Path finding through open passages

use std::collections::HashSet;

use log::{debug, warn};

use crate::grid::{Direction, Grid, Point};

/// Path from start to end, both included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSolution {
    pub path: Vec<Point>,
}

impl MazeSolution {
    /// Number of cells on the path
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.path.contains(&point)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("Solution path length: {} steps", self.steps());
    }
}

/// Frame of the explicit DFS stack
struct Frame {
    point: Point,
    /// Index into [Direction::ALL] of the next direction to try
    next: usize,
}

/// Find some path from `start` to `end` through open walls.
///
/// Depth-first search trying directions in [Direction::ALL] order
/// (top, right, bottom, left); the first path reaching `end` is returned,
/// which need not be the shortest one. In a perfect maze it is the only
/// simple path.
///
/// The search keeps its own visited set and ignores the cells' generation
/// flag. Returns `None`, if `start` and `end` are not connected or either is
/// outside the grid.
pub fn solve(grid: &Grid, start: Point, end: Point) -> Option<MazeSolution> {
    if grid.get(start).is_none() || grid.get(end).is_none() {
        warn!("Cannot solve from {} to {}: outside the grid", start, end);
        return None;
    }

    let mut visited = HashSet::from([start]);
    let mut stack = vec![Frame {
        point: start,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.point == end {
            let path: Vec<Point> = stack.iter().map(|f| f.point).collect();
            debug!(
                "Found path of {} cells after visiting {}",
                path.len(),
                visited.len()
            );
            return Some(MazeSolution { path });
        }

        let current = frame.point;
        let step = Direction::ALL[frame.next..]
            .iter()
            .enumerate()
            .find_map(|(offset, &direction)| {
                if !grid.is_open(current, direction) {
                    return None;
                }
                current
                    .neighbor_coordinate(direction)
                    .filter(|neighbor| !visited.contains(neighbor))
                    .map(|neighbor| (offset, neighbor))
            });

        match step {
            Some((offset, neighbor)) => {
                frame.next += offset + 1;
                visited.insert(neighbor);
                stack.push(Frame {
                    point: neighbor,
                    next: 0,
                });
            }
            // Every branch from here failed
            None => {
                stack.pop();
            }
        }
    }

    debug!("No path from {} to {}", start, end);
    None
}
