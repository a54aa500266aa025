//! Maze generation

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Direction, Grid, Point};

/// Perfect maze generator, using randomized depth-first search with
/// backtracking.
///
/// The random source is injected: [MazeGenerator::new] uses a seedable
/// [StdRng], [MazeGenerator::with_rng] accepts any [Rng].
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator seeded with `seed`, or from system entropy if not given
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_rng(if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        })
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn with_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze, carving from a uniformly random cell.
    ///
    /// Returns error, if either dimension is zero.
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        let start = Point::new(
            self.random.gen_range(0..rows),
            self.random.gen_range(0..cols),
        );
        self.carve(&mut grid, start)?;
        Ok(grid)
    }

    /// Generate a perfect maze, carving from `start`.
    ///
    /// Returns error, if either dimension is zero or `start` is not in the
    /// grid.
    pub fn generate_maze_from(
        &mut self,
        rows: usize,
        cols: usize,
        start: Point,
    ) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        self.carve(&mut grid, start)?;
        Ok(grid)
    }

    /// Carve passages into `grid` from `start` until every cell reachable
    /// through unvisited cells has been visited.
    ///
    /// On a fully walled, unvisited grid the result is a spanning tree:
    /// a wall is only cleared towards a cell that was not visited yet, so
    /// no passage closes a cycle. Backtracking uses an explicit stack of
    /// coordinates, so grid size is not limited by call depth.
    ///
    /// Returns error, if `start` is not in the grid; nothing is carved then.
    pub fn carve(&mut self, grid: &mut Grid, start: Point) -> anyhow::Result<()> {
        if grid.get(start).is_none() {
            bail!(
                "Start {} is outside the {}x{} grid",
                start,
                grid.rows(),
                grid.cols()
            );
        }
        debug!(
            "Carving {}x{} maze from {}",
            grid.rows(),
            grid.cols(),
            start
        );

        grid.mark_visited(start);
        let mut stack = vec![start];
        let mut candidates = Vec::with_capacity(Direction::ALL.len());

        while let Some(&current) = stack.last() {
            unvisited_neighbors(grid, current, &mut candidates);
            if candidates.is_empty() {
                // Dead end
                stack.pop();
                continue;
            }

            let (next, direction) = candidates[self.random.gen_range(0..candidates.len())];
            grid.link(current, next, direction);
            grid.mark_visited(next);
            stack.push(next);
        }

        debug!("Carved {} passages", grid.open_passages());
        Ok(())
    }
}

/// Fill `out` with the unvisited neighbors of `point`, in [Direction::ALL]
/// order.
fn unvisited_neighbors(grid: &Grid, point: Point, out: &mut Vec<(Point, Direction)>) {
    out.clear();
    out.extend(Direction::ALL.into_iter().filter_map(|direction| {
        point
            .neighbor_coordinate(direction)
            .filter(|&next| grid.get(next).is_some() && !grid.is_visited(next))
            .map(|next| (next, direction))
    }));
}
