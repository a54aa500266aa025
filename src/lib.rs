//! Generate perfect mazes and find a way through them
//!
//! Mazes are carved into a rectangular [Grid] with randomized depth-first
//! search ([MazeGenerator]): every cell ends up reachable from every other
//! one by exactly one simple path. [solve] walks the open passages with
//! depth-first search to find that path.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use dfs_maze::{generate_maze, solve, Point};
//!
//! let grid = generate_maze(8, 12, Some(42)).unwrap();
//! assert_eq!(grid.open_passages(), 8 * 12 - 1);
//!
//! let solution = solve(&grid, Point::new(0, 0), Point::new(7, 11)).unwrap();
//! assert_eq!(solution.path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(solution.path.last(), Some(&Point::new(7, 11)));
//! println!("{}", dfs_maze::render::render_with_path(&grid, &solution.path));
//! solution.print_report();
//! ```
//!
//! ## Hand-built grid without a way through
//! ```
//! use dfs_maze::{solve, Direction, Grid, Point};
//!
//! let mut grid = Grid::new(1, 3).unwrap();
//! grid.link(Point::new(0, 0), Point::new(0, 1), Direction::Right);
//!
//! assert!(solve(&grid, Point::new(0, 0), Point::new(0, 1)).is_some());
//! assert!(solve(&grid, Point::new(0, 0), Point::new(0, 2)).is_none());
//! ```

pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod solver;

pub use grid::{Cell, Direction, Grid, Point, Walls};
pub use maze_generator::MazeGenerator;
pub use solver::{solve, MazeSolution};

/// Generate a `rows` x `cols` perfect maze.
///
/// With a `seed`, the same maze is produced every time; without, the
/// generator is seeded from system entropy.
///
/// Returns error, if either dimension is zero.
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> anyhow::Result<Grid> {
    MazeGenerator::new(seed).generate_maze(rows, cols)
}
