//! Rectangular grid of walled cells
//!
//! Cells are stored row-major in a flat vector and addressed by [Point].
//! Walls are shared edges: clearing a wall always clears it on both sides,
//! see [Grid::link].

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};

/// Location in the grid, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate next to this one in `direction`.
    ///
    /// This is not checked against any grid: stepping past the bottom or
    /// right edge gives a coordinate that [Grid::get] rejects. Only stepping
    /// off the top or left edge, which has no unsigned coordinate, gives
    /// `None`.
    ///
    /// # Examples
    /// ```
    /// use dfs_maze::{Direction, Point};
    ///
    /// let p = Point::new(0, 3);
    /// assert_eq!(p.neighbor_coordinate(Direction::Right), Some(Point::new(0, 4)));
    /// assert_eq!(p.neighbor_coordinate(Direction::Top), None);
    /// ```
    pub fn neighbor_coordinate(self, direction: Direction) -> Option<Point> {
        let Point { row, col } = self;
        match direction {
            Direction::Top => row.checked_sub(1).map(|row| Point { row, col }),
            Direction::Right => col.checked_add(1).map(|col| Point { row, col }),
            Direction::Bottom => row.checked_add(1).map(|row| Point { row, col }),
            Direction::Left => col.checked_sub(1).map(|col| Point { row, col }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parse from `ROW,COL`
impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("Expected a point as `ROW,COL`, got `{}`", s))?;
        let row = row
            .trim()
            .parse()
            .with_context(|| format!("Invalid row in `{}`", s))?;
        let col = col
            .trim()
            .parse()
            .with_context(|| format!("Invalid column in `{}`", s))?;
        Ok(Point { row, col })
    }
}

/// Side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions, in the order neighbors are examined
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

/// Wall state of the four sides of a cell, `true` meaning closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Single square of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(flatten)]
    point: Point,
    /// Set by the maze generator while carving; meaningless afterwards
    #[serde(skip)]
    visited: bool,
    walls: Walls,
}

impl Cell {
    fn new(point: Point) -> Self {
        Self {
            point,
            visited: false,
            walls: Walls::CLOSED,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn row(&self) -> usize {
        self.point.row
    }

    pub fn col(&self) -> usize {
        self.point.col
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    /// Whether the generator has reached this cell
    pub fn visited(&self) -> bool {
        self.visited
    }
}

/// Fixed-size grid of cells, `rows` x `cols`
///
/// The JSON form lists dimensions and every cell with its walls; the
/// transient `visited` flag is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unvalidated grid, as read from JSON
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest number of cells in a grid, about 1.5 GiB of cells
    pub const MAX_CELLS: usize = 1 << 26;

    /// Create a fully walled grid with no visited cells.
    ///
    /// Returns error, if either dimension is zero or the grid would have
    /// more than [Grid::MAX_CELLS] cells.
    pub fn new(rows: usize, cols: usize) -> anyhow::Result<Self> {
        Self::check_dimensions(rows, cols)?;
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Point { row, col })))
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    fn check_dimensions(rows: usize, cols: usize) -> anyhow::Result<()> {
        if rows == 0 || cols == 0 {
            bail!(
                "Invalid dimensions {}x{}: rows and columns must be positive",
                rows,
                cols
            );
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= Self::MAX_CELLS => Ok(()),
            _ => bail!(
                "Invalid dimensions {}x{}: more than {} cells",
                rows,
                cols,
                Self::MAX_CELLS
            ),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.row < self.rows && point.col < self.cols {
            Some(point.row * self.cols + point.col)
        } else {
            None
        }
    }

    /// Cell at `point`, or `None` outside the grid
    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|i| &self.cells[i])
    }

    /// Cell next to `point` in `direction`, or `None` past the grid edge
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<&Cell> {
        point
            .neighbor_coordinate(direction)
            .and_then(|p| self.get(p))
    }

    /// Whether one can walk from `point` to its neighbor in `direction`
    pub fn is_open(&self, point: Point, direction: Direction) -> bool {
        self.get(point).is_some_and(|cell| !cell.has_wall(direction))
            && self.neighbor(point, direction).is_some()
    }

    /// Clear the wall between `a` and its neighbor `b` in `direction`.
    ///
    /// Both sides of the shared wall are opened.
    ///
    /// # Panics
    /// If `b` is not the neighbor of `a` in `direction`, or either lies
    /// outside the grid.
    pub fn link(&mut self, a: Point, b: Point, direction: Direction) {
        assert_eq!(
            a.neighbor_coordinate(direction),
            Some(b),
            "{} is not the {:?} neighbor of {}",
            b,
            direction,
            a
        );
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells[ia].walls.open(direction);
                self.cells[ib].walls.open(direction.opposite());
            }
            _ => panic!("Cannot link {} and {} outside {}x{} grid", a, b, self.rows, self.cols),
        }
    }

    pub(crate) fn is_visited(&self, point: Point) -> bool {
        self.get(point).is_some_and(|cell| cell.visited)
    }

    pub(crate) fn mark_visited(&mut self, point: Point) {
        if let Some(i) = self.index(point) {
            self.cells[i].visited = true;
        }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(|cell| cell.point)
    }

    /// Number of cleared walls between pairs of cells
    ///
    /// A perfect maze has exactly `size() - 1` of these.
    pub fn open_passages(&self) -> usize {
        self.points()
            .map(|p| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| self.is_open(p, d))
                    .count()
            })
            .sum()
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Could not serialize grid")
    }

    /// Load a grid from its JSON form.
    ///
    /// Returns error, if the JSON is malformed, the cells do not match the
    /// dimensions, or two neighbors disagree about their shared wall.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Could not read grid from JSON")
    }
}

impl TryFrom<RawGrid> for Grid {
    type Error = anyhow::Error;

    fn try_from(raw: RawGrid) -> anyhow::Result<Self> {
        let RawGrid { rows, cols, cells } = raw;
        Self::check_dimensions(rows, cols)?;
        if cells.len() != rows * cols {
            bail!(
                "Expected {} cells for {}x{} grid, found {}",
                rows * cols,
                rows,
                cols,
                cells.len()
            );
        }
        for (i, cell) in cells.iter().enumerate() {
            let expected = Point::new(i / cols, i % cols);
            if cell.point != expected {
                bail!("Cell {} is at {}, expected {}", i, cell.point, expected);
            }
        }

        let grid = Grid { rows, cols, cells };
        for cell in grid.cells() {
            for direction in [Direction::Right, Direction::Bottom] {
                if let Some(other) = grid.neighbor(cell.point, direction) {
                    if cell.has_wall(direction) != other.has_wall(direction.opposite()) {
                        bail!(
                            "Cells {} and {} disagree about their shared wall",
                            cell.point,
                            other.point
                        );
                    }
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Direction, Grid, Point, Walls};

    #[test]
    fn new_grid_is_walled_and_unvisited() {
        let grid = Grid::new(3, 4).unwrap();

        assert_eq!(grid.size(), 12);
        assert!(grid.cells().all(|c| c.walls() == Walls::CLOSED && !c.visited()));
        assert_eq!(grid.open_passages(), 0);
        assert_eq!(grid.get(Point::new(2, 3)).unwrap().point(), Point::new(2, 3));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert!(Grid::new(100_000, 100_000).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
        assert!(Grid::new(1, Grid::MAX_CELLS + 1).is_err());

        let json = format!(r#"{{"rows": {}, "cols": 2, "cells": []}}"#, Grid::MAX_CELLS);
        assert!(Grid::from_json(&json).is_err());
    }

    #[test]
    fn lookup_outside_grid_is_none() {
        let grid = Grid::new(2, 3).unwrap();

        assert!(grid.get(Point::new(2, 0)).is_none());
        assert!(grid.get(Point::new(0, 3)).is_none());
        assert!(grid.neighbor(Point::new(0, 0), Direction::Top).is_none());
        assert!(grid.neighbor(Point::new(0, 0), Direction::Left).is_none());
        assert!(grid.neighbor(Point::new(1, 2), Direction::Bottom).is_none());
        assert!(grid.neighbor(Point::new(1, 2), Direction::Right).is_none());
        assert_eq!(
            grid.neighbor(Point::new(1, 2), Direction::Top).unwrap().point(),
            Point::new(0, 2)
        );
    }

    #[test]
    fn neighbor_coordinates() {
        let p = Point::new(4, 7);
        assert_eq!(p.neighbor_coordinate(Direction::Top), Some(Point::new(3, 7)));
        assert_eq!(p.neighbor_coordinate(Direction::Right), Some(Point::new(4, 8)));
        assert_eq!(p.neighbor_coordinate(Direction::Bottom), Some(Point::new(5, 7)));
        assert_eq!(p.neighbor_coordinate(Direction::Left), Some(Point::new(4, 6)));
    }

    #[test]
    fn link_opens_both_sides() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.link(Point::new(1, 1), Point::new(0, 1), Direction::Top);

        assert!(!grid.get(Point::new(1, 1)).unwrap().walls().top);
        assert!(!grid.get(Point::new(0, 1)).unwrap().walls().bottom);
        assert!(grid.is_open(Point::new(0, 1), Direction::Bottom));
        assert!(!grid.is_open(Point::new(0, 0), Direction::Right));
        assert_eq!(grid.open_passages(), 1);
    }

    #[test]
    #[should_panic]
    fn link_rejects_non_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.link(Point::new(0, 0), Point::new(2, 2), Direction::Right);
    }

    #[test]
    fn parse_point() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" 0 , 12 ".parse::<Point>().unwrap(), Point::new(0, 12));
        assert!("3".parse::<Point>().is_err());
        assert!("a,1".parse::<Point>().is_err());
        assert!("-1,1".parse::<Point>().is_err());
    }

    #[test]
    fn json_keeps_walls_and_drops_visited() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.link(Point::new(0, 0), Point::new(0, 1), Direction::Right);
        grid.mark_visited(Point::new(0, 0));

        let json = grid.to_json().unwrap();
        assert!(!json.contains("visited"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 2);
        assert_eq!(value["cols"], 3);
        assert_eq!(value["cells"][1]["row"], 0);
        assert_eq!(value["cells"][1]["col"], 1);
        assert_eq!(value["cells"][1]["walls"]["left"], false);
        assert_eq!(value["cells"][1]["walls"]["right"], true);

        let loaded = Grid::from_json(&json).unwrap();
        assert_eq!(loaded.open_passages(), 1);
        assert!(!loaded.is_visited(Point::new(0, 0)));
    }

    #[test]
    fn json_with_desynchronized_wall_is_rejected() {
        let grid = Grid::new(1, 2).unwrap();
        let json = grid.to_json().unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["cells"][0]["walls"]["right"] = serde_json::Value::Bool(false);

        assert!(Grid::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn json_with_wrong_cell_count_is_rejected() {
        let json = r#"{"rows": 2, "cols": 2, "cells": []}"#;
        assert!(Grid::from_json(json).is_err());

        let json = r#"{"rows": 0, "cols": 2, "cells": []}"#;
        assert!(Grid::from_json(json).is_err());
    }
}
