//! ASCII rendering
//!
//! Each cell is three characters wide, framed by `+`, `-` and `|`:
//! ```text
//! +---+---+
//! | *   * |
//! +---+   +
//! |     * |
//! +---+---+
//! ```

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

use crate::grid::{Direction, Grid, Point};

const S_EMPTY: &str = "   ";
const S_PATH: &str = " * ";

/// Draw the maze
pub fn render(grid: &Grid) -> String {
    render_marked(grid, &HashSet::new())
}

/// Draw the maze, marking cells on `path` with `*`
pub fn render_with_path(grid: &Grid, path: &[Point]) -> String {
    let marked: HashSet<Point> = path.iter().copied().collect();
    render_marked(grid, &marked)
}

fn render_marked(grid: &Grid, marked: &HashSet<Point>) -> String {
    let mut out = format!("+{}\n", "---+".repeat(grid.cols()));

    for row in &grid.cells().chunks(grid.cols()) {
        let row = row.collect_vec();
        let body = row
            .iter()
            .map(|cell| {
                let content = if marked.contains(&cell.point()) {
                    S_PATH
                } else {
                    S_EMPTY
                };
                let wall = if cell.has_wall(Direction::Right) { '|' } else { ' ' };
                format!("{}{}", content, wall)
            })
            .join("");
        let floor = row
            .iter()
            .map(|cell| {
                if cell.has_wall(Direction::Bottom) {
                    "---+"
                } else {
                    "   +"
                }
            })
            .join("");

        out.push_str(&format!("|{}\n+{}\n", body, floor));
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
