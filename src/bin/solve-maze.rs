//! CLI for solving a saved maze

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{anyhow, Context};
use clap::Parser;
use log::info;

use dfs_maze::{render, solve, Grid, Point};

/// Find a way through a maze saved as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start cell as `ROW,COL` [default: 0,0]
    #[arg(long)]
    start: Option<Point>,

    /// End cell as `ROW,COL` [default: bottom-right corner]
    #[arg(long)]
    end: Option<Point>,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let json = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let grid = Grid::from_json(&json)?;
    info!("Loaded {}x{} maze", grid.rows(), grid.cols());

    let start = args.start.unwrap_or(Point::new(0, 0));
    let end = args
        .end
        .unwrap_or(Point::new(grid.rows() - 1, grid.cols() - 1));

    let solution =
        solve(&grid, start, end).ok_or_else(|| anyhow!("No path from {} to {}", start, end))?;

    println!("{}", render::render_with_path(&grid, &solution.path));
    solution.print_report();
    Ok(())
}
