//! CLI for maze generation and solving

use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use dfs_maze::{generate_maze, render, solve, Point};

const DEFAULT_SIZE: usize = 10;

/// Generate a perfect maze and find a way from the top-left corner to the
/// bottom-right corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Number of rows. Falls back to 10 if missing or not a positive integer.
    #[arg(value_parser = parse_dimension, default_value_t = DEFAULT_SIZE)]
    rows: usize,

    /// Number of columns. Falls back to 10 if missing or not a positive integer.
    #[arg(value_parser = parse_dimension, default_value_t = DEFAULT_SIZE)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the maze as JSON to this file. Use `-` for stdout.
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Parse a dimension from its leading digits, never failing.
///
/// `12abc` reads as 12 and `7.5` as 7. Text without leading digits, zero and
/// negative numbers give [DEFAULT_SIZE].
fn parse_dimension(arg: &str) -> Result<usize, Infallible> {
    let arg = arg.trim();
    let arg = arg.strip_prefix('+').unwrap_or(arg);
    let digits = arg
        .find(|c: char| !c.is_ascii_digit())
        .map_or(arg, |end| &arg[..end]);
    Ok(digits
        .parse()
        .ok()
        .filter(|&n: &usize| n > 0)
        .unwrap_or(DEFAULT_SIZE))
}

/// Generate maze, print it with its solution
fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    info!("Starting with {:?}", args);

    println!("Maze Generator\n");
    println!("Generating a {}x{} maze...\n", args.rows, args.cols);
    let grid = generate_maze(args.rows, args.cols, args.seed)?;

    println!("Generated Maze:");
    println!("{}", grid);

    if let Some(path) = &args.json {
        let json = grid.to_json()?;
        if path.to_str() == Some("-") {
            println!("{}", json);
        } else {
            fs::write(path, json)
                .with_context(|| format!("Could not write maze to {}", path.display()))?;
            info!("Wrote maze to {}", path.display());
        }
    }

    println!("Finding solution path...\n");
    let start = Point::new(0, 0);
    let end = Point::new(args.rows - 1, args.cols - 1);
    match solve(&grid, start, end) {
        Some(solution) => {
            println!("Maze with Solution Path (*):");
            println!("{}", render::render_with_path(&grid, &solution.path));
            solution.print_report();
        }
        None => println!("No path from {} to {}", start, end),
    }
    Ok(())
}
