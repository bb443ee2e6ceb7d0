//! Street-grid routing demo.
//!
//! Builds a Manhattan-style street cost grid, plans a route across it, and
//! prints the simplified waypoints.
//!
//! Usage:
//!   cargo run --example street_route
//!   cargo run --example street_route -- --metric chebyshev

use std::path::Path;

use clap::Parser;
use tracing::info;

use marga_nav::{
    CostGrid, DistanceMetric, GridCoord, MargaConfig, PathPlanner, WorldPoint,
};

/// Street-grid routing demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/marga.toml")]
    config: String,

    /// Override the distance metric: euclidean, manhattan or chebyshev
    #[arg(short, long)]
    metric: Option<String>,

    /// Grid size in cells (square)
    #[arg(long, default_value_t = 60)]
    size: usize,
}

/// Streets every 20 cells in both directions, 4 cells wide; everything
/// off-street is impassable.
fn build_street_grid(size: usize) -> CostGrid {
    let street_width = 4;
    let mut grid = CostGrid::new(size, size);

    let mut pos = 20;
    while pos < size as i32 {
        for j in 0..street_width {
            let lane = pos + street_width / 2 - j - 1;
            let weight = if j > 0 && j < street_width - 1 { 1 } else { 2 };
            for k in 0..size as i32 {
                grid.set_cost(GridCoord::new(lane, k), weight);
                grid.set_cost(GridCoord::new(k, lane), weight);
            }
        }
        pos += 20;
    }

    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let coord = GridCoord::new(x, y);
            if grid.cost(coord) == 0 {
                grid.set_cost(coord, CostGrid::OBSTACLE);
            }
        }
    }

    grid
}

fn main() -> marga_nav::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("street_route=info".parse().unwrap())
                .add_directive("marga_nav=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = if Path::new(&args.config).exists() {
        info!("loading configuration from {}", args.config);
        MargaConfig::load(Path::new(&args.config))?
    } else {
        MargaConfig::default()
    };

    if let Some(metric) = &args.metric {
        config.search.metric = match metric.as_str() {
            "manhattan" => DistanceMetric::Manhattan,
            "chebyshev" => DistanceMetric::Chebyshev,
            _ => DistanceMetric::Euclidean,
        };
    }

    let grid = build_street_grid(args.size);
    let planner = PathPlanner::new(config.to_planner_config());

    let start = WorldPoint::new(20.0, 0.0);
    let goal = WorldPoint::new(40.0, args.size as f32 - 1.0);

    info!(
        "planning {}x{} street grid with {:?}",
        args.size,
        args.size,
        planner.config().metric
    );

    match planner.plan(&grid, start, goal) {
        Some(path) => {
            info!(
                "route: {} waypoints, {:.1} units{}",
                path.waypoints.len(),
                path.length,
                if path.reached_goal {
                    ""
                } else {
                    " (best effort, goal not reached)"
                }
            );
            for (i, wp) in path.waypoints.iter().enumerate() {
                println!("{:3}: ({:7.2}, {:7.2}, {:5.2})", i, wp.x, wp.y, wp.elevation);
            }
        }
        None => println!("no route between {:?} and {:?}", start, goal),
    }

    Ok(())
}
