//! Hill climbing toward the roots of a quadratic, with the paths plotted.
//!
//! Checks the discriminant, seeds one search on each side of the vertex, logs
//! every probe, and opens a window showing the function with each search's
//! trajectory and final estimate.
//!
//! # Usage
//!
//! ```text
//! cargo run --example quadratic --features plot
//! cargo run --example quadratic --features plot -- 3 -5 2
//! RUST_LOG=debug cargo run --example quadratic --features plot -- 1 1 5
//! ```
//!
//! Coefficients are `a b c` for `a·x² + b·x + c` and default to `-1 4 2`.
//! A negative discriminant prints a message and exits without searching.

use std::error::Error;

use clap::Parser;
use hillclimb_observers::{LogObserver, ShowConfig, TrajectoryPlot};
use hillclimb_quadratic::{Quadratic, Root, SeedError, seeds};
use hillclimb_solvers::equation::hill_climbing::{self, Config, Status};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Distance from the vertex to each seed.
const SEED_OFFSET: f64 = 1.0;

/// Half-width of the plotted range around the vertex.
const PLOT_HALF_WIDTH: f64 = 2.0;

/// Coefficients of `a·x² + b·x + c`.
#[derive(Debug, Parser)]
#[command(about = "Hill climbing toward the roots of a quadratic")]
struct Cli {
    /// Coefficient of x².
    #[arg(default_value_t = -1.0, allow_negative_numbers = true)]
    a: f64,

    /// Coefficient of x.
    #[arg(default_value_t = 4.0, allow_negative_numbers = true)]
    b: f64,

    /// Constant term.
    #[arg(default_value_t = 2.0, allow_negative_numbers = true)]
    c: f64,
}

impl Cli {
    fn quadratic(&self) -> Quadratic {
        Quadratic::new(self.a, self.b, self.c)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let quadratic = Cli::parse().quadratic();

    let starts = match seeds(&quadratic, SEED_OFFSET) {
        Ok(starts) => starts,
        Err(err @ SeedError::NoRealRoots { .. }) => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let vertex = quadratic.vertex().ok_or(SeedError::Degenerate)?;
    let f = |x: f64| quadratic.value(x);
    let config = Config::default();

    let mut plot = TrajectoryPlot::new(
        quadratic.to_string(),
        f,
        [vertex - PLOT_HALF_WIDTH, vertex + PLOT_HALF_WIDTH],
        400,
    );

    for start in starts {
        let mut logger = LogObserver::new(format!("x0={start:.1}"));
        let solution = hill_climbing::solve(&quadratic, &Root, start, &config, &mut logger)?;

        match solution.status {
            Status::Converged => info!(
                start,
                root = solution.x,
                residual = solution.residual,
                rounds = solution.iters,
                "found root"
            ),
            Status::MaxIters | Status::StoppedByObserver => info!(
                start,
                estimate = solution.x,
                residual = solution.residual,
                step_size = solution.step_size,
                "search stopped without converging"
            ),
        }
        println!("Root from x={start:.1} ≈ {:.6}", solution.x);

        plot.add_trajectory(format!("Path from x={start:.1}"), &solution.path, f);
    }

    plot.show(
        ShowConfig::new()
            .title(format!("Hill Climbing to Find Roots of {quadratic}"))
            .legend(),
    )?;

    Ok(())
}
