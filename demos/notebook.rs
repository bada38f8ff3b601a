//! Diffusion from a unit source into a perfect sink
//!
//! Reproduces the reference notebook run:
//!
//! - `D = 0.1`, `dt = 0.1`, `dx = 0.01` on `x in [0, 1)`, `t in [0, 10)`
//! - `C(0, t) = 1`, `C(1, t) = 0`
//! - every 10th time column plotted on the unit square
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example notebook
//! cargo run --release --example notebook --features parallel
//! ```
//!
//! Files are written to the system temporary directory.

use std::error::Error;
use std::path::Path;
use std::time::Instant;

use diffusion_rs::output::export::{export_field_csv, CsvConfig, CsvMetadata};
use diffusion_rs::output::visualization::{plot_history, plot_snapshots, PlotConfig};
use diffusion_rs::solver::{
    DirichletBoundaries, ExplicitStencilSolver, Scenario, Solver, SolverConfiguration,
};

fn path_str(path: &Path) -> Result<&str, Box<dyn Error>> {
    path.to_str()
        .ok_or_else(|| format!("non UTF-8 path: {}", path.display()).into())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== 1-D Diffusion: Explicit Stencil ===\n");

    // ====== Problem ======

    let diffusion = 0.1;
    let boundaries = DirichletBoundaries::new(1.0, 0.0);
    let scenario = Scenario::new(diffusion, boundaries);

    let config = SolverConfiguration::new(0.1, 0.01)
        .with_space_extent(1.0)
        .with_time_extent(10.0);

    let solver = ExplicitStencilSolver::new();

    println!("Physical Parameters:");
    println!("  Diffusion D: {}", diffusion);
    println!("  Boundaries: {}", boundaries);
    println!("\nDiscretisation:");
    println!("  Grid:     {}", config.grid()?);
    println!("  Timeline: {}", config.timeline()?);
    println!(
        "  Coefficient (D*dt)/(4*dx): {}\n",
        ExplicitStencilSolver::coefficient(diffusion, config.time_step, config.space_step)
    );

    // ====== Solve ======

    println!("Solving with {}...", solver.name());
    let start = Instant::now();
    let field = solver.solve(&scenario, &config)?;
    println!("✓ {} computed in {:.3} ms\n", field, start.elapsed().as_secs_f64() * 1e3);

    let last = field.nt() - 1;
    println!("Boundary values at t = {:.1}:", field.timeline().coordinate(last));
    println!("  C(x_0)     = {}", field[(0, last)]);
    println!("  C(x_Nx-1)  = {}", field[(field.nx() - 1, last)]);

    println!("\nProfile near the source:");
    for i in [1, 5, 10, 25, 50] {
        println!("  C(x={:.2}) = {:.6}", field.grid().coordinate(i), field[(i, last)]);
    }

    let (low, high) = field.value_range();
    println!("\nValue range: [{:.6}, {:.6}]\n", low, high);

    // ====== Output ======

    let tmp_dir = std::env::temp_dir();
    println!("Writing output to {}...", tmp_dir.display());

    let snapshots = tmp_dir.join("diffusion_snapshots.png");
    plot_snapshots(&field, 10, path_str(&snapshots)?, Some(&PlotConfig::snapshots("Diffusion, D = 0.1")))?;
    println!("✓ {}", snapshots.display());

    let history = tmp_dir.join("diffusion_history.png");
    plot_history(&field, &[1, 10, 25, 50], path_str(&history)?, None)?;
    println!("✓ {}", history.display());

    let csv = tmp_dir.join("diffusion_snapshots.csv");
    let metadata = CsvMetadata::from_run(solver.name(), &scenario, &config);
    export_field_csv(&field, 10, path_str(&csv)?, Some(&CsvConfig::default().with_metadata(metadata)))?;
    println!("✓ {}", csv.display());

    println!("\n=== Simulation Complete ===");

    Ok(())
}
