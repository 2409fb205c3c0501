// demos/gbm_path.rs
//! Integrate one geometric Brownian motion path with Milstein and
//! Euler-Maruyama on the same draws, compare both to the exact solution and
//! write the Milstein trajectory to CSV.

use milstein_sde::models::Gbm;
use milstein_sde::output::write_trajectory_to_csv;
use milstein_sde::solvers::{wiener_increments, EulerMaruyama, Milstein};
use milstein_sde::{PathConfig, SdeResult};
use ndarray::array;

fn main() -> SdeResult<()> {
    let cfg = PathConfig {
        steps: 252,
        seed: 2024,
        ..Default::default()
    };
    let gbm = Gbm::new(0.05, 0.2)?;
    let x0 = array![100.0];

    let grid = cfg.time_grid()?;
    let dws = cfg.increments(0, 1)?;

    let milstein = Milstein::integrate(&gbm, &x0, &grid, &dws)?;
    let euler = EulerMaruyama::integrate(&gbm, &x0, &grid, &dws)?;

    let mut exact = x0.clone();
    for (i, dw) in wiener_increments(&grid, &dws, 1)?.outer_iter().enumerate() {
        exact = gbm.exact_step(&exact, grid.dt(i), &dw.to_owned())?;
    }

    println!("=== GBM path, {} steps ===", cfg.steps);
    println!("Exact terminal value:          {:.6}", exact[0]);
    println!(
        "Milstein terminal value:       {:.6} (error {:.2e})",
        milstein.final_state()[0],
        (milstein.final_state()[0] - exact[0]).abs()
    );
    println!(
        "Euler-Maruyama terminal value: {:.6} (error {:.2e})",
        euler.final_state()[0],
        (euler.final_state()[0] - exact[0]).abs()
    );

    let filename = "gbm_milstein_path.csv";
    write_trajectory_to_csv(filename, &milstein)?;
    println!("Trajectory written to {}", filename);
    Ok(())
}
