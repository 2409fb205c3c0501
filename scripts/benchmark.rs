// scripts/benchmark.rs
//! Time Milstein against Euler-Maruyama on identical inputs across
//! state dimensions and grid sizes.

use milstein_sde::math_utils::Timer;
use milstein_sde::models::Gbm;
use milstein_sde::rng::IncrementFactory;
use milstein_sde::solvers::{EulerMaruyama, Milstein};
use milstein_sde::{SdeResult, TimeGrid};
use ndarray::Array1;
use std::env;

fn parse_arg(index: usize, default: usize) -> usize {
    env::args()
        .nth(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> SdeResult<()> {
    let paths = parse_arg(1, 1_000) as u64;
    let gbm = Gbm::new(0.05, 0.2)?;
    let factory = IncrementFactory::new(42);

    println!(
        "{:>6} {:>8} {:>14} {:>14} {:>8}",
        "dim", "steps", "milstein_ms", "euler_ms", "ratio"
    );

    for &dim in &[1usize, 4, 16] {
        for &steps in &[64usize, 256, 1024] {
            let grid = TimeGrid::uniform(0.0, 1.0, steps)?;
            let x0 = Array1::from_elem(dim, 100.0);
            let inputs: Vec<_> = (0..paths)
                .map(|path| factory.increments(path, steps, dim))
                .collect();

            let mut timer = Timer::new();
            let mut checksum = 0.0;
            for dws in &inputs {
                checksum += Milstein::integrate(&gbm, &x0, &grid, dws)?.final_state()[0];
            }
            let milstein_ms = timer.elapsed_ms();

            timer.start();
            for dws in &inputs {
                checksum -= EulerMaruyama::integrate(&gbm, &x0, &grid, dws)?.final_state()[0];
            }
            let euler_ms = timer.elapsed_ms();

            println!(
                "{:>6} {:>8} {:>14.3} {:>14.3} {:>8.2}   (checksum {:.3e})",
                dim,
                steps,
                milstein_ms,
                euler_ms,
                milstein_ms / euler_ms,
                checksum
            );
        }
    }
    Ok(())
}
