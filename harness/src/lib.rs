pub mod config;
pub mod error;
pub mod evaluate;
pub mod pipeline;
pub mod report;
pub mod solver;

use log::info;

pub use config::{HarnessConfig, SolverSpec};
pub use error::{HarnessErr, Result};
pub use pipeline::{Pipeline, RunReport};
pub use solver::{ProcessSolver, Solver};

/// Runs the benchmark as configured by the environment and draws its figures.
///
/// # Errors
/// Returns a `HarnessErr` as soon as any stage fails, nothing is retried.
pub fn run() -> Result<()> {
    let config = HarnessConfig::load()?;
    let seed = config.seed();
    let solvers = config.process_solvers();

    let pipeline = Pipeline::new(config)?;
    let report = pipeline.run(seed, &solvers)?;
    pipeline.render(&report)?;

    info!(
        "done, seed {} scored a testing mse of {}",
        report.seed,
        report.testing_eval.mse()
    );
    Ok(())
}
