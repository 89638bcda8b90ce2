use std::{
    path::{Path, PathBuf},
    process::Command,
    time::Instant,
};

use log::{info, warn};

use crate::{HarnessErr, Result};

/// Anything that turns the input exchange file into the output exchange file.
///
/// Implementations must not return before the output file is completely written.
pub trait Solver {
    /// A short name for logs.
    fn name(&self) -> &str;

    /// A status line shown to the operator before solving.
    fn note(&self) -> Option<&str> {
        None
    }

    /// Solves the regression problem whose files live in `workdir`, blocking until done.
    fn solve(&self, workdir: &Path) -> Result<()>;
}

/// An external executable run with no arguments inside the working directory.
#[derive(Debug, Clone)]
pub struct ProcessSolver {
    program: String,
    note: Option<String>,
}

impl ProcessSolver {
    /// Creates a new `ProcessSolver`.
    ///
    /// # Arguments
    /// * `program` - The executable's name or path, a name is looked up in the working
    ///   directory first and then in `PATH`.
    /// * `note` - The status line printed before it runs.
    pub fn new(program: String, note: Option<String>) -> Self {
        Self { program, note }
    }

    /// The executable to launch: the one sitting in `workdir` if there is one, otherwise
    /// the program as given, left for `PATH` lookup.
    fn resolve(&self, workdir: &Path) -> PathBuf {
        let local = workdir.join(&self.program);
        if local.is_file() {
            local.canonicalize().unwrap_or(local)
        } else {
            PathBuf::from(&self.program)
        }
    }
}

impl Solver for ProcessSolver {
    fn name(&self) -> &str {
        &self.program
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    // The exit status is only logged, whether the run can go on is decided by reading the
    // output file afterwards.
    fn solve(&self, workdir: &Path) -> Result<()> {
        let status = Command::new(self.resolve(workdir))
            .current_dir(workdir)
            .status()
            .map_err(|source| HarnessErr::SolverLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!("solver {} exited with {status}", self.program);
        }

        Ok(())
    }
}

/// Runs every solver to completion, one after the other, in order.
///
/// # Errors
/// Returns `HarnessErr::NoSolver` if `solvers` is empty, or the first solver failure.
pub fn invoke_all(solvers: &[Box<dyn Solver>], workdir: &Path) -> Result<()> {
    if solvers.is_empty() {
        return Err(HarnessErr::NoSolver);
    }

    for solver in solvers {
        match solver.note() {
            Some(note) => println!("{note}"),
            None => println!("Running {}", solver.name()),
        }

        let start = Instant::now();
        solver.solve(workdir)?;
        info!("solver {} finished in {:.2?}", solver.name(), start.elapsed());
    }

    Ok(())
}
