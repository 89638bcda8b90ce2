use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use synthesis::Seed;

use crate::{
    HarnessErr, Result,
    solver::{ProcessSolver, Solver},
};

/// Names the JSON file the configuration is read from.
pub const CONFIG_ENV: &str = "HARNESS_CONFIG";

/// Overrides the seed to reproduce a previous run.
pub const SEED_ENV: &str = "HARNESS_SEED";

/// An external solver to run against the exchange files.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSpec {
    pub program: String,
    #[serde(default = "enabled")]
    pub enabled: bool,
    /// Printed right before the solver starts.
    #[serde(default)]
    pub note: Option<String>,
}

fn enabled() -> bool {
    true
}

/// Everything a benchmark run is parameterized by.
///
/// Missing fields in a JSON file fall back to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub epsilon: f64,
    pub training_size: usize,
    pub testing_size: usize,
    pub true_power: usize,
    pub fit_power: usize,
    pub w_low: f64,
    pub w_high: f64,
    pub training_noise: f64,
    pub testing_noise: f64,
    pub workdir: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub training_plot: PathBuf,
    pub testing_plot: PathBuf,
    pub test_name: String,
    pub solvers: Vec<SolverSpec>,
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.49,
            training_size: 1024,
            testing_size: 1000,
            true_power: 5,
            fit_power: 5,
            w_low: -10.,
            w_high: 10.,
            training_noise: 1.,
            testing_noise: 0.,
            workdir: PathBuf::from("."),
            input_file: PathBuf::from("in.txt"),
            output_file: PathBuf::from("out.txt"),
            training_plot: PathBuf::from("training.png"),
            testing_plot: PathBuf::from("testing.png"),
            test_name: "Random Contamination (ε-then-Z-score-trimmed Huber Loss)".into(),
            solvers: vec![
                SolverSpec {
                    program: "regress_cpp".into(),
                    enabled: true,
                    note: Some(
                        "Running the C++ implementation, usually takes ~50s for 1000 models, or ~5s for 100 models"
                            .into(),
                    ),
                },
                SolverSpec {
                    program: "regress_cuda".into(),
                    enabled: true,
                    note: Some(
                        "Running the CUDA implementation, usually takes <1s for <1000 models".into(),
                    ),
                },
            ],
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration from the environment.
    ///
    /// Starts from the defaults, replaces them with the JSON file named by `HARNESS_CONFIG` if
    /// set, then applies the `HARNESS_SEED` override if set.
    ///
    /// # Errors
    /// Returns `HarnessErr::InvalidConfig` if the file can't be read or parsed, the seed isn't
    /// an unsigned integer or the resulting configuration is invalid.
    pub fn load() -> Result<Self> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(raw) = env::var(SEED_ENV) {
            let seed = raw.trim().parse().map_err(|e| {
                HarnessErr::InvalidConfig(format!("{SEED_ENV}='{raw}' is not a valid seed: {e}"))
            })?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HarnessErr::InvalidConfig(format!("cannot read '{}': {e}", path.display()))
        })?;

        Self::from_json(&content)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| HarnessErr::InvalidConfig(format!("invalid JSON: {e}")))
    }

    /// Checks the configuration is usable before anything gets drawn.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(HarnessErr::InvalidConfig(msg)) };

        if !(self.w_low < self.w_high) {
            return invalid(format!(
                "w_low ({}) must be lower than w_high ({})",
                self.w_low, self.w_high
            ));
        }
        if self.training_size == 0 || self.testing_size == 0 {
            return invalid("training_size and testing_size must be greater than 0".into());
        }
        if self.fit_power < 1 {
            return invalid("fit_power must be at least 1".into());
        }
        if !(0. ..=1.).contains(&self.epsilon) {
            return invalid(format!("epsilon ({}) must lie in [0, 1]", self.epsilon));
        }
        for (name, level) in [
            ("training_noise", self.training_noise),
            ("testing_noise", self.testing_noise),
        ] {
            if !level.is_finite() || level < 0. {
                return invalid(format!("{name} ({level}) must be finite and non negative"));
            }
        }
        if let Some(solver) = self.solvers.iter().find(|s| s.program.trim().is_empty()) {
            return invalid(format!("solver with note {:?} has no program", solver.note));
        }
        if !self.solvers.iter().any(|s| s.enabled) {
            return invalid("at least one solver must be enabled".into());
        }

        Ok(())
    }

    /// The configured seed, or a fresh one from the clock.
    pub fn seed(&self) -> Seed {
        self.seed.map(Seed::new).unwrap_or_else(Seed::from_clock)
    }

    /// Builds the enabled solvers, in configuration order.
    pub fn process_solvers(&self) -> Vec<Box<dyn Solver>> {
        self.solvers
            .iter()
            .filter(|spec| spec.enabled)
            .map(|spec| {
                Box::new(ProcessSolver::new(spec.program.clone(), spec.note.clone()))
                    as Box<dyn Solver>
            })
            .collect()
    }

    pub fn input_path(&self) -> PathBuf {
        self.workdir.join(&self.input_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.workdir.join(&self.output_file)
    }

    pub fn training_plot_path(&self) -> PathBuf {
        self.workdir.join(&self.training_plot)
    }

    pub fn testing_plot_path(&self) -> PathBuf {
        self.workdir.join(&self.testing_plot)
    }
}
