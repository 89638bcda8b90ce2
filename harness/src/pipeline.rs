use std::{fs, io, path::Path};

use log::{debug, info};
use synthesis::{
    Coefficients, ContaminationWindow, SampleSet, Seed, Weights, contaminate, power_expand,
    sample_weights, synthesize,
};

use crate::{
    HarnessConfig, Result,
    evaluate::{Evaluation, evaluate},
    report::Report,
    solver::{Solver, invoke_all},
};

/// Everything a run produced, in pipeline order.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub seed: Seed,
    pub weights: Weights,
    pub training: SampleSet,
    pub window: ContaminationWindow,
    pub testing: SampleSet,
    pub coefficients: Coefficients,
    pub training_eval: Evaluation,
    pub testing_eval: Evaluation,
}

/// The benchmark: synthesize, contaminate, hand off to the solvers and score their fit.
pub struct Pipeline {
    config: HarnessConfig,
}

impl Pipeline {
    /// Creates a new `Pipeline`.
    ///
    /// # Errors
    /// Returns `HarnessErr::InvalidConfig` if the configuration is invalid.
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the whole benchmark once, strictly in order.
    ///
    /// The seed is printed before anything is drawn. The input file is fully written before
    /// the first solver starts and the output file is only read after the last one exits.
    ///
    /// # Arguments
    /// * `seed` - The seed every draw of the run derives from.
    /// * `solvers` - The solvers to run, the last one's output is the one evaluated.
    ///
    /// # Returns
    /// The run's data and scores, or the first error that occurred.
    pub fn run(&self, seed: Seed, solvers: &[Box<dyn Solver>]) -> Result<RunReport> {
        let config = &self.config;

        println!("Samples seed: {seed}");
        info!("samples seed: {seed}");

        let weights = sample_weights(seed, config.true_power, config.w_low, config.w_high)?;
        debug!("ground truth weights: {}", weights.view());

        let mut training = synthesize(seed, &weights, config.training_noise, config.training_size)?;
        let window = contaminate(&mut training, config.epsilon)?;
        info!(
            "synthesized {} training samples, {} contaminated by {}",
            training.len(),
            window.len(),
            window.offset()
        );

        let testing = synthesize(seed, &weights, config.testing_noise, config.testing_size)?;
        info!("synthesized {} testing samples", testing.len());

        let training_features = power_expand(training.x(), config.fit_power);
        exchange::export_input(&config.input_path(), training_features.view(), training.y())?;

        let output = config.output_path();
        remove_stale(&output)?;
        invoke_all(solvers, &config.workdir)?;

        let coefficients = Coefficients::new(exchange::import_coefficients(
            &output,
            config.fit_power + 1,
        )?);
        info!("fitted coefficients: {}", coefficients.view());

        let training_eval = evaluate(&coefficients, &training, training_features.view())?;
        let testing_features = power_expand(testing.x(), config.fit_power);
        let testing_eval = evaluate(&coefficients, &testing, testing_features.view())?;
        info!(
            "training mse {}, testing mse {}",
            training_eval.mse(),
            testing_eval.mse()
        );

        Ok(RunReport {
            seed,
            weights,
            training,
            window,
            testing,
            coefficients,
            training_eval,
            testing_eval,
        })
    }

    /// Draws the training and testing figures of a finished run.
    pub fn render(&self, run: &RunReport) -> Result<()> {
        let report = Report {
            test_name: &self.config.test_name,
            training: &run.training,
            window: Some(&run.window),
            transformed: None,
            training_predictions: run.training_eval.predictions(),
            testing: &run.testing,
            testing_predictions: run.testing_eval.predictions(),
        };

        report.render_training(&self.config.training_plot_path())?;
        report.render_testing(&self.config.testing_plot_path())
    }
}

/// Removes a previous run's output so it can't be mistaken for this run's.
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("removed stale {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
