use std::{fs, io, path::Path};

use harness::{HarnessConfig, HarnessErr, Pipeline, Solver};
use ndarray::arr1;
use synthesis::{Seed, power_expand};

const SEED: u64 = 1_718_000_000_000_000;

/// Fits ordinary least squares through the exchange files, like an external solver would.
struct LeastSquares;

impl Solver for LeastSquares {
    fn name(&self) -> &str {
        "least squares"
    }

    fn solve(&self, workdir: &Path) -> harness::Result<()> {
        ols_solver::solve_files(&workdir.join("in.txt"), &workdir.join("out.txt"))
            .map_err(io::Error::from)?;
        Ok(())
    }
}

/// Writes fixed content to the output file.
struct Scripted(&'static str);

impl Solver for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn solve(&self, workdir: &Path) -> harness::Result<()> {
        fs::write(workdir.join("out.txt"), self.0)?;
        Ok(())
    }
}

/// Exits without producing anything.
struct Silent;

impl Solver for Silent {
    fn name(&self) -> &str {
        "silent"
    }

    fn solve(&self, _workdir: &Path) -> harness::Result<()> {
        Ok(())
    }
}

fn scenario(workdir: &Path, epsilon: f64) -> Pipeline {
    let config = HarnessConfig {
        epsilon,
        training_size: 100,
        true_power: 2,
        fit_power: 2,
        workdir: workdir.to_path_buf(),
        ..HarnessConfig::default()
    };

    Pipeline::new(config).unwrap()
}

fn least_squares() -> Vec<Box<dyn Solver>> {
    vec![Box::new(LeastSquares)]
}

#[test]
fn contamination_degrades_least_squares() {
    let dir = tempfile::tempdir().unwrap();
    let seed = Seed::new(SEED);

    let contaminated = scenario(dir.path(), 0.2).run(seed, &least_squares()).unwrap();
    let clean = scenario(dir.path(), 0.).run(seed, &least_squares()).unwrap();

    let dirty_mse = contaminated.testing_eval.mse();
    let clean_mse = clean.testing_eval.mse();

    assert!(dirty_mse.is_finite() && dirty_mse >= 0.);
    assert!(clean_mse.is_finite() && clean_mse >= 0.);
    assert!(dirty_mse > clean_mse, "{dirty_mse} <= {clean_mse}");

    assert_eq!(contaminated.window.len(), 20);
    assert!(clean.window.is_empty());
    assert_eq!(contaminated.weights, clean.weights);
    assert_eq!(contaminated.testing, clean.testing);
}

#[test]
fn input_file_holds_the_contaminated_training_set() {
    let dir = tempfile::tempdir().unwrap();
    let report = scenario(dir.path(), 0.2)
        .run(Seed::new(SEED), &least_squares())
        .unwrap();

    let (features, targets) = exchange::import_input(&dir.path().join("in.txt")).unwrap();

    assert_eq!(features, power_expand(report.training.x(), 2));
    assert_eq!(targets, report.training.y());
    assert_eq!(report.training_eval.predictions().len(), 100);
    assert_eq!(report.testing_eval.predictions().len(), 1000);
}

#[test]
fn same_seed_reproduces_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = scenario(dir.path(), 0.3);

    let a = pipeline.run(Seed::new(7), &least_squares()).unwrap();
    let b = pipeline.run(Seed::new(7), &least_squares()).unwrap();

    assert_eq!(a.weights, b.weights);
    assert_eq!(a.training, b.training);
    assert_eq!(a.window, b.window);
    assert_eq!(a.coefficients, b.coefficients);
}

#[test]
fn last_solver_output_is_evaluated() {
    let dir = tempfile::tempdir().unwrap();
    let solvers: Vec<Box<dyn Solver>> = vec![Box::new(LeastSquares), Box::new(Scripted("1 2 3\n"))];

    let report = scenario(dir.path(), 0.2).run(Seed::new(SEED), &solvers).unwrap();

    assert_eq!(report.coefficients.view(), arr1(&[1., 2., 3.]));
}

#[test]
fn stale_output_is_never_consumed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.txt"), "0 0 0\n").unwrap();

    let solvers: Vec<Box<dyn Solver>> = vec![Box::new(Silent)];
    let res = scenario(dir.path(), 0.2).run(Seed::new(SEED), &solvers);

    assert!(matches!(res, Err(HarnessErr::Exchange(_))));
}

#[test]
fn malformed_output_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();

    for content in ["1 2 oops\n", "1 2\n", "1 2 3 4\n"] {
        let solvers: Vec<Box<dyn Solver>> = vec![Box::new(Scripted(content))];
        let res = scenario(dir.path(), 0.2).run(Seed::new(SEED), &solvers);
        assert!(matches!(res, Err(HarnessErr::Exchange(_))), "{content:?}");
    }
}

#[test]
fn missing_solver_executable_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let solvers: Vec<Box<dyn Solver>> = vec![Box::new(harness::ProcessSolver::new(
        "definitely-not-a-regression-solver".into(),
        None,
    ))];

    let res = scenario(dir.path(), 0.2).run(Seed::new(SEED), &solvers);
    assert!(matches!(res, Err(HarnessErr::SolverLaunch { .. })));
}

#[test]
fn render_writes_both_figures() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = scenario(dir.path(), 0.2);
    let report = pipeline.run(Seed::new(SEED), &least_squares()).unwrap();

    pipeline.render(&report).unwrap();

    for name in ["training.png", "testing.png"] {
        let meta = fs::metadata(dir.path().join(name)).unwrap();
        assert!(meta.len() > 0, "{name} is empty");
    }
}
