use std::{error::Error, path::Path};

use log::info;
use ndarray::ArrayView1;
use plotters::{
    coord::{Shift, cartesian::Cartesian2d, types::RangedCoordf64},
    prelude::*,
};
use synthesis::{ContaminationWindow, SampleSet, mean_squared_error, stats};

use crate::{HarnessErr, Result};

type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type DrawResult = std::result::Result<(), Box<dyn Error>>;

const SIZE: (u32, u32) = (640, 480);
const GRAY: RGBColor = RGBColor(128, 128, 128);
const LIME_GREEN: RGBColor = RGBColor(50, 205, 50);

/// The data behind the training and testing figures of a run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub test_name: &'a str,
    pub training: &'a SampleSet,
    pub window: Option<&'a ContaminationWindow>,
    /// Samples a solver transformed before fitting, drawn on top of the training set.
    pub transformed: Option<(ArrayView1<'a, f64>, ArrayView1<'a, f64>)>,
    pub training_predictions: ArrayView1<'a, f64>,
    pub testing: &'a SampleSet,
    pub testing_predictions: ArrayView1<'a, f64>,
}

impl Report<'_> {
    /// The vertical range of both figures: the training targets' extremes.
    ///
    /// A flat range is widened so the chart can still be built.
    pub fn y_bounds(&self) -> (f64, f64) {
        match stats::min_max(self.training.y()) {
            Some((low, high)) if low < high => (low, high),
            Some((low, high)) if low.is_finite() && high.is_finite() => (low - 0.5, high + 0.5),
            _ => (-0.5, 0.5),
        }
    }

    /// Splits the training samples into untouched and contaminated points.
    pub fn training_points(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let (mut clean, mut contaminated) = (Vec::new(), Vec::new());
        let mut mask = vec![false; self.training.len()];
        for &i in self.window.map(ContaminationWindow::indices).unwrap_or_default() {
            if let Some(shifted) = mask.get_mut(i) {
                *shifted = true;
            }
        }

        for (point, &shifted) in points(self.training.x(), self.training.y()).zip(&mask) {
            if shifted {
                contaminated.push(point);
            } else {
                clean.push(point);
            }
        }

        (clean, contaminated)
    }

    /// The legend of the training samples: raw whenever a contamination pass ran, even an
    /// empty one.
    pub fn samples_label(&self) -> &'static str {
        match self.window {
            Some(_) => "Raw Samples",
            None => "True Samples",
        }
    }

    /// The testing set's error, shown in the testing figure's title.
    pub fn testing_mse(&self) -> Result<f64> {
        Ok(mean_squared_error(self.testing_predictions, self.testing.y())?)
    }

    /// Draws the training figure, overwriting `path`.
    pub fn render_training(&self, path: &Path) -> Result<()> {
        self.draw_training(path)
            .map_err(|e| HarnessErr::Render(format!("{}: {e}", path.display())))?;

        info!("training figure written to {}", path.display());
        Ok(())
    }

    /// Draws the testing figure, overwriting `path`.
    pub fn render_testing(&self, path: &Path) -> Result<()> {
        let mse = self.testing_mse()?;
        self.draw_testing(path, mse)
            .map_err(|e| HarnessErr::Render(format!("{}: {e}", path.display())))?;

        info!("testing figure written to {}", path.display());
        Ok(())
    }

    fn draw_training(&self, path: &Path) -> DrawResult {
        let root = BitMapBackend::new(path, SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(self.test_name, ("sans-serif", 20))?;

        let mut chart = build_chart(&root, "Training Set", self.y_bounds())?;
        let (clean, contaminated) = self.training_points();

        scatter(&mut chart, clean, BLUE, self.samples_label())?;
        if self.window.is_some() {
            scatter(&mut chart, contaminated, GRAY, "Contamination")?;
        }

        if let Some((x, y)) = self.transformed {
            chart
                .draw_series(
                    points(x, y).map(|p| TriangleMarker::new(p, 4, LIME_GREEN.filled())),
                )?
                .label("Transformed Samples")
                .legend(|(x, y)| TriangleMarker::new((x, y), 4, LIME_GREEN.filled()));
        }

        let predictions = points(self.training.x(), self.training_predictions).collect();
        scatter(&mut chart, predictions, RED, "Predictions")?;

        draw_legend(&mut chart)?;
        root.present()?;
        Ok(())
    }

    fn draw_testing(&self, path: &Path, mse: f64) -> DrawResult {
        let root = BitMapBackend::new(path, SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(self.test_name, ("sans-serif", 20))?;

        let caption = format!("Testing Set, MSE={mse}");
        let mut chart = build_chart(&root, &caption, self.y_bounds())?;

        let samples = points(self.testing.x(), self.testing.y()).collect();
        scatter(&mut chart, samples, BLUE, "True Samples")?;

        let predictions = points(self.testing.x(), self.testing_predictions).collect();
        scatter(&mut chart, predictions, RED, "Predictions")?;

        draw_legend(&mut chart)?;
        root.present()?;
        Ok(())
    }
}

fn points<'a>(
    x: ArrayView1<'a, f64>,
    y: ArrayView1<'a, f64>,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    x.into_iter().zip(y).map(|(&x, &y)| (x, y))
}

fn build_chart<'a, 'b>(
    root: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    caption: &str,
    (y_low, y_high): (f64, f64),
) -> std::result::Result<Chart<'a, 'b>, Box<dyn Error>> {
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-1f64..1f64, y_low..y_high)?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;
    Ok(chart)
}

fn scatter<'a, 'b: 'a>(
    chart: &mut Chart<'a, 'b>,
    points: Vec<(f64, f64)>,
    color: RGBColor,
    label: &str,
) -> DrawResult {
    chart
        .draw_series(points.into_iter().map(|p| Circle::new(p, 2, color.filled())))?
        .label(label)
        .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
    Ok(())
}

fn draw_legend<'a, 'b: 'a>(chart: &mut Chart<'a, 'b>) -> DrawResult {
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}
