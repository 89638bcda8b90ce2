use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::{ExchangeErr, Result, error::at};

/// Writes feature rows and their targets in the solver input format.
///
/// Each line holds the row's features, each followed by a space, then a space and the target.
/// Values are written with their shortest round-trip representation.
///
/// # Arguments
/// * `features` - An `n x p` feature matrix.
/// * `targets` - The `n` targets.
/// * `writer` - Where to write to, it's flushed before returning.
///
/// # Returns
/// An error if the sizes differ, a value isn't finite or writing fails.
pub fn write_input<W: Write>(
    features: ArrayView2<f64>,
    targets: ArrayView1<f64>,
    mut writer: W,
) -> Result<()> {
    if features.nrows() != targets.len() {
        return Err(ExchangeErr::SizeMismatch {
            features: features.nrows(),
            targets: targets.len(),
        });
    }

    let non_finite = features
        .rows()
        .into_iter()
        .zip(targets)
        .position(|(row, y)| !y.is_finite() || row.iter().any(|v| !v.is_finite()));

    if let Some(index) = non_finite {
        return Err(ExchangeErr::NonFinite { index });
    }

    for (row, y) in features.rows().into_iter().zip(targets) {
        for v in row {
            write!(writer, "{v} ")?;
        }
        writeln!(writer, " {y}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the input file at `path` and writes the samples into it.
///
/// The file is synced to disk before returning, so a solver started afterwards sees all of it.
pub fn export_input(path: &Path, features: ArrayView2<f64>, targets: ArrayView1<f64>) -> Result<()> {
    let file = File::create(path).map_err(at(path))?;
    let mut writer = BufWriter::new(file);
    write_input(features, targets, &mut writer)?;

    let file = writer
        .into_inner()
        .map_err(|e| at(path)(e.into_error()))?;
    file.sync_all().map_err(at(path))?;

    debug!(
        "wrote {} samples with {} features to {}",
        targets.len(),
        features.ncols(),
        path.display()
    );
    Ok(())
}

/// Parses the solver input format back into features and targets.
///
/// Blank lines are skipped, every other line must hold the same amount of values.
///
/// # Returns
/// The `n x p` features and the `n` targets, or an error if the content is malformed.
pub fn read_input<R: BufRead>(reader: R) -> Result<(Array2<f64>, Array1<f64>)> {
    let mut width = None;
    let mut features = Vec::new();
    let mut targets = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let values = parse_line(&line, i + 1)?;

        let Some((&y, row)) = values.split_last() else {
            continue;
        };

        let expected = *width.get_or_insert(values.len().max(2));
        if values.len() != expected {
            return Err(ExchangeErr::RaggedRow {
                line: i + 1,
                got: values.len(),
                expected,
            });
        }

        features.extend_from_slice(row);
        targets.push(y);
    }

    let Some(width) = width else {
        return Err(ExchangeErr::Empty);
    };

    let features = Array2::from_shape_vec((targets.len(), width - 1), features)
        .map_err(std::io::Error::other)?;

    Ok((features, Array1::from(targets)))
}

/// Reads the solver input file at `path`.
pub fn import_input(path: &Path) -> Result<(Array2<f64>, Array1<f64>)> {
    let file = File::open(path).map_err(at(path))?;
    read_input(BufReader::new(file))
}

/// Parses every whitespace separated value of a line.
pub(crate) fn parse_line(line: &str, number: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ExchangeErr::Parse {
                line: number,
                token: token.to_string(),
            })
        })
        .collect()
}
