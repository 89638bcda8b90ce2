use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use log::debug;
use ndarray::{Array1, ArrayView1};

use crate::{ExchangeErr, Result, error::at, input::parse_line};

/// Writes fitted coefficients, intercept first, separated by spaces.
pub fn write_coefficients<W: Write>(coefficients: ArrayView1<f64>, mut writer: W) -> Result<()> {
    if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(ExchangeErr::NonFinite { index });
    }

    let line = coefficients
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(writer, "{line}")?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the coefficient file at `path` and syncs it to disk.
pub fn export_coefficients(path: &Path, coefficients: ArrayView1<f64>) -> Result<()> {
    let file = File::create(path).map_err(at(path))?;
    let mut writer = BufWriter::new(file);
    write_coefficients(coefficients, &mut writer)?;

    let file = writer
        .into_inner()
        .map_err(|e| at(path)(e.into_error()))?;
    file.sync_all().map_err(at(path))?;

    debug!("wrote {} coefficients to {}", coefficients.len(), path.display());
    Ok(())
}

/// Parses whitespace separated coefficients.
///
/// # Arguments
/// * `reader` - The coefficient source.
/// * `expected` - The amount of coefficients the fit must have produced.
///
/// # Returns
/// The coefficients, or an error if a token isn't a finite real number or the count is off.
pub fn read_coefficients<R: Read>(mut reader: R, expected: usize) -> Result<Array1<f64>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut coefficients = Vec::with_capacity(expected);
    for (i, line) in content.lines().enumerate() {
        coefficients.extend(parse_line(line, i + 1)?);
    }

    if coefficients.len() != expected {
        return Err(ExchangeErr::CountMismatch {
            got: coefficients.len(),
            expected,
        });
    }

    if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(ExchangeErr::NonFinite { index });
    }

    Ok(Array1::from(coefficients))
}

/// Reads the coefficient file at `path`.
pub fn import_coefficients(path: &Path, expected: usize) -> Result<Array1<f64>> {
    let file = File::open(path).map_err(at(path))?;
    let coefficients = read_coefficients(file, expected)?;

    debug!("read {} coefficients from {}", coefficients.len(), path.display());
    Ok(coefficients)
}
