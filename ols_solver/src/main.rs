use std::{io, path::Path};

use log::info;

const INPUT: &str = "in.txt";
const OUTPUT: &str = "out.txt";

fn main() -> io::Result<()> {
    env_logger::init();

    let coefficients = ols_solver::solve_files(Path::new(INPUT), Path::new(OUTPUT))?;
    info!("wrote {} coefficients to {OUTPUT}", coefficients.len());

    Ok(())
}
