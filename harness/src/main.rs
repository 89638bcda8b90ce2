use std::io;

use log::error;

fn main() -> io::Result<()> {
    env_logger::init();

    harness::run().inspect_err(|e| error!("{e}"))?;
    Ok(())
}
