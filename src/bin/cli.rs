// src/bin/cli.rs
use color_eyre::eyre::Result;
use race_results::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
