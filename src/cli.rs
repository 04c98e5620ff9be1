// src/cli.rs
use std::env;
use std::path::Path;

use crate::config::RunOptions;
use crate::error::{Error, Result};
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// There are no flags: the working directory is the whole configuration.
/// Arguments, if any, are ignored.
pub fn options_for<I, S>(_args: I, cwd: &Path) -> RunOptions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RunOptions::in_dir(cwd)
}

/// Entry point used by the binary: current directory in, `fullResults.csv`
/// out, file names echoed to stdout.
pub fn run() -> Result<RunSummary> {
    crate::log::init();

    let cwd = env::current_dir().map_err(|e| Error::io(".", e))?;
    run_in(options_for(env::args().skip(1), &cwd))
}

pub fn run_in(opts: RunOptions) -> Result<RunSummary> {
    let mut progress = ConsoleProgress::stdout();
    runner::run(&opts, Some(&mut progress))
}
