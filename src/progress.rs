// src/progress.rs
use std::io::{self, Write};
use std::path::Path;

/// Progress reporting for a run. Frontends implement what they care about.
pub trait Progress {
    /// Called once discovery is done, with the number of input files.
    fn begin(&mut self, _total: usize) {}

    /// An input file is about to be read.
    fn file_started(&mut self, _path: &Path) {}

    /// One record went to the output.
    fn record_written(&mut self) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints each input file's name to stdout as it is picked up.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn file_started(&mut self, path: &Path) {
        let name = path.file_name().unwrap_or(path.as_os_str());
        // A closed stdout must not abort the batch.
        let _ = writeln!(self.out, "{}", name.to_string_lossy());
    }

    fn finish(&mut self) {
        let _ = self.out.flush();
    }
}
