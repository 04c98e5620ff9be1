// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run. All variants are fatal: the batch aborts
/// on the first one, keeping whatever was already written to the output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{}: expected at least 2 <tbody> elements, found {found}", path.display())]
    MissingTableBody { path: PathBuf, found: usize },

    #[error("{}: row {row} has {cells} cells, need {needed}", path.display())]
    ShortRow {
        path: PathBuf,
        row: usize,
        cells: usize,
        needed: usize,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    /// Attach the document path to a structural error raised while the
    /// document was still anonymous (parsed from a string).
    pub(crate) fn at(self, doc: &std::path::Path) -> Self {
        match self {
            Error::MissingTableBody { found, .. } => Error::MissingTableBody {
                path: doc.to_path_buf(),
                found,
            },
            Error::ShortRow { row, cells, needed, .. } => Error::ShortRow {
                path: doc.to_path_buf(),
                row,
                cells,
                needed,
            },
            other => other,
        }
    }
}
