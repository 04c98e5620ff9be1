// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Where a run reads from and writes to. The binary points both at the
/// current directory; tests point them at a temp dir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    pub out_path: PathBuf,
}

impl RunOptions {
    pub fn new(input_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            out_path: out_path.into(),
        }
    }

    /// Read `*.html` from `dir`, write `dir/fullResults.csv`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir, dir.join(OUTPUT_FILENAME))
    }

    pub fn sep(&self) -> char {
        OUTPUT_SEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_puts_output_next_to_inputs() {
        let opts = RunOptions::in_dir("pages");
        assert_eq!(opts.input_dir, PathBuf::from("pages"));
        assert_eq!(opts.out_path, Path::new("pages").join("fullResults.csv"));
        assert_eq!(opts.sep(), ',');
    }
}
