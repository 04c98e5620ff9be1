// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::config::consts::INPUT_GLOB;
use crate::core::charset;
use crate::csv::write_row;
use crate::error::{Error, Result};

/// All `*.html` entries directly inside `dir`, in the order `glob` yields them
/// (sorted). Dotfiles are skipped like a shell glob would.
pub fn discover_html(dir: &Path) -> Result<Vec<PathBuf>> {
    // Glob metacharacters in the directory part must match literally.
    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join(INPUT_GLOB);
    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut found = Vec::new();
    for entry in glob::glob_with(&pattern.to_string_lossy(), opts)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io(path, e.into_error())
        })?;
        found.push(path);
    }
    Ok(found)
}

/// Whole file as text, decoded per its BOM or `<meta>` charset (UTF-8 if
/// neither). Undecodable bytes are replaced, never fatal.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let decoded = charset::decode_html(&bytes);
    debug!(file = %path.display(), encoding = decoded.encoding.name(), "decoded");
    if decoded.had_errors {
        warn!(
            file = %path.display(),
            encoding = decoded.encoding.name(),
            "malformed byte sequences replaced with U+FFFD"
        );
    }
    Ok(decoded.text)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// The one output file of a run: created (truncated) up front, header first,
/// then records appended as they come. Buffered; dropping it flushes what
/// was written, so an aborted run keeps its earlier records.
pub struct OutputSink {
    path: PathBuf,
    out: BufWriter<File>,
    sep: char,
    records: usize,
}

impl OutputSink {
    pub fn create<S: AsRef<str>>(path: &Path, headers: &[S], sep: char) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut sink = Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            sep,
            records: 0,
        };
        write_row(&mut sink.out, headers, sep).map_err(|e| Error::io(path, e))?;
        Ok(sink)
    }

    pub fn write_record<S: AsRef<str>>(&mut self, record: &[S]) -> Result<()> {
        write_row(&mut self.out, record, self.sep).map_err(|e| Error::io(&self.path, e))?;
        self.records += 1;
        Ok(())
    }

    /// Records written so far (header excluded).
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush and close. Returns the number of records written.
    pub fn finish(mut self) -> Result<usize> {
        self.out.flush().map_err(|e| Error::io(&self.path, e))?;
        Ok(self.records)
    }
}
