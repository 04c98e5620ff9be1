// src/runner.rs
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    config::RunOptions,
    error::Result,
    file::{discover_html, read_document, OutputSink},
    progress::Progress,
    specs::results,
};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub files_processed: usize,
    pub records_written: usize,
}

/// The batch job: every `*.html` in `input_dir`, one file at a time, into a
/// single CSV at `out_path`.
///
/// The output is created (and truncated) before any input is looked at, so a
/// run over zero pages still leaves a header-only file. The first error of
/// any kind aborts the run; records already written are kept.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = crate::progress::NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let res = run_inner(opts, progress);
    progress.finish();
    res
}

fn run_inner(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let mut sink = OutputSink::create(&opts.out_path, &results::headers(), opts.sep())?;

    let inputs = discover_html(&opts.input_dir)?;
    debug!(count = inputs.len(), dir = %opts.input_dir.display(), "discovered inputs");
    progress.begin(inputs.len());

    for path in &inputs {
        progress.file_started(path);
        let html_doc = read_document(path)?;

        let rows = results::for_each_record(&html_doc, |rec| {
            sink.write_record(&rec)?;
            progress.record_written();
            Ok(())
        })
        .map_err(|e| e.at(path))?;
        debug!(file = %path.display(), rows, "document done");
    }

    let records_written = sink.finish()?;
    info!(
        files = inputs.len(),
        records = records_written,
        out = %opts.out_path.display(),
        "run complete"
    );

    Ok(RunSummary {
        out_path: opts.out_path.clone(),
        files_processed: inputs.len(),
        records_written,
    })
}
